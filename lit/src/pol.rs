use std::{fmt, ops};

/// Either the identity function on, or negation of Booleans.
///
/// With only two possible values, this type is itself isomorphic to `bool`. Using a separate
/// type for the polarity of a literal keeps parity errors out of code that resolves literals
/// against assignments: applying a polarity is always `value ^ pol`, whether `value` is a single
/// `bool` or a `u64` holding 64 independent lanes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Pol {
    /// Positive polarity, represents the identity function.
    #[default]
    Pos = 0,
    /// Negative polarity, represents Boolean negation.
    Neg = 1,
}

impl fmt::Debug for Pol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Pol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pos => write!(f, "="),
            Self::Neg => write!(f, "!"),
        }
    }
}

impl Pol {
    /// Returns the negative polarity if the given condition is `true` and a positive polarity
    /// otherwise.
    #[inline(always)]
    pub fn neg_if(neg: bool) -> Self {
        if neg {
            Self::Neg
        } else {
            Self::Pos
        }
    }

    /// Returns the positive polarity if the given condition is `true` and a negative polarity
    /// otherwise.
    #[inline(always)]
    pub fn pos_if(pos: bool) -> Self {
        Self::neg_if(!pos)
    }

    /// Returns `true` when this is the negative polarity.
    #[inline(always)]
    pub fn is_neg(self) -> bool {
        self == Self::Neg
    }

    /// Returns `true` when this is the positive polarity.
    #[inline(always)]
    pub fn is_pos(self) -> bool {
        self == Self::Pos
    }

    /// Returns a word with all bits set for the negative and all bits clear for the positive
    /// polarity.
    #[inline(always)]
    pub fn mask64(self) -> u64 {
        (self as u64).wrapping_neg()
    }
}

impl ops::BitXor for Pol {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::neg_if(self.is_neg() ^ rhs.is_neg())
    }
}

impl ops::BitXorAssign for Pol {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs
    }
}

impl ops::Not for Pol {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self ^ Pol::Neg
    }
}

impl ops::BitXor<Pol> for bool {
    type Output = bool;

    #[inline(always)]
    fn bitxor(self, rhs: Pol) -> Self::Output {
        self ^ rhs.is_neg()
    }
}

impl ops::BitXor<Pol> for &'_ bool {
    type Output = bool;

    #[inline(always)]
    fn bitxor(self, rhs: Pol) -> Self::Output {
        *self ^ rhs
    }
}

impl ops::BitXorAssign<Pol> for bool {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Pol) {
        *self ^= rhs.is_neg()
    }
}

impl ops::BitXor<Pol> for u64 {
    type Output = u64;

    #[inline(always)]
    fn bitxor(self, rhs: Pol) -> Self::Output {
        self ^ rhs.mask64()
    }
}

impl ops::BitXor<Pol> for &'_ u64 {
    type Output = u64;

    #[inline(always)]
    fn bitxor(self, rhs: Pol) -> Self::Output {
        *self ^ rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition() {
        assert_eq!(Pol::Pos ^ Pol::Pos, Pol::Pos);
        assert_eq!(Pol::Pos ^ Pol::Neg, Pol::Neg);
        assert_eq!(Pol::Neg ^ Pol::Neg, Pol::Pos);
        assert_eq!(!Pol::Pos, Pol::Neg);
    }

    #[test]
    fn application() {
        assert!(true ^ Pol::Pos);
        assert!(false ^ Pol::Neg);
        assert_eq!(0u64 ^ Pol::Neg, u64::MAX);
        assert_eq!(0x1234u64 ^ Pol::Pos, 0x1234);
        assert_eq!(Pol::neg_if(true), Pol::Neg);
        assert_eq!(Pol::pos_if(true), Pol::Pos);
    }
}
