use std::{fmt, ops};

use super::{lit::Lit, pol::Pol};

/// Numeric identifier for a variable.
///
/// Every node of a circuit is identified by a variable. The variable with index `0` is reserved
/// for the constant node, all other variables are assigned in construction order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Var(u32);

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            write!(f, "0")
        } else {
            write!(f, "v{}", self.0)
        }
    }
}

impl ops::BitXor<Pol> for Var {
    type Output = Lit;

    #[inline(always)]
    fn bitxor(self, rhs: Pol) -> Self::Output {
        self.lit(rhs)
    }
}

impl ops::BitXor<Pol> for &'_ Var {
    type Output = Lit;

    #[inline(always)]
    fn bitxor(self, rhs: Pol) -> Self::Output {
        *self ^ rhs
    }
}

impl ops::BitXor<bool> for Var {
    type Output = Lit;

    #[inline(always)]
    fn bitxor(self, rhs: bool) -> Self::Output {
        self.lit(Pol::neg_if(rhs))
    }
}

impl Var {
    /// The variable of the constant node.
    pub const CONST: Self = Self(0);

    /// The largest valid [`index`][`Self::index`] for a variable.
    ///
    /// This is chosen so that the [`code`][`Lit::code`] of every literal fits into a `u32`.
    pub const MAX_INDEX: usize = (u32::MAX >> 1) as usize;

    /// Returns the variable for a given index.
    ///
    /// # Panics
    ///
    /// Panics when `index > Var::MAX_INDEX`.
    #[inline(always)]
    pub fn from_index(index: usize) -> Self {
        Self::try_from_index(index)
            .unwrap_or_else(|| panic!("variable index {index} exceeds {}", Self::MAX_INDEX))
    }

    /// Returns the variable for a given index or `None` if the index is out of range.
    #[inline(always)]
    pub fn try_from_index(index: usize) -> Option<Self> {
        if index <= Self::MAX_INDEX {
            Some(Self(index as u32))
        } else {
            None
        }
    }

    /// Returns the literal for this variable with the given polarity.
    #[inline(always)]
    pub fn lit(self, pol: Pol) -> Lit {
        Lit::from_code_u32((self.0 << 1) | pol as u32)
    }

    /// Returns a positive polarity literal for the variable.
    #[inline(always)]
    pub fn as_lit(self) -> Lit {
        self.lit(Pol::Pos)
    }

    /// Returns a negative polarity literal for the variable.
    #[inline(always)]
    pub fn as_neg_lit(self) -> Lit {
        self.lit(Pol::Neg)
    }

    /// Returns the index of the variable.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns whether this is the variable of the constant node.
    #[inline(always)]
    pub fn is_const(self) -> bool {
        self.0 == 0
    }
}
