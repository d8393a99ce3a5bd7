use std::{fmt, ops};

use super::{pol::Pol, var::Var};

/// Numeric identifier for a Boolean literal.
///
/// A literal consists of a [variable][`Var`] and a [polarity][`Pol`]. A literal with a positive
/// polarity has the value of its variable while a literal with a negative polarity has the
/// negated value of its variable. Negation never refers to a separate node, it is carried by the
/// literal alone.
///
/// The variable and polarity are combined into a single number, called the
/// [`code`][`Self::code`]. The variable index can be obtained by shifting the code one bit to the
/// right with an even code corresponding to a positive and an odd code corresponding to a negative
/// polarity literal. Literals are ordered by their code, which is the lexicographic order on
/// `(variable, polarity)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Lit(u32);

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const() {
            return match self.pol() {
                Pol::Pos => write!(f, "0"),
                Pol::Neg => write!(f, "1"),
            };
        }
        let prefix = match self.pol() {
            Pol::Pos => "",
            Pol::Neg => "!",
        };
        write!(f, "{}{}", prefix, self.var())
    }
}

impl From<Var> for Lit {
    #[inline(always)]
    fn from(var: Var) -> Self {
        var.as_lit()
    }
}

/// Error returned when converting a negative polarity literal into a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NegativePolarityError(pub Var);

impl fmt::Display for NegativePolarityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "literal !{} has negative polarity", self.0)
    }
}

impl std::error::Error for NegativePolarityError {}

impl TryFrom<Lit> for Var {
    type Error = NegativePolarityError;

    fn try_from(lit: Lit) -> Result<Self, Self::Error> {
        if lit.is_pos() {
            Ok(lit.var())
        } else {
            Err(NegativePolarityError(lit.var()))
        }
    }
}

impl Lit {
    /// The literal representing constant false/0/low.
    pub const FALSE: Self = Self(0);
    /// The literal representing constant true/1/high.
    pub const TRUE: Self = Self(1);

    /// The largest valid [`code`][`Self::code`] for a literal.
    pub const MAX_CODE: usize = (Var::MAX_INDEX << 1) | 1;

    #[inline(always)]
    pub(crate) fn from_code_u32(code: u32) -> Self {
        Self(code)
    }

    /// Returns the literal for a given code.
    ///
    /// # Panics
    ///
    /// Panics when `code > Lit::MAX_CODE`.
    #[inline(always)]
    pub fn from_code(code: usize) -> Self {
        assert!(
            code <= Self::MAX_CODE,
            "literal code {code} exceeds {}",
            Self::MAX_CODE
        );
        Self(code as u32)
    }

    /// Returns the variable of the literal.
    #[inline(always)]
    pub fn var(self) -> Var {
        Var::from_index(self.index())
    }

    /// Returns the polarity of the literal.
    #[inline(always)]
    pub fn pol(self) -> Pol {
        Pol::neg_if(self.0 & 1 != 0)
    }

    /// Returns the positive polarity literal with the same variable.
    #[inline(always)]
    pub fn as_pos(self) -> Self {
        Self(self.0 & !1)
    }

    /// Returns the negative polarity literal with the same variable.
    #[inline(always)]
    pub fn as_neg(self) -> Self {
        Self(self.0 | 1)
    }

    /// Returns whether this literal has positive polarity.
    #[inline(always)]
    pub fn is_pos(self) -> bool {
        self.0 & 1 == 0
    }

    /// Returns whether this literal has negative polarity.
    #[inline(always)]
    pub fn is_neg(self) -> bool {
        !self.is_pos()
    }

    /// Resolves the literal through a value assigned to its variable.
    ///
    /// This is equivalent to `f(self.var()) ^ self.pol()`, i.e. the value is negated for negative
    /// polarity literals.
    #[inline(always)]
    pub fn lookup<T: ops::BitXor<Pol>>(self, f: impl FnOnce(Var) -> T) -> T::Output {
        f(self.var()) ^ self.pol()
    }

    /// Returns the index of the literal's variable.
    #[inline(always)]
    pub fn index(self) -> usize {
        (self.0 >> 1) as usize
    }

    /// Returns the literal's code.
    #[inline(always)]
    pub fn code(self) -> usize {
        self.0 as usize
    }

    /// Returns whether this literal is [`Self::FALSE`] or [`Self::TRUE`].
    #[inline(always)]
    pub fn is_const(self) -> bool {
        self.0 < 2
    }
}

impl ops::BitXor<Pol> for Lit {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Pol) -> Self::Output {
        Self(self.0 ^ rhs as u32)
    }
}

impl ops::BitXor<Pol> for &'_ Lit {
    type Output = Lit;

    #[inline(always)]
    fn bitxor(self, rhs: Pol) -> Self::Output {
        *self ^ rhs
    }
}

impl ops::BitXorAssign<Pol> for Lit {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Pol) {
        *self = *self ^ rhs;
    }
}

impl ops::BitXor<bool> for Lit {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: bool) -> Self::Output {
        Self(self.0 ^ rhs as u32)
    }
}

impl ops::BitXorAssign<bool> for Lit {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: bool) {
        *self = *self ^ rhs;
    }
}

impl ops::Not for Lit {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self(self.0 ^ 1)
    }
}

impl ops::Not for &'_ Lit {
    type Output = Lit;

    #[inline(always)]
    fn not(self) -> Self::Output {
        !*self
    }
}
