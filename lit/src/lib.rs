//! Numeric identifiers for circuit variables and Boolean literals
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(missing_docs)]

pub mod lit;
pub mod pol;
pub mod var;

pub use lit::{Lit, NegativePolarityError};
pub use pol::Pol;
pub use var::Var;
