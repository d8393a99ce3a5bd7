//! Structurally hashed And-Inverter Graphs.
//!
//! An And-Inverter Graph (AIG) is a DAG of two input 'and' gates where negation is carried by the
//! [`Lit`]s referring to nodes rather than by separate nodes. A [`Circuit`] keeps its AIG in
//! canonical form: gates are only created through [`Circuit::and`], which resolves trivial cases
//! and returns an existing gate whenever one with the same unordered pair of inputs exists.
//!
//! ```
//! use andgraph::Circuit;
//!
//! let mut circuit = Circuit::new();
//! let a = circuit.new_input();
//! let b = circuit.new_input();
//!
//! let g = circuit.and(a, b);
//! assert_eq!(circuit.and(b, a), g);
//! assert_eq!(circuit.and(a, !a), Circuit::F);
//!
//! let mut values = vec![false; circuit.len()];
//! values[a.index()] = true;
//! values[b.index()] = true;
//! circuit.eval(&mut values);
//! assert!(values[g.index()]);
//! ```
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(missing_docs)]

pub mod circuit;
pub mod node;
pub mod sim;
pub mod strash;

mod derived;

pub use andgraph_lit::{Lit, NegativePolarityError, Pol, Var};
pub use andgraph_util::unordered_pair::UnorderedPair;

pub use circuit::Circuit;
pub use node::{Node, Nodes};
pub use sim::Value;
