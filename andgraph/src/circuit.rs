//! Structurally hashed And-Inverter Graphs.
use std::fmt;

use andgraph_lit::{Lit, Var};
use andgraph_util::unordered_pair::UnorderedPair;

use crate::{
    node::{Node, Nodes},
    strash::Strash,
};

/// A structurally hashed And-Inverter Graph.
///
/// The circuit owns a [`Nodes`] arena and a [`Strash`] table. Gates are only created through
/// [`Circuit::and`], which simplifies trivial cases and returns an existing gate whenever one
/// with the same inputs exists. This guarantees that at most one 'and' gate exists for any
/// unordered pair of input literals.
///
/// Literals are plain values and are only meaningful for the circuit that produced them. Passing
/// a literal that is out of range for a circuit panics. A literal from a different circuit that
/// happens to be in range is not detected.
#[derive(Clone, Default)]
pub struct Circuit {
    nodes: Nodes,
    strash: Strash,
    inputs: Vec<Var>,
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.nodes, f)
    }
}

#[allow(clippy::len_without_is_empty)] // never empty, the constant node is always present
impl Circuit {
    /// The constant false literal.
    pub const F: Lit = Lit::FALSE;
    /// The constant true literal.
    pub const T: Lit = Lit::TRUE;

    /// Creates a circuit containing only the constant node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a circuit containing only the constant node with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Nodes::with_capacity(capacity),
            strash: Strash::with_capacity(capacity),
            inputs: vec![],
        }
    }

    /// Returns the number of nodes, including the constant node.
    ///
    /// This is the length required for assignments passed to [`Circuit::eval`] and
    /// [`Circuit::eval64`].
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of input nodes.
    #[inline]
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Returns the number of 'and' gate nodes.
    #[inline]
    pub fn and_count(&self) -> usize {
        self.strash.len()
    }

    /// Returns the node arena.
    #[inline]
    pub fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    /// Returns the node of a variable.
    ///
    /// # Panics
    ///
    /// Panics when the variable is out of range.
    #[inline]
    #[track_caller]
    pub fn node(&self, var: Var) -> &Node {
        self.nodes.get(var)
    }

    /// Returns the node of a variable or `None` when the variable is out of range.
    #[inline]
    pub fn try_node(&self, var: Var) -> Option<&Node> {
        self.nodes.try_get(var)
    }

    /// Returns the inputs of an 'and' gate or `None` for any other node.
    ///
    /// # Panics
    ///
    /// Panics when the variable is out of range.
    #[inline]
    #[track_caller]
    pub fn and_inputs(&self, var: Var) -> Option<UnorderedPair<Lit>> {
        self.node(var).and_inputs()
    }

    /// Adds a new input and returns its positive literal.
    pub fn new_input(&mut self) -> Lit {
        let var = self.nodes.push_input();
        self.inputs.push(var);
        var.as_lit()
    }

    /// Iterates over the positive literals of all inputs in creation order.
    pub fn inputs(&self) -> impl ExactSizeIterator<Item = Lit> + '_ {
        self.inputs.iter().map(|var| var.as_lit())
    }

    /// Iterates over all 'and' gates in creation order, which is a topological order.
    pub fn and_gates(&self) -> impl Iterator<Item = (Var, UnorderedPair<Lit>)> + '_ {
        self.nodes
            .iter()
            .filter_map(|(var, node)| node.and_inputs().map(|inputs| (var, inputs)))
    }

    /// Returns a literal for the 'and' of two literals.
    ///
    /// Trivial cases are resolved without creating a gate, in this order:
    ///
    /// 1. `and(T, b) = b` and `and(a, T) = a`
    /// 2. `and(F, b) = and(a, F) = F`
    /// 3. `and(a, a) = a`
    /// 4. `and(a, !a) = F`
    ///
    /// Otherwise the existing gate for the unordered pair `{a, b}` is returned or, if there is
    /// none, a new gate is appended. Only positive literals of gates are returned, negation is
    /// always represented by the literal's polarity.
    ///
    /// # Panics
    ///
    /// Panics when either literal is out of range for this circuit.
    #[track_caller]
    pub fn and(&mut self, a: Lit, b: Lit) -> Lit {
        self.nodes.check_lit(a);
        self.nodes.check_lit(b);

        if let Some(lit) = reduce_and(a, b) {
            return lit;
        }

        let inputs = UnorderedPair::new([a, b]);
        let (var, new) = self.strash.find_or_insert(&mut self.nodes, inputs);
        if new {
            log::trace!("{var} = and {inputs:?}");
        }
        var.as_lit()
    }

    /// Returns the literal [`Circuit::and`] would return without creating a new gate.
    ///
    /// Returns `None` when [`Circuit::and`] would need to append a new gate.
    ///
    /// # Panics
    ///
    /// Panics when either literal is out of range for this circuit.
    #[track_caller]
    pub fn find_and(&self, a: Lit, b: Lit) -> Option<Lit> {
        self.nodes.check_lit(a);
        self.nodes.check_lit(b);

        if let Some(lit) = reduce_and(a, b) {
            return Some(lit);
        }

        self.strash
            .find(&self.nodes, UnorderedPair::new([a, b]))
            .map(Var::as_lit)
    }
}

/// Resolves the 'and' of two literals when it is trivially a constant or one of its inputs.
fn reduce_and(a: Lit, b: Lit) -> Option<Lit> {
    if a == Lit::TRUE {
        Some(b)
    } else if b == Lit::TRUE {
        Some(a)
    } else if a == Lit::FALSE || b == Lit::FALSE {
        Some(Lit::FALSE)
    } else if a == b {
        Some(a)
    } else if a == !b {
        Some(Lit::FALSE)
    } else {
        None
    }
}
