//! Append-only arena of circuit nodes.
use std::{fmt, ops};

use andgraph_lit::{Lit, Var};
use andgraph_util::unordered_pair::UnorderedPair;

/// A single node of an And-Inverter Graph.
///
/// Negation is never represented by a node, it is carried by the [`Lit`]s referring to nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Node {
    /// The constant node, always stored at [`Var::CONST`]. Its positive literal is false.
    Const,
    /// A free input variable.
    Input,
    /// A two input 'and' gate with its inputs in canonical (sorted) order.
    And(UnorderedPair<Lit>),
}

impl Node {
    /// Returns the inputs of an 'and' gate or `None` for any other node.
    #[inline]
    pub fn and_inputs(&self) -> Option<UnorderedPair<Lit>> {
        match *self {
            Node::And(inputs) => Some(inputs),
            _ => None,
        }
    }

    /// Returns `true` for [`Node::Input`].
    #[inline]
    pub fn is_input(&self) -> bool {
        matches!(self, Node::Input)
    }

    /// Returns `true` for [`Node::And`].
    #[inline]
    pub fn is_and(&self) -> bool {
        matches!(self, Node::And(_))
    }
}

/// Growable storage of [`Node`]s indexed by [`Var`].
///
/// Nodes are only ever appended, so a variable, once assigned, keeps referring to the same node
/// for the lifetime of the arena, even when the backing storage is reallocated. Every 'and' gate
/// refers only to nodes stored before it, which makes the storage order a topological order.
#[derive(Clone)]
pub struct Nodes {
    nodes: Vec<Node>,
}

impl Default for Nodes {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Nodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl ops::Index<Var> for Nodes {
    type Output = Node;

    #[inline]
    fn index(&self, var: Var) -> &Self::Output {
        self.get(var)
    }
}

#[allow(clippy::len_without_is_empty)] // never empty, the constant node is always present
impl Nodes {
    /// Creates an arena containing only the constant node.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an arena containing only the constant node with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::Const);
        Self { nodes }
    }

    /// Returns the number of stored nodes, including the constant node.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    fn next_var(&self) -> Var {
        Var::try_from_index(self.nodes.len()).unwrap_or_else(|| {
            panic!(
                "node arena exhausted: cannot store more than {} variables",
                Var::MAX_INDEX
            )
        })
    }

    /// Returns `true` when the literal's variable refers to a stored node.
    #[inline]
    pub fn contains(&self, lit: Lit) -> bool {
        lit.index() < self.nodes.len()
    }

    /// Checks that the literal's variable refers to a stored node.
    ///
    /// # Panics
    ///
    /// Panics with a message naming the literal when it is out of range.
    #[inline]
    #[track_caller]
    pub fn check_lit(&self, lit: Lit) {
        assert!(
            self.contains(lit),
            "literal {lit} is out of range for a circuit with {} nodes",
            self.nodes.len()
        );
    }

    /// Appends an input node and returns its variable.
    pub fn push_input(&mut self) -> Var {
        let var = self.next_var();
        self.nodes.push(Node::Input);
        var
    }

    /// Appends an 'and' gate node and returns its variable.
    ///
    /// This does not perform any structural hashing, see [`Strash`][crate::strash::Strash] for
    /// that.
    ///
    /// # Panics
    ///
    /// Panics when an input refers to a variable that is not yet stored.
    #[track_caller]
    pub fn push_and(&mut self, inputs: UnorderedPair<Lit>) -> Var {
        for &input in inputs.iter() {
            self.check_lit(input);
        }
        let var = self.next_var();
        self.nodes.push(Node::And(inputs));
        var
    }

    /// Returns the node of a variable.
    ///
    /// # Panics
    ///
    /// Panics when the variable is out of range.
    #[inline]
    #[track_caller]
    pub fn get(&self, var: Var) -> &Node {
        self.try_get(var).unwrap_or_else(|| {
            panic!(
                "variable {var} is out of range for a circuit with {} nodes",
                self.nodes.len()
            )
        })
    }

    /// Returns the node of a variable or `None` when the variable is out of range.
    #[inline]
    pub fn try_get(&self, var: Var) -> Option<&Node> {
        self.nodes.get(var.index())
    }

    /// Returns the inputs of an 'and' gate.
    ///
    /// # Panics
    ///
    /// Panics when `var` is not an 'and' gate.
    #[inline]
    #[track_caller]
    pub fn and_inputs(&self, var: Var) -> UnorderedPair<Lit> {
        match self.get(var) {
            Node::And(inputs) => *inputs,
            node => panic!("variable {var} is not an and gate but {node:?}"),
        }
    }

    /// Iterates over all nodes in storage order together with their variables.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Var, &Node)> + ExactSizeIterator + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (Var::from_index(index), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_const() {
        let nodes = Nodes::new();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[Var::CONST], Node::Const);
    }

    #[test]
    fn append_order() {
        let mut nodes = Nodes::new();
        let a = nodes.push_input();
        let b = nodes.push_input();
        let g = nodes.push_and([b.as_lit(), !a.as_lit()].into());

        assert_eq!((a.index(), b.index(), g.index()), (1, 2, 3));
        assert!(nodes[a].is_input());
        assert!(nodes[g].is_and());
        assert_eq!(nodes.and_inputs(g).into_values(), [!a.as_lit(), b.as_lit()]);
        assert_eq!(
            nodes.iter().map(|(var, _)| var.index()).collect::<Vec<_>>(),
            [0, 1, 2, 3]
        );
    }

    #[test]
    fn ids_survive_growth() {
        let mut nodes = Nodes::with_capacity(2);
        let vars: Vec<Var> = (0..1000).map(|_| nodes.push_input()).collect();
        for (i, var) in vars.iter().enumerate() {
            assert_eq!(var.index(), i + 1);
            assert!(nodes[*var].is_input());
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn lookup_out_of_range() {
        let nodes = Nodes::new();
        nodes.get(Var::from_index(1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn and_with_future_input() {
        let mut nodes = Nodes::new();
        let a = nodes.push_input();
        nodes.push_and([a.as_lit(), Var::from_index(2).as_lit()].into());
    }

    #[test]
    #[should_panic(expected = "not an and gate")]
    fn and_inputs_of_input() {
        let mut nodes = Nodes::new();
        let a = nodes.push_input();
        nodes.and_inputs(a);
    }
}
