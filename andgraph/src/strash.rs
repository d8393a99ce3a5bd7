//! Structural hashing of 'and' gates.
use andgraph_lit::{Lit, Var};
use andgraph_util::{hash::hash_value, unordered_pair::UnorderedPair};
use hashbrown::{hash_table::Entry, HashTable};

use crate::node::Nodes;

/// Deduplication index mapping canonical 'and' gate inputs to the gate realizing them.
///
/// The table only stores the variables of 'and' gates. Hashing and equality are computed from the
/// inputs stored in the corresponding [`Nodes`] arena, so neither a reallocation of the arena nor
/// a rehash of this table can invalidate an entry. Every lookup must be given the arena the table
/// was populated from.
#[derive(Clone, Default, Debug)]
pub struct Strash {
    table: HashTable<Var>,
}

impl Strash {
    /// Creates an empty table with room for `capacity` gates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
        }
    }

    /// Returns the number of indexed gates.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` when no gate is indexed.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of gates the table can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the gate with the given inputs, if present.
    pub fn find(&self, nodes: &Nodes, inputs: UnorderedPair<Lit>) -> Option<Var> {
        self.table
            .find(hash_value(inputs), |&var| nodes.and_inputs(var) == inputs)
            .copied()
    }

    /// Returns the gate with the given inputs, appending a new gate to `nodes` if none exists.
    ///
    /// The returned flag is `true` when a new gate was appended.
    pub fn find_or_insert(&mut self, nodes: &mut Nodes, inputs: UnorderedPair<Lit>) -> (Var, bool) {
        let capacity = self.table.capacity();

        let entry = self.table.entry(
            hash_value(inputs),
            |&var| nodes.and_inputs(var) == inputs,
            |&var| hash_value(nodes.and_inputs(var)),
        );

        let found = match entry {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => {
                let var = nodes.push_and(inputs);
                entry.insert(var);
                (var, true)
            }
        };

        if self.table.capacity() != capacity {
            log::debug!(
                "strash table grew from {} to {} entries ({} gates)",
                capacity,
                self.table.capacity(),
                self.table.len(),
            );
        }

        found
    }

    /// Iterates over all indexed gates in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Var> + '_ {
        self.table.iter().copied()
    }
}
