//! Evaluation of circuits under concrete input assignments.
use std::ops;

use andgraph_lit::Pol;

use crate::{circuit::Circuit, node::Node};

/// Values that a circuit can be evaluated over.
///
/// Implemented for `bool`, evaluating a single assignment, and for `u64`, evaluating 64
/// independent assignments at once with one assignment per bit lane.
pub trait Value: Copy + ops::BitAnd<Output = Self> + ops::BitXor<Pol, Output = Self> {
    /// The value of the constant node, false in every lane.
    const FALSE: Self;
}

impl Value for bool {
    const FALSE: Self = false;
}

impl Value for u64 {
    const FALSE: Self = 0;
}

impl Circuit {
    /// Evaluates all 'and' gates for the input values stored in `values`.
    ///
    /// The slice is indexed by variable. Entries of input variables are read, entries of 'and'
    /// gates are overwritten with the gate's value and the constant entry is reset to
    /// [`Value::FALSE`]. Entries beyond [`Circuit::len`] are left untouched. The value of any
    /// literal can afterwards be obtained via `lit.lookup(|var| values[var.index()])`.
    ///
    /// # Panics
    ///
    /// Panics when `values` is shorter than [`Circuit::len`].
    #[track_caller]
    pub fn eval_values<T: Value>(&self, values: &mut [T]) {
        assert!(
            values.len() >= self.len(),
            "assignment of length {} is too short for a circuit with {} nodes",
            values.len(),
            self.len()
        );

        values[0] = T::FALSE;

        for (var, node) in self.nodes().iter() {
            if let Node::And(inputs) = node {
                let [a, b] = inputs.into_values();
                let value_a = a.lookup(|input| values[input.index()]);
                let value_b = b.lookup(|input| values[input.index()]);
                values[var.index()] = value_a & value_b;
            }
        }
    }

    /// Evaluates the circuit for a single assignment.
    ///
    /// See [`Circuit::eval_values`] for the layout of `values`.
    ///
    /// # Panics
    ///
    /// Panics when `values` is shorter than [`Circuit::len`].
    #[track_caller]
    pub fn eval(&self, values: &mut [bool]) {
        self.eval_values(values)
    }

    /// Evaluates the circuit for 64 assignments in parallel, one per bit lane.
    ///
    /// See [`Circuit::eval_values`] for the layout of `values`.
    ///
    /// # Panics
    ///
    /// Panics when `values` is shorter than [`Circuit::len`].
    #[track_caller]
    pub fn eval64(&self, values: &mut [u64]) {
        self.eval_values(values)
    }

    /// Evaluates the circuit for input values given in input creation order.
    ///
    /// Returns the values of all nodes indexed by variable.
    ///
    /// # Panics
    ///
    /// Panics when the number of given values differs from [`Circuit::input_count`].
    #[track_caller]
    pub fn eval_inputs<T: Value>(&self, input_values: &[T]) -> Vec<T> {
        assert_eq!(
            input_values.len(),
            self.input_count(),
            "expected one value per circuit input"
        );

        let mut values = vec![T::FALSE; self.len()];
        for (input, &value) in self.inputs().zip(input_values) {
            values[input.index()] = value;
        }
        self.eval_values(&mut values);
        values
    }
}
