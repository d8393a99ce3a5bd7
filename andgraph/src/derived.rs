//! Gates derived from 'and' by composition.
//!
//! None of these introduce new node kinds: every result is built from [`Circuit::and`] and
//! literal negation, so all of them benefit from structural hashing.
use andgraph_lit::Lit;

use crate::circuit::Circuit;

impl Circuit {
    /// Returns a literal for the 'or' of two literals.
    #[track_caller]
    pub fn or(&mut self, a: Lit, b: Lit) -> Lit {
        !self.and(!a, !b)
    }

    /// Returns a literal for the implication `a -> b`.
    #[track_caller]
    pub fn implies(&mut self, a: Lit, b: Lit) -> Lit {
        self.or(!a, b)
    }

    /// Returns a literal for the exclusive 'or' of two literals.
    ///
    /// This uses three 'and' gates.
    #[track_caller]
    pub fn xor(&mut self, a: Lit, b: Lit) -> Lit {
        let a_only = self.and(a, !b);
        let b_only = self.and(!a, b);
        self.or(a_only, b_only)
    }

    /// Returns a literal that is true when both literals have the same value.
    #[track_caller]
    pub fn xnor(&mut self, a: Lit, b: Lit) -> Lit {
        !self.xor(a, b)
    }

    /// Returns a literal for `if cond { then_lit } else { else_lit }`.
    #[track_caller]
    pub fn choice(&mut self, cond: Lit, then_lit: Lit, else_lit: Lit) -> Lit {
        let then_case = self.and(cond, then_lit);
        let else_case = self.and(!cond, else_lit);
        self.or(then_case, else_case)
    }

    /// Returns a literal for the 'and' of all given literals.
    ///
    /// The empty conjunction is [`Circuit::T`].
    #[track_caller]
    pub fn ands(&mut self, lits: impl IntoIterator<Item = Lit>) -> Lit {
        lits.into_iter().fold(Circuit::T, |acc, lit| self.and(acc, lit))
    }

    /// Returns a literal for the 'or' of all given literals.
    ///
    /// The empty disjunction is [`Circuit::F`].
    #[track_caller]
    pub fn ors(&mut self, lits: impl IntoIterator<Item = Lit>) -> Lit {
        !self.ands(lits.into_iter().map(|lit| !lit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truth_table(circuit: &Circuit, inputs: &[Lit], output: Lit) -> Vec<bool> {
        (0..1usize << inputs.len())
            .map(|row| {
                let mut values = vec![false; circuit.len()];
                for (bit, input) in inputs.iter().enumerate() {
                    values[input.index()] = row >> bit & 1 != 0;
                }
                circuit.eval(&mut values);
                output.lookup(|var| values[var.index()])
            })
            .collect()
    }

    #[test]
    fn binary_gates() {
        let mut circuit = Circuit::new();
        let a = circuit.new_input();
        let b = circuit.new_input();

        // rows are (a, b) = (0, 0), (1, 0), (0, 1), (1, 1)
        let or = circuit.or(a, b);
        assert_eq!(truth_table(&circuit, &[a, b], or), [false, true, true, true]);
        let implies = circuit.implies(a, b);
        assert_eq!(
            truth_table(&circuit, &[a, b], implies),
            [true, false, true, true]
        );
        let xor = circuit.xor(a, b);
        assert_eq!(
            truth_table(&circuit, &[a, b], xor),
            [false, true, true, false]
        );
        let xnor = circuit.xnor(b, a);
        assert_eq!(xnor, !xor);
    }

    #[test]
    fn choice() {
        let mut circuit = Circuit::new();
        let [c, t, e] = [(); 3].map(|_| circuit.new_input());
        let mux = circuit.choice(c, t, e);

        let table = truth_table(&circuit, &[c, t, e], mux);
        for (row, value) in table.into_iter().enumerate() {
            let (vc, vt, ve) = (row & 1 != 0, row & 2 != 0, row & 4 != 0);
            assert_eq!(value, if vc { vt } else { ve });
        }
    }

    #[test]
    fn folds() {
        let mut circuit = Circuit::new();
        assert_eq!(circuit.ands([]), Circuit::T);
        assert_eq!(circuit.ors([]), Circuit::F);

        let lits: Vec<Lit> = (0..4).map(|_| circuit.new_input()).collect();
        let all = circuit.ands(lits.iter().copied());
        let any = circuit.ors(lits.iter().copied());

        let all_table = truth_table(&circuit, &lits, all);
        let any_table = truth_table(&circuit, &lits, any);
        for row in 0..16 {
            assert_eq!(all_table[row], row == 15);
            assert_eq!(any_table[row], row != 0);
        }

        assert_eq!(circuit.ands([lits[0], Circuit::F, lits[1]]), Circuit::F);
        assert_eq!(circuit.ors([lits[0], Circuit::T]), Circuit::T);
    }
}
