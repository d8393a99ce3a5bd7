#![allow(missing_docs)] // test only
use andgraph::{Circuit, Lit, Node};
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[cfg(miri)]
const N: usize = 64;
#[cfg(not(miri))]
const N: usize = 1020;

fn random_lit(rng: &mut impl Rng, circuit: &Circuit) -> Lit {
    let var = andgraph::Var::from_index(rng.gen_range(0..circuit.len()));
    var ^ rng.gen::<bool>()
}

#[test]
fn grow_strash() {
    let mut circuit = Circuit::new();
    let inputs: Vec<Lit> = (0..N).map(|_| circuit.new_input()).collect();

    let gates: Vec<Lit> = (0..N / 2)
        .map(|i| circuit.and(inputs[i], inputs[N - 1 - i]))
        .collect();

    let len = circuit.len();
    assert_eq!(len, 1 + N + N / 2);

    for (i, &gate) in gates.iter().enumerate() {
        assert_eq!(circuit.and(inputs[i], inputs[N - 1 - i]), gate);
        assert_eq!(circuit.and(inputs[N - 1 - i], inputs[i]), gate);
    }
    assert_eq!(circuit.len(), len);
}

#[test]
fn logic_simplifications() {
    let mut circuit = Circuit::new();
    let a = circuit.new_input();
    let b = circuit.new_input();

    let x = circuit.new_input();
    assert_eq!(circuit.and(Circuit::T, x), x);
    let y = circuit.new_input();
    assert_eq!(circuit.and(Circuit::F, y), Circuit::F);
    assert_eq!(circuit.and(a, a), a);
    assert_eq!(circuit.and(a, !a), Circuit::F);

    let ab = circuit.and(a, b);
    let ba = circuit.and(b, a);
    assert_eq!(ab, ba);

    let c = circuit.new_input();
    let d = circuit.new_input();
    let cd = circuit.and(c, d);
    for lit in [a, b, x, y, ab] {
        assert_ne!(cd, lit);
        assert_ne!(cd, !lit);
    }
}

#[test]
fn random_construction_is_canonical() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut circuit = Circuit::new();
    for _ in 0..16 {
        circuit.new_input();
    }

    let mut requests = vec![];
    for _ in 0..N * 4 {
        let a = random_lit(&mut rng, &circuit);
        let b = random_lit(&mut rng, &circuit);
        let g = circuit.and(a, b);
        requests.push((a, b, g));
    }

    let len = circuit.len();
    for &(a, b, g) in &requests {
        assert_eq!(circuit.and(a, b), g);
        assert_eq!(circuit.and(b, a), g);
        assert_eq!(circuit.find_and(a, b), Some(g));
    }
    assert_eq!(circuit.len(), len);

    // At most one gate per unordered input pair and no gate with trivially reducible inputs.
    let mut seen = std::collections::HashSet::new();
    for (var, inputs) in circuit.and_gates() {
        assert!(seen.insert(inputs), "duplicate gate for {inputs:?}");
        let [a, b] = inputs.into_values();
        assert!(a < b);
        assert!(!a.is_const() && !b.is_const());
        assert_ne!(a.var(), b.var());
        assert!(a.index() < var.index() && b.index() < var.index());
    }
    assert_eq!(seen.len(), circuit.and_count());
    assert_eq!(
        circuit.nodes().iter().filter(|(_, node)| **node == Node::Input).count(),
        circuit.input_count()
    );
}
