#![allow(missing_docs)] // test only
use andgraph_lit::{Lit, Pol, Var};
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[cfg(miri)]
const N: usize = 64;
#[cfg(not(miri))]
const N: usize = 4096;

#[test]
fn code_layout() {
    let mut rng = SmallRng::seed_from_u64(0);

    for _ in 0..N {
        let index = rng.gen_range(0..=Var::MAX_INDEX);
        let var = Var::from_index(index);
        let pol = Pol::neg_if(rng.gen());
        let lit = var ^ pol;

        assert_eq!(lit.var(), var);
        assert_eq!(lit.pol(), pol);
        assert_eq!(lit.index(), index);
        assert_eq!(lit.code(), (index << 1) | pol as usize);
        assert_eq!(Lit::from_code(lit.code()), lit);
    }
}

#[test]
fn order_is_lexicographic() {
    let mut rng = SmallRng::seed_from_u64(1);

    for _ in 0..N {
        let a = Var::from_index(rng.gen_range(0..1000)) ^ Pol::neg_if(rng.gen());
        let b = Var::from_index(rng.gen_range(0..1000)) ^ Pol::neg_if(rng.gen());

        assert_eq!(a.cmp(&b), (a.var(), a.pol()).cmp(&(b.var(), b.pol())));
    }
}

#[test]
fn max_code_round_trip() {
    let lit = Lit::from_code(Lit::MAX_CODE);
    assert_eq!(lit.index(), Var::MAX_INDEX);
    assert!(lit.is_neg());
}
