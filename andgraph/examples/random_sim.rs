//! Builds a random structurally hashed circuit and cross-checks the scalar and 64-lane
//! evaluators against each other.
#![allow(missing_docs)]
use andgraph::{Circuit, Lit};
use clap::Parser;
use color_eyre::eyre::{bail, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[derive(Parser, Debug)]
struct Options {
    /// Seed for the random number generator.
    #[clap(long, default_value_t = 0)]
    seed: u64,
    /// Number of circuit inputs.
    #[clap(long, default_value_t = 32)]
    inputs: usize,
    /// Number of 'and' requests used to build the circuit.
    #[clap(long, default_value_t = 100_000)]
    gates: usize,
    /// Number of 64-lane simulation rounds.
    #[clap(long, default_value_t = 16)]
    rounds: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    andgraph_logger::setup();

    let opts = Options::parse();
    let mut rng = SmallRng::seed_from_u64(opts.seed);

    let mut circuit = Circuit::with_capacity(opts.inputs + opts.gates + 1);
    let mut lits: Vec<Lit> = (0..opts.inputs).map(|_| circuit.new_input()).collect();
    if lits.is_empty() {
        bail!("at least one input is required");
    }

    for _ in 0..opts.gates {
        let a = lits[rng.gen_range(0..lits.len())] ^ rng.gen::<bool>();
        let b = lits[rng.gen_range(0..lits.len())] ^ rng.gen::<bool>();
        let g = circuit.and(a, b);
        lits.push(g);
    }

    log::info!(
        "built circuit with {} inputs and {} gates from {} requests",
        circuit.input_count(),
        circuit.and_count(),
        opts.gates
    );

    let mut words = vec![0u64; circuit.len()];
    let mut bits = vec![false; circuit.len()];

    for round in 0..opts.rounds {
        for input in circuit.inputs() {
            words[input.index()] = rng.gen();
        }
        circuit.eval64(&mut words);

        for lane in 0..64 {
            for input in circuit.inputs() {
                bits[input.index()] = words[input.index()] >> lane & 1 != 0;
            }
            circuit.eval(&mut bits);

            if let Some(index) = (0..circuit.len()).find(|&i| bits[i] != (words[i] >> lane & 1 != 0))
            {
                bail!("evaluators disagree on node {index} in round {round}, lane {lane}");
            }
        }
        log::debug!("round {round} agrees on all 64 lanes");
    }

    log::info!(
        "scalar and 64-lane evaluation agree on {} assignments",
        opts.rounds * 64
    );

    Ok(())
}
