use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use otter_ssat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        quantifier::{Quantifier, QuantifierKind},
    },
};

mod common;
use common::{approximately, exist_random_configurations, outer_world_configurations, reference_probability};

const PROBABILITIES: [f64; 4] = [0.1, 0.25, 0.5, 0.75];

/// A formula with the given levels, as (quantifiers, clauses).
fn random_formula(rng: &mut StdRng, kinds: &[QuantifierKind]) -> (Vec<(Quantifier, Vec<Atom>)>, Vec<Vec<CLiteral>>) {
    let mut next: Atom = 1;
    let mut prefix = Vec::default();

    for kind in kinds {
        let size = rng.gen_range(1..=3);
        for _ in 0..size {
            let quantifier = match kind {
                QuantifierKind::Random => Quantifier::Random(*PROBABILITIES.choose(rng).unwrap_or(&0.5)),
                QuantifierKind::Exist => Quantifier::Exist,
                QuantifierKind::Forall => Quantifier::Forall,
            };
            prefix.push((quantifier, vec![next]));
            next += 1;
        }
    }

    let atoms = next - 1;
    let clauses = (0..rng.gen_range(2..=7))
        .map(|_| {
            (0..rng.gen_range(1..=3))
                .map(|_| CLiteral::new(rng.gen_range(1..=atoms), rng.gen_bool(0.5)))
                .collect::<Vec<_>>()
        })
        .collect();

    (prefix, clauses)
}

fn build(formula: &(Vec<(Quantifier, Vec<Atom>)>, Vec<Vec<CLiteral>>), config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    for (quantifier, atoms) in &formula.0 {
        assert!(the_context.quantify(*quantifier, atoms).is_ok());
    }
    for clause in &formula.1 {
        assert!(the_context.add_clause(clause.clone()).is_ok());
    }
    the_context
}

fn cross_check(seed: u64, kinds: &[QuantifierKind], instances: usize, configurations: Vec<Config>) {
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..instances {
        let formula = random_formula(&mut rng, kinds);
        let expected = reference_probability(&build(&formula, Config::default()));

        for config in &configurations {
            let mut the_context = build(&formula, config.clone());
            assert_eq!(the_context.solve(), Ok(Report::Exact));
            assert!(
                approximately(the_context.bounds.lower(), expected)
                    && approximately(the_context.bounds.upper(), expected),
                "bounds [{}, {}] against {expected} for {formula:?} with {config:?}",
                the_context.bounds.lower(),
                the_context.bounds.upper()
            );
        }
    }
}

mod outer_worlds {
    use super::*;
    use QuantifierKind::*;

    #[test]
    fn random_exist() {
        cross_check(1, &[Random, Exist], 60, outer_world_configurations());
    }

    #[test]
    fn forall_exist() {
        cross_check(2, &[Forall, Exist], 60, outer_world_configurations());
    }

    #[test]
    fn random_exist_random() {
        cross_check(3, &[Random, Exist, Random], 40, outer_world_configurations());
    }
}

mod exist_random {
    use super::*;
    use QuantifierKind::*;

    #[test]
    fn exist_random() {
        cross_check(4, &[Exist, Random], 25, exist_random_configurations());
    }

    #[test]
    fn exist_random_exist() {
        cross_check(5, &[Exist, Random, Exist], 25, exist_random_configurations());
    }

    #[test]
    fn witness_attains_lower_bound() {
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..40 {
            let formula = random_formula(&mut rng, &[Exist, Random]);
            let mut the_context = build(&formula, Config::default());
            assert_eq!(the_context.solve(), Ok(Report::Exact));

            let Some(witness) = the_context.witness.clone() else {
                assert_eq!(the_context.bounds.lower(), 0.0);
                continue;
            };

            let mut fixed = formula.clone();
            for literal in witness {
                fixed.1.push(vec![literal]);
            }
            let expected = reference_probability(&build(&fixed, Config::default()));
            assert!(approximately(the_context.bounds.lower(), expected));
        }
    }
}
