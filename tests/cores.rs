use rand::{rngs::StdRng, Rng, SeedableRng};

use otter_ssat::{
    config::Config,
    context::Context,
    oracle::SatOracle,
    reports::Satisfiability,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        quantifier::Quantifier,
    },
};

mod common;

const OUTER: Atom = 5;
const INNER: Atom = 3;

fn random_context(rng: &mut StdRng) -> Context {
    let mut the_context = Context::from_config(Config::default());
    let outer = (1..=OUTER).collect::<Vec<_>>();
    let inner = (OUTER + 1..=OUTER + INNER).collect::<Vec<_>>();
    assert!(the_context.quantify(Quantifier::Random(0.5), &outer).is_ok());
    assert!(the_context.quantify(Quantifier::Exist, &inner).is_ok());

    for _ in 0..rng.gen_range(4..10) {
        let width = rng.gen_range(1..=3);
        let clause = (0..width)
            .map(|_| CLiteral::new(rng.gen_range(1..=OUTER + INNER), rng.gen_bool(0.5)))
            .collect::<Vec<_>>();
        assert!(the_context.add_clause(clause).is_ok());
    }
    the_context
}

fn world(bits: u32) -> Vec<CLiteral> {
    (1..=OUTER)
        .map(|atom| CLiteral::new(atom, bits & (1 << (atom - 1)) != 0))
        .collect()
}

mod minimal_cores {
    use super::*;

    #[test]
    fn sound_and_minimal() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut checked = 0;

        for _ in 0..40 {
            let mut the_context = random_context(&mut rng);

            for bits in 0..(1 << OUTER) {
                let assumptions = world(bits);
                if the_context.primary.solve_given(&assumptions) != Ok(Satisfiability::Unsatisfiable) {
                    continue;
                }

                let Ok(core) = the_context.minimal_core(assumptions.clone()) else {
                    panic!("core minimisation failed");
                };
                checked += 1;

                assert!(core.iter().all(|literal| assumptions.contains(literal)));
                assert_eq!(
                    the_context.primary.solve_given(&core),
                    Ok(Satisfiability::Unsatisfiable)
                );

                for index in 0..core.len() {
                    let mut smaller = core.clone();
                    smaller.remove(index);
                    assert_eq!(
                        the_context.primary.solve_given(&smaller),
                        Ok(Satisfiability::Satisfiable)
                    );
                }
            }
        }

        assert!(checked > 0);
    }
}

mod hitting_sets {
    use super::*;

    #[test]
    fn coverage() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut checked = 0;

        for _ in 0..40 {
            let mut the_context = random_context(&mut rng);

            for bits in 0..(1 << OUTER) {
                let assumptions = world(bits);
                if the_context.primary.solve_given(&assumptions) != Ok(Satisfiability::Satisfiable) {
                    continue;
                }

                let model = the_context.primary.valuation();
                let Ok(cube) = the_context.hitting_set(&model) else {
                    panic!("no hitting set");
                };
                checked += 1;

                assert!(cube.iter().all(|literal| assumptions.contains(literal)));

                // Every world which extends the cube is satisfiable, by the inner part of the model.
                let inner = (OUTER + 1..=OUTER + INNER)
                    .filter_map(|atom| model.get(atom as usize).copied().flatten().map(|value| CLiteral::new(atom, value)))
                    .collect::<Vec<_>>();

                for other in 0..(1 << OUTER) {
                    let extension = world(other);
                    if !cube.iter().all(|literal| extension.contains(literal)) {
                        continue;
                    }
                    let mut given = extension.clone();
                    given.extend(inner.iter().copied());
                    assert_eq!(
                        the_context.primary.solve_given(&given),
                        Ok(Satisfiability::Satisfiable),
                        "{cube:?} does not cover {extension:?}"
                    );
                }
            }
        }

        assert!(checked > 0);
    }
}
