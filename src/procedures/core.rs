/*!
Cores of unsatisfiable queries to the primary formula.

A core is a subset of the assumptions of an unsatisfiable query which is itself unsatisfiable.
As assumptions are an assignment to outer atoms, a core is read as a cube, each world of which falsifies the formula.
So, the negation of a core is a clause which blocks each of those worlds.

The failed assumptions returned by the oracle are a core, though not (in general) a minimal core.
A minimal core is found by linear deletion: each literal is dropped in turn, and kept only if the remaining literals are satisfiable.
Whenever a query is unsatisfiable the core shrinks to the failed assumptions of that query.

```rust
# use otter_ssat::context::Context;
# use otter_ssat::config::Config;
# use otter_ssat::structures::literal::CLiteral;
# use otter_ssat::structures::quantifier::Quantifier;
let mut the_context = Context::from_config(Config::default());
let _ = the_context.quantify(Quantifier::Random(0.5), &[1, 2, 3]);
let _ = the_context.quantify(Quantifier::Exist, &[4]);
let _ = the_context.add_clause(vec![CLiteral::from(1), CLiteral::from(4)]);
let _ = the_context.add_clause(vec![CLiteral::from(1), CLiteral::from(-4)]);

let assumptions = vec![CLiteral::from(-1), CLiteral::from(2), CLiteral::from(-3)];
assert_eq!(the_context.minimal_core(assumptions), Ok(vec![CLiteral::from(-1)]));
```
*/

use std::time::Instant;

use crate::{
    context::GenericContext,
    misc::log::targets,
    oracle::SatOracle,
    reports::Satisfiability,
    structures::{clause::Cube, literal::CLiteral},
    types::err::{ConsistencyError, ErrorKind},
};

impl<O: SatOracle + Default> GenericContext<O> {
    /// A minimal core contained in `core`, where `core` is an unsatisfiable collection of assumptions to the primary formula.
    ///
    /// The relative order of literals in `core` is preserved.
    pub fn minimal_core(&mut self, core: Vec<CLiteral>) -> Result<Cube, ErrorKind> {
        let start = Instant::now();
        let initial = core.len();
        let mut core = core;

        let mut index = 0;
        while index < core.len() {
            let mut trial = core.clone();
            trial.remove(index);

            self.counters.core_calls += 1;
            match self.primary.solve_given(&trial)? {
                Satisfiability::Satisfiable => index += 1,

                Satisfiability::Unsatisfiable => {
                    // Each literal before the index is required by any core, so remains.
                    let failed = self.primary.failed_assumptions();
                    core = trial
                        .into_iter()
                        .filter(|literal| failed.contains(literal))
                        .collect();
                }
            }
        }

        self.counters.core_calls += 1;
        if self.primary.solve_given(&core)? == Satisfiability::Satisfiable {
            log::error!(target: targets::CORE, "Satisfiable core {core:?}");
            return Err(ErrorKind::from(ConsistencyError::CoreCheck));
        }

        log::trace!(target: targets::CORE, "Minimised core of {initial} to {}", core.len());
        self.counters.core_time += start.elapsed();
        Ok(core)
    }

    /// A core from the most recent unsatisfiable query to the primary oracle, minimised if configured.
    pub(crate) fn learnt_core(&mut self) -> Result<Cube, ErrorKind> {
        let core = self.primary.failed_assumptions();
        match self.config.minimal_core.value {
            true => self.minimal_core(core),
            false => Ok(core),
        }
    }
}
