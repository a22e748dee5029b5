/*!
Refinement over outer worlds, generalising satisfying worlds by hitting sets.

Every outer literal of a unit clause is learnt as an unsatisfying cube before the loop begins.
Within the loop:
- An unsatisfiable candidate is generalised to a core.
- A satisfiable candidate is generalised to a [hitting set](crate::procedures::hitting_set) over outer literals when cores are minimised, and otherwise taken as is.

When the outer level is universal no counting takes place: the first unsatisfiable candidate falsifies the formula, and an exhausted selector verifies the formula.
*/

use crate::{
    context::GenericContext,
    misc::log::targets,
    oracle::SatOracle,
    reports::{Report, Satisfiability},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
        quantifier::QuantifierKind,
    },
    types::err::ErrorKind,
};

use super::{cubes::Accumulator, selector::Selector};

impl<O: SatOracle + Default> GenericContext<O> {
    pub(crate) fn solve_all_candidates(&mut self) -> Result<Report, ErrorKind> {
        let universal = self.prefix.levels().first().map(|level| level.kind()) == Some(QuantifierKind::Forall);

        let mut selector = Selector::<O>::outer_only(&self.prefix);
        let mut cubes = Accumulator::new(&self.config);

        if !universal {
            let units = self
                .clause_db
                .iter()
                .filter_map(|clause| match clause.as_slice() {
                    [literal] if self.prefix.is_outer(literal.atom()) => Some(*literal),
                    _ => None,
                })
                .collect::<Vec<CLiteral>>();

            for literal in units {
                let cube = selector.translate(&[literal.negate()]);
                selector.add_clause(&cube.negated());
                cubes.unsat.push(cube);
                self.counters.unsat_cubes += 1;
            }
            log::debug!(target: targets::CEGAR, "Learnt {} outer unit clauses", cubes.unsat.pending().len());

            if cubes.unsat.is_full() {
                self.drain_unsat(&selector, &mut cubes)?;
            }
        }

        loop {
            if self.within_range() {
                self.drain_all(&selector, &mut cubes)?;
                return Ok(Report::Approximate);
            }
            if self.check_callback_terminate() {
                self.drain_all(&selector, &mut cubes)?;
                return Ok(Report::Interrupted);
            }
            self.counters.iterations += 1;

            if self.selector_solve(&mut selector)? == Satisfiability::Unsatisfiable {
                match universal {
                    true => self.raise_sat(1.0),
                    false => self.drain_all(&selector, &mut cubes)?,
                }
                return Ok(Report::Exact);
            }

            let candidate = selector.candidate();
            match self.primary_given(&candidate)? {
                Satisfiability::Unsatisfiable if universal => {
                    log::info!(target: targets::CEGAR, "Falsified by {candidate:?}");
                    self.raise_unsat(1.0);
                    return Ok(Report::Exact);
                }

                Satisfiability::Unsatisfiable => self.learn_unsat(&mut selector, &mut cubes)?,

                Satisfiability::Satisfiable => {
                    let generalised = match self.config.minimal_core.value {
                        true => self.hitting_set(&self.primary.valuation())?,
                        false => candidate,
                    };
                    let cube = selector.translate(&generalised);
                    log::trace!(target: targets::CEGAR, "SAT cube {generalised:?}");

                    selector.add_clause(&cube.negated());
                    self.counters.sat_cubes += 1;

                    if !universal {
                        cubes.sat.push(cube);
                        if cubes.sat.is_full() {
                            self.drain_sat(&selector, &mut cubes)?;
                        }
                    }
                }
            }
        }
    }
}
