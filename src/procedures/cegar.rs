/*!
Counterexample guided abstraction refinement over assignments to the outer level.

Each iteration of the loop:
- Takes a candidate assignment to outer atoms from the selector.
- Queries the primary formula under the candidate.
- Learns a cube containing the candidate, and blocks the cube in the selector.

The loop ends when the selector is unsatisfiable, at which point every assignment to outer atoms is in some learnt cube.

# Unsatisfiable candidates

A core of the primary query is a cube of outer literals, each world of which falsifies the formula.

# Satisfiable candidates

For a random outer level followed by an existential level, a satisfying candidate is generalised by selection literals.
A clause with a selection literal and no true inner literal on the model of the primary formula must be satisfied by some outer literal, and the cube of negated selection literals of those clauses holds the worlds on which the inner part of the model satisfies the formula.

For a random-existential-random prefix a satisfying candidate is instead evaluated exactly, by an existential-random solve of the formula which remains on the candidate, and only the candidate is blocked.

For a universal outer level a satisfying candidate is blocked as above, though as the outer level is universal a single unsatisfiable candidate decides the formula.
*/

use std::time::Duration;

use crate::{
    context::GenericContext,
    counting::{CountOracle, EnumerationCounter},
    misc::log::targets,
    oracle::SatOracle,
    reports::{Report, Satisfiability},
    structures::{
        clause::{CClause, Clause, Cube},
        literal::{CLiteral, Literal},
        quantifier::Quantifier,
        valuation::{CValuation, Valuation},
    },
    types::err::ErrorKind,
};

use super::{cubes::Accumulator, selector::Selector};

impl<O: SatOracle + Default> GenericContext<O> {
    pub(crate) fn selector_solve(&mut self, selector: &mut Selector<O>) -> Result<Satisfiability, ErrorKind> {
        self.counters.selector_calls += 1;
        selector.solve()
    }

    pub(crate) fn primary_given(&mut self, assumptions: &[CLiteral]) -> Result<Satisfiability, ErrorKind> {
        let result = self.primary.solve_given(assumptions)?;
        match result {
            Satisfiability::Satisfiable => self.counters.primary_sat += 1,
            Satisfiability::Unsatisfiable => self.counters.primary_unsat += 1,
        }
        Ok(result)
    }

    /// The cube of negated selection literals of clauses with no true inner literal on the primary model.
    fn selection_cube(&self, selector: &Selector<O>) -> Cube {
        let model = self.primary.valuation();
        let mut selections = Vec::default();

        for (key, clause) in self.clause_db.iter().enumerate() {
            let Some(selection) = selector.selection_literal(key) else {
                continue;
            };
            let inner_true = clause.iter().any(|literal| {
                !self.prefix.is_outer(literal.atom()) && model.value_of_literal(*literal) == Some(true)
            });
            if !inner_true {
                selections.push(selection);
            }
        }

        selections.sort_unstable();
        selections.dedup();
        selections.negated()
    }

    /// Learns the core of an unsatisfiable candidate as an unsatisfying cube.
    pub(crate) fn learn_unsat(&mut self, selector: &mut Selector<O>, cubes: &mut Accumulator) -> Result<(), ErrorKind> {
        let core = self.learnt_core()?;
        let cube = selector.translate(&core);
        log::trace!(target: targets::CEGAR, "UNSAT cube {core:?}");

        selector.add_clause(&cube.negated());
        cubes.unsat.push(cube);
        self.counters.unsat_cubes += 1;

        if cubes.unsat.is_full() {
            self.drain_unsat(selector, cubes)?;
        }
        Ok(())
    }

    /// Decides a formula with a universal outer level and an existential inner level.
    pub(crate) fn solve_qbf(&mut self) -> Result<Report, ErrorKind> {
        let mut selector = Selector::<O>::with_selection(&self.prefix, &self.clause_db);

        loop {
            if self.check_callback_terminate() {
                return Ok(Report::Interrupted);
            }
            self.counters.iterations += 1;

            if self.selector_solve(&mut selector)? == Satisfiability::Unsatisfiable {
                log::info!(target: targets::CEGAR, "Every universal assignment is satisfiable");
                self.raise_sat(1.0);
                return Ok(Report::Exact);
            }

            let candidate = selector.candidate();
            match self.primary_given(&candidate)? {
                Satisfiability::Unsatisfiable => {
                    log::info!(target: targets::CEGAR, "Falsified by {candidate:?}");
                    self.raise_unsat(1.0);
                    return Ok(Report::Exact);
                }

                Satisfiability::Satisfiable => {
                    let cube = self.selection_cube(&selector);
                    selector.add_clause(&cube.negated());
                    self.counters.sat_cubes += 1;
                }
            }
        }
    }

    /// Bounds a formula with a random outer level, generalising satisfying worlds by selection literals.
    ///
    /// If the prefix has a trailing random level each satisfying world is evaluated exactly.
    pub(crate) fn solve_stochastic(&mut self) -> Result<Report, ErrorKind> {
        let evaluate_worlds = self.prefix.level_count() == 3;
        let mut selector = match evaluate_worlds {
            true => Selector::<O>::outer_only(&self.prefix),
            false => Selector::<O>::with_selection(&self.prefix, &self.clause_db),
        };
        let mut cubes = Accumulator::new(&self.config);

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
                self.drain_all(&selector, &mut cubes)?;
                return Ok(Report::Exact);
            }

            let candidate = selector.candidate();
            match self.primary_given(&candidate)? {
                Satisfiability::Unsatisfiable => self.learn_unsat(&mut selector, &mut cubes)?,

                Satisfiability::Satisfiable if evaluate_worlds => {
                    let value = self.evaluate_world(&candidate)?;
                    let weight = self.prefix.weight_of(&candidate);
                    log::trace!(target: targets::CEGAR, "World {candidate:?} of weight {weight} evaluated to {value}");

                    cubes.evaluated_sat += weight * value;
                    cubes.evaluated_unsat += weight * (1.0 - value);
                    self.counters.evaluated_worlds += 1;

                    let blocking = selector.translate(&candidate).negated();
                    selector.add_clause(&blocking);
                    self.raise_unsat(cubes.unsat_mass + cubes.evaluated_unsat);
                    self.raise_sat(cubes.sat_mass + cubes.evaluated_sat);
                }

                Satisfiability::Satisfiable => {
                    let cube = self.selection_cube(&selector);
                    log::trace!(target: targets::CEGAR, "SAT cube {cube:?}");

                    selector.add_clause(&cube.negated());
                    cubes.sat.push(cube);
                    self.counters.sat_cubes += 1;

                    if cubes.sat.is_full() {
                        self.drain_sat(&selector, &mut cubes)?;
                    }
                }
            }
        }
    }

    /// Whether the gap between the bounds is within a (non-zero) requested range.
    pub(crate) fn within_range(&self) -> bool {
        let range = self.config.range.value;
        range > 0.0 && self.bounds.gap() <= range
    }

    /// The probability of satisfaction of the formula which remains on an assignment to outer atoms.
    ///
    /// Clauses satisfied by the world are removed, and outer literals are removed from the remaining clauses.
    /// The remaining formula has the inner levels of the prefix, and is solved in a fresh context which borrows the counting oracle.
    pub(crate) fn evaluate_world(&mut self, world: &[CLiteral]) -> Result<f64, ErrorKind> {
        let mut valuation: CValuation = vec![None; self.atom_count() + 1];
        for literal in world {
            if let Some(value) = valuation.get_mut(literal.atom() as usize) {
                *value = Some(literal.polarity());
            }
        }

        let mut config = self.config.clone();
        config.range.value = 0.0;
        config.time_limit.value = Duration::ZERO;
        let mut residual = GenericContext::<O>::from_config(config);

        for level in self.prefix.levels().iter().skip(1) {
            for &atom in level.atoms() {
                let quantifier = self.prefix.quantifier(atom).unwrap_or(Quantifier::Exist);
                residual.quantify(quantifier, &[atom])?;
            }
        }

        for clause in &self.clause_db {
            if clause.satisfied_on(&valuation) {
                continue;
            }
            let remaining: CClause = clause
                .iter()
                .filter(|literal| !self.prefix.is_outer(literal.atom()))
                .copied()
                .collect();
            residual.add_clause(remaining)?;
        }

        let placeholder: Box<dyn CountOracle> = Box::new(EnumerationCounter::default());
        residual.count_oracle = std::mem::replace(&mut self.count_oracle, placeholder);

        let result = residual.solve();

        let placeholder: Box<dyn CountOracle> = Box::new(EnumerationCounter::default());
        self.count_oracle = std::mem::replace(&mut residual.count_oracle, placeholder);

        self.counters.counting_calls += residual.counters.counting_calls;
        self.counters.counting_time += residual.counters.counting_time;

        result?;
        Ok(residual.bounds.lower())
    }
}
