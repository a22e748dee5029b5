/*!
Exact solving of formulas with an existential outer level followed by a random level.

Assignments to the outer (existential) atoms are enumerated by a selector, and the probability of each satisfiable assignment is found by a query to the counting oracle.
The best probability found is the lower bound, and when the selector is exhausted the bounds meet.

# Blocking

A clause is *selected* by an assignment if no outer literal of the clause is true on the assignment.
The value of an assignment depends only on the selected clauses, and an assignment which selects a superset of the clauses selected by some other assignment has no greater value.
So, after an assignment is counted the disjunction of the outer literals of its selected clauses is added to the selector.

Options refine this:
- *Unit clauses*: Outer literals of unit clauses are fixed in the selector.
- *Pure literals*: An outer atom which appears with a single polarity is fixed to that polarity.
- *Greedy*: Before counting, the selected clauses of a candidate are shrunk to a minimal set by repeated queries to the selector.
- *Subsumption*: A selected clause whose random literals include those of some other (kept) selected clause without inner existential literals is skipped when blocking.
- *Partial*: The blocking clause is shortened while a relaxed count, over the assignment restricted to a prefix of the blocking literals, is at most the best probability found.

# Counting queries

The query for an assignment contains each clause with no true outer literal, and a unit clause for each (kept) literal of the assignment.
Random atoms are weighted with their probability, and all other atoms are unweighted.
*/

use std::collections::{HashMap, HashSet};

use crate::{
    context::GenericContext,
    counting::{QueryBuilder, WeightedCnf},
    misc::log::targets,
    oracle::SatOracle,
    reports::{Report, Satisfiability},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::ErrorKind,
};

use super::selector::Selector;

impl<O: SatOracle + Default> GenericContext<O> {
    pub(crate) fn solve_exist_random(&mut self) -> Result<Report, ErrorKind> {
        let greedy = self.config.greedy.value;

        let mut selector = match greedy {
            true => Selector::<O>::with_selection(&self.prefix, &self.clause_db),
            false => Selector::<O>::outer_only(&self.prefix),
        };

        if self.config.unit_clauses.value {
            self.assert_unit_clauses(&mut selector);
        }
        if self.config.pure_literals.value {
            self.assert_pure_literals(&mut selector);
        }

        let subsumed = match self.config.subsumption.value {
            true => self.subsumption_table(),
            false => Vec::default(),
        };

        let mut best = 0.0;

        loop {
            if self.check_callback_terminate() {
                return Ok(Report::Interrupted);
            }
            self.counters.iterations += 1;

            if self.selector_solve(&mut selector)? == Satisfiability::Unsatisfiable {
                break;
            }

            if greedy {
                self.deselect_greedily(&mut selector)?;
            }

            let candidate = selector.candidate();

            if self.primary_given(&candidate)? == Satisfiability::Unsatisfiable {
                let core = self.learnt_core()?;
                let blocking = selector.translate(&core).negated();
                log::trace!(target: targets::EXIST_RANDOM, "Blocked core {core:?}");
                selector.add_clause(&blocking);
                continue;
            }

            let valuation = self.outer_valuation(&candidate);
            let blocking = self.blocking_clause(&valuation, &subsumed);

            let query = self.exist_random_query(&valuation, &candidate, &HashSet::default());
            let value = self.count(&query)?;
            log::debug!(target: targets::EXIST_RANDOM, "Candidate {candidate:?} has value {value}");

            if value > best || self.witness.is_none() {
                self.witness = Some(candidate.clone());
            }
            if value > best {
                best = value;
                self.raise_sat(best);
            }

            if value >= 1.0 {
                log::info!(target: targets::EXIST_RANDOM, "Found a candidate with value one");
                break;
            }

            let blocking = match self.config.partial.value && !blocking.is_empty() {
                true => self.prune_blocking(&valuation, blocking, best)?,
                false => blocking,
            };

            let blocking = selector.translate(&blocking);
            selector.add_clause(&blocking);
        }

        self.raise_unsat(1.0 - best);
        Ok(Report::Exact)
    }

    /// The assignment to outer atoms as a valuation over every atom of the formula.
    fn outer_valuation(&self, candidate: &[CLiteral]) -> CValuation {
        let mut valuation: CValuation = vec![None; self.atom_count() + 1];
        for literal in candidate {
            if let Some(value) = valuation.get_mut(literal.atom() as usize) {
                *value = Some(literal.polarity());
            }
        }
        valuation
    }

    fn outer_satisfied(&self, clause: &[CLiteral], valuation: &CValuation) -> bool {
        clause.iter().any(|literal| {
            self.prefix.is_outer(literal.atom()) && valuation.value_of_literal(*literal) == Some(true)
        })
    }

    fn assert_unit_clauses(&self, selector: &mut Selector<O>) {
        let mut count = 0;
        for clause in &self.clause_db {
            if let [literal] = clause.as_slice() {
                if let Some(alias) = selector.to_selector(*literal) {
                    selector.add_clause(&[alias]);
                    count += 1;
                }
            }
        }
        log::debug!(target: targets::EXIST_RANDOM, "Fixed {count} outer unit clauses");
    }

    fn assert_pure_literals(&self, selector: &mut Selector<O>) {
        let mut phases: HashMap<Atom, (bool, bool)> = HashMap::default();
        for literal in self.clause_db.iter().flatten() {
            if self.prefix.is_outer(literal.atom()) {
                let phase = phases.entry(literal.atom()).or_insert((false, false));
                match literal.polarity() {
                    true => phase.0 = true,
                    false => phase.1 = true,
                }
            }
        }

        let mut count = 0;
        for &atom in self.prefix.outer_atoms() {
            let polarity = match phases.get(&atom) {
                Some((true, false)) => true,
                Some((false, true)) => false,
                _ => continue,
            };
            if let Some(alias) = selector.to_selector(CLiteral::new(atom, polarity)) {
                selector.add_clause(&[alias]);
                count += 1;
            }
        }
        log::debug!(target: targets::EXIST_RANDOM, "Fixed {count} pure outer literals");
    }

    /// Shrinks the clauses selected by the current model of the selector to a minimal set.
    ///
    /// Each superset of a set of clauses found to be selected is blocked in the selector.
    fn deselect_greedily(&mut self, selector: &mut Selector<O>) -> Result<(), ErrorKind> {
        loop {
            let mut block = Vec::default();
            let mut assumptions = Vec::default();

            for key in 0..self.clause_db.len() {
                if let Some(selection) = selector.selection_literal(key) {
                    match selector.is_selected(key) {
                        true => block.push(selection.negate()),
                        false => assumptions.push(selection.negate()),
                    }
                }
            }
            block.sort_unstable();
            block.dedup();
            assumptions.sort_unstable();
            assumptions.dedup();

            selector.add_clause(&block);
            self.counters.selector_calls += 1;
            if selector.oracle.solve_given(&assumptions)? == Satisfiability::Unsatisfiable {
                return Ok(());
            }
        }
    }

    /// For each clause, the keys of each other clause which subsumes it when blocking.
    ///
    /// A clause subsumes another if it has some random literal, has no inner existential literal, and each of its random literals is in the other clause.
    fn subsumption_table(&self) -> Vec<Vec<usize>> {
        let random_parts = self
            .clause_db
            .iter()
            .map(|clause| {
                clause
                    .iter()
                    .filter(|literal| self.prefix.is_random(literal.atom()))
                    .copied()
                    .collect::<HashSet<CLiteral>>()
            })
            .collect::<Vec<_>>();

        let candidates = self
            .clause_db
            .iter()
            .enumerate()
            .filter(|(key, clause)| {
                !random_parts[*key].is_empty()
                    && clause.iter().all(|literal| {
                        self.prefix.is_outer(literal.atom()) || self.prefix.is_random(literal.atom())
                    })
            })
            .map(|(key, _)| key)
            .collect::<Vec<_>>();

        let mut table = vec![Vec::default(); self.clause_db.len()];
        for (key, random_part) in random_parts.iter().enumerate() {
            for &other in &candidates {
                if other != key && random_parts[other].is_subset(random_part) {
                    table[key].push(other);
                }
            }
        }
        table
    }

    /// The disjunction of outer literals of clauses selected by the valuation, skipping subsumed clauses.
    fn blocking_clause(&self, valuation: &CValuation, subsumed: &[Vec<usize>]) -> CClause {
        let selected = self
            .clause_db
            .iter()
            .map(|clause| !self.outer_satisfied(clause, valuation))
            .collect::<Vec<_>>();
        let mut skipped = vec![false; self.clause_db.len()];

        let mut blocking = Vec::default();
        for (key, clause) in self.clause_db.iter().enumerate() {
            if !selected[key] {
                continue;
            }

            if let Some(others) = subsumed.get(key) {
                if others.iter().any(|other| selected[*other] && !skipped[*other]) {
                    skipped[key] = true;
                    continue;
                }
            }

            blocking.extend(clause.iter().filter(|literal| self.prefix.is_outer(literal.atom())));
        }

        blocking.sort_unstable();
        blocking.dedup();
        blocking
    }

    /// Shortens a blocking clause to a prefix which blocks only assignments with value at most `best`.
    fn prune_blocking(&mut self, valuation: &CValuation, blocking: CClause, best: f64) -> Result<CClause, ErrorKind> {
        let assignment = blocking.negated();
        let relaxed_value = |context: &mut Self, length: usize| -> Result<f64, ErrorKind> {
            let dropped: HashSet<Atom> = assignment[length..].iter().map(|literal| literal.atom()).collect();
            let query = context.exist_random_query(valuation, &assignment[..length], &dropped);
            context.count(&query)
        };

        let mut length = assignment.len() - 1;
        let value = relaxed_value(&mut *self, length)?;

        if value <= best {
            while length > 0 {
                let value = relaxed_value(&mut *self, length - 1)?;
                if value > best {
                    break;
                }
                length -= 1;
            }
        } else {
            length += 1;
        }

        log::trace!(target: targets::EXIST_RANDOM, "Pruned blocking clause from {} to {length}", blocking.len());
        Ok(blocking[..length].to_vec())
    }

    /// The counting query for an assignment to outer atoms.
    ///
    /// Clauses with a true outer literal on `valuation` or some atom in `dropped` are removed, and each literal of `fixed` is added as a unit clause.
    pub fn exist_random_query(&self, valuation: &CValuation, fixed: &[CLiteral], dropped: &HashSet<Atom>) -> WeightedCnf {
        if self.contradiction {
            return WeightedCnf::contradiction();
        }

        let mut builder = QueryBuilder::default();

        for clause in &self.clause_db {
            if clause.iter().any(|literal| dropped.contains(&literal.atom())) {
                continue;
            }
            if self.outer_satisfied(clause, valuation) {
                continue;
            }
            let query_clause = clause
                .iter()
                .map(|literal| builder.literal(*literal, self.prefix.probability(literal.atom())))
                .collect();
            builder.add_clause(query_clause);
        }

        for literal in fixed {
            let unit = builder.literal(*literal, None);
            builder.add_clause(vec![unit]);
        }

        builder.finish()
    }
}
