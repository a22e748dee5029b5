use crate::{
    misc::log::targets,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

use super::{CountOracle, WeightedCnf};

/// A counter which determines the probability of a query by a search over assignments.
///
/// Random atoms are branched on before existential atoms, and the search simplifies the formula by unit propagation at each step.
/// The search is exponential in the number of random atoms, and so is best suited to small queries.
#[derive(Default)]
pub struct EnumerationCounter {
    /// The number of branches taken over all queries.
    pub branches: usize,
}

impl CountOracle for EnumerationCounter {
    fn weighted_probability(&mut self, query: &WeightedCnf) -> Result<f64, ErrorKind> {
        let probability = self.count(query, query.clauses().to_vec());
        log::trace!(target: targets::COUNTING, "Counted {probability} over {} atoms", query.atom_count());
        Ok(probability)
    }
}

/// The clauses which remain after `literal` is set true, each without the negation of `literal`.
fn assign(clauses: &[CClause], literal: CLiteral) -> Vec<CClause> {
    let negation = literal.negate();
    clauses
        .iter()
        .filter(|clause| !clause.contains(&literal))
        .map(|clause| {
            clause
                .iter()
                .filter(|l| **l != negation)
                .copied()
                .collect()
        })
        .collect()
}

impl EnumerationCounter {
    fn count(&mut self, query: &WeightedCnf, mut clauses: Vec<CClause>) -> f64 {
        let mut factor = 1.0;

        loop {
            if clauses.iter().any(|clause| clause.is_empty()) {
                return 0.0;
            }

            let Some(unit) = clauses.iter().find(|clause| clause.len() == 1).map(|c| c[0]) else {
                break;
            };

            if let Some(p) = query.weight(unit.atom()) {
                factor *= match unit.polarity() {
                    true => p,
                    false => 1.0 - p,
                };
                if factor == 0.0 {
                    return 0.0;
                }
            }

            clauses = assign(&clauses, unit);
        }

        if clauses.is_empty() {
            return factor;
        }

        let random = clauses
            .iter()
            .flatten()
            .filter(|literal| query.weight(literal.atom()).is_some())
            .map(|literal| literal.atom())
            .min();

        self.branches += 1;

        match random {
            Some(atom) => {
                let p = query.weight(atom).unwrap_or(0.0);
                let mut sum = 0.0;
                if p > 0.0 {
                    sum += p * self.count(query, assign(&clauses, CLiteral::new(atom, true)));
                }
                if p < 1.0 {
                    sum += (1.0 - p) * self.count(query, assign(&clauses, CLiteral::new(atom, false)));
                }
                factor * sum
            }

            None => {
                let literal = clauses[0][0];
                let chosen = self.count(query, assign(&clauses, literal));
                if chosen >= 1.0 {
                    return factor;
                }
                let other = self.count(query, assign(&clauses, literal.negate()));
                factor * chosen.max(other)
            }
        }
    }
}
