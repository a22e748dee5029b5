/*!
Generalisation of a satisfying assignment by a hitting set over outer literals.

Given a model of the primary formula, a clause is *covered* by the model if some inner literal of the clause is true on the model.
Each uncovered clause contains some outer literal true on the model, and a cube which contains some such literal from each uncovered clause generalises the model: on every world which extends the cube, the inner part of the model satisfies the formula.

The cube is found in three passes:
1. Each uncovered clause with exactly one true outer literal requires that literal.
2. Each uncovered clause not hit by a literal already collected contributes each of its true outer literals.
3. Each literal from the second pass is dropped if every uncovered clause containing it is hit by some other literal of the cube.

The result is a hitting set of the true outer literals of uncovered clauses, minimal with respect to the removal of any single literal.
*/

use std::collections::HashSet;

use crate::{
    context::GenericContext,
    misc::log::targets,
    oracle::SatOracle,
    structures::{
        clause::Cube,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::{ConsistencyError, ErrorKind},
};

impl<O: SatOracle + Default> GenericContext<O> {
    /// A cube over outer literals which generalises `model`, a model of the primary formula.
    pub fn hitting_set(&self, model: &CValuation) -> Result<Cube, ErrorKind> {
        // The true outer literals of each uncovered clause.
        let mut uncovered: Vec<Vec<CLiteral>> = Vec::default();

        for clause in &self.clause_db {
            let mut outer = Vec::default();
            let mut covered = false;

            for literal in clause {
                if model.value_of_literal(*literal) != Some(true) {
                    continue;
                }
                match self.prefix.is_outer(literal.atom()) {
                    true => outer.push(*literal),
                    false => {
                        covered = true;
                        break;
                    }
                }
            }

            if !covered {
                if outer.is_empty() {
                    return Err(ErrorKind::from(ConsistencyError::MissingModel));
                }
                uncovered.push(outer);
            }
        }

        let mut required: HashSet<CLiteral> = HashSet::default();
        for outer in &uncovered {
            if let [literal] = outer.as_slice() {
                required.insert(*literal);
            }
        }

        let mut collected: Vec<CLiteral> = Vec::default();
        for outer in &uncovered {
            let hit = outer
                .iter()
                .any(|literal| required.contains(literal) || collected.contains(literal));
            if !hit {
                collected.extend(outer.iter().copied());
            }
        }
        collected.sort_unstable();
        collected.dedup();

        let mut cube: HashSet<CLiteral> = required.iter().chain(collected.iter()).copied().collect();

        for literal in &collected {
            let redundant = uncovered
                .iter()
                .filter(|outer| outer.contains(literal))
                .all(|outer| outer.iter().any(|other| other != literal && cube.contains(other)));
            if redundant {
                cube.remove(literal);
            }
        }

        let bound = self.prefix.outer_atoms().len();
        if cube.len() > bound {
            return Err(ErrorKind::from(ConsistencyError::HittingSetOverflow {
                size: cube.len(),
                bound,
            }));
        }

        let mut cube = cube.into_iter().collect::<Cube>();
        cube.sort_unstable();
        log::trace!(target: targets::HITTING_SET, "Generalised to {cube:?} from {} uncovered clauses", uncovered.len());
        Ok(cube)
    }
}

#[cfg(test)]
mod hitting_set_tests {
    use crate::{
        config::Config,
        context::Context,
        structures::{literal::CLiteral, quantifier::Quantifier},
    };

    fn context() -> Context {
        let mut the_context = Context::from_config(Config::default());
        let _ = the_context.quantify(Quantifier::Random(0.5), &[1, 2, 3]);
        let _ = the_context.quantify(Quantifier::Exist, &[4]);
        let _ = the_context.add_clause(vec![CLiteral::from(1), CLiteral::from(2)]);
        let _ = the_context.add_clause(vec![CLiteral::from(2), CLiteral::from(3)]);
        let _ = the_context.add_clause(vec![CLiteral::from(3), CLiteral::from(4)]);
        the_context
    }

    #[test]
    fn shared_literal() {
        let the_context = context();
        let model = vec![Some(true), Some(true), Some(true), Some(true), Some(true)];
        // The third clause is covered by 4, and 2 hits the first two clauses.
        assert_eq!(the_context.hitting_set(&model), Ok(vec![CLiteral::from(2)]));
    }

    #[test]
    fn one_hot() {
        let the_context = context();
        let model = vec![Some(true), Some(true), Some(false), Some(true), Some(false)];
        assert_eq!(
            the_context.hitting_set(&model),
            Ok(vec![CLiteral::from(1), CLiteral::from(3)])
        );
    }
}
