use varisat::{ExtendFormula, Lit, Solver};

use crate::{
    reports::Satisfiability,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
    types::err::{ErrorKind, OracleError},
};

use super::SatOracle;

/// A satisfiability oracle backed by [varisat].
pub struct VarisatOracle {
    solver: Solver<'static>,

    atom_count: usize,

    /// The most recent model, indexed by atom.
    model: CValuation,

    /// The failed assumptions of the most recent unsatisfiable query.
    failed: Vec<CLiteral>,
}

impl Default for VarisatOracle {
    fn default() -> Self {
        VarisatOracle {
            solver: Solver::new(),
            atom_count: 0,
            model: vec![Some(true)],
            failed: Vec::default(),
        }
    }
}

fn to_lit(literal: &CLiteral) -> Lit {
    Lit::from_dimacs(literal.as_int())
}

fn from_lit(lit: &Lit) -> CLiteral {
    CLiteral::new(lit.to_dimacs().unsigned_abs() as Atom, lit.is_positive())
}

impl SatOracle for VarisatOracle {
    fn atom_count(&self) -> usize {
        self.atom_count
    }

    fn ensure_atom(&mut self, atom: Atom) {
        while self.atom_count < atom as usize {
            self.solver.new_var();
            self.atom_count += 1;
        }
    }

    fn add_clause(&mut self, clause: &[CLiteral]) {
        if let Some(max) = clause.iter().map(|literal| literal.atom()).max() {
            self.ensure_atom(max);
        }
        let lits = clause.iter().map(to_lit).collect::<Vec<_>>();
        self.solver.add_clause(&lits);
    }

    fn solve_given(&mut self, assumptions: &[CLiteral]) -> Result<Satisfiability, ErrorKind> {
        if let Some(max) = assumptions.iter().map(|literal| literal.atom()).max() {
            self.ensure_atom(max);
        }
        let lits = assumptions.iter().map(to_lit).collect::<Vec<_>>();
        self.solver.assume(&lits);

        match self.solver.solve() {
            Ok(true) => {
                self.model = vec![None; self.atom_count + 1];
                self.model[0] = Some(true);
                if let Some(model) = self.solver.model() {
                    for lit in model {
                        let literal = from_lit(&lit);
                        if let Some(value) = self.model.get_mut(literal.atom() as usize) {
                            *value = Some(literal.polarity());
                        }
                    }
                }
                self.failed.clear();
                Ok(Satisfiability::Satisfiable)
            }

            Ok(false) => {
                self.failed = match self.solver.failed_core() {
                    Some(core) => core.iter().map(from_lit).collect(),
                    None => Vec::default(),
                };
                Ok(Satisfiability::Unsatisfiable)
            }

            Err(e) => Err(ErrorKind::from(OracleError::Solver(format!("{e:?}")))),
        }
    }

    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.model.get(atom as usize).copied().flatten()
    }

    fn valuation(&self) -> CValuation {
        self.model.clone()
    }

    fn failed_assumptions(&self) -> Vec<CLiteral> {
        self.failed.clone()
    }
}

#[cfg(test)]
mod varisat_tests {
    use super::*;

    #[test]
    fn incremental() {
        let mut oracle = VarisatOracle::default();
        let p = oracle.fresh_atom();
        let q = oracle.fresh_atom();
        assert_eq!((p, q), (1, 2));

        oracle.add_clause(&[CLiteral::new(p, false), CLiteral::new(q, true)]);

        let given = [CLiteral::new(p, true), CLiteral::new(q, false)];
        assert_eq!(oracle.solve_given(&given), Ok(Satisfiability::Unsatisfiable));
        let mut failed = oracle.failed_assumptions();
        failed.sort();
        assert_eq!(failed, given.to_vec());

        assert_eq!(
            oracle.solve_given(&[CLiteral::new(p, true)]),
            Ok(Satisfiability::Satisfiable)
        );
        assert_eq!(oracle.value_of(q), Some(true));
    }

    #[test]
    fn unsatisfiable_formula() {
        let mut oracle = VarisatOracle::default();
        oracle.add_clause(&[]);
        assert_eq!(oracle.solve_given(&[CLiteral::from(1)]), Ok(Satisfiability::Unsatisfiable));
        assert!(oracle.failed_assumptions().is_empty());
    }
}
