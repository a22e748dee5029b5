/*!
Satisfiability oracles.

A solve uses (at least) two oracles:
- The *primary* oracle, which holds the formula.
- The *selector* oracle, which holds an abstraction of the formula over outer atoms and learnt blocking clauses.

Both are incremental, and queries are made under assumptions.
The [SatOracle] trait is the interface required, and [VarisatOracle] is the implementation used by a [Context](crate::context::Context).

```rust
# use otter_ssat::oracle::{SatOracle, VarisatOracle};
# use otter_ssat::reports::Satisfiability;
# use otter_ssat::structures::literal::CLiteral;
let mut oracle = VarisatOracle::default();
oracle.add_clause(&[CLiteral::from(1), CLiteral::from(2)]);
oracle.add_clause(&[CLiteral::from(-1)]);

assert_eq!(oracle.solve_given(&[CLiteral::from(-2)]), Ok(Satisfiability::Unsatisfiable));
assert_eq!(oracle.failed_assumptions(), vec![CLiteral::from(-2)]);

assert_eq!(oracle.solve_given(&[]), Ok(Satisfiability::Satisfiable));
assert_eq!(oracle.value_of(2), Some(true));
```
*/

mod varisat;
pub use varisat::VarisatOracle;

use crate::{
    reports::Satisfiability,
    structures::{atom::Atom, literal::CLiteral, valuation::CValuation},
    types::err::ErrorKind,
};

/// An incremental satisfiability oracle.
pub trait SatOracle {
    /// The number of atoms known to the oracle, excluding the unused atom `0`.
    fn atom_count(&self) -> usize;

    /// Ensures every atom up to and including `atom` is known to the oracle.
    fn ensure_atom(&mut self, atom: Atom);

    /// A fresh atom.
    fn fresh_atom(&mut self) -> Atom {
        let atom = self.atom_count() as Atom + 1;
        self.ensure_atom(atom);
        atom
    }

    /// Adds a clause to the oracle.
    fn add_clause(&mut self, clause: &[CLiteral]);

    /// Determines satisfiability under the given assumptions.
    fn solve_given(&mut self, assumptions: &[CLiteral]) -> Result<Satisfiability, ErrorKind>;

    /// The value of an atom on the model found by the most recent satisfiable query.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The model found by the most recent satisfiable query, indexed by atom.
    fn valuation(&self) -> CValuation;

    /// A subset of the assumptions of the most recent unsatisfiable query which is itself unsatisfiable.
    fn failed_assumptions(&self) -> Vec<CLiteral>;
}
