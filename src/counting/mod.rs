/*!
Weighted counting, used to turn collections of cubes and residual formulas into probabilities.

A query is a [WeightedCnf]: a formula together with a weight for each atom.
- An atom with weight `Some(p)` is random, and true with probability `p`.
- An atom with no weight (written `-1`) is existential, and takes whichever value is best.

So, the probability of a query is the probability of satisfaction of the formula when each random atom is quantified before every existential atom.

Two [CountOracle]s are provided:
- [EnumerationCounter], which counts within the process.
- [ProcessCounter], which writes the query to a file and calls an external counter, e.g. Cachet.

```rust
# use otter_ssat::counting::{CountOracle, EnumerationCounter, WeightedCnf};
# use otter_ssat::structures::literal::{CLiteral, Literal};
let mut query = WeightedCnf::default();
let p = query.fresh_atom(Some(0.5));
let q = query.fresh_atom(Some(0.5));
query.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)]);

assert_eq!(query.as_dimacs(), "p cnf 2 1\n1 2 0\nw 1 0.5\nw 2 0.5\n");
assert_eq!(EnumerationCounter::default().weighted_probability(&query), Ok(0.75));
```
*/

mod enumeration;
pub use enumeration::EnumerationCounter;

mod process;
pub use process::{parse_probability, ProcessCounter};

use std::collections::HashMap;

use crate::{
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

/// Something which determines the probability of a weighted formula.
pub trait CountOracle {
    /// The probability of satisfaction of the query.
    fn weighted_probability(&mut self, query: &WeightedCnf) -> Result<f64, ErrorKind>;
}

/// A formula paired with a weight for each atom.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedCnf {
    /// The weight of each atom, indexed by atom.
    weights: Vec<Option<f64>>,

    clauses: Vec<CClause>,
}

impl Default for WeightedCnf {
    fn default() -> Self {
        WeightedCnf {
            weights: vec![None],
            clauses: Vec::default(),
        }
    }
}

impl WeightedCnf {
    /// A query with no satisfying assignment, containing a single atom and both unit clauses over that atom.
    pub fn contradiction() -> Self {
        let mut query = WeightedCnf::default();
        let atom = query.fresh_atom(None);
        query.add_clause(vec![CLiteral::new(atom, true)]);
        query.add_clause(vec![CLiteral::new(atom, false)]);
        query
    }

    /// A fresh atom with the given weight.
    pub fn fresh_atom(&mut self, weight: Option<f64>) -> Atom {
        self.weights.push(weight);
        (self.weights.len() - 1) as Atom
    }

    pub fn add_clause(&mut self, clause: CClause) {
        self.clauses.push(clause);
    }

    pub fn atom_count(&self) -> usize {
        self.weights.len() - 1
    }

    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The weights of the query, indexed by atom.
    pub fn weights(&self) -> &[Option<f64>] {
        &self.weights
    }

    pub fn weight(&self, atom: Atom) -> Option<f64> {
        self.weights.get(atom as usize).copied().flatten()
    }

    /// The query in the weighted DIMACS format read by Cachet.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = format!("p cnf {} {}\n", self.atom_count(), self.clauses.len());

        for clause in &self.clauses {
            the_string.push_str(&clause.as_dimacs(true));
            the_string.push('\n');
        }

        for atom in 1..self.weights.len() {
            match self.weights[atom] {
                Some(weight) => the_string.push_str(&format!("w {atom} {weight}\n")),
                None => the_string.push_str(&format!("w {atom} -1\n")),
            }
        }

        the_string
    }
}

/// Builds a query over a contiguous range of atoms from atoms of some other formula.
///
/// Each source atom is mapped to a query atom on first use, with the weight given at that point.
#[derive(Default)]
pub struct QueryBuilder {
    query: WeightedCnf,
    map: HashMap<Atom, Atom>,
}

impl QueryBuilder {
    /// The query atom for a source atom.
    pub fn atom(&mut self, source: Atom, weight: Option<f64>) -> Atom {
        match self.map.get(&source) {
            Some(atom) => *atom,
            None => {
                let atom = self.query.fresh_atom(weight);
                self.map.insert(source, atom);
                atom
            }
        }
    }

    /// The query literal for a source literal.
    pub fn literal(&mut self, source: CLiteral, weight: Option<f64>) -> CLiteral {
        CLiteral::new(self.atom(source.atom(), weight), source.polarity())
    }

    /// A fresh (unweighted) query atom, with no source.
    pub fn fresh_atom(&mut self) -> Atom {
        self.query.fresh_atom(None)
    }

    pub fn add_clause(&mut self, clause: CClause) {
        self.query.add_clause(clause);
    }

    pub fn finish(self) -> WeightedCnf {
        self.query
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn contradiction() {
        assert_eq!(
            WeightedCnf::contradiction().as_dimacs(),
            "p cnf 1 2\n1 0\n-1 0\nw 1 -1\n"
        );
    }

    #[test]
    fn renumbering() {
        let mut builder = QueryBuilder::default();
        let a = builder.literal(CLiteral::from(-40), Some(0.25));
        let b = builder.literal(CLiteral::from(7), None);
        let c = builder.literal(CLiteral::from(40), None);
        builder.add_clause(vec![a, b]);
        builder.add_clause(vec![c]);

        let query = builder.finish();
        assert_eq!(query.atom_count(), 2);
        assert_eq!(query.weight(1), Some(0.25));
        assert_eq!(query.clauses(), &[vec![CLiteral::from(-1), CLiteral::from(2)], vec![CLiteral::from(1)]]);
    }
}
