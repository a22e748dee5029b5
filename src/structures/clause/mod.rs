//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! The same representation is used for cubes, aka. a collection of literals interpreted as the conjunction of those literals.
//!
//! ```rust
//! # use otter_ssat::structures::literal::{CLiteral, Literal};
//! # use otter_ssat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(23, true),
//!                   CLiteral::new(41, false),
//!                   CLiteral::new(3,  false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//!
//! let mut some_valuation = vec![Some(true); 42];
//! some_valuation[23] = Some(false);
//! some_valuation[3] = Some(true);
//! assert!(!clause.satisfied_on(&some_valuation));
//!
//! some_valuation[41] = Some(false);
//! assert!(clause.satisfied_on(&some_valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - The empty cube is always true.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// The literals of the clause, each negated.
    ///
    /// Negation of a clause read as a disjunction gives a cube read as a conjunction, and vice versa.
    fn negated(&self) -> CClause;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

/// A cube, with the same representation as a clause.
pub type Cube = VClause;

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self.iter() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of_literal(*literal) == Some(true))
    }

    fn negated(&self) -> CClause {
        self.iter().map(|literal| literal.negate()).collect()
    }
}

/// Sorts a clause and removes duplicate literals, returning true if the clause contains some literal and its negation.
pub fn canonicalise(clause: &mut CClause) -> bool {
    clause.sort_unstable();
    clause.dedup();
    clause
        .windows(2)
        .any(|pair| pair[0].atom() == pair[1].atom())
}
