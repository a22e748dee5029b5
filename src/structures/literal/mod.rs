//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//!
//! ```rust
//! # use otter_ssat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.negate().as_int(), -79);
//! assert_eq!(CLiteral::try_from(-79_isize), Ok(literal.negate()));
//! ```
//!
//! Literals are ordered by atom and then polarity, with 'false' (strictly) less than 'true'.

mod ab_literal;
pub use ab_literal::ABLiteral;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;
