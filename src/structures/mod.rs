//! Structures used throughout the library.

pub mod atom;
pub mod bounds;
pub mod clause;
pub mod literal;
pub mod prefix;
pub mod quantifier;
pub mod valuation;
