/*!
Tools for building a context.

A formula may be added to a context either by reading a formula in the SSAT format, see [sdimacs](crate::builder::sdimacs), or by interweaving the two basic methods:
- [quantify](crate::context::GenericContext::quantify), to bind atoms in the prefix.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

```rust
# use otter_ssat::context::Context;
# use otter_ssat::config::Config;
# use otter_ssat::structures::{clause::CClause, literal::{CLiteral, Literal}};
# use otter_ssat::structures::quantifier::Quantifier;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.quantify(Quantifier::Forall, &[1]).is_ok());
assert!(the_context.quantify(Quantifier::Exist, &[2]).is_ok());

let clause_a = CClause::from([CLiteral::new(1, true), CLiteral::new(2, false)]);
let clause_b = CClause::from([CLiteral::new(1, false), CLiteral::new(2, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert!(the_context.solve().is_ok());
assert_eq!(the_context.bounds.lower(), 1.0);
```
*/

pub mod sdimacs;

/// Information regarding a formula read by a context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given by the problem specification, if present.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given by the problem specification, if present.
    pub expected_clauses: Option<usize>,

    /// The largest atom read.
    pub added_atoms: usize,

    /// The count of clauses read, including any tautologies.
    pub added_clauses: usize,

    /// The count of atoms bound by the prefix.
    pub quantified_atoms: usize,
}
