/*!
The context, to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the satisfiability oracle used for the primary and selector formulas.
A context uses [VarisatOracle].

# Example
```rust
# use otter_ssat::context::Context;
# use otter_ssat::config::Config;
# use otter_ssat::reports::Report;
# use otter_ssat::structures::literal::{CLiteral, Literal};
# use otter_ssat::structures::quantifier::Quantifier;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.quantify(Quantifier::Random(0.5), &[1]).is_ok());
assert!(the_context.quantify(Quantifier::Exist, &[2]).is_ok());

assert!(the_context.add_clause(vec![CLiteral::new(1, true), CLiteral::new(2, true)]).is_ok());
assert!(the_context.add_clause(vec![CLiteral::new(1, false), CLiteral::new(2, false)]).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Exact));
assert_eq!(the_context.bounds.lower(), 1.0);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;

use crate::{oracle::VarisatOracle, reports::Report};

/// A context which uses [VarisatOracle] for satisfiability queries.
pub type Context = GenericContext<VarisatOracle>;

/// The state of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A solve is in progress.
    Solving,

    /// A solve has finished, with the given report.
    Solved(Report),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Solved(report) => write!(f, "Solved ({report})"),
        }
    }
}
