/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The bounds of the context meet, and so the probability of satisfaction is known.
    Exact,

    /// The gap between the bounds of the context is within the requested range.
    Approximate,

    /// The solve was interrupted, and the bounds are the best found.
    Interrupted,

    /// Nothing is known, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Self::Unknown
            }
            ContextState::Solved(report) => *report,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "Exact"),
            Self::Approximate => write!(f, "Approximate"),
            Self::Interrupted => write!(f, "Interrupted"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The result of a query to a satisfiability oracle.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Satisfiability {
    Satisfiable,
    Unsatisfiable,
}
