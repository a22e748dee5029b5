//! Error types used in the library.
//!
//! - Parse errors and prefix errors are due to the input.
//! - Counting oracle errors are due to the environment, e.g. a missing counter binary.
//! - Consistency errors indicate a defect in the library, and are not expected.
//!
//! Names of the error enums overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, quantifier::QuantifierKind};

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Prefix(PrefixError),
    Oracle(OracleError),
    CountingOracle(CountingOracleError),
    Consistency(ConsistencyError),

    /// A request which is not possible in the current state of the context, e.g. adding a clause after a solve.
    InvalidState,
}

/// Errors when reading a formula.
///
/// Each error notes the (1-based) line on which the error was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The problem specification line was malformed.
    ProblemSpecification(usize),

    /// A line began with an unrecognised character.
    UnexpectedCharacter { line: usize, character: char },

    /// A clause was not terminated with a `0`.
    UnterminatedClause(usize),

    /// A quantifier block was not terminated with a `0`.
    UnterminatedPrefix(usize),

    /// A probability was missing, malformed, or outside the unit interval.
    Probability(usize),

    /// Some token failed to parse as a literal.
    Literal(usize),

    /// An atom was quantified more than once.
    Requantified { line: usize, atom: Atom },

    /// A line could not be read.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors regarding the prefix of a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrefixError {
    /// The number of levels is not supported.
    UnsupportedLevels(usize),

    /// The pattern of levels is not supported.
    UnsupportedPattern(Vec<QuantifierKind>),

    /// An atom was quantified more than once.
    Requantified(Atom),

    /// A probability outside the unit interval.
    InvalidProbability,

    /// The atom `0` was used.
    InvalidAtom,
}

impl From<PrefixError> for ErrorKind {
    fn from(e: PrefixError) -> Self {
        ErrorKind::Prefix(e)
    }
}

/// Errors from a satisfiability oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OracleError {
    /// The solver failed, with some message.
    Solver(String),
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Errors from a counting oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountingOracleError {
    /// The counter could not be started.
    Spawn(String),

    /// The query could not be written, or the output could not be read.
    Io(String),

    /// The counter exited with a failure status, if any.
    Status(Option<i32>),

    /// The output of the counter did not contain a probability.
    MissingOutput,

    /// The probability in the output of the counter did not parse.
    Unparsable(String),
}

impl From<CountingOracleError> for ErrorKind {
    fn from(e: CountingOracleError) -> Self {
        ErrorKind::CountingOracle(e)
    }
}

/// Failed internal checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsistencyError {
    /// A hitting set was larger than the number of outer atoms.
    HittingSetOverflow { size: usize, bound: usize },

    /// A minimised core was satisfiable.
    CoreCheck,

    /// A satisfiable oracle did not provide a model.
    MissingModel,
}

impl From<ConsistencyError> for ErrorKind {
    fn from(e: ConsistencyError) -> Self {
        ErrorKind::Consistency(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Prefix(e) => write!(f, "Prefix error: {e}"),
            Self::Oracle(OracleError::Solver(message)) => write!(f, "Oracle error: {message}"),
            Self::CountingOracle(e) => write!(f, "Counting oracle error: {e}"),
            Self::Consistency(e) => write!(f, "Internal consistency error: {e:?}"),
            Self::InvalidState => write!(f, "Invalid state"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification(line) => {
                write!(f, "malformed problem specification on line {line}")
            }
            Self::UnexpectedCharacter { line, character } => {
                write!(f, "unexpected character '{character}' on line {line}")
            }
            Self::UnterminatedClause(line) => write!(f, "clause without a 0 on line {line}"),
            Self::UnterminatedPrefix(line) => write!(f, "quantifier without a 0 on line {line}"),
            Self::Probability(line) => write!(f, "invalid probability on line {line}"),
            Self::Literal(line) => write!(f, "invalid literal on line {line}"),
            Self::Requantified { line, atom } => {
                write!(f, "atom {atom} quantified again on line {line}")
            }
            Self::Line(line) => write!(f, "unable to read line {line}"),
        }
    }
}

impl std::fmt::Display for PrefixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevels(count) => write!(f, "{count} levels are not supported"),
            Self::UnsupportedPattern(kinds) => {
                let pattern = kinds
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<_>>()
                    .join("-");
                write!(f, "the pattern {pattern} is not supported")
            }
            Self::Requantified(atom) => write!(f, "atom {atom} quantified again"),
            Self::InvalidProbability => write!(f, "probability outside [0, 1]"),
            Self::InvalidAtom => write!(f, "the atom 0 may not be quantified"),
        }
    }
}

impl std::fmt::Display for CountingOracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn(message) => write!(f, "failed to start the counter ({message})"),
            Self::Io(message) => write!(f, "{message}"),
            Self::Status(Some(code)) => write!(f, "the counter exited with status {code}"),
            Self::Status(None) => write!(f, "the counter was terminated"),
            Self::MissingOutput => write!(f, "no satisfying probability in the output"),
            Self::Unparsable(token) => write!(f, "unable to parse '{token}' as a probability"),
        }
    }
}

impl std::error::Error for ErrorKind {}
