use crate::{
    config::{Config, CountingEngine},
    counting::{CountOracle, EnumerationCounter, ProcessCounter},
    misc::log::targets,
    oracle::SatOracle,
    reports::Report,
    structures::{
        atom::Atom,
        bounds::Bounds,
        clause::{self, CClause},
        literal::{CLiteral, Literal},
        prefix::Prefix,
        quantifier::Quantifier,
    },
    types::err::{ErrorKind, PrefixError},
};

use super::{callbacks::Callbacks, ContextState, Counters};

/// The result of adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause contained some literal and its negation, and was not added.
    Tautology,

    Added,
}

/// A generic context, parameratised to a satisfiability oracle.
///
/// Requires an [oracle](SatOracle) which (also) implements [Default].
/// [Default] is used to create fresh oracles for selector formulas and for the evaluation of residual formulas.
///
/// # Example
///
/// ```rust
/// # use otter_ssat::context::GenericContext;
/// # use otter_ssat::oracle::VarisatOracle;
/// # use otter_ssat::config::Config;
/// let context = GenericContext::<VarisatOracle>::from_config(Config::default());
/// ```
pub struct GenericContext<O: SatOracle + Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The prefix of the formula.
    pub prefix: Prefix,

    /// The clauses of the formula, in order of addition.
    /// The position of a clause is used as the key of the clause.
    pub clause_db: Vec<CClause>,

    /// The primary oracle, which holds each clause of the clause database.
    pub primary: O,

    /// The status of the context.
    pub state: ContextState,

    /// Bounds on the probability of satisfaction.
    pub bounds: Bounds,

    /// For existential-random prefixes, an assignment to the outer atoms which attains the lower bound.
    pub witness: Option<Vec<CLiteral>>,

    /// Whether the empty clause was added.
    pub(crate) contradiction: bool,

    /// The largest atom in the formula.
    pub(crate) max_atom: Atom,

    pub(crate) count_oracle: Box<dyn CountOracle>,

    pub(crate) callbacks: Callbacks,
}

impl<O: SatOracle + Default> GenericContext<O> {
    /// Creates a context from some given configuration.
    ///
    /// The counting oracle is chosen by the `counting` option of the configuration.
    pub fn from_config(config: Config) -> Self {
        let count_oracle: Box<dyn CountOracle> = match config.counting.value {
            CountingEngine::InProcess => Box::new(EnumerationCounter::default()),
            CountingEngine::External => Box::new(ProcessCounter::new(
                config.counter_program.clone(),
                config.counter_args.clone(),
            )),
        };

        Self {
            config,
            counters: Counters::default(),
            prefix: Prefix::default(),
            clause_db: Vec::default(),
            primary: O::default(),
            state: ContextState::Configuration,
            bounds: Bounds::default(),
            witness: None,
            contradiction: false,
            max_atom: 0,
            count_oracle,
            callbacks: Callbacks::default(),
        }
    }

    /// Replaces the counting oracle of the context.
    pub fn set_count_oracle(&mut self, oracle: Box<dyn CountOracle>) {
        self.count_oracle = oracle;
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// Ensures `atom` is known to the context, and to the primary oracle.
    pub fn ensure_atom(&mut self, atom: Atom) {
        if self.max_atom < atom {
            self.max_atom = atom;
            self.primary.ensure_atom(atom);
        }
    }

    /// The largest atom in the formula.
    pub fn atom_count(&self) -> usize {
        self.max_atom as usize
    }

    fn check_input_state(&mut self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {
                self.state = ContextState::Input;
                Ok(())
            }
            ContextState::Solving | ContextState::Solved(_) => Err(ErrorKind::InvalidState),
        }
    }

    /// Quantifies each atom in `atoms` with `quantifier`.
    ///
    /// Consecutive calls with quantifiers of the same kind add atoms to the same level.
    pub fn quantify(&mut self, quantifier: Quantifier, atoms: &[Atom]) -> Result<(), ErrorKind> {
        self.check_input_state()?;
        self.prefix.quantify(quantifier, atoms)?;
        if let Some(max) = atoms.iter().max() {
            self.ensure_atom(*max);
        }
        Ok(())
    }

    /// Adds a clause to the context.
    ///
    /// Duplicate literals are removed, and tautologies are skipped.
    /// The empty clause may be added, in which case the formula is unsatisfiable.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<ClauseOk, ErrorKind> {
        self.check_input_state()?;
        let mut clause: CClause = clause.into();

        if clause.iter().any(|literal| literal.atom() == 0) {
            return Err(ErrorKind::from(PrefixError::InvalidAtom));
        }

        if clause::canonicalise(&mut clause) {
            log::trace!(target: targets::PARSER, "Skipped tautology {clause:?}");
            return Ok(ClauseOk::Tautology);
        }

        if let Some(max) = clause.iter().map(|literal| literal.atom()).max() {
            self.ensure_atom(max);
        }

        if clause.is_empty() {
            log::info!(target: targets::PARSER, "The empty clause was added");
            self.contradiction = true;
        }

        self.primary.add_clause(&clause);
        self.clause_db.push(clause);
        Ok(ClauseOk::Added)
    }
}

impl From<CLiteral> for CClause {
    fn from(literal: CLiteral) -> Self {
        vec![literal]
    }
}
