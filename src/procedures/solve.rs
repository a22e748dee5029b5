use std::time::Instant;

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    oracle::SatOracle,
    reports::Report,
    structures::literal::Literal,
    types::err::ErrorKind,
};

use super::classify::{classify, Strategy};

impl<O: SatOracle + Default> GenericContext<O> {
    /// Solves the formula of the context, returning a report.
    ///
    /// Before classification, unquantified atoms are bound existentially at the innermost position and a prefix of a single level is closed with a complementary level.
    ///
    /// A solve happens at most once, and later calls return the report of the first.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Solved(report) => return Ok(report),
            ContextState::Solving => return Err(ErrorKind::InvalidState),
            ContextState::Configuration | ContextState::Input => {}
        }

        self.state = ContextState::Solving;
        let start = Instant::now();
        self.counters.start = Some(start);

        let result = self.solve_by_strategy();
        self.counters.time = start.elapsed();

        match result {
            Ok(report) => {
                log::info!(target: targets::CEGAR, "{report} with bounds [{}, {}]", self.bounds.lower(), self.bounds.upper());
                self.state = ContextState::Solved(report);
                Ok(report)
            }

            Err(e) => {
                log::error!(target: targets::CEGAR, "Solve failed: {e:?}");
                self.state = ContextState::Solved(Report::Unknown);
                Err(e)
            }
        }
    }

    fn solve_by_strategy(&mut self) -> Result<Report, ErrorKind> {
        let atoms = self
            .clause_db
            .iter()
            .flatten()
            .map(|literal| literal.atom())
            .collect::<Vec<_>>();

        let bound = self.prefix.bind_free_atoms(atoms.into_iter());
        if bound > 0 {
            log::info!(target: targets::PREFIX, "Bound {bound} free atoms existentially");
        }

        if self.prefix.level_count() == 0 {
            match self.contradiction {
                true => self.bounds.settle(0.0),
                false => self.bounds.settle(1.0),
            }
            self.dispatch_bounds();
            return Ok(Report::Exact);
        }

        if self.prefix.close_single_level() {
            log::info!(target: targets::PREFIX, "Closed a prefix of a single level");
        }

        let strategy = classify(&self.prefix.kinds(), self.config.all_candidates.value)?;
        log::info!(target: targets::PREFIX, "Solving {} levels by {strategy}", self.prefix.level_count());

        if self.contradiction {
            self.raise_unsat(1.0);
            return Ok(Report::Exact);
        }

        match strategy {
            Strategy::ExistRandom => self.solve_exist_random(),
            Strategy::AllCandidates => self.solve_all_candidates(),
            Strategy::Qbf => self.solve_qbf(),
            Strategy::Stochastic => self.solve_stochastic(),
        }
    }
}
