use std::time::{Duration, Instant};

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// The number of iterations through refinement loops.
    pub iterations: usize,

    /// Queries to the selector formula.
    pub selector_calls: usize,

    /// Queries to the primary formula which were satisfiable.
    pub primary_sat: usize,

    /// Queries to the primary formula which were unsatisfiable.
    pub primary_unsat: usize,

    /// Queries made while minimising cores.
    pub core_calls: usize,

    /// Queries to the counting oracle.
    pub counting_calls: usize,

    /// Cubes learnt from unsatisfiable queries.
    pub unsat_cubes: usize,

    /// Cubes learnt from satisfiable queries.
    pub sat_cubes: usize,

    /// Worlds evaluated exactly, for prefixes with a trailing random level.
    pub evaluated_worlds: usize,

    /// The time taken during a solve.
    pub time: Duration,

    /// The time spent within the counting oracle.
    pub counting_time: Duration,

    /// The time spent minimising cores.
    pub core_time: Duration,

    /// When the current solve began.
    pub start: Option<Instant>,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c Iterations:        {}", self.iterations)?;
        writeln!(f, "c Selector calls:    {}", self.selector_calls)?;
        writeln!(f, "c Primary SAT:       {}", self.primary_sat)?;
        writeln!(f, "c Primary UNSAT:     {}", self.primary_unsat)?;
        writeln!(f, "c Core calls:        {}", self.core_calls)?;
        writeln!(f, "c Counting calls:    {}", self.counting_calls)?;
        writeln!(f, "c UNSAT cubes:       {}", self.unsat_cubes)?;
        writeln!(f, "c SAT cubes:         {}", self.sat_cubes)?;
        writeln!(f, "c Evaluated worlds:  {}", self.evaluated_worlds)?;
        writeln!(f, "c Core time:         {:.3?}", self.core_time)?;
        writeln!(f, "c Counting time:     {:.3?}", self.counting_time)?;
        write!(f, "c Total time:        {:.3?}", self.time)
    }
}
