/*!
Configuration of a context.

All configuration for a context is contained within a [Config] struct.
Most options are a [ConfigOption], which pairs a value with a name and bounds used to validate requests to update the value.

```rust
# use otter_ssat::config::{Config, CubeCapacity};
let mut config = Config::default();
assert!(config.range.set_bounded(0.1));
assert!(!config.range.set_bounded(1.5));

config.unsat_capacity.value = CubeCapacity::Every(64);
assert!(config.all_candidates.value);
```
*/

mod capacity;
pub use capacity::CubeCapacity;

mod config_option;
pub use config_option::ConfigOption;

use std::{path::PathBuf, time::Duration};

/// The procedure used to count weighted formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountingEngine {
    /// Count within the process, by enumeration.
    InProcess,

    /// Count by calling an external program.
    External,
}

impl std::fmt::Display for CountingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProcess => write!(f, "in-process"),
            Self::External => write!(f, "external"),
        }
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The solve stops once the gap between the upper and lower bound is at most the range.
    pub range: ConfigOption<f64>,

    /// The number of unsatisfying cubes collected before the bounds are updated.
    pub unsat_capacity: ConfigOption<CubeCapacity>,

    /// The number of satisfying cubes collected before the bounds are updated.
    pub sat_capacity: ConfigOption<CubeCapacity>,

    /// Generalise satisfying assignments by minimal hitting sets over outer atoms, rather than by selection literals.
    pub all_candidates: ConfigOption<bool>,

    /// Minimise cores before learning.
    pub minimal_core: ConfigOption<bool>,

    /// Greedily deselect clauses before counting, for existential-random prefixes.
    pub greedy: ConfigOption<bool>,

    /// Skip subsumed clauses when blocking, for existential-random prefixes.
    pub subsumption: ConfigOption<bool>,

    /// Prune partial assignments by a relaxed count, for existential-random prefixes.
    pub partial: ConfigOption<bool>,

    /// Fix pure outer literals, for existential-random prefixes.
    pub pure_literals: ConfigOption<bool>,

    /// Fix outer unit clauses, for existential-random prefixes.
    pub unit_clauses: ConfigOption<bool>,

    /// Which procedure to use to count weighted formulas.
    pub counting: ConfigOption<CountingEngine>,

    /// The program called by an external counting oracle.
    pub counter_program: PathBuf,

    /// Arguments passed to an external counting oracle before the path to a query.
    pub counter_args: Vec<String>,

    /// The time limit for a solve, where a limit of zero is no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            range: ConfigOption {
                name: "range",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            unsat_capacity: ConfigOption {
                name: "unsat_capacity",
                min: CubeCapacity::Once,
                max: CubeCapacity::Once,
                value: CubeCapacity::Once,
            },

            sat_capacity: ConfigOption {
                name: "sat_capacity",
                min: CubeCapacity::Once,
                max: CubeCapacity::Once,
                value: CubeCapacity::Once,
            },

            all_candidates: switch("all_candidates", true),
            minimal_core: switch("minimal_core", true),
            greedy: switch("greedy", true),
            subsumption: switch("subsumption", true),
            partial: switch("partial", true),
            pure_literals: switch("pure_literals", true),
            unit_clauses: switch("unit_clauses", true),

            counting: ConfigOption {
                name: "counting",
                min: CountingEngine::InProcess,
                max: CountingEngine::External,
                value: CountingEngine::InProcess,
            },

            counter_program: PathBuf::from("bin/cachet"),
            counter_args: Vec::default(),

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },
        }
    }
}

fn switch(name: &'static str, value: bool) -> ConfigOption<bool> {
    ConfigOption {
        name,
        min: false,
        max: true,
        value,
    }
}
