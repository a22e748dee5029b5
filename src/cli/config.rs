use std::{path::PathBuf, time::Duration};

use clap::ArgMatches;

use otter_ssat::config::{Config, CountingEngine, CubeCapacity};

/// A collection of configuration options relevant only to the CLI.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// The formula to solve.
    pub path: PathBuf,

    /// Whether to log progress and report a witness, if one exists.
    pub verbose: bool,

    /// Whether to report counters and timing.
    pub timing: bool,
}

impl CliConfig {
    pub fn from_args(args: &ArgMatches) -> Self {
        CliConfig {
            path: args.get_one::<PathBuf>("path").cloned().unwrap_or_default(),
            verbose: args.get_flag("verbose"),
            timing: args.get_flag("timing"),
        }
    }
}

pub enum ConfigError {
    OutOfBounds {
        name: &'static str,
        min: f64,
        max: f64,
        found: f64,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::OutOfBounds {
                name,
                min,
                max,
                found,
            } => write!(f, "{name} requires a value between {min} and {max}, found {found}"),
        }
    }
}

/// A [Config] from parsed CLI arguments.
///
/// Flags toggle the default value of a switch.
pub(super) fn config_from_args(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    if let Ok(Some(range)) = args.try_get_one::<f64>("range") {
        if !cfg.range.set_bounded(*range) {
            let (min, max) = cfg.range.min_max();
            return Err(ConfigError::OutOfBounds {
                name: cfg.range.name,
                min,
                max,
                found: *range,
            });
        }
    };

    if let Ok(Some(capacity)) = args.try_get_one::<CubeCapacity>("unsat_capacity") {
        cfg.unsat_capacity.value = *capacity
    };

    if let Ok(Some(capacity)) = args.try_get_one::<CubeCapacity>("sat_capacity") {
        cfg.sat_capacity.value = *capacity
    };

    for (flag, option) in [
        ("all_candidates", &mut cfg.all_candidates),
        ("minimal_core", &mut cfg.minimal_core),
        ("greedy", &mut cfg.greedy),
        ("subsumption", &mut cfg.subsumption),
        ("partial", &mut cfg.partial),
        ("pure_literals", &mut cfg.pure_literals),
    ] {
        if args.get_flag(flag) {
            option.value = !option.value;
            log::info!("{} set to: {}", option.name, option.value);
        }
    }

    if args.get_flag("external_counter") {
        cfg.counting.value = match cfg.counting.value {
            CountingEngine::InProcess => CountingEngine::External,
            CountingEngine::External => CountingEngine::InProcess,
        }
    };

    if let Ok(Some(path)) = args.try_get_one::<PathBuf>("counter") {
        cfg.counter_program = path.clone()
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        cfg.time_limit.value = Duration::from_secs(*secs)
    };

    Ok(cfg)
}
