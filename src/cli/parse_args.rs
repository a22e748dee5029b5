use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use otter_ssat::config::CubeCapacity;

fn capacity(value: &str) -> Result<CubeCapacity, String> {
    value
        .parse::<CubeCapacity>()
        .map_err(|_| format!("expected -1 or a positive integer, found '{value}'"))
}

/// The command line interface, parsed with [clap].
pub(super) fn cli() -> Command {
    Command::new("otter_ssat")
        .about("Bounds the probability of satisfaction of a stochastic boolean formula")
        .version(env!("CARGO_PKG_VERSION"))
        .allow_negative_numbers(true)

        .arg(Arg::new("path")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The SDIMACS file to solve, which may be compressed with gzip (.gz) or xz (.xz)."))

        .arg(Arg::new("range")
            .short('R')
            .value_name("RANGE")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help("Stop once the gap between the upper and lower bound is at most the range.
Default: 0"))

        .arg(Arg::new("unsat_capacity")
            .short('U')
            .value_name("CUBES")
            .value_parser(capacity)
            .required(false)
            .num_args(1)
            .help("Update the upper bound each time the given number of unsatisfying cubes are found, or once at the end with -1.
Default: -1"))

        .arg(Arg::new("sat_capacity")
            .short('L')
            .value_name("CUBES")
            .value_parser(capacity)
            .required(false)
            .num_args(1)
            .help("Update the lower bound each time the given number of satisfying cubes are found, or once at the end with -1.
Default: -1"))

        .arg(Arg::new("all_candidates")
            .short('a')
            .action(ArgAction::SetTrue)
            .help("Toggle generalisation of satisfying worlds by minimal hitting sets (default on)."))

        .arg(Arg::new("minimal_core")
            .short('m')
            .action(ArgAction::SetTrue)
            .help("Toggle core minimisation (default on)."))

        .arg(Arg::new("external_counter")
            .short('b')
            .action(ArgAction::SetTrue)
            .help("Toggle between the in-process counter and an external counting program (default in-process)."))

        .arg(Arg::new("counter")
            .long("counter")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("The external counting program.
Default: bin/cachet"))

        .arg(Arg::new("greedy")
            .short('g')
            .action(ArgAction::SetTrue)
            .help("Toggle greedy deselection of clauses, for an existential outer level (default on)."))

        .arg(Arg::new("subsumption")
            .short('s')
            .action(ArgAction::SetTrue)
            .help("Toggle subsumption when blocking, for an existential outer level (default on)."))

        .arg(Arg::new("partial")
            .short('p')
            .action(ArgAction::SetTrue)
            .help("Toggle pruning of partial assignments, for an existential outer level (default on)."))

        .arg(Arg::new("pure_literals")
            .short('r')
            .action(ArgAction::SetTrue)
            .help("Toggle fixing pure literals, for an existential outer level (default on)."))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Stop after the given number of seconds, reporting the best bounds found."))

        .arg(Arg::new("verbose")
            .short('v')
            .action(ArgAction::SetTrue)
            .help("Log progress, and display the best assignment found for an existential outer level."))

        .arg(Arg::new("timing")
            .short('t')
            .action(ArgAction::SetTrue)
            .help("Display counters and timing information."))
}
