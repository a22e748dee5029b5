#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use otter_ssat::{context::Context, reports::Report, structures::clause::Clause};

mod config;
mod parse_args;
mod read;

use config::CliConfig;

fn main() {
    let matches = match parse_args::cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            std::process::exit(match e.use_stderr() {
                true => 1,
                false => 0,
            });
        }
    };

    let config_io = CliConfig::from_args(&matches);

    let default_filter = match config_io.verbose {
        true => "info",
        false => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let config = match config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("c Error: {e}");
            std::process::exit(1);
        }
    };

    let mut the_context = Context::from_config(config);

    if let Err(e) = read::read_sdimacs(&config_io.path, &mut the_context, config_io.verbose) {
        eprintln!("c Error reading {}: {e}", config_io.path.display());
        std::process::exit(1);
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let handler_flag = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        log::warn!("Failed to install an interrupt handler: {e}");
    }
    the_context.set_callback_terminate(Box::new(move || interrupted.load(Ordering::SeqCst)));

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    println!("s {report}");
    println!("  Upper bound: {:.6e}", the_context.bounds.upper());
    println!("  Lower bound: {:.6e}", the_context.bounds.lower());
    if report == Report::Exact {
        println!("  Satisfying probability: {:.6e}", the_context.bounds.lower());
    }

    if config_io.verbose {
        if let Some(witness) = &the_context.witness {
            println!("v {}", witness.as_dimacs(true));
        }
    }

    if config_io.timing {
        println!("{}", the_context.counters);
    }
}
