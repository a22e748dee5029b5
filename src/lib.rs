//! A library for bounding and determining the probability of satisfaction of stochastic boolean formulas.
//!
//! otter_ssat reads formulas in the SDIMACS format: a prefix of random, existential, and universal quantifier blocks, followed by clauses in conjunctive normal form.
//! The probability of satisfaction of a formula is bounded by refinement over assignments to the outer level of the prefix, with the help of incremental [satisfiability oracles](oracle) and a [counting oracle](counting).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](config), and formulas are added either through the [SDIMACS](crate::context::GenericContext::read_sdimacs) representation or [programatically](crate::context::GenericContext::add_clause).
//!
//! A solve first [classifies](crate::procedures::classify) the prefix, and then follows one of a handful of [procedures]:
//! - For an existential outer level, an [exact solve](crate::procedures::exist_random) enumerates outer assignments and counts the remaining formula.
//! - For a random or universal outer level, a [refinement loop](crate::procedures::cegar) learns cubes of outer worlds, and the bounds follow from the probability of the union of those cubes.
//!
//! Throughout a solve the [bounds](crate::structures::bounds) only ever tighten, and may be observed through a [callback](crate::context::callbacks).
//!
//! # Examples
//!
//! + Solve a formula with a random outer level.
//!
//! ```rust
//! # use otter_ssat::context::Context;
//! # use otter_ssat::config::Config;
//! # use otter_ssat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let sdimacs = "
//! p cnf 3 2
//! r 0.5 1 2 0
//! e 3 0
//!  1  3 0
//!  2 -3 0
//! ";
//!
//! assert!(the_context.read_sdimacs(sdimacs.as_bytes()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Exact));
//! assert!((the_context.bounds.lower() - 0.75).abs() < 1e-9);
//! ```
//!
//! + Find the best assignment to an existential outer level.
//!
//! ```rust
//! # use otter_ssat::context::Context;
//! # use otter_ssat::config::Config;
//! # use otter_ssat::reports::Report;
//! # use otter_ssat::structures::literal::CLiteral;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let sdimacs = "
//! p cnf 3 2
//! e 1 0
//! r 0.25 2 0
//! r 0.5 3 0
//!  1  2 0
//! -1  3 0
//! ";
//!
//! assert!(the_context.read_sdimacs(sdimacs.as_bytes()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Exact));
//! assert_eq!(the_context.bounds.lower(), 0.5);
//! assert_eq!(the_context.witness, Some(vec![CLiteral::from(1)]));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, and targets are defined in order to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

#[doc(hidden)]
pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod counting;
pub mod oracle;
pub mod reports;
pub mod structures;
pub mod types;

pub mod misc;
