/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the targets below.
So, for example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs of the refinement loop alone can be found with `RUST_LOG=cegar=debug …`.

Note, the library does not provide a log implementation.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading a formula](crate::builder::sdimacs)
    pub const PARSER: &str = "parser";

    /// Logs related to the [prefix](crate::structures::prefix) and its [classification](crate::procedures::classify)
    pub const PREFIX: &str = "prefix";

    /// Logs related to the [selector](crate::procedures::selector)
    pub const SELECTOR: &str = "selector";

    /// Logs related to [core minimisation](crate::procedures::core)
    pub const CORE: &str = "core";

    /// Logs related to the [refinement loop](crate::procedures::cegar)
    pub const CEGAR: &str = "cegar";

    /// Logs related to [generalisation by hitting sets](crate::procedures::hitting_set)
    pub const HITTING_SET: &str = "hitting_set";

    /// Logs related to [cubes and bounds](crate::procedures::cubes)
    pub const CUBES: &str = "cubes";

    /// Logs related to [counting oracles](crate::counting)
    pub const COUNTING: &str = "counting";

    /// Logs related to the [exact existential-random solve](crate::procedures::exist_random)
    pub const EXIST_RANDOM: &str = "exist_random";
}
