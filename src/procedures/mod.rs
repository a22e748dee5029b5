/*!
Procedures used to solve a formula.

Most procedures are methods on a [context](crate::context::GenericContext), and each is in a separate file.

- [classify] chooses a strategy from the levels of the prefix.
- [selector] builds the selector formula over outer atoms.
- [cegar] contains the refinement loops over random and universal outer levels.
- [all_candidates] contains the refinement loop which generalises by [hitting sets](hitting_set).
- [exist_random] contains the exact solve for an existential outer level.
- [core] minimises cores of the primary formula.
- [cubes] maintains lists of learnt cubes and the bounds derived from them.

The entry point is [solve](crate::context::GenericContext::solve).
*/

pub mod all_candidates;
pub mod cegar;
pub mod classify;
pub mod core;
pub mod cubes;
pub mod exist_random;
pub mod hitting_set;
pub mod selector;
pub mod solve;
