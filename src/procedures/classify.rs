/*!
Classification of a prefix to a solving strategy.

| Levels       | Strategy                                               |
|--------------|--------------------------------------------------------|
| E R, E R E   | [ExistRandom](Strategy::ExistRandom)                   |
| R E          | [AllCandidates](Strategy::AllCandidates) or [Stochastic](Strategy::Stochastic) |
| A E          | [AllCandidates](Strategy::AllCandidates) or [Qbf](Strategy::Qbf) |
| R E R        | [Stochastic](Strategy::Stochastic), evaluating each world exactly |

The choice for a random or universal outer level followed by an existential level is made by the `all_candidates` option.
Any other prefix of two or three levels is an unsupported pattern, and any other number of levels is unsupported.

```rust
# use otter_ssat::procedures::classify::{classify, Strategy};
# use otter_ssat::structures::quantifier::QuantifierKind::*;
# use otter_ssat::types::err::PrefixError;
assert_eq!(classify(&[Exist, Random, Exist], true), Ok(Strategy::ExistRandom));
assert_eq!(classify(&[Forall, Exist], false), Ok(Strategy::Qbf));
assert_eq!(classify(&[Random, Exist, Random], true), Ok(Strategy::Stochastic));
assert_eq!(classify(&[Exist, Forall], true), Err(PrefixError::UnsupportedPattern(vec![Exist, Forall])));
assert_eq!(classify(&[Exist, Random, Exist, Random], true), Err(PrefixError::UnsupportedLevels(4)));
```
*/

use crate::{structures::quantifier::QuantifierKind, types::err::PrefixError};

/// The procedure used to solve a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Enumerate assignments to the outer existential level, counting the remaining formula.
    ExistRandom,

    /// Refinement over outer worlds, generalising satisfying worlds by hitting sets.
    AllCandidates,

    /// Refinement over outer universal assignments, to decide a 2QBF formula.
    Qbf,

    /// Refinement over outer worlds, generalising satisfying worlds by selection literals.
    Stochastic,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExistRandom => write!(f, "exist-random"),
            Self::AllCandidates => write!(f, "all-candidates"),
            Self::Qbf => write!(f, "2qbf"),
            Self::Stochastic => write!(f, "stochastic"),
        }
    }
}

/// The strategy for a prefix with levels of the given kinds.
pub fn classify(kinds: &[QuantifierKind], all_candidates: bool) -> Result<Strategy, PrefixError> {
    use QuantifierKind::*;

    if !(2..=3).contains(&kinds.len()) {
        return Err(PrefixError::UnsupportedLevels(kinds.len()));
    }

    match kinds {
        [Exist, Random] | [Exist, Random, Exist] => Ok(Strategy::ExistRandom),

        [Random, Exist, Random] => Ok(Strategy::Stochastic),

        [Random, Exist] | [Forall, Exist] if all_candidates => Ok(Strategy::AllCandidates),

        [Random, Exist] => Ok(Strategy::Stochastic),

        [Forall, Exist] => Ok(Strategy::Qbf),

        _ => Err(PrefixError::UnsupportedPattern(kinds.to_vec())),
    }
}

#[cfg(test)]
mod classify_tests {
    use super::*;
    use crate::structures::quantifier::QuantifierKind::*;

    #[test]
    fn rejected_patterns() {
        for kinds in [
            vec![Exist, Forall],
            vec![Forall, Random],
            vec![Random, Forall],
            vec![Exist, Random, Forall],
            vec![Forall, Exist, Random],
            vec![Forall, Exist, Forall],
            vec![Random, Exist, Forall],
        ] {
            assert_eq!(classify(&kinds, true), Err(PrefixError::UnsupportedPattern(kinds.clone())));
        }
    }

    #[test]
    fn level_counts() {
        assert_eq!(classify(&[], true), Err(PrefixError::UnsupportedLevels(0)));
        assert_eq!(classify(&[Random], true), Err(PrefixError::UnsupportedLevels(1)));
    }

    #[test]
    fn outer_worlds() {
        assert_eq!(classify(&[Random, Exist], true), Ok(Strategy::AllCandidates));
        assert_eq!(classify(&[Random, Exist], false), Ok(Strategy::Stochastic));
        assert_eq!(classify(&[Forall, Exist], true), Ok(Strategy::AllCandidates));
        assert_eq!(classify(&[Random, Exist, Random], false), Ok(Strategy::Stochastic));
    }
}
