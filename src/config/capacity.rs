use std::str::FromStr;

/// The capacity of a list of cubes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeCapacity {
    /// Drain the list once, when the solve ends.
    Once,

    /// Drain the list each time the given number of cubes are pending.
    Every(usize),
}

impl CubeCapacity {
    /// Whether a list with `pending` cubes should be drained.
    pub fn is_full(&self, pending: usize) -> bool {
        match self {
            Self::Once => false,
            Self::Every(limit) => pending > 0 && pending >= *limit,
        }
    }
}

/// Parses `-1` as [Once](CubeCapacity::Once) and any positive integer `n` as [Every(n)](CubeCapacity::Every).
impl FromStr for CubeCapacity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<isize>() {
            Ok(-1) => Ok(Self::Once),
            Ok(n) if n > 0 => Ok(Self::Every(n as usize)),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CubeCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Once => write!(f, "-1"),
            Self::Every(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod capacity_tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("-1".parse::<CubeCapacity>(), Ok(CubeCapacity::Once));
        assert_eq!("12".parse::<CubeCapacity>(), Ok(CubeCapacity::Every(12)));
        assert!("0".parse::<CubeCapacity>().is_err());
        assert!("-2".parse::<CubeCapacity>().is_err());
    }

    #[test]
    fn full() {
        assert!(!CubeCapacity::Once.is_full(1000));
        assert!(!CubeCapacity::Every(2).is_full(1));
        assert!(CubeCapacity::Every(2).is_full(2));
    }
}
