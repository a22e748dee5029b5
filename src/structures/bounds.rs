//! Bounds on the probability of satisfaction.

/// Probability mass known to be unsatisfying and satisfying.
///
/// Both masses are only ever raised, and so are monotonically non-decreasing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    unsat: f64,
    sat: f64,
}

impl Bounds {
    /// Probability mass proven unsatisfying.
    pub fn unsat_probability(&self) -> f64 {
        self.unsat
    }

    /// Probability mass proven satisfying.
    pub fn sat_probability(&self) -> f64 {
        self.sat
    }

    /// The upper bound on the probability of satisfaction.
    pub fn upper(&self) -> f64 {
        1.0 - self.unsat
    }

    /// The lower bound on the probability of satisfaction.
    pub fn lower(&self) -> f64 {
        self.sat
    }

    /// The gap between the upper and lower bounds.
    pub fn gap(&self) -> f64 {
        1.0 - self.unsat - self.sat
    }

    /// Raises the unsatisfying mass to `probability`, if greater.
    /// Returns true if the bounds changed.
    pub fn raise_unsat(&mut self, probability: f64) -> bool {
        let value = probability.clamp(0.0, 1.0 - self.sat);
        if value > self.unsat {
            self.unsat = value;
            true
        } else {
            false
        }
    }

    /// Raises the satisfying mass to `probability`, if greater.
    /// Returns true if the bounds changed.
    pub fn raise_sat(&mut self, probability: f64) -> bool {
        let value = probability.clamp(0.0, 1.0 - self.unsat);
        if value > self.sat {
            self.sat = value;
            true
        } else {
            false
        }
    }

    /// Sets the bounds to an exact value.
    pub fn settle(&mut self, probability: f64) {
        let probability = probability.clamp(0.0, 1.0);
        self.sat = self.sat.max(probability);
        self.unsat = self.unsat.max(1.0 - self.sat);
    }
}

#[cfg(test)]
mod bounds_tests {
    use super::*;

    #[test]
    fn monotone() {
        let mut bounds = Bounds::default();
        assert!(bounds.raise_unsat(0.25));
        assert!(!bounds.raise_unsat(0.125));
        assert!(bounds.raise_sat(0.5));
        assert_eq!(bounds.unsat_probability(), 0.25);
        assert_eq!(bounds.gap(), 0.25);

        assert!(bounds.raise_sat(0.9));
        assert_eq!(bounds.lower(), 0.75);
    }

    #[test]
    fn settle() {
        let mut bounds = Bounds::default();
        bounds.settle(0.375);
        assert_eq!(bounds.upper(), 0.375);
        assert_eq!(bounds.lower(), 0.375);
    }
}
