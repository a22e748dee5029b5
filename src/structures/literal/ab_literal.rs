use crate::structures::atom::{Atom, ATOM_MAX};

use super::Literal;

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn as_int(&self) -> isize {
        match self.polarity {
            true => self.atom as isize,
            false => -(self.atom as isize),
        }
    }
}

impl std::ops::Not for ABLiteral {
    type Output = ABLiteral;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

impl From<i32> for ABLiteral {
    fn from(value: i32) -> Self {
        ABLiteral::new(value.unsigned_abs(), value.is_positive())
    }
}

/// Conversion from the integer form of a literal.
///
/// Zero is not a literal, and atoms beyond [ATOM_MAX] are not supported.
impl TryFrom<isize> for ABLiteral {
    type Error = ();

    fn try_from(value: isize) -> Result<Self, Self::Error> {
        let atom = value.unsigned_abs();
        if atom == 0 || atom > ATOM_MAX as usize {
            Err(())
        } else {
            Ok(ABLiteral::new(atom as Atom, value.is_positive()))
        }
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn order() {
        let p = ABLiteral::new(1, true);
        let not_p = ABLiteral::new(1, false);
        let q = ABLiteral::new(2, false);

        assert!(not_p < p);
        assert!(p < q);
    }

    #[test]
    fn integer_forms() {
        assert_eq!(ABLiteral::try_from(-3_isize), Ok(ABLiteral::new(3, false)));
        assert_eq!(ABLiteral::from(4).as_int(), 4);
        assert!(ABLiteral::try_from(0_isize).is_err());
        assert_eq!(format!("{}", !ABLiteral::from(5)), "-5");
    }
}
