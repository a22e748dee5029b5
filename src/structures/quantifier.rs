//! Quantifiers, which bind atoms in the prefix of a formula.

/// The quantifier of an atom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Quantifier {
    /// The atom takes value true with the given probability.
    Random(f64),

    /// The atom is chosen to maximise the probability of satisfaction.
    Exist,

    /// The atom is chosen to minimise the probability of satisfaction.
    Forall,
}

/// The kind of a quantifier, without a probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuantifierKind {
    Random,
    Exist,
    Forall,
}

impl Quantifier {
    pub fn kind(&self) -> QuantifierKind {
        match self {
            Self::Random(_) => QuantifierKind::Random,
            Self::Exist => QuantifierKind::Exist,
            Self::Forall => QuantifierKind::Forall,
        }
    }

    /// The probability of a random quantifier, and otherwise nothing.
    pub fn probability(&self) -> Option<f64> {
        match self {
            Self::Random(probability) => Some(*probability),
            Self::Exist | Self::Forall => None,
        }
    }
}

impl QuantifierKind {
    /// The character used to declare a block of this kind.
    pub fn symbol(&self) -> char {
        match self {
            Self::Random => 'r',
            Self::Exist => 'e',
            Self::Forall => 'a',
        }
    }
}

impl std::fmt::Display for QuantifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol().to_ascii_uppercase())
    }
}
