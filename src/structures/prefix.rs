/*!
The prefix of a formula, as a sequence of quantifier levels.

Levels are formed by declarations, in order:
- Consecutive declarations of the same kind accumulate into the current level.
- A declaration of a different kind opens a new level.

Random atoms in a level may carry different probabilities.

```rust
# use otter_ssat::structures::prefix::Prefix;
# use otter_ssat::structures::quantifier::{Quantifier, QuantifierKind};
let mut prefix = Prefix::default();
prefix.quantify(Quantifier::Random(0.5), &[1]).unwrap();
prefix.quantify(Quantifier::Random(0.3), &[2]).unwrap();
prefix.quantify(Quantifier::Exist, &[3, 4]).unwrap();

assert_eq!(prefix.level_count(), 2);
assert_eq!(prefix.kinds(), vec![QuantifierKind::Random, QuantifierKind::Exist]);
assert_eq!(prefix.level_of(2), Some(0));
assert_eq!(prefix.as_dimacs(), "r 0.5 1 0\nr 0.3 2 0\ne 3 4 0\n");
```
*/

use crate::{
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        quantifier::{Quantifier, QuantifierKind},
    },
    types::err::PrefixError,
};

/// A level of a prefix, a collection of atoms bound by quantifiers of the same kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    kind: QuantifierKind,
    atoms: Vec<Atom>,
}

impl Level {
    pub fn kind(&self) -> QuantifierKind {
        self.kind
    }

    /// The atoms of the level, in order of declaration.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
}

/// The prefix of a formula.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Prefix {
    levels: Vec<Level>,

    /// The quantifier of each atom, indexed by atom.
    quantifiers: Vec<Option<Quantifier>>,

    /// The level of each atom, indexed by atom.
    level_of: Vec<Option<usize>>,
}

impl Prefix {
    /// Quantifies `atoms` with `quantifier`, following the accumulation rule for levels.
    ///
    /// An empty collection of atoms has no effect.
    pub fn quantify(&mut self, quantifier: Quantifier, atoms: &[Atom]) -> Result<(), PrefixError> {
        if let Some(probability) = quantifier.probability() {
            if !(0.0..=1.0).contains(&probability) {
                return Err(PrefixError::InvalidProbability);
            }
        }

        for (index, &atom) in atoms.iter().enumerate() {
            if atom == 0 {
                return Err(PrefixError::InvalidAtom);
            }
            if self.quantifier(atom).is_some() || atoms[..index].contains(&atom) {
                return Err(PrefixError::Requantified(atom));
            }
        }

        if atoms.is_empty() {
            return Ok(());
        }

        if self.levels.last().map(|level| level.kind) != Some(quantifier.kind()) {
            self.levels.push(Level {
                kind: quantifier.kind(),
                atoms: Vec::default(),
            });
        }

        let index = self.levels.len() - 1;
        for &atom in atoms {
            self.ensure_atom(atom);
            self.quantifiers[atom as usize] = Some(quantifier);
            self.level_of[atom as usize] = Some(index);
            self.levels[index].atoms.push(atom);
        }

        Ok(())
    }

    fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.quantifiers.len() < required {
            self.quantifiers.resize(required, None);
            self.level_of.resize(required, None);
        }
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The kinds of each level, in order.
    pub fn kinds(&self) -> Vec<QuantifierKind> {
        self.levels.iter().map(|level| level.kind).collect()
    }

    pub fn quantifier(&self, atom: Atom) -> Option<Quantifier> {
        self.quantifiers.get(atom as usize).copied().flatten()
    }

    pub fn level_of(&self, atom: Atom) -> Option<usize> {
        self.level_of.get(atom as usize).copied().flatten()
    }

    /// The probability of a random atom, and otherwise nothing.
    pub fn probability(&self, atom: Atom) -> Option<f64> {
        self.quantifier(atom).and_then(|quantifier| quantifier.probability())
    }

    /// Whether the atom is bound at the outermost level.
    pub fn is_outer(&self, atom: Atom) -> bool {
        self.level_of(atom) == Some(0)
    }

    pub fn is_random(&self, atom: Atom) -> bool {
        matches!(self.quantifier(atom), Some(Quantifier::Random(_)))
    }

    pub fn is_exist(&self, atom: Atom) -> bool {
        matches!(self.quantifier(atom), Some(Quantifier::Exist))
    }

    /// The atoms of the outermost level.
    pub fn outer_atoms(&self) -> &[Atom] {
        match self.levels.first() {
            Some(level) => &level.atoms,
            None => &[],
        }
    }

    /// The probability mass of the (partial) assignment given as a collection of literals.
    ///
    /// Atoms without a probability contribute a factor of one.
    pub fn weight_of(&self, literals: &[CLiteral]) -> f64 {
        literals
            .iter()
            .map(|literal| match self.probability(literal.atom()) {
                Some(p) if literal.polarity() => p,
                Some(p) => 1.0 - p,
                None => 1.0,
            })
            .product()
    }

    /// Binds each unquantified atom from `atoms` existentially at the innermost position.
    ///
    /// Atoms are added to the innermost level if that level is existential, and otherwise to a fresh trailing level.
    /// Returns the number of atoms bound.
    pub fn bind_free_atoms(&mut self, atoms: impl Iterator<Item = Atom>) -> usize {
        let mut free = atoms
            .filter(|atom| *atom != 0 && self.quantifier(*atom).is_none())
            .collect::<Vec<_>>();
        free.sort_unstable();
        free.dedup();

        if !free.is_empty() {
            if self.levels.last().map(|level| level.kind) != Some(QuantifierKind::Exist) {
                self.levels.push(Level {
                    kind: QuantifierKind::Exist,
                    atoms: Vec::default(),
                });
            }
            // The atoms are unquantified, so this does not fail.
            let _ = self.quantify(Quantifier::Exist, &free);
        }

        free.len()
    }

    /// Closes a prefix of a single level with an empty level of a complementary kind.
    ///
    /// Random and universal levels are followed by an existential level, and an existential level by a random level.
    /// Returns true if a level was added.
    pub fn close_single_level(&mut self) -> bool {
        if self.levels.len() != 1 {
            return false;
        }
        let kind = match self.levels[0].kind {
            QuantifierKind::Random | QuantifierKind::Forall => QuantifierKind::Exist,
            QuantifierKind::Exist => QuantifierKind::Random,
        };
        self.levels.push(Level {
            kind,
            atoms: Vec::default(),
        });
        true
    }

    /// The prefix as lines of the SSAT format.
    ///
    /// Each maximal run of random atoms with a shared probability is written to a single line.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = String::default();

        for level in &self.levels {
            let mut line: Option<(Quantifier, Vec<Atom>)> = None;

            for &atom in &level.atoms {
                let Some(quantifier) = self.quantifier(atom) else {
                    continue;
                };
                match &mut line {
                    Some((current, atoms)) if *current == quantifier => atoms.push(atom),
                    _ => {
                        if let Some((current, atoms)) = line.take() {
                            the_string.push_str(&prefix_line(current, &atoms));
                        }
                        line = Some((quantifier, vec![atom]));
                    }
                }
            }

            if let Some((current, atoms)) = line {
                the_string.push_str(&prefix_line(current, &atoms));
            }
        }

        the_string
    }
}

fn prefix_line(quantifier: Quantifier, atoms: &[Atom]) -> String {
    let mut the_string = String::default();
    the_string.push(quantifier.kind().symbol());
    if let Some(probability) = quantifier.probability() {
        the_string.push_str(&format!(" {probability}"));
    }
    for atom in atoms {
        the_string.push_str(&format!(" {atom}"));
    }
    the_string.push_str(" 0\n");
    the_string
}

#[cfg(test)]
mod prefix_tests {
    use super::*;

    #[test]
    fn accumulation() {
        let mut prefix = Prefix::default();
        assert!(prefix.quantify(Quantifier::Exist, &[1]).is_ok());
        assert!(prefix.quantify(Quantifier::Exist, &[2]).is_ok());
        assert!(prefix.quantify(Quantifier::Random(0.2), &[3]).is_ok());
        assert!(prefix.quantify(Quantifier::Exist, &[4]).is_ok());

        assert_eq!(prefix.level_count(), 3);
        assert_eq!(prefix.levels()[0].atoms(), &[1, 2]);
        assert_eq!(prefix.level_of(4), Some(2));
    }

    #[test]
    fn requantification() {
        let mut prefix = Prefix::default();
        assert!(prefix.quantify(Quantifier::Exist, &[1]).is_ok());
        assert_eq!(
            prefix.quantify(Quantifier::Forall, &[1]),
            Err(PrefixError::Requantified(1))
        );
        assert_eq!(
            prefix.quantify(Quantifier::Random(1.5), &[2]),
            Err(PrefixError::InvalidProbability)
        );
    }

    #[test]
    fn free_atoms() {
        let mut prefix = Prefix::default();
        let _ = prefix.quantify(Quantifier::Random(0.5), &[1]);
        assert_eq!(prefix.bind_free_atoms([1, 3, 2, 3].into_iter()), 2);
        assert_eq!(prefix.kinds(), vec![QuantifierKind::Random, QuantifierKind::Exist]);
        assert_eq!(prefix.levels()[1].atoms(), &[2, 3]);

        assert_eq!(prefix.bind_free_atoms([4].into_iter()), 1);
        assert_eq!(prefix.level_count(), 2);
    }

    #[test]
    fn single_level() {
        let mut prefix = Prefix::default();
        let _ = prefix.quantify(Quantifier::Exist, &[1]);
        assert!(prefix.close_single_level());
        assert_eq!(prefix.kinds(), vec![QuantifierKind::Exist, QuantifierKind::Random]);
        assert!(!prefix.close_single_level());
    }

    #[test]
    fn weights() {
        let mut prefix = Prefix::default();
        let _ = prefix.quantify(Quantifier::Random(0.25), &[1, 2]);
        let _ = prefix.quantify(Quantifier::Exist, &[3]);

        let world = vec![CLiteral::new(1, true), CLiteral::new(2, false), CLiteral::new(3, true)];
        assert!((prefix.weight_of(&world) - 0.1875).abs() < 1e-12);
    }
}
