/*!
The selector formula, an abstraction of the primary formula over outer atoms.

Atoms of the selector are distinct from atoms of the primary formula, and each selector atom is one of two kinds:
- An alias of an outer atom of the primary formula.
- The selection atom of a clause, with at least two outer literals.

A clause is *selected* on an assignment to outer atoms if each outer literal of the clause is false, and so the clause must be satisfied by inner atoms.
The selection literal of a clause is true exactly when the clause is selected:
- A clause with outer literals l₁, …, lₙ (for n > 1) has a selection atom x, defined by (¬x ∨ ¬lᵢ) for each i and (x ∨ l₁ ∨ … ∨ lₙ).
- A clause with a single outer literal l has selection literal ¬l.
- A clause with no outer literal has no selection literal, and is always selected.

```rust
# use otter_ssat::procedures::selector::{Selector, SelectorAtom};
# use otter_ssat::oracle::VarisatOracle;
# use otter_ssat::structures::prefix::Prefix;
# use otter_ssat::structures::quantifier::Quantifier;
# use otter_ssat::structures::literal::{CLiteral, Literal};
let mut prefix = Prefix::default();
let _ = prefix.quantify(Quantifier::Random(0.5), &[1, 2]);
let _ = prefix.quantify(Quantifier::Exist, &[3]);

let clauses = vec![
    vec![CLiteral::from(1), CLiteral::from(2), CLiteral::from(3)],
    vec![CLiteral::from(-1), CLiteral::from(-3)],
    vec![CLiteral::from(3)],
];

let selector = Selector::<VarisatOracle>::with_selection(&prefix, &clauses);

let selection = selector.selection_literal(0).unwrap();
assert!(matches!(selector.kind(selection.atom()), Some(SelectorAtom::Selection { key: 0, .. })));
assert_eq!(selector.selection_literal(1), selector.to_selector(CLiteral::from(1)));
assert_eq!(selector.selection_literal(2), None);
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets,
    oracle::SatOracle,
    reports::Satisfiability,
    structures::{
        atom::Atom,
        clause::{CClause, Cube},
        literal::{CLiteral, Literal},
        prefix::Prefix,
    },
    types::err::ErrorKind,
};

/// The kind of an atom of a selector formula.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectorAtom {
    /// An alias of an outer atom of the primary formula.
    Outer(Atom),

    /// The selection atom of the clause with the given key, together with the outer literals of the clause.
    Selection { key: usize, outer: Vec<CLiteral> },
}

/// A selector formula and the index between selector atoms and the primary formula.
pub struct Selector<O: SatOracle> {
    pub oracle: O,

    /// The kind of each selector atom, indexed by selector atom.
    kinds: Vec<Option<SelectorAtom>>,

    /// The selector atom aliasing each outer atom of the primary formula.
    aliases: HashMap<Atom, Atom>,

    /// The selection literal of each clause of the primary formula, indexed by the key of the clause.
    selection: Vec<Option<CLiteral>>,
}

impl<O: SatOracle + Default> Selector<O> {
    /// A selector with an alias for each outer atom, and no selection literals.
    pub fn outer_only(prefix: &Prefix) -> Self {
        let mut selector = Selector {
            oracle: O::default(),
            kinds: vec![None],
            aliases: HashMap::default(),
            selection: Vec::default(),
        };

        for &atom in prefix.outer_atoms() {
            selector.alias(atom);
        }

        selector
    }

    /// A selector with an alias for each outer atom, and a selection literal for each clause with an outer literal.
    pub fn with_selection(prefix: &Prefix, clauses: &[CClause]) -> Self {
        let mut selector = Self::outer_only(prefix);
        selector.selection = Vec::with_capacity(clauses.len());

        for (key, clause) in clauses.iter().enumerate() {
            let outer = clause
                .iter()
                .filter(|literal| prefix.is_outer(literal.atom()))
                .copied()
                .collect::<Vec<_>>();

            let selection = match outer.as_slice() {
                [] => None,

                [literal] => selector.to_selector(literal.negate()),

                _ => {
                    let aliased = outer
                        .iter()
                        .filter_map(|literal| selector.to_selector(*literal))
                        .collect::<Vec<_>>();

                    let atom = selector.fresh_atom(SelectorAtom::Selection { key, outer });
                    let x = CLiteral::new(atom, true);

                    let mut definition = Vec::with_capacity(aliased.len() + 1);
                    definition.push(x);
                    for literal in aliased {
                        selector.oracle.add_clause(&[x.negate(), literal.negate()]);
                        definition.push(literal);
                    }
                    selector.oracle.add_clause(&definition);

                    Some(x)
                }
            };

            selector.selection.push(selection);
        }

        log::debug!(target: targets::SELECTOR, "Selector with {} atoms over {} outer atoms", selector.atom_count(), selector.aliases.len());

        selector
    }

    fn fresh_atom(&mut self, kind: SelectorAtom) -> Atom {
        let atom = self.kinds.len() as Atom;
        self.kinds.push(Some(kind));
        self.oracle.ensure_atom(atom);
        atom
    }

    fn alias(&mut self, atom: Atom) -> Atom {
        match self.aliases.get(&atom) {
            Some(alias) => *alias,
            None => {
                let alias = self.fresh_atom(SelectorAtom::Outer(atom));
                self.aliases.insert(atom, alias);
                alias
            }
        }
    }
}

impl<O: SatOracle> Selector<O> {
    /// The number of selector atoms.
    pub fn atom_count(&self) -> usize {
        self.kinds.len() - 1
    }

    pub fn kind(&self, atom: Atom) -> Option<&SelectorAtom> {
        self.kinds.get(atom as usize).and_then(|kind| kind.as_ref())
    }

    /// The selection literal of the clause with the given key, if the clause has one.
    pub fn selection_literal(&self, key: usize) -> Option<CLiteral> {
        self.selection.get(key).copied().flatten()
    }

    /// The selector literal of an outer literal of the primary formula.
    pub fn to_selector(&self, literal: CLiteral) -> Option<CLiteral> {
        self.aliases
            .get(&literal.atom())
            .map(|alias| CLiteral::new(*alias, literal.polarity()))
    }

    /// The literal of the primary formula aliased by a selector literal, if the selector literal is an alias.
    pub fn to_primary(&self, literal: CLiteral) -> Option<CLiteral> {
        match self.kind(literal.atom()) {
            Some(SelectorAtom::Outer(atom)) => Some(CLiteral::new(*atom, literal.polarity())),
            _ => None,
        }
    }

    /// The selector cube of a collection of outer literals of the primary formula.
    pub fn translate(&self, literals: &[CLiteral]) -> Cube {
        literals
            .iter()
            .filter_map(|literal| self.to_selector(*literal))
            .collect()
    }

    /// Adds a clause over selector literals.
    pub fn add_clause(&mut self, clause: &[CLiteral]) {
        log::trace!(target: targets::SELECTOR, "Learnt {clause:?}");
        self.oracle.add_clause(clause);
    }

    pub fn solve(&mut self) -> Result<Satisfiability, ErrorKind> {
        self.oracle.solve_given(&[])
    }

    /// The assignment to outer atoms of the most recent model of the selector, as literals of the primary formula.
    ///
    /// Atoms without a value on the model are taken to be false.
    pub fn candidate(&self) -> Vec<CLiteral> {
        let mut candidate = Vec::with_capacity(self.aliases.len());
        for (atom, kind) in self.kinds.iter().enumerate() {
            if let Some(SelectorAtom::Outer(outer)) = kind {
                let value = self.oracle.value_of(atom as Atom).unwrap_or(false);
                candidate.push(CLiteral::new(*outer, value));
            }
        }
        candidate
    }

    /// Whether the clause with the given key is selected on the most recent model of the selector.
    pub fn is_selected(&self, key: usize) -> bool {
        match self.selection_literal(key) {
            Some(literal) => self.oracle.value_of(literal.atom()) == Some(literal.polarity()),
            None => true,
        }
    }
}

#[cfg(test)]
mod selector_tests {
    use super::*;
    use crate::{oracle::VarisatOracle, structures::quantifier::Quantifier};

    fn prefix() -> Prefix {
        let mut prefix = Prefix::default();
        let _ = prefix.quantify(Quantifier::Random(0.5), &[1, 2]);
        let _ = prefix.quantify(Quantifier::Exist, &[3]);
        prefix
    }

    #[test]
    fn aliases() {
        let selector = Selector::<VarisatOracle>::outer_only(&prefix());
        assert_eq!(selector.atom_count(), 2);

        let literal = CLiteral::from(-2);
        let alias = selector.to_selector(literal);
        assert!(alias.is_some_and(|alias| selector.to_primary(alias) == Some(literal)));
        assert_eq!(selector.to_selector(CLiteral::from(3)), None);
    }

    #[test]
    fn selection_semantics() {
        let clauses = vec![vec![CLiteral::from(1), CLiteral::from(2), CLiteral::from(3)]];
        let mut selector = Selector::<VarisatOracle>::with_selection(&prefix(), &clauses);
        let Some(x) = selector.selection_literal(0) else {
            panic!("missing selection literal");
        };

        // Both outer literals false forces selection.
        let given = selector.translate(&[CLiteral::from(-1), CLiteral::from(-2)]);
        assert_eq!(selector.oracle.solve_given(&given), Ok(Satisfiability::Satisfiable));
        assert!(selector.is_selected(0));
        assert_eq!(selector.oracle.value_of(x.atom()), Some(true));

        let given = selector.translate(&[CLiteral::from(-1), CLiteral::from(2)]);
        assert_eq!(selector.oracle.solve_given(&given), Ok(Satisfiability::Satisfiable));
        assert!(!selector.is_selected(0));

        let candidate = selector.candidate();
        assert_eq!(candidate, vec![CLiteral::from(-1), CLiteral::from(2)]);
    }
}
