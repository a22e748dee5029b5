/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans indexed by atoms, where:
-  *v*\[a\] = Some(true) *if any only if* the atom a is true.
-  *v*\[a\] = Some(false) *if any only if* the atom a is false.
-  *v*\[a\] = None *if any only if* the atom a has no value.

As atoms begin at `1` the zero index is unused, and by convention is `Some(true)`.

```rust
# use otter_ssat::structures::valuation::Valuation;
# use otter_ssat::structures::literal::CLiteral;
let valuation = vec![Some(true), None, Some(true), Some(false)];

assert_eq!(valuation.value_of(1), None);
assert_eq!(valuation.value_of_literal(CLiteral::from(-3)), Some(true));
assert_eq!(valuation.value_of(9), None);
```
*/

use super::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom, if it has one.
    /// Atoms outside the valuation have no value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The value of a literal, if the atom of the literal has a value.
    fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }
}
