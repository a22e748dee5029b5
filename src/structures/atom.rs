/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms are the 1-based indices used in the SSAT input format, without translation.
So, the atom of the DIMACS literal `-7` is `7`.

```rust
# use otter_ssat::structures::atom::Atom;
let atoms = (1..8).collect::<Vec<Atom>>();
assert_eq!(atoms.last(), Some(&7));
```

The atom `0` is never used in a formula, and structures indexed by atoms reserve index `0`.
This allows atoms to be used as the indicies of a structure, e.g. `quantifiers[a]`, without an offset.

# Notes
In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
