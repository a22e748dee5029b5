/*!
Lists of cubes, and the probability of their union.

Cubes are stored over selector atoms, so a cube may contain the selection literal of a clause in place of a disjunction over outer atoms.
Cubes of one list are pairwise distinct but may overlap, and so the probability mass of a list is the probability of the union of the cubes, found by a query to the counting oracle.

The query for a collection of cubes is a network:
- Each alias of an outer atom is weighted with the probability of the outer atom.
- Each selection atom is defined as the conjunction of the negations of the outer literals of its clause.
- Each cube is an (unweighted) gate, defined as the conjunction of its literals.
- A final clause requires some gate.

A list has a [capacity](CubeCapacity) and cubes are pending until the list is drained, at which point the bounds are updated.
*/

use std::{collections::HashSet, time::Instant};

use crate::{
    config::{Config, CubeCapacity},
    context::GenericContext,
    counting::{QueryBuilder, WeightedCnf},
    misc::log::targets,
    oracle::SatOracle,
    structures::{
        clause::Cube,
        literal::{CLiteral, Literal},
        prefix::Prefix,
    },
    types::err::ErrorKind,
};

use super::selector::{Selector, SelectorAtom};

/// A list of cubes, some of which may be pending.
#[derive(Debug)]
pub struct CubeList {
    capacity: CubeCapacity,
    pending: Vec<Cube>,
    drained: Vec<Cube>,
}

impl CubeList {
    pub fn new(capacity: CubeCapacity) -> Self {
        CubeList {
            capacity,
            pending: Vec::default(),
            drained: Vec::default(),
        }
    }

    pub fn push(&mut self, cube: Cube) {
        self.pending.push(cube);
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_full(self.pending.len())
    }

    pub fn pending(&self) -> &[Cube] {
        &self.pending
    }

    /// Cubes which have been accounted for in the bounds.
    pub fn drained(&self) -> &[Cube] {
        &self.drained
    }

    /// Moves pending cubes to the drained cubes, returning true if some cube was pending.
    pub fn drain(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        self.drained.append(&mut self.pending);
        true
    }
}

/// The cubes and probability mass accumulated during a solve.
#[derive(Debug)]
pub struct Accumulator {
    pub unsat: CubeList,
    pub sat: CubeList,

    /// The probability of the union of drained unsatisfying cubes.
    pub unsat_mass: f64,

    /// The probability of the union of drained satisfying cubes.
    pub sat_mass: f64,

    /// Unsatisfying mass from worlds evaluated exactly.
    pub evaluated_unsat: f64,

    /// Satisfying mass from worlds evaluated exactly.
    pub evaluated_sat: f64,
}

impl Accumulator {
    pub fn new(config: &Config) -> Self {
        Accumulator {
            unsat: CubeList::new(config.unsat_capacity.value),
            sat: CubeList::new(config.sat_capacity.value),
            unsat_mass: 0.0,
            sat_mass: 0.0,
            evaluated_unsat: 0.0,
            evaluated_sat: 0.0,
        }
    }
}

/// The network query for the union of `cubes`.
pub fn network_query<O: SatOracle>(selector: &Selector<O>, prefix: &Prefix, cubes: &[Cube]) -> WeightedCnf {
    let mut builder = QueryBuilder::default();
    let mut defined = HashSet::new();
    let mut gates = Vec::with_capacity(cubes.len());

    for cube in cubes {
        let gate = CLiteral::new(builder.fresh_atom(), true);
        let mut closing = vec![gate];

        for literal in cube {
            let input = network_literal(selector, prefix, &mut builder, &mut defined, *literal);
            builder.add_clause(vec![gate.negate(), input]);
            closing.push(input.negate());
        }

        builder.add_clause(closing);
        gates.push(gate);
    }

    builder.add_clause(gates);
    builder.finish()
}

/// The query literal for a selector literal, defining the selection atom of the literal on first use.
fn network_literal<O: SatOracle>(
    selector: &Selector<O>,
    prefix: &Prefix,
    builder: &mut QueryBuilder,
    defined: &mut HashSet<CLiteral>,
    literal: CLiteral,
) -> CLiteral {
    match selector.kind(literal.atom()) {
        Some(SelectorAtom::Outer(atom)) => builder.literal(literal, prefix.probability(*atom)),

        Some(SelectorAtom::Selection { outer, .. }) => {
            let x = CLiteral::new(builder.atom(literal.atom(), None), true);

            if defined.insert(x) {
                let mut definition = vec![x];
                for outer_literal in outer {
                    let Some(alias) = selector.to_selector(*outer_literal) else {
                        continue;
                    };
                    let input = builder.literal(alias, prefix.probability(outer_literal.atom()));
                    builder.add_clause(vec![x.negate(), input.negate()]);
                    definition.push(input);
                }
                builder.add_clause(definition);
            }

            CLiteral::new(x.atom(), literal.polarity())
        }

        None => builder.literal(literal, None),
    }
}

impl<O: SatOracle + Default> GenericContext<O> {
    /// The probability of a query, from the counting oracle.
    pub fn count(&mut self, query: &WeightedCnf) -> Result<f64, ErrorKind> {
        let start = Instant::now();
        self.counters.counting_calls += 1;
        let probability = self.count_oracle.weighted_probability(query);
        self.counters.counting_time += start.elapsed();
        probability
    }

    /// The probability of the union of `cubes`.
    pub(crate) fn union_probability(&mut self, selector: &Selector<O>, cubes: &[Cube]) -> Result<f64, ErrorKind> {
        if cubes.is_empty() {
            return Ok(0.0);
        }
        if cubes.iter().any(|cube| cube.is_empty()) {
            return Ok(1.0);
        }

        let query = network_query(selector, &self.prefix, cubes);
        self.count(&query)
    }

    /// Drains the unsatisfying cubes, and raises the unsatisfying mass of the bounds.
    pub(crate) fn drain_unsat(&mut self, selector: &Selector<O>, cubes: &mut Accumulator) -> Result<(), ErrorKind> {
        if !cubes.unsat.drain() {
            return Ok(());
        }
        cubes.unsat_mass = self.union_probability(selector, cubes.unsat.drained())?;
        log::debug!(target: targets::CUBES, "{} unsatisfying cubes, with mass {}", cubes.unsat.drained().len(), cubes.unsat_mass);
        self.raise_unsat(cubes.unsat_mass + cubes.evaluated_unsat);
        Ok(())
    }

    /// Drains the satisfying cubes, and raises the satisfying mass of the bounds.
    pub(crate) fn drain_sat(&mut self, selector: &Selector<O>, cubes: &mut Accumulator) -> Result<(), ErrorKind> {
        if !cubes.sat.drain() {
            return Ok(());
        }
        cubes.sat_mass = self.union_probability(selector, cubes.sat.drained())?;
        log::debug!(target: targets::CUBES, "{} satisfying cubes, with mass {}", cubes.sat.drained().len(), cubes.sat_mass);
        self.raise_sat(cubes.sat_mass + cubes.evaluated_sat);
        Ok(())
    }

    pub(crate) fn drain_all(&mut self, selector: &Selector<O>, cubes: &mut Accumulator) -> Result<(), ErrorKind> {
        self.drain_unsat(selector, cubes)?;
        self.drain_sat(selector, cubes)
    }
}

#[cfg(test)]
mod cube_tests {
    use super::*;
    use crate::{
        counting::{CountOracle, EnumerationCounter},
        oracle::VarisatOracle,
        structures::quantifier::Quantifier,
    };

    #[test]
    fn capacity() {
        let mut list = CubeList::new(CubeCapacity::Every(2));
        list.push(vec![CLiteral::from(1)]);
        assert!(!list.is_full());
        list.push(vec![CLiteral::from(2)]);
        assert!(list.is_full());
        assert!(list.drain());
        assert!(!list.drain());
        assert_eq!(list.drained().len(), 2);
    }

    #[test]
    fn overlapping_union() {
        let mut prefix = Prefix::default();
        let _ = prefix.quantify(Quantifier::Random(0.5), &[1, 2]);
        let _ = prefix.quantify(Quantifier::Exist, &[3]);

        let selector = Selector::<VarisatOracle>::outer_only(&prefix);
        let cubes = vec![
            selector.translate(&[CLiteral::from(1)]),
            selector.translate(&[CLiteral::from(2)]),
        ];

        let query = network_query(&selector, &prefix, &cubes);
        let probability = EnumerationCounter::default().weighted_probability(&query);
        assert!(probability.is_ok_and(|p| (p - 0.75).abs() < 1e-12));
    }

    #[test]
    fn selection_literals() {
        let mut prefix = Prefix::default();
        let _ = prefix.quantify(Quantifier::Random(0.5), &[1, 2]);
        let _ = prefix.quantify(Quantifier::Exist, &[3]);

        let clauses = vec![vec![CLiteral::from(1), CLiteral::from(2), CLiteral::from(3)]];
        let selector = Selector::<VarisatOracle>::with_selection(&prefix, &clauses);
        let Some(selection) = selector.selection_literal(0) else {
            panic!("missing selection literal");
        };

        // The clause is not selected when either outer literal is true.
        let query = network_query(&selector, &prefix, &[vec![selection.negate()]]);
        let probability = EnumerationCounter::default().weighted_probability(&query);
        assert!(probability.is_ok_and(|p| (p - 0.75).abs() < 1e-12));
    }
}
