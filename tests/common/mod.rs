#![allow(dead_code)]

use otter_ssat::{
    config::Config,
    context::Context,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
        quantifier::Quantifier,
    },
};

/// A context with the given configuration, from an SDIMACS string.
pub fn context_from(sdimacs: &str, config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    if let Err(e) = the_context.read_sdimacs(sdimacs.as_bytes()) {
        panic!("failed to read formula: {e}");
    }
    the_context
}

/// The probability of satisfaction of a formula, by evaluation of every assignment in the order of the prefix.
///
/// Atoms of clauses without a quantifier are existential, after every quantified atom.
pub fn reference_probability(context: &Context) -> f64 {
    let mut order: Vec<(Atom, Quantifier)> = Vec::default();
    for level in context.prefix.levels() {
        for &atom in level.atoms() {
            if let Some(quantifier) = context.prefix.quantifier(atom) {
                order.push((atom, quantifier));
            }
        }
    }

    let mut free = context
        .clause_db
        .iter()
        .flatten()
        .map(|literal| literal.atom())
        .filter(|atom| context.prefix.quantifier(*atom).is_none())
        .collect::<Vec<_>>();
    free.sort_unstable();
    free.dedup();
    order.extend(free.into_iter().map(|atom| (atom, Quantifier::Exist)));

    let mut valuation = vec![None; context.atom_count() + 1];
    evaluate(&order, &context.clause_db, &mut valuation)
}

fn evaluate(order: &[(Atom, Quantifier)], clauses: &[CClause], valuation: &mut Vec<Option<bool>>) -> f64 {
    let Some(((atom, quantifier), rest)) = order.split_first() else {
        let satisfied = clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|literal| valuation[literal.atom() as usize] == Some(literal.polarity()))
        });
        return if satisfied { 1.0 } else { 0.0 };
    };

    valuation[*atom as usize] = Some(true);
    let high = evaluate(rest, clauses, valuation);
    valuation[*atom as usize] = Some(false);
    let low = evaluate(rest, clauses, valuation);
    valuation[*atom as usize] = None;

    match quantifier {
        Quantifier::Random(p) => p * high + (1.0 - p) * low,
        Quantifier::Exist => high.max(low),
        Quantifier::Forall => high.min(low),
    }
}

pub fn approximately(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Each combination of the switches used with a random or universal outer level.
pub fn outer_world_configurations() -> Vec<Config> {
    let mut configurations = Vec::default();
    for bits in 0..4_u32 {
        let mut config = Config::default();
        config.all_candidates.value = bits & 1 != 0;
        config.minimal_core.value = bits & 2 != 0;
        configurations.push(config);
    }
    configurations
}

/// Each combination of the switches used with an existential outer level.
pub fn exist_random_configurations() -> Vec<Config> {
    let mut configurations = Vec::default();
    for bits in 0..64_u32 {
        let mut config = Config::default();
        config.greedy.value = bits & 1 != 0;
        config.subsumption.value = bits & 2 != 0;
        config.partial.value = bits & 4 != 0;
        config.pure_literals.value = bits & 8 != 0;
        config.unit_clauses.value = bits & 16 != 0;
        config.minimal_core.value = bits & 32 != 0;
        configurations.push(config);
    }
    configurations
}

/// A literal from an integer.
pub fn lit(int: i32) -> CLiteral {
    CLiteral::from(int)
}
