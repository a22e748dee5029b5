use std::{cell::RefCell, rc::Rc};

use otter_ssat::{
    config::{Config, CubeCapacity},
    reports::Report,
    structures::bounds::Bounds,
    types::err::ErrorKind,
};

mod common;
use common::{approximately, context_from, lit, reference_probability};

const FORMULA: &str = "p cnf 5 5
r 0.5 1 0
r 0.3 2 0
r 0.8 3 0
e 4 5 0
1 4 0
2 -4 5 0
-1 3 -5 0
-2 -3 4 0
1 2 3 0
";

fn capacities() -> Vec<(CubeCapacity, CubeCapacity)> {
    vec![
        (CubeCapacity::Once, CubeCapacity::Once),
        (CubeCapacity::Every(1), CubeCapacity::Every(1)),
        (CubeCapacity::Every(2), CubeCapacity::Once),
        (CubeCapacity::Once, CubeCapacity::Every(3)),
    ]
}

mod monotonicity {
    use super::*;

    #[test]
    fn observed_bounds() {
        for all_candidates in [true, false] {
            for (unsat_capacity, sat_capacity) in capacities() {
                let mut config = Config::default();
                config.all_candidates.value = all_candidates;
                config.unsat_capacity.value = unsat_capacity;
                config.sat_capacity.value = sat_capacity;

                let mut the_context = context_from(FORMULA, config);
                let expected = reference_probability(&the_context);

                let observed: Rc<RefCell<Vec<Bounds>>> = Rc::default();
                let observed_clone = observed.clone();
                the_context.set_callback_bounds(Box::new(move |bounds: &Bounds| {
                    observed_clone.borrow_mut().push(*bounds)
                }));

                assert_eq!(the_context.solve(), Ok(Report::Exact));

                let observed = observed.borrow();
                assert!(!observed.is_empty());
                for pair in observed.windows(2) {
                    assert!(pair[0].unsat_probability() <= pair[1].unsat_probability());
                    assert!(pair[0].sat_probability() <= pair[1].sat_probability());
                }
                for bounds in observed.iter() {
                    assert!(bounds.unsat_probability() + bounds.sat_probability() <= 1.0 + 1e-12);
                    assert!(bounds.lower() <= expected + 1e-9);
                    assert!(expected <= bounds.upper() + 1e-9);
                }

                assert!(approximately(the_context.bounds.lower(), expected));
                assert!(approximately(the_context.bounds.gap(), 0.0));
            }
        }
    }
}

mod stopping {
    use super::*;

    #[test]
    fn range_reached() {
        for all_candidates in [true, false] {
            let mut config = Config::default();
            config.all_candidates.value = all_candidates;
            config.unsat_capacity.value = CubeCapacity::Every(1);
            config.sat_capacity.value = CubeCapacity::Every(1);
            assert!(config.range.set_bounded(0.6));

            let sdimacs = "p cnf 3 2\nr 0.5 1 2 0\ne 3 0\n1 3 0\n1 -3 0\n";
            let mut the_context = context_from(sdimacs, config);

            assert_eq!(the_context.solve(), Ok(Report::Approximate));
            assert!(the_context.bounds.gap() <= 0.6);
            assert!(the_context.bounds.lower() <= 0.5 + 1e-9);
            assert!(0.5 <= the_context.bounds.upper() + 1e-9);
        }
    }

    #[test]
    fn interrupt() {
        for all_candidates in [true, false] {
            let mut config = Config::default();
            config.all_candidates.value = all_candidates;

            let mut the_context = context_from(FORMULA, config);
            let expected = reference_probability(&the_context);

            let mut calls = 0;
            the_context.set_callback_terminate(Box::new(move || {
                calls += 1;
                calls > 2
            }));

            assert_eq!(the_context.solve(), Ok(Report::Interrupted));
            assert!(the_context.bounds.lower() <= expected + 1e-9);
            assert!(expected <= the_context.bounds.upper() + 1e-9);
        }
    }

    #[test]
    fn interrupt_exist_random() {
        let mut the_context = context_from(
            "p cnf 3 2\ne 1 0\nr 0.25 2 0\nr 0.5 3 0\n1 2 0\n-1 3 0\n",
            Config::default(),
        );
        the_context.set_callback_terminate(Box::new(|| true));

        assert_eq!(the_context.solve(), Ok(Report::Interrupted));
        assert_eq!(the_context.bounds.lower(), 0.0);
        assert_eq!(the_context.bounds.upper(), 1.0);
    }
}

mod state {
    use super::*;

    #[test]
    fn solve_once() {
        let mut the_context = context_from(FORMULA, Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Exact));
        let iterations = the_context.counters.iterations;

        assert_eq!(the_context.solve(), Ok(Report::Exact));
        assert_eq!(the_context.counters.iterations, iterations);
        assert_eq!(the_context.report(), Report::Exact);

        assert_eq!(the_context.add_clause(vec![lit(1)]), Err(ErrorKind::InvalidState));
    }

    #[test]
    fn report_before_solve() {
        let the_context = context_from(FORMULA, Config::default());
        assert_eq!(the_context.report(), Report::Unknown);
    }
}
