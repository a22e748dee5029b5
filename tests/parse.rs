use otter_ssat::{
    config::Config,
    context::Context,
    structures::quantifier::{Quantifier, QuantifierKind},
    types::err::{ErrorKind, ParseError},
};

mod common;
use common::lit;

fn read(sdimacs: &str) -> (Context, Result<otter_ssat::builder::ParserInfo, ErrorKind>) {
    let mut the_context = Context::from_config(Config::default());
    let info = the_context.read_sdimacs(sdimacs.as_bytes());
    (the_context, info)
}

mod prefix {
    use super::*;

    #[test]
    fn blocks_accumulate() {
        let (the_context, info) = read(
            "c a comment
p cnf 5 2
r 0.5 1 0
r 0.25 2 0
e 3 4 0
r 0.5 5 0
1 3 0
-2 4 5 0
",
        );
        assert!(info.is_ok());

        assert_eq!(
            the_context.prefix.kinds(),
            vec![QuantifierKind::Random, QuantifierKind::Exist, QuantifierKind::Random]
        );
        assert_eq!(the_context.prefix.levels()[0].atoms(), &[1, 2]);
        assert_eq!(the_context.prefix.quantifier(2), Some(Quantifier::Random(0.25)));
        assert_eq!(the_context.prefix.level_of(5), Some(2));
    }

    #[test]
    fn idempotence() {
        let sdimacs = "p cnf 6 1
a 1 2 0
e 3 0
r 0.125 4 5 0
r 0.5 6 0
1 -6 0
";
        let (first, info) = read(sdimacs);
        assert!(info.is_ok());

        let written = first.prefix.as_dimacs();
        let (second, info) = read(&written);
        assert!(info.is_ok());

        assert_eq!(first.prefix.levels(), second.prefix.levels());
        for atom in 1..=6 {
            assert_eq!(first.prefix.quantifier(atom), second.prefix.quantifier(atom));
        }
        assert_eq!(written, second.prefix.as_dimacs());
    }

    #[test]
    fn probability_out_of_range() {
        let (_, info) = read("p cnf 1 0\nr 1.5 1 0\n");
        assert_eq!(info, Err(ErrorKind::from(ParseError::Probability(2))));

        let (_, info) = read("p cnf 1 0\nr 1 0\n");
        assert!(info.is_ok());

        let (_, info) = read("p cnf 1 0\nr half 1 0\n");
        assert_eq!(info, Err(ErrorKind::from(ParseError::Probability(2))));
    }

    #[test]
    fn requantified() {
        let (_, info) = read("p cnf 2 0\ne 1 2 0\nr 0.5 2 0\n");
        assert_eq!(
            info,
            Err(ErrorKind::from(ParseError::Requantified { line: 3, atom: 2 }))
        );

        let (_, info) = read("p cnf 2 0\ne 1 1 0\n");
        assert_eq!(
            info,
            Err(ErrorKind::from(ParseError::Requantified { line: 2, atom: 1 }))
        );
    }

    #[test]
    fn unterminated_block() {
        let (_, info) = read("p cnf 2 0\ne 1 2\n");
        assert_eq!(info, Err(ErrorKind::from(ParseError::UnterminatedPrefix(2))));
    }
}

mod clauses {
    use super::*;

    #[test]
    fn missing_zero() {
        let (_, info) = read("p cnf 2 1\nr 0.5 1 0\ne 2 0\n1 2\n");
        assert_eq!(info, Err(ErrorKind::from(ParseError::UnterminatedClause(4))));
    }

    #[test]
    fn several_per_line() {
        let (the_context, info) = read("p cnf 2 2\nr 0.5 1 0\ne 2 0\n1 2 0 -1 -2 0\n");
        assert!(info.is_ok_and(|info| info.added_clauses == 2));
        assert_eq!(the_context.clause_db, vec![vec![lit(1), lit(2)], vec![lit(-1), lit(-2)]]);
    }

    #[test]
    fn canonical_clauses() {
        let (the_context, info) = read("p cnf 3 2\ne 1 2 3 0\n3 1 3 0\n1 -1 2 0\n");
        assert!(info.is_ok_and(|info| info.added_clauses == 2));
        // The tautology is skipped.
        assert_eq!(the_context.clause_db, vec![vec![lit(1), lit(3)]]);
    }

    #[test]
    fn unexpected_character() {
        let (_, info) = read("p cnf 1 1\ne 1 0\nx 1 0\n");
        assert_eq!(
            info,
            Err(ErrorKind::from(ParseError::UnexpectedCharacter { line: 3, character: 'x' }))
        );
    }

    #[test]
    fn bad_literal() {
        let (_, info) = read("p cnf 1 1\ne 1 0\n1 two 0\n");
        assert_eq!(info, Err(ErrorKind::from(ParseError::Literal(3))));
    }

    #[test]
    fn header_mismatch_is_not_an_error() {
        let (the_context, info) = read("p cnf 9 9\ne 1 0\n1 0\n");
        assert!(info.as_ref().is_ok_and(|info| info.expected_clauses == Some(9)));
        assert!(info.is_ok_and(|info| info.added_clauses == 1));
        assert_eq!(the_context.clause_db.len(), 1);
    }

    #[test]
    fn end_marker() {
        let (the_context, info) = read("p cnf 1 1\ne 1 0\n1 0\n%\n0\n");
        assert!(info.is_ok());
        assert_eq!(the_context.clause_db.len(), 1);
    }

    #[test]
    fn malformed_header() {
        let (_, info) = read("p sat 1 1\n");
        assert_eq!(info, Err(ErrorKind::from(ParseError::ProblemSpecification(1))));
    }
}
