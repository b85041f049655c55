use krunch::{
    ast::{BinaryOperator, Expr},
    get_result,
    interpreter::evaluator::core::{Evaluator, MAX_EVALUATION_STEPS, Outcome},
    parse,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_range_digit_strings_parse_to_literals(value in 0..=i64::MAX) {
        prop_assert_eq!(parse(&value.to_string()), Expr::literal(value));
    }

    #[test]
    fn leading_zeros_are_accepted(zeros in 1usize..6, value in 0i64..1_000_000) {
        let source = format!("{}{value}", "0".repeat(zeros));
        prop_assert_eq!(parse(&source), Expr::literal(value));
    }

    #[test]
    fn oversized_literals_become_error_nodes(digits in "[1-9][0-9]{19,25}") {
        prop_assert!(parse(&digits).is_error());
    }

    #[test]
    fn parsing_and_evaluation_never_panic(source in "[0-9a-z+*/(),-]{0,24}") {
        let tree = parse(&source);
        let _ = Evaluator::default().run(tree);
    }

    #[test]
    fn subtraction_associates_left(a in 0i64..1000, b in 0i64..1000, c in 0i64..1000) {
        let source = format!("{a}-{b}-{c}");
        prop_assert_eq!(get_result(&source, MAX_EVALUATION_STEPS), Ok(Outcome::Value(a - b - c)));
    }

    #[test]
    fn multiplication_binds_tighter(a in 0i64..1000, b in 0i64..1000, c in 0i64..1000) {
        let source = format!("{a}+{b}*{c}");
        prop_assert_eq!(parse(&source),
                        Expr::binary(Expr::literal(a),
                                     Expr::binary(Expr::literal(b), Expr::literal(c), BinaryOperator::Mul),
                                     BinaryOperator::Add));
        prop_assert_eq!(get_result(&source, MAX_EVALUATION_STEPS), Ok(Outcome::Value(a + b * c)));
    }

    #[test]
    fn terminal_nodes_are_fixed_points(value in any::<i64>(), message in "[a-z ]{0,16}") {
        let evaluator = Evaluator::default();
        for node in [Expr::literal(value), Expr::error(message.clone())] {
            prop_assert_eq!(evaluator.step(&node), Ok(node.clone()));
        }
    }
}
