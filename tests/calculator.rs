use std::fs;

use abacus::{
    calculator::{evaluator::evaluate, keys::Key, screen::Screen, session::Calculator},
    error::{EvalError, ScriptError},
    expression::{Expression, Operator, Token},
    lex_keys, run_script,
    util::num::{format_number, parse_input},
};
use walkdir::WalkDir;

const EPSILON: f64 = 1e-9;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "keys"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let (expected, script) = split_expectation(&content).unwrap_or_else(|| {
                                                                 panic!("{path:?} has no 'expect:' line")
                                                             });
        count += 1;

        match run_script(script) {
            Ok(screen) => assert_eq!(screen.result, expected, "script {path:?} showed the wrong result"),
            Err(e) => panic!("Script {path:?} failed:\n{script}\nError: {e:?}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn split_expectation(content: &str) -> Option<(&str, &str)> {
    let (first, rest) = content.split_once('\n')?;
    let expected = first.trim().strip_prefix("expect:")?.trim();
    Some((expected, rest))
}

fn assert_result(src: &str, expected: &str) {
    match run_script(src) {
        Ok(screen) => assert_eq!(screen.result, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if run_script(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn tokens(numbers_and_ops: &[(f64, Option<Operator>)]) -> Vec<Token> {
    let mut out = Vec::new();
    for (n, op) in numbers_and_ops {
        out.push(Token::Number(*n));
        if let Some(op) = op {
            out.push(Token::Operator(*op));
        }
    }
    out
}

fn typed(calc: &mut Calculator, text: &str) {
    for c in text.chars() {
        if c == '.' {
            calc.add_decimal();
        } else {
            calc.handle_number(c);
        }
    }
}

#[test]
fn binary_operations_match_direct_arithmetic() {
    let pairs = [(3.5, 2.0), (-7.25, 0.5), (1e6, 3.0), (0.1, 0.2)];

    for (a, b) in pairs {
        for (op, expected) in [(Operator::Add, a + b),
                               (Operator::Sub, a - b),
                               (Operator::Mul, a * b),
                               (Operator::Div, a / b)]
        {
            let value = evaluate(&tokens(&[(a, Some(op)), (b, None)])).unwrap();
            assert!((value - expected).abs() < EPSILON, "{a} {op} {b} gave {value}");
        }
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let value = evaluate(&tokens(&[(2.0, Some(Operator::Add)),
                                   (3.0, Some(Operator::Mul)),
                                   (4.0, None)])).unwrap();
    assert!((value - 14.0).abs() < EPSILON);

    let value = evaluate(&tokens(&[(20.0, Some(Operator::Sub)),
                                   (6.0, Some(Operator::Div)),
                                   (3.0, Some(Operator::Add)),
                                   (1.0, None)])).unwrap();
    assert!((value - 19.0).abs() < EPSILON);
}

#[test]
fn same_tier_operators_chain_left_to_right() {
    let value = evaluate(&tokens(&[(10.0, Some(Operator::Sub)),
                                   (2.0, Some(Operator::Sub)),
                                   (3.0, None)])).unwrap();
    assert!((value - 5.0).abs() < EPSILON);

    let value = evaluate(&tokens(&[(2.0, Some(Operator::Mul)),
                                   (3.0, Some(Operator::Div)),
                                   (4.0, None)])).unwrap();
    assert!((value - 1.5).abs() < EPSILON);
}

#[test]
fn single_number_evaluates_to_itself() {
    assert_eq!(evaluate(&[Token::Number(7.0)]), Ok(7.0));
}

#[test]
fn division_by_zero_is_error() {
    let result = evaluate(&tokens(&[(5.0, Some(Operator::Div)), (0.0, None)]));
    assert_eq!(result, Err(EvalError::DivisionByZero { position: 1 }));

    let result = evaluate(&tokens(&[(1.0, Some(Operator::Add)),
                                    (5.0, Some(Operator::Div)),
                                    (0.0, Some(Operator::Mul)),
                                    (2.0, None)]));
    assert_eq!(result, Err(EvalError::DivisionByZero { position: 3 }));
}

#[test]
fn malformed_sequences_are_rejected() {
    assert_eq!(evaluate(&[]), Err(EvalError::MalformedExpression { position: 0 }));
    assert_eq!(evaluate(&[Token::Operator(Operator::Add), Token::Number(1.0)]),
               Err(EvalError::MalformedExpression { position: 0 }));
    assert_eq!(evaluate(&[Token::Number(1.0), Token::Operator(Operator::Mul)]),
               Err(EvalError::MalformedExpression { position: 1 }));
    assert_eq!(evaluate(&[Token::Number(1.0), Token::Number(2.0)]),
               Err(EvalError::MalformedExpression { position: 1 }));
}

#[test]
fn operator_replacement_keeps_last() {
    let mut calc = Calculator::new();
    typed(&mut calc, "6");
    calc.handle_operator(Operator::Add);
    calc.handle_operator(Operator::Mul);

    assert_eq!(calc.expression().tokens(),
               &[Token::Number(6.0), Token::Operator(Operator::Mul)]);
    assert_eq!(calc.last_operator(), Some(Operator::Mul));
    assert_eq!(calc.screen().expression, "6 *");
}

#[test]
fn leading_operator_is_ignored() {
    let mut calc = Calculator::new();
    calc.handle_operator(Operator::Sub);

    assert!(calc.expression().is_empty());
    assert_eq!(calc.last_operator(), None);
    assert_eq!(calc.screen(), &Screen::default());
}

#[test]
fn calculate_on_empty_session_does_nothing() {
    let mut calc = Calculator::new();
    assert_eq!(calc.calculate(), None);
    assert_eq!(calc.current_input(), "");
}

#[test]
fn calculate_resets_staging_state() {
    let mut calc = Calculator::new();
    typed(&mut calc, "9");
    calc.handle_operator(Operator::Div);
    typed(&mut calc, "2");

    assert_eq!(calc.calculate(), Some(Ok(4.5)));
    assert_eq!(calc.current_input(), "4.5");
    assert!(calc.expression().is_empty());
    assert_eq!(calc.last_operator(), None);
    assert_eq!(calc.screen().expression, "4.5");
    assert_eq!(calc.screen().result, "4.5");
}

#[test]
fn dangling_operator_is_dropped_before_evaluation() {
    let mut calc = Calculator::new();
    typed(&mut calc, "8");
    calc.handle_operator(Operator::Mul);

    assert_eq!(calc.calculate(), Some(Ok(8.0)));
}

#[test]
fn division_by_zero_does_not_poison_session() {
    let mut calc = Calculator::new();
    typed(&mut calc, "5");
    calc.handle_operator(Operator::Div);
    typed(&mut calc, "0");

    assert_eq!(calc.calculate(),
               Some(Err(EvalError::DivisionByZero { position: 1 })));
    assert_eq!(calc.screen().expression, "Error");
    assert_eq!(calc.screen().result, "Error");
    assert_eq!(calc.current_input(), "");

    typed(&mut calc, "3");
    calc.handle_operator(Operator::Add);
    typed(&mut calc, "4");
    assert_eq!(calc.calculate(), Some(Ok(7.0)));
}

#[test]
fn clear_all_is_idempotent() {
    let mut calc = Calculator::new();
    typed(&mut calc, "12");
    calc.handle_operator(Operator::Add);
    typed(&mut calc, "3");

    calc.clear_all();
    let once = calc.clone();
    calc.clear_all();

    assert_eq!(calc.current_input(), once.current_input());
    assert_eq!(calc.expression(), once.expression());
    assert_eq!(calc.screen(), once.screen());
    assert_eq!(calc.current_input(), "");
    assert!(calc.expression().is_empty());
    assert_eq!(calc.screen(), &Screen::default());
}

#[test]
fn decimal_point_is_added_once() {
    let mut calc = Calculator::new();
    typed(&mut calc, "3.1.4");
    assert_eq!(calc.current_input(), "3.14");
}

#[test]
fn digits_are_not_validated() {
    let mut calc = Calculator::new();
    typed(&mut calc, "007");
    assert_eq!(calc.current_input(), "007");
    assert_eq!(calc.screen().expression, "007");
}

#[test]
fn backspace_removes_last_character() {
    let mut calc = Calculator::new();
    typed(&mut calc, "42");
    calc.backspace();
    assert_eq!(calc.current_input(), "4");
    calc.backspace();
    calc.backspace();
    assert_eq!(calc.current_input(), "");
    assert_eq!(calc.screen().expression, "0");
}

#[test]
fn unary_operations_transform_current_input() {
    let mut calc = Calculator::new();

    typed(&mut calc, "50");
    calc.percentage();
    assert_eq!(calc.current_input(), "0.5");

    calc.fraction();
    assert_eq!(calc.current_input(), "2");

    calc.exponent();
    assert_eq!(calc.current_input(), "4");

    calc.square();
    assert_eq!(calc.current_input(), "2");

    calc.convert_to_negative();
    assert_eq!(calc.current_input(), "-2");
    assert_eq!(calc.screen().expression, "-2");
}

#[test]
fn unary_operations_ignore_empty_input() {
    let mut calc = Calculator::new();
    calc.percentage();
    calc.fraction();
    calc.square();
    calc.exponent();
    calc.convert_to_negative();

    assert_eq!(calc.current_input(), "");
    assert_eq!(calc.screen(), &Screen::default());
}

#[test]
fn negate_and_fraction_round_trip() {
    for input in ["3", "0.125", "-8", "7.5"] {
        let mut calc = Calculator::new();
        typed(&mut calc, input.trim_start_matches('-'));
        if input.starts_with('-') {
            calc.convert_to_negative();
        }
        let original: f64 = calc.current_input().parse().unwrap();

        calc.convert_to_negative();
        calc.convert_to_negative();
        let negated_twice: f64 = calc.current_input().parse().unwrap();
        assert!((negated_twice - original).abs() < EPSILON);

        calc.fraction();
        calc.fraction();
        let inverted_twice: f64 = calc.current_input().parse().unwrap();
        assert!((inverted_twice - original).abs() < EPSILON);
    }
}

#[test]
fn keyboard_and_button_keys() {
    assert_result("7 [Enter]", "7");
    assert_result("2 * 2 [equals]", "4");
    assert_result("1 2 [Backspace] + 1 =", "2");
    assert_result("2 [exponent] + 1 =", "5");
    assert_result("8 [pos-neg] + 1 0 =", "2");
    assert_result("2 0 0 [percentage] + 1 =", "3");
    assert_result("4 [fraction] + 1 =", "1.25");
    assert_result("1 + 2 = [CE]", "0");
}

#[test]
fn unknown_keys_are_errors() {
    assert_failure("2 ^ 3");
    assert_failure("[sqrt] 4");
    assert_eq!(run_script("1 + x"),
               Err(ScriptError::UnknownKey { key:    "x".to_string(),
                                             column: 5, }));
}

#[test]
fn unknown_bracketed_key_is_reported_whole() {
    assert_eq!(run_script("[sqrt] 4"),
               Err(ScriptError::UnknownKey { key:    "[sqrt]".to_string(),
                                             column: 1, }));
    assert_eq!(run_script("9 [Sqaure]"),
               Err(ScriptError::UnknownKey { key:    "[Sqaure]".to_string(),
                                             column: 3, }));
    assert_eq!(run_script("9 [pos 1"),
               Err(ScriptError::UnknownKey { key:    "[pos".to_string(),
                                             column: 3, }));
}

#[test]
fn operator_keys_map_through_symbols() {
    assert_eq!(lex_keys("+ - * /").unwrap(),
               vec![Key::Operator(Operator::Add),
                    Key::Operator(Operator::Sub),
                    Key::Operator(Operator::Mul),
                    Key::Operator(Operator::Div)]);
}

#[test]
fn non_finite_display_values_read_back() {
    for value in [f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(parse_input(&format_number(value)), Some(value));
    }
    assert!(parse_input(&format_number(f64::NAN)).is_some_and(f64::is_nan));
    assert_eq!(parse_input("inf"), None);
}

#[test]
fn reciprocal_of_zero_is_committed() {
    let mut calc = Calculator::new();
    typed(&mut calc, "0");
    calc.fraction();
    assert_eq!(calc.current_input(), "Infinity");
    assert_eq!(calc.screen().expression, "Infinity");

    calc.handle_operator(Operator::Mul);
    assert_eq!(calc.expression().tokens(),
               &[Token::Number(f64::INFINITY), Token::Operator(Operator::Mul)]);
    assert_eq!(calc.screen().expression, "Infinity *");

    typed(&mut calc, "5");
    assert_eq!(calc.calculate(), Some(Ok(f64::INFINITY)));
    assert_eq!(calc.screen().result, "Infinity");

    assert_result("0 [fraction] * 5 =", "Infinity");
}

#[test]
fn square_root_of_negative_is_committed() {
    let mut calc = Calculator::new();
    typed(&mut calc, "4");
    calc.convert_to_negative();
    calc.square();
    assert_eq!(calc.current_input(), "NaN");
    assert_eq!(calc.screen().expression, "NaN");

    calc.handle_operator(Operator::Add);
    assert_eq!(calc.expression().len(), 2);
    assert!(matches!(calc.expression().tokens()[0], Token::Number(n) if n.is_nan()));
    assert_eq!(calc.screen().expression, "NaN +");

    typed(&mut calc, "1");
    assert!(matches!(calc.calculate(), Some(Ok(n)) if n.is_nan()));
    assert_eq!(calc.screen().result, "NaN");
}

#[test]
fn partial_sign_is_not_committed() {
    let mut calc = Calculator::new();
    typed(&mut calc, "5");
    calc.convert_to_negative();
    calc.backspace();
    assert_eq!(calc.current_input(), "-");
    assert_eq!(calc.screen().expression, "-");

    calc.handle_operator(Operator::Add);
    assert!(calc.expression().is_empty());
    assert_eq!(calc.current_input(), "");
    assert_eq!(calc.last_operator(), None);
    assert_eq!(calc.screen().expression, "0");

    let mut calc = Calculator::new();
    typed(&mut calc, "3");
    calc.handle_operator(Operator::Mul);
    typed(&mut calc, "5");
    calc.convert_to_negative();
    calc.backspace();
    calc.calculate();
    assert_eq!(calc.screen().result, "3");
}

#[test]
fn second_number_is_not_pushed_over_the_first() {
    let mut expr = Expression::new();
    assert!(expr.push_number(2.0));
    assert!(!expr.push_number(9.0));
    assert_eq!(expr.tokens(), &[Token::Number(2.0)]);
}
