//! FILENAME: parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::ast::{BinaryOperator, Expression, Number, UnaryOperator};
use crate::lexer::Lexer;
use crate::parser::{parse, parse_with_max_depth, ParseErrorKind};
use crate::token::Token;
use num_complex::Complex64;
use pretty_assertions::assert_eq;

// Tree-building shorthand for the parser tests below.
fn int(v: i64) -> Expression {
    Expression::Literal(Number::Int(v))
}

fn binop(left: Expression, op: BinaryOperator, right: Expression) -> Expression {
    Expression::BinaryOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

fn unop(op: UnaryOperator, operand: Expression) -> Expression {
    Expression::UnaryOp {
        op,
        operand: Box::new(operand),
    }
}

// ========================================
// LEXER TESTS
// ========================================

#[test]
fn lexer_tokenizes_simple_math() {
    let mut lexer = Lexer::new("1 + 2");
    assert_eq!(lexer.next_token(), Token::Number(Number::Int(1)));
    assert_eq!(lexer.next_token(), Token::Plus);
    assert_eq!(lexer.next_token(), Token::Number(Number::Int(2)));
    assert_eq!(lexer.next_token(), Token::EOF);
}

#[test]
fn lexer_tokenizes_multi_char_operators() {
    let mut lexer = Lexer::new("2 ** 3 // 4 % 5");
    assert_eq!(lexer.next_token(), Token::Number(Number::Int(2)));
    assert_eq!(lexer.next_token(), Token::DoubleAsterisk);
    assert_eq!(lexer.next_token(), Token::Number(Number::Int(3)));
    assert_eq!(lexer.next_token(), Token::DoubleSlash);
    assert_eq!(lexer.next_token(), Token::Number(Number::Int(4)));
    assert_eq!(lexer.next_token(), Token::Percent);
    assert_eq!(lexer.next_token(), Token::Number(Number::Int(5)));
    assert_eq!(lexer.next_token(), Token::EOF);
}

#[test]
fn lexer_distinguishes_single_and_double_operators() {
    let mut lexer = Lexer::new("* ** / //");
    assert_eq!(lexer.next_token(), Token::Asterisk);
    assert_eq!(lexer.next_token(), Token::DoubleAsterisk);
    assert_eq!(lexer.next_token(), Token::Slash);
    assert_eq!(lexer.next_token(), Token::DoubleSlash);
}

#[test]
fn lexer_reads_integer_and_float_forms() {
    let mut lexer = Lexer::new("42 3.14 .5 5. 1e3 2.5e-2");
    assert_eq!(lexer.next_token(), Token::Number(Number::Int(42)));
    assert_eq!(lexer.next_token(), Token::Number(Number::Float(3.14)));
    assert_eq!(lexer.next_token(), Token::Number(Number::Float(0.5)));
    assert_eq!(lexer.next_token(), Token::Number(Number::Float(5.0)));
    assert_eq!(lexer.next_token(), Token::Number(Number::Float(1000.0)));
    assert_eq!(lexer.next_token(), Token::Number(Number::Float(0.025)));
}

#[test]
fn lexer_reads_imaginary_literals() {
    let mut lexer = Lexer::new("2j 3.5J 1e2j");
    assert_eq!(
        lexer.next_token(),
        Token::Number(Number::Complex(Complex64::new(0.0, 2.0)))
    );
    assert_eq!(
        lexer.next_token(),
        Token::Number(Number::Complex(Complex64::new(0.0, 3.5)))
    );
    assert_eq!(
        lexer.next_token(),
        Token::Number(Number::Complex(Complex64::new(0.0, 100.0)))
    );
}

#[test]
fn lexer_falls_back_to_float_beyond_i64() {
    // One past i64::MAX: still a valid literal, lexed as a float
    let mut lexer = Lexer::new("9223372036854775808");
    assert_eq!(
        lexer.next_token(),
        Token::Number(Number::Float(9223372036854775808.0))
    );
}

#[test]
fn lexer_reads_identifiers_whole() {
    let mut lexer = Lexer::new("__import__('os')");
    assert_eq!(
        lexer.next_token(),
        Token::Identifier("__import__".to_string())
    );
    assert_eq!(lexer.next_token(), Token::LParen);
    assert_eq!(lexer.next_token(), Token::String("os".to_string()));
    assert_eq!(lexer.next_token(), Token::RParen);
}

#[test]
fn lexer_reads_double_quoted_strings() {
    let mut lexer = Lexer::new("\"hello\"");
    assert_eq!(lexer.next_token(), Token::String("hello".to_string()));
}

#[test]
fn lexer_flags_unknown_characters() {
    let mut lexer = Lexer::new("1 @ 2");
    assert_eq!(lexer.next_token(), Token::Number(Number::Int(1)));
    assert_eq!(lexer.next_token(), Token::Illegal('@'));
}

// ========================================
// PARSER TESTS - LITERALS
// ========================================

#[test]
fn parser_parses_integer_literal() {
    let result = parse("42").unwrap();
    assert_eq!(result, Expression::Literal(Number::Int(42)));
}

#[test]
fn parser_parses_float_literal() {
    let result = parse("3.14159").unwrap();
    assert_eq!(result, Expression::Literal(Number::Float(3.14159)));
}

#[test]
fn parser_parses_imaginary_literal() {
    let result = parse("2j").unwrap();
    assert_eq!(
        result,
        Expression::Literal(Number::Complex(Complex64::new(0.0, 2.0)))
    );
}

#[test]
fn parser_handles_surrounding_whitespace() {
    let result = parse("   7   ").unwrap();
    assert_eq!(result, Expression::Literal(Number::Int(7)));
}

// ========================================
// PARSER TESTS - PRECEDENCE & ASSOCIATIVITY
// ========================================

#[test]
fn parser_gives_multiplication_higher_precedence() {
    // 2+3*4 must parse as 2+(3*4)
    let result = parse("2+3*4").unwrap();
    assert_eq!(
        result,
        binop(
            int(2),
            BinaryOperator::Add,
            binop(int(3), BinaryOperator::Multiply, int(4)),
        )
    );
}

#[test]
fn parser_keeps_additive_left_associative() {
    // 1-2+3 must parse as (1-2)+3
    let result = parse("1-2+3").unwrap();
    assert_eq!(
        result,
        binop(
            binop(int(1), BinaryOperator::Subtract, int(2)),
            BinaryOperator::Add,
            int(3),
        )
    );
}

#[test]
fn parser_keeps_multiplicative_left_associative() {
    // 8/4/2 must parse as (8/4)/2
    let result = parse("8/4/2").unwrap();
    assert_eq!(
        result,
        binop(
            binop(int(8), BinaryOperator::Divide, int(4)),
            BinaryOperator::Divide,
            int(2),
        )
    );
}

#[test]
fn parser_parses_floor_division_and_modulo() {
    let result = parse("10//3%2").unwrap();
    assert_eq!(
        result,
        binop(
            binop(int(10), BinaryOperator::FloorDivide, int(3)),
            BinaryOperator::Modulo,
            int(2),
        )
    );
}

#[test]
fn parser_makes_power_right_associative() {
    // 2**3**2 must parse as 2**(3**2)
    let result = parse("2**3**2").unwrap();
    assert_eq!(
        result,
        binop(
            int(2),
            BinaryOperator::Power,
            binop(int(3), BinaryOperator::Power, int(2)),
        )
    );
}

#[test]
fn parser_binds_power_tighter_than_unary_minus() {
    // -2**2 must parse as -(2**2)
    let result = parse("-2**2").unwrap();
    assert_eq!(
        result,
        unop(
            UnaryOperator::Negate,
            binop(int(2), BinaryOperator::Power, int(2)),
        )
    );
}

#[test]
fn parser_allows_unary_in_exponent() {
    // 2**-3 is legal: the exponent side goes through unary
    let result = parse("2**-3").unwrap();
    assert_eq!(
        result,
        binop(
            int(2),
            BinaryOperator::Power,
            unop(UnaryOperator::Negate, int(3)),
        )
    );
}

#[test]
fn parser_respects_parentheses() {
    // (2+3)*4 overrides the default precedence
    let result = parse("(2+3)*4").unwrap();
    assert_eq!(
        result,
        binop(
            binop(int(2), BinaryOperator::Add, int(3)),
            BinaryOperator::Multiply,
            int(4),
        )
    );
}

// ========================================
// PARSER TESTS - UNARY OPERATORS
// ========================================

#[test]
fn parser_parses_unary_negation() {
    let result = parse("-5").unwrap();
    assert_eq!(result, unop(UnaryOperator::Negate, int(5)));
}

#[test]
fn parser_parses_unary_plus() {
    let result = parse("+5").unwrap();
    assert_eq!(result, unop(UnaryOperator::Plus, int(5)));
}

#[test]
fn parser_parses_chained_unary_operators() {
    let result = parse("--5").unwrap();
    assert_eq!(
        result,
        unop(UnaryOperator::Negate, unop(UnaryOperator::Negate, int(5)))
    );
}

// ========================================
// PARSER TESTS - REJECTIONS (fail-closed)
// ========================================

#[test]
fn parser_rejects_empty_input() {
    let err = parse("").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Empty);
}

#[test]
fn parser_rejects_whitespace_only_input() {
    let err = parse("   \t  ").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Empty);
}

#[test]
fn parser_rejects_names() {
    let err = parse("x + 1").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Disallowed);
    assert!(err.message.contains("'x'"));
}

#[test]
fn parser_rejects_function_calls() {
    let err = parse("__import__('os')").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Disallowed);
    assert!(err.message.contains("__import__"));
}

#[test]
fn parser_rejects_boolean_names() {
    // True/False are names here, not literals
    let err = parse("True").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Disallowed);
}

#[test]
fn parser_rejects_string_literals() {
    let err = parse("\"hello\" + \"world\"").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Disallowed);

    let err = parse("'abc'").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Disallowed);
}

#[test]
fn parser_rejects_trailing_tokens() {
    let err = parse("1 2").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Malformed);
}

#[test]
fn parser_rejects_missing_operand() {
    let err = parse("1 +").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Malformed);
}

#[test]
fn parser_rejects_unbalanced_parens() {
    let err = parse("(1 + 2").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Malformed);

    let err = parse(")").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Malformed);
}

#[test]
fn parser_rejects_illegal_characters() {
    let err = parse("1 @ 2").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Malformed);
    assert!(err.message.contains('@'));
}

#[test]
fn parser_error_carries_original_input() {
    let err = parse("1 +").unwrap_err();
    assert_eq!(err.input, "1 +");
}

// ========================================
// PARSER TESTS - DEPTH CEILING
// ========================================

#[test]
fn parser_rejects_excessive_paren_nesting() {
    let input = format!("{}1{}", "(".repeat(250), ")".repeat(250));
    let err = parse(&input).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TooDeep);
}

#[test]
fn parser_rejects_excessive_sign_chains() {
    let input = format!("{}5", "-".repeat(250));
    let err = parse(&input).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TooDeep);
}

#[test]
fn parser_accepts_nesting_under_the_ceiling() {
    let input = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert!(parse(&input).is_ok());
}

#[test]
fn parser_honors_custom_depth_ceiling() {
    assert!(parse_with_max_depth("((1))", 10).is_ok());
    let err = parse_with_max_depth("((1))", 2).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TooDeep);
}

// ========================================
// PARSER TESTS - IDEMPOTENCE
// ========================================

#[test]
fn parser_is_deterministic() {
    let first = parse("1 + 2 * -3 ** 2").unwrap();
    let second = parse("1 + 2 * -3 ** 2").unwrap();
    assert_eq!(first, second);
}
