//! Unit tests for the calculator parser module

use dimcalc_engine::ast::{AstNode, Command, Identifier, UnitFactor};
use dimcalc_engine::parser::Parser;
use dimcalc_engine::Error;

/// Helper to parse a line and return AST
fn parse(line: &str) -> Result<AstNode, Error> {
    let mut parser = Parser::new(line.to_string());
    parser.parse()
}

/// Helper to parse a bare expression
fn expr(text: &str) -> AstNode {
    Parser::new(text.to_string())
        .parse_expression_only()
        .unwrap_or_else(|e| panic!("failed to parse '{}': {}", text, e))
}

fn num(literal: &str) -> Box<AstNode> {
    Box::new(AstNode::number(literal))
}

fn access(name: &str) -> Box<AstNode> {
    Box::new(AstNode::Access {
        name: Identifier::new(name),
    })
}

#[test]
fn test_plain_lines_are_wrapped_in_evaluate() {
    assert_eq!(parse("42").unwrap(), AstNode::evaluate(AstNode::number("42")));
}

#[test]
fn test_parse_precedence() {
    // Multiplication should bind tighter than addition
    assert_eq!(
        expr("1 + 2 * 3"),
        AstNode::Add {
            left: num("1"),
            right: Box::new(AstNode::Multiply {
                left: num("2"),
                right: num("3"),
            }),
        }
    );

    // Parentheses should override precedence
    assert!(matches!(expr("(1 + 2) * 3"), AstNode::Multiply { .. }));
}

#[test]
fn test_left_associative_subtraction() {
    assert_eq!(
        expr("a - b - c"),
        AstNode::Subtract {
            left: Box::new(AstNode::Subtract {
                left: access("a"),
                right: access("b"),
            }),
            right: access("c"),
        }
    );
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(
        expr("a ^ b ** c"),
        AstNode::Exponentiate {
            base: access("a"),
            exponent: Box::new(AstNode::Exponentiate {
                base: access("b"),
                exponent: access("c"),
            }),
        }
    );
}

#[test]
fn test_unary_minus_binds_looser_than_power() {
    assert_eq!(
        expr("-a ^ 2"),
        AstNode::Invert {
            value: Box::new(AstNode::Exponentiate {
                base: access("a"),
                exponent: num("2"),
            }),
        }
    );
    assert!(matches!(
        expr("2 ^ -1"),
        AstNode::Exponentiate { exponent, .. } if matches!(*exponent, AstNode::Invert { .. })
    ));
}

#[test]
fn test_unit_numbers() {
    assert_eq!(
        expr("3 m2kg-1"),
        AstNode::UnitNumber {
            value: num("3"),
            unit: Box::new(AstNode::Unit {
                factors: vec![UnitFactor::new("m", 2.0), UnitFactor::new("kg", -1.0)],
            }),
        }
    );
    assert_eq!(
        expr("'N'"),
        AstNode::UnitNumber {
            value: num(""),
            unit: Box::new(AstNode::Unit {
                factors: vec![UnitFactor::new("N", 1.0)],
            }),
        }
    );
}

#[test]
fn test_quoted_unit_must_be_known() {
    assert!(matches!(
        parse("3 'xyz'"),
        Err(Error::Unit(dimcalc_units::Error::UnknownUnitSymbol(_)))
    ));
}

#[test]
fn test_calls_and_absolute_value() {
    match expr("log(x, 10)") {
        AstNode::Call {
            function,
            arguments,
        } => {
            assert_eq!(function.name, "log");
            assert_eq!(arguments.arguments.len(), 2);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(expr("now()"), AstNode::Call { arguments, .. } if arguments.arguments.is_empty()));
    assert!(matches!(expr("|1 - x|"), AstNode::Absolute { .. }));
}

#[test]
fn test_definitions() {
    assert_eq!(
        parse("v = 3").unwrap(),
        AstNode::evaluate(AstNode::VariableDefinition {
            name: Identifier::new("v"),
            expression: num("3"),
        })
    );
    assert!(matches!(
        parse("f(x) = x * x").unwrap(),
        AstNode::Command(Command::Evaluate(inner)) if matches!(*inner, AstNode::FunctionDefinition { .. })
    ));
}

#[test]
fn test_definitions_only_at_statement_level() {
    assert!(parse("1 + (v = 3)").is_err());
    assert!(parse("f(1) = 2").is_err());
}

#[test]
fn test_commands() {
    assert_eq!(parse(":exit").unwrap(), AstNode::Command(Command::Exit));
    assert_eq!(parse(":quit").unwrap(), AstNode::Command(Command::Quit));
    assert_eq!(parse(":newline").unwrap(), AstNode::Command(Command::Newline));
    assert!(matches!(
        parse(":exclude g = 9.81 m1s-2").unwrap(),
        AstNode::Command(Command::Exclude(inner)) if matches!(*inner, AstNode::VariableDefinition { .. })
    ));
    assert!(matches!(
        parse(":evaluate 1 + 1").unwrap(),
        AstNode::Command(Command::Evaluate(_))
    ));
}

#[test]
fn test_unknown_command() {
    let err = parse(":frobnicate").unwrap_err();
    assert!(err.to_string().contains("frobnicate"));
}

#[test]
fn test_parse_errors() {
    for line in ["", "1 +", "(1", "|1", "1 2", "1 @ 2", "f(", "'kg"] {
        assert!(
            matches!(parse(line), Err(Error::ParseError(_))),
            "'{}' should be a parse error",
            line
        );
    }
}

#[test]
fn test_error_reports_position() {
    let err = parse("1 + )").unwrap_err();
    assert!(err.to_string().contains("column 5"), "{}", err);
}
