use alloc::{boxed::Box, string::String};

use crate::{
    Error, parse,
    error::ConvertError,
    latex::{converter::convert, lexer::{Token, TokenKind}, syntax::SyntaxNode},
};

fn convert_error(text: &str) -> ConvertError {
    match parse(text) {
        Err(Error::Convert(e)) => e,
        other => panic!("expected a conversion error from {:?}, got {:?}", text, other),
    }
}

#[test]
fn test_chained_equality() {
    assert_eq!(parse("a = b").unwrap(), eq!(var!(a), var!(b)));
    assert_eq!(parse("a = b = c").unwrap(), and!(eq!(var!(a), var!(b)), eq!(var!(b), var!(c))));
    assert_eq!(
        parse("a = b = c = d").unwrap(),
        and!(
            and!(eq!(var!(a), var!(b)), eq!(var!(b), var!(c))),
            eq!(var!(c), var!(d)),
        )
    );

    // Operands of a chain can be any arithmetic expression
    assert_eq!(
        parse("1 + 1 = 2 = 4 / 2").unwrap(),
        and!(eq!(add!(num!(1), num!(1)), num!(2)), eq!(num!(2), div!(num!(4), num!(2)))),
    );
}

#[test]
fn test_roots() {
    assert_eq!(parse("\\sqrt{x}").unwrap(), root!(var!(x), num!(2)));
    assert_eq!(parse("\\sqrt[3]{x}").unwrap(), root!(var!(x), num!(3)));

    // Constant degrees are folded
    assert_eq!(parse("\\sqrt[1 + 2]{x}").unwrap(), root!(var!(x), num!(3)));
    assert_eq!(parse("\\sqrt[\\sqrt{4}]{x}").unwrap(), root!(var!(x), num!(2)));
}

#[test]
fn test_root_degree_must_be_constant() {
    assert_eq!(convert_error("\\sqrt[n]{x}"), ConvertError::RootDegreeNotConstant { found: "Variable" });
    assert_eq!(convert_error("\\sqrt[2 * n]{x}"), ConvertError::RootDegreeNotConstant { found: "Mul" });
    assert_eq!(convert_error("\\sqrt[1 / 0]{x}"), ConvertError::RootDegreeNotConstant { found: "Div" });
}

#[test]
fn test_propositions_are_not_operands() {
    assert_eq!(
        convert_error("(a = b) + 1"),
        ConvertError::NotAnExpression { role: "left", found: "Equal" },
    );
    assert_eq!(
        convert_error("2 * (a = b = c)"),
        ConvertError::NotAnExpression { role: "right", found: "And" },
    );
    assert_eq!(
        convert_error("\\sqrt{a = b}"),
        ConvertError::NotAnExpression { role: "argument", found: "Equal" },
    );
    assert_eq!(
        convert_error("\\sqrt[a = b]{4}"),
        ConvertError::NotAnExpression { role: "degree", found: "Equal" },
    );

    // Explicit grouping stops a chain from being desugared
    assert_eq!(
        convert_error("(a = b) = c"),
        ConvertError::NotAnExpression { role: "left", found: "Equal" },
    );
    assert_eq!(
        convert_error("a = b = (c = d)"),
        ConvertError::NotAnExpression { role: "right", found: "Equal" },
    );
    assert_eq!(
        convert_error("a = (b = c) = d"),
        ConvertError::NotAnExpression { role: "right", found: "Equal" },
    );
}

#[test]
fn test_unknown_nodes() {
    let x = SyntaxNode::Variable { name: String::from("x"), token: Token::new(TokenKind::Variable, "x", 0) };

    let command = SyntaxNode::Command {
        name: String::from("frac"),
        argument: Box::new(x.clone()),
        optional: None,
        token: Token::new(TokenKind::Command, "frac", 0),
    };
    assert_eq!(convert(&command), Err(ConvertError::UnknownCommand(String::from("frac"))));

    let binop = SyntaxNode::BinaryOp {
        left: Box::new(x.clone()),
        operator: Token::new(TokenKind::LBrace, "{", 1),
        right: Box::new(x),
    };
    assert_eq!(convert(&binop), Err(ConvertError::UnknownOperator(String::from("{"))));
}
