use alloc::vec;

use crate::latex::lexer::{Lexer, Token, TokenKind, tokenize};

#[test]
fn test_operators_and_delimiters() {
    assert_eq!(
        kinds!("+-*/()^{}[]="),
        vec![
            TokenKind::Plus, TokenKind::Minus, TokenKind::Star, TokenKind::Slash,
            TokenKind::LParen, TokenKind::RParen, TokenKind::Caret,
            TokenKind::LBrace, TokenKind::RBrace, TokenKind::LBracket, TokenKind::RBracket,
            TokenKind::Equal, TokenKind::Eof,
        ]
    );
}

#[test]
fn test_numbers() {
    let tokens = tokenize("3 + 4.5");
    assert_eq!(tokens[0], Token { kind: TokenKind::Number, literal: "3".into(), value: Some(3.0), position: 0 });
    assert_eq!(tokens[1], Token::new(TokenKind::Plus, "+", 2));
    assert_eq!(tokens[2], Token { kind: TokenKind::Number, literal: "4.5".into(), value: Some(4.5), position: 4 });
    assert_eq!(tokens[3], Token::new(TokenKind::Eof, "", 7));

    // Leading zeros are kept in the literal
    let tokens = tokenize("007.250");
    assert_eq!(tokens[0].literal, "007.250");
    assert_eq!(tokens[0].value, Some(7.25));
}

#[test]
fn test_point_without_digit_is_not_consumed() {
    let tokens = tokenize("3.");
    assert_eq!(tokens[0].literal, "3");
    assert_eq!(tokens[0].value, Some(3.0));
    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, ".", 1));
    assert_eq!(tokens[2].kind, TokenKind::Eof);

    assert_eq!(kinds!("3.x"), vec![TokenKind::Number, TokenKind::Illegal, TokenKind::Variable, TokenKind::Eof]);
}

#[test]
fn test_variables() {
    let tokens = tokenize("x*Y");
    assert_eq!(tokens[0], Token::new(TokenKind::Variable, "x", 0));
    assert_eq!(tokens[2], Token::new(TokenKind::Variable, "Y", 2));

    // Multi-letter identifiers aren't supported; the whole run is one illegal token
    assert_eq!(tokenize("abc"), vec![
        Token::new(TokenKind::Illegal, "abc", 0),
        Token::new(TokenKind::Eof, "", 3),
    ]);

    // A digit ends a run of letters
    assert_eq!(kinds!("x2"), vec![TokenKind::Variable, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn test_commands() {
    let tokens = tokenize("\\sqrt[3]{x}");
    assert_eq!(tokens[0], Token::new(TokenKind::Command, "sqrt", 0));
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<alloc::vec::Vec<_>>(),
        vec![
            TokenKind::Command, TokenKind::LBracket, TokenKind::Number, TokenKind::RBracket,
            TokenKind::LBrace, TokenKind::Variable, TokenKind::RBrace, TokenKind::Eof,
        ]
    );

    assert_eq!(tokenize("\\frac")[0], Token::new(TokenKind::Illegal, "\\frac", 0));
    assert_eq!(tokenize("\\")[0], Token::new(TokenKind::Illegal, "\\", 0));

    // Only letters belong to the command name
    assert_eq!(kinds!("\\sqrt2"), vec![TokenKind::Command, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn test_unknown_characters() {
    assert_eq!(tokenize("2 # 3")[1], Token::new(TokenKind::Illegal, "#", 2));
    assert_eq!(tokenize("é")[0].kind, TokenKind::Illegal);
}

#[test]
fn test_whitespace() {
    let tokens = tokenize("\t 1\r\n+\n2  ");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].position, 2);
    assert_eq!(tokens[1].position, 5);
    assert_eq!(tokens[2].position, 7);
    assert_eq!(tokens[3], Token::new(TokenKind::Eof, "", 10));

    assert_eq!(tokenize("   "), vec![Token::new(TokenKind::Eof, "", 3)]);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token().kind, TokenKind::Number);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);

    // ...but the iterator stops
    let mut lexer = Lexer::new("1");
    assert!(lexer.next().is_some());
    assert!(lexer.next().is_some());
    assert!(lexer.next().is_none());
}

#[test]
fn test_describe() {
    assert_eq!(Token::new(TokenKind::Eof, "", 0).describe(), "end of input");
    assert_eq!(Token::new(TokenKind::Star, "*", 0).describe(), "*");
}
