//! Converts input text into a stream of [Token]s.

use core::{iter::Peekable, str::CharIndices};

use alloc::{format, string::{String, ToString}, vec::Vec};

/// The kinds of token which the lexer can produce.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Variable,
    Caret,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Command,
    Equal,
    Eof,
    Illegal,
}

/// A single lexical unit. `value` is only present for `Number` tokens, and `position` is the byte
/// offset of the token's first character.
#[derive(PartialEq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub value: Option<f64>,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: usize) -> Token {
        Token { kind, literal: literal.into(), value: None, position }
    }

    /// A description of this token for use in error messages.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            self.literal.clone()
        }
    }
}

/// The only command name which is recognised.
pub const SQRT_COMMAND: &str = "sqrt";

/// Splits a string into tokens. Call [next_token](Lexer::next_token) repeatedly until it returns an
/// `Eof` token; every call after that also returns `Eof`.
///
/// The lexer never fails. Anything it doesn't understand becomes an `Illegal` token, which the
/// parser reports as an error.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable(), finished: false }
    }

    /// Position of the next unconsumed character.
    fn position(&mut self) -> usize {
        self.chars.peek().map(|(i, _)| *i).unwrap_or(self.input.len())
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek_char() {
            self.chars.next();
        }
    }

    /// Consumes characters for as long as `pred` holds, and returns the slice they made up.
    fn take_while(&mut self, start: usize, pred: impl Fn(char) -> bool) -> &'a str {
        while let Some(c) = self.peek_char() {
            if pred(c) {
                self.chars.next();
            } else {
                break;
            }
        }

        let end = self.position();
        let input = self.input;
        &input[start..end]
    }

    /// Reads a number made of digits, optionally followed by a point and at least one more digit.
    /// A point which isn't followed by a digit is left for the next token.
    fn read_number(&mut self, start: usize) -> Token {
        self.take_while(start, |c| c.is_ascii_digit());

        // Look one character past the point before committing to it
        let input = self.input;
        let mut rest_chars = input[self.position()..].chars();
        if rest_chars.next() == Some('.') && rest_chars.next().map_or(false, |c| c.is_ascii_digit()) {
            self.chars.next();
            self.take_while(start, |c| c.is_ascii_digit());
        }

        let end = self.position();
        let literal = &input[start..end];
        match literal.parse::<f64>() {
            Ok(value) => Token { kind: TokenKind::Number, literal: literal.to_string(), value: Some(value), position: start },
            Err(_) => Token::new(TokenKind::Illegal, literal, start),
        }
    }

    /// Reads a single-letter variable. Identifiers are exactly one letter long, so a run of letters
    /// is reported as one `Illegal` token.
    fn read_variable(&mut self, start: usize) -> Token {
        let literal = self.take_while(start, |c| c.is_ascii_alphabetic());

        if literal.len() == 1 {
            Token::new(TokenKind::Variable, literal, start)
        } else {
            Token::new(TokenKind::Illegal, literal, start)
        }
    }

    /// Reads a backslash and the letters after it.
    fn read_command(&mut self, start: usize) -> Token {
        let name = self.take_while(start + 1, |c| c.is_ascii_alphabetic());

        if name == SQRT_COMMAND {
            Token::new(TokenKind::Command, name, start)
        } else {
            Token::new(TokenKind::Illegal, format!("\\{}", name), start)
        }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position();
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Token::new(TokenKind::Eof, "", start),
        };

        let token = if c.is_ascii_digit() {
            self.read_number(start)
        } else if c.is_ascii_alphabetic() {
            self.read_variable(start)
        } else if c == '\\' {
            self.chars.next();
            self.read_command(start)
        } else {
            self.chars.next();

            let kind = match c {
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '^' => TokenKind::Caret,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '[' => TokenKind::LBracket,
                ']' => TokenKind::RBracket,
                '=' => TokenKind::Equal,
                _ => TokenKind::Illegal,
            };

            Token::new(kind, c.to_string(), start)
        };

        log::trace!("lexed {:?} {:?} at {}", token.kind, token.literal, token.position);
        token
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token up to and including `Eof`, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None
        }

        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

/// Lexes the whole of `input`. The last token is always `Eof`.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
