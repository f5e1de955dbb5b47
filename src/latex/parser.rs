use alloc::{boxed::Box, string::ToString, vec::Vec};
use core::mem;

use crate::error::{ParseError, ParseErrors};

use super::{lexer::{Lexer, Token, TokenKind}, syntax::SyntaxNode};

/// Settings which affect parsing.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct ParserSettings {
    /// Neither the parser's recursion nor the height of the tree it builds may exceed this. Input
    /// which would need more is rejected with [ParseError::TooDeep].
    ///
    /// Left-associative chains such as `1 + 2 + 3` don't recurse, but each operator still adds a
    /// level to the tree, so this also caps a flat chain at `max_depth` operands.
    pub max_depth: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// How tightly an infix operator binds. Anything which is not an infix operator has `Lowest`, which
/// is what stops the infix loop.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Precedence {
    Lowest,
    Equality,
    Sum,
    Product,
    Power,
}

impl Precedence {
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Equal => Precedence::Equality,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Star | TokenKind::Slash => Precedence::Product,
            TokenKind::Caret => Precedence::Power,
            _ => Precedence::Lowest,
        }
    }

    /// The next level down. Parsing the right operand of `^` at this level lets another `^` bind
    /// to it, which is what makes power right-associative.
    fn lower(self) -> Precedence {
        match self {
            Precedence::Lowest | Precedence::Equality => Precedence::Lowest,
            Precedence::Sum => Precedence::Equality,
            Precedence::Product => Precedence::Sum,
            Precedence::Power => Precedence::Product,
        }
    }
}

/// A parsed subtree, along with its height.
type Parsed = Option<(SyntaxNode, usize)>;

/// Builds a [SyntaxNode] tree from the tokens of a string, using precedence climbing.
///
/// The parser looks at two tokens at a time: `current`, which the rule being run is looking at,
/// and `peek`, which decides whether an infix operator follows. Each rule leaves `current` on the
/// last token it consumed.
///
/// Errors are collected rather than returned straight away. Once a rule has recorded an error it
/// returns None, and nothing built up to that point is ever handed to the caller.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
    settings: ParserSettings,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, settings: ParserSettings) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self { lexer, current, peek, errors: Vec::new(), settings, depth: 0 }
    }

    /// Parses the whole input as a single expression.
    pub fn parse(mut self) -> Result<SyntaxNode, ParseErrors> {
        let result = self.parse_expression(Precedence::Lowest);

        // Leftover tokens is an error
        if result.is_some() && self.peek.kind != TokenKind::Eof {
            let error = illegal_or(self.peek.clone(), |t| ParseError::TrailingInput {
                position: t.position,
                literal: t.describe(),
            });
            self.errors.push(error);
        }

        match result {
            Some((node, _)) if self.errors.is_empty() => Ok(node),
            _ => {
                log::debug!("parse failed with {} error(s): {:?}", self.errors.len(), self.errors);
                Err(ParseErrors(self.errors))
            }
        }
    }

    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    /// If the next token is `kind`, advances onto it. Otherwise records that `expected` was missing.
    fn expect_peek(&mut self, kind: TokenKind, expected: char) -> Option<()> {
        if self.peek.kind == kind {
            self.advance();
            Some(())
        } else {
            self.errors.push(ParseError::ExpectedDelimiter { expected, position: self.peek.position });
            None
        }
    }

    /// Wraps up a newly-built node, rejecting it if the tree has become too tall.
    fn finish(&mut self, node: SyntaxNode, height: usize) -> Parsed {
        if height > self.settings.max_depth {
            self.errors.push(ParseError::TooDeep {
                max_depth: self.settings.max_depth,
                position: node.token().position,
            });
            return None
        }

        Some((node, height))
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Parsed {
        if self.depth >= self.settings.max_depth {
            self.errors.push(ParseError::TooDeep {
                max_depth: self.settings.max_depth,
                position: self.current.position,
            });
            return None
        }

        self.depth += 1;
        let result = self.parse_expression_inner(precedence);
        self.depth -= 1;
        result
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Parsed {
        let mut left = self.parse_prefix()?;

        while self.peek.kind != TokenKind::Eof && precedence < Precedence::of(self.peek.kind) {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Parsed {
        match self.current.kind {
            TokenKind::Number => {
                // The lexer only produces Number tokens for literals which parse
                let value = self.current.value.unwrap_or_default();
                let token = self.current.clone();
                self.finish(SyntaxNode::Number { value, token }, 1)
            }

            TokenKind::Variable => {
                let token = self.current.clone();
                self.finish(SyntaxNode::Variable { name: token.literal.clone(), token }, 1)
            }

            TokenKind::LParen => self.parse_group(),
            TokenKind::Command => self.parse_command(),

            _ => {
                let error = illegal_or(self.current.clone(), |t| ParseError::UnexpectedToken {
                    position: t.position,
                    literal: t.describe(),
                });
                self.errors.push(error);
                None
            }
        }
    }

    /// Called with `current` on an infix operator and `left` already parsed.
    fn parse_infix(&mut self, (left, left_height): (SyntaxNode, usize)) -> Parsed {
        let operator = self.current.clone();
        let precedence = Precedence::of(operator.kind);

        let right_precedence = if operator.kind == TokenKind::Caret {
            precedence.lower()
        } else {
            precedence
        };

        self.advance();
        let (right, right_height) = self.parse_expression(right_precedence)?;
        let height = left_height.max(right_height) + 1;

        let node = if operator.kind == TokenKind::Equal {
            SyntaxNode::Equal { left: Box::new(left), operator, right: Box::new(right) }
        } else {
            SyntaxNode::BinaryOp { left: Box::new(left), operator, right: Box::new(right) }
        };
        self.finish(node, height)
    }

    /// Called with `current` on a `(`.
    fn parse_group(&mut self) -> Parsed {
        let token = self.current.clone();
        self.advance();

        let (inner, height) = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen, ')')?;

        self.finish(SyntaxNode::Group { inner: Box::new(inner), token }, height + 1)
    }

    /// Called with `current` on a command. Parses an optional `[...]` argument followed by a
    /// mandatory `{...}` argument.
    fn parse_command(&mut self) -> Parsed {
        let token = self.current.clone();
        let mut height = 0;

        let optional = if self.peek.kind == TokenKind::LBracket {
            self.advance();
            self.advance();

            let (optional, optional_height) = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::RBracket, ']')?;

            height = optional_height;
            Some(Box::new(optional))
        } else {
            None
        };

        if self.peek.kind != TokenKind::LBrace {
            self.errors.push(ParseError::MissingArgument {
                command: token.literal.to_string(),
                position: self.peek.position,
            });
            return None
        }
        self.advance();
        self.advance();

        let (argument, argument_height) = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBrace, '}')?;

        height = height.max(argument_height) + 1;
        self.finish(SyntaxNode::Command {
            name: token.literal.clone(),
            argument: Box::new(argument),
            optional,
            token,
        }, height)
    }
}

/// Reports `token` as illegal if it is, otherwise builds an error for it with `other`.
fn illegal_or(token: Token, other: impl FnOnce(&Token) -> ParseError) -> ParseError {
    if token.kind == TokenKind::Illegal {
        ParseError::IllegalToken { position: token.position, literal: token.literal }
    } else {
        other(&token)
    }
}
