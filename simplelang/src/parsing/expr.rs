//! Assignment right-hand-side.
//!
//! There is no general expression grammar. An expression is one of a few
//! fixed shapes:
//!
//! ```text
//! 5        literal
//! b        variable
//! b + c    binary, variable operand
//! b - 1    binary, constant one operand
//! ```
use super::{ident::Ident, literal::parse_int, Parse};
use crate::{
    error::{ParseError, ParseErrorKind},
    token_stream::TokenStream,
    tokens::TokenKind,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(i32),
    Var(Ident),
    Binary(BinOp),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinOp {
    pub op: BinOpKind,
    pub lhs: Ident,
    pub rhs: Operand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
}

/// Right operand of a binary expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Var(Ident),
    /// The literal `1`, read from the constant-one memory cell.
    One,
}

impl Parse for Expr {
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError> {
        use ParseErrorKind as K;
        use TokenKind as T;

        match input.peek_kind() {
            T::Number | T::Minus => parse_int(input, K::MalformedAssignment).map(Expr::Literal),
            T::Identifier => {
                let lhs = Ident::from_token(&input.next_token());

                let op = match input.peek_kind() {
                    T::Plus => BinOpKind::Add,
                    T::Minus => BinOpKind::Sub,
                    _ => return Ok(Expr::Var(lhs)),
                };
                input.next_token();

                let rhs = Operand::parse(input)?;

                Ok(Expr::Binary(BinOp { op, lhs, rhs }))
            }
            _ => Err(ParseError::new(K::MalformedAssignment, input.peek())),
        }
    }
}

impl Parse for Operand {
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError> {
        use TokenKind as T;

        let token = input.next_token();
        match token.kind {
            T::Identifier => Ok(Operand::Var(Ident::from_token(&token))),
            T::Number if token.text.parse::<i64>().ok() == Some(1) => Ok(Operand::One),
            _ => Err(ParseError::new(ParseErrorKind::MalformedAssignment, &token)),
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var(ident) => write!(f, "{ident}"),
            Self::One => write!(f, "1"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Var(ident) => write!(f, "{ident}"),
            Self::Binary(BinOp { op, lhs, rhs }) => write!(f, "{lhs} {op} {rhs}"),
        }
    }
}
