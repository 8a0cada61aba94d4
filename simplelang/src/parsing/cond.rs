//! Conditionals.
use super::{block::Block, ident::Ident, literal::parse_int, Parse};
use crate::{
    constants::MAX_NESTING,
    error::{ParseError, ParseErrorKind},
    token_stream::{TokenError, TokenStream},
    tokens::{Keyword, TokenKind},
};
use std::fmt;

/// # Example
///
/// ```text
/// if (a == 0) {
///     b = 1;
/// } else {
///     b = 2;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub cond: Condition,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

/// Comparison of a variable against an integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub lhs: Ident,
    pub op: CmpOp,
    pub rhs: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
}

impl Parse for IfStmt {
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError> {
        let keyword = input
            .consume(TokenKind::Keyword(Keyword::If))
            .map_err(|err| err.into_parse_error(ParseErrorKind::UnrecognizedStatement))?;

        if !input.enter_nested(MAX_NESTING) {
            return Err(ParseError::new(ParseErrorKind::NestingTooDeep, &keyword));
        }
        let result = Self::parse_branches(input);
        input.exit_nested();

        result
    }
}

impl IfStmt {
    /// Everything after the `if` keyword.
    fn parse_branches(input: &mut TokenStream) -> Result<Self, ParseError> {
        let cond = Condition::parse(input)?;
        let then_block = Block::parse(input)?;

        let else_block = if input.match_token(TokenKind::Keyword(Keyword::Else)) {
            Some(Block::parse(input)?)
        } else {
            None
        };

        Ok(Self {
            cond,
            then_block,
            else_block,
        })
    }
}

impl Parse for Condition {
    /// Parse `(<identifier> == <integer>)`.
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError> {
        use ParseErrorKind as K;
        use TokenKind as T;

        let malformed = |err: TokenError| err.into_parse_error(K::MalformedCondition);

        input.consume(T::LParen).map_err(malformed)?;
        let lhs = input
            .consume(T::Identifier)
            .map(|token| Ident::from_token(&token))
            .map_err(malformed)?;
        input.consume(T::Equal).map_err(malformed)?;
        let rhs = parse_int(input, K::MalformedCondition)?;
        input.consume(T::RParen).map_err(malformed)?;

        Ok(Self {
            lhs,
            op: CmpOp::Eq,
            rhs,
        })
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "=="),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.op, self.rhs)
    }
}
