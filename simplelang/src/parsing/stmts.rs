//! Statement parsing.
use super::{cond::IfStmt, expr::Expr, ident::Ident, Parse};
use crate::{
    error::{ParseError, ParseErrorKind},
    token_stream::TokenStream,
    tokens::{Keyword, TokenKind},
};
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Variable declaration
    Decl(Declaration),
    Assign(Assign),
    If(IfStmt),
}

/// Declaration of one or more integer variables.
///
/// Declarations have no effect at runtime. Variables receive an
/// address on first use, declared or not.
///
/// # Example
///
/// ```text
/// int a, b;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub names: Vec<Ident>,
}

/// # Example
///
/// ```text
/// a = b + c;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    pub target: Ident,
    pub expr: Expr,
}

impl Parse for Stmt {
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError> {
        use Keyword as K;
        use TokenKind as T;

        match input.peek_kind() {
            T::Keyword(K::Int) => Declaration::parse(input).map(Stmt::Decl),
            T::Keyword(K::If) => IfStmt::parse(input).map(Stmt::If),
            T::Keyword(K::Else) => Err(ParseError::new(ParseErrorKind::DanglingElse, input.peek())),
            T::Identifier => Assign::parse(input).map(Stmt::Assign),
            _ => Err(ParseError::new(
                ParseErrorKind::UnrecognizedStatement,
                input.peek(),
            )),
        }
    }
}

impl Parse for Declaration {
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError> {
        use ParseErrorKind as K;

        let keyword = input
            .consume(TokenKind::Keyword(Keyword::Int))
            .map_err(|err| err.into_parse_error(K::UnrecognizedStatement))?;

        let mut names = vec![];
        loop {
            let token = input
                .consume(TokenKind::Identifier)
                .map_err(|err| err.into_parse_error(K::UnrecognizedStatement))?;
            names.push(Ident::from_token(&token));

            if !input.match_token(TokenKind::Comma) {
                break;
            }
        }

        end_stmt(input, keyword.line, K::UnrecognizedStatement)?;

        Ok(Self { names })
    }
}

impl Parse for Assign {
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError> {
        use ParseErrorKind as K;

        let target = input
            .consume(TokenKind::Identifier)
            .map(|token| Ident::from_token(&token))
            .map_err(|err| err.into_parse_error(K::UnrecognizedStatement))?;

        // An identifier followed by anything but `=`
        // is not a statement we know.
        input
            .consume(TokenKind::Assign)
            .map_err(|err| err.into_parse_error(K::UnrecognizedStatement))?;

        let expr = Expr::parse(input)?;

        end_stmt(input, target.line, K::MalformedAssignment)?;

        Ok(Self { target, expr })
    }
}

/// Finish a simple statement.
///
/// A statement ends with an optional semicolon. Without one, the next
/// token must close the enclosing block, be the `else` of an unbraced
/// branch, end the file, or start on a later line than the statement. Anything else is trailing garbage,
/// reported as `context`.
pub(crate) fn end_stmt(input: &mut TokenStream, line: usize, context: ParseErrorKind) -> Result<(), ParseError> {
    use TokenKind as T;

    if input.match_token(T::Semicolon) {
        return Ok(());
    }

    let next = input.peek();
    match next.kind {
        T::RBrace | T::Keyword(Keyword::Else) | T::EOF => Ok(()),
        _ if next.line > line => Ok(()),
        _ => Err(ParseError::new(context, next)),
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {};", Keyword::Int, self.names.iter().join(", "))
    }
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {};", self.target, self.expr)
    }
}
