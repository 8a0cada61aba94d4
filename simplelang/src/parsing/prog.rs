//! Program root.
use super::{stmts::Stmt, Parse};
use crate::{error::ParseError, token_stream::TokenStream, tokens::TokenKind};

/// Top level, ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Parse for Program {
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError> {
        let mut stmts = vec![];

        loop {
            // Empty statements leave no trace.
            input.ignore_many(TokenKind::Semicolon);

            if input.peek().is_eof() {
                break;
            }

            stmts.push(Stmt::parse(input)?);
        }

        Ok(Self { stmts })
    }
}
