use super::{stmts::Stmt, Parse};
use crate::{
    error::{ParseError, ParseErrorKind},
    token_stream::TokenStream,
    tokens::TokenKind,
};

/// Body of a conditional branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Parse for Block {
    /// Either a braced list of statements, or a single statement.
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError> {
        use TokenKind as T;

        let open = match input.consume(T::LBrace) {
            Ok(token) => token,
            Err(_) => {
                let stmt = Stmt::parse(input)?;
                return Ok(Self { stmts: vec![stmt] });
            }
        };

        let mut stmts = vec![];

        loop {
            input.ignore_many(T::Semicolon);

            match input.peek_kind() {
                T::RBrace => {
                    input.next_token();
                    break;
                }
                // Report the brace that was left open.
                T::EOF => return Err(ParseError::new(ParseErrorKind::UnclosedBlock, &open)),
                _ => stmts.push(Stmt::parse(input)?),
            }
        }

        Ok(Self { stmts })
    }
}
