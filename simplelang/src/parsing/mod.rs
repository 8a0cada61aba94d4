//! Syntactic analysis.
//!
//! Recursive descent over the token stream. Each syntax node knows how to
//! parse itself from the stream via the [`Parse`] trait.
mod block;
mod cond;
mod expr;
mod ident;
mod literal;
mod prog;
mod stmts;
mod visitor;

pub use self::{block::*, cond::*, expr::*, ident::*, prog::*, stmts::*, visitor::*};

use crate::{error::ParseError, token_stream::TokenStream};

pub trait Parse: Sized {
    fn parse(input: &mut TokenStream) -> Result<Self, ParseError>;
}
