use crate::tokens::{Span, Token, TokenKind};
use smol_str::SmolStr;
use std::fmt;

/// Variable name, as it appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: SmolStr,
    pub span: Span,
    pub line: usize,
}

impl Ident {
    pub fn from_token(token: &Token) -> Self {
        debug_assert_eq!(token.kind, TokenKind::Identifier);

        Self {
            name: token.text.clone(),
            span: token.span,
            line: token.line,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
