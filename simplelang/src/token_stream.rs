//! Peekable token stream.
use crate::{
    error::{ParseError, ParseErrorKind},
    tokens::{Span, Token, TokenKind},
};
use smol_str::SmolStr;
use std::{fmt, iter::Peekable, vec::IntoIter};

/// Stream of tokens with single token look ahead.
///
/// The stream always ends in an EOF token. Once the end is
/// reached, peeking or consuming keeps returning EOF.
pub struct TokenStream {
    tokens: Peekable<IntoIter<Token>>,
    eof: Token,
    /// Number of conditionals enclosing the cursor.
    depth: usize,
}

impl TokenStream {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(token) if token.is_eof() => token.clone(),
            last => {
                // Token list was built by hand without a terminator.
                let (index, line) = last
                    .map(|t| (t.span.end(), t.line))
                    .unwrap_or((0, 1));
                let eof = Token {
                    kind: TokenKind::EOF,
                    span: Span::new(index, 0),
                    line,
                    text: SmolStr::default(),
                    truncated: false,
                };
                tokens.push(eof.clone());
                eof
            }
        };

        Self {
            tokens: tokens.into_iter().peekable(),
            eof,
            depth: 0,
        }
    }

    /// Consumes the current token regardless of kind.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| self.eof.clone())
    }

    /// Return the current token without advancing the cursor.
    #[inline]
    pub fn peek(&mut self) -> &Token {
        match self.tokens.peek() {
            Some(token) => token,
            None => &self.eof,
        }
    }

    /// Return the current token kind without advancing the cursor.
    #[inline]
    pub fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// Consumes the current token if it matches the given token kind.
    ///
    /// Returns true when matched. Does not consume the token
    /// if the kinds do not match.
    pub fn match_token(&mut self, token_kind: TokenKind) -> bool {
        let is_match = self.peek_kind() == token_kind;
        if is_match {
            let _ = self.next_token(); // discard
        }
        is_match
    }

    /// Return the current token and advance the cursor.
    ///
    /// The cursor is not advanced if the token kind does not match.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] holding the encountered token
    /// if the kind doesn't match.
    pub fn consume(&mut self, token_kind: TokenKind) -> Result<Token, TokenError> {
        let token = self.peek();
        if token.kind != token_kind {
            Err(TokenError {
                expected: token_kind,
                encountered: token.clone(),
            })
        } else {
            Ok(self.next_token())
        }
    }

    /// Consumes tokens while they match the given kind.
    pub fn ignore_many(&mut self, kind: TokenKind) {
        while self.match_token(kind) {}
    }

    /// Step into a nested construct.
    ///
    /// Returns false, without changing the depth, when already
    /// `max` levels deep.
    pub fn enter_nested(&mut self, max: usize) -> bool {
        if self.depth >= max {
            return false;
        }
        self.depth += 1;
        true
    }

    /// Step out of a construct entered with [`TokenStream::enter_nested`].
    pub fn exit_nested(&mut self) {
        debug_assert!(self.depth > 0, "unbalanced exit from nested construct");
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Error returned when an unexpected token kind is encountered.
#[derive(Debug)]
pub struct TokenError {
    pub expected: TokenKind,
    pub encountered: Token,
}

impl TokenError {
    /// Give the mismatch meaning in the context of the
    /// construct being parsed.
    pub fn into_parse_error(self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, &self.encountered)
    }
}

impl std::error::Error for TokenError {}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "encountered unexpected token '{}', expected '{}'",
            self.encountered.kind, self.expected
        )
    }
}
