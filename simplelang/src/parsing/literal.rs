//! Integer literals.
use crate::{
    error::{ParseError, ParseErrorKind},
    token_stream::TokenStream,
    tokens::TokenKind,
};

/// Parse an integer literal with an optional leading minus sign.
///
/// The `context` error kind is reported when the next tokens
/// are not a literal at all.
pub(crate) fn parse_int(input: &mut TokenStream, context: ParseErrorKind) -> Result<i32, ParseError> {
    let negative = input.match_token(TokenKind::Minus);

    let token = input
        .consume(TokenKind::Number)
        .map_err(|err| err.into_parse_error(context))?;

    // Only digits make it into a number token, so the only
    // way to fail is overflow.
    let magnitude = token
        .text
        .parse::<i64>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, &token))?;
    let value = if negative { -magnitude } else { magnitude };

    i32::try_from(value).map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, &token))
}
