//! Lexical analysis
use crate::{
    constants::MAX_WORD_LEN,
    cursor::{Cursor, EOF_CHAR},
    error::LexError,
    tokens::{Keyword, Span, Token, TokenKind},
};
use log::warn;
use smol_str::SmolStr;

/// Lexer settings.
#[derive(Debug, Clone)]
pub struct LexConf {
    /// Maximum number of characters kept for an identifier or keyword.
    pub max_word_len: usize,
    /// What to do with words longer than `max_word_len`.
    pub overflow: WordOverflow,
}

impl Default for LexConf {
    fn default() -> Self {
        Self {
            max_word_len: MAX_WORD_LEN,
            overflow: WordOverflow::Truncate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOverflow {
    /// Keep the leading characters and flag the token as truncated.
    Truncate,
    /// Fail with [`LexError::TokenTooLong`].
    Reject,
}

pub struct Lexer<'a> {
    /// Character scanner
    cursor: Cursor<'a>,
    /// Keep reference to the source so tokens can
    /// slice fragments from it.
    original: &'a str,
    conf: LexConf,
    /// Start absolute byte position of the current token
    /// in the source.
    start_pos: u32,
    start_line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source_code: &'a str) -> Self {
        Self::with_conf(source_code, LexConf::default())
    }

    pub fn with_conf(source_code: &'a str, conf: LexConf) -> Self {
        let mut cursor = Cursor::new(source_code);

        // Prime the cursor so it points at the first character,
        // which is where the first token starts.
        cursor.next();

        let start_pos = cursor.offset();

        Self {
            cursor,
            original: source_code,
            conf,
            start_pos,
            start_line: 1,
        }
    }

    /// Scan the source characters and construct the next token.
    ///
    /// Each call starts with the cursor pointing at the start of the
    /// remaining source, and leaves it at the start of the next token.
    /// Once the source is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        use TokenKind as TK;

        // Erase leading whitespace.
        while is_whitespace(self.cursor.current()) {
            self.cursor.next();
        }

        self.start_token();

        let token = match self.cursor.current() {
            '=' => {
                if self.cursor.peek() == '=' {
                    self.cursor.next();
                    self.make_token(TK::Equal)
                } else {
                    self.make_token(TK::Assign)
                }
            }
            '+' => self.make_token(TK::Plus),
            '-' => self.make_token(TK::Minus),
            '*' => self.make_token(TK::Mult),
            '/' => self.make_token(TK::Div),
            '{' => self.make_token(TK::LBrace),
            '}' => self.make_token(TK::RBrace),
            '(' => self.make_token(TK::LParen),
            ')' => self.make_token(TK::RParen),
            ',' => self.make_token(TK::Comma),
            ';' => self.make_token(TK::Semicolon),
            'a'..='z' | 'A'..='Z' => return self.consume_word(),
            '0'..='9' => self.consume_number(),
            // The source may contain null bytes that are not the end.
            EOF_CHAR if self.cursor.at_end() => self.make_token(TK::EOF),
            _ => self.make_token(TK::Unknown),
        };

        Ok(token)
    }

    /// Create a span using the starting position of the current token,
    /// and the current offset of the cursor.
    fn make_span(&mut self) -> Span {
        let start = self.start_pos;
        let end = self.cursor.peek_offset();

        // Only end-of-file has 0 size.
        debug_assert!(end >= start);

        Span {
            index: start,
            size: end - start,
        }
    }

    /// Primes the lexer to consume the next token.
    fn start_token(&mut self) {
        self.start_pos = self.cursor.offset();
        self.start_line = self.cursor.line();
    }

    /// Build a token from the start position up to and including
    /// the current character, and advance past it.
    fn make_token(&mut self, kind: TokenKind) -> Token {
        let span = self.make_span();
        let text = SmolStr::from(span.fragment(self.original));
        self.finish_token(kind, span, text, false)
    }

    fn finish_token(&mut self, kind: TokenKind, span: Span, text: SmolStr, truncated: bool) -> Token {
        let token = Token {
            kind,
            span,
            line: self.start_line,
            text,
            truncated,
        };

        // Position the cursor at the first character
        // of the next token.
        self.cursor.next();

        token
    }
}

/// Specialised tokens.
impl<'a> Lexer<'a> {
    /// Make an identifier or keyword token.
    fn consume_word(&mut self) -> Result<Token, LexError> {
        debug_assert!(is_letter(self.cursor.current()));

        while is_letter_or_digit(self.cursor.peek()) {
            self.cursor.next();
        }

        let span = self.make_span();
        let fragment = span.fragment(self.original);

        // Words are ASCII only, so characters and bytes line up.
        let len = fragment.len();
        let max = self.conf.max_word_len;

        let (text, truncated) = if len > max {
            match self.conf.overflow {
                WordOverflow::Truncate => {
                    warn!(
                        "line {}: word of {len} characters truncated to {max}",
                        self.start_line
                    );
                    (SmolStr::from(&fragment[..max]), true)
                }
                WordOverflow::Reject => {
                    return Err(LexError::TokenTooLong {
                        line: self.start_line,
                        span,
                        len,
                        max,
                    });
                }
            }
        } else {
            (SmolStr::from(fragment), false)
        };

        let kind = match Keyword::parse(&*text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };

        Ok(self.finish_token(kind, span, text, truncated))
    }

    /// Make a number literal token.
    fn consume_number(&mut self) -> Token {
        debug_assert!(is_digit(self.cursor.current()));

        while is_digit(self.cursor.peek()) {
            self.cursor.next();
        }

        self.make_token(TokenKind::Number)
    }
}

/// Whitespace carries no meaning, newlines included.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = Result<Token, LexError>;
    type IntoIter = LexerIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        LexerIter {
            lexer: self,
            done: false,
        }
    }
}

/// Convenience iterator that wraps the lexer.
///
/// Ends after yielding the EOF token, or the first error.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LexerIter<'a> {
    done: bool,
    lexer: Lexer<'a>,
}

impl<'a> Iterator for LexerIter<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.lexer.next_token();
        self.done = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };

        Some(result)
    }
}
