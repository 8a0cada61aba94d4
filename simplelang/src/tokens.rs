//! Tokens
use smol_str::SmolStr;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Line in the source where the token starts, counting from 1.
    pub line: usize,
    /// Token text as classified by the lexer.
    ///
    /// Usually identical to the span's fragment, except for words
    /// that were cut down to the configured maximum length.
    pub text: SmolStr,
    /// Set when the lexer truncated a word that was too long.
    pub truncated: bool,
}

impl Token {
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
pub enum TokenKind {
    // Simple
    Assign,    // =
    Equal,     // ==
    Plus,      // +
    Minus,     // -
    Mult,      // *
    Div,       // /
    LBrace,    // {
    RBrace,    // }
    LParen,    // (
    RParen,    // )
    Comma,     // ,
    Semicolon, // ;

    // ------------------------------------------------------------------------
    // Complex
    Identifier,
    /// Reserved identifiers
    Keyword(Keyword),
    /// Number literal
    Number,

    // ------------------------------------------------------------------------
    // Special
    /// Unsupported character, rejected by the parser.
    Unknown,
    /// End-of-file
    EOF,
}

impl fmt::Display for TokenKind {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Assign     => write!(f, "Assign"),
            Self::Equal      => write!(f, "Equal"),
            Self::Plus       => write!(f, "Plus"),
            Self::Minus      => write!(f, "Minus"),
            Self::Mult       => write!(f, "Mult"),
            Self::Div        => write!(f, "Div"),
            Self::LBrace     => write!(f, "LBrace"),
            Self::RBrace     => write!(f, "RBrace"),
            Self::LParen     => write!(f, "LParen"),
            Self::RParen     => write!(f, "RParen"),
            Self::Comma      => write!(f, "Comma"),
            Self::Semicolon  => write!(f, "Semicolon"),
            Self::Identifier => write!(f, "Identifier"),
            Self::Keyword(k) => write!(f, "{k:?}"),
            Self::Number     => write!(f, "Number"),
            Self::Unknown    => write!(f, "Unknown"),
            Self::EOF        => write!(f, "EOF"),
        }
    }
}

/// Reserved keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Keyword {
    Int,
    If,
    Else,
}

impl Keyword {
    pub fn parse(text: impl AsRef<str>) -> Option<Self> {
        match text.as_ref() {
            "int" => Some(Self::Int),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            _ => None,
        }
    }
}

impl fmt::Display for Keyword {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int  => write!(f, "int"),
            Self::If   => write!(f, "if"),
            Self::Else => write!(f, "else"),
        }
    }
}

/// Chunk of source code, encoded as a starting byte position and size.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Span {
    pub index: u32,
    pub size: u32,
}

impl Span {
    pub fn new(index: u32, size: u32) -> Self {
        Self { index, size }
    }

    #[inline]
    pub fn fragment<'a>(&self, text: &'a str) -> &'a str {
        &text[(self.index as usize)..(self.end() as usize)]
    }

    /// Ending index of the span, exclusive.
    #[inline]
    pub fn end(&self) -> u32 {
        self.index + self.size
    }

    /// The full line of source text containing the start of the span,
    /// without the trailing line break.
    pub fn surrounding_line<'a>(&self, text: &'a str) -> (&'a str, Span) {
        let index = (self.index as usize).min(text.len());

        let start = text[..index].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let end = text[index..]
            .find('\n')
            .map(|i| index + i)
            .unwrap_or(text.len());

        // Windows :(
        let line = text[start..end].trim_end_matches('\r');

        let line_span = Span {
            index: start as u32,
            size: line.len() as u32,
        };

        (line, line_span)
    }
}
