//! Result and errors.
use crate::{
    constants::MAX_NESTING,
    tokens::{Span, Token},
};
use smol_str::SmolStr;
use std::{
    fmt::{self, Display, Formatter},
    io,
    string::FromUtf8Error,
};

pub type CompileResult<T> = std::result::Result<T, CompileError>;

/// Error for any phase of the compilation pipeline.
#[derive(Debug)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Codegen(CodegenError),
    /// Reading the program or writing listings failed.
    Io(io::Error),
    /// Program source is not valid UTF-8.
    Encoding(FromUtf8Error),
}

impl CompileError {
    /// Source line the error points at, if it originates in the source.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Lex(err) => Some(err.line()),
            Self::Parse(err) => Some(err.line),
            Self::Codegen(err) => Some(err.line()),
            Self::Io(_) | Self::Encoding(_) => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Lex(err) => Some(err.span()),
            Self::Parse(err) => Some(err.span),
            Self::Codegen(err) => Some(err.span()),
            Self::Io(_) | Self::Encoding(_) => None,
        }
    }

    /// Render the error with the offending line of source quoted.
    pub fn report(&self, source: &str) -> String {
        match (self.line(), self.span()) {
            (Some(line), Some(span)) => {
                let (text, _) = span.surrounding_line(source);
                let gutter = line.to_string();
                let pad = " ".repeat(gutter.len());
                format!("error: {self}\n{pad} |\n{gutter} | {text}\n{pad} |")
            }
            _ => format!("error: {self}"),
        }
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
            Self::Codegen(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Encoding(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(err: LexError) -> Self {
        CompileError::Lex(err)
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}

impl From<CodegenError> for CompileError {
    fn from(err: CodegenError) -> Self {
        CompileError::Codegen(err)
    }
}

impl From<io::Error> for CompileError {
    fn from(err: io::Error) -> Self {
        CompileError::Io(err)
    }
}

impl From<FromUtf8Error> for CompileError {
    fn from(err: FromUtf8Error) -> Self {
        CompileError::Encoding(err)
    }
}

// ----------------------------------------------------------------------------
// Lexical analysis

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Word is longer than the configured maximum, and the lexer
    /// was told to reject instead of truncate.
    TokenTooLong {
        line: usize,
        span: Span,
        len: usize,
        max: usize,
    },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            Self::TokenTooLong { line, .. } => *line,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::TokenTooLong { span, .. } => *span,
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenTooLong { line, len, max, .. } => write!(
                f,
                "line {line}: word is {len} characters long, maximum is {max}"
            ),
        }
    }
}

impl std::error::Error for LexError {}

// ----------------------------------------------------------------------------
// Syntactic analysis

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub span: Span,
    /// Text of the token where parsing failed.
    pub text: SmolStr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Statement does not start with anything the grammar knows.
    UnrecognizedStatement,
    /// Assignment right-hand-side matches none of the supported shapes.
    MalformedAssignment,
    /// Condition is not of the form `(<identifier> == <integer>)`.
    MalformedCondition,
    /// `else` without a preceding `if`.
    DanglingElse,
    /// `{` without a matching `}`.
    UnclosedBlock,
    /// Integer literal does not fit the integer type.
    InvalidNumber,
    /// Conditionals nested deeper than [`MAX_NESTING`](crate::constants::MAX_NESTING).
    NestingTooDeep,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, token: &Token) -> Self {
        Self {
            kind,
            line: token.line,
            span: token.span,
            text: token.text.clone(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ParseErrorKind as K;

        write!(f, "line {}: ", self.line)?;

        let text = self.text.as_str();
        match self.kind {
            K::UnrecognizedStatement if text.is_empty() => {
                write!(f, "unrecognized statement at end-of-file")
            }
            K::UnrecognizedStatement => write!(f, "unrecognized statement starting with '{text}'"),
            K::MalformedAssignment => write!(
                f,
                "malformed assignment at '{text}', expected a literal, a variable, or `x + y`, `x - y`, `x + 1`, `x - 1`"
            ),
            K::MalformedCondition => write!(
                f,
                "malformed condition at '{text}', expected `if (<identifier> == <integer>)`"
            ),
            K::DanglingElse => write!(f, "'else' without a preceding 'if'"),
            K::UnclosedBlock => write!(f, "block is missing a closing '}}'"),
            K::InvalidNumber => write!(f, "integer literal '{text}' is out of range"),
            K::NestingTooDeep => write!(
                f,
                "conditionals are nested too deeply, limit is {MAX_NESTING}"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

// ----------------------------------------------------------------------------
// Code generation

/// Number of distinct variables exceeded the symbol table capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTableFull {
    /// Variable that could not be allocated.
    pub name: SmolStr,
    pub capacity: usize,
}

impl Display for SymbolTableFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no address left for variable '{}', program is limited to {} variables",
            self.name, self.capacity
        )
    }
}

impl std::error::Error for SymbolTableFull {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    SymbolTableFull {
        line: usize,
        span: Span,
        err: SymbolTableFull,
    },
}

impl CodegenError {
    pub fn line(&self) -> usize {
        match self {
            Self::SymbolTableFull { line, .. } => *line,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::SymbolTableFull { span, .. } => *span,
        }
    }
}

impl Display for CodegenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::SymbolTableFull { line, err, .. } => write!(f, "line {line}: {err}"),
        }
    }
}

impl std::error::Error for CodegenError {}
