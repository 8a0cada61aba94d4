//! Translator from a tiny imperative language to accumulator assembly.
//!
//! ```text
//! int a, b;
//! a = 5;
//! if (a == 5) {
//!     b = a + 1;
//! } else {
//!     b = a - 1;
//! }
//! ```
//!
//! The pipeline runs lexer → parser → code generator. Each phase is
//! exposed separately ([`tokenize`], [`parse`], [`generate`]), and
//! [`compile_str`] runs all of them.
pub mod compile;
pub mod constants;
mod cursor;
pub mod error;
pub mod lex;
pub mod listing;
pub mod parsing;
pub mod token_stream;
pub mod tokens;

pub use self::{
    compile::generate,
    error::{CompileError, CompileResult},
};

use compile::{AssemblyProgram, LabelAllocator, SymbolConf, SymbolTable};
use error::{LexError, ParseError};
use lex::{LexConf, Lexer};
use log::debug;
use parsing::{Parse, Program};
use token_stream::TokenStream;
use tokens::Token;

pub const IMPL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings for a whole compilation.
#[derive(Debug, Clone, Default)]
pub struct CompileConf {
    pub lex: LexConf,
    pub symbols: SymbolConf,
}

/// Output of every phase of a successful compilation.
#[derive(Debug, Clone)]
pub struct Compilation {
    /// Token stream, terminated by an EOF token.
    pub tokens: Vec<Token>,
    pub program: Program,
    pub assembly: AssemblyProgram,
    /// Memory cells assigned to the program's variables.
    pub symbols: SymbolTable,
}

impl Compilation {
    pub fn token_listing(&self) -> String {
        listing::token_listing(&self.tokens)
    }

    pub fn ast_listing(&self) -> String {
        listing::ast_listing(&self.program)
    }

    pub fn asm_listing(&self) -> String {
        self.assembly.to_string()
    }
}

/// Split source text into tokens, ending with an EOF token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, &LexConf::default())
}

pub fn tokenize_with(source: &str, conf: &LexConf) -> Result<Vec<Token>, LexError> {
    Lexer::with_conf(source, conf.clone()).into_iter().collect()
}

/// Build the syntax tree from a token stream.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let mut stream = TokenStream::new(tokens);
    Program::parse(&mut stream)
}

/// Compile source text with default settings.
pub fn compile_str(source: &str) -> CompileResult<Compilation> {
    compile_with(source, &CompileConf::default())
}

/// Compile source text.
///
/// Every call starts from an empty symbol table and label counter,
/// so identical input always gives identical output.
pub fn compile_with(source: &str, conf: &CompileConf) -> CompileResult<Compilation> {
    // Lexical analysis
    debug!("generating tokens");
    let tokens = tokenize_with(source, &conf.lex)?;

    // Syntactic analysis
    debug!("generating syntax tree from {} tokens", tokens.len());
    let program = parse(tokens.clone())?;

    // Code generation
    debug!("generating assembly for {} statements", program.stmts.len());
    let mut symbols = SymbolTable::new(conf.symbols.clone());
    let mut labels = LabelAllocator::new();
    let assembly = generate(&program, &mut symbols, &mut labels)?;

    Ok(Compilation {
        tokens,
        program,
        assembly,
        symbols,
    })
}
