//! Fixed values of the target machine and default compiler limits.

/// Type for storing memory cell addresses.
pub type Address = u16;

/// First memory cell handed out to variables.
pub const VAR_BASE_ADDR: Address = 100; // 0x64

/// Memory cell pre-seeded with the value `1` by the runtime.
///
/// Increment and decrement statements add or subtract this cell
/// instead of loading an immediate. Provisioning the cell is the
/// responsibility of whoever loads the program.
pub const CONST_ONE_ADDR: Address = 101; // 0x65

/// Number of distinct variables a single program may use.
pub const MAX_VARIABLES: usize = 10;

/// Deepest nesting of conditionals the parser accepts.
///
/// Parsing, code generation and listings all recurse once per level,
/// so the limit keeps them within the stack of a default thread.
pub const MAX_NESTING: usize = 128;

/// Longest identifier or keyword the lexer keeps intact.
///
/// Longer words are truncated or rejected depending on
/// [`WordOverflow`](crate::lex::WordOverflow).
pub const MAX_WORD_LEN: usize = 99;

/// Name of the label emitted right before the final halt.
pub const END_LABEL: &str = "end";
