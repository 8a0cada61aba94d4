//! Code generation.
mod codegen;
mod ir;
mod label;
mod symbol;

pub use self::{
    codegen::CodeGen,
    ir::{AssemblyProgram, IR},
    label::{Label, LabelAllocator, LabelId},
    symbol::{SymbolConf, SymbolTable},
};

use crate::{error::CodegenError, parsing::Program};

/// Generate assembly for a parsed program.
///
/// The symbol table and label allocator should be fresh for each
/// program, otherwise addresses and labels continue where the
/// previous program left off.
pub fn generate(
    program: &Program,
    symbols: &mut SymbolTable,
    labels: &mut LabelAllocator,
) -> Result<AssemblyProgram, CodegenError> {
    CodeGen::new(symbols, labels).compile(program)
}
