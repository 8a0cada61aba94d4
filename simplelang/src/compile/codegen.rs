use super::{
    ir::{AssemblyProgram, IR},
    label::{Label, LabelAllocator},
    symbol::SymbolTable,
};
use crate::{
    constants::{Address, CONST_ONE_ADDR},
    error::CodegenError,
    parsing::{
        Assign, AstVisitor, BinOp, BinOpKind, Declaration, Expr, IfStmt, Ident, Operand, Program,
        Stmt,
    },
};
use log::{debug, trace};

/// Code generator.
///
/// Instructions map one-to-one to source operations. There are no
/// optimisation passes, and the accumulator is the only register.
pub struct CodeGen<'a> {
    /// Resulting generated code.
    code: Vec<IR>,
    symbols: &'a mut SymbolTable,
    labels: &'a mut LabelAllocator,
}

impl<'a> CodeGen<'a> {
    pub fn new(symbols: &'a mut SymbolTable, labels: &'a mut LabelAllocator) -> Self {
        Self {
            code: vec![],
            symbols,
            labels,
        }
    }

    /// Generate code for the whole program, terminated by a halt.
    pub fn compile(mut self, program: &Program) -> Result<AssemblyProgram, CodegenError> {
        self.program(program)?;

        self.emit(IR::Label(Label::End));
        self.emit(IR::Halt);

        debug!(
            "generated {} instructions, {} variables, {} labels",
            self.code.len(),
            self.symbols.len(),
            self.labels.count()
        );

        Ok(AssemblyProgram { code: self.code })
    }

    fn emit(&mut self, ir: IR) {
        trace!("{ir}");
        self.code.push(ir)
    }

    /// Memory cell of a variable, allocated on first use.
    fn addr(&mut self, ident: &Ident) -> Result<Address, CodegenError> {
        self.symbols
            .resolve(ident.as_str())
            .map_err(|err| CodegenError::SymbolTableFull {
                line: ident.line,
                span: ident.span,
                err,
            })
    }
}

/// Recursive visitor
impl<'a> AstVisitor for CodeGen<'a> {
    type Output = Result<(), CodegenError>;

    fn stmts(&mut self, stmts: &[Stmt]) -> Self::Output {
        for stmt in stmts {
            self.stmt(stmt)?;
        }
        Ok(())
    }

    /// Declarations exist for the reader only.
    fn decl(&mut self, _decl: &Declaration) -> Self::Output {
        Ok(())
    }

    fn assign(&mut self, assign: &Assign) -> Self::Output {
        let target = self.addr(&assign.target)?;

        match &assign.expr {
            Expr::Literal(value) => {
                self.emit(IR::LoadImm(*value));
            }
            Expr::Var(src) => {
                let src = self.addr(src)?;
                self.emit(IR::Load(src));
            }
            Expr::Binary(BinOp { op, lhs, rhs }) => {
                let lhs = self.addr(lhs)?;
                let rhs = match rhs {
                    Operand::Var(ident) => self.addr(ident)?,
                    Operand::One => CONST_ONE_ADDR,
                };

                self.emit(IR::Load(lhs));
                self.emit(match op {
                    BinOpKind::Add => IR::Add(rhs),
                    BinOpKind::Sub => IR::Sub(rhs),
                });
            }
        }

        self.emit(IR::Store(target));

        Ok(())
    }

    /// Compare and branch.
    ///
    /// ```text
    ///     mov A M <lhs>
    ///     cmp A <rhs>
    ///     jne else_part_N
    ///     <then>
    ///     jmp end_if_M        ; only with an else block
    /// else_part_N:
    ///     <else>
    /// end_if_M:
    /// ```
    fn if_stmt(&mut self, if_stmt: &IfStmt) -> Self::Output {
        // The first id belongs to the conditional itself. It never shows up in
        // the output, but keeps numbering in step with existing listings.
        let _if_label = self.labels.alloc();
        let else_label = Label::Else(self.labels.alloc());
        let end_label = Label::EndIf(self.labels.alloc());

        let lhs = self.addr(&if_stmt.cond.lhs)?;
        self.emit(IR::Load(lhs));
        self.emit(IR::Cmp(if_stmt.cond.rhs));
        self.emit(IR::JumpNotEq(else_label));

        self.block(&if_stmt.then_block)?;

        match &if_stmt.else_block {
            Some(else_block) => {
                self.emit(IR::Jump(end_label));
                self.emit(IR::Label(else_label));
                self.block(else_block)?;
            }
            None => {
                // Branch target must exist even when there is nothing to run.
                self.emit(IR::Label(else_label));
            }
        }

        self.emit(IR::Label(end_label));

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{lex::Lexer, parsing::Parse, token_stream::TokenStream};

    fn compile(source: &str) -> Result<Vec<String>, CodegenError> {
        let tokens = Lexer::new(source)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let program = Program::parse(&mut TokenStream::new(tokens)).unwrap();

        let mut symbols = SymbolTable::default();
        let mut labels = LabelAllocator::new();
        CodeGen::new(&mut symbols, &mut labels)
            .compile(&program)
            .map(|asm| asm.lines())
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(compile("").unwrap(), vec!["end:", "hlt"]);
    }

    #[test]
    fn test_declaration_only() {
        assert_eq!(compile("int a;").unwrap(), vec!["end:", "hlt"]);
    }

    #[test]
    fn test_assign_literal() {
        assert_eq!(
            compile("a = 5;").unwrap(),
            vec!["ldi A 5", "mov M A 100", "end:", "hlt"]
        );
    }

    #[test]
    fn test_assign_negative_literal() {
        assert_eq!(
            compile("a = -7;").unwrap(),
            vec!["ldi A -7", "mov M A 100", "end:", "hlt"]
        );
    }

    #[test]
    fn test_assign_var() {
        assert_eq!(
            compile("a = b;").unwrap(),
            vec!["mov A M 102", "mov M A 100", "end:", "hlt"]
        );
    }

    #[test]
    fn test_binary() {
        // a=100, b=102, c=103; 101 holds the constant one.
        assert_eq!(
            compile("a = b + c;\nd = a - b;").unwrap(),
            vec![
                "mov A M 102",
                "add M 103",
                "mov M A 100",
                "mov A M 100",
                "sub M 102",
                "mov M A 104",
                "end:",
                "hlt",
            ]
        );
    }

    #[test]
    fn test_increment_decrement() {
        assert_eq!(
            compile("a = a + 1;\na = a - 1;").unwrap(),
            vec![
                "mov A M 100",
                "add M 101",
                "mov M A 100",
                "mov A M 100",
                "sub M 101",
                "mov M A 100",
                "end:",
                "hlt",
            ]
        );
    }

    #[test]
    fn test_if_without_else() {
        assert_eq!(
            compile("if (a == 3) { b = 1; }").unwrap(),
            vec![
                "mov A M 100",
                "cmp A 3",
                "jne else_part_1",
                "ldi A 1",
                "mov M A 102",
                "else_part_1:",
                "end_if_2:",
                "end:",
                "hlt",
            ]
        );
    }

    #[test]
    fn test_sequential_ifs_unique_labels() {
        let lines = compile("if (a == 1) b = 1;\nif (a == 2) b = 2; else b = 3;").unwrap();

        assert!(lines.contains(&"jne else_part_1".to_string()));
        assert!(lines.contains(&"end_if_2:".to_string()));
        assert!(lines.contains(&"jne else_part_4".to_string()));
        assert!(lines.contains(&"jmp end_if_5".to_string()));
        assert!(lines.contains(&"else_part_4:".to_string()));
        assert!(lines.contains(&"end_if_5:".to_string()));
    }

    #[test]
    fn test_symbol_table_full() {
        let source = (0..11)
            .map(|i| format!("v{i} = {i};"))
            .collect::<Vec<_>>()
            .join("\n");

        match compile(&source) {
            Err(CodegenError::SymbolTableFull { line, err, .. }) => {
                assert_eq!(line, 11);
                assert_eq!(err.name, "v10");
            }
            other => panic!("expected symbol table error, got {other:?}"),
        }
    }
}
