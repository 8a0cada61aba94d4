//! Human readable listings of each compilation phase.
use crate::{
    parsing::{Assign, AstVisitor, Declaration, IfStmt, Program, Stmt},
    tokens::Token,
};
use std::fmt::Write;

const INDENT: &str = "    ";

/// One `Token: <text>` line per token. End-of-file is left out.
pub fn token_listing(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| !token.is_eof())
        .fold(String::new(), |mut buf, token| {
            // Writing to a string can't fail.
            let _ = writeln!(buf, "Token: {}", token.text);
            buf
        })
}

/// One `AST Node: <statement>` line per statement, with conditional
/// branches wrapped in braces and indented.
pub fn ast_listing(program: &Program) -> String {
    let mut printer = AstPrinter::default();
    printer.program(program);
    printer.buf
}

#[derive(Default)]
struct AstPrinter {
    buf: String,
    depth: usize,
}

impl AstPrinter {
    fn line(&mut self, text: impl std::fmt::Display) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        let _ = writeln!(self.buf, "{text}");
    }
}

impl AstVisitor for AstPrinter {
    type Output = ();

    fn stmts(&mut self, stmts: &[Stmt]) -> Self::Output {
        for stmt in stmts {
            self.stmt(stmt);
        }
    }

    fn decl(&mut self, decl: &Declaration) -> Self::Output {
        self.line(format_args!("AST Node: {decl}"));
    }

    fn assign(&mut self, assign: &Assign) -> Self::Output {
        self.line(format_args!("AST Node: {assign}"));
    }

    fn if_stmt(&mut self, if_stmt: &IfStmt) -> Self::Output {
        self.line(format_args!("AST Node: if {} {{", if_stmt.cond));

        self.depth += 1;
        self.block(&if_stmt.then_block);
        self.depth -= 1;

        if let Some(else_block) = &if_stmt.else_block {
            self.line("} else {");
            self.depth += 1;
            self.block(else_block);
            self.depth -= 1;
        }

        self.line("}");
    }
}
