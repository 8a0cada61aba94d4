use super::{
    block::Block,
    cond::IfStmt,
    prog::Program,
    stmts::{Assign, Declaration, Stmt},
};

/// Walks the syntax tree.
///
/// Implementors decide how a run of statements is combined, and
/// handle each kind of statement. Conditionals recurse into their
/// blocks through [`AstVisitor::block`].
pub trait AstVisitor {
    type Output;

    fn stmts(&mut self, stmts: &[Stmt]) -> Self::Output;
    fn decl(&mut self, decl: &Declaration) -> Self::Output;
    fn assign(&mut self, assign: &Assign) -> Self::Output;
    fn if_stmt(&mut self, if_stmt: &IfStmt) -> Self::Output;

    #[inline]
    fn program(&mut self, program: &Program) -> Self::Output {
        self.stmts(&program.stmts)
    }

    #[inline]
    fn block(&mut self, block: &Block) -> Self::Output {
        self.stmts(&block.stmts)
    }

    #[inline]
    fn stmt(&mut self, stmt: &Stmt) -> Self::Output {
        match stmt {
            Stmt::Decl(decl) => self.decl(decl),
            Stmt::Assign(assign) => self.assign(assign),
            Stmt::If(if_stmt) => self.if_stmt(if_stmt),
        }
    }
}
