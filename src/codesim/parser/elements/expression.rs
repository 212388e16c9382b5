//! Expression parsing
//!
//! Priority: block, declaration, `statement ;`, lone `;`.

use crate::codesim::ast::{AbstractBlock, Expression, Statement, VariableDeclaration};
use crate::codesim::cursor::Cursor;
use crate::codesim::parser::combinators::semicolon;

impl Expression {
    pub fn build(cursor: &mut Cursor<'_>) -> Option<Self> {
        AbstractBlock::build(cursor)
            .map(Expression::Block)
            .or_else(|| VariableDeclaration::build(cursor).map(Expression::Declaration))
            .or_else(|| terminated_statement(cursor).map(Expression::Statement))
            .or_else(|| semicolon(cursor).map(|()| Expression::Empty))
    }
}

fn terminated_statement(cursor: &mut Cursor<'_>) -> Option<Statement> {
    let mut branch = cursor.fork();
    let statement = Statement::build(&mut branch)?;
    semicolon(&mut branch)?;
    branch.commit(cursor);
    Some(statement)
}
