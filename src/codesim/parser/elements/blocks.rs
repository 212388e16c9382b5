//! Control-flow block parsing
//!
//! A body is either a braced list of expressions or a single expression, so
//! `else if` needs no special casing: the `else` body is simply an `if` block.

use crate::codesim::ast::{AbstractBlock, Body, CatchClause, Expression, Statement, VariableDeclaration};
use crate::codesim::cursor::Cursor;
use crate::codesim::lexer::Lexeme;
use crate::codesim::parser::combinators::{
    close_brace, close_paren, delimited, lexeme, open_brace, open_paren, repeated, semicolon,
    separated, word,
};
use crate::codesim::parser::elements::declaration::type_name;

impl AbstractBlock {
    pub fn build(cursor: &mut Cursor<'_>) -> Option<Self> {
        if_block(cursor)
            .or_else(|| while_block(cursor))
            .or_else(|| do_while_block(cursor))
            .or_else(|| for_block(cursor))
            .or_else(|| try_block(cursor))
    }
}

/// `{ expression* }` or a single expression
pub(crate) fn body(cursor: &mut Cursor<'_>) -> Option<Body> {
    braced_body(cursor).or_else(|| Expression::build(cursor).map(|expression| vec![expression]))
}

pub(crate) fn braced_body(cursor: &mut Cursor<'_>) -> Option<Body> {
    delimited(cursor, open_brace, close_brace, |inner| {
        Some(repeated(inner, Expression::build))
    })
}

fn condition(cursor: &mut Cursor<'_>) -> Option<Statement> {
    delimited(cursor, open_paren, close_paren, Statement::build)
}

fn if_block(cursor: &mut Cursor<'_>) -> Option<AbstractBlock> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::If)?;
    let condition = condition(&mut branch)?;
    let then_body = body(&mut branch)?;
    let else_body = else_clause(&mut branch).unwrap_or_default();
    branch.commit(cursor);

    Some(AbstractBlock::If {
        condition,
        then_body,
        else_body,
    })
}

fn else_clause(cursor: &mut Cursor<'_>) -> Option<Body> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::Else)?;
    let body = body(&mut branch)?;
    branch.commit(cursor);
    Some(body)
}

fn while_block(cursor: &mut Cursor<'_>) -> Option<AbstractBlock> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::While)?;
    let condition = condition(&mut branch)?;
    let body = body(&mut branch)?;
    branch.commit(cursor);
    Some(AbstractBlock::While { condition, body })
}

fn do_while_block(cursor: &mut Cursor<'_>) -> Option<AbstractBlock> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::Do)?;
    let body = body(&mut branch)?;
    lexeme(&mut branch, Lexeme::While)?;
    let condition = condition(&mut branch)?;
    semicolon(&mut branch)?;
    branch.commit(cursor);
    Some(AbstractBlock::DoWhile { condition, body })
}

fn for_block(cursor: &mut Cursor<'_>) -> Option<AbstractBlock> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::For)?;
    open_paren(&mut branch)?;
    let init = VariableDeclaration::build(&mut branch)
        .map(Expression::Declaration)
        .or_else(|| for_clause(&mut branch, semicolon))?;
    let condition = for_clause(&mut branch, semicolon)?;
    let iteration = for_clause(&mut branch, close_paren)?;
    let body = body(&mut branch)?;
    branch.commit(cursor);

    Some(AbstractBlock::For {
        init: Box::new(init),
        condition: Box::new(condition),
        iteration: Box::new(iteration),
        body,
    })
}

/// An optional statement followed by `end`; a left-out clause is `Empty`
fn for_clause<'a>(
    cursor: &mut Cursor<'a>,
    end: fn(&mut Cursor<'a>) -> Option<()>,
) -> Option<Expression> {
    let mut branch = cursor.fork();
    let statement = Statement::build(&mut branch);
    end(&mut branch)?;
    branch.commit(cursor);
    Some(statement.map_or(Expression::Empty, Expression::Statement))
}

/// `try [(resources)] { … } catch* [finally { … }]`
///
/// At least one of resources, a catch or a finally must be present.
fn try_block(cursor: &mut Cursor<'_>) -> Option<AbstractBlock> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::Try)?;
    let resources = resources(&mut branch).unwrap_or_default();
    let try_block = braced_body(&mut branch)?;
    let catch_blocks = repeated(&mut branch, catch_clause);
    let finally_block = finally_clause(&mut branch);

    if resources.is_empty() && catch_blocks.is_empty() && finally_block.is_none() {
        return None;
    }
    branch.commit(cursor);

    Some(AbstractBlock::TryCatchFinally {
        resources,
        try_block,
        catch_blocks,
        finally_block,
    })
}

/// `( declaration (; declaration)* [;] )`
fn resources(cursor: &mut Cursor<'_>) -> Option<Vec<VariableDeclaration>> {
    delimited(cursor, open_paren, close_paren, |inner| {
        let declarations = separated(
            inner,
            Lexeme::Semicolon,
            VariableDeclaration::build_unterminated,
        )?;
        let _ = semicolon(inner);
        Some(declarations)
    })
}

/// `catch (Type (| Type)* name) { … }`
fn catch_clause(cursor: &mut Cursor<'_>) -> Option<CatchClause> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::Catch)?;
    let (exception_types, variable) = delimited(&mut branch, open_paren, close_paren, |inner| {
        let exception_types = separated(inner, Lexeme::Pipe, type_name)?;
        let variable = word(inner)?.to_string();
        Some((exception_types, variable))
    })?;
    let body = braced_body(&mut branch)?;
    branch.commit(cursor);

    Some(CatchClause {
        exception_types,
        variable,
        body,
    })
}

fn finally_clause(cursor: &mut Cursor<'_>) -> Option<Body> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::Finally)?;
    let body = braced_body(&mut branch)?;
    branch.commit(cursor);
    Some(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(source: &str) -> AbstractBlock {
        let mut cursor = Cursor::new(source);
        let block = AbstractBlock::build(&mut cursor).expect("a block");
        assert!(cursor.is_at_end(), "left over: {:?}", cursor.remaining());
        block
    }

    #[test]
    fn test_if_else_if() {
        let AbstractBlock::If {
            condition,
            then_body,
            else_body,
        } = block("if (a) { x = 1; } else if (b) y = 2; else { }")
        else {
            panic!("expected an if block");
        };
        assert_eq!(condition, Statement::variable("a"));
        assert_eq!(then_body.len(), 1);
        assert_eq!(else_body.len(), 1);
        assert!(matches!(
            &else_body[0],
            Expression::Block(AbstractBlock::If { else_body, .. }) if else_body.is_empty()
        ));
    }

    #[test]
    fn test_do_while_needs_semicolon() {
        assert!(matches!(
            block("do { i = i + 1; } while (i != 10);"),
            AbstractBlock::DoWhile { .. }
        ));

        let mut cursor = Cursor::new("do { } while (i)");
        assert_eq!(AbstractBlock::build(&mut cursor), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_for_clauses() {
        let AbstractBlock::For {
            init,
            condition,
            iteration,
            body,
        } = block("for (int i = 0; i != n; ++i) total = total + i;")
        else {
            panic!("expected a for block");
        };
        assert!(matches!(*init, Expression::Declaration(_)));
        assert_eq!(condition.clause_text(), "i != n");
        assert_eq!(iteration.clause_text(), "++i");
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_for_with_empty_clauses() {
        let AbstractBlock::For {
            init,
            condition,
            iteration,
            body,
        } = block("for (;;) {}")
        else {
            panic!("expected a for block");
        };
        assert_eq!(*init, Expression::Empty);
        assert_eq!(*condition, Expression::Empty);
        assert_eq!(*iteration, Expression::Empty);
        assert!(body.is_empty());
    }

    #[test]
    fn test_try_catch_finally() {
        let AbstractBlock::TryCatchFinally {
            resources,
            try_block,
            catch_blocks,
            finally_block,
        } = block(
            "try (Reader in = open; Writer out = create;) { copy = 1; } \
             catch (IOException | SQLException e) { } finally { close = 1; }",
        )
        else {
            panic!("expected a try block");
        };
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1].name, "out");
        assert_eq!(try_block.len(), 1);
        assert_eq!(catch_blocks.len(), 1);
        assert_eq!(
            catch_blocks[0].exception_types,
            vec!["IOException".to_string(), "SQLException".to_string()]
        );
        assert_eq!(catch_blocks[0].variable, "e");
        assert_eq!(finally_block.map(|body| body.len()), Some(1));
    }

    #[test]
    fn test_bare_try_is_rejected() {
        let mut cursor = Cursor::new("try { x = 1; } y = 2;");
        assert_eq!(AbstractBlock::build(&mut cursor), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_unclosed_body_leaves_cursor() {
        let mut cursor = Cursor::new("while (x) { y = 1;");
        assert_eq!(AbstractBlock::build(&mut cursor), None);
        assert_eq!(cursor.offset(), 0);
    }
}
