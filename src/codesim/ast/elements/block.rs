//! Control-flow blocks
//!
//! All block kinds share the [`AbstractBlock`] family: a comparison between an
//! `if` and a `while` is meaningful and earns partial credit.

use serde::Serialize;
use std::fmt;

use super::super::traits::AstNode;
use super::declaration::VariableDeclaration;
use super::expression::{Body, Expression};
use super::statement::Statement;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AbstractBlock {
    If {
        condition: Statement,
        then_body: Body,
        /// Empty when there is no `else`; an `else if` nests an `If` here
        else_body: Body,
    },
    While {
        condition: Statement,
        body: Body,
    },
    DoWhile {
        condition: Statement,
        body: Body,
    },
    For {
        /// Each clause is `Expression::Empty` when left out
        init: Box<Expression>,
        condition: Box<Expression>,
        iteration: Box<Expression>,
        body: Body,
    },
    TryCatchFinally {
        resources: Vec<VariableDeclaration>,
        try_block: Body,
        catch_blocks: Vec<CatchClause>,
        finally_block: Option<Body>,
    },
}

/// `catch (IOException | SQLException e) { … }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatchClause {
    /// Alternatives of a multi-catch, compared as a set
    pub exception_types: Vec<String>,
    pub variable: String,
    pub body: Body,
}

impl AbstractBlock {
    /// The controlling condition, when the block has one as a statement
    pub fn condition(&self) -> Option<&Statement> {
        match self {
            AbstractBlock::If { condition, .. }
            | AbstractBlock::While { condition, .. }
            | AbstractBlock::DoWhile { condition, .. } => Some(condition),
            AbstractBlock::For { condition, .. } => match condition.as_ref() {
                Expression::Statement(statement) => Some(statement),
                _ => None,
            },
            AbstractBlock::TryCatchFinally { .. } => None,
        }
    }

    /// Every statement list owned by the block, in source order
    pub fn bodies(&self) -> Vec<&[Expression]> {
        match self {
            AbstractBlock::If {
                then_body,
                else_body,
                ..
            } => vec![then_body.as_slice(), else_body.as_slice()],
            AbstractBlock::While { body, .. }
            | AbstractBlock::DoWhile { body, .. }
            | AbstractBlock::For { body, .. } => vec![body.as_slice()],
            AbstractBlock::TryCatchFinally {
                try_block,
                catch_blocks,
                finally_block,
                ..
            } => {
                let mut bodies = vec![try_block.as_slice()];
                bodies.extend(catch_blocks.iter().map(|clause| clause.body.as_slice()));
                bodies.extend(finally_block.as_deref());
                bodies
            }
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            AbstractBlock::If { .. } => "if",
            AbstractBlock::While { .. } => "while",
            AbstractBlock::DoWhile { .. } => "do",
            AbstractBlock::For { .. } => "for",
            AbstractBlock::TryCatchFinally { .. } => "try",
        }
    }
}

impl AstNode for AbstractBlock {
    fn node_type(&self) -> &'static str {
        match self {
            AbstractBlock::If { .. } => "If",
            AbstractBlock::While { .. } => "While",
            AbstractBlock::DoWhile { .. } => "DoWhile",
            AbstractBlock::For { .. } => "For",
            AbstractBlock::TryCatchFinally { .. } => "TryCatchFinally",
        }
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

impl AstNode for CatchClause {
    fn node_type(&self) -> &'static str {
        "CatchClause"
    }

    fn display_label(&self) -> String {
        format!(
            "catch ({} {})",
            self.exception_types.join(" | "),
            self.variable
        )
    }
}

/// Header line of the block, without its bodies
impl fmt::Display for AbstractBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbstractBlock::If { condition, .. } => write!(f, "if ({})", condition),
            AbstractBlock::While { condition, .. } => write!(f, "while ({})", condition),
            AbstractBlock::DoWhile { condition, .. } => write!(f, "do … while ({})", condition),
            AbstractBlock::For {
                init,
                condition,
                iteration,
                ..
            } => write!(
                f,
                "for ({}; {}; {})",
                init.clause_text(),
                condition.clause_text(),
                iteration.clause_text()
            ),
            AbstractBlock::TryCatchFinally { resources, .. } if resources.is_empty() => {
                write!(f, "try")
            }
            AbstractBlock::TryCatchFinally { resources, .. } => {
                let resources: Vec<String> = resources.iter().map(|r| r.to_string()).collect();
                write!(f, "try ({})", resources.join("; "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codesim::ast::PrimitiveValue;

    fn flag() -> Statement {
        Statement::variable("flag")
    }

    fn call(name: &str) -> Expression {
        Expression::Statement(Statement::variable(name))
    }

    #[test]
    fn test_if_bodies_include_empty_else() {
        let block = AbstractBlock::If {
            condition: flag(),
            then_body: vec![call("a")],
            else_body: vec![],
        };
        let bodies = block.bodies();
        assert_eq!(bodies.len(), 2);
        assert!(bodies[1].is_empty());
        assert_eq!(block.condition(), Some(&flag()));
    }

    #[test]
    fn test_try_bodies_in_source_order() {
        let block = AbstractBlock::TryCatchFinally {
            resources: vec![],
            try_block: vec![call("a")],
            catch_blocks: vec![CatchClause {
                exception_types: vec!["IOException".into()],
                variable: "e".into(),
                body: vec![call("b")],
            }],
            finally_block: Some(vec![call("c")]),
        };
        let bodies = block.bodies();
        assert_eq!(bodies, vec![&[call("a")][..], &[call("b")][..], &[call("c")][..]]);
        assert_eq!(block.condition(), None);
        assert_eq!(block.to_string(), "try");
    }

    #[test]
    fn test_for_header() {
        let block = AbstractBlock::For {
            init: Box::new(Expression::Declaration(
                VariableDeclaration::new("int", "i").with_initializer(
                    PrimitiveValue::Integer {
                        value: 0,
                        is_long: false,
                    }
                    .into(),
                ),
            )),
            condition: Box::new(Expression::Empty),
            iteration: Box::new(Expression::Empty),
            body: vec![],
        };
        assert_eq!(block.to_string(), "for (int i = 0; ; )");
        assert_eq!(block.condition(), None);
        assert_eq!(block.keyword(), "for");
    }
}
