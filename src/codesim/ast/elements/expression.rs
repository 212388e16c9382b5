//! Expressions, bodies and whole syntax trees

use serde::Serialize;
use std::fmt;

use super::super::traits::AstNode;
use super::block::AbstractBlock;
use super::declaration::VariableDeclaration;
use super::statement::Statement;

/// Anything that can stand in a statement list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// A lone `;`, or a left-out `for` clause
    Empty,
    Declaration(VariableDeclaration),
    Block(AbstractBlock),
    Statement(Statement),
}

/// Ordered statement list of a block
pub type Body = Vec<Expression>;

impl Expression {
    /// Text of a `for` header clause (no trailing `;`)
    pub fn clause_text(&self) -> String {
        match self {
            Expression::Empty => String::new(),
            Expression::Declaration(declaration) => declaration.to_string(),
            Expression::Block(block) => block.to_string(),
            Expression::Statement(statement) => statement.to_string(),
        }
    }
}

impl AstNode for Expression {
    fn node_type(&self) -> &'static str {
        match self {
            Expression::Empty => "EmptyExpression",
            Expression::Declaration(declaration) => declaration.node_type(),
            Expression::Block(block) => block.node_type(),
            Expression::Statement(statement) => statement.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Expression::Empty => ";".to_string(),
            Expression::Declaration(declaration) => declaration.display_label(),
            Expression::Block(block) => block.display_label(),
            Expression::Statement(statement) => statement.display_label(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Empty => write!(f, ";"),
            Expression::Declaration(declaration) => write!(f, "{};", declaration),
            Expression::Block(block) => write!(f, "{}", block),
            Expression::Statement(statement) => write!(f, "{};", statement),
        }
    }
}

impl From<Statement> for Expression {
    fn from(statement: Statement) -> Self {
        Expression::Statement(statement)
    }
}

impl From<VariableDeclaration> for Expression {
    fn from(declaration: VariableDeclaration) -> Self {
        Expression::Declaration(declaration)
    }
}

impl From<AbstractBlock> for Expression {
    fn from(block: AbstractBlock) -> Self {
        Expression::Block(block)
    }
}

/// The parse result of one whole input
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyntaxTree {
    pub expressions: Vec<Expression>,
}

impl SyntaxTree {
    pub fn new(expressions: Vec<Expression>) -> Self {
        Self { expressions }
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl AstNode for SyntaxTree {
    fn node_type(&self) -> &'static str {
        "SyntaxTree"
    }

    fn display_label(&self) -> String {
        format!("{} top-level expressions", self.expressions.len())
    }
}
