//! AST definitions
//!
//! The syntax tree is a closed sum type. Every consumer (sizer, evaluator,
//! formatters) matches on it exhaustively, so adding a node variant fails to
//! compile until each of them handles it.
//!
//! ## Modules
//!
//! - `elements` - node type definitions
//! - `traits` - the [`AstNode`] interface used for labels in listings and diffs

pub mod elements;
pub mod traits;

pub use elements::{
    AbstractBlock, BinaryOperator, BinarySymbol, Body, CatchClause, Expression, Operator,
    ParameterPassing, PrimitiveValue, Qualifier, Statement, SyntaxTree, UnaryOperator,
    UnarySymbol, VariableDeclaration, VariableReference,
};
pub use traits::AstNode;
