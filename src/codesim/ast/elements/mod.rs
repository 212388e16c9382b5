//! Syntax node types

pub mod block;
pub mod declaration;
pub mod expression;
pub mod primitive;
pub mod statement;

pub use block::{AbstractBlock, CatchClause};
pub use declaration::{Qualifier, VariableDeclaration};
pub use expression::{Body, Expression, SyntaxTree};
pub use primitive::PrimitiveValue;
pub use statement::{
    BinaryOperator, BinarySymbol, Operator, ParameterPassing, Statement, UnaryOperator,
    UnarySymbol, VariableReference,
};
