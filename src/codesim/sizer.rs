//! Structural weight of syntax nodes
//!
//! The weight of a subtree is how much structure would be lost if it were left
//! entirely unmatched, and is the denominator of every similarity score.
//!
//! - literals, variable references and `;` weigh 1
//! - operators add 1 for the symbol; a parenthesised list adds 1 for the parentheses
//! - a declaration weighs one per qualifier, 1 for its name, plus its initializer
//! - a block adds 1 for its keyword to the weight of all its parts
//! - a list weighs the sum of its elements
//!
//! Every node weighs at least 1. Only an empty list (an empty body, or an empty
//! source file) weighs 0.

use crate::codesim::ast::{
    AbstractBlock, CatchClause, Expression, Operator, ParameterPassing, PrimitiveValue, Qualifier,
    Statement, SyntaxTree, VariableDeclaration, VariableReference,
};

pub trait Complexity {
    fn size(&self) -> usize;
}

/// Weight of one expression
pub fn size(expression: &Expression) -> usize {
    expression.size()
}

impl<T: Complexity> Complexity for [T] {
    fn size(&self) -> usize {
        self.iter().map(Complexity::size).sum()
    }
}

impl<T: Complexity> Complexity for Vec<T> {
    fn size(&self) -> usize {
        self.as_slice().size()
    }
}

impl<T: Complexity> Complexity for Option<T> {
    fn size(&self) -> usize {
        self.as_ref().map_or(0, Complexity::size)
    }
}

impl<T: Complexity + ?Sized> Complexity for Box<T> {
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<T: Complexity + ?Sized> Complexity for &T {
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl Complexity for String {
    fn size(&self) -> usize {
        1
    }
}

impl Complexity for Qualifier {
    fn size(&self) -> usize {
        1
    }
}

impl Complexity for PrimitiveValue {
    fn size(&self) -> usize {
        1
    }
}

impl Complexity for VariableReference {
    fn size(&self) -> usize {
        1
    }
}

impl Complexity for ParameterPassing {
    fn size(&self) -> usize {
        1 + self.parameters.size()
    }
}

impl Complexity for Operator {
    fn size(&self) -> usize {
        match self {
            Operator::Unary(unary) => 1 + unary.operand.size(),
            Operator::Binary(binary) => 1 + binary.lhs.size() + binary.rhs.size(),
        }
    }
}

impl Complexity for Statement {
    fn size(&self) -> usize {
        match self {
            Statement::Operator(operator) => operator.size(),
            Statement::Primitive(value) => value.size(),
            Statement::VariableReference(reference) => reference.size(),
            Statement::ParameterPassing(passing) => passing.size(),
        }
    }
}

impl Complexity for VariableDeclaration {
    fn size(&self) -> usize {
        self.qualifiers.size() + 1 + self.initializer.size()
    }
}

impl Complexity for CatchClause {
    fn size(&self) -> usize {
        self.exception_types.size() + 1 + self.body.size()
    }
}

impl Complexity for AbstractBlock {
    fn size(&self) -> usize {
        let parts = match self {
            AbstractBlock::If {
                condition,
                then_body,
                else_body,
            } => condition.size() + then_body.size() + else_body.size(),
            AbstractBlock::While { condition, body } | AbstractBlock::DoWhile { condition, body } => {
                condition.size() + body.size()
            }
            AbstractBlock::For {
                init,
                condition,
                iteration,
                body,
            } => init.size() + condition.size() + iteration.size() + body.size(),
            AbstractBlock::TryCatchFinally {
                resources,
                try_block,
                catch_blocks,
                finally_block,
            } => {
                resources.size() + try_block.size() + catch_blocks.size() + finally_block.size()
            }
        };
        1 + parts
    }
}

impl Complexity for Expression {
    fn size(&self) -> usize {
        match self {
            Expression::Empty => 1,
            Expression::Declaration(declaration) => declaration.size(),
            Expression::Block(block) => block.size(),
            Expression::Statement(statement) => statement.size(),
        }
    }
}

impl Complexity for SyntaxTree {
    fn size(&self) -> usize {
        self.expressions.size()
    }
}
