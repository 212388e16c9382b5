//! Statements: operators, literals, variable references and parenthesised lists

use serde::Serialize;
use std::fmt;

use super::super::traits::AstNode;
use super::primitive::PrimitiveValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    Operator(Operator),
    Primitive(PrimitiveValue),
    VariableReference(VariableReference),
    ParameterPassing(ParameterPassing),
}

impl Statement {
    /// Whether this statement may appear on the left of `=` or after `++`.
    pub fn is_assignable(&self) -> bool {
        match self {
            Statement::VariableReference(_) => true,
            Statement::Operator(_) | Statement::Primitive(_) | Statement::ParameterPassing(_) => {
                false
            }
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Statement::VariableReference(VariableReference { name: name.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Operator {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnarySymbol {
    Not,
    PreIncrement,
}

impl UnarySymbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnarySymbol::Not => "!",
            UnarySymbol::PreIncrement => "++",
        }
    }

    /// Operand shape check: `++` needs something it can store into
    pub fn accepts(&self, operand: &Statement) -> bool {
        match self {
            UnarySymbol::Not => true,
            UnarySymbol::PreIncrement => operand.is_assignable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryOperator {
    pub symbol: UnarySymbol,
    pub operand: Box<Statement>,
}

impl UnaryOperator {
    /// Build the operator, or `None` when the operand has the wrong shape
    pub fn new(symbol: UnarySymbol, operand: Statement) -> Option<Self> {
        symbol.accepts(&operand).then(|| Self {
            symbol,
            operand: Box::new(operand),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinarySymbol {
    Add,
    Subtract,
    Multiply,
    Divide,
    Assign,
    Equals,
    Different,
    And,
    Or,
}

impl BinarySymbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinarySymbol::Add => "+",
            BinarySymbol::Subtract => "-",
            BinarySymbol::Multiply => "*",
            BinarySymbol::Divide => "/",
            BinarySymbol::Assign => "=",
            BinarySymbol::Equals => "==",
            BinarySymbol::Different => "!=",
            BinarySymbol::And => "&&",
            BinarySymbol::Or => "||",
        }
    }

    /// Operand shape check: only assignment constrains its left-hand side
    pub fn accepts(&self, lhs: &Statement) -> bool {
        match self {
            BinarySymbol::Assign => lhs.is_assignable(),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOperator {
    pub symbol: BinarySymbol,
    pub lhs: Box<Statement>,
    pub rhs: Box<Statement>,
}

impl BinaryOperator {
    /// Build the operator, or `None` when the left operand has the wrong shape
    pub fn new(symbol: BinarySymbol, lhs: Statement, rhs: Statement) -> Option<Self> {
        symbol.accepts(&lhs).then(|| Self {
            symbol,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }
}

/// A (possibly dotted) variable name such as `count` or `this.count`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableReference {
    pub name: String,
}

/// A parenthesised, comma-separated list of statements: `(a, b + 1)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterPassing {
    pub parameters: Vec<Statement>,
}

impl AstNode for Statement {
    fn node_type(&self) -> &'static str {
        match self {
            Statement::Operator(operator) => operator.node_type(),
            Statement::Primitive(value) => value.node_type(),
            Statement::VariableReference(_) => "VariableReference",
            Statement::ParameterPassing(_) => "ParameterPassing",
        }
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

impl AstNode for Operator {
    fn node_type(&self) -> &'static str {
        match self {
            Operator::Unary(unary) => match unary.symbol {
                UnarySymbol::Not => "Not",
                UnarySymbol::PreIncrement => "PreIncrement",
            },
            Operator::Binary(binary) => match binary.symbol {
                BinarySymbol::Add => "Add",
                BinarySymbol::Subtract => "Subtract",
                BinarySymbol::Multiply => "Multiply",
                BinarySymbol::Divide => "Divide",
                BinarySymbol::Assign => "Assign",
                BinarySymbol::Equals => "Equals",
                BinarySymbol::Different => "Different",
                BinarySymbol::And => "And",
                BinarySymbol::Or => "Or",
            },
        }
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Operator(operator) => write!(f, "{}", operator),
            Statement::Primitive(value) => write!(f, "{}", value),
            Statement::VariableReference(reference) => write!(f, "{}", reference.name),
            Statement::ParameterPassing(passing) => {
                let parameters: Vec<String> =
                    passing.parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "({})", parameters.join(", "))
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Unary(unary) => write!(f, "{}{}", unary.symbol.as_str(), unary.operand),
            Operator::Binary(binary) => {
                write!(f, "{} {} {}", binary.lhs, binary.symbol.as_str(), binary.rhs)
            }
        }
    }
}

impl From<Operator> for Statement {
    fn from(operator: Operator) -> Self {
        Statement::Operator(operator)
    }
}

impl From<UnaryOperator> for Statement {
    fn from(operator: UnaryOperator) -> Self {
        Statement::Operator(Operator::Unary(operator))
    }
}

impl From<BinaryOperator> for Statement {
    fn from(operator: BinaryOperator) -> Self {
        Statement::Operator(Operator::Binary(operator))
    }
}

impl From<PrimitiveValue> for Statement {
    fn from(value: PrimitiveValue) -> Self {
        Statement::Primitive(value)
    }
}
