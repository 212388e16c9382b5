//! Statement parsing
//!
//! Precedence, loosest first:
//!
//! 1. assignment `target = statement` (right associative)
//! 2. binary operators: `||`, `&&`, `== !=`, `+ -`, `* /`
//! 3. unary `!` and `++`
//! 4. parenthesised list, literal, variable reference
//!
//! Binary levels are left associative. The left operand is parsed once; an
//! assignment is only attempted when it came out as a bare variable reference,
//! so nested parentheses cost linear time.

use crate::codesim::ast::{
    BinaryOperator, BinarySymbol, ParameterPassing, PrimitiveValue, Statement, UnaryOperator,
    UnarySymbol, VariableReference,
};
use crate::codesim::cursor::Cursor;
use crate::codesim::lexer::Lexeme;
use crate::codesim::parser::combinators::{
    close_paren, delimited, dotted_name, lexeme, open_paren, separated,
};

impl Statement {
    pub fn build(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut branch = cursor.fork();
        let lhs = disjunction(&mut branch)?;
        let statement: Statement = match assigned_value(&mut branch, &lhs) {
            Some(value) => BinaryOperator::new(BinarySymbol::Assign, lhs, value)?.into(),
            None => lhs,
        };
        branch.commit(cursor);
        Some(statement)
    }
}

impl ParameterPassing {
    /// `( [statement (, statement)*] )`
    pub fn build(cursor: &mut Cursor<'_>) -> Option<Self> {
        delimited(cursor, open_paren, close_paren, |inner| {
            Some(separated(inner, Lexeme::Comma, Statement::build).unwrap_or_default())
        })
        .map(|parameters| ParameterPassing { parameters })
    }
}

impl VariableReference {
    pub fn build(cursor: &mut Cursor<'_>) -> Option<Self> {
        dotted_name(cursor).map(|name| VariableReference { name })
    }
}

/// `= statement` following `target`, when `target` can be stored into
fn assigned_value(cursor: &mut Cursor<'_>, target: &Statement) -> Option<Statement> {
    if !BinarySymbol::Assign.accepts(target) {
        return None;
    }
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::Assign)?;
    let value = Statement::build(&mut branch)?;
    branch.commit(cursor);
    Some(value)
}

fn disjunction(cursor: &mut Cursor<'_>) -> Option<Statement> {
    binary_level(cursor, conjunction, &[(Lexeme::OrOr, BinarySymbol::Or)])
}

fn conjunction(cursor: &mut Cursor<'_>) -> Option<Statement> {
    binary_level(cursor, equality, &[(Lexeme::AndAnd, BinarySymbol::And)])
}

fn equality(cursor: &mut Cursor<'_>) -> Option<Statement> {
    binary_level(
        cursor,
        additive,
        &[
            (Lexeme::EqualEqual, BinarySymbol::Equals),
            (Lexeme::NotEqual, BinarySymbol::Different),
        ],
    )
}

fn additive(cursor: &mut Cursor<'_>) -> Option<Statement> {
    binary_level(
        cursor,
        multiplicative,
        &[
            (Lexeme::Plus, BinarySymbol::Add),
            (Lexeme::Minus, BinarySymbol::Subtract),
        ],
    )
}

fn multiplicative(cursor: &mut Cursor<'_>) -> Option<Statement> {
    binary_level(
        cursor,
        unary,
        &[
            (Lexeme::Star, BinarySymbol::Multiply),
            (Lexeme::Slash, BinarySymbol::Divide),
        ],
    )
}

/// `operand (op operand)*`, folded to the left
fn binary_level<'a>(
    cursor: &mut Cursor<'a>,
    operand: fn(&mut Cursor<'a>) -> Option<Statement>,
    operators: &[(Lexeme, BinarySymbol)],
) -> Option<Statement> {
    let mut branch = cursor.fork();
    let mut lhs = operand(&mut branch)?;

    loop {
        let step = operators.iter().find_map(|&(token, symbol)| {
            let mut step = branch.fork();
            lexeme(&mut step, token)?;
            let rhs = operand(&mut step)?;
            Some((symbol, rhs, step))
        });
        let Some((symbol, rhs, step)) = step else {
            break;
        };
        step.commit(&mut branch);
        lhs = BinaryOperator {
            symbol,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
        .into();
    }

    branch.commit(cursor);
    Some(lhs)
}

fn unary(cursor: &mut Cursor<'_>) -> Option<Statement> {
    prefixed(cursor, Lexeme::Bang, UnarySymbol::Not)
        .or_else(|| prefixed(cursor, Lexeme::Increment, UnarySymbol::PreIncrement))
        .or_else(|| primary(cursor))
}

fn prefixed(cursor: &mut Cursor<'_>, token: Lexeme, symbol: UnarySymbol) -> Option<Statement> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, token)?;
    let operand = unary(&mut branch)?;
    let operator = UnaryOperator::new(symbol, operand)?;
    branch.commit(cursor);
    Some(operator.into())
}

fn primary(cursor: &mut Cursor<'_>) -> Option<Statement> {
    ParameterPassing::build(cursor)
        .map(Statement::ParameterPassing)
        .or_else(|| PrimitiveValue::build(cursor).map(Statement::Primitive))
        .or_else(|| VariableReference::build(cursor).map(Statement::VariableReference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codesim::ast::{AstNode, Operator};

    fn build(source: &str) -> (Option<String>, &str) {
        let mut cursor = Cursor::new(source);
        let statement = Statement::build(&mut cursor);
        (statement.map(|s| s.to_string()), cursor.remaining())
    }

    fn tree(source: &str) -> Statement {
        Statement::build(&mut Cursor::new(source)).expect("a statement")
    }

    #[test]
    fn test_precedence() {
        let statement = tree("a + b * c");
        let Statement::Operator(Operator::Binary(sum)) = &statement else {
            panic!("expected a binary operator, got {:?}", statement);
        };
        assert_eq!(sum.symbol, BinarySymbol::Add);
        assert_eq!(sum.rhs.to_string(), "b * c");
    }

    #[test]
    fn test_left_associative() {
        let statement = tree("a - b - c");
        let Statement::Operator(Operator::Binary(outer)) = &statement else {
            panic!("expected a binary operator, got {:?}", statement);
        };
        assert_eq!(outer.lhs.to_string(), "a - b");
        assert_eq!(outer.rhs.to_string(), "c");
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let statement = tree("a = b = 1");
        assert_eq!(statement.node_type(), "Assign");
        let Statement::Operator(Operator::Binary(outer)) = &statement else {
            panic!("expected an assignment");
        };
        assert_eq!(outer.rhs.to_string(), "b = 1");
    }

    #[test]
    fn test_logical_operators() {
        let statement = tree("!done && count != 0 || retry");
        assert_eq!(statement.node_type(), "Or");
        assert_eq!(statement.to_string(), "!done && count != 0 || retry");
    }

    #[test]
    fn test_invalid_operand_shapes() {
        // Nothing can be assigned to a literal or incremented
        assert_eq!(build("1 = 2"), (Some("1".to_string()), "= 2"));
        assert_eq!(build("++1"), (None, "++1"));
        assert_eq!(build("++i;"), (Some("++i".to_string()), ";"));
    }

    #[test]
    fn test_parameter_passing() {
        assert_eq!(build("(a, b + 1) ;"), (Some("(a, b + 1)".to_string()), ";"));
        assert_eq!(build("()"), (Some("()".to_string()), ""));
        assert_eq!(build("(a, )"), (None, "(a, )"));
    }

    #[test]
    fn test_dangling_operator_is_left_alone() {
        assert_eq!(build("a + ;"), (Some("a".to_string()), "+ ;"));
    }

    #[test]
    fn test_nested_parentheses_parse_in_linear_time() {
        let depth = 40;
        let source = format!("x = {}a{};", "(".repeat(depth), ")".repeat(depth));
        let (statement, rest) = build(&source);
        assert_eq!(statement, Some(source[..source.len() - 1].to_string()));
        assert_eq!(rest, ";");
    }

    #[test]
    fn test_operator_result_is_not_assignable() {
        assert_eq!(build("a + b = 1"), (Some("a + b".to_string()), "= 1"));
        assert_eq!(build("(a) = 1"), (Some("(a)".to_string()), "= 1"));
    }

    #[test]
    fn test_dotted_reference() {
        assert_eq!(build("this.count;"), (Some("this.count".to_string()), ";"));
    }
}
