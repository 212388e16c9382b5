//! Node-by-node comparison
//!
//! Two nodes are compared field by field only when they are the same concrete
//! variant. Anything else is a hard mismatch, with one exception: control-flow
//! blocks of different kinds (an `if` against a `while`) are still compared,
//! through their conditions and bodies, and earn partial credit.
//!
//! Every match below lists the node variants explicitly instead of falling back
//! to `_`, so a new variant does not compile until it is handled here.

use super::matching::maximum_match;
use super::result::Similarity;
use super::sequence::{align, compare_with_gaps, ordered_eval, AlignStep};
use crate::codesim::ast::{
    AbstractBlock, AstNode, CatchClause, Expression, Operator, PrimitiveValue, Qualifier,
    Statement, VariableDeclaration,
};
use crate::codesim::sizer::Complexity;

pub trait Evaluate: Complexity + AstNode {
    fn eval(&self, other: &Self) -> Similarity;
}

/// Compare an optional field: a one-sided value is a gap
fn optional<T: Evaluate>(left: Option<&T>, right: Option<&T>) -> Option<Similarity> {
    match (left, right) {
        (Some(left), Some(right)) => Some(left.eval(right)),
        (Some(left), None) => Some(Similarity::removed(left)),
        (None, Some(right)) => Some(Similarity::inserted(right)),
        (None, None) => None,
    }
}

impl Evaluate for String {
    fn eval(&self, other: &Self) -> Similarity {
        Similarity::leaf(self.node_type(), self == other).between(self, other)
    }
}

impl Evaluate for Qualifier {
    fn eval(&self, other: &Self) -> Similarity {
        Similarity::leaf(self.node_type(), self == other).between(self, other)
    }
}

impl Evaluate for PrimitiveValue {
    fn eval(&self, other: &Self) -> Similarity {
        use PrimitiveValue::*;
        match (self, other) {
            (String(_), String(_))
            | (Null, Null)
            | (Integer { .. }, Integer { .. })
            | (Double { .. }, Double { .. })
            | (Char(_), Char(_))
            | (Boolean(_), Boolean(_)) => {
                Similarity::leaf(self.node_type(), self == other).between(self, other)
            }
            (String(_), _)
            | (Null, _)
            | (Integer { .. }, _)
            | (Double { .. }, _)
            | (Char(_), _)
            | (Boolean(_), _) => Similarity::mismatch(self, other),
        }
    }
}

impl Evaluate for Operator {
    fn eval(&self, other: &Self) -> Similarity {
        match (self, other) {
            (Operator::Unary(left), Operator::Unary(right)) if left.symbol == right.symbol => {
                Similarity::add(
                    self.node_type(),
                    vec![
                        Similarity::leaf("operator", true),
                        left.operand.eval(&right.operand),
                    ],
                )
                .between(self, other)
            }
            (Operator::Binary(left), Operator::Binary(right)) if left.symbol == right.symbol => {
                Similarity::add(
                    self.node_type(),
                    vec![
                        Similarity::leaf("operator", true),
                        left.lhs.eval(&right.lhs),
                        left.rhs.eval(&right.rhs),
                    ],
                )
                .between(self, other)
            }
            (Operator::Unary(_), _) | (Operator::Binary(_), _) => Similarity::mismatch(self, other),
        }
    }
}

impl Evaluate for Statement {
    fn eval(&self, other: &Self) -> Similarity {
        match (self, other) {
            (Statement::Operator(left), Statement::Operator(right)) => left.eval(right),
            (Statement::Primitive(left), Statement::Primitive(right)) => left.eval(right),
            (Statement::VariableReference(left), Statement::VariableReference(right)) => {
                Similarity::leaf(self.node_type(), left.name == right.name).between(self, other)
            }
            (Statement::ParameterPassing(left), Statement::ParameterPassing(right)) => {
                Similarity::add(
                    self.node_type(),
                    vec![
                        Similarity::leaf("parentheses", true),
                        ordered_eval("parameters", &left.parameters, &right.parameters),
                    ],
                )
                .between(self, other)
            }
            (Statement::Operator(_), _)
            | (Statement::Primitive(_), _)
            | (Statement::VariableReference(_), _)
            | (Statement::ParameterPassing(_), _) => Similarity::mismatch(self, other),
        }
    }
}

impl Evaluate for VariableDeclaration {
    fn eval(&self, other: &Self) -> Similarity {
        let mut children = vec![
            maximum_match("qualifiers", &self.qualifiers, &other.qualifiers),
            Similarity::leaf(
                "name",
                self.type_name == other.type_name && self.name == other.name,
            ),
        ];
        children.extend(optional(
            self.initializer.as_ref(),
            other.initializer.as_ref(),
        ));
        Similarity::add(self.node_type(), children).between(self, other)
    }
}

impl Evaluate for CatchClause {
    fn eval(&self, other: &Self) -> Similarity {
        Similarity::add(
            self.node_type(),
            vec![
                maximum_match("exception types", &self.exception_types, &other.exception_types),
                Similarity::leaf("variable", self.variable == other.variable),
                compare_with_gaps("catch", &self.body, &other.body),
            ],
        )
        .between(self, other)
    }
}

impl Evaluate for AbstractBlock {
    fn eval(&self, other: &Self) -> Similarity {
        use AbstractBlock::*;
        let fields = match (self, other) {
            (
                If {
                    condition: left_condition,
                    then_body: left_then,
                    else_body: left_else,
                },
                If {
                    condition: right_condition,
                    then_body: right_then,
                    else_body: right_else,
                },
            ) => vec![
                left_condition.eval(right_condition),
                compare_with_gaps("then", left_then, right_then),
                compare_with_gaps("else", left_else, right_else),
            ],
            (
                While {
                    condition: left_condition,
                    body: left_body,
                },
                While {
                    condition: right_condition,
                    body: right_body,
                },
            )
            | (
                DoWhile {
                    condition: left_condition,
                    body: left_body,
                },
                DoWhile {
                    condition: right_condition,
                    body: right_body,
                },
            ) => vec![
                left_condition.eval(right_condition),
                compare_with_gaps("body", left_body, right_body),
            ],
            (
                For {
                    init: left_init,
                    condition: left_condition,
                    iteration: left_iteration,
                    body: left_body,
                },
                For {
                    init: right_init,
                    condition: right_condition,
                    iteration: right_iteration,
                    body: right_body,
                },
            ) => vec![
                left_init.eval(right_init),
                left_condition.eval(right_condition),
                left_iteration.eval(right_iteration),
                compare_with_gaps("body", left_body, right_body),
            ],
            (
                TryCatchFinally {
                    resources: left_resources,
                    try_block: left_try,
                    catch_blocks: left_catches,
                    finally_block: left_finally,
                },
                TryCatchFinally {
                    resources: right_resources,
                    try_block: right_try,
                    catch_blocks: right_catches,
                    finally_block: right_finally,
                },
            ) => vec![
                ordered_eval("resources", left_resources, right_resources),
                compare_with_gaps("try", left_try, right_try),
                ordered_eval("catches", left_catches, right_catches),
                compare_with_gaps(
                    "finally",
                    left_finally.as_deref().unwrap_or(&[]),
                    right_finally.as_deref().unwrap_or(&[]),
                ),
            ],
            (If { .. }, _)
            | (While { .. }, _)
            | (DoWhile { .. }, _)
            | (For { .. }, _)
            | (TryCatchFinally { .. }, _) => return across_kinds(self, other),
        };

        let mut children = vec![Similarity::leaf(self.keyword(), true)];
        children.extend(fields);
        Similarity::add(self.node_type(), children).between(self, other)
    }
}

/// Blocks of different kinds: compare conditions and bodies, everything else
/// the two sides own is unmatched
fn across_kinds(left: &AbstractBlock, right: &AbstractBlock) -> Similarity {
    let keywords = format!("{} / {}", left.keyword(), right.keyword());
    let mut children = vec![Similarity::leaf(keywords, false)];
    let mut left_covered = 1;
    let mut right_covered = 1;

    if let (Some(left_condition), Some(right_condition)) = (left.condition(), right.condition()) {
        children.push(left_condition.eval(right_condition));
        left_covered += left_condition.size();
        right_covered += right_condition.size();
    }

    let left_bodies = left.bodies();
    let right_bodies = right.bodies();
    left_covered += left_bodies.iter().map(|body| body.size()).sum::<usize>();
    right_covered += right_bodies.iter().map(|body| body.size()).sum::<usize>();

    let nothing: &[Expression] = &[];
    let bodies = align(
        &left_bodies,
        &right_bodies,
        |a: &&[Expression], b: &&[Expression]| compare_with_gaps("body", *a, *b),
    )
    .into_iter()
    .map(|step| match step {
        AlignStep::Pair { similarity, .. } => similarity,
        AlignStep::Removed(index) => compare_with_gaps("body", left_bodies[index], nothing),
        AlignStep::Inserted(index) => compare_with_gaps("body", nothing, right_bodies[index]),
    })
    .collect();
    children.push(Similarity::add("bodies", bodies));

    let uncovered = left.size().saturating_sub(left_covered)
        + right.size().saturating_sub(right_covered);
    Similarity::add(left.node_type(), children)
        .with_unmatched(uncovered)
        .between(left, right)
}

impl Evaluate for Expression {
    fn eval(&self, other: &Self) -> Similarity {
        match (self, other) {
            (Expression::Empty, Expression::Empty) => {
                Similarity::leaf(self.node_type(), true).between(self, other)
            }
            (Expression::Declaration(left), Expression::Declaration(right)) => left.eval(right),
            (Expression::Block(left), Expression::Block(right)) => left.eval(right),
            (Expression::Statement(left), Expression::Statement(right)) => left.eval(right),
            (Expression::Empty, _)
            | (Expression::Declaration(_), _)
            | (Expression::Block(_), _)
            | (Expression::Statement(_), _) => Similarity::mismatch(self, other),
        }
    }
}
