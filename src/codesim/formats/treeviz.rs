//! Treeviz formatter for syntax trees
//!
//! One line per node, nesting drawn with box connectors:
//!
//! `<prefix><connector> <node type>: <label>` (label truncated to 30 characters)
//!
//! ```text
//! ├─ VariableDeclaration: int x = 0
//! │ └─ IntegerValue: 0
//! └─ While: while (x != 10)
//!   ├─ Different: x != 10
//!   │ ├─ VariableReference: x
//!   │ └─ IntegerValue: 10
//!   └─ Body: body
//!     └─ Assign: x = x + 1
//! ```
//!
//! Statement lists owned by a block appear under a `Body` node named after the
//! part of the block they belong to (`then`, `else`, `try`, `finally`, ...).

use super::registry::{FormatError, Formatter};
use crate::codesim::ast::{
    AbstractBlock, AstNode, CatchClause, Expression, Operator, Statement, SyntaxTree,
    VariableDeclaration,
};

const LABEL_WIDTH: usize = 30;

/// Anything that gets a line of its own in the listing
enum Node<'a> {
    Expression(&'a Expression),
    Declaration(&'a VariableDeclaration),
    Statement(&'a Statement),
    Catch(&'a CatchClause),
    Body(&'static str, &'a [Expression]),
}

impl<'a> Node<'a> {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Expression(expression) => expression.node_type(),
            Node::Declaration(declaration) => declaration.node_type(),
            Node::Statement(statement) => statement.node_type(),
            Node::Catch(clause) => clause.node_type(),
            Node::Body(..) => "Body",
        }
    }

    fn label(&self) -> String {
        match self {
            Node::Expression(expression) => expression.display_label(),
            Node::Declaration(declaration) => declaration.display_label(),
            Node::Statement(statement) => statement.display_label(),
            Node::Catch(clause) => clause.display_label(),
            Node::Body(name, _) => name.to_string(),
        }
    }

    fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Expression(expression) => match expression {
                Expression::Empty => Vec::new(),
                Expression::Declaration(declaration) => Node::Declaration(declaration).children(),
                Expression::Statement(statement) => Node::Statement(statement).children(),
                Expression::Block(block) => block_children(block),
            },
            Node::Declaration(declaration) => {
                declaration.initializer.iter().map(Node::Statement).collect()
            }
            Node::Statement(statement) => match statement {
                Statement::Operator(Operator::Unary(unary)) => {
                    vec![Node::Statement(&unary.operand)]
                }
                Statement::Operator(Operator::Binary(binary)) => {
                    vec![Node::Statement(&binary.lhs), Node::Statement(&binary.rhs)]
                }
                Statement::ParameterPassing(passing) => {
                    passing.parameters.iter().map(Node::Statement).collect()
                }
                Statement::Primitive(_) | Statement::VariableReference(_) => Vec::new(),
            },
            Node::Catch(clause) => clause.body.iter().map(Node::Expression).collect(),
            Node::Body(_, body) => body.iter().map(Node::Expression).collect(),
        }
    }
}

fn block_children(block: &AbstractBlock) -> Vec<Node<'_>> {
    match block {
        AbstractBlock::If {
            condition,
            then_body,
            else_body,
        } => {
            let mut children = vec![Node::Statement(condition), Node::Body("then", then_body)];
            if !else_body.is_empty() {
                children.push(Node::Body("else", else_body));
            }
            children
        }
        AbstractBlock::While { condition, body } | AbstractBlock::DoWhile { condition, body } => {
            vec![Node::Statement(condition), Node::Body("body", body)]
        }
        AbstractBlock::For {
            init,
            condition,
            iteration,
            body,
        } => vec![
            Node::Expression(init),
            Node::Expression(condition),
            Node::Expression(iteration),
            Node::Body("body", body),
        ],
        AbstractBlock::TryCatchFinally {
            resources,
            try_block,
            catch_blocks,
            finally_block,
        } => {
            let mut children: Vec<Node> = resources.iter().map(Node::Declaration).collect();
            children.push(Node::Body("try", try_block));
            children.extend(catch_blocks.iter().map(Node::Catch));
            if let Some(finally_block) = finally_block {
                children.push(Node::Body("finally", finally_block));
            }
            children
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(tree: &SyntaxTree) -> String {
    let mut result = String::new();
    let nodes: Vec<Node> = tree.expressions.iter().map(Node::Expression).collect();
    append_children(&mut result, &nodes, "");
    result
}

fn append_children(result: &mut String, nodes: &[Node], prefix: &str) {
    for (i, node) in nodes.iter().enumerate() {
        append_node(result, node, prefix, i == nodes.len() - 1);
    }
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        truncate(&node.label(), LABEL_WIDTH)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children(), &new_prefix);
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &SyntaxTree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &str {
        "Indented one-line-per-node listing"
    }
}
