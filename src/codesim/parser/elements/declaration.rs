//! Variable declaration parsing
//!
//! `qualifier* type name [= statement] ;`
//!
//! Type names are kept as text: `java.util.Map<String, List<Integer>>[]` is
//! one opaque identifier as far as comparison is concerned.

use crate::codesim::ast::{Qualifier, Statement, VariableDeclaration};
use crate::codesim::cursor::Cursor;
use crate::codesim::lexer::{Lexeme, Trivia};
use crate::codesim::parser::combinators::{
    close_bracket, close_chevron, delimited, dotted_name, lexeme, matching, open_bracket,
    open_chevron, repeated, semicolon, separated, word,
};

impl VariableDeclaration {
    /// Build a full declaration, including its terminating `;`
    pub fn build(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut branch = cursor.fork();
        let declaration = Self::build_unterminated(&mut branch)?;
        semicolon(&mut branch)?;
        branch.commit(cursor);
        Some(declaration)
    }

    /// Build a declaration without its `;`, as found in try-with-resources
    pub(crate) fn build_unterminated(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut branch = cursor.fork();
        let qualifiers = repeated(&mut branch, qualifier);
        let type_name = type_name(&mut branch)?;
        let name = word(&mut branch)?.to_string();
        let initializer = initializer(&mut branch);
        branch.commit(cursor);

        Some(VariableDeclaration {
            qualifiers,
            type_name,
            name,
            initializer,
        })
    }
}

fn qualifier(cursor: &mut Cursor<'_>) -> Option<Qualifier> {
    matching(cursor, Trivia::Skip, |token| {
        Qualifier::from_lexeme(token.lexeme).is_some()
    })
    .and_then(|token| Qualifier::from_lexeme(token.lexeme))
}

fn initializer(cursor: &mut Cursor<'_>) -> Option<Statement> {
    let mut branch = cursor.fork();
    lexeme(&mut branch, Lexeme::Assign)?;
    let value = Statement::build(&mut branch)?;
    branch.commit(cursor);
    Some(value)
}

/// `name [<type, ...>] ([])*`, rendered back to normalized text
pub(crate) fn type_name(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut branch = cursor.fork();
    let mut name = dotted_name(&mut branch)?;

    let arguments = delimited(&mut branch, open_chevron, close_chevron, |inner| {
        separated(inner, Lexeme::Comma, type_name)
    });
    if let Some(arguments) = arguments {
        name.push('<');
        name.push_str(&arguments.join(", "));
        name.push('>');
    }

    while delimited(&mut branch, open_bracket, close_bracket, |_| Some(())).is_some() {
        name.push_str("[]");
    }

    branch.commit(cursor);
    Some(name)
}
