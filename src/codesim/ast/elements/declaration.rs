//! Variable declarations

use serde::Serialize;
use std::fmt;

use super::super::traits::AstNode;
use super::statement::Statement;
use crate::codesim::lexer::Lexeme;

/// Declaration modifier such as `final` or `static`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Qualifier {
    Final,
    Static,
    Public,
    Protected,
    Private,
    Transient,
    Volatile,
}

impl Qualifier {
    pub fn from_lexeme(lexeme: Lexeme) -> Option<Self> {
        match lexeme {
            Lexeme::Final => Some(Qualifier::Final),
            Lexeme::Static => Some(Qualifier::Static),
            Lexeme::Public => Some(Qualifier::Public),
            Lexeme::Protected => Some(Qualifier::Protected),
            Lexeme::Private => Some(Qualifier::Private),
            Lexeme::Transient => Some(Qualifier::Transient),
            Lexeme::Volatile => Some(Qualifier::Volatile),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Qualifier::Final => "final",
            Qualifier::Static => "static",
            Qualifier::Public => "public",
            Qualifier::Protected => "protected",
            Qualifier::Private => "private",
            Qualifier::Transient => "transient",
            Qualifier::Volatile => "volatile",
        }
    }
}

/// `final int count = 0;`
///
/// Qualifiers keep their source order but are compared as a set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration {
    pub qualifiers: Vec<Qualifier>,
    pub type_name: String,
    pub name: String,
    pub initializer: Option<Statement>,
}

impl VariableDeclaration {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifiers: Vec::new(),
            type_name: type_name.into(),
            name: name.into(),
            initializer: None,
        }
    }

    pub fn with_qualifiers(mut self, qualifiers: Vec<Qualifier>) -> Self {
        self.qualifiers = qualifiers;
        self
    }

    pub fn with_initializer(mut self, initializer: Statement) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

impl AstNode for Qualifier {
    fn node_type(&self) -> &'static str {
        "Qualifier"
    }

    fn display_label(&self) -> String {
        self.as_str().to_string()
    }
}

impl AstNode for VariableDeclaration {
    fn node_type(&self) -> &'static str {
        "VariableDeclaration"
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for qualifier in &self.qualifiers {
            write!(f, "{} ", qualifier.as_str())?;
        }
        write!(f, "{} {}", self.type_name, self.name)?;
        if let Some(initializer) = &self.initializer {
            write!(f, " = {}", initializer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codesim::ast::PrimitiveValue;

    #[test]
    fn test_display() {
        let declaration = VariableDeclaration::new("int", "count")
            .with_qualifiers(vec![Qualifier::Final, Qualifier::Static])
            .with_initializer(
                PrimitiveValue::Integer {
                    value: 0,
                    is_long: false,
                }
                .into(),
            );
        assert_eq!(declaration.to_string(), "final static int count = 0");
        assert_eq!(VariableDeclaration::new("String", "s").to_string(), "String s");
    }

    #[test]
    fn test_qualifier_from_lexeme() {
        assert_eq!(Qualifier::from_lexeme(Lexeme::Final), Some(Qualifier::Final));
        assert_eq!(Qualifier::from_lexeme(Lexeme::Word), None);
    }
}
