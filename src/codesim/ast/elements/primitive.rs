//! Literal values

use serde::Serialize;
use std::fmt;

use super::super::traits::AstNode;

/// A literal written directly in the source.
///
/// String and char contents are kept exactly as written between the quotes,
/// escapes included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PrimitiveValue {
    String(String),
    Null,
    Integer { value: i64, is_long: bool },
    Double { value: f64, is_double: bool },
    Char(String),
    Boolean(bool),
}

impl AstNode for PrimitiveValue {
    fn node_type(&self) -> &'static str {
        match self {
            PrimitiveValue::String(_) => "StringValue",
            PrimitiveValue::Null => "NullValue",
            PrimitiveValue::Integer { .. } => "IntegerValue",
            PrimitiveValue::Double { .. } => "DoubleValue",
            PrimitiveValue::Char(_) => "CharValue",
            PrimitiveValue::Boolean(_) => "BooleanValue",
        }
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::String(text) => write!(f, "\"{}\"", text),
            PrimitiveValue::Null => write!(f, "null"),
            PrimitiveValue::Integer { value, is_long } => {
                write!(f, "{}{}", value, if *is_long { "L" } else { "" })
            }
            PrimitiveValue::Double { value, is_double } => {
                write!(f, "{:?}{}", value, if *is_double { "" } else { "f" })
            }
            PrimitiveValue::Char(text) => write!(f, "'{}'", text),
            PrimitiveValue::Boolean(value) => write!(f, "{}", value),
        }
    }
}
