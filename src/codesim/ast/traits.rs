//! AST traits - Common interfaces for uniform node access

/// Common interface for all AST nodes
pub trait AstNode {
    /// Name of the concrete variant, e.g. `If` or `Add`
    fn node_type(&self) -> &'static str;
    /// Short source-like rendering used in listings and diff rows
    fn display_label(&self) -> String;
}

/// Identifiers (exception types in a catch clause) are leaves of their own
impl AstNode for String {
    fn node_type(&self) -> &'static str {
        "Identifier"
    }

    fn display_label(&self) -> String {
        self.clone()
    }
}
