//! Public API for the parser.

use tracing::debug;

use super::combinators::repeated;
use super::error::ParseFailure;
use crate::codesim::ast::{Expression, SyntaxTree};
use crate::codesim::cursor::{Cursor, Reach};
use crate::codesim::lexer::skip_trivia;

/// Parse a whole source text.
///
/// Either every byte of `source` belongs to the returned tree (or to trivia
/// around it), or the parse fails; there is no partial result. A failure points
/// at the furthest text any production got to.
pub fn parse(source: &str) -> Result<SyntaxTree, ParseFailure> {
    let reach = Reach::default();
    let mut cursor = Cursor::with_reach(source, &reach);
    skip_trivia(&mut cursor);
    cursor.mark_reached();
    let expressions = repeated(&mut cursor, Expression::build);

    if !cursor.is_at_end() {
        let failure = ParseFailure::at(&cursor.furthest());
        debug!(%failure, parsed = expressions.len(), "parse stopped before end of input");
        return Err(failure);
    }

    debug!(expressions = expressions.len(), "parsed source");
    Ok(SyntaxTree::new(expressions))
}
