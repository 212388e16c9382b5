//! Position and location tracking for source code locations
//!
//! ## Types
//!
//! - [`Position`] - A line:column position in source code (both 0-based, column in bytes)
//! - [`Location`] - A committed source range with byte span and start/end positions
//!
//! Locations are only ever produced by [`Cursor::commit`](super::cursor::Cursor::commit),
//! so every location in a token or a failure report covers text that was actually consumed.

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

/// Represents a position in source code (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Represents a location in source code (start and end positions)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(
            ByteRange { start: 0, end: 0 },
            Position::default(),
            Position::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert_eq!(Position::new(3, 1).to_string(), "3:1");
    }

    #[test]
    fn test_location_display() {
        let location = Location::new(4..20, Position::new(1, 2), Position::new(3, 5));
        assert_eq!(location.to_string(), "1:2..3:5");
        assert_eq!(Location::default().to_string(), "0:0..0:0");
    }
}
