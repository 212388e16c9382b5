//! Transactional cursor over source text
//!
//! A [`Cursor`] is a small `Copy` value: the source slice plus the current byte
//! offset and line/column. Speculative parsing works on forks of it:
//!
//! ```text
//! let mut branch = cursor.fork();     // copy, no side effect
//! branch.advance(3);                  // only the branch moves
//! let location = branch.commit(cursor); // the caller now sees the advance
//! ```
//!
//! A branch that is dropped without being committed leaves every ancestor
//! exactly where it was. Because a fork is a plain copy there is no shared cell
//! that a failed alternative could have mutated.
//!
//! The one exception is [`Reach`]: a cursor created with [`Cursor::with_reach`]
//! reports how far any of its branches got, committed or not. It only ever
//! grows and is read once parsing is over, to say where the input stopped
//! making sense; it never changes what a production returns.

use std::cell::Cell;

use super::location::{Location, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    position: Position,
    reach: Option<&'a Reach>,
}

/// Furthest point any branch of a cursor has accepted text up to
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reach {
    furthest: Cell<(usize, Position)>,
}

impl Reach {
    pub fn offset(&self) -> usize {
        self.furthest.get().0
    }

    pub fn position(&self) -> Position {
        self.furthest.get().1
    }

    fn record(&self, offset: usize, position: Position) {
        if offset > self.offset() {
            self.furthest.set((offset, position));
        }
    }
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::default(),
            reach: None,
        }
    }

    /// Create a cursor whose branches all report to `reach`
    pub fn with_reach(source: &'a str, reach: &'a Reach) -> Self {
        Self {
            reach: Some(reach),
            ..Self::new(source)
        }
    }

    /// Record the current position as accepted text.
    ///
    /// Token matchers call this once they have consumed a token, so that
    /// `reach` ends up just past the last token any alternative accepted.
    pub fn mark_reached(&self) {
        if let Some(reach) = self.reach {
            reach.record(self.offset, self.position);
        }
    }

    /// A detached cursor at the furthest point reached, or here if that is further
    pub fn furthest(&self) -> Cursor<'a> {
        let mut furthest = Self::new(self.source);
        match self.reach {
            Some(reach) if reach.offset() > self.offset => {
                furthest.offset = reach.offset();
                furthest.position = reach.position();
            }
            _ => {
                furthest.offset = self.offset;
                furthest.position = self.position;
            }
        }
        furthest
    }

    /// Start a speculative branch at the current position
    pub fn fork(&self) -> Cursor<'a> {
        *self
    }

    /// Text that has not been consumed yet
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Move this cursor forward by `n` bytes.
    ///
    /// The advance is clamped to the end of the input and rounded up to the
    /// next character boundary.
    pub fn advance(&mut self, n: usize) {
        let remaining = self.remaining();
        let mut n = n.min(remaining.len());
        while !remaining.is_char_boundary(n) {
            n += 1;
        }

        for ch in remaining[..n].chars() {
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 0;
            } else {
                self.position.column += ch.len_utf8();
            }
        }
        self.offset += n;
    }

    /// Publish this branch's progress to `parent` and return the consumed location.
    ///
    /// `parent` must be the cursor this branch was forked from (directly or
    /// through nested forks that were themselves committed into it).
    pub fn commit(self, parent: &mut Cursor<'a>) -> Location {
        debug_assert!(
            std::ptr::eq(self.source, parent.source) && self.offset >= parent.offset,
            "a branch can only be committed into the cursor it was forked from"
        );
        let location = Location::new(parent.offset..self.offset, parent.position, self.position);
        *parent = self;
        location
    }
}
