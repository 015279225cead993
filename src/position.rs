use crate::{error::PositionError, line_ty::Line};
use std::fmt;

/// A cursor offset within a line, counted in UTF-16 code units.
///
/// Offsets range over `0..=len`; `len` is the end-of-line sentinel with no
/// code unit to its right. A `Position` does not remember which line it
/// belongs to, so the bound is checked against the line it is used with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// Creates a position without checking it against any line.
    pub const fn new(offset: usize) -> Self {
        Position(offset)
    }

    /// Creates a position, returning an error if `offset` lies past the end
    /// of `line`.
    pub fn checked(offset: usize, line: &Line) -> Result<Self, PositionError> {
        if offset > line.len() {
            return Err(PositionError::PastEndOfLine {
                offset,
                len: line.len(),
            });
        }
        Ok(Position(offset))
    }

    /// Creates a position, clamping `offset` to the end of `line`.
    pub fn clamped(offset: usize, line: &Line) -> Self {
        Position(offset.min(line.len()))
    }

    /// Retrieves the offset, in code units.
    pub const fn offset(self) -> usize {
        self.0
    }

    /// Returns whether this is the start of a line.
    pub const fn is_line_start(self) -> bool {
        self.0 == 0
    }

    /// Returns whether this is at or past the end of `line`.
    pub const fn is_line_end(self, line: &Line) -> bool {
        self.0 >= line.len()
    }

    /// Moves one code unit to the left, stopping at the start of the line.
    #[inline]
    #[must_use]
    pub const fn step_left(self) -> Self {
        Position(self.0.saturating_sub(1))
    }

    /// Moves one code unit to the right, stopping at the end of `line`.
    #[inline]
    #[must_use]
    pub fn step_right(self, line: &Line) -> Self {
        Position(self.0.saturating_add(1).min(line.len()))
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> usize {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
