use crate::{
    position::Position,
    scanner::{self, Direction},
};
use std::{char::DecodeUtf16, fmt, hash, iter::Copied, ops::Index, slice};

/// A read-only line of UTF-16 code units.
/// It is usually seen in its borrowed form, `&Line`.
///
/// Any sequence of code units is a valid `Line`, including ones holding
/// unpaired surrogates.
#[repr(transparent)]
pub struct Line([u16]);

impl Line {
    /// Views a slice of code units as a `Line`.
    pub fn new(units: &[u16]) -> &Line {
        // SAFETY: `Line` is a `repr(transparent)` wrapper around `[u16]`.
        unsafe { &*(units as *const [u16] as *const Line) }
    }

    /// Returns the length of the line, in code units.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the line holds no code units.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the code units of the line.
    pub const fn as_units(&self) -> &[u16] {
        &self.0
    }

    /// Returns the code unit right of `offset`, or `None` at and past the end
    /// of the line.
    #[inline]
    pub fn unit_at(&self, offset: usize) -> Option<u16> {
        self.0.get(offset).copied()
    }

    /// Returns the position of the end-of-line sentinel.
    pub const fn end(&self) -> Position {
        Position::new(self.len())
    }

    /// Returns an iterator over the code units of the line.
    pub fn units(&self) -> Units<'_> {
        Units { data: &self.0 }
    }

    /// Returns an iterator over the `char`s of the line.
    ///
    /// Unpaired surrogates decode as U+FFFD.
    pub fn chars(&self) -> Chars<'_> {
        Chars {
            inner: char::decode_utf16(self.0.iter().copied()),
        }
    }

    /// Moves `pos` one cluster to the left.
    ///
    /// Positions past the end of the line are clamped to its end first.
    pub fn move_left(&self, pos: Position) -> Position {
        scanner::move_cluster(self, pos, Direction::Left)
    }

    /// Moves `pos` one cluster to the right.
    ///
    /// Positions past the end of the line are clamped to its end first.
    pub fn move_right(&self, pos: Position) -> Position {
        scanner::move_cluster(self, pos, Direction::Right)
    }

    /// Moves `pos` one cluster in `direction`.
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        scanner::move_cluster(self, pos, direction)
    }

    /// Returns an iterator over the offsets a cursor visits when walking
    /// right from the start of the line, both ends included.
    pub fn cluster_boundaries(&self) -> ClusterBoundaries<'_> {
        ClusterBoundaries {
            line: self,
            next: Some(Position::default()),
        }
    }
}

impl<'a> From<&'a [u16]> for &'a Line {
    fn from(units: &'a [u16]) -> Self {
        Line::new(units)
    }
}

impl AsRef<Line> for [u16] {
    fn as_ref(&self) -> &Line {
        Line::new(self)
    }
}

impl AsRef<[u16]> for Line {
    fn as_ref(&self) -> &[u16] {
        &self.0
    }
}

impl PartialEq for Line {
    #[inline]
    fn eq(&self, other: &Line) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<str> for Line {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.units().eq(other.encode_utf16())
    }
}

impl Eq for Line {}

impl hash::Hash for Line {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<I> Index<I> for Line
where
    [u16]: Index<I>,
{
    type Output = <[u16] as Index<I>>::Output;

    fn index(&self, index: I) -> &Self::Output {
        self.0.index(index)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Escape runs as `str` does, so marks after a base stay unescaped.
        let mut run = String::new();
        write!(f, "\"")?;
        for res in char::decode_utf16(self.0.iter().copied()) {
            match res {
                Ok(ch) => run.push(ch),
                Err(err) => {
                    write!(f, "{}", run.escape_debug())?;
                    run.clear();
                    write!(f, "\\u{{{:X}}}", err.unpaired_surrogate())?;
                }
            }
        }
        write!(f, "{}\"", run.escape_debug())
    }
}

/// An iterator over the code units of a line.
#[derive(Clone, Copy)]
pub struct Units<'line> {
    data: &'line [u16],
}

impl<'line> Units<'line> {
    /// Returns the number of code units not yielded yet.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether every code unit has been yielded.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<'line> Iterator for Units<'line> {
    type Item = u16;

    fn next(&mut self) -> Option<Self::Item> {
        match *self.data {
            [] => None,
            [head, ref rest @ ..] => {
                self.data = rest;
                Some(head)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl<'line> DoubleEndedIterator for Units<'line> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match *self.data {
            [] => None,
            [ref rest @ .., tail] => {
                self.data = rest;
                Some(tail)
            }
        }
    }
}

impl fmt::Debug for Units<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Units(")?;
        f.debug_list()
            .entries(self.data.iter().map(|unit| format!("{:#06X}", unit)))
            .finish()?;
        write!(f, ")")
    }
}

/// An iterator over the `char`s of a line.
#[derive(Clone, Debug)]
pub struct Chars<'line> {
    inner: DecodeUtf16<Copied<slice::Iter<'line, u16>>>,
}

impl<'line> Iterator for Chars<'line> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|res| res.unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the cluster boundaries of a line, from left to right.
#[derive(Clone, Debug)]
pub struct ClusterBoundaries<'line> {
    line: &'line Line,
    next: Option<Position>,
}

impl<'line> Iterator for ClusterBoundaries<'line> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current.is_line_end(self.line) {
            None
        } else {
            Some(scanner::cluster_right(self.line, current))
        };
        Some(current)
    }
}
