use crate::line_ty::Line;
use smallvec::SmallVec;
use std::{borrow, fmt, hash, ops};

/// Number of code units kept inline before a `LineBuf` spills to the heap.
const INLINE_UNITS: usize = 64;

/// A growable, owned line of UTF-16 code units.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LineBuf(SmallVec<[u16; INLINE_UNITS]>);

impl hash::Hash for LineBuf {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl PartialEq<Line> for LineBuf {
    #[inline]
    fn eq(&self, other: &Line) -> bool {
        **self == *other
    }
}

impl PartialEq<str> for LineBuf {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        **self == *other
    }
}

impl PartialEq<&str> for LineBuf {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        **self == **other
    }
}

impl fmt::Display for LineBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &**self)
    }
}

impl fmt::Debug for LineBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &**self)
    }
}

impl ops::Deref for LineBuf {
    type Target = Line;

    fn deref(&self) -> &Self::Target {
        Line::new(&self.0)
    }
}

impl borrow::Borrow<Line> for LineBuf {
    fn borrow(&self) -> &Line {
        self
    }
}

impl AsRef<Line> for LineBuf {
    fn as_ref(&self) -> &Line {
        self
    }
}

impl borrow::ToOwned for Line {
    type Owned = LineBuf;

    #[inline]
    fn to_owned(&self) -> LineBuf {
        LineBuf::from_units(self.as_units())
    }
}

impl LineBuf {
    /// Creates a new empty `LineBuf`.
    pub fn new() -> Self {
        LineBuf(SmallVec::new())
    }

    /// Encodes `s` as UTF-16 to create a `LineBuf`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        s.encode_utf16().collect()
    }

    /// Copies a slice of code units to create a `LineBuf`.
    pub fn from_units(units: &[u16]) -> Self {
        LineBuf(SmallVec::from_slice(units))
    }

    /// Append a single code unit to the end of the `LineBuf`.
    pub fn push(&mut self, unit: u16) {
        self.0.push(unit);
    }

    /// Append the UTF-16 encoding of `ch` to the end of the `LineBuf`.
    pub fn push_char(&mut self, ch: char) {
        let mut buf = [0u16; 2];
        self.0.extend_from_slice(ch.encode_utf16(&mut buf));
    }

    /// Append the UTF-16 encoding of `s` to the end of the `LineBuf`.
    pub fn push_str(&mut self, s: &str) {
        self.0.extend(s.encode_utf16());
    }

    /// Shortens the line to `len` code units. Has no effect if the line is
    /// already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Removes every code unit, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<&str> for LineBuf {
    fn from(s: &str) -> Self {
        LineBuf::from_str(s)
    }
}

impl From<&[u16]> for LineBuf {
    fn from(units: &[u16]) -> Self {
        LineBuf::from_units(units)
    }
}

impl From<&Line> for LineBuf {
    fn from(line: &Line) -> Self {
        LineBuf::from_units(line.as_units())
    }
}

impl Extend<u16> for LineBuf {
    fn extend<T: IntoIterator<Item = u16>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<u16> for LineBuf {
    fn from_iter<T: IntoIterator<Item = u16>>(iter: T) -> Self {
        let mut line = Self::default();
        line.extend(iter);
        line
    }
}

impl<'rhs> ops::AddAssign<&'rhs Line> for LineBuf {
    fn add_assign(&mut self, rhs: &'rhs Line) {
        self.0.extend_from_slice(rhs.as_units());
    }
}
