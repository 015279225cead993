/// Error returned when an offset does not fit the line it is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The offset lies beyond the end-of-line sentinel.
    #[error("offset {offset} is past the end of a line of {len} code units")]
    PastEndOfLine {
        /// The rejected offset.
        offset: usize,
        /// Length of the line, in code units.
        len: usize,
    },
}
