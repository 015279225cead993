//! Horizontal cursor movement over cluster boundaries.
//!
//! A cluster is either a surrogate pair or a Thai base followed by any number
//! of the marks recognised by [`is_thai_combining`]. Moving left or right
//! never leaves the cursor between the units of a pair, and never between a
//! Thai base and its marks, as long as it started on a boundary and every mark
//! in the line follows a Thai base.
//!
//! The two directions are not exact mirrors. Moving left checks whether the
//! cursor started in front of a mark and, if so, also hops over the cluster
//! before the one it was inside. Moving right has no such correction.
//!
//! [`is_thai_combining`]: crate::is_thai_combining

use crate::{
    code_unit::{is_high_surrogate_at, is_low_surrogate_at, is_thai_at, is_thai_combining_at},
    line_ty::Line,
    position::Position,
};
use std::fmt;

/// Horizontal direction of a cursor move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the start of the line.
    Left,
    /// Towards the end of the line.
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Returns the offset one cluster left of `offset` in `line`.
///
/// An `offset` past the end of the line is treated as the end of the line.
///
/// ```
/// let line: Vec<u16> = "x😀y".encode_utf16().collect();
/// assert_eq!(1, clusterstep::move_left(&line, 3));
/// ```
pub fn move_left(line: &[u16], offset: usize) -> usize {
    step(line, offset, Direction::Left)
}

/// Returns the offset one cluster right of `offset` in `line`.
///
/// An `offset` past the end of the line is treated as the end of the line.
///
/// ```
/// let line: Vec<u16> = "กิน".encode_utf16().collect();
/// assert_eq!(2, clusterstep::move_right(&line, 0));
/// ```
pub fn move_right(line: &[u16], offset: usize) -> usize {
    step(line, offset, Direction::Right)
}

/// Returns the offset one cluster from `offset` in `direction`.
pub fn step(line: &[u16], offset: usize, direction: Direction) -> usize {
    move_cluster(Line::new(line), Position::new(offset), direction).offset()
}

pub(crate) fn move_cluster(line: &Line, pos: Position, direction: Direction) -> Position {
    let from = clamp_to_line(line, pos);
    let to = match direction {
        Direction::Left => cluster_left(line, from),
        Direction::Right => cluster_right(line, from),
    };
    tracing::trace!(
        from = from.offset(),
        to = to.offset(),
        %direction,
        len = line.len(),
        "moved cursor"
    );
    to
}

fn clamp_to_line(line: &Line, pos: Position) -> Position {
    if pos.offset() > line.len() {
        tracing::warn!(
            offset = pos.offset(),
            len = line.len(),
            "cursor offset past end of line, clamping"
        );
    }
    Position::clamped(pos.offset(), line)
}

pub(crate) fn cluster_left(line: &Line, mut pos: Position) -> Position {
    if pos.is_line_start() {
        return pos;
    }

    let left = line.unit_at(pos.offset() - 1);
    if is_thai_at(left) {
        let was_at_non_base = is_thai_combining_at(line.unit_at(pos.offset()));

        pos = skip_marks_left(line, pos.step_left());
        if was_at_non_base && !pos.is_line_start() {
            // Started inside a run of marks, so the base just reached belongs
            // to the cluster being left. Hop over the one before it too.
            pos = skip_marks_left(line, pos.step_left());
        }
        return pos;
    }

    if is_low_surrogate_at(line.unit_at(pos.offset())) && is_high_surrogate_at(left) {
        // Realign from the middle of a pair to its start.
        pos = pos.step_left();
    }

    let stepped = pos.step_left();
    if splits_surrogate_pair(line, stepped) {
        stepped.step_left()
    } else {
        stepped
    }
}

pub(crate) fn cluster_right(line: &Line, pos: Position) -> Position {
    let stepped = pos.step_right(line);
    if stepped.is_line_end(line) {
        return stepped;
    }

    if is_thai_at(line.unit_at(stepped.offset())) {
        return skip_marks_right(line, stepped);
    }

    if splits_surrogate_pair(line, stepped) {
        stepped.step_right(line)
    } else {
        stepped
    }
}

fn skip_marks_left(line: &Line, mut pos: Position) -> Position {
    while !pos.is_line_start() && is_thai_combining_at(line.unit_at(pos.offset())) {
        pos = pos.step_left();
    }
    pos
}

fn skip_marks_right(line: &Line, mut pos: Position) -> Position {
    while !pos.is_line_end(line) && is_thai_combining_at(line.unit_at(pos.offset())) {
        pos = pos.step_right(line);
    }
    pos
}

/// Whether `pos` sits between a high surrogate and the low surrogate after it.
fn splits_surrogate_pair(line: &Line, pos: Position) -> bool {
    !pos.is_line_start()
        && is_low_surrogate_at(line.unit_at(pos.offset()))
        && is_high_surrogate_at(line.unit_at(pos.offset() - 1))
}

#[cfg(test)]
mod tests {
    use super::{move_left, move_right, step, Direction};
    use crate::{line_ty::Line, position::Position};
    use tracing_test::traced_test;

    const HIGH: u16 = 0xD83D;
    const LOW: u16 = 0xDE00;
    const KO_KAI: u16 = 0x0E01; // ก
    const KHO_KHAI: u16 = 0x0E02; // ข
    const SARA_I: u16 = 0x0E34; // ิ
    const MAI_EK: u16 = 0x0E48; // ่
    const X: u16 = b'x' as u16;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_line_start_is_terminal() {
        for line in [utf16(""), utf16("abc"), utf16("กิ"), vec![HIGH, LOW]] {
            assert_eq!(0, move_left(&line, 0));
        }
    }

    #[test]
    fn test_line_end_is_fixed_point() {
        for line in [utf16(""), utf16("abc"), utf16("กิ"), vec![HIGH, LOW]] {
            assert_eq!(line.len(), move_right(&line, line.len()));
        }
    }

    #[test]
    fn test_ascii_single_steps() {
        let line = utf16("hello");
        for p in 1..line.len() {
            assert_eq!(p - 1, move_left(&line, p));
            assert_eq!(p + 1, move_right(&line, p));
        }
        assert_eq!(1, move_right(&line, 0));
        assert_eq!(4, move_left(&line, 5));
    }

    #[test]
    fn test_surrogate_pair_then_ascii() {
        let line = [HIGH, LOW, X];
        assert_eq!(2, move_right(&line, 0));
        assert_eq!(0, move_left(&line, 2));
        assert_eq!(2, move_left(&line, 3));
        assert_eq!(3, move_right(&line, 2));
    }

    #[test]
    fn test_from_inside_surrogate_pair() {
        let line = [X, HIGH, LOW, X];
        // Left realigns to the pair's start, then moves one cluster further.
        assert_eq!(0, move_left(&line, 2));
        assert_eq!(3, move_right(&line, 2));
    }

    #[test]
    fn test_adjacent_surrogate_pairs() {
        let line = [HIGH, LOW, HIGH, LOW];
        assert_eq!(2, move_right(&line, 0));
        assert_eq!(4, move_right(&line, 2));
        assert_eq!(2, move_left(&line, 4));
        assert_eq!(0, move_left(&line, 2));
    }

    #[test]
    fn test_thai_base_with_mark() {
        let line = [KO_KAI, SARA_I];
        assert_eq!(2, move_right(&line, 0));
        assert_eq!(0, move_left(&line, 2));
    }

    #[test]
    fn test_thai_base_with_stacked_marks() {
        let line = utf16("ก่ำข");
        assert_eq!(3, move_right(&line, 0));
        assert_eq!(4, move_right(&line, 3));
        assert_eq!(3, move_left(&line, 4));
        assert_eq!(0, move_left(&line, 3));
    }

    #[test]
    fn test_marks_outside_set_do_not_stick() {
        // U+0E36 SARA UE is not in the curated set.
        let line = [KO_KAI, 0x0E36];
        assert_eq!(1, move_right(&line, 0));
        assert_eq!(1, move_left(&line, 2));
    }

    #[test]
    fn test_thai_next_to_ascii() {
        let line = utf16("aกิb");
        assert_eq!(1, move_right(&line, 0));
        assert_eq!(3, move_right(&line, 1));
        assert_eq!(4, move_right(&line, 3));
        assert_eq!(3, move_left(&line, 4));
        assert_eq!(1, move_left(&line, 3));
        assert_eq!(0, move_left(&line, 1));
    }

    #[test]
    fn test_left_from_inside_marks_skips_previous_cluster() {
        // Cursor between ข and its mark. Moving left leaves the ข cluster
        // and also hops over the ก before it.
        let line = [KO_KAI, KHO_KHAI, MAI_EK];
        assert_eq!(0, move_left(&line, 2));

        let line = [X, KO_KAI, KHO_KHAI, MAI_EK];
        assert_eq!(1, move_left(&line, 3));
    }

    #[test]
    fn test_right_from_inside_marks_has_no_mirrored_correction() {
        // Cursor between ก and its first mark. Moving right only consumes
        // the rest of the run; it does not also skip the next cluster.
        let line = [KO_KAI, SARA_I, MAI_EK, KHO_KHAI, SARA_I];
        assert_eq!(3, move_right(&line, 1));
        // From the following cluster boundary, left from 3 returns to 0 directly.
        assert_eq!(0, move_left(&line, 3));
    }

    #[test]
    fn test_left_from_inside_marks_can_split_preceding_pair() {
        // Consequence of the one-sided correction: starting mid-cluster right
        // after a surrogate pair lands between its two units.
        let line = [HIGH, LOW, KO_KAI, SARA_I];
        assert_eq!(1, move_left(&line, 3));
        // Starting from the cluster boundary is fine.
        assert_eq!(2, move_left(&line, 4));
        assert_eq!(0, move_left(&line, 2));
    }

    #[test]
    fn test_mark_after_pair_left_lands_inside_pair() {
        // A mark with no Thai base before it rides on the pair. Moving right
        // treats pair and mark as separate stops, but moving left from the end
        // skips the mark and then stops between the pair's two units.
        let line = [HIGH, LOW, SARA_I];
        let offsets: Vec<usize> = Line::new(&line)
            .cluster_boundaries()
            .map(Position::offset)
            .collect();
        assert_eq!(vec![0, 2, 3], offsets);
        assert_eq!(3, move_right(&line, 2));
        assert_eq!(1, move_left(&line, 3));
        assert_eq!(1, move_left(&line, move_right(&line, 2)));
    }

    #[test]
    fn test_lone_low_surrogate() {
        let line = [LOW, X];
        assert_eq!(1, move_right(&line, 0));
        assert_eq!(0, move_left(&line, 1));

        let line = [LOW];
        assert_eq!(1, move_right(&line, 0));
        assert_eq!(0, move_left(&line, 1));
    }

    #[test]
    fn test_lone_high_surrogate() {
        let line = [X, HIGH];
        assert_eq!(2, move_right(&line, 1));
        assert_eq!(1, move_left(&line, 2));
    }

    #[test]
    fn test_step_dispatches_on_direction() {
        let line = [HIGH, LOW, X];
        assert_eq!(2, step(&line, 0, Direction::Right));
        assert_eq!(0, step(&line, 2, Direction::Left));
        assert_eq!(Direction::Left, Direction::Right.reverse());
        assert_eq!("right", Direction::Right.to_string());
    }

    #[test]
    #[traced_test]
    fn test_offset_past_end_is_clamped() {
        let line = utf16("ab");
        assert_eq!(2, move_right(&line, 10));
        assert_eq!(1, move_left(&line, 10));
        assert!(logs_contain("cursor offset past end of line, clamping"));
    }

    #[test]
    #[traced_test]
    fn test_in_range_offset_does_not_warn() {
        let line = utf16("ab");
        assert_eq!(1, move_left(&line, 2));
        assert!(!logs_contain("clamping"));
    }
}
