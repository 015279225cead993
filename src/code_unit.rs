//! Predicates over single UTF-16 code units.
//!
//! Every predicate is total over `u16`. The `*_at` forms take the result of a
//! line lookup, so a missing unit (the end-of-line sentinel) never matches.

use crate::tables::thai;

const HIGH_SURROGATE_START: u16 = 0xD800;
const HIGH_SURROGATE_END: u16 = 0xDBFF;
const LOW_SURROGATE_START: u16 = 0xDC00;
const LOW_SURROGATE_END: u16 = 0xDFFF;
const THAI_BLOCK_START: u16 = 0x0E00;
const THAI_BLOCK_END: u16 = 0x0E7F;

/// Returns whether `unit` is a high (leading) surrogate.
#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&unit)
}

/// Returns whether `unit` is a low (trailing) surrogate.
#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&unit)
}

/// Returns whether `unit` lies in the Thai block (U+0E00..=U+0E7F).
#[inline]
pub fn is_thai(unit: u16) -> bool {
    (THAI_BLOCK_START..=THAI_BLOCK_END).contains(&unit)
}

/// Returns whether `unit` is one of the Thai marks that stack onto the
/// preceding base.
///
/// This is a fixed, curated set of tone marks, upper and lower vowel signs
/// and SARA AM. It is not the Unicode combining-mark class.
#[inline]
pub fn is_thai_combining(unit: u16) -> bool {
    thai::is_non_base(unit)
}

#[inline]
pub(crate) fn is_high_surrogate_at(unit: Option<u16>) -> bool {
    unit.is_some_and(is_high_surrogate)
}

#[inline]
pub(crate) fn is_low_surrogate_at(unit: Option<u16>) -> bool {
    unit.is_some_and(is_low_surrogate)
}

#[inline]
pub(crate) fn is_thai_at(unit: Option<u16>) -> bool {
    unit.is_some_and(is_thai)
}

#[inline]
pub(crate) fn is_thai_combining_at(unit: Option<u16>) -> bool {
    unit.is_some_and(is_thai_combining)
}
