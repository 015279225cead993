#![deny(unsafe_op_in_unsafe_fn)]
#![deny(warnings, missing_docs, missing_debug_implementations)]
//! Cluster-aware horizontal cursor stepping over lines of UTF-16 code units.
//!
//! Editors that store text as UTF-16 address the cursor by code-unit offset.
//! Stepping that offset by one unit can leave the cursor inside a character
//! that takes two units, or between a Thai consonant and the vowel and tone
//! marks drawn on top of or below it. This crate computes where the cursor
//! should land instead.
//!
//! The `Line` type is a borrowed, read-only view over a line of code units.
//! It is usually seen as `&Line`; `LineBuf` is its owned, growable
//! counterpart.
//!
//! A `Position` is an offset into a line. Offsets range over `0..=len`, where
//! `len` is the end-of-line sentinel.
//!
//! # Clusters
//!
//! The cursor moves over these units as a whole:
//!
//! * A surrogate pair: a high surrogate (U+D800..=U+DBFF) followed by a low
//!   surrogate (U+DC00..=U+DFFF).
//! * A Thai base followed by any number of marks from a fixed set: the tone
//!   marks U+0E48..=U+0E4B, the vowel signs above (U+0E31, U+0E34, U+0E35,
//!   U+0E37, U+0E47, U+0E4C, U+0E4D) and below (U+0E38, U+0E39), and
//!   SARA AM (U+0E33).
//!
//! This is not grapheme segmentation. Other scripts and other combining marks
//! move one code unit at a time.
//!
//! # Out-of-range offsets
//!
//! Offsets past the end of the line are clamped to the end and logged with
//! `tracing` at warn level; moving never panics. Use [`Position::checked`] to
//! reject such offsets up front.
//!
//! ```
//! use clusterstep::{LineBuf, Position};
//!
//! let line = LineBuf::from_str("ก่อน😀");
//! let pos = line.move_right(Position::default());
//! assert_eq!(2, pos.offset());
//! assert_eq!(Position::default(), line.move_left(pos));
//! ```

pub(crate) mod tables;

pub(crate) mod code_unit;

pub(crate) mod error;

pub(crate) mod position;

pub(crate) mod line_ty;

pub(crate) mod line_buf;

pub(crate) mod scanner;

pub use code_unit::{is_high_surrogate, is_low_surrogate, is_thai, is_thai_combining};

pub use error::PositionError;

pub use position::Position;

pub use line_ty::{Chars, ClusterBoundaries, Line, Units};

pub use line_buf::LineBuf;

pub use scanner::{move_left, move_right, step, Direction};
