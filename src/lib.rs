//! Decoder for the compact, space-delimited sprite atlas format.
//!
//! An atlas string lists packed frames after `f`, optional named animations
//! after `a`, and the format version after `v`:
//!
//! ```text
//! f 0 0 16 16 0 0 0 16 0 16 16 0 0 0 a "walk" 16 16 0 1 v 1
//! ```
//!
//! Every token is a JSON literal. Frames are seven literals
//! (`x y width height localX localY rotated`), animations five
//! (`name width height start end`).

pub mod atlas;
pub mod error;
pub mod literal;
pub mod parse;
pub mod record;
pub mod token;
mod v1;

pub use atlas::{Animation, Atlas, Frame};
pub use error::{AnimationField, FormatError, FrameField};
pub use parse::{parse, parse_bytes, parse_value, MAX_VERSION};
