//! Textual encodings of IPv4 values.
//!
//! - [`detect`] - Classify raw text into a [`TextFormat`](crate::models::TextFormat)
//! - [`unify`] - Normalize classified text to a canonical `u32`
//! - [`render`] - Render a canonical `u32` back into any format

mod detect;
mod render;
mod unify;

pub use detect::{detect, matches_format, Context, LONG_MAX_EXCLUSIVE, LONG_MIN_EXCLUSIVE};
pub use render::{render, render_named};
pub use unify::{unify, unify_as};
