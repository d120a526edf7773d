//! Boxes and their scoring rules.
//!
//! - [`BoxColor`] - The closed set of box variants (green, blue)
//! - [`ScoringBox`] - A box accumulating absorbed token weights
//! - [`scoring`] - Pure score functions over an absorption history

pub use self::{box_color::*, scoring_box::*};

pub(crate) mod box_color;
pub mod scoring;
pub(crate) mod scoring_box;
