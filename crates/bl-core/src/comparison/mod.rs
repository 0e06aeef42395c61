//! Side-by-side comparison domain: the bounded selection set and the
//! derived highlight view computed from it.

mod highlights;
mod selection;

pub use highlights::ComparisonHighlights;
pub use selection::{ComparisonSelection, ToggleOutcome, MAX_COMPARE_PRODUCTS};
