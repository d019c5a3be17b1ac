//! Multi-line flex layout support.

pub mod align_content;
pub mod line_breaking;

pub use align_content::{align_content_params, stretch_line_crosses};
pub use line_breaking::{LineRange, break_into_lines};
