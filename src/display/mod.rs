//! Human-readable output: display-rung selection and report rendering.
pub mod report;
pub mod scale;

pub use report::{render, render_models, OutputMode, ReportFormatter};
pub use scale::{for_display, select_rung};
