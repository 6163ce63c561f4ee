//! Report renderers for batch and student views.
//!
//! - [`terminal`]: summary box, skill bars and word tables; respects `--verbose` / `--quiet`.
//! - [`html`]: standalone page with the option sidebar and inline SVG charts.
//! - [`pdf`]: multi-page PDF with cover, skill bars, word clouds and questions.
//! - [`chart`]: SVG bar charts and word clouds shared by the HTML report.

pub mod chart;
pub mod html;
pub mod pdf;
pub mod terminal;
