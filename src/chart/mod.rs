//! Comparison chart rendering.
//!
//! Converts the record set into a single SVG image with four panels.
//! The SVG is built by hand, without a plotting library.

pub mod generator;
pub mod theme;

// Re-export main types
pub use generator::{generate_comparison_chart, ChartConfig};
pub use theme::ChartTheme;
