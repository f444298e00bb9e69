//! Colour themes and series styling for comparison charts.

use crate::utils::config::MOBILITY_MOBILE;
use crate::utils::error::ChartError;
use std::str::FromStr;

/// Named chart theme, selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTheme {
    #[default]
    Light,
    Dark,
}

impl FromStr for ChartTheme {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ChartTheme::Light),
            "dark" => Ok(ChartTheme::Dark),
            _ => Err(ChartError::UnknownTheme(s.to_string())),
        }
    }
}

/// Colours used for the non-data parts of a chart
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: &'static str,
    pub panel: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
    pub axis: &'static str,
}

impl ChartTheme {
    pub fn palette(self) -> Palette {
        match self {
            ChartTheme::Light => Palette {
                background: "rgb(255, 255, 255)",
                panel: "rgb(234, 234, 242)",
                text: "rgb(30, 30, 30)",
                grid: "rgb(255, 255, 255)",
                axis: "rgb(80, 80, 80)",
            },
            ChartTheme::Dark => Palette {
                background: "rgb(24, 24, 28)",
                panel: "rgb(44, 44, 52)",
                text: "rgb(230, 230, 230)",
                grid: "rgb(70, 70, 80)",
                axis: "rgb(180, 180, 180)",
            },
        }
    }
}

/// Line colour for a protocol; unknown protocols are drawn in black
pub fn protocol_color(protocol: &str) -> &'static str {
    match protocol {
        "TCP" => "#1f77b4",   // Blue
        "UDP" => "#ff7f0e",   // Orange
        "MIXED" => "#2ca02c", // Green
        _ => "#000000",
    }
}

/// Marker shape for a mobility flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}

/// Marker and dash pattern for a mobility flag
pub fn mobility_style(mobility: &str) -> (Marker, Option<&'static str>) {
    if mobility == MOBILITY_MOBILE {
        (Marker::Square, Some("8,4"))
    } else {
        (Marker::Circle, None)
    }
}

/// Bar fill for the static and mobile halves of the bar panel
pub const STATIC_BAR_COLOR: &str = "rgb(70, 130, 180)"; // Steel Blue
pub const MOBILE_BAR_COLOR: &str = "rgb(255, 127, 80)"; // Coral
