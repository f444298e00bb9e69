//! SVG comparison chart generation.
//!
//! Produces a 2x2 grid:
//! - throughput vs clients
//! - delay vs clients
//! - loss vs clients
//! - mean throughput per protocol, static vs mobile
//!
//! Line series are keyed by protocol x mobility and drawn in the order the
//! values first appear in the dataset, so the same records always render
//! the same bytes.

use super::theme::{
    mobility_style, protocol_color, ChartTheme, Marker, Palette, MOBILE_BAR_COLOR,
    STATIC_BAR_COLOR,
};
use crate::aggregator::{mean, mobilities_in_order, protocols_in_order, select_group};
use crate::parser::ExperimentRecord;
use crate::utils::config::{mobility_label, MOBILITY_MOBILE, MOBILITY_STATIC};
use crate::utils::error::ChartError;
use log::{debug, info};

/// Comparison chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub theme: ChartTheme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Network Performance Analysis".to_string(),
            width: 1600,
            height: 1200,
            theme: ChartTheme::Light,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }
}

const TITLE_HEIGHT: f64 = 70.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 25.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 55.0;
const Y_TICKS: usize = 5;

/// Plot rectangle of one panel, in SVG coordinates
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn for_panel(config: &ChartConfig, column: usize, row: usize) -> Self {
        let panel_w = config.width as f64 / 2.0;
        let panel_h = (config.height as f64 - TITLE_HEIGHT) / 2.0;
        let origin_x = column as f64 * panel_w;
        let origin_y = TITLE_HEIGHT + row as f64 * panel_h;

        Self {
            x: origin_x + MARGIN_LEFT,
            y: origin_y + MARGIN_TOP,
            width: (panel_w - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (panel_h - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Map a data value in [0, max] to a y coordinate
    fn scale_y(&self, value: f64, max: f64) -> f64 {
        self.bottom() - (value / max) * self.height
    }
}

/// A line-panel metric: title, axis label and value accessor
struct Metric {
    title: &'static str,
    y_label: &'static str,
    value: fn(&ExperimentRecord) -> f64,
}

const LINE_METRICS: [Metric; 3] = [
    Metric {
        title: "THROUGHPUT vs CLIENTS",
        y_label: "Throughput (Mbps)",
        value: |r| r.throughput_mbps,
    },
    Metric {
        title: "DELAY vs CLIENTS",
        y_label: "Mean Delay (ms)",
        value: |r| r.avg_delay_ms,
    },
    Metric {
        title: "PACKET LOSS vs CLIENTS",
        y_label: "Loss Rate (%)",
        value: |r| r.loss_rate,
    },
];

/// One line series: points sorted by client count
struct Series {
    label: String,
    color: &'static str,
    marker: Marker,
    dash: Option<&'static str>,
    points: Vec<(f64, f64)>,
}

/// Generate the comparison chart as an SVG document
///
/// **Public** - main entry point for chart rendering
///
/// # Errors
/// * `ChartError::EmptyDataset` - there are no records to plot
pub fn generate_comparison_chart(
    records: &[ExperimentRecord],
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if records.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let config = config.cloned().unwrap_or_default();
    let palette = config.theme.palette();
    info!("Generating comparison chart from {} record(s)", records.len());

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height
    ));
    svg.push_str(&format!(
        r#"<style>text {{ font-family: sans-serif; fill: {}; }}</style>"#,
        palette.text
    ));
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        config.width, config.height, palette.background
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="40" font-size="22" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_xml(&config.title)
    ));

    let client_ticks = client_ticks(records);

    for (index, metric) in LINE_METRICS.iter().enumerate() {
        let area = PlotArea::for_panel(&config, index % 2, index / 2);
        let series = build_series(records, metric.value);
        debug!("Panel '{}': {} series", metric.title, series.len());
        render_line_panel(&mut svg, area, metric, &series, &client_ticks, &palette);
    }

    render_bar_panel(&mut svg, PlotArea::for_panel(&config, 1, 1), records, &palette);

    svg.push_str("</svg>");

    info!("Comparison chart generated ({} bytes)", svg.len());
    Ok(svg)
}

/// Build one series per non-empty (protocol, mobility) pair
fn build_series(records: &[ExperimentRecord], value: fn(&ExperimentRecord) -> f64) -> Vec<Series> {
    let mut series = Vec::new();

    for protocol in protocols_in_order(records) {
        for mobility in mobilities_in_order(records) {
            let mut members = select_group(records, protocol, mobility);
            if members.is_empty() {
                continue;
            }
            members.sort_by_key(|r| r.client_count);

            let (marker, dash) = mobility_style(mobility);
            series.push(Series {
                label: format!("{} {}", protocol, mobility_label(mobility)),
                color: protocol_color(protocol),
                marker,
                dash,
                points: members
                    .iter()
                    .map(|r| (r.client_count as f64, value(r)))
                    .filter(|(_, y)| y.is_finite())
                    .collect(),
            });
        }
    }

    series
}

/// Distinct client counts, ascending; used as x ticks of every line panel
fn client_ticks(records: &[ExperimentRecord]) -> Vec<u64> {
    let mut ticks: Vec<u64> = records.iter().map(|r| r.client_count).collect();
    ticks.sort_unstable();
    ticks.dedup();
    ticks
}

/// Upper bound of a value axis, with headroom above the largest value
fn axis_max(values: impl Iterator<Item = f64>, headroom: f64) -> f64 {
    let max = values
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * headroom
    } else {
        1.0
    }
}

fn render_line_panel(
    out: &mut String,
    area: PlotArea,
    metric: &Metric,
    series: &[Series],
    client_ticks: &[u64],
    palette: &Palette,
) {
    let x_max = client_ticks.last().copied().unwrap_or(1).max(1) as f64;
    let y_max = axis_max(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)), 1.1);
    let scale_x = |x: f64| area.x + (x / x_max) * area.width;

    render_frame(out, area, metric.title, "Number of Clients", metric.y_label, y_max, palette);

    for tick in client_ticks {
        let x = scale_x(*tick as f64);
        out.push_str(&format!(
            r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
            area.y,
            area.bottom(),
            palette.grid
        ));
        out.push_str(&format!(
            r#"<text x="{x:.2}" y="{:.2}" font-size="11" text-anchor="middle">{}</text>"#,
            area.bottom() + 16.0,
            tick
        ));
    }

    for s in series {
        let coords: Vec<(f64, f64)> = s
            .points
            .iter()
            .map(|(x, y)| (scale_x(*x), area.scale_y(*y, y_max)))
            .collect();

        let points_attr = coords
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        let dash_attr = s
            .dash
            .map(|d| format!(r#" stroke-dasharray="{}""#, d))
            .unwrap_or_default();

        out.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2.5"{}/>"#,
            points_attr, s.color, dash_attr
        ));

        for (x, y) in &coords {
            render_marker(out, s.marker, *x, *y, s.color);
        }
    }

    render_legend(out, area, series, palette);
}

fn render_marker(out: &mut String, marker: Marker, x: f64, y: f64, color: &str) {
    match marker {
        Marker::Circle => out.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="4.5" fill="{}"/>"#,
            x, y, color
        )),
        Marker::Square => out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="9" height="9" fill="{}"/>"#,
            x - 4.5,
            y - 4.5,
            color
        )),
    }
}

fn render_legend(out: &mut String, area: PlotArea, series: &[Series], palette: &Palette) {
    let line_height = 16.0;
    let box_w = 130.0;
    let box_h = series.len() as f64 * line_height + 8.0;
    let box_x = area.x + area.width - box_w - 6.0;
    let box_y = area.y + 6.0;

    out.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{}" height="{:.2}" fill="{}" fill-opacity="0.9" stroke="{}" stroke-width="0.5"/>"#,
        box_x, box_y, box_w, box_h, palette.background, palette.axis
    ));

    for (i, s) in series.iter().enumerate() {
        let y = box_y + 14.0 + i as f64 * line_height;
        render_marker(out, s.marker, box_x + 12.0, y - 4.0, s.color);
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11">{}</text>"#,
            box_x + 24.0,
            y,
            escape_xml(&s.label)
        ));
    }
}

/// Panel background, title, axis labels and horizontal grid
fn render_frame(
    out: &mut String,
    area: PlotArea,
    title: &str,
    x_label: &str,
    y_label: &str,
    y_max: f64,
    palette: &Palette,
) {
    out.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
        area.x, area.y, area.width, area.height, palette.panel
    ));
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="14" text-anchor="middle" font-weight="bold">{}</text>"#,
        area.x + area.width / 2.0,
        area.y - 12.0,
        escape_xml(title)
    ));
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle" font-weight="bold">{}</text>"#,
        area.x + area.width / 2.0,
        area.bottom() + 38.0,
        escape_xml(x_label)
    ));
    let label_x = area.x - 50.0;
    let label_y = area.y + area.height / 2.0;
    out.push_str(&format!(
        r#"<text x="{label_x:.2}" y="{label_y:.2}" font-size="12" text-anchor="middle" font-weight="bold" transform="rotate(-90 {label_x:.2} {label_y:.2})">{}</text>"#,
        escape_xml(y_label)
    ));

    for i in 0..=Y_TICKS {
        let value = y_max * i as f64 / Y_TICKS as f64;
        let y = area.scale_y(value, y_max);
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="1"/>"#,
            area.x,
            area.x + area.width,
            palette.grid
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{:.1}</text>"#,
            area.x - 6.0,
            y + 4.0,
            value
        ));
    }

    out.push_str(&format!(
        r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{b:.2}" stroke="{c}" stroke-width="1.5"/><line x1="{x:.2}" y1="{b:.2}" x2="{:.2}" y2="{b:.2}" stroke="{c}" stroke-width="1.5"/>"#,
        area.y,
        area.x + area.width,
        x = area.x,
        b = area.bottom(),
        c = palette.axis
    ));
}

/// Mean throughput per protocol, static and mobile side by side
fn render_bar_panel(out: &mut String, area: PlotArea, records: &[ExperimentRecord], palette: &Palette) {
    let protocols = protocols_in_order(records);

    let mean_throughput = |protocol: &&str, mobility: &str| {
        let values: Vec<f64> = select_group(records, protocol, mobility)
            .iter()
            .map(|r| r.throughput_mbps)
            .collect();
        mean(&values)
    };

    let bars: Vec<(&str, Option<f64>, Option<f64>)> = protocols
        .iter()
        .map(|p| {
            (
                *p,
                mean_throughput(p, MOBILITY_STATIC),
                mean_throughput(p, MOBILITY_MOBILE),
            )
        })
        .collect();

    let y_max = axis_max(
        bars.iter().flat_map(|(_, s, m)| s.iter().chain(m.iter()).copied()),
        1.15,
    );

    render_frame(
        out,
        area,
        "COMPARISON: STATIC vs MOBILE",
        "Protocol",
        "Mean Throughput (Mbps)",
        y_max,
        palette,
    );

    let slot_w = area.width / bars.len().max(1) as f64;
    let bar_w = slot_w * 0.35;

    for (i, (protocol, static_mean, mobile_mean)) in bars.iter().enumerate() {
        let center = area.x + slot_w * (i as f64 + 0.5);

        for (offset, value, color) in [
            (-bar_w, *static_mean, STATIC_BAR_COLOR),
            (0.0, *mobile_mean, MOBILE_BAR_COLOR),
        ] {
            let Some(value) = value.filter(|v| v.is_finite()) else {
                continue;
            };
            let top = area.scale_y(value.max(0.0), y_max);
            out.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="0.8" stroke="black" stroke-width="1.5"/>"#,
                center + offset,
                top,
                bar_w,
                area.bottom() - top,
                color
            ));
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="middle" font-weight="bold">{:.1}</text>"#,
                center + offset + bar_w / 2.0,
                top - 4.0,
                value
            ));
        }

        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle">{}</text>"#,
            center,
            area.bottom() + 16.0,
            escape_xml(protocol)
        ));
    }

    let legend_x = area.x + area.width - 110.0;
    for (i, (label, color)) in [
        (mobility_label(MOBILITY_STATIC), STATIC_BAR_COLOR),
        (mobility_label(MOBILITY_MOBILE), MOBILE_BAR_COLOR),
    ]
    .iter()
    .enumerate()
    {
        let y = area.y + 10.0 + i as f64 * 18.0;
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="14" height="14" fill="{}" rx="2"/>"#,
            legend_x, y, color
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="12">{}</text>"#,
            legend_x + 20.0,
            y + 11.0,
            label
        ));
    }
}

/// Escape text for use inside SVG elements and attributes
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
