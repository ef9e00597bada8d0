//! Shapes a simulated trajectory into the single-series line-chart
//! specification the web renderer consumes. Input order is preserved
//! verbatim; the simulators own the monotonicity of what they hand over.

use serde::Serialize;

use crate::core::TrajectoryPoint;
use crate::format::LocaleSpec;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub border_color: &'static str,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: u32,
    pub point_hover_radius: u32,
}

pub const DEFAULT_LINE_STYLE: LineStyle = LineStyle {
    border_color: "hsl(15, 85%, 60%)",
    fill: false,
    tension: 0.1,
    point_radius: 2,
    point_hover_radius: 4,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// X-axis categories, one per trajectory point, in input order.
    pub labels: Vec<String>,
    /// Y-axis values, aligned with `labels`.
    pub values: Vec<f64>,
    /// Locale tag for the renderer's thousands-grouped y-axis ticks.
    pub tick_locale: String,
    pub style: LineStyle,
}

pub fn line_chart(
    points: &[TrajectoryPoint],
    title: &str,
    x_axis_label: &str,
    y_axis_label: &str,
    locale: &LocaleSpec,
) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        x_axis_label: x_axis_label.to_string(),
        y_axis_label: y_axis_label.to_string(),
        labels: points.iter().map(|p| time_label(p.time)).collect(),
        values: points.iter().map(|p| p.assets).collect(),
        tick_locale: locale.tag.to_string(),
        style: DEFAULT_LINE_STYLE,
    }
}

/// Whole years render without a decimal, half-year samples with one.
fn time_label(time: f64) -> String {
    if (time - time.round()).abs() < 1e-9 {
        format!("{}", time.round() as i64)
    } else {
        format!("{time:.1}")
    }
}
