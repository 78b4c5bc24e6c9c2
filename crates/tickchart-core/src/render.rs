//! SVG bar and line charts for [`ChartData`].
//!
//! The output is a standalone SVG document, exposed as a base64 `data:` URI
//! so a page can embed it without serving a second resource.

use std::fmt::{Display, Formatter};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::ChartData;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_RIGHT: f64 = 120.0;
const MARGIN_BOTTOM: f64 = 110.0;
const Y_TICKS: usize = 5;
const LABEL_ROTATION_DEG: i32 = 45;
const PALETTE: [&str; 4] = ["#F44336", "#3F51B5", "#009688", "#FFC107"];

/// Visual form of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [Self; 2] = [Self::Bar, Self::Line];

    /// Maps the numeric form code; anything but `1` draws lines.
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Bar,
            _ => Self::Line,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Bar => 1,
            Self::Line => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Line => "Line",
        }
    }
}

/// A rendered SVG chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    svg: String,
}

impl RenderedChart {
    pub fn as_svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    /// `data:image/svg+xml;charset=utf-8;base64,...` form for `<embed src>`.
    pub fn data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;charset=utf-8;base64,{}",
            STANDARD.encode(self.svg.as_bytes())
        )
    }
}

/// Chart title shown above the plot.
pub fn chart_title(symbol: impl Display, start: impl Display, end: impl Display) -> String {
    format!("Stock Data for {symbol}:  {start} to {end}")
}

pub fn render_chart(data: &ChartData, kind: ChartKind, title: &str) -> RenderedChart {
    let svg = SvgChart::new(data, kind, title).to_string();
    RenderedChart { svg }
}

struct SvgChart<'a> {
    data: &'a ChartData,
    kind: ChartKind,
    title: &'a str,
    slots: usize,
    low: f64,
    high: f64,
}

impl<'a> SvgChart<'a> {
    fn new(data: &'a ChartData, kind: ChartKind, title: &'a str) -> Self {
        let slots = data
            .series()
            .iter()
            .map(|(_, values)| values.len())
            .chain(std::iter::once(data.labels.len()))
            .max()
            .unwrap_or(0);
        let (low, high) = value_bounds(data, kind);

        Self {
            data,
            kind,
            title,
            slots,
            low,
            high,
        }
    }

    fn plot_width(&self) -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height(&self) -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn band(&self) -> f64 {
        self.plot_width() / self.slots.max(1) as f64
    }

    fn x_center(&self, index: usize) -> f64 {
        MARGIN_LEFT + self.band() * (index as f64 + 0.5)
    }

    fn y_for(&self, value: f64) -> f64 {
        let ratio = (value - self.low) / (self.high - self.low);
        MARGIN_TOP + self.plot_height() * (1.0 - ratio)
    }

    fn write_axes(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let bottom = MARGIN_TOP + self.plot_height();
        let right = MARGIN_LEFT + self.plot_width();

        for tick in 0..=Y_TICKS {
            let value = self.low + (self.high - self.low) * tick as f64 / Y_TICKS as f64;
            let y = self.y_for(value);
            writeln!(
                f,
                r##"<line class="guide" x1="{MARGIN_LEFT:.2}" y1="{y:.2}" x2="{right:.2}" y2="{y:.2}" stroke="#e0e0e0"/>"##
            )?;
            writeln!(
                f,
                r#"<text class="y-label" x="{:.2}" y="{:.2}" text-anchor="end">{value:.2}</text>"#,
                MARGIN_LEFT - 8.0,
                y + 4.0
            )?;
        }

        writeln!(
            f,
            r##"<line class="axis" x1="{MARGIN_LEFT:.2}" y1="{bottom:.2}" x2="{right:.2}" y2="{bottom:.2}" stroke="#333"/>"##
        )?;

        for (index, label) in self.data.labels.iter().enumerate() {
            let x = self.x_center(index);
            let y = bottom + 14.0;
            writeln!(
                f,
                r#"<text class="x-label" x="{x:.2}" y="{y:.2}" transform="rotate({LABEL_ROTATION_DEG} {x:.2} {y:.2})">{}</text>"#,
                escape_markup(label)
            )?;
        }

        Ok(())
    }

    fn write_bars(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let band = self.band();
        let bar_width = band * 0.8 / PALETTE.len() as f64;
        let baseline = self.y_for(0.0_f64.clamp(self.low, self.high));

        for (series_index, ((name, values), color)) in
            self.data.series().iter().zip(PALETTE).enumerate()
        {
            writeln!(f, r#"<g class="series" data-name="{name}" fill="{color}">"#)?;
            for (index, value) in values.iter().enumerate() {
                let x = MARGIN_LEFT + band * (index as f64 + 0.1) + bar_width * series_index as f64;
                let y = self.y_for(*value);
                let (top, height) = if y <= baseline {
                    (y, baseline - y)
                } else {
                    (baseline, y - baseline)
                };
                writeln!(
                    f,
                    r#"<rect x="{x:.2}" y="{top:.2}" width="{bar_width:.2}" height="{height:.2}"><title>{value}</title></rect>"#
                )?;
            }
            writeln!(f, "</g>")?;
        }

        Ok(())
    }

    fn write_lines(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for ((name, values), color) in self.data.series().iter().zip(PALETTE) {
            let points = values
                .iter()
                .enumerate()
                .map(|(index, value)| format!("{:.2},{:.2}", self.x_center(index), self.y_for(*value)))
                .collect::<Vec<_>>()
                .join(" ");

            writeln!(f, r#"<g class="series" data-name="{name}">"#)?;
            writeln!(
                f,
                r#"<polyline points="{points}" fill="none" stroke="{color}" stroke-width="2"/>"#
            )?;
            for (index, value) in values.iter().enumerate() {
                writeln!(
                    f,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="{color}"><title>{value}</title></circle>"#,
                    self.x_center(index),
                    self.y_for(*value)
                )?;
            }
            writeln!(f, "</g>")?;
        }

        Ok(())
    }

    fn write_legend(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let x = WIDTH - MARGIN_RIGHT + 16.0;
        for (index, ((name, _), color)) in self.data.series().iter().zip(PALETTE).enumerate() {
            let y = MARGIN_TOP + 22.0 * index as f64;
            writeln!(
                f,
                r#"<rect class="legend" x="{x:.2}" y="{y:.2}" width="12" height="12" fill="{color}"/>"#
            )?;
            writeln!(
                f,
                r#"<text class="legend" x="{:.2}" y="{:.2}">{name}</text>"#,
                x + 18.0,
                y + 11.0
            )?;
        }
        Ok(())
    }
}

impl Display for SvgChart<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" font-size="11">"#
        )?;
        writeln!(f, r##"<rect width="100%" height="100%" fill="#fff"/>"##)?;
        writeln!(
            f,
            r#"<text class="title" x="{:.2}" y="32" text-anchor="middle" font-size="16">{}</text>"#,
            WIDTH / 2.0,
            escape_markup(self.title)
        )?;

        self.write_axes(f)?;
        match self.kind {
            ChartKind::Bar => self.write_bars(f)?,
            ChartKind::Line => self.write_lines(f)?,
        }
        self.write_legend(f)?;

        writeln!(f, "</svg>")
    }
}

fn value_bounds(data: &ChartData, kind: ChartKind) -> (f64, f64) {
    let values = data
        .series()
        .into_iter()
        .flat_map(|(_, values)| values.iter().copied())
        .filter(|value| value.is_finite());

    let (mut low, mut high) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }

    if kind == ChartKind::Bar {
        low = low.min(0.0);
        high = high.max(0.0);
    }
    if (high - low).abs() < f64::EPSILON {
        low -= 1.0;
        high += 1.0;
    }

    (low, high)
}

/// Escapes text for use inside XML/HTML content and attribute values.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
