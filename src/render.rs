//! Serializes line segments into SVG and HTML documents.

use crate::path::Segment;
use std::fmt::{self, Display, Formatter};

/// Configuration for SVG output.
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Canvas width in user units.
    pub width: f64,
    /// Canvas height in user units.
    pub height: f64,
    /// Decimal places used for coordinates and stroke widths.
    pub precision: usize,
    /// Stroke paint for every line.
    pub stroke: String,
    /// Optional fill for a full-canvas background rectangle.
    pub background: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            precision: 1,
            stroke: "black".to_string(),
            background: None,
        }
    }
}

/// Renders one `<line>` per segment into a standalone SVG document.
pub fn render_svg(segments: &[Segment], config: &SvgConfig) -> String {
    SvgDocument::new(segments, config).to_string()
}

/// An SVG document over borrowed segments, written out through [`Display`].
#[derive(Clone, Copy, Debug)]
pub struct SvgDocument<'a> {
    segments: &'a [Segment],
    config: &'a SvgConfig,
}

impl<'a> SvgDocument<'a> {
    pub fn new(segments: &'a [Segment], config: &'a SvgConfig) -> Self {
        Self { segments, config }
    }
}

impl Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let p = config.precision;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = number(config.width, p),
            h = number(config.height, p),
        )?;

        if let Some(fill) = &config.background {
            writeln!(
                f,
                r#"  <rect x="0" y="0" width="100%" height="100%" fill="{}"/>"#,
                escape(fill)
            )?;
        }

        let stroke = escape(&config.stroke);
        for seg in self.segments {
            writeln!(
                f,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                number(seg.start.x, p),
                number(seg.start.y, p),
                number(seg.end.x, p),
                number(seg.end.y, p),
                stroke,
                number(seg.pen_size, p),
            )?;
        }

        writeln!(f, "</svg>")
    }
}

/// Wraps an SVG document in a minimal HTML page.
pub fn render_html(svg: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        svg
    )
}

/// Formats `value` with a fixed number of decimals, never printing `-0`.
fn number(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
