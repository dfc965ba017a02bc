//! Static SVG snapshot of a [`Scene`].

use crate::scene::Scene;
use std::fmt::Write as _;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Time since the bubbles were created. `None` draws them fully grown.
    pub elapsed: Option<Duration>,
    pub font_size: f64,
    /// Element id of the root `<svg>`.
    pub id: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            elapsed: None,
            font_size: 14.0,
            id: "svg_vis".to_string(),
        }
    }
}

pub fn render_svg(scene: &Scene, options: &SvgOptions) -> String {
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        escape_xml(&options.id),
        fmt(scene.width),
        fmt(scene.height),
        fmt(scene.width),
        fmt(scene.height),
    );
    out.push('\n');

    for bubble in scene.bubbles() {
        let radius = match options.elapsed {
            Some(elapsed) => scene.radius_at(&bubble.id, elapsed).unwrap_or(bubble.radius),
            None => bubble.radius,
        };
        let _ = writeln!(
            &mut out,
            r#"<circle class="bubble" id="bubble_{}" cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            escape_xml(&bubble.id),
            fmt(bubble.cx),
            fmt(bubble.cy),
            fmt(radius),
            bubble.fill,
            bubble.current_stroke(),
            fmt(bubble.stroke_width),
        );
    }

    for label in scene.labels() {
        let _ = write!(
            &mut out,
            r#"<text class="{}" x="{}" y="{}" text-anchor="middle" font-size="{}">"#,
            escape_xml(&label.class),
            fmt(label.x),
            fmt(label.y),
            fmt(options.font_size),
        );
        escape_xml_into(&mut out, &label.text);
        out.push_str("</text>\n");
    }

    out.push_str("</svg>\n");
    out
}

/// Three decimals at most, trailing zeros trimmed. Non-finite values print as `0`.
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let k = (v * 1000.0).round() as i64;
    if k == 0 {
        return "0".to_string();
    }
    let sign = if k < 0 { "-" } else { "" };
    let k = k.unsigned_abs();
    let (int, frac) = (k / 1000, k % 1000);
    if frac == 0 {
        return format!("{sign}{int}");
    }
    let frac = format!("{frac:03}");
    format!("{sign}{int}.{}", frac.trim_end_matches('0'))
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_xml_into(&mut out, text);
    out
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}
