use rustc_hash::FxHashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Color = Color::rgb(0, 0, 0);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `#rgb` or one of the few CSS names the palette uses.
    #[cfg(test)]
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => return Some(BLACK),
            "white" => return Some(Color::rgb(255, 255, 255)),
            "gray" | "grey" => return Some(Color::rgb(128, 128, 128)),
            "pink" => return Some(Color::rgb(255, 192, 203)),
            _ => {}
        }
        let hex = s.strip_prefix('#').filter(|h| h.is_ascii())?;
        let channel = |h: &str| u8::from_str_radix(h, 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Some(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        }
    }

    /// Each channel scaled by `0.7^k`.
    pub fn darker(self, k: f64) -> Self {
        let f = 0.7_f64.powf(k);
        let scale = |c: u8| (c as f64 * f).round().clamp(0.0, 255.0) as u8;
        Color::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordinal `group -> fill` scale.
///
/// Groups outside the configured domain are appended on first use and cycle through the range.
#[derive(Debug, Clone)]
pub struct Palette {
    range: Vec<Color>,
    mapping: FxHashMap<String, usize>,
    next: usize,
}

impl Default for Palette {
    fn default() -> Self {
        const DOMAIN: [(&str, Color); 9] = [
            ("ps", Color::rgb(255, 192, 203)),
            ("medium", Color::rgb(128, 128, 128)),
            ("cd", Color::rgb(0x7a, 0xa2, 0xff)),
            ("d", Color::rgb(0x18, 0x15, 0x7e)),
            ("g", Color::rgb(0xd8, 0x4b, 0x2a)),
            ("cab", Color::rgb(0x7e, 0x19, 0x9b)),
            ("verts", Color::rgb(0x52, 0x9f, 0x5b)),
            ("lepen", Color::rgb(255, 255, 255)),
            ("caca", Color::rgb(0x6d, 0x5f, 0x11)),
        ];
        Self::new(DOMAIN.iter().map(|(g, c)| (g.to_string(), *c)))
    }
}

impl Palette {
    pub fn new(domain: impl IntoIterator<Item = (String, Color)>) -> Self {
        let mut range = Vec::new();
        let mut mapping = FxHashMap::default();
        for (i, (group, color)) in domain.into_iter().enumerate() {
            mapping.insert(group, i);
            range.push(color);
        }
        let next = range.len();
        Self {
            range,
            mapping,
            next,
        }
    }

    pub fn fill(&mut self, group: &str) -> Color {
        if self.range.is_empty() {
            return Color::rgb(128, 128, 128);
        }
        let idx = match self.mapping.get(group) {
            Some(idx) => *idx,
            None => {
                let idx = self.next;
                self.next += 1;
                self.mapping.insert(group.to_string(), idx);
                idx
            }
        };
        self.range[idx % self.range.len()]
    }

    /// Outline of a bubble filled with `fill`.
    pub fn stroke(fill: Color) -> Color {
        fill.darker(1.0)
    }
}
