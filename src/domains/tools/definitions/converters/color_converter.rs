//! Color converter tool definition.
//!
//! Accepts a color as HEX (`#3b82f6`, `3b8`), `rgb(r, g, b)` or
//! `hsl(h, s%, l%)` and prints it in all three notations.

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolCategory, ToolError, ToolModule, ToolRequest};

/// Color converter tool - HEX, RGB and HSL.
#[derive(Debug, Default)]
pub struct ColorConverterTool;

impl ToolDefinition for ColorConverterTool {
    const ID: &'static str = "color-converter";
    const NAME: &'static str = "Color Converter";
    const DESCRIPTION: &'static str = "Convert colors between HEX, RGB and HSL";
    const CATEGORY: ToolCategory = ToolCategory::Converters;
    const ICON: &'static str = "🎨";
    const TAGS: &'static [&'static str] = &["color", "hex", "rgb", "hsl", "css"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    pub fn from_hex(hex: &str) -> Option<Self> {
        let clean = hex.trim().trim_start_matches('#');
        let full: String = match clean.len() {
            3 => clean.chars().flat_map(|c| [c, c]).collect(),
            6 => clean.to_string(),
            _ => return None,
        };
        if !full.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&full[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        );
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Hsl {
                h: 0,
                s: 0,
                l: (l * 100.0).round() as u8,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        Hsl {
            h: ((h * 360.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h % 360);
        let s = f64::from(self.s.min(100)) / 100.0;
        let l = f64::from(self.l.min(100)) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

/// Parse the numbers inside `prefix(...)`, ignoring `%` signs.
fn parse_function<const N: usize>(input: &str, prefix: &str) -> Option<[u16; N]> {
    let inner = input
        .strip_prefix(prefix)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    let values: Vec<u16> = inner
        .split(',')
        .map(|part| part.trim().trim_end_matches('%').parse().ok())
        .collect::<Option<_>>()?;
    values.try_into().ok()
}

/// Parse any supported notation.
pub fn parse(input: &str) -> Result<Rgb, ToolError> {
    let lower = input.trim().to_ascii_lowercase();
    let invalid = || {
        ToolError::invalid_input(format!(
            "Could not parse \"{}\" as a color (use #rrggbb, rgb(r, g, b) or hsl(h, s%, l%))",
            input.trim()
        ))
    };

    if let Some([r, g, b]) = parse_function::<3>(&lower, "rgb") {
        let channel = |v: u16| u8::try_from(v).map_err(|_| invalid());
        return Ok(Rgb {
            r: channel(r)?,
            g: channel(g)?,
            b: channel(b)?,
        });
    }
    if let Some([h, s, l]) = parse_function::<3>(&lower, "hsl") {
        if h > 360 || s > 100 || l > 100 {
            return Err(invalid());
        }
        return Ok(Hsl {
            h,
            s: s as u8,
            l: l as u8,
        }
        .to_rgb());
    }
    Rgb::from_hex(&lower).ok_or_else(invalid)
}

impl ToolModule for ColorConverterTool {
    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let rgb = parse(&request.input)?;
        let hsl = rgb.to_hsl();
        Ok(format!(
            "HEX: {}\nRGB: rgb({}, {}, {})\nHSL: hsl({}, {}%, {}%)",
            rgb.to_hex(),
            rgb.r,
            rgb.g,
            rgb.b,
            hsl.h,
            hsl.s,
            hsl.l
        ))
    }
}
