// File: crates/easel-core/src/color.rs
// Summary: Color token parsing ("rgb(r, g, b)", "#rrggbb") and cyclic palette lookup.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// A color token resolved to its RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(255, self.r, self.g, self.b)
    }
}

/// Parse a color token in the forms the sample data uses:
/// `rgb(255, 99, 132)` (whitespace-insensitive) or `#rrggbb`.
pub fn parse(token: &str) -> Result<Rgb> {
    let s = token.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(token, hex);
    }
    let inner = s
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ChartError::InvalidColor {
            token: token.to_string(),
            reason: "expected rgb(...) or #rrggbb",
        })?;
    let mut parts = inner.split(',').map(str::trim);
    let mut component = || {
        parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(|| ChartError::InvalidColor {
                token: token.to_string(),
                reason: "component is not an integer in 0..=255",
            })
    };
    let (r, g, b) = (component()?, component()?, component()?);
    if parts.next().is_some() {
        return Err(ChartError::InvalidColor {
            token: token.to_string(),
            reason: "more than three components",
        });
    }
    Ok(Rgb::new(r, g, b))
}

fn parse_hex(token: &str, hex: &str) -> Result<Rgb> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ChartError::InvalidColor {
            token: token.to_string(),
            reason: "expected six hex digits",
        });
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    Ok(Rgb::new(byte(0), byte(2), byte(4)))
}

/// Token for category `index`, cycling when the list is shorter than the
/// category count. `None` for an empty list so callers can fall back to the
/// theme series color.
pub fn cycle(tokens: &[String], index: usize) -> Option<&str> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens[index % tokens.len()].as_str())
    }
}

/// Resolved Skia color for category `index`, with `fallback` covering the
/// empty-list case. Unparseable tokens are the engine-reported failure.
pub fn resolve_at(tokens: &[String], index: usize, fallback: skia::Color) -> Result<skia::Color> {
    match cycle(tokens, index) {
        Some(token) => Ok(parse(token)?.to_skia()),
        None => Ok(fallback),
    }
}
