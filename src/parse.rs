//! Color-string parsing.
//!
//! Accepts the two grammars the picker encounters in practice: hex
//! literals (`#rrggbb`, `#rgb`, leading `#` optional) and `rgb(r,g,b)` /
//! `rgba(r,g,b,a)` function literals (alpha is ignored). Anything else is
//! an [`ColorError::InvalidFormat`] error; callers are expected to fall
//! back to a default color rather than crash the UI.

use crate::color::Rgb;
use crate::error::ColorError;

/// Parse a hex or rgb()/rgba() color string into an RGB triple.
///
/// The rgb()/rgba() form is tried first: up to three comma-separated
/// numbers between the parentheses are extracted, and if exactly three
/// parse they are used directly as R,G,B (rounded and clamped to 0-255).
/// Otherwise the whole string is treated as hex, with 3-digit shorthand
/// expanded by doubling each digit (`abc` becomes `aabbcc`).
///
/// # Errors
/// Returns [`ColorError::InvalidFormat`] if neither grammar matches.
pub fn parse_color(s: &str) -> Result<Rgb, ColorError> {
    let trimmed = s.trim();

    if let Some(rgb) = parse_rgb_literal(trimmed) {
        return Ok(rgb);
    }

    parse_hex(trimmed).ok_or_else(|| ColorError::InvalidFormat {
        input: s.to_string(),
    })
}

/// Extract R,G,B from an `rgb(...)`/`rgba(...)` literal, if present.
fn parse_rgb_literal(s: &str) -> Option<Rgb> {
    let open = s.find('(')?;
    let close = s.rfind(')')?;
    if close < open {
        return None;
    }

    let components: Vec<u8> = s[open + 1..close]
        .split(',')
        .take(3)
        .filter_map(|part| part.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .map(|n| n.round().clamp(0.0, 255.0) as u8)
        .collect();

    match components[..] {
        [red, green, blue] => Some(Rgb { red, green, blue }),
        _ => None,
    }
}

/// Parse a 3- or 6-digit hex literal with optional leading `#`.
fn parse_hex(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.is_ascii() {
        return None;
    }

    let expanded;
    let digits = match digits.len() {
        3 => {
            // Shorthand: double each digit.
            expanded = digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>();
            expanded.as_str()
        }
        6 => digits,
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    Some(Rgb {
        red: channel(0)?,
        green: channel(2)?,
        blue: channel(4)?,
    })
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}
