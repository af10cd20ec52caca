use crate::foundation::{
    error::{AvsError, AvsResult, TypeMismatchKind},
    value::Arg,
};

// Subset of the standard named-color table, as 0xRRGGBB.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xFFFFFF),
    ("red", 0xFF0000),
    ("green", 0x008000),
    ("lime", 0x00FF00),
    ("blue", 0x0000FF),
    ("yellow", 0xFFFF00),
    ("cyan", 0x00FFFF),
    ("aqua", 0x00FFFF),
    ("magenta", 0xFF00FF),
    ("fuchsia", 0xFF00FF),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("silver", 0xC0C0C0),
    ("darkgray", 0xA9A9A9),
    ("lightgray", 0xD3D3D3),
    ("maroon", 0x800000),
    ("olive", 0x808000),
    ("navy", 0x000080),
    ("purple", 0x800080),
    ("teal", 0x008080),
    ("orange", 0xFFA500),
    ("pink", 0xFFC0CB),
    ("brown", 0xA52A2A),
    ("gold", 0xFFD700),
    ("violet", 0xEE82EE),
    ("indigo", 0x4B0082),
    ("coral", 0xFF7F50),
    ("salmon", 0xFA8072),
    ("khaki", 0xF0E68C),
    ("crimson", 0xDC143C),
    ("turquoise", 0x40E0D0),
    ("skyblue", 0x87CEEB),
    ("darkblue", 0x00008B),
    ("darkred", 0x8B0000),
    ("darkgreen", 0x006400),
];

/// Serialize a color argument as a `$RRGGBB` (or `$AARRGGBB`) literal.
///
/// Accepts an integer in `0..=0xFFFFFFFF`, a color name (optionally prefixed `color_`) or
/// hex text in the forms `0xRRGGBB`, `$RRGGBB`, `#RGB`, `#RRGGBB` and `#AARRGGBB`.
pub fn parse_color(value: &Arg) -> AvsResult<String> {
    let invalid = || AvsError::type_mismatch(TypeMismatchKind::Color, value.to_string(), "c");
    let rgb = match value {
        Arg::Number(n) => {
            if !n.is_finite() || n.fract() != 0.0 || *n < 0.0 || *n > f64::from(u32::MAX) {
                return Err(invalid());
            }
            *n as u32
        }
        Arg::Text(s) => parse_color_text(s).ok_or_else(invalid)?,
        Arg::Bool(_) | Arg::Unset => return Err(invalid()),
    };
    Ok(color_literal(rgb))
}

fn color_literal(argb: u32) -> String {
    if argb > 0xFF_FFFF {
        format!("${argb:08X}")
    } else {
        format!("${argb:06X}")
    }
}

fn parse_color_text(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return match hex.len() {
            3 => {
                let short = parse_hex(hex)?;
                let (r, g, b) = ((short >> 8) & 0xF, (short >> 4) & 0xF, short & 0xF);
                Some(((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11))
            }
            6 | 8 => parse_hex(hex),
            _ => None,
        };
    }
    if let Some(hex) = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'))
    {
        return match hex.len() {
            1..=8 => parse_hex(hex),
            _ => None,
        };
    }

    let lower = s.to_ascii_lowercase();
    let name = lower.strip_prefix("color_").unwrap_or(&lower);
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<u32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/modifier/color.rs"]
mod tests;
