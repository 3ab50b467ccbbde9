//! Hex to OKLCH color conversion for stylesheet output.
//!
//! Brand colors arrive as CSS hex strings and leave as fixed-precision
//! `oklch(L C H)` strings ready to drop into a custom property. The
//! conversion follows the standard sRGB -> linear -> OKLab -> LCH pipeline.

// Allow intentional float math in the color space conversion
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

/// Fallback for malformed hex input: mid-gray at zero chroma.
pub const FALLBACK_OKLCH: &str = "oklch(0.5000 0 0)";

/// Chroma below this threshold is treated as achromatic; the hue of a
/// near-gray color is rounding noise and must not leak into output.
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Converts a CSS hex color to a fixed-precision OKLCH string.
///
/// Accepts `#RRGGBB` and `#RGB` (shorthand digits are duplicated), with or
/// without the leading `#`, case-insensitive. Lightness and chroma are
/// formatted with 4 decimal places, hue with 2.
///
/// Conversion is total: malformed input (wrong length, non-hex digits,
/// empty) yields [`FALLBACK_OKLCH`] instead of an error, so a typo in a
/// brand color degrades to neutral gray rather than failing a generation.
///
/// # Examples
///
/// ```
/// use brandforge::models::hex_to_oklch;
///
/// assert_eq!(hex_to_oklch("#000000"), "oklch(0.0000 0 0)");
/// assert_eq!(hex_to_oklch("#ffffff"), "oklch(1.0000 0 0)");
/// assert_eq!(hex_to_oklch("#ff0000"), "oklch(0.6280 0.2577 29.23)");
/// assert_eq!(hex_to_oklch("not-a-color"), "oklch(0.5000 0 0)");
/// ```
#[must_use]
pub fn hex_to_oklch(hex: &str) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return FALLBACK_OKLCH.to_string();
    };

    let r = srgb_to_linear(f64::from(r) / 255.0);
    let g = srgb_to_linear(f64::from(g) / 255.0);
    let b = srgb_to_linear(f64::from(b) / 255.0);

    // Linear sRGB -> OKLab (Ottosson's reference matrices).
    let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
    let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
    let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let lightness = 0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_;
    let a = 1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_;
    let b = 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_;

    let chroma = (a * a + b * b).sqrt();
    if chroma < ACHROMATIC_CHROMA {
        return format!("oklch({lightness:.4} 0 0)");
    }

    let mut hue = b.atan2(a).to_degrees();
    if hue < 0.0 {
        hue += 360.0;
    }
    // Round before formatting so a hue just under 360 wraps to 0.00
    // instead of printing as "360.00".
    hue = (hue * 100.0).round() / 100.0;
    if hue >= 360.0 {
        hue -= 360.0;
    }

    format!("oklch({lightness:.4} {chroma:.4} {hue:.2})")
}

/// Whether a string parses as a hex color, i.e. whether [`hex_to_oklch`]
/// would convert it rather than fall back.
#[must_use]
pub fn is_valid_hex(hex: &str) -> bool {
    parse_hex(hex).is_some()
}

/// Parses `#RRGGBB` / `#RGB` into byte channels. Returns `None` on any
/// malformed input; the caller decides how to degrade.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

/// sRGB transfer function, gamma-encoded channel to linear light.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
