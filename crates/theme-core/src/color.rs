//! HSL and hex color conversion
//!
//! Theme colors are stored as HSL triplet strings (`"270 85% 60%"`); hex
//! (`"#9942f0"`) is the interchange form for color-picker controls. The two
//! conversions here are the adapter between those representations.
//!
//! Malformed or out-of-range input is rejected with a [`ColorError`] rather
//! than clamped: hue must lie in [0, 360) (so `360` is rejected and `0` is the
//! canonical spelling of that hue), saturation and lightness in [0, 100].
//!
//! # Precision
//!
//! Hex is the lower-precision form. Promoting a hex color to HSL rounds hue to
//! whole degrees and saturation/lightness to whole percent, so demoting it
//! back to hex can drift: at most ±5 per channel across the full 24-bit space,
//! ±1 on grays, and exact on fully saturated hues and the web-palette grid.

use std::fmt;
use thiserror::Error;

/// Errors from color parsing and conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not an `"H S% L%"` triplet
    #[error("Malformed HSL triplet: {0:?}")]
    MalformedHsl(String),

    /// Triplet parsed, but a component is outside its range
    #[error("HSL component out of range: {0:?}")]
    OutOfRange(String),

    /// Input is not a 6-digit hex color
    #[error("Malformed hex color: {0:?}")]
    MalformedHex(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// A parsed HSL triplet
///
/// Components keep their human-facing units: `h` in degrees [0, 360),
/// `s` and `l` in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation in percent, [0, 100]
    pub s: f64,
    /// Lightness in percent, [0, 100]
    pub l: f64,
}

impl Hsl {
    /// Create a triplet, validating ranges
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self> {
        let hsl = Self { h, s, l };
        hsl.check_range()?;
        Ok(hsl)
    }

    /// Parse an `"H S% L%"` triplet string
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || ColorError::MalformedHsl(input.to_string());

        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(malformed());
        }

        let h: f64 = tokens[0].parse().map_err(|_| malformed())?;
        let s: f64 = tokens[1]
            .strip_suffix('%')
            .ok_or_else(|| malformed())?
            .parse()
            .map_err(|_| malformed())?;
        let l: f64 = tokens[2]
            .strip_suffix('%')
            .ok_or_else(|| malformed())?
            .parse()
            .map_err(|_| malformed())?;

        let hsl = Self { h, s, l };
        hsl.check_range()
            .map_err(|_| ColorError::OutOfRange(input.to_string()))?;
        Ok(hsl)
    }

    fn check_range(&self) -> Result<()> {
        let in_range = self.h.is_finite()
            && self.s.is_finite()
            && self.l.is_finite()
            && (0.0..360.0).contains(&self.h)
            && (0.0..=100.0).contains(&self.s)
            && (0.0..=100.0).contains(&self.l);
        if in_range {
            Ok(())
        } else {
            Err(ColorError::OutOfRange(self.to_string()))
        }
    }

    /// Convert to a `#rrggbb` hex string
    pub fn to_hex(&self) -> String {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        // Standard hextant table over 60° sectors of [0, 360).
        let (r, g, b) = match self.h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            h if h < 360.0 => (c, 0.0, x),
            _ => (0.0, 0.0, 0.0),
        };

        let channel = |v: f64| ((v + m) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

impl std::str::FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Convert an `"H S% L%"` triplet string to a `#rrggbb` hex string
pub fn hsl_to_hex(hsl: &str) -> Result<String> {
    Ok(Hsl::parse(hsl)?.to_hex())
}

/// Parse a 6-digit hex color (leading `#` optional) into RGB channels
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8)> {
    let malformed = || ColorError::MalformedHex(hex.to_string());

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(malformed());
    }

    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| malformed())?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| malformed())?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| malformed())?;
    Ok((r, g, b))
}

/// Convert a `#rrggbb` hex string to an `"H S% L%"` triplet string
///
/// Hue is rounded to the nearest degree and reduced mod 360, saturation and
/// lightness to the nearest percent, so the output always re-parses.
pub fn hex_to_hsl(hex: &str) -> Result<String> {
    let (r, g, b) = parse_hex(hex)?;
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0) // achromatic
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    let h = (h * 360.0).round() as u32 % 360;
    let s = (s * 100.0).round() as u32;
    let l = (l * 100.0).round() as u32;
    Ok(format!("{} {}% {}%", h, s, l))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Parsing Tests
    // ==========================================================================

    #[test]
    fn test_parse_hsl() {
        let hsl = Hsl::parse("270 85% 60%").unwrap();
        assert_eq!(hsl, Hsl { h: 270.0, s: 85.0, l: 60.0 });

        let hsl = Hsl::parse("0 0% 100%").unwrap();
        assert_eq!(hsl, Hsl { h: 0.0, s: 0.0, l: 100.0 });

        // Fractional components are allowed.
        let hsl = Hsl::parse("210.5 33.3% 50%").unwrap();
        assert_eq!(hsl.h, 210.5);
    }

    #[test]
    fn test_parse_hsl_malformed() {
        for input in [
            "",
            "270",
            "270 85%",
            "270 85% 60% extra",
            "abc 85% 60%",
            "270 85 60",      // missing % suffixes
            "270 85% sixty%",
        ] {
            assert_eq!(
                Hsl::parse(input),
                Err(ColorError::MalformedHsl(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_hsl_out_of_range() {
        // Out-of-range components are rejected, not clamped.
        for input in ["360 85% 60%", "-10 85% 60%", "270 101% 60%", "270 -1% 60%", "270 85% 120%", "NaN 85% 60%"] {
            assert!(
                matches!(Hsl::parse(input), Err(ColorError::OutOfRange(_)) | Err(ColorError::MalformedHsl(_))),
                "input {:?}",
                input
            );
        }
        assert_eq!(
            Hsl::parse("360 85% 60%"),
            Err(ColorError::OutOfRange("360 85% 60%".to_string()))
        );
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ffffff"), Ok((255, 255, 255)));
        assert_eq!(parse_hex("#000000"), Ok((0, 0, 0)));
        assert_eq!(parse_hex("9942f0"), Ok((153, 66, 240)));
        assert_eq!(parse_hex("#9D4EDD"), Ok((157, 78, 221)));
    }

    #[test]
    fn test_parse_hex_malformed() {
        for input in ["", "#fff", "#fffffff", "#gggggg", "#ffff f", "#ааяяяя"] {
            assert_eq!(
                parse_hex(input),
                Err(ColorError::MalformedHex(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    // ==========================================================================
    // HSL → Hex Tests
    // ==========================================================================

    #[test]
    fn test_hsl_to_hex_boundary_hues() {
        // Pure and secondary colors at full saturation, half lightness.
        assert_eq!(hsl_to_hex("0 100% 50%").unwrap(), "#ff0000");
        assert_eq!(hsl_to_hex("60 100% 50%").unwrap(), "#ffff00");
        assert_eq!(hsl_to_hex("120 100% 50%").unwrap(), "#00ff00");
        assert_eq!(hsl_to_hex("180 100% 50%").unwrap(), "#00ffff");
        assert_eq!(hsl_to_hex("240 100% 50%").unwrap(), "#0000ff");
        assert_eq!(hsl_to_hex("300 100% 50%").unwrap(), "#ff00ff");
    }

    #[test]
    fn test_hsl_to_hex_brand_colors() {
        assert_eq!(hsl_to_hex("270 85% 60%").unwrap(), "#9942f0");
        assert_eq!(hsl_to_hex("210 100% 60%").unwrap(), "#3399ff");
        assert_eq!(hsl_to_hex("190 100% 65%").unwrap(), "#4de1ff");
        assert_eq!(hsl_to_hex("320 85% 65%").unwrap(), "#f25abf");
    }

    #[test]
    fn test_hsl_to_hex_grayscale() {
        // S=0 collapses to gray regardless of hue: all channels round(L·255).
        for h in [0.0, 90.0, 210.0, 359.0] {
            for (l, expected) in [(0.0, "#000000"), (50.0, "#808080"), (100.0, "#ffffff")] {
                let hex = Hsl { h, s: 0.0, l }.to_hex();
                assert_eq!(hex, expected, "h={} l={}", h, l);
            }
        }
    }

    #[test]
    fn test_hsl_to_hex_extremes() {
        assert_eq!(hsl_to_hex("0 100% 0%").unwrap(), "#000000");
        assert_eq!(hsl_to_hex("0 100% 100%").unwrap(), "#ffffff");
        assert_eq!(hsl_to_hex("359 100% 50%").unwrap(), "#ff0004");
    }

    // ==========================================================================
    // Hex → HSL Tests
    // ==========================================================================

    #[test]
    fn test_hex_to_hsl_known_values() {
        assert_eq!(hex_to_hsl("#ff0000").unwrap(), "0 100% 50%");
        assert_eq!(hex_to_hsl("#00ff00").unwrap(), "120 100% 50%");
        assert_eq!(hex_to_hsl("#0000ff").unwrap(), "240 100% 50%");
        assert_eq!(hex_to_hsl("#0080ff").unwrap(), "210 100% 50%");
        assert_eq!(hex_to_hsl("#9942f0").unwrap(), "270 85% 60%");
    }

    #[test]
    fn test_hex_to_hsl_achromatic() {
        assert_eq!(hex_to_hsl("#000000").unwrap(), "0 0% 0%");
        assert_eq!(hex_to_hsl("#808080").unwrap(), "0 0% 50%");
        assert_eq!(hex_to_hsl("#ffffff").unwrap(), "0 0% 100%");
    }

    #[test]
    fn test_hex_to_hsl_hue_wraps_to_zero() {
        // A hue that rounds up to 360° is emitted as 0° so the output
        // stays parseable.
        assert_eq!(hex_to_hsl("#ff0001").unwrap(), "0 100% 50%");
    }

    // ==========================================================================
    // Round-Trip Tests
    // ==========================================================================

    fn roundtrip_deviation(r: u8, g: u8, b: u8) -> u8 {
        let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
        let back = hsl_to_hex(&hex_to_hsl(&hex).unwrap()).unwrap();
        let (r2, g2, b2) = parse_hex(&back).unwrap();
        (r.abs_diff(r2)).max(g.abs_diff(g2)).max(b.abs_diff(b2))
    }

    #[test]
    fn test_roundtrip_web_palette_exact() {
        // The 6×6×6 web palette survives hex→HSL→hex exactly.
        let steps = [0u8, 51, 102, 153, 204, 255];
        for r in steps {
            for g in steps {
                for b in steps {
                    assert_eq!(roundtrip_deviation(r, g, b), 0, "#{:02x}{:02x}{:02x}", r, g, b);
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_hue_wheel_exact() {
        // Fully saturated hues survive exactly: S and L are already whole
        // percent values, so only hue rounding applies, and that is exact
        // for whole-degree inputs.
        for h in 0..360 {
            let hex = Hsl { h: f64::from(h), s: 100.0, l: 50.0 }.to_hex();
            assert_eq!(hsl_to_hex(&hex_to_hsl(&hex).unwrap()).unwrap(), hex, "h={}", h);
        }
    }

    #[test]
    fn test_roundtrip_grays_within_one() {
        for v in 0..=255u8 {
            assert!(roundtrip_deviation(v, v, v) <= 1, "gray {}", v);
        }
    }

    #[test]
    fn test_roundtrip_grid_within_quantization_bound() {
        // Whole-degree/whole-percent quantization bounds the drift at ±3 per
        // channel on this grid (±5 over the full 24-bit space).
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let dev = roundtrip_deviation(r as u8, g as u8, b as u8);
                    assert!(dev <= 3, "#{:02x}{:02x}{:02x} deviated by {}", r, g, b, dev);
                }
            }
        }
    }

    // ==========================================================================
    // Display Tests
    // ==========================================================================

    #[test]
    fn test_hsl_display_roundtrip() {
        for input in ["270 85% 60%", "0 0% 0%", "359.5 12.5% 99%"] {
            let hsl = Hsl::parse(input).unwrap();
            assert_eq!(hsl.to_string(), input);
            assert_eq!(Hsl::parse(&hsl.to_string()).unwrap(), hsl);
        }
    }
}
