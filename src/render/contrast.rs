//! Label contrast: dark text on light tokens, light text otherwise

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_COLOR;

/// Luminance above which a token counts as light
pub const LIGHT_THRESHOLD: f64 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Foreground {
    Dark,
    Light,
}

impl Foreground {
    pub fn css(&self) -> &'static str {
        match self {
            Foreground::Dark => "#111827",
            Foreground::Light => "rgba(255,255,255,.95)",
        }
    }
}

/// Red, green and blue read from the first three character pairs after the
/// first `#`. Each pair is read like a lenient integer parse: leading
/// whitespace, an optional sign and `0x` are skipped, then the longest run of
/// hex digits is taken, so `#fffffg` reads as `[255, 255, 15]`. `None` if any
/// pair holds no digits.
pub fn rgb_channels(color: &str) -> Option<[f64; 3]> {
    let color = if color.is_empty() { DEFAULT_COLOR } else { color };
    let hex: Vec<char> = color.replacen('#', "", 1).chars().collect();
    let pair = |i: usize| -> Option<f64> {
        let s: String = hex.iter().skip(i).take(2).collect();
        hex_prefix(&s)
    };
    Some([pair(0)?, pair(2)?, pair(4)?])
}

fn hex_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (sign, s) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(s.len());
    let value = u32::from_str_radix(&s[..end], 16).ok()?;
    Some(sign * value as f64)
}

/// Rough perceived brightness on a 0-255 scale
pub fn luminance([r, g, b]: [f64; 3]) -> f64 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Colours without three readable channels get light text
pub fn foreground_for(color: &str) -> Foreground {
    match rgb_channels(color) {
        Some(rgb) if luminance(rgb) > LIGHT_THRESHOLD => Foreground::Dark,
        _ => Foreground::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_channels() {
        assert_eq!(rgb_channels("#8ab4f8"), Some([138.0, 180.0, 248.0]));
        assert_eq!(rgb_channels("FFFFFF"), Some([255.0, 255.0, 255.0]));
        assert_eq!(rgb_channels("#11223344"), Some([17.0, 34.0, 51.0]));
        assert_eq!(rgb_channels("#12345g"), Some([18.0, 52.0, 5.0]));
        assert_eq!(rgb_channels("#abc"), None);
        assert_eq!(rgb_channels("red"), None);
        assert_eq!(rgb_channels("##ffffff"), None);
        assert_eq!(rgb_channels("#0x0000"), None);
        assert_eq!(rgb_channels("#ff-fff"), Some([255.0, -15.0, 255.0]));
    }

    #[test]
    fn test_empty_colour_reads_as_default() {
        assert_eq!(rgb_channels(""), rgb_channels(DEFAULT_COLOR));
    }

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance([0.0, 0.0, 0.0]), 0.0);
        assert!((luminance([255.0, 255.0, 255.0]) - 255.0).abs() < 1e-9);
        assert!((luminance([0.0, 255.0, 0.0]) - 0.7152 * 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_pairs_read_their_digit_prefix() {
        // Last pair "fg" reads as 15
        assert_eq!(foreground_for("#fffffg"), Foreground::Dark);
        assert_eq!(foreground_for("#ffffff0"), Foreground::Dark);
        // Leading space before the first pair is skipped
        assert_eq!(foreground_for(" #ffffff"), Foreground::Dark);
    }

    #[test]
    fn test_default_token_colour_gets_dark_text() {
        // 0.2126*138 + 0.7152*180 + 0.0722*248 ≈ 176
        assert_eq!(foreground_for("#8ab4f8"), Foreground::Dark);
    }

    #[test]
    fn test_palette_contrast() {
        assert_eq!(foreground_for("#5eead4"), Foreground::Dark);
        assert_eq!(foreground_for("#a78bfa"), Foreground::Light);
        assert_eq!(foreground_for("#f472b6"), Foreground::Light);
        assert_eq!(foreground_for("#fbbf24"), Foreground::Dark);
    }

    #[test]
    fn test_greys_either_side_of_threshold() {
        assert_eq!(foreground_for("#9f9f9f"), Foreground::Light);
        assert_eq!(foreground_for("#a1a1a1"), Foreground::Dark);
    }

    #[test]
    fn test_unparsable_is_light() {
        assert_eq!(foreground_for("white"), Foreground::Light);
        assert_eq!(foreground_for("#fff"), Foreground::Light);
    }
}
