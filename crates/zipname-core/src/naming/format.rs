//! Numbered filename rendering.

use crate::policy::{clamp_digits, NumberingStyle};

/// Renders `{prefix}{counter}{ext}` according to `style`.
///
/// `digits` is clamped to [1, 10] and only matters for [`NumberingStyle::Pad`];
/// counters wider than `digits` are printed in full.
///
/// # Examples
///
/// - `format_name("a", ".txt", 5, NumberingStyle::Pad, 3)` → `"a_005.txt"`
/// - `format_name("a", ".txt", 5, NumberingStyle::Paren, 3)` → `"a_(5).txt"`
/// - `format_name("a", ".txt", 5, NumberingStyle::None, 3)` → `"a.txt"`
pub fn format_name(
    prefix: &str,
    ext: &str,
    counter: u64,
    style: NumberingStyle,
    digits: i64,
) -> String {
    let width = clamp_digits(digits);
    match style {
        NumberingStyle::None => format!("{prefix}{ext}"),
        NumberingStyle::Paren => format!("{prefix}_({counter}){ext}"),
        NumberingStyle::Dash => format!("{prefix}-{counter}{ext}"),
        NumberingStyle::Underscore => format!("{prefix}_{counter}{ext}"),
        NumberingStyle::Pad => format!("{prefix}_{counter:0width$}{ext}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_zero_fills_to_digits() {
        assert_eq!(format_name("a", ".txt", 5, NumberingStyle::Pad, 3), "a_005.txt");
        assert_eq!(format_name("img", "", 42, NumberingStyle::Pad, 4), "img_0042");
    }

    #[test]
    fn pad_clamps_digits() {
        assert_eq!(format_name("a", ".txt", 5, NumberingStyle::Pad, 0), "a_5.txt");
        assert_eq!(format_name("a", ".txt", 5, NumberingStyle::Pad, -7), "a_5.txt");
        assert_eq!(
            format_name("a", ".txt", 5, NumberingStyle::Pad, 20),
            "a_0000000005.txt"
        );
    }

    #[test]
    fn pad_does_not_truncate_wide_counters() {
        assert_eq!(format_name("a", ".txt", 12345, NumberingStyle::Pad, 2), "a_12345.txt");
    }

    #[test]
    fn none_ignores_counter() {
        assert_eq!(format_name("a", ".txt", 2, NumberingStyle::None, 3), "a.txt");
    }

    #[test]
    fn other_styles() {
        assert_eq!(format_name("a", ".txt", 7, NumberingStyle::Paren, 3), "a_(7).txt");
        assert_eq!(format_name("a", ".txt", 7, NumberingStyle::Dash, 3), "a-7.txt");
        assert_eq!(format_name("a", ".txt", 7, NumberingStyle::Underscore, 3), "a_7.txt");
    }

    #[test]
    fn style_names_fall_back_to_pad() {
        let style = NumberingStyle::from_name(Some("pad-dot"));
        assert_eq!(format_name("a", ".txt", 1, style, 3), "a_001.txt");
    }
}
