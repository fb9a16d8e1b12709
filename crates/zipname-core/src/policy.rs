//! Rename policy: numbering style, counter width and prefix cleanup toggles.
//!
//! Raw host input (form fields, CLI flags, config values) is normalized here
//! once; nothing in this module rejects input, it falls back to defaults.

use serde::{Deserialize, Serialize};

/// Counter width used when digits are missing or not a number.
pub const DEFAULT_DIGITS: usize = 3;
/// Smallest allowed counter width.
pub const MIN_DIGITS: usize = 1;
/// Largest allowed counter width.
pub const MAX_DIGITS: usize = 10;
/// Prefix used when the requested one sanitizes to nothing.
pub const DEFAULT_PREFIX: &str = "file";

/// How the counter is embedded into each filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingStyle {
    /// `{prefix}{ext}`; counter omitted.
    None,
    /// `{prefix}_({n}){ext}`
    Paren,
    /// `{prefix}-{n}{ext}`
    Dash,
    /// `{prefix}_{n}{ext}`
    Underscore,
    /// `{prefix}_{n zero-padded}{ext}`
    #[default]
    Pad,
}

impl NumberingStyle {
    /// Case-insensitive lookup; missing or unrecognized names mean `Pad`.
    pub fn from_name(name: Option<&str>) -> Self {
        let name = name.map(|s| s.trim().to_ascii_lowercase());
        match name.as_deref() {
            Some("none") => NumberingStyle::None,
            Some("paren") => NumberingStyle::Paren,
            Some("dash") => NumberingStyle::Dash,
            Some("underscore") => NumberingStyle::Underscore,
            Some("pad") => NumberingStyle::Pad,
            other => {
                if let Some(unknown) = other.filter(|s| !s.is_empty()) {
                    tracing::debug!(style = unknown, "unknown numbering style, using pad");
                }
                NumberingStyle::Pad
            }
        }
    }
}

/// Prefix cleanup toggles. Applied in the fixed order spaces → symbols → lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleanupOptions {
    /// Collapse whitespace runs to `_`.
    pub spaces: bool,
    /// Drop everything except ASCII letters, digits, `_` and `-`.
    pub symbols: bool,
    /// Fold to lowercase.
    pub lowercase: bool,
}

impl CleanupOptions {
    /// Parses a comma-separated list such as `"spaces,lowercase"`.
    ///
    /// Tokens are trimmed and case-insensitive; unknown ones are ignored.
    pub fn parse(list: &str) -> Self {
        let mut opts = CleanupOptions::default();
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "spaces" => opts.spaces = true,
                "symbols" => opts.symbols = true,
                "lowercase" => opts.lowercase = true,
                _ => tracing::debug!(option = token, "ignoring unknown cleanup option"),
            }
        }
        opts
    }

    pub fn is_empty(&self) -> bool {
        !(self.spaces || self.symbols || self.lowercase)
    }
}

/// Digits as supplied by a host: a number from TOML/JSON or text from a form/flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DigitsInput {
    Number(i64),
    Text(String),
}

impl Default for DigitsInput {
    fn default() -> Self {
        DigitsInput::Number(DEFAULT_DIGITS as i64)
    }
}

/// Clamps a requested counter width into [1, 10].
pub fn clamp_digits(digits: i64) -> usize {
    digits.clamp(MIN_DIGITS as i64, MAX_DIGITS as i64) as usize
}

/// Resolves raw digits input to a clamped width.
///
/// Missing or non-numeric text gives 3. Integer text too large for `i64`
/// still counts as a number and clamps by sign.
pub fn parse_digits(raw: Option<&DigitsInput>) -> usize {
    match raw {
        None => DEFAULT_DIGITS,
        Some(DigitsInput::Number(n)) => clamp_digits(*n),
        Some(DigitsInput::Text(s)) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(n) => clamp_digits(n),
                Err(_) if is_integer_literal(s) => {
                    if s.starts_with('-') {
                        MIN_DIGITS
                    } else {
                        MAX_DIGITS
                    }
                }
                Err(_) => DEFAULT_DIGITS,
            }
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(|c| c == '+' || c == '-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Policy fields exactly as the host received them. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPolicy {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub numbering_style: Option<String>,
    #[serde(default)]
    pub digits: Option<DigitsInput>,
    /// Comma-separated cleanup options.
    #[serde(default)]
    pub cleanup: Option<String>,
}

impl RawPolicy {
    /// Fills fields missing from `self` with those of `fallback`.
    pub fn or(self, fallback: RawPolicy) -> RawPolicy {
        RawPolicy {
            prefix: self.prefix.or(fallback.prefix),
            numbering_style: self.numbering_style.or(fallback.numbering_style),
            digits: self.digits.or(fallback.digits),
            cleanup: self.cleanup.or(fallback.cleanup),
        }
    }
}

/// Normalized, read-only policy for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePolicy {
    /// Requested prefix, before sanitization.
    pub prefix: String,
    pub numbering_style: NumberingStyle,
    /// Counter width, always within [1, 10].
    pub digits: usize,
    pub cleanup: CleanupOptions,
}

impl Default for RenamePolicy {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            numbering_style: NumberingStyle::Pad,
            digits: DEFAULT_DIGITS,
            cleanup: CleanupOptions::default(),
        }
    }
}

impl RenamePolicy {
    /// Normalizes host input. Never fails.
    pub fn from_raw(raw: &RawPolicy) -> Self {
        Self {
            prefix: raw
                .prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            numbering_style: NumberingStyle::from_name(raw.numbering_style.as_deref()),
            digits: parse_digits(raw.digits.as_ref()),
            cleanup: raw
                .cleanup
                .as_deref()
                .map(CleanupOptions::parse)
                .unwrap_or_default(),
        }
    }
}
