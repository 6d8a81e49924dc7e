use serde::Serialize;
use thiserror::Error;

/// A hex color string that failed normalization: wrong length, non-hex
/// characters, or empty after trimming. The offending input is kept so
/// callers checking two colors can tell which one was bad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color: {input:?}")]
pub struct InvalidColor {
    pub input: String,
}

impl InvalidColor {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Which of the two colors passed to `check_contrast` has the higher
/// relative luminance. Positional: `Foreground` means the first argument
/// (ties go to the first argument).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lighter {
    Foreground,
    Background,
}

/// Contrast between a foreground/background color pair.
/// `ratio` is rounded to 2 decimal places, luminances to 4.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub foreground_luminance: f64,
    pub background_luminance: f64,
    pub lighter: Lighter,
}

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conformance {
    Aa,
    Aaa,
}

/// Pass/fail verdict for a color pair against all four WCAG thresholds.
///
/// Flags are computed from the 2-decimal rounded `ratio`, so a reported
/// ratio of exactly 4.50 fails `pass_aa` (strict `>` per WCAG).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WcagVerdict {
    pub ratio: f64,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
    pub foreground_luminance: f64,
    pub background_luminance: f64,
    pub lighter: Lighter,
}

impl WcagVerdict {
    /// Select the one flag relevant for a target conformance level and
    /// text size.
    pub fn passes(&self, level: Conformance, large_text: bool) -> bool {
        match (level, large_text) {
            (Conformance::Aa, false) => self.pass_aa,
            (Conformance::Aa, true) => self.pass_aa_large,
            (Conformance::Aaa, false) => self.pass_aaa,
            (Conformance::Aaa, true) => self.pass_aaa_large,
        }
    }
}
