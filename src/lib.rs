//! WCAG 2.0 color contrast: hex color pair in, contrast ratio and
//! AA/AAA pass-fail verdict out. Pure functions, no I/O, no state.

pub mod math;
pub mod types;

pub use math::checker::{check_contrast, evaluate};
pub use math::hex::{normalize_hex, parse_hex_rgb};
pub use math::wcag::{hex_luminance, relative_luminance};
pub use types::{Conformance, ContrastResult, InvalidColor, Lighter, WcagVerdict};
