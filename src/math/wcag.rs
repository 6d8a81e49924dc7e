use crate::types::InvalidColor;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.0.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance((r, g, b): (u8, u8, u8)) -> f64 {
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Relative luminance of a hex color string.
/// Malformed input propagates as `InvalidColor`.
pub fn hex_luminance(hex: &str) -> Result<f64, InvalidColor> {
    Ok(relative_luminance(super::hex::parse_hex_rgb(hex)?))
}

/// Calculate the WCAG contrast ratio between two luminances.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Determine pass/fail for all four WCAG thresholds.
/// Inclusivity is asymmetric per WCAG convention: AA normal and AAA large
/// require strictly more than 4.5, the others are inclusive.
pub fn check_wcag_thresholds(ratio: f64) -> WcagFlags {
    WcagFlags {
        pass_aa: ratio > 4.5,
        pass_aa_large: ratio >= 3.0,
        pass_aaa: ratio >= 7.0,
        pass_aaa_large: ratio > 4.5,
    }
}

pub struct WcagFlags {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}
