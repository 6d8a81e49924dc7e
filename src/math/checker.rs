use crate::types::{ContrastResult, InvalidColor, Lighter, WcagVerdict};

/// Compute the contrast between a foreground/background hex pair.
///
/// The reported `ratio` is rounded to 2 decimal places and the luminances
/// to 4; both roundings are part of the contract, not presentation.
/// Either color failing to parse fails the whole call.
pub fn check_contrast(fg_hex: &str, bg_hex: &str) -> Result<ContrastResult, InvalidColor> {
    let lum_fg = super::wcag::hex_luminance(fg_hex)?;
    let lum_bg = super::wcag::hex_luminance(bg_hex)?;

    let ratio_raw = super::wcag::contrast_ratio(lum_fg, lum_bg);
    let lighter = if lum_fg >= lum_bg {
        Lighter::Foreground
    } else {
        Lighter::Background
    };

    Ok(ContrastResult {
        ratio: (ratio_raw * 100.0).round() / 100.0,
        foreground_luminance: (lum_fg * 10000.0).round() / 10000.0,
        background_luminance: (lum_bg * 10000.0).round() / 10000.0,
        lighter,
    })
}

/// Check a foreground/background hex pair against all four WCAG thresholds.
///
/// Thresholds are applied to the rounded ratio, so a raw ratio of 4.496
/// reports as 4.50 and still fails AA normal (strict `>` at 4.5).
pub fn evaluate(fg_hex: &str, bg_hex: &str) -> Result<WcagVerdict, InvalidColor> {
    let contrast = check_contrast(fg_hex, bg_hex)?;
    let flags = super::wcag::check_wcag_thresholds(contrast.ratio);

    Ok(WcagVerdict {
        ratio: contrast.ratio,
        pass_aa: flags.pass_aa,
        pass_aa_large: flags.pass_aa_large,
        pass_aaa: flags.pass_aaa,
        pass_aaa_large: flags.pass_aaa_large,
        foreground_luminance: contrast.foreground_luminance,
        background_luminance: contrast.background_luminance,
        lighter: contrast.lighter,
    })
}
