use crate::types::InvalidColor;

/// Normalize a hex color string to canonical 6-digit lowercase form
/// (no `#` prefix). Accepts 3- or 6-digit hex, case-insensitive, with
/// optional surrounding whitespace and one optional leading `#`.
/// 3-digit hex expands each digit: `abc` -> `aabbcc`.
/// Anything else is rejected — never a partial result.
pub fn normalize_hex(input: &str) -> Result<String, InvalidColor> {
    let trimmed = input.trim();
    let raw = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(InvalidColor::new(input));
    }
    match raw.len() {
        6 => Ok(raw.to_ascii_lowercase()),
        3 => {
            let expanded: String = raw.chars().flat_map(|c| [c, c]).collect();
            Ok(expanded.to_ascii_lowercase())
        }
        _ => Err(InvalidColor::new(input)),
    }
}

/// Parse a hex color string to RGB channels (0-255).
/// Normalizes first; malformed input propagates as `InvalidColor`.
pub fn parse_hex_rgb(input: &str) -> Result<(u8, u8, u8), InvalidColor> {
    let hex = normalize_hex(input)?;
    let channel = |lo: usize| {
        u8::from_str_radix(&hex[lo..lo + 2], 16).map_err(|_| InvalidColor::new(input))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}
