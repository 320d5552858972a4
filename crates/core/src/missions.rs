//! Mission display colors.

/// Palette used for missions without a configured color, picked by position.
pub const FALLBACK_COLORS: &[&str] = &[
    "#EF4444", "#F97316", "#F59E0B", "#10B981", "#3B82F6", "#6366F1", "#8B5CF6", "#EC4899",
    "#F43F5E",
];

/// The mission's own color when set, otherwise the palette entry for `index`.
pub fn mission_color(color: Option<&str>, index: usize) -> &str {
    match color.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => FALLBACK_COLORS[index % FALLBACK_COLORS.len()],
    }
}

/// Parse `#RRGGBB` or `#RGB` into RGB components.
pub fn parse_hex_color(color: &str) -> Option<[u8; 3]> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?]),
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 16 + v;
            }
            Some(rgb)
        }
        _ => None,
    }
}

/// RGB accent for a mission: its own color when it parses, otherwise the
/// palette entry for `index`.
pub fn accent_rgb(color: Option<&str>, index: usize) -> [u8; 3] {
    color
        .and_then(parse_hex_color)
        .or_else(|| parse_hex_color(mission_color(None, index)))
        .unwrap_or([0, 0, 0])
}
