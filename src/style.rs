// Inline style and class formatting for icon nodes. Kept free of web-sys so
// the host tests can include it directly.

use backdrop_core::{DecorationItem, LayoutMode};

#[inline]
pub fn icon_class(mode: LayoutMode) -> String {
    let variant = match mode {
        LayoutMode::Wide => crate::constants::ICON_SPIN_CLASS,
        LayoutMode::Narrow => crate::constants::ICON_RAIN_CLASS,
    };
    format!("{} {}", crate::constants::ICON_CLASS, variant)
}

/// Inline style for one icon: position, opacity and the animation timing
/// that applies in `mode`.
pub fn icon_style(item: &DecorationItem, mode: LayoutMode) -> String {
    let (duration, delay) = item.animation_timing.for_mode(mode);
    format!(
        "left:{}px;top:{}px;opacity:{};animation-duration:{}s;animation-delay:{}s",
        fmt_num(item.position.x),
        fmt_num(item.position.y),
        fmt_num(item.opacity),
        fmt_num(duration),
        fmt_num(delay),
    )
}

/// Opacity value for the whole layer.
#[inline]
pub fn layer_opacity(opacity: f64) -> String {
    fmt_num(opacity.clamp(0.0, 1.0))
}

/// Fixed precision with trailing zeros trimmed, so `63.0` prints as `63`.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.*}", crate::constants::STYLE_PRECISION, v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
