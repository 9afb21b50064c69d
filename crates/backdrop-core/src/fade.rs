use crate::grid::LayoutMode;
use crate::policy::LayoutPolicy;

/// Layer opacity for the current scroll offset.
///
/// Narrow layouts fade the whole backdrop out over the first
/// `scroll_fade_distance` pixels of scroll on a `1 - r^exponent` curve; wide
/// layouts never fade.
pub fn scroll_fade_opacity(mode: LayoutMode, scroll_y: f64, policy: &LayoutPolicy) -> f64 {
    match mode {
        LayoutMode::Wide => 1.0,
        LayoutMode::Narrow => {
            if !scroll_y.is_finite() {
                return if scroll_y > 0.0 { 0.0 } else { 1.0 };
            }
            let ratio = (scroll_y.max(0.0) / policy.scroll_fade_distance).min(1.0);
            (1.0 - ratio.powf(policy.scroll_fade_exponent)).clamp(0.0, 1.0)
        }
    }
}
