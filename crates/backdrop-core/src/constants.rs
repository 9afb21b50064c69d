// Layout tuning constants shared by the web and native frontends.

// Seed and content column
pub const DEFAULT_SEED: i32 = 123_456; // fixed so every page load draws the same backdrop
pub const CONTENT_MAX_WIDTH: i32 = 1280; // max width of the main content column (px)

// Grid
pub const NARROW_BREAKPOINT: i32 = 1024; // widths below this use the narrow layout
pub const NARROW_CELL_SIZE: i32 = 40;
pub const WIDE_CELL_SIZE: i32 = 50;
pub const ICON_SIZE: i32 = 24; // rendered icon edge length (px)

// Narrow layout: icons only spawn in the top part of the viewport
pub const NARROW_BAND_FRACTION: f64 = 0.25;

// Opacity curves: base + span * factor^exponent
pub const WIDE_OPACITY_BASE: f64 = 0.15;
pub const WIDE_OPACITY_SPAN: f64 = 0.45;
pub const NARROW_OPACITY_BASE: f64 = 0.60;
pub const NARROW_OPACITY_SPAN: f64 = 0.40;
pub const OPACITY_EXPONENT: f64 = 1.2;

// Animation timing ranges (seconds), [min, max)
pub const RAIN_DURATION_RANGE: (f64, f64) = (2.0, 5.0);
pub const RAIN_DELAY_RANGE: (f64, f64) = (0.0, 5.0);
pub const ROTATION_DELAY_RANGE: (f64, f64) = (0.0, 5.0);
pub const ROTATION_DURATION_RANGE: (f64, f64) = (4.0, 8.0);

// Scroll fade for the narrow layout
pub const SCROLL_FADE_DISTANCE: f64 = 600.0; // px of scroll until fully faded
pub const SCROLL_FADE_EXPONENT: f64 = 1.5;

/// Icon identifiers in draw order; an item in column `c` uses
/// `ICON_NAMES[c % ICON_NAMES.len()]`.
pub const ICON_NAMES: [&str; 24] = [
    "pen-tool",
    "figma",
    "image",
    "layers",
    "palette",
    "crop",
    "frame",
    "type",
    "pencil",
    "brush",
    "eraser",
    "scissors",
    "paint-bucket",
    "wand-2",
    "mouse-pointer-2",
    "move",
    "layout-template",
    "component",
    "box-select",
    "grid",
    "ruler",
    "eye",
    "lock",
    "focus",
];

#[inline]
pub fn icon_name(index: usize) -> &'static str {
    ICON_NAMES[index % ICON_NAMES.len()]
}
