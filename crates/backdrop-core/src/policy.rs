//! Tunable layout policy.
//!
//! All layout tunables live here; a backdrop variant is a different
//! `LayoutPolicy` value, not a separate code path.

use crate::constants::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("cell sizes must be positive (narrow={narrow}, wide={wide})")]
    CellSize { narrow: i32, wide: i32 },
    #[error("icon size {icon} must be positive and fit in the smallest cell ({cell})")]
    IconSize { icon: i32, cell: i32 },
    #[error("content max width must be positive, got {0}")]
    ContentWidth(i32),
    #[error("narrow band fraction must be within [0, 1], got {0}")]
    BandFraction(f64),
    #[error("opacity curve `{name}` has invalid parameters")]
    OpacityCurve { name: &'static str },
    #[error("scroll fade distance must be positive, got {0}")]
    FadeDistance(f64),
    #[error("scroll fade exponent must be finite and positive, got {0}")]
    FadeExponent(f64),
}

/// Maps a normalized factor in `[0, 1]` to `base + span * factor^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OpacityCurve {
    pub base: f64,
    pub span: f64,
    pub exponent: f64,
}

impl OpacityCurve {
    /// Result is clamped to `[0, 1]` whatever the curve parameters.
    pub fn apply(&self, factor: f64) -> f64 {
        let f = factor.clamp(0.0, 1.0);
        (self.base + self.span * f.powf(self.exponent)).clamp(0.0, 1.0)
    }

    fn is_valid(&self) -> bool {
        [self.base, self.span, self.exponent]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPolicy {
    pub seed: i32,
    pub content_max_width: i32,
    pub icon_size: i32,
    pub narrow_breakpoint: i32,
    pub narrow_cell_size: i32,
    pub wide_cell_size: i32,
    pub narrow_band_fraction: f64,
    pub wide_opacity: OpacityCurve,
    pub narrow_opacity: OpacityCurve,
    pub scroll_fade_distance: f64,
    pub scroll_fade_exponent: f64,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            content_max_width: CONTENT_MAX_WIDTH,
            icon_size: ICON_SIZE,
            narrow_breakpoint: NARROW_BREAKPOINT,
            narrow_cell_size: NARROW_CELL_SIZE,
            wide_cell_size: WIDE_CELL_SIZE,
            narrow_band_fraction: NARROW_BAND_FRACTION,
            wide_opacity: OpacityCurve {
                base: WIDE_OPACITY_BASE,
                span: WIDE_OPACITY_SPAN,
                exponent: OPACITY_EXPONENT,
            },
            narrow_opacity: OpacityCurve {
                base: NARROW_OPACITY_BASE,
                span: NARROW_OPACITY_SPAN,
                exponent: OPACITY_EXPONENT,
            },
            scroll_fade_distance: SCROLL_FADE_DISTANCE,
            scroll_fade_exponent: SCROLL_FADE_EXPONENT,
        }
    }
}

impl LayoutPolicy {
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.narrow_cell_size <= 0 || self.wide_cell_size <= 0 {
            return Err(PolicyError::CellSize {
                narrow: self.narrow_cell_size,
                wide: self.wide_cell_size,
            });
        }
        let smallest_cell = self.narrow_cell_size.min(self.wide_cell_size);
        if self.icon_size <= 0 || self.icon_size > smallest_cell {
            return Err(PolicyError::IconSize {
                icon: self.icon_size,
                cell: smallest_cell,
            });
        }
        if self.content_max_width <= 0 {
            return Err(PolicyError::ContentWidth(self.content_max_width));
        }
        if !(0.0..=1.0).contains(&self.narrow_band_fraction) {
            return Err(PolicyError::BandFraction(self.narrow_band_fraction));
        }
        if !self.wide_opacity.is_valid() {
            return Err(PolicyError::OpacityCurve { name: "wide" });
        }
        if !self.narrow_opacity.is_valid() {
            return Err(PolicyError::OpacityCurve { name: "narrow" });
        }
        if !(self.scroll_fade_distance.is_finite() && self.scroll_fade_distance > 0.0) {
            return Err(PolicyError::FadeDistance(self.scroll_fade_distance));
        }
        if !(self.scroll_fade_exponent.is_finite() && self.scroll_fade_exponent > 0.0) {
            return Err(PolicyError::FadeExponent(self.scroll_fade_exponent));
        }
        Ok(())
    }
}
