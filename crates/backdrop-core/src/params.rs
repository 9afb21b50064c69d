//! Per-item visual parameters.

use crate::constants::*;
use crate::grid::{Grid, LayoutMode};
use crate::policy::LayoutPolicy;
use crate::prng::Mulberry32;
use serde::Serialize;

/// Animation timing in seconds. Both the rain and rotation pairs are always
/// drawn so an item's generator positions do not depend on the layout mode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationTiming {
    pub rain_duration: f64,
    pub rain_delay: f64,
    pub rotation_delay: f64,
    pub rotation_duration: f64,
}

impl AnimationTiming {
    /// Consumes exactly four draws, in field order.
    pub fn draw(rng: &mut Mulberry32) -> Self {
        let rain_duration = rng.next_range(RAIN_DURATION_RANGE.0, RAIN_DURATION_RANGE.1);
        let rain_delay = rng.next_range(RAIN_DELAY_RANGE.0, RAIN_DELAY_RANGE.1);
        let rotation_delay = rng.next_range(ROTATION_DELAY_RANGE.0, ROTATION_DELAY_RANGE.1);
        let rotation_duration =
            rng.next_range(ROTATION_DURATION_RANGE.0, ROTATION_DURATION_RANGE.1);
        Self {
            rain_duration,
            rain_delay,
            rotation_delay,
            rotation_duration,
        }
    }

    /// `(duration, delay)` of the animation the renderer plays in `mode`.
    pub fn for_mode(&self, mode: LayoutMode) -> (f64, f64) {
        match mode {
            LayoutMode::Wide => (self.rotation_duration, self.rotation_delay),
            LayoutMode::Narrow => (self.rain_duration, self.rain_delay),
        }
    }
}

/// Opacity for the cell at `(row, col)`, always within `[0, 1]`.
pub fn opacity(grid: &Grid, policy: &LayoutPolicy, row: usize, col: usize) -> f64 {
    match grid.mode {
        LayoutMode::Wide => {
            // Fade in from the safe-zone edge towards the viewport edge.
            let dist = (grid.col_center(col) - grid.center_x()).abs();
            let max_dist = grid.center_x();
            let min_dist = grid.safe_half();
            // Content column as wide as the viewport: only cells hanging off
            // the edge survive the safe-zone filter, and they get full strength.
            let factor = if max_dist > min_dist {
                (dist - min_dist) / (max_dist - min_dist)
            } else if dist > min_dist {
                1.0
            } else {
                0.0
            };
            policy.wide_opacity.apply(factor)
        }
        LayoutMode::Narrow => {
            let band = grid.band_height();
            let factor = if band > 0.0 {
                1.0 - grid.row_center(row) / band
            } else {
                0.0
            };
            policy.narrow_opacity.apply(factor)
        }
    }
}
