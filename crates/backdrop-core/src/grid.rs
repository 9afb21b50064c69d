//! Grid partitioning: which columns and rows may hold a decoration.

use crate::policy::LayoutPolicy;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutMode {
    /// Icons flank the content column and spin in place.
    Wide,
    /// Icons rain down through a band at the top of the viewport.
    Narrow,
}

impl LayoutMode {
    pub fn for_width(width: i32, policy: &LayoutPolicy) -> Self {
        if width < policy.narrow_breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

/// Grid geometry for one viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub mode: LayoutMode,
    pub cell_size: i32,
    pub rows: usize,
    pub cols: usize,
    viewport: Viewport,
    safe_half: f64,
    band_height: f64,
}

impl Grid {
    pub fn new(viewport: Viewport, policy: &LayoutPolicy) -> Self {
        let mode = LayoutMode::for_width(viewport.width, policy);
        let cell_size = match mode {
            LayoutMode::Narrow => policy.narrow_cell_size,
            LayoutMode::Wide => policy.wide_cell_size,
        };
        let (rows, cols) = if viewport.is_degenerate() {
            (0, 0)
        } else {
            (
                ceil_div(viewport.height, cell_size),
                ceil_div(viewport.width, cell_size),
            )
        };
        Self {
            mode,
            cell_size,
            rows,
            cols,
            viewport,
            safe_half: viewport.width.min(policy.content_max_width) as f64 / 2.0,
            band_height: viewport.height as f64 * policy.narrow_band_fraction,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.viewport.width as f64 / 2.0
    }

    /// Half-width of the horizontal content safe zone.
    #[inline]
    pub fn safe_half(&self) -> f64 {
        self.safe_half
    }

    /// Height of the narrow-layout decorable band, measured from the top.
    #[inline]
    pub fn band_height(&self) -> f64 {
        self.band_height
    }

    #[inline]
    pub fn col_center(&self, col: usize) -> f64 {
        (col as i64 * self.cell_size as i64) as f64 + self.cell_size as f64 / 2.0
    }

    #[inline]
    pub fn row_center(&self, row: usize) -> f64 {
        (row as i64 * self.cell_size as i64) as f64 + self.cell_size as f64 / 2.0
    }

    /// True when a cell center x lies strictly outside the safe zone.
    pub fn is_outside_safe_zone(&self, x: f64) -> bool {
        let center = self.center_x();
        x < center - self.safe_half || x > center + self.safe_half
    }

    /// Columns that may receive an icon, in ascending order.
    pub fn eligible_columns(&self) -> Vec<usize> {
        match self.mode {
            LayoutMode::Narrow => (0..self.cols).collect(),
            LayoutMode::Wide => (0..self.cols)
                .filter(|&c| self.is_outside_safe_zone(self.col_center(c)))
                .collect(),
        }
    }

    pub fn is_row_eligible(&self, row: usize) -> bool {
        match self.mode {
            LayoutMode::Wide => true,
            LayoutMode::Narrow => self.row_center(row) <= self.band_height,
        }
    }
}

#[inline]
fn ceil_div(value: i32, divisor: i32) -> usize {
    ((value as i64 + divisor as i64 - 1) / divisor as i64) as usize
}
