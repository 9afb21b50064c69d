//! The decoration layout pass.
//!
//! A layout is a pure function of the viewport and the policy (seed
//! included). Each call builds its own generator, so calling it again with
//! the same inputs reproduces the previous result exactly and nothing is
//! carried over between calls.

use crate::columns::ColumnPicker;
use crate::constants::{icon_name, ICON_NAMES};
use crate::grid::{Grid, LayoutMode, Viewport};
use crate::params::{self, AnimationTiming};
use crate::policy::{LayoutPolicy, PolicyError};
use crate::prng::Mulberry32;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationItem {
    pub row: usize,
    pub col: usize,
    /// Top-left corner of the icon, centered in its cell.
    pub position: Position,
    pub icon_index: usize,
    pub opacity: f64,
    pub animation_timing: AnimationTiming,
}

impl DecorationItem {
    /// Stable key for the renderer, unique within a layout.
    pub fn key(&self) -> String {
        format!("icon-{}-{}", self.row, self.col)
    }

    pub fn icon_name(&self) -> &'static str {
        icon_name(self.icon_index)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationLayout {
    pub mode: LayoutMode,
    pub cell_size: i32,
    pub rows: usize,
    pub cols: usize,
    pub items: Vec<DecorationItem>,
}

impl DecorationLayout {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Layout engine bound to a validated policy.
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    policy: LayoutPolicy,
}

impl LayoutEngine {
    pub fn new(policy: LayoutPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &LayoutPolicy {
        &self.policy
    }

    pub fn layout(&self, viewport: Viewport) -> DecorationLayout {
        let policy = &self.policy;
        let grid = Grid::new(viewport, policy);
        let mut layout = DecorationLayout {
            mode: grid.mode,
            cell_size: grid.cell_size,
            rows: grid.rows,
            cols: grid.cols,
            items: Vec::new(),
        };

        let eligible = grid.eligible_columns();
        if eligible.is_empty() {
            log::debug!(
                "no decorable columns for {}x{} ({:?})",
                viewport.width,
                viewport.height,
                grid.mode
            );
            return layout;
        }

        let mut rng = Mulberry32::new(policy.seed);
        let mut picker = ColumnPicker::new(eligible);
        let inset = (grid.cell_size - policy.icon_size) as f64 / 2.0;
        let cell = grid.cell_size as f64;

        for row in (0..grid.rows).filter(|&r| grid.is_row_eligible(r)) {
            let Some(col) = picker.pick(&mut rng) else {
                break;
            };
            let opacity = params::opacity(&grid, policy, row, col);
            let animation_timing = AnimationTiming::draw(&mut rng);
            layout.items.push(DecorationItem {
                row,
                col,
                position: Position {
                    x: col as f64 * cell + inset,
                    y: row as f64 * cell + inset,
                },
                icon_index: col % ICON_NAMES.len(),
                opacity,
                animation_timing,
            });
        }

        log::debug!(
            "layout {}x{}: mode={:?} cell={} grid={}x{} items={}",
            viewport.width,
            viewport.height,
            layout.mode,
            layout.cell_size,
            layout.cols,
            layout.rows,
            layout.items.len()
        );
        layout
    }
}

/// Items for a viewport under the default policy.
pub fn compute_decoration_layout(viewport_width: i32, viewport_height: i32) -> Vec<DecorationItem> {
    LayoutEngine::default()
        .layout(Viewport::new(viewport_width, viewport_height))
        .items
}
