//! Deterministic decorative icon layout for the portfolio backdrop.
//!
//! Everything here is platform independent: the web frontend feeds it the
//! window size and draws the resulting items, the native frontend prints them.

pub mod columns;
pub mod constants;
pub mod fade;
pub mod grid;
pub mod layout;
pub mod params;
pub mod policy;
pub mod prng;

pub use constants::*;
pub use fade::scroll_fade_opacity;
pub use grid::{Grid, LayoutMode, Viewport};
pub use layout::*;
pub use params::AnimationTiming;
pub use policy::{LayoutPolicy, OpacityCurve, PolicyError};
pub use prng::Mulberry32;
