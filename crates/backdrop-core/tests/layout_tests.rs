// Host-side integration tests for the backdrop layout engine.

use backdrop_core::*;
use rand::prelude::*;
use std::collections::HashSet;

fn cols_of(items: &[DecorationItem]) -> Vec<usize> {
    items.iter().map(|i| i.col).collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn repeated_calls_are_identical() {
    for &(w, h) in &[(1440, 900), (1920, 1080), (390, 844), (1023, 768), (2560, 1440)] {
        let a = compute_decoration_layout(w, h);
        let b = compute_decoration_layout(w, h);
        assert_eq!(a, b, "layout differs for {w}x{h}");
    }
}

#[test]
fn wide_1440_matches_reference_layout() {
    let items = compute_decoration_layout(1440, 900);
    assert_eq!(items.len(), 18);
    assert_eq!(&cols_of(&items)[..8], &[1, 27, 28, 0, 27, 0, 28, 1]);
    let rows: Vec<usize> = items.iter().map(|i| i.row).collect();
    assert_eq!(rows, (0..18).collect::<Vec<_>>());

    let first = &items[0];
    assert_eq!(first.key(), "icon-0-1");
    assert_eq!(first.position, Position { x: 63.0, y: 13.0 });
    assert_eq!(first.icon_index, 1);
    assert_eq!(first.icon_name(), "figma");
    assert!(approx(first.opacity, 0.1661535706171458));
    let t = first.animation_timing;
    assert!(approx(t.rain_duration, 2.48003505426459));
    assert!(approx(t.rain_delay, 1.0428598942235112));
    assert!(approx(t.rotation_delay, 1.1641854885965586));
    assert!(approx(t.rotation_duration, 5.900053965859115));
}

#[test]
fn wide_1920_matches_reference_columns() {
    let items = compute_decoration_layout(1920, 1080);
    assert_eq!(items.len(), 22);
    assert_eq!(
        &cols_of(&items)[..12],
        &[4, 35, 36, 1, 37, 34, 3, 32, 33, 2, 0, 5]
    );
}

#[test]
fn narrow_390_matches_reference_layout() {
    let items = compute_decoration_layout(390, 844);
    assert_eq!(items.len(), 5);
    assert_eq!(cols_of(&items), vec![3, 7, 8, 1, 6]);
    let rows: Vec<usize> = items.iter().map(|i| i.row).collect();
    assert_eq!(rows, vec![0, 1, 2, 3, 4]);
    assert_eq!(items[0].position, Position { x: 128.0, y: 8.0 });
    assert!(approx(items[0].opacity, 0.9549450187047266));
}

#[test]
fn wide_layout_avoids_content_safe_zone() {
    let engine = LayoutEngine::default();
    let layout = engine.layout(Viewport::new(1440, 900));
    assert_eq!(layout.mode, LayoutMode::Wide);
    for item in &layout.items {
        let center = item.col as f64 * 50.0 + 25.0;
        assert!(
            !(80.0..=1360.0).contains(&center),
            "{} sits in the safe zone at x={center}",
            item.key()
        );
    }
}

#[test]
fn content_width_viewport_has_no_wide_decorations() {
    let layout = LayoutEngine::default().layout(Viewport::new(1280, 800));
    assert_eq!(layout.mode, LayoutMode::Wide);
    assert!(layout.is_empty());
}

#[test]
fn breakpoint_selects_mode_and_cell_size() {
    let engine = LayoutEngine::default();
    let narrow = engine.layout(Viewport::new(1023, 768));
    assert_eq!(narrow.mode, LayoutMode::Narrow);
    assert_eq!(narrow.cell_size, 40);
    assert_eq!(cols_of(&narrow.items), vec![9, 19, 23, 3, 4]);

    let wide = engine.layout(Viewport::new(1024, 768));
    assert_eq!(wide.mode, LayoutMode::Wide);
    assert_eq!(wide.cell_size, 50);
    // Content column spans the viewport; only the cell hanging past the
    // right edge is outside it.
    assert_eq!(wide.items.len(), 16);
    assert!(wide.items.iter().all(|i| i.col == 20));
    assert!(wide.items.iter().all(|i| (i.opacity - 0.6).abs() < 1e-9));
}

#[test]
fn narrow_layout_only_uses_top_band() {
    let engine = LayoutEngine::default();
    let layout = engine.layout(Viewport::new(600, 1000));
    assert!(!layout.is_empty());
    for item in &layout.items {
        let center_y = item.row as f64 * 40.0 + 20.0;
        assert!(center_y <= 250.0, "{} below band", item.key());
    }
}

#[test]
fn degenerate_viewports_yield_nothing() {
    for &(w, h) in &[(0, 0), (0, 900), (1440, 0), (-5, 900), (1440, -1)] {
        assert!(compute_decoration_layout(w, h).is_empty(), "{w}x{h}");
    }
}

#[test]
fn random_viewports_hold_invariants() {
    let engine = LayoutEngine::default();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let w = rng.gen_range(1..3200);
        let h = rng.gen_range(1..2200);
        let layout = engine.layout(Viewport::new(w, h));
        let grid = Grid::new(Viewport::new(w, h), engine.policy());
        let eligible = grid.eligible_columns();

        let mut seen = HashSet::new();
        for item in &layout.items {
            assert!(seen.insert((item.row, item.col)), "duplicate cell at {w}x{h}");
            assert!((0.0..=1.0).contains(&item.opacity), "opacity at {w}x{h}");
            assert!(item.row < layout.rows && item.col < layout.cols);
            assert!(eligible.contains(&item.col));
            let t = item.animation_timing;
            assert!((2.0..5.0).contains(&t.rain_duration));
            assert!((0.0..5.0).contains(&t.rain_delay));
            assert!((0.0..5.0).contains(&t.rotation_delay));
            assert!((4.0..8.0).contains(&t.rotation_duration));
        }

        if eligible.len() > 1 {
            for pair in layout.items.windows(2) {
                assert_ne!(pair[0].col, pair[1].col, "stacked column at {w}x{h}");
            }
        }
    }
}

#[test]
fn default_engine_uses_default_policy() {
    let engine = LayoutEngine::default();
    assert_eq!(engine.policy(), &LayoutPolicy::default());
    assert_eq!(
        engine.layout(Viewport::new(1440, 900)).items,
        compute_decoration_layout(1440, 900)
    );
}

#[test]
fn seed_changes_the_layout() {
    let base = LayoutEngine::default().layout(Viewport::new(1920, 1080));
    let other = LayoutEngine::new(LayoutPolicy::default().with_seed(7))
        .expect("valid policy")
        .layout(Viewport::new(1920, 1080));
    assert_eq!(base.items.len(), other.items.len());
    assert_ne!(cols_of(&base.items), cols_of(&other.items));
}

#[test]
fn layout_serializes_with_camel_case_fields() {
    let layout = LayoutEngine::default().layout(Viewport::new(390, 844));
    let value = serde_json::to_value(&layout).expect("serializable");
    assert_eq!(value["cellSize"], 40);
    assert_eq!(value["mode"], "narrow");
    assert_eq!(value["items"][0]["iconIndex"], 3);
    assert!(value["items"][0]["animationTiming"]["rainDuration"].is_f64());
}
