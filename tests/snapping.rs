use floorplan_studio::geometry::{LayoutConfig, snap_and_clamp, snap_to_grid};
use pretty_assertions::assert_eq;

fn default_config() -> LayoutConfig {
    LayoutConfig::default()
}

#[test]
fn snaps_to_the_nearest_grid_multiple() {
    assert_eq!(snap_to_grid(207, 20), 200);
    assert_eq!(snap_to_grid(391, 20), 400);
    assert_eq!(snap_to_grid(0, 20), 0);
    assert_eq!(snap_to_grid(20, 20), 20);
}

#[test]
fn half_grid_offsets_round_up() {
    // 390 sits exactly between 380 and 400: half-up is the pinned rule.
    assert_eq!(snap_to_grid(390, 20), 400);
    assert_eq!(snap_to_grid(10, 20), 20);
    assert_eq!(snap_to_grid(30, 20), 40);
}

#[test]
fn drag_scenario_from_the_editor() {
    // Grid 20, canvas 800x600, element 100x100 dragged to raw (207, 391).
    let config = default_config();
    assert_eq!(snap_and_clamp(207, 391, 100, 100, &config), (200, 400));
}

#[test]
fn positions_inside_the_canvas_are_only_snapped() {
    let config = default_config();
    assert_eq!(snap_and_clamp(143, 277, 100, 100, &config), (140, 280));
}

#[test]
fn negative_raw_positions_clamp_to_the_origin() {
    let config = default_config();
    assert_eq!(snap_and_clamp(-35, -8, 100, 100, &config), (0, 0));
}

#[test]
fn clamp_margin_is_the_element_footprint() {
    let config = default_config();
    // A 300-wide element cannot pass x = 500 on an 800-wide canvas.
    assert_eq!(snap_and_clamp(760, 100, 300, 100, &config), (500, 100));
    // A 100-tall element cannot pass y = 500 on a 600-tall canvas.
    assert_eq!(snap_and_clamp(100, 900, 100, 100, &config), (100, 500));
}

#[test]
fn boundary_overshoot_settles_on_the_last_fitting_multiple() {
    let config = default_config();
    // Max x for a 50-wide element is 750; rounding 750 up would give 760,
    // so the result backs off to 740.
    assert_eq!(snap_and_clamp(750, 0, 50, 100, &config), (740, 0));
}

#[test]
fn oversized_elements_pin_to_the_origin() {
    let config = default_config();
    assert_eq!(snap_and_clamp(300, 300, 900, 700, &config), (0, 0));
}

#[test]
fn snap_and_clamp_is_idempotent() {
    let config = default_config();
    let cases = [
        (207, 391, 100, 100),
        (-35, -8, 100, 100),
        (760, 100, 300, 100),
        (745, 0, 50, 100),
        (0, 0, 800, 600),
        (799, 599, 20, 20),
    ];
    for (raw_x, raw_y, width, height) in cases {
        let once = snap_and_clamp(raw_x, raw_y, width, height, &config);
        let twice = snap_and_clamp(once.0, once.1, width, height, &config);
        assert_eq!(twice, once, "not idempotent for raw ({raw_x}, {raw_y})");
    }
}

#[test]
fn respects_a_non_default_grid() {
    let config = LayoutConfig {
        canvas_width: 400,
        canvas_height: 300,
        grid_size: 25,
    };
    assert_eq!(snap_and_clamp(113, 62, 50, 50, &config), (125, 50));
    assert_eq!(snap_to_grid(112, 25), 100);
}
