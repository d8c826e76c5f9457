//! Grid arithmetic for element placement. Everything here is pure integer
//! math so drag handling stays deterministic and testable.

use serde::{Deserialize, Serialize};

/// Canvas dimensions and snap interval for one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub grid_size: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            grid_size: 20,
        }
    }
}

/// Round `value` to the nearest multiple of `grid_size`, half-up.
///
/// Half-grid offsets round toward positive infinity: with a 20-unit grid,
/// 390 snaps to 400. Pinned by tests so drag behavior never drifts.
pub fn snap_to_grid(value: i32, grid_size: i32) -> i32 {
    debug_assert!(grid_size > 0);
    (value + grid_size / 2).div_euclid(grid_size) * grid_size
}

/// Snap a raw drag position to the grid and keep the element fully inside
/// the canvas.
///
/// The clamp margin is the element's own footprint, so a large element can
/// never be dropped partly off-canvas. Idempotent: a position that already
/// satisfies both constraints comes back unchanged.
pub fn snap_and_clamp(
    raw_x: i32,
    raw_y: i32,
    width: i32,
    height: i32,
    config: &LayoutConfig,
) -> (i32, i32) {
    (
        snap_axis(raw_x, width, config.canvas_width, config.grid_size),
        snap_axis(raw_y, height, config.canvas_height, config.grid_size),
    )
}

fn snap_axis(raw: i32, side: i32, extent: i32, grid: i32) -> i32 {
    let max = (extent - side).max(0);
    let snapped = snap_to_grid(raw.clamp(0, max), grid);
    // Rounding up near the boundary can overshoot `max`; settle on the
    // largest grid multiple that still fits.
    snapped.min(max.div_euclid(grid) * grid).max(0)
}
