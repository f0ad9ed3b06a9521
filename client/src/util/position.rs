//! Random grid placement for new items.

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;

use crate::net::types::GridPosition;

pub const GRID_COLUMNS: i32 = 5;
pub const GRID_ROWS: i32 = 3;

/// Map two unit samples in `[0, 1)` to a cell in the 5x3 grid.
#[must_use]
pub fn position_from_unit(col_sample: f64, row_sample: f64) -> GridPosition {
    GridPosition {
        grid_column: Some(scale(col_sample, GRID_COLUMNS)),
        grid_row: Some(scale(row_sample, GRID_ROWS)),
        x: None,
        y: None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scale(sample: f64, cells: i32) -> i32 {
    let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
    ((sample * f64::from(cells)).floor() as i32 + 1).min(cells)
}

/// A uniformly random cell.
pub fn random_position() -> GridPosition {
    #[cfg(feature = "hydrate")]
    {
        position_from_unit(js_sys::Math::random(), js_sys::Math::random())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        position_from_unit(0.0, 0.0)
    }
}
