/// Shared game data types — pure data, no logic beyond geometry accessors.

use crate::compute::{boxes_overlap, point_inside, to_cell};

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Integer, half-open cell rectangle: rows `top..top + height`,
/// columns `left..left + width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub top: i32,
    pub left: i32,
    pub height: i32,
    pub width: i32,
}

impl BoundingBox {
    pub fn new(top: i32, left: i32, height: i32, width: i32) -> Self {
        Self { top, left, height, width }
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        boxes_overlap(self, other)
    }

    pub fn contains(&self, row: i32, column: i32) -> bool {
        point_inside(self, row, column)
    }

    /// Centre cell, used to aim explosions.
    pub fn center(&self) -> (f64, f64) {
        (
            self.top as f64 + self.height as f64 / 2.0,
            self.left as f64 + self.width as f64 / 2.0,
        )
    }
}

/// A falling object's footprint.  `row` moves with sub-cell precision while
/// `column` stays fixed after spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub row: f64,
    pub column: f64,
    pub rows_size: usize,
    pub columns_size: usize,
}

impl Obstacle {
    pub fn new(row: f64, column: f64, rows_size: usize, columns_size: usize) -> Self {
        Self { row, column, rows_size, columns_size }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            to_cell(self.row),
            to_cell(self.column),
            self.rows_size as i32,
            self.columns_size as i32,
        )
    }

    /// Does an object occupying the given rectangle share a cell with us?
    pub fn has_collision(&self, row: f64, column: f64, rows_size: usize, columns_size: usize) -> bool {
        let other = BoundingBox::new(
            to_cell(row),
            to_cell(column),
            rows_size as i32,
            columns_size as i32,
        );
        self.bounding_box().intersects(&other)
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Controls sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    /// −1 up, 1 down, 0 none.
    pub rows_direction: i32,
    /// −1 left, 1 right, 0 none.
    pub columns_direction: i32,
    pub fire: bool,
    pub quit: bool,
}
