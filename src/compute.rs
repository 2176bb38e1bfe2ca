/// Pure motion and geometry helpers.
///
/// Nothing here touches the canvas or the task set; every function maps
/// numbers to numbers so the physics can be tested in isolation.

use crate::entities::BoundingBox;

// ── Motion tuning ─────────────────────────────────────────────────────────────

/// Fraction of speed kept from one tick to the next when coasting.
pub const FADING: f64 = 0.8;

/// Upper bound on speed along either axis, in cells per tick.
pub const SPEED_LIMIT: f64 = 2.0;

/// Speeds closer to zero than this snap to a standstill.
const SPEED_EPSILON: f64 = 0.1;

const ACCELERATION: f64 = 0.75;

// ── Cells ─────────────────────────────────────────────────────────────────────

/// Convert a fractional coordinate to a cell index.
///
/// Rounds half to even everywhere, so the ship, garbage and projectiles all
/// land on the same cell for the same coordinate.
pub fn to_cell(value: f64) -> i32 {
    value.round_ties_even() as i32
}

pub fn boxes_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.top < b.top + b.height
        && b.top < a.top + a.height
        && a.left < b.left + b.width
        && b.left < a.left + a.width
}

pub fn point_inside(bounds: &BoundingBox, row: i32, column: i32) -> bool {
    (bounds.top..bounds.top + bounds.height).contains(&row)
        && (bounds.left..bounds.left + bounds.width).contains(&column)
}

// ── Ship physics ──────────────────────────────────────────────────────────────

/// Push `speed` one tick toward `limit` in the given direction.
///
/// A resting ship jerks off the line; one already near the limit gains
/// only a little more.
fn accelerate(speed: f64, limit: f64, forward: bool) -> f64 {
    let limit = limit.abs();
    let delta = (speed / limit).cos() * ACCELERATION;
    let speed = if forward { speed + delta } else { speed - delta };
    let speed = speed.clamp(-limit, limit);
    if speed.abs() < SPEED_EPSILON {
        0.0
    } else {
        speed
    }
}

/// Advance a row/column speed pair by one tick of input.
///
/// `rows_direction` and `columns_direction` are −1, 0 or 1.  Speed decays by
/// [`FADING`] every tick so the ship drifts to a stop once keys are released.
pub fn update_speed(
    row_speed: f64,
    column_speed: f64,
    rows_direction: i32,
    columns_direction: i32,
) -> (f64, f64) {
    let mut row_speed = row_speed * FADING;
    let mut column_speed = column_speed * FADING;

    if rows_direction != 0 {
        row_speed = accelerate(row_speed, SPEED_LIMIT, rows_direction > 0);
    }
    if columns_direction != 0 {
        column_speed = accelerate(column_speed, SPEED_LIMIT, columns_direction > 0);
    }
    (row_speed, column_speed)
}

/// Keep an object of `size` cells inside `border ..= max - size`, where
/// `max` is the last addressable index on that axis.
pub fn clamp_position(position: f64, size: usize, border: usize, max: usize) -> f64 {
    let low = border as f64;
    let high = (max as f64 - size as f64).max(low);
    position.clamp(low, high)
}
