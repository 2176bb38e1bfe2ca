use space_garbage::compute::*;
use space_garbage::entities::BoundingBox;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── to_cell ───────────────────────────────────────────────────────────────────

#[test]
fn to_cell_rounds_half_to_even() {
    assert_eq!(to_cell(2.5), 2);
    assert_eq!(to_cell(3.5), 4);
    assert_eq!(to_cell(-0.5), 0);
    assert_eq!(to_cell(-1.5), -2);
}

#[test]
fn to_cell_rounds_to_nearest() {
    assert_eq!(to_cell(1.4), 1);
    assert_eq!(to_cell(1.6), 2);
    assert_eq!(to_cell(-0.6), -1);
}

// ── update_speed ──────────────────────────────────────────────────────────────

#[test]
fn resting_ship_stays_at_rest() {
    assert_eq!(update_speed(0.0, 0.0, 0, 0), (0.0, 0.0));
}

#[test]
fn first_press_jerks_off_the_line() {
    assert_eq!(update_speed(0.0, 0.0, 1, 0), (0.75, 0.0));
    assert_eq!(update_speed(0.0, 0.0, 0, -1), (0.0, -0.75));
}

#[test]
fn released_keys_fade_speed() {
    let (row, column) = update_speed(1.0, -1.0, 0, 0);
    assert!((row - 0.8).abs() < 1e-12);
    assert!((column + 0.8).abs() < 1e-12);
}

#[test]
fn held_key_reaches_and_keeps_speed_limit() {
    let (mut row, mut column) = (0.0, 0.0);
    for _ in 0..50 {
        (row, column) = update_speed(row, column, 1, -1);
        assert!(row <= SPEED_LIMIT);
        assert!(column >= -SPEED_LIMIT);
    }
    assert_eq!(row, SPEED_LIMIT);
    assert_eq!(column, -SPEED_LIMIT);
}

#[test]
fn reversing_near_zero_snaps_to_standstill() {
    let (row, _) = update_speed(0.93, 0.0, -1, 0);
    assert_eq!(row, 0.0);
}

// ── clamp_position ────────────────────────────────────────────────────────────

#[test]
fn clamp_keeps_ship_inside_border() {
    assert_eq!(clamp_position(-5.0, 8, 1, 29), 1.0);
    assert_eq!(clamp_position(40.0, 8, 1, 29), 21.0);
    assert_eq!(clamp_position(10.5, 8, 1, 29), 10.5);
}

#[test]
fn clamp_holds_for_any_input_sequence() {
    let mut rng = seeded_rng();
    let (rows, columns) = (30usize, 60usize);
    let (height, width) = (8usize, 5usize);
    let (mut row, mut column) = (10.0, 20.0);
    let (mut row_speed, mut column_speed) = (0.0, 0.0);

    for _ in 0..2_000 {
        let rows_direction = rng.gen_range(-1..=1);
        let columns_direction = rng.gen_range(-1..=1);
        (row_speed, column_speed) =
            update_speed(row_speed, column_speed, rows_direction, columns_direction);
        row = clamp_position(row + row_speed, height, 1, rows - 1);
        column = clamp_position(column + column_speed, width, 1, columns - 1);

        assert!(1.0 <= row && row <= (rows - 1 - height) as f64);
        assert!(1.0 <= column && column <= (columns - 1 - width) as f64);
    }
}

// ── overlap queries ───────────────────────────────────────────────────────────

#[test]
fn boxes_touching_edges_do_not_overlap() {
    let a = BoundingBox::new(0, 0, 2, 2);
    assert!(!boxes_overlap(&a, &BoundingBox::new(2, 0, 2, 2)));
    assert!(!boxes_overlap(&a, &BoundingBox::new(0, 2, 2, 2)));
    assert!(!boxes_overlap(&a, &BoundingBox::new(-2, 0, 2, 2)));
}

#[test]
fn boxes_sharing_one_cell_overlap() {
    let a = BoundingBox::new(0, 0, 2, 2);
    assert!(boxes_overlap(&a, &BoundingBox::new(1, 1, 2, 2)));
    assert!(boxes_overlap(&BoundingBox::new(1, 1, 2, 2), &a));
}

#[test]
fn contained_box_overlaps() {
    let outer = BoundingBox::new(0, 0, 10, 10);
    let inner = BoundingBox::new(3, 3, 1, 1);
    assert!(boxes_overlap(&outer, &inner));
    assert!(boxes_overlap(&inner, &outer));
}

#[test]
fn disjoint_boxes_do_not_overlap() {
    let a = BoundingBox::new(0, 0, 3, 3);
    assert!(!boxes_overlap(&a, &BoundingBox::new(10, 10, 3, 3)));
    assert!(!boxes_overlap(&a, &BoundingBox::new(0, 5, 3, 3)));
}

#[test]
fn point_inside_uses_half_open_ranges() {
    let b = BoundingBox::new(5, 10, 3, 4);
    assert!(point_inside(&b, 5, 10));
    assert!(point_inside(&b, 7, 13));
    assert!(!point_inside(&b, 8, 10));
    assert!(!point_inside(&b, 5, 14));
    assert!(!point_inside(&b, 4, 10));
}
