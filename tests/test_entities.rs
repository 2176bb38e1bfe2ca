use space_garbage::entities::*;

#[test]
fn obstacle_box_rounds_fractional_row() {
    let o = Obstacle::new(7.5, 10.0, 3, 4);
    assert_eq!(o.bounding_box(), BoundingBox::new(8, 10, 3, 4));

    let o = Obstacle::new(6.5, 10.0, 3, 4);
    assert_eq!(o.bounding_box().top, 6);
}

#[test]
fn obstacle_collision_with_rectangle() {
    let o = Obstacle::new(10.0, 10.0, 3, 3);
    assert!(o.has_collision(12.0, 12.0, 1, 1));
    assert!(o.has_collision(8.0, 8.0, 3, 3));
    assert!(!o.has_collision(13.0, 10.0, 2, 2));
    assert!(!o.has_collision(10.0, 7.0, 3, 3));
}

#[test]
fn box_center_is_midpoint() {
    assert_eq!(BoundingBox::new(10, 20, 4, 6).center(), (12.0, 23.0));
}

#[test]
fn controls_default_to_idle() {
    let c = Controls::default();
    assert_eq!(c.rows_direction, 0);
    assert_eq!(c.columns_direction, 0);
    assert!(!c.fire);
    assert!(!c.quit);
}
