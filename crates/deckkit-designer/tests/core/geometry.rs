use deckkit_designer::geometry::{
    adjust_segment_endpoint, edge, edges, polygon_area_and_perimeter, snap_to_grid, BoundingBox,
};
use deckkit_designer::model::Point;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_square_area_and_perimeter() {
    let square = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let m = polygon_area_and_perimeter(&square);
    assert!((m.area - 100.0).abs() < 1e-9);
    assert!((m.perimeter - 40.0).abs() < 1e-9);
    assert_eq!(m.bounding_box, BoundingBox::new(10.0, 10.0));
}

#[test]
fn test_right_triangle() {
    let tri = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    let m = polygon_area_and_perimeter(&tri);
    assert!((m.area - 6.0).abs() < 1e-9);
    assert!((m.perimeter - 12.0).abs() < 1e-9);
    assert_eq!(m.bounding_box, BoundingBox::new(4.0, 3.0));
}

#[test]
fn test_open_outline_reports_zero() {
    let open = pts(&[(0.0, 0.0), (10.0, 0.0)]);
    let m = polygon_area_and_perimeter(&open);
    assert_eq!(m.area, 0.0);
    assert_eq!(m.perimeter, 0.0);
    assert_eq!(m.bounding_box, BoundingBox::new(0.0, 0.0));

    let empty = polygon_area_and_perimeter(&[]);
    assert_eq!(empty.area, 0.0);
}

#[test]
fn test_bounding_box_ignores_origin() {
    let offset = pts(&[(5.0, 5.0), (8.0, 5.0), (8.0, 9.0)]);
    let m = polygon_area_and_perimeter(&offset);
    assert_eq!(m.bounding_box, BoundingBox::new(3.0, 4.0));
}

#[test]
fn test_l_shaped_deck() {
    let l_shape = pts(&[
        (0.0, 0.0),
        (20.0, 0.0),
        (20.0, 6.0),
        (10.0, 6.0),
        (10.0, 13.0),
        (0.0, 13.0),
    ]);
    let m = polygon_area_and_perimeter(&l_shape);
    assert!((m.area - 190.0).abs() < 1e-9);
    assert!((m.perimeter - 66.0).abs() < 1e-9);
    assert_eq!(m.bounding_box, BoundingBox::new(20.0, 13.0));
}

#[test]
fn test_degenerate_edges_contribute_nothing() {
    let doubled = pts(&[(0.0, 0.0), (0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let m = polygon_area_and_perimeter(&doubled);
    assert!((m.area - 100.0).abs() < 1e-9);
    assert!((m.perimeter - 40.0).abs() < 1e-9);
}

#[test]
fn test_snap_one_foot_grid() {
    let p = snap_to_grid(Point::new(2.49, 3.51), 12.0);
    assert!((p.x - 2.0).abs() < 1e-9);
    assert!((p.y - 4.0).abs() < 1e-9);
}

#[test]
fn test_snap_rounds_half_up() {
    let p = snap_to_grid(Point::new(0.5, -0.5), 12.0);
    assert_eq!(p, Point::new(1.0, 0.0));

    let p = snap_to_grid(Point::new(0.25, 0.74), 6.0);
    assert_eq!(p, Point::new(0.5, 0.5));
}

#[test]
fn test_snap_just_below_half_rounds_down() {
    let below_half = 0.49999999999999994;
    let p = snap_to_grid(Point::new(below_half, -below_half), 12.0);
    assert_eq!(p, Point::new(0.0, 0.0));
}

#[test]
fn test_snap_coarse_grid() {
    let p = snap_to_grid(Point::new(5.0, 7.1), 48.0);
    assert_eq!(p, Point::new(4.0, 8.0));
}

#[test]
fn test_snap_rejects_bad_step() {
    let p = Point::new(1.3, 2.7);
    assert_eq!(snap_to_grid(p, 0.0), p);
    assert_eq!(snap_to_grid(p, -12.0), p);
    assert_eq!(snap_to_grid(p, f64::NAN), p);
}

#[test]
fn test_adjust_segment_horizontal() {
    let p = adjust_segment_endpoint(Point::new(0.0, 0.0), Point::new(3.0, 0.0), 5.0);
    assert!((p.x - 5.0).abs() < 1e-9);
    assert!(p.y.abs() < 1e-9);
}

#[test]
fn test_adjust_segment_vertical() {
    let p = adjust_segment_endpoint(Point::new(0.0, 0.0), Point::new(0.0, 4.0), 2.5);
    assert!(p.x.abs() < 1e-9);
    assert!((p.y - 2.5).abs() < 1e-9);
}

#[test]
fn test_adjust_segment_keeps_direction() {
    let a = Point::new(1.0, 1.0);
    let b = Point::new(4.0, 5.0);
    let p = adjust_segment_endpoint(a, b, 10.0);
    assert!((p.x - 7.0).abs() < 1e-9);
    assert!((p.y - 9.0).abs() < 1e-9);
    assert!((a.distance_to(&p) - 10.0).abs() < 1e-9);
}

#[test]
fn test_adjust_segment_coincident_points() {
    let a = Point::new(2.0, 3.0);
    let p = adjust_segment_endpoint(a, a, 4.0);
    assert!(p.x.is_finite() && p.y.is_finite());
    assert_eq!(p, a);
}

#[test]
fn test_edges_skip_closing_edge_for_open_path() {
    let two = pts(&[(0.0, 0.0), (3.0, 4.0)]);
    let all: Vec<_> = edges(&two).collect();
    assert_eq!(all.len(), 1);
    assert!((all[0].length() - 5.0).abs() < 1e-9);
    assert!(edge(&two, 1).is_none());
}

#[test]
fn test_edges_include_closing_edge() {
    let tri = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    let all: Vec<_> = edges(&tri).collect();
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].start, Point::new(0.0, 3.0));
    assert_eq!(all[2].end, Point::new(0.0, 0.0));
    assert_eq!(all[0].midpoint(), Point::new(2.0, 0.0));
}
