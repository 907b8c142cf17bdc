use super::*;
use crate::foundation::core::{RIGHT, UP};
use crate::style::color::{BLUE_E, YELLOW};

#[test]
fn rectangle_outline_is_centered_with_exact_edges() {
    let r = rectangle(4.0, 2.0, BLUE_E).unwrap();
    assert_eq!(r.name(), "rectangle");
    assert_eq!(r.get_top().unwrap(), Point::new(0.0, 1.0));
    assert_eq!(r.get_bottom().unwrap(), Point::new(0.0, -1.0));
    assert_eq!(r.width().unwrap(), 4.0);
    assert!(r.len_points() >= 4);
    assert!(r.colors().iter().all(|c| *c == BLUE_E));
}

#[test]
fn degenerate_rectangles_are_rejected() {
    for (w, h) in [(0.0, 1.0), (1.0, 0.0), (-1.0, 1.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
        let err = rectangle(w, h, BLUE_E).unwrap_err();
        assert!(matches!(err, StrataError::Construction(_)));
        assert!(filled_rectangle(w, h, BLUE_E).is_err());
    }
}

#[test]
fn filled_rectangle_covers_the_interior_on_a_grid() {
    let r = filled_rectangle(2.0, 1.0, BLUE_E).unwrap();
    assert_eq!(r.get_top().unwrap().y, 0.5);
    assert_eq!(r.get_bottom().unwrap().y, -0.5);
    assert_eq!(r.get_left().unwrap().x, -1.0);
    assert_eq!(r.get_right().unwrap().x, 1.0);
    // 51 columns x 26 rows at 25 samples per unit.
    assert_eq!(r.len_points(), 51 * 26);
    assert!(r.dot_size() >= 1.0 / POINT_DENSITY_2D);
    // Top row first.
    assert_eq!(r.points()[0], Point::new(-1.0, 0.5));
}

#[test]
fn line_runs_between_endpoints() {
    let l = line(Point::new(-1.0, 0.0), Point::new(1.0, 0.0), YELLOW).unwrap();
    assert_eq!(l.points().first().copied(), Some(Point::new(-1.0, 0.0)));
    assert_eq!(l.points().last().copied(), Some(Point::new(1.0, 0.0)));
    assert!(line(Point::ORIGIN, Point::ORIGIN, YELLOW).is_err());
}

#[test]
fn polygon_needs_a_perimeter() {
    assert!(polygon(&[Point::ORIGIN], true, YELLOW).is_err());
    assert!(polygon(&[Point::ORIGIN, Point::ORIGIN], true, YELLOW).is_err());
    let tri = polygon(
        &[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
        true,
        YELLOW,
    )
    .unwrap();
    assert_eq!(tri.get_top().unwrap().y, 1.0);
}

#[test]
fn dot_is_a_disc_around_center() {
    let d = dot(Point::new(1.0, 2.0), 0.1, YELLOW).unwrap();
    let c = d.get_center().unwrap();
    assert!((c.x - 1.0).abs() < 1e-9 && (c.y - 2.0).abs() < 1e-9);
    assert!(d.width().unwrap() <= 0.2 + 1e-9);
    assert!(dot(Point::ORIGIN, 0.0, YELLOW).is_err());
}

#[test]
fn brace_right_spans_reference_height() {
    let reference = Mobject::group(
        "span",
        vec![point(Point::new(0.0, 3.0)), point(Point::new(0.0, -2.0))],
    );
    let b = brace(&reference, RIGHT).unwrap();
    assert!((b.get_top().unwrap().y - 3.0).abs() < 1e-6);
    assert!((b.get_bottom().unwrap().y + 2.0).abs() < 1e-6);
    assert!((b.get_left().unwrap().x - BRACE_BUFF).abs() < 1e-6);
    assert!((b.get_right().unwrap().x - (BRACE_BUFF + BRACE_HEIGHT)).abs() < 1e-6);
}

#[test]
fn brace_up_spans_reference_width() {
    let r = rectangle(2.0, 1.0, BLUE_E).unwrap();
    let b = brace(&r, UP).unwrap();
    assert!((b.width().unwrap() - 2.0).abs() < 1e-6);
    assert!((b.get_bottom().unwrap().y - (0.5 + BRACE_BUFF)).abs() < 1e-6);
}

#[test]
fn brace_rejects_degenerate_input() {
    let single = point(Point::new(0.0, 1.0));
    assert!(brace(&single, RIGHT).is_err());
    assert!(brace(&Mobject::new("empty"), RIGHT).is_err());
    let r = rectangle(2.0, 1.0, BLUE_E).unwrap();
    assert!(brace(&r, Vec2::ZERO).is_err());
}
