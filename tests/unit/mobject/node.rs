use super::*;
use crate::style::color::{BLUE_A, BLUE_E, YELLOW};

fn square() -> Mobject {
    Mobject::from_points(
        "square",
        vec![
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ],
        BLUE_E,
    )
}

#[test]
fn anchors_come_from_the_bounding_box() {
    let mut m = square();
    m.shift(Vec2::new(2.0, 3.0));
    assert_eq!(m.get_top().unwrap(), Point::new(2.0, 4.0));
    assert_eq!(m.get_bottom().unwrap(), Point::new(2.0, 2.0));
    assert_eq!(m.get_left().unwrap(), Point::new(1.0, 3.0));
    assert_eq!(m.get_right().unwrap(), Point::new(3.0, 3.0));
    assert_eq!(m.get_center().unwrap(), Point::new(2.0, 3.0));
    assert_eq!(m.width().unwrap(), 2.0);
    assert_eq!(m.height().unwrap(), 2.0);
}

#[test]
fn anchors_of_empty_mobject_are_construction_errors() {
    let m = Mobject::group("empty", vec![Mobject::new("inner")]);
    assert!(m.is_empty());
    assert!(m.bounding_box().is_none());
    let err = m.get_top().unwrap_err();
    assert!(matches!(err, StrataError::Construction(_)));
    assert!(m.get_center().is_err());
}

#[test]
fn shift_moves_children_too() {
    let mut child = square();
    child.shift(Vec2::new(10.0, 0.0));
    let mut parent = square();
    parent.add_child(child);
    parent.shift(Vec2::new(0.0, -1.0));
    assert_eq!(parent.points()[0], Point::new(-1.0, -2.0));
    assert_eq!(parent.children()[0].points()[0], Point::new(9.0, -2.0));
    assert_eq!(parent.get_right().unwrap().x, 11.0);
}

#[test]
fn copy_shares_no_state_with_original() {
    let mut original = Mobject::group("g", vec![square()]);
    let copy = original.clone();
    original.shift(Vec2::new(5.0, 5.0));
    original.set_color(YELLOW);
    assert_eq!(copy.children()[0].points()[0], Point::new(-1.0, -1.0));
    assert_eq!(copy.get_color(), BLUE_E);
    assert_ne!(copy, original);
}

#[test]
fn ingest_flattens_family_in_paint_order() {
    let mut a = square();
    a.set_color(BLUE_A);
    let mut b = square();
    b.shift(Vec2::new(0.0, 5.0));
    let mut g = Mobject::group("g", vec![a, Mobject::group("inner", vec![b])]);
    assert_eq!(g.family().len(), 4);

    g.ingest_sub_mobjects();
    assert!(g.children().is_empty());
    assert_eq!(g.len_points(), 8);
    assert_eq!(g.colors()[0], BLUE_A);
    assert_eq!(g.colors()[7], BLUE_E);
    assert_eq!(g.points()[4], Point::new(-1.0, 4.0));
}

#[test]
fn gradient_follows_sorted_rank() {
    let mut m = square();
    m.sort_points(|p| -p.y);
    assert_eq!(m.points()[0].y, 1.0);
    assert_eq!(m.points()[3].y, -1.0);

    m.gradient_highlight(BLUE_E, BLUE_A);
    assert_eq!(m.colors()[0], BLUE_E);
    assert_eq!(m.colors()[3], BLUE_A);
    let third = BLUE_E.interpolate(BLUE_A, 1.0 / 3.0);
    assert!(m.colors()[1].distance(third) < 1e-12);
}

#[test]
fn gradient_spans_children() {
    let mut g = Mobject::group("g", vec![square(), square()]);
    g.gradient_highlight(BLUE_E, BLUE_A);
    assert_eq!(g.children()[0].colors()[0], BLUE_E);
    assert_eq!(g.children()[1].colors()[3], BLUE_A);
}

#[test]
fn scale_keeps_center() {
    let mut m = square();
    m.shift(Vec2::new(3.0, 0.0));
    m.scale(0.5);
    assert_eq!(m.get_center().unwrap(), Point::new(3.0, 0.0));
    assert_eq!(m.width().unwrap(), 1.0);
}

#[test]
fn next_to_places_with_buffer() {
    let reference = square();
    let mut m = square();
    m.scale(0.5);
    m.next_to(&reference, RIGHT, 0.25).unwrap();
    assert!((m.get_left().unwrap().x - 1.25).abs() < 1e-12);
    assert!(m.get_center().unwrap().y.abs() < 1e-12);
}

#[test]
fn point_from_proportion_walks_the_points() {
    let m = Mobject::from_points(
        "line",
        vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)],
        YELLOW,
    );
    assert_eq!(m.point_from_proportion(0.0).unwrap(), Point::new(0.0, 0.0));
    assert_eq!(m.point_from_proportion(0.25).unwrap(), Point::new(0.5, 0.0));
    assert_eq!(m.point_from_proportion(1.0).unwrap(), Point::new(2.0, 0.0));
    assert!(Mobject::new("empty").point_from_proportion(0.5).is_err());
}

#[test]
fn get_color_falls_back_to_default() {
    let mut m = Mobject::new("m");
    assert_eq!(m.get_color(), WHITE);
    m.set_color(YELLOW);
    m.push_point(Point::ORIGIN);
    assert_eq!(m.colors()[0], YELLOW);
}
