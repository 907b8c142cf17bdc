use super::*;
use crate::mobject::shapes::{line, rectangle};
use crate::style::color::{BLACK, BLUE_E, RED, WHITE};

fn two_points(name: &str, a: (f64, f64), b: (f64, f64)) -> Mobject {
    Mobject::from_points(name, vec![Point::new(a.0, a.1), Point::new(b.0, b.1)], WHITE)
}

fn begin(graph: &mut SceneGraph, anim: Animation) -> ActiveAnimation {
    ActiveAnimation::begin(anim, graph, 1.0, &RateFunc::Linear).unwrap()
}

#[test]
fn begin_shows_the_target_and_resolves_defaults() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("m", (0.0, 0.0), (1.0, 0.0)));
    let a = begin(&mut g, Animation::shift(id, Vec2::new(1.0, 0.0)));
    assert!(g.is_displayed(id));
    assert_eq!(a.run_time(), 1.0);
    assert_eq!(a.progress(0.25), 0.25);
    assert_eq!(a.progress(5.0), 1.0);
}

#[test]
fn invalid_run_time_is_an_animation_error() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("m", (0.0, 0.0), (1.0, 0.0)));
    for bad in [0.0, -1.0, f64::NAN] {
        let err = ActiveAnimation::begin(
            Animation::fade_in(id).with_run_time(bad),
            &mut g,
            1.0,
            &RateFunc::Smooth,
        )
        .unwrap_err();
        assert!(matches!(err, StrataError::Animation(_)));
    }
}

#[test]
fn unknown_mobject_is_rejected() {
    let mut g = SceneGraph::new();
    let id = g.insert(Mobject::new("gone"));
    g.remove(id).unwrap();
    let err = ActiveAnimation::begin(Animation::fade_in(id), &mut g, 1.0, &RateFunc::Smooth)
        .unwrap_err();
    assert!(matches!(err, StrataError::Construction(_)));
}

#[test]
fn transform_interpolates_and_adopts_target() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("src", (0.0, 0.0), (2.0, 0.0)));
    let mut target = Mobject::group("dst", vec![two_points("child", (0.0, 2.0), (2.0, 2.0))]);
    target.set_color(RED);

    let mut a = begin(&mut g, Animation::transform(id, target));
    a.update(&mut g, 0.5).unwrap();
    let mid = g.get(id).unwrap();
    assert_eq!(mid.points(), &[Point::new(0.0, 1.0), Point::new(2.0, 1.0)]);
    assert!(mid.children().is_empty());

    a.finish(&mut g).unwrap();
    let done = g.get(id).unwrap();
    assert_eq!(done.name(), "src");
    assert_eq!(done.children().len(), 1);
    assert_eq!(done.get_color(), RED);
}

#[test]
fn transform_resamples_unequal_point_counts() {
    let mut g = SceneGraph::new();
    let src = rectangle(2.0, 1.0, BLUE_E).unwrap();
    let dst = line(Point::new(-1.0, 0.0), Point::new(1.0, 0.0), WHITE).unwrap();
    let n = src.len_points().max(dst.len_points());
    let id = g.insert(src);
    let mut a = begin(&mut g, Animation::transform(id, dst));
    a.update(&mut g, 0.3).unwrap();
    assert_eq!(g.get(id).unwrap().len_points(), n);
}

#[test]
fn transform_against_an_empty_target_fails_to_align() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("m", (0.0, 0.0), (1.0, 0.0)));
    let err = ActiveAnimation::begin(
        Animation::transform(id, Mobject::new("empty")),
        &mut g,
        1.0,
        &RateFunc::Smooth,
    )
    .unwrap_err();
    assert!(matches!(err, StrataError::Alignment(_)));
}

#[test]
fn there_and_back_transform_keeps_the_start_structure() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("m", (0.0, 0.0), (1.0, 0.0)));
    let a = begin(
        &mut g,
        Animation::transform(id, two_points("t", (0.0, 5.0), (1.0, 5.0)))
            .with_rate(RateFunc::ThereAndBack),
    );
    a.finish(&mut g).unwrap();
    let m = g.get(id).unwrap();
    assert_eq!(m.name(), "m");
    assert!(m.points().iter().all(|p| p.y.abs() < 1e-9));
}

#[test]
fn fade_in_scales_opacity_from_zero() {
    let mut g = SceneGraph::new();
    let mut m = two_points("m", (0.0, 0.0), (1.0, 0.0));
    m.set_opacity(0.8);
    let id = g.insert(m);
    let mut a = begin(&mut g, Animation::fade_in(id));
    a.update(&mut g, 0.0).unwrap();
    assert_eq!(g.get(id).unwrap().opacity(), 0.0);
    a.update(&mut g, 0.5).unwrap();
    assert!((g.get(id).unwrap().opacity() - 0.4).abs() < 1e-12);
    a.finish(&mut g).unwrap();
    assert!((g.get(id).unwrap().opacity() - 0.8).abs() < 1e-12);
    assert!(g.is_displayed(id));
}

#[test]
fn fade_out_removes_from_display_list() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("m", (0.0, 0.0), (1.0, 0.0)));
    g.show(id).unwrap();
    let a = begin(&mut g, Animation::fade_out(id));
    a.finish(&mut g).unwrap();
    assert!(!g.is_displayed(id));
    assert!(g.contains(id));
    assert_eq!(g.get(id).unwrap().opacity(), 0.0);
}

#[test]
fn fade_to_color_blends_every_point() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("m", (0.0, 0.0), (1.0, 0.0)));
    let mut a = begin(&mut g, Animation::fade_to_color(id, BLACK));
    a.update(&mut g, 0.5).unwrap();
    let expected = WHITE.interpolate(BLACK, 0.5);
    assert!(g.get(id).unwrap().colors().iter().all(|c| *c == expected));
    a.finish(&mut g).unwrap();
    assert_eq!(g.get(id).unwrap().get_color(), BLACK);
}

#[test]
fn grow_from_center_starts_collapsed() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("m", (0.0, 0.0), (2.0, 0.0)));
    let mut a = begin(&mut g, Animation::grow_from_center(id));
    a.update(&mut g, 0.0).unwrap();
    assert!(g.get(id).unwrap().points().iter().all(|p| *p == Point::new(1.0, 0.0)));
    a.update(&mut g, 0.5).unwrap();
    assert_eq!(g.get(id).unwrap().width().unwrap(), 1.0);
    a.finish(&mut g).unwrap();
    assert_eq!(g.get(id).unwrap().width().unwrap(), 2.0);
}

#[test]
fn grow_from_center_of_empty_mobject_fails() {
    let mut g = SceneGraph::new();
    let id = g.insert(Mobject::new("empty"));
    let err =
        ActiveAnimation::begin(Animation::grow_from_center(id), &mut g, 1.0, &RateFunc::Smooth)
            .unwrap_err();
    assert!(matches!(err, StrataError::Construction(_)));
}

#[test]
fn show_creation_reveals_points_in_order() {
    let mut g = SceneGraph::new();
    let pts: Vec<Point> = (0..10).map(|i| Point::new(f64::from(i), 0.0)).collect();
    let id = g.insert(Mobject::from_points("m", pts, WHITE));
    let mut a = begin(&mut g, Animation::show_creation(id));
    a.update(&mut g, 0.0).unwrap();
    assert_eq!(g.get(id).unwrap().len_points(), 0);
    a.update(&mut g, 0.3).unwrap();
    assert_eq!(g.get(id).unwrap().points().last(), Some(&Point::new(2.0, 0.0)));
    a.finish(&mut g).unwrap();
    assert_eq!(g.get(id).unwrap().len_points(), 10);
}

#[test]
fn move_along_path_tracks_path_proportion() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("m", (-0.1, 0.0), (0.1, 0.0)));
    let path = line(Point::new(-2.0, 1.0), Point::new(2.0, 1.0), WHITE).unwrap();
    let mut a = begin(&mut g, Animation::move_along_path(id, path));
    a.update(&mut g, 0.0).unwrap();
    let c = g.get(id).unwrap().get_center().unwrap();
    assert!((c - Point::new(-2.0, 1.0)).hypot() < 1e-9);
    a.finish(&mut g).unwrap();
    let c = g.get(id).unwrap().get_center().unwrap();
    assert!((c - Point::new(2.0, 1.0)).hypot() < 1e-9);
}

#[test]
fn shift_is_incremental_and_exact_at_the_end() {
    let mut g = SceneGraph::new();
    let id = g.insert(two_points("m", (0.0, 0.0), (1.0, 0.0)));
    let mut a = begin(&mut g, Animation::shift(id, Vec2::new(0.0, 2.0)));
    a.update(&mut g, 0.25).unwrap();
    a.update(&mut g, 0.75).unwrap();
    assert!((g.get(id).unwrap().points()[0].y - 1.5).abs() < 1e-12);
    a.finish(&mut g).unwrap();
    assert!((g.get(id).unwrap().points()[0].y - 2.0).abs() < 1e-12);
}
