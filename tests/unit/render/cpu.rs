use super::*;
use crate::mobject::shapes::filled_rectangle;
use crate::style::color::{BLACK, BLUE_E, RED, WHITE};

fn small_camera() -> CameraConfig {
    CameraConfig {
        width_px: 64,
        height_px: 36,
        frame_height: 8.0,
        background: BLACK,
    }
}

fn block(w: f64, h: f64, color: crate::style::color::Color) -> Mobject {
    filled_rectangle(w, h, color).unwrap()
}

#[test]
fn empty_scene_renders_the_background() {
    let mut r = CpuRenderer::new(CameraConfig {
        background: WHITE,
        ..small_camera()
    })
    .unwrap();
    let frame = r.render(std::iter::empty()).unwrap();
    assert_eq!((frame.width, frame.height), (64, 36));
    assert!(frame.premultiplied);
    assert!(frame.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn filled_block_paints_its_color_at_the_center() {
    let mut r = CpuRenderer::new(small_camera()).unwrap();
    let m = block(2.0, 2.0, RED);
    let frame = r.render([&m]).unwrap();
    let [cr, cg, cb] = RED.to_rgb8();
    assert_eq!(frame.pixel(32, 18), Some([cr, cg, cb, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn later_mobjects_paint_over_earlier_ones() {
    let mut r = CpuRenderer::new(small_camera()).unwrap();
    let below = block(2.0, 2.0, RED);
    let above = block(1.0, 1.0, BLUE_E);
    let frame = r.render([&below, &above]).unwrap();
    let [br, bg, bb] = BLUE_E.to_rgb8();
    assert_eq!(frame.pixel(32, 18), Some([br, bg, bb, 255]));
}

#[test]
fn zero_opacity_draws_nothing_and_half_opacity_blends() {
    let mut r = CpuRenderer::new(small_camera()).unwrap();
    let mut m = block(2.0, 2.0, WHITE);
    m.set_opacity(0.0);
    let frame = r.render([&m]).unwrap();
    assert_eq!(frame.pixel(32, 18), Some([0, 0, 0, 255]));

    m.set_opacity(0.5);
    let frame = r.render([&m]).unwrap();
    let px = frame.pixel(32, 18).unwrap();
    assert!((120..=135).contains(&px[0]), "{px:?}");
}

#[test]
fn frozen_background_persists_across_frames() {
    let mut r = CpuRenderer::new(small_camera()).unwrap();
    let m = block(2.0, 2.0, RED);
    r.freeze([&m]).unwrap();
    assert!(r.has_frozen_background());
    let frame = r.render(std::iter::empty()).unwrap();
    let [cr, cg, cb] = RED.to_rgb8();
    assert_eq!(frame.pixel(32, 18), Some([cr, cg, cb, 255]));

    r.reset_background().unwrap();
    let frame = r.render(std::iter::empty()).unwrap();
    assert_eq!(frame.pixel(32, 18), Some([0, 0, 0, 255]));
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let err = CpuRenderer::new(CameraConfig {
        width_px: 70_000,
        ..small_camera()
    })
    .unwrap_err();
    assert!(matches!(err, StrataError::Render(_)));
}
