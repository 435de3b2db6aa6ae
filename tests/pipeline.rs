use trixform::config::parse_config_json;
use trixform::raster::{self, Viewport};
use trixform::scene::TRIANGLE_POSITIONS;
use trixform::{Axis, Mat3, RenderState};

#[test]
fn slider_updates_move_the_triangle() {
    let config = parse_config_json(r#"{ "width": 400, "height": 300 }"#).unwrap();
    let scene = config.scene().unwrap();

    let mut state = config.state;
    let before = scene.render(&state);
    state.apply(Axis::TranslateX, 300.0);
    let after = scene.render(&state);

    let bg = [0, 0, 0, 255];
    let at = |im: &trixform::im::RGBAIm, x, y| im.get(x, y).unwrap();
    // (200, 150) is inside the triangle only before the move.
    assert_ne!(at(&before, 200, 150), bg);
    assert_ne!(at(&after, 300, 150), bg);
    assert_eq!(at(&after, 120, 150), bg);
}

#[test]
fn render_matches_manual_pipeline() {
    let state = RenderState {
        translation: [120.0, 90.0],
        angle_radians: 0.3,
        scale: [0.5, 0.75],
    };
    let scene = trixform::scene::Scene::new(256, 192).unwrap();
    let from_scene = scene.render(&state);

    let mut manual = trixform::im::RGBAIm::new(256, 192);
    raster::clear(&mut manual, [0, 0, 0, 255]);
    let m = Mat3::projection(256, 192)
        .translate(120.0, 90.0)
        .rotate(0.3)
        .scale(0.5, 0.75);
    let vp = Viewport::full(&manual);
    let n = raster::draw_triangles(&mut manual, &vp, &TRIANGLE_POSITIONS, &m);

    assert!(n > 0);
    assert_eq!(from_scene.arr, manual.arr);
}

#[cfg(feature = "im-io")]
#[test]
fn rendered_frame_survives_png() {
    let scene = trixform::scene::Scene::new(128, 96).unwrap();
    let mut state = RenderState::default();
    state.apply(Axis::TranslateX, 64.0);
    state.apply(Axis::TranslateY, 48.0);
    state.apply(Axis::ScaleX, 0.25);
    state.apply(Axis::ScaleY, 0.25);
    let im = scene.render(&state);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    im.save_png(&path).unwrap();

    let back = trixform::im::RGBAIm::load_png(&path).unwrap();
    assert_eq!((back.w, back.h), (128, 96));
    assert_eq!(back.arr, im.arr);
}
