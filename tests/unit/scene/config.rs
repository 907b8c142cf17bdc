use super::*;
use crate::style::color::{BLUE_E, WHITE};

#[test]
fn defaults_match_the_documented_values() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.camera.width_px, 1280);
    assert_eq!(cfg.camera.height_px, 720);
    assert_eq!(cfg.camera.frame_height, 8.0);
    assert_eq!(cfg.fps, Fps::new(30, 1).unwrap());
    assert_eq!(cfg.dither_secs, 1.0);
    assert_eq!(cfg.default_rate, RateFunc::Smooth);
    assert!(!cfg.skip_rendering);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults_for_missing_keys() {
    let cfg = RenderConfig::from_json_str(
        r##"{
            "scene": { "camera": { "width_px": 320, "height_px": 180, "background": "#FFFFFF" },
                       "fps": { "num": 15, "den": 1 },
                       "default_rate": "linear" },
            "layers": { "n_layers": 3 }
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.scene.camera.width_px, 320);
    assert_eq!(cfg.scene.camera.frame_height, 8.0);
    assert_eq!(cfg.scene.camera.background, WHITE);
    assert_eq!(cfg.scene.fps.num, 15);
    assert_eq!(cfg.scene.default_rate, RateFunc::Linear);
    assert_eq!(cfg.scene.dither_secs, 1.0);
    assert_eq!(cfg.layers.n_layers, 3);
    assert_eq!(cfg.layers.top_color, BLUE_E);
}

#[test]
fn unknown_keys_are_serde_errors() {
    let err = RenderConfig::from_json_str(r#"{ "scene": { "fsp": 3 } }"#).unwrap_err();
    assert!(matches!(err, StrataError::Serde(_)));
}

#[test]
fn invalid_values_are_validation_errors() {
    for json in [
        r#"{ "scene": { "fps": { "num": 30, "den": 0 } } }"#,
        r#"{ "scene": { "dither_secs": 0 } }"#,
        r#"{ "scene": { "camera": { "height_px": 0 } } }"#,
        r#"{ "layers": { "n_layers": 0 } }"#,
    ] {
        let err = RenderConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, StrataError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let err = RenderConfig::from_path(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("definitely/not/here.json"));
}
