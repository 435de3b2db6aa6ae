use crate::error::Result;
use crate::render_state::RenderState;
use crate::scene::Scene;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_clear_color() -> [u8; 4] {
    [0, 0, 0, 255]
}

/// Canvas size plus the initial slider state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default)]
    pub state: RenderState,
    #[serde(default = "default_clear_color")]
    pub clear_color: [u8; 4],
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            state: RenderState::default(),
            clear_color: default_clear_color(),
        }
    }
}

impl DemoConfig {
    /// Builds the scene, failing on an empty canvas.
    pub fn scene(&self) -> Result<Scene> {
        Ok(Scene::new(self.width, self.height)?.with_clear_color(self.clear_color))
    }
}

pub fn parse_config_json(json_text: &str) -> Result<DemoConfig> {
    Ok(serde_json::from_str(json_text)?)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let config = parse_config_json(&text)?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_object_gives_defaults() {
        let config = parse_config_json("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn parses_full_config() {
        let sample = r#"
        {
            "width": 640,
            "height": 480,
            "clear_color": [255, 255, 255, 255],
            "state": {
                "translation": [10, 20],
                "angle_radians": 0.5,
                "scale": [2, -1]
            }
        }
        "#;

        let config = parse_config_json(sample).expect("sample json should deserialize");
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.clear_color, [255, 255, 255, 255]);
        assert_eq!(config.state.translation, [10.0, 20.0]);
        assert_eq!(config.state.angle_radians, 0.5);
        assert_eq!(config.state.scale, [2.0, -1.0]);

        let scene = config.scene().unwrap();
        assert_eq!((scene.width, scene.height), (640, 480));
    }

    #[test]
    fn bad_json_is_a_json_error() {
        assert!(matches!(parse_config_json("{ width: 1 }"), Err(Error::Json(_))));
        assert!(matches!(
            parse_config_json(r#"{ "width": "wide" }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn zero_size_fails_when_building_the_scene() {
        let config = parse_config_json(r#"{ "width": 0 }"#).unwrap();
        assert!(matches!(config.scene(), Err(Error::EmptyCanvas { .. })));
    }

    #[test]
    fn load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.json");
        std::fs::write(&path, r#"{ "height": 300 }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.height, 300);
        assert_eq!(config.width, 800);

        let missing = load_config(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
