use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use trixform::config::{DemoConfig, load_config};
use trixform::render_state::Axis;
use trixform::slider_ui;

#[derive(Parser, Debug)]
#[command(about = "Draw a triangle moved by 2D transform sliders", long_about = None)]
struct Args {
    /// JSON config with canvas size and initial transform state
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render one frame to this PNG instead of opening the slider window
    #[arg(long)]
    png: Option<PathBuf>,

    #[arg(long)]
    width: Option<i32>,
    #[arg(long)]
    height: Option<i32>,

    /// Translation in pixels
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f32>,

    /// Angle slider value in degrees (clockwise)
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    sx: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    sy: Option<f32>,
}

impl Args {
    fn apply_to(&self, config: &mut DemoConfig) {
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        for (axis, v) in [
            (Axis::TranslateX, self.x),
            (Axis::TranslateY, self.y),
            (Axis::Angle, self.angle),
            (Axis::ScaleX, self.sx),
            (Axis::ScaleY, self.sy),
        ] {
            if let Some(v) = v {
                config.state.apply(axis, v);
            }
        }
    }
}

#[cfg(feature = "im-io")]
fn write_png(config: &DemoConfig, path: &std::path::Path) -> Result<()> {
    let scene = config.scene()?;
    let im = scene.render(&config.state);
    im.save_png(path)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(not(feature = "im-io"))]
fn write_png(_config: &DemoConfig, _path: &std::path::Path) -> Result<()> {
    anyhow::bail!("PNG output needs the `im-io` feature")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path.display()))?,
        None => DemoConfig::default(),
    };
    args.apply_to(&mut config);
    log::debug!("config: {config:?}");

    match &args.png {
        Some(path) => write_png(&config, path),
        None => Ok(slider_ui::show("trixform", &config)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn overrides_go_through_render_state() {
        let args = Args::parse_from([
            "trixform", "--width", "640", "--x", "12", "--angle", "90", "--sx", "-2",
        ]);
        let mut config = DemoConfig::default();
        args.apply_to(&mut config);

        assert_eq!((config.width, config.height), (640, 600));
        assert_eq!(config.state.translation, [12.0, 150.0]);
        // Angle slider is clockwise: 90 -> 270 degrees.
        assert!((config.state.angle_radians - 1.5 * PI).abs() < 1e-5);
        assert_eq!(config.state.scale, [-2.0, 1.0]);
    }

    #[test]
    fn no_overrides_keep_config() {
        let args = Args::parse_from(["trixform"]);
        let mut config = DemoConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config, DemoConfig::default());
    }
}
