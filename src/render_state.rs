// Per-frame render inputs, owned by whoever drives the UI.
//
// Slider callbacks never touch the transform math directly: they call
// `RenderState::apply(axis, value)` and the next frame reads the state back
// through `RenderState::matrix`.

use crate::mat3::Mat3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    TranslateX,
    TranslateY,
    Angle,
    ScaleX,
    ScaleY,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::TranslateX => "x",
            Axis::TranslateY => "y",
            Axis::Angle => "angle",
            Axis::ScaleX => "scaleX",
            Axis::ScaleY => "scaleY",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderState {
    pub translation: [f32; 2],
    pub angle_radians: f32,
    pub scale: [f32; 2],
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            translation: [200.0, 150.0],
            angle_radians: 0.0,
            scale: [1.0, 1.0],
        }
    }
}

impl RenderState {
    /// Stores a slider value.
    ///
    /// The angle slider runs clockwise: a value of `d` degrees sets the angle
    /// to `(360 - d)` degrees.
    pub fn apply(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::TranslateX => self.translation[0] = value,
            Axis::TranslateY => self.translation[1] = value,
            Axis::Angle => {
                let angle_in_degrees = 360.0 - value;
                self.angle_radians = angle_in_degrees * PI / 180.0;
            }
            Axis::ScaleX => self.scale[0] = value,
            Axis::ScaleY => self.scale[1] = value,
        }
        log::trace!("render state {axis}={value} -> {:?}", self);
    }

    /// The slider-facing value for `axis`; the inverse of `apply`.
    ///
    /// Angles come back in `[0, 360)`.
    pub fn value(&self, axis: Axis) -> f32 {
        match axis {
            Axis::TranslateX => self.translation[0],
            Axis::TranslateY => self.translation[1],
            Axis::Angle => (360.0 - self.angle_radians * 180.0 / PI).rem_euclid(360.0),
            Axis::ScaleX => self.scale[0],
            Axis::ScaleY => self.scale[1],
        }
    }

    /// Projection, then translate, then rotate, then scale.
    pub fn matrix(&self, width: i32, height: i32) -> Mat3 {
        Mat3::projection(width, height)
            .translate(self.translation[0], self.translation[1])
            .rotate(self.angle_radians)
            .scale(self.scale[0], self.scale[1])
    }
}
