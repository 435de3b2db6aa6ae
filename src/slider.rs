use crate::render_state::{Axis, RenderState};

/// Describes one labelled slider.
///
/// The widget itself works in "slider units" (`value / step`); `from_slider`
/// and `format_value` convert back.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderDesc {
    pub name: String,
    pub axis: Axis,
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub precision: usize,
    /// Decimal places shown in the label. `None` means `precision`.
    pub ui_precision: Option<usize>,
    pub ui_mult: f32,
}

impl SliderDesc {
    /// A slider with the widget defaults: range `0..=1`, step 1, no decimals.
    ///
    /// `selector` is a CSS-style id; a leading `#` is dropped to form the name.
    pub fn new(selector: &str, axis: Axis) -> Self {
        let name = selector.strip_prefix('#').unwrap_or(selector).to_owned();
        Self {
            name,
            axis,
            value: 0.0,
            min: 0.0,
            max: 1.0,
            step: 1.0,
            precision: 0,
            ui_precision: None,
            ui_mult: 1.0,
        }
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the step; non-positive or non-finite steps keep the current one.
    pub fn with_step(mut self, step: f32) -> Self {
        if step.is_finite() && step > 0.0 {
            self.step = step;
        }
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn ui_precision(&self) -> usize {
        self.ui_precision.unwrap_or(self.precision)
    }

    /// `(min, max, value)` in slider units.
    pub fn slider_range(&self) -> (f32, f32, f32) {
        (self.min / self.step, self.max / self.step, self.value / self.step)
    }

    /// Converts a slider position back into a render-state value.
    #[inline]
    pub fn from_slider(&self, raw: f32) -> f32 {
        raw * self.step
    }

    /// Label text for a slider position.
    pub fn format_value(&self, raw: f32) -> String {
        let v = raw * self.step * self.ui_mult;
        format!("{:.*}", self.ui_precision(), v)
    }
}

/// The demo's sliders, seeded from `state`.
pub fn default_sliders(width: i32, height: i32, state: &RenderState) -> Vec<SliderDesc> {
    let scale = |selector: &str, axis: Axis| {
        SliderDesc::new(selector, axis)
            .with_value(state.value(axis))
            .with_range(-5.0, 5.0)
            .with_step(0.01)
            .with_precision(2)
    };

    vec![
        SliderDesc::new("#x", Axis::TranslateX)
            .with_value(state.value(Axis::TranslateX))
            .with_range(0.0, width as f32),
        SliderDesc::new("#y", Axis::TranslateY)
            .with_value(state.value(Axis::TranslateY))
            .with_range(0.0, height as f32),
        SliderDesc::new("#angle", Axis::Angle)
            .with_value(state.value(Axis::Angle))
            .with_range(0.0, 360.0),
        scale("#scaleX", Axis::ScaleX),
        scale("#scaleY", Axis::ScaleY),
    ]
}
