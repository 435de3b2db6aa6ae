// Interactive slider window.
//
// Sliders on the left, the rendered canvas in the middle. Each slider move
// goes through `RenderState::apply` and marks the frame dirty; the frame is
// re-rendered on the CPU and uploaded as a texture.
//
// When the `slider_ui` feature is disabled (or `cli_only` is enabled), `show`
// becomes a no-op.

#[cfg(all(feature = "slider_ui", not(feature = "cli_only")))]
mod imp {
    use crate::config::DemoConfig;
    use crate::error::{Error, Result};
    use crate::im::RGBAIm;
    use crate::render_state::RenderState;
    use crate::scene::Scene;
    use crate::slider::{SliderDesc, default_sliders};
    use eframe::egui;

    struct SliderRow {
        desc: SliderDesc,
        // Current position in slider units.
        raw: f32,
    }

    struct SliderApp {
        scene: Scene,
        state: RenderState,
        sliders: Vec<SliderRow>,
        rgba: RGBAIm,
        texture: Option<egui::TextureHandle>,
        dirty: bool,
    }

    impl SliderApp {
        fn new(scene: Scene, state: RenderState) -> Self {
            let sliders = default_sliders(scene.width, scene.height, &state)
                .into_iter()
                .map(|desc| {
                    let (_, _, raw) = desc.slider_range();
                    SliderRow { desc, raw }
                })
                .collect();
            let rgba = RGBAIm::new(scene.width as usize, scene.height as usize);

            Self {
                scene,
                state,
                sliders,
                rgba,
                texture: None,
                dirty: true,
            }
        }

        fn render_if_needed(&mut self, ctx: &egui::Context) {
            if !self.dirty && self.texture.is_some() {
                return;
            }

            self.scene.render_into(&self.state, &mut self.rgba);
            let img = egui::ColorImage::from_rgba_unmultiplied([self.rgba.w, self.rgba.h], &self.rgba.arr);

            match &mut self.texture {
                Some(tex) => tex.set(img, egui::TextureOptions::NEAREST),
                None => self.texture = Some(ctx.load_texture("canvas", img, egui::TextureOptions::NEAREST)),
            }

            self.dirty = false;
        }

        fn sliders_ui(&mut self, ui: &mut egui::Ui) {
            for row in &mut self.sliders {
                let (min, max, _) = row.desc.slider_range();
                ui.horizontal(|ui| {
                    ui.label(&row.desc.name);
                    ui.monospace(row.desc.format_value(row.raw));
                });
                let resp = ui.add(
                    egui::Slider::new(&mut row.raw, min..=max)
                        .step_by(1.0)
                        .show_value(false),
                );
                if resp.changed() {
                    self.state.apply(row.desc.axis, row.desc.from_slider(row.raw));
                    self.dirty = true;
                }
                ui.add_space(6.0);
            }
        }
    }

    impl eframe::App for SliderApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            egui::SidePanel::left("sliders")
                .resizable(true)
                .default_width(240.0)
                .show(ctx, |ui| {
                    ui.heading("Transform");
                    ui.separator();
                    self.sliders_ui(ui);
                });

            self.render_if_needed(ctx);

            egui::CentralPanel::default().show(ctx, |ui| {
                let Some(tex) = &self.texture else { return };
                let size = egui::vec2(self.rgba.w as f32, self.rgba.h as f32);
                ui.add(egui::Image::new((tex.id(), size)));
            });
        }
    }

    pub fn show(title: &str, config: &DemoConfig) -> Result<()> {
        let scene = config.scene()?;
        let state = config.state;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(
                scene.width as f32 + 280.0,
                scene.height as f32 + 40.0,
            )),
            ..Default::default()
        };

        log::info!("opening slider window {}x{}", scene.width, scene.height);
        eframe::run_native(
            title,
            options,
            Box::new(move |_cc| Ok(Box::new(SliderApp::new(scene, state)))),
        )
        .map_err(|e| Error::Ui(e.to_string()))
    }
}

/// No-op implementation when slider_ui feature is disabled or cli_only is enabled.
#[cfg(not(all(feature = "slider_ui", not(feature = "cli_only"))))]
mod imp {
    use crate::config::DemoConfig;
    use crate::error::Result;

    pub fn show(_title: &str, config: &DemoConfig) -> Result<()> {
        config.scene()?;
        log::warn!("built without the slider_ui feature; nothing to show");
        Ok(())
    }
}

pub use imp::*;
