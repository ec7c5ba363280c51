//! Desktop viewer for generated background textures, built with eframe/egui.
//!
//! [`Viewer`] owns a [`Generator`] and the display settings, and implements
//! [`eframe::App`]. Generation itself is synchronous: the texture is built
//! once at startup and again only when explicitly requested.

use eframe::App;
use glam::UVec2;
use std::{cell::RefCell, rc::Rc, time::Duration};
use texgen_core::{ChannelPolicy, Config, GenerateError, Generator, Seed, Stage};

/// Stage timings collected from the generator's hook.
type TimingLog = Rc<RefCell<Vec<(Stage, Duration)>>>;

/// Main application state for the viewer.
///
/// ### Fields
/// - `generator` - Generation context (seed, presets, timing hook).
/// - `preset_names` - Names shown in the preset picker, by registry index.
/// - `selected` - Index of the preset to generate.
/// - `size` - Texture size in pixels.
///
/// - `policy` - How unclamped channels are folded into bytes for display.
/// - `bottom_up` - Show row 0 at the bottom, like a bottom-up bitmap.
/// - `zoom` - Display scale of the texture.
///
/// - `rng` - Random source for fresh seeds.
/// - `timings` - Per-stage durations of the last run.
/// - `texture` - The uploaded texture, if a run succeeded.
/// - `dirty` - Whether the next frame must regenerate.
/// - `last_error` - Message of the last failed run.
pub struct Viewer {
    generator: Generator,
    preset_names: Vec<String>,
    selected: usize,
    size: UVec2,

    policy: ChannelPolicy,
    bottom_up: bool,
    zoom: f32,

    rng: rand::rngs::ThreadRng,
    timings: TimingLog,
    texture: Option<egui::TextureHandle>,
    dirty: bool,
    last_error: Option<String>,
}

impl Viewer {
    /// Creates a viewer set up to render "Marble" at 640x360 with the
    /// classic seed. The first frame generates the texture.
    pub fn new() -> Self {
        let timings: TimingLog = Rc::default();
        let sink = Rc::clone(&timings);
        let generator = Generator::new(Config::default()).on_timing(move |stage, elapsed| {
            sink.borrow_mut().push((stage, elapsed));
        });
        let preset_names = generator.registry().names().map(str::to_owned).collect();

        Self {
            generator,
            preset_names,
            selected: 0,
            size: UVec2::new(640, 360),
            policy: ChannelPolicy::default(),
            bottom_up: true,
            zoom: 1.0,
            rng: rand::rng(),
            timings,
            texture: None,
            dirty: true,
            last_error: None,
        }
    }

    fn selected_name(&self) -> &str {
        self.preset_names
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("?")
    }

    /// Runs the selected preset and returns display-ready RGBA8 rows.
    fn render_rgba(&mut self) -> Result<Vec<u8>, GenerateError> {
        self.timings.borrow_mut().clear();

        let (w, h) = (self.size.x as usize, self.size.y as usize);
        let texture = self.generator.generate(w, h, self.selected)?;
        Ok(display_rows(
            &texture.to_rgba8(self.policy),
            w,
            self.bottom_up,
        ))
    }

    /// Regenerates and uploads the texture, or records why it failed.
    fn regenerate(&mut self, ctx: &egui::Context) {
        self.dirty = false;

        match self.render_rgba() {
            Ok(rgba) => {
                let size = [self.size.x as usize, self.size.y as usize];
                let image = egui::ColorImage::from_rgba_unmultiplied(size, &rgba);
                self.texture =
                    Some(ctx.load_texture("background", image, egui::TextureOptions::NEAREST));
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Replaces the seed with a random one and schedules a run.
    fn reseed(&mut self) {
        self.generator.config_mut().seed = Seed::random(&mut self.rng);
        self.dirty = true;
    }

    fn total_time(&self) -> Duration {
        self.timings.borrow().iter().map(|(_, d)| *d).sum()
    }

    /// Helper to draw a labeled `u32` [`egui::DragValue`].
    ///
    /// ### Returns
    /// `true` if the value changed.
    fn labeled_drag_u32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut u32,
        range: std::ops::RangeInclusive<u32>,
        speed: f64,
    ) -> bool {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed))
                .changed()
        })
        .inner
    }

    /// Builds the top panel (run controls, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⟳ Regenerate").clicked() {
                    self.dirty = true;
                }

                if ui.button("Reseed").clicked() {
                    self.reseed();
                }

                if ui.button("Classic seed").clicked() {
                    self.generator.config_mut().seed = Seed::CLASSIC;
                    self.dirty = true;
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.25..=8.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (timings, size, errors).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "total = {:.2} ms",
                    self.total_time().as_secs_f64() * 1000.0
                ));
                for (stage, elapsed) in self.timings.borrow().iter().rev() {
                    ui.label(format!("{stage}: {:.2} ms", elapsed.as_secs_f64() * 1000.0));
                }
                ui.separator();
                ui.label(format!(
                    "{} @ {}x{}",
                    self.selected_name(),
                    self.size.x,
                    self.size.y
                ));
                if let Some(err) = &self.last_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, err.as_str());
                }
            });
        });
    }

    /// Builds the right-hand configuration panel.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                let before = self.selected;
                egui::ComboBox::from_label("Preset")
                    .selected_text(self.selected_name().to_owned())
                    .show_ui(ui, |ui| {
                        for (i, name) in self.preset_names.iter().enumerate() {
                            ui.selectable_value(&mut self.selected, i, name.as_str());
                        }
                    });
                self.dirty |= before != self.selected;

                ui.separator();
                ui.label("Size");
                self.dirty |= Self::labeled_drag_u32(ui, "width:", &mut self.size.x, 2..=4096, 4.0);
                self.dirty |=
                    Self::labeled_drag_u32(ui, "height:", &mut self.size.y, 2..=4096, 4.0);

                ui.separator();
                ui.label("Seed");
                let seed = &mut self.generator.config_mut().seed;
                self.dirty |=
                    Self::labeled_drag_u32(ui, "state:", &mut seed.state, 0..=u32::MAX, 1.0);
                self.dirty |= Self::labeled_drag_u32(
                    ui,
                    "increment:",
                    &mut seed.increment,
                    0..=u32::MAX,
                    1.0,
                );

                ui.separator();
                ui.label("Channels");
                let policy = self.policy;
                ui.radio_value(&mut self.policy, ChannelPolicy::Wrap, "Wrap (low byte)");
                ui.radio_value(&mut self.policy, ChannelPolicy::Clamp, "Clamp 0..=255");
                self.dirty |= policy != self.policy;

                self.dirty |= ui
                    .checkbox(&mut self.bottom_up, "Bottom-up rows")
                    .changed();

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    *self.generator.config_mut() = Config::default();
                    self.dirty = true;
                }
            });
    }

    /// Builds the central panel showing the texture.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(texture) = &self.texture else {
                ui.label("No texture yet.");
                return;
            };

            let size = texture.size_vec2() * self.zoom;
            egui::ScrollArea::both().show(ui, |ui| {
                ui.add(egui::Image::new(egui::load::SizedTexture::new(
                    texture.id(),
                    size,
                )));
            });
        });
    }
}

/// Orders RGBA8 rows for display, reversing them when `bottom_up` is set.
fn display_rows(rgba: &[u8], width: usize, bottom_up: bool) -> Vec<u8> {
    if !bottom_up || width == 0 {
        return rgba.to_vec();
    }
    rgba.chunks_exact(width * 4)
        .rev()
        .flatten()
        .copied()
        .collect()
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// Panels are built first so that changed settings take effect in the
    /// same frame; the texture is regenerated only when something asked for it.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);

        if self.dirty {
            self.regenerate(ctx);
        }

        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_viewer_lists_builtin_presets() {
        let viewer = Viewer::new();
        assert_eq!(viewer.preset_names.len(), 9);
        assert_eq!(viewer.selected_name(), "Marble");
        assert!(viewer.dirty);
        assert!(viewer.texture.is_none());
    }

    #[test]
    fn render_rgba_produces_one_opaque_pixel_per_cell() {
        let mut viewer = Viewer::new();
        viewer.size = UVec2::new(12, 8);

        let rgba = viewer.render_rgba().unwrap();

        assert_eq!(rgba.len(), 12 * 8 * 4);
        assert!(rgba.chunks_exact(4).all(|p| p[3] == 255));
        // Growth plus every filter reported a timing.
        assert_eq!(viewer.timings.borrow().len(), 3);
    }

    #[test]
    fn render_rgba_reports_degenerate_size() {
        let mut viewer = Viewer::new();
        viewer.size = UVec2::new(1, 8);

        assert_eq!(
            viewer.render_rgba(),
            Err(GenerateError::TooSmall {
                width: 1,
                height: 8
            })
        );
    }

    #[test]
    fn bottom_up_reverses_rows_only() {
        let rgba: Vec<u8> = (0..16).collect();

        assert_eq!(display_rows(&rgba, 2, false), rgba);
        assert_eq!(
            display_rows(&rgba, 2, true),
            vec![8, 9, 10, 11, 12, 13, 14, 15, 0, 1, 2, 3, 4, 5, 6, 7]
        );
    }

    #[test]
    fn reseed_replaces_classic_seed() {
        let mut viewer = Viewer::new();
        viewer.dirty = false;

        viewer.reseed();

        assert!(viewer.dirty);
        assert_ne!(viewer.generator.config().seed, Seed::CLASSIC);
    }

    #[test]
    fn row_order_matches_generated_buffer() {
        let mut viewer = Viewer::new();
        viewer.size = UVec2::new(6, 5);

        viewer.bottom_up = false;
        let top_down = viewer.render_rgba().unwrap();
        viewer.bottom_up = true;
        let bottom_up = viewer.render_rgba().unwrap();

        let row = 6 * 4;
        assert_eq!(&top_down[..row], &bottom_up[4 * row..]);
    }
}
