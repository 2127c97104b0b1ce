//! Native desktop host: an egui window around a raster sketchpad.

use egui::{Color32, ColorImage, Pos2, Sense, TextureHandle, TextureOptions};
use kurbo::Point;
use sketchpad_core::{
    CanvasSurface, SketchError, SketchEvent, SketchInstance, Sketchpad, SketchpadConfig,
};
use sketchpad_render::{RasterSurface, parse_css_color};
use std::path::Path;
use thiserror::Error;

/// Errors that stop the native host from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Sketch(#[from] SketchError),
    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}

/// What the host page would normally supply: the instance record and config.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub instance: SketchInstance,
    pub sketchpad: SketchpadConfig,
}

impl AppConfig {
    /// Load the instance record and optional config from JSON files.
    /// Missing paths fall back to defaults.
    pub fn load(instance_path: Option<&Path>, config_path: Option<&Path>) -> Result<Self, AppError> {
        let instance = match instance_path {
            Some(path) => SketchInstance::from_json(&read(path)?)?,
            None => SketchInstance::default(),
        };
        let sketchpad = match config_path {
            Some(path) => SketchpadConfig::from_json(&read(path)?)?,
            None => SketchpadConfig::default(),
        };
        Ok(Self {
            instance,
            sketchpad,
        })
    }
}

fn read(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Main application struct.
pub struct App {
    title: String,
    sketchpad: Sketchpad<RasterSurface, String>,
    texture: Option<TextureHandle>,
    /// Surface changed since the texture was last uploaded.
    dirty: bool,
    picked_color: Color32,
    was_focused: bool,
}

impl App {
    /// Build the app from a validated config.
    pub fn with_config(config: AppConfig) -> Result<Self, AppError> {
        config.instance.validate()?;
        let picked_color = color32_from_css(&config.sketchpad.default_color);
        let surface = RasterSurface::new(config.instance.width, config.instance.height)?;
        let sketchpad = Sketchpad::with_config(surface, String::new(), config.sketchpad)?;
        Ok(Self {
            title: config.instance.title,
            sketchpad,
            texture: None,
            dirty: true,
            picked_color,
            was_focused: true,
        })
    }

    /// Open the window and run until it is closed.
    pub fn run(config: AppConfig) -> Result<(), AppError> {
        let app = Self::with_config(config)?;
        let (width, height) = app.sketchpad.surface().size();
        let title = app.title.clone();
        log::info!("Opening {:?} ({}x{})", title, width, height);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title.as_str())
                .with_inner_size([width as f32 + 32.0, height as f32 + 80.0]),
            ..Default::default()
        };
        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))?;
        Ok(())
    }

    fn apply(&mut self, events: Vec<SketchEvent>) {
        for event in events {
            self.dirty |= self.sketchpad.handle(event);
        }
    }

    fn upload_texture(&mut self, ctx: &egui::Context) {
        if !self.dirty && self.texture.is_some() {
            return;
        }
        let surface = self.sketchpad.surface();
        let (width, height) = surface.size();
        let image =
            ColorImage::from_rgba_unmultiplied([width as usize, height as usize], surface.pixels());
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("sketchpad-canvas", image, TextureOptions::NEAREST));
            }
        }
        self.dirty = false;
    }

    fn control_panel(&mut self, ui: &mut egui::Ui, events: &mut Vec<SketchEvent>) {
        ui.horizontal(|ui| {
            ui.strong(self.title.as_str());
            ui.separator();
            if ui.button("−").on_hover_text("Decrease size").clicked() {
                events.push(SketchEvent::SizeDown);
            }
            ui.label(self.sketchpad.indicator().as_str());
            if ui.button("+").on_hover_text("Increase size").clicked() {
                events.push(SketchEvent::SizeUp);
            }
            ui.separator();
            let picker = egui::color_picker::color_edit_button_srgba(
                ui,
                &mut self.picked_color,
                egui::color_picker::Alpha::Opaque,
            );
            if picker.changed() {
                events.push(SketchEvent::ColorChange(css_hex(self.picked_color)));
            }
            if ui.button("Clear").clicked() {
                events.push(SketchEvent::Clear);
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        let focused = ctx.input(|i| i.focused);
        if self.was_focused && !focused && self.sketchpad.config().release_on_blur {
            events.push(SketchEvent::PointerCancel);
        }
        self.was_focused = focused;

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.control_panel(ui, &mut events);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (width, height) = self.sketchpad.surface().size();
            let (response, painter) =
                ui.allocate_painter(egui::vec2(width as f32, height as f32), Sense::click_and_drag());
            let rect = response.rect;
            let to_canvas = |pos: Pos2| {
                Point::new(f64::from(pos.x - rect.min.x), f64::from(pos.y - rect.min.y))
            };

            let pointer = ui.input(|i| PointerFrame {
                pressed: i.pointer.primary_pressed(),
                released: i.pointer.primary_released(),
                moving: i.pointer.is_moving(),
                pos: i
                    .pointer
                    .latest_pos()
                    .filter(|pos| rect.contains(*pos))
                    .map(to_canvas),
            });
            events.extend(pointer.events());

            self.apply(std::mem::take(&mut events));
            self.upload_texture(ui.ctx());

            painter.rect_filled(rect, 0.0, Color32::WHITE);
            if let Some(texture) = &self.texture {
                let uv = egui::Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
        });
    }
}

/// Primary pointer input for one frame, in canvas coordinates.
///
/// `pos` is `None` when the pointer is outside the canvas.
#[derive(Debug, Clone, Copy, Default)]
struct PointerFrame {
    pressed: bool,
    released: bool,
    moving: bool,
    pos: Option<Point>,
}

impl PointerFrame {
    /// Sketch events for this frame. A press is never paired with a move,
    /// so pressing alone does not paint.
    fn events(self) -> Vec<SketchEvent> {
        let mut events = Vec::new();
        if let Some(pos) = self.pos {
            if self.pressed {
                events.push(SketchEvent::PointerDown(pos));
            } else if self.moving {
                events.push(SketchEvent::PointerMove(pos));
            }
        }
        if self.released {
            events.push(SketchEvent::PointerUp);
        }
        events
    }
}

/// Format a color the way a browser color input reports it.
fn css_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

fn color32_from_css(text: &str) -> Color32 {
    parse_css_color(text)
        .map(|color| {
            let c = color.to_rgba8();
            Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
        })
        .unwrap_or(Color32::BLACK)
}
