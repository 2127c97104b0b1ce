//! A mounted sketchpad: drawing state plus the surface and indicator it drives.

use crate::config::SketchpadConfig;
use crate::control::{self, SizeIndicator};
use crate::error::Result;
use crate::event::SketchEvent;
use crate::state::DrawingState;
use crate::stroke;
use crate::surface::CanvasSurface;

/// One drawing surface with its control panel.
///
/// Owns everything a page view needs; hosts translate their native input into
/// [`SketchEvent`]s and pass them to [`Sketchpad::handle`].
#[derive(Debug)]
pub struct Sketchpad<S, L> {
    state: DrawingState,
    surface: S,
    indicator: L,
    config: SketchpadConfig,
}

impl<S: CanvasSurface, L: SizeIndicator> Sketchpad<S, L> {
    /// Create a sketchpad with default settings.
    pub fn new(surface: S, indicator: L) -> Self {
        let config = SketchpadConfig::default();
        let state = DrawingState::from_config(&config);
        let mut sketchpad = Self {
            state,
            surface,
            indicator,
            config,
        };
        control::refresh_indicator(&sketchpad.state, &mut sketchpad.indicator);
        sketchpad
    }

    /// Create a sketchpad with a custom configuration.
    pub fn with_config(surface: S, indicator: L, config: SketchpadConfig) -> Result<Self> {
        config.validate()?;
        let state = DrawingState::from_config(&config);
        let mut sketchpad = Self {
            state,
            surface,
            indicator,
            config,
        };
        control::refresh_indicator(&sketchpad.state, &mut sketchpad.indicator);
        Ok(sketchpad)
    }

    /// Apply one event. Returns `true` if the surface was painted or cleared.
    pub fn handle(&mut self, event: SketchEvent) -> bool {
        match event {
            SketchEvent::PointerDown(point) => {
                stroke::pointer_down(&mut self.state, point);
                false
            }
            SketchEvent::PointerMove(point) => {
                stroke::pointer_move(&mut self.state, &mut self.surface, point)
            }
            SketchEvent::PointerUp => {
                stroke::pointer_up(&mut self.state);
                false
            }
            SketchEvent::PointerCancel => {
                stroke::cancel(&mut self.state);
                false
            }
            SketchEvent::SizeUp => {
                control::increase_size(&mut self.state, &self.config.brush, &mut self.indicator);
                false
            }
            SketchEvent::SizeDown => {
                control::decrease_size(&mut self.state, &self.config.brush, &mut self.indicator);
                false
            }
            SketchEvent::Clear => {
                control::clear(&mut self.surface);
                true
            }
            SketchEvent::ColorChange(color) => {
                control::set_color(&mut self.state, &color);
                false
            }
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }
}
