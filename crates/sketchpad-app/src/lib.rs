//! Sketchpad Application
//!
//! Host shells that feed input into a sketchpad: a native desktop window
//! and a browser mount for embedding in a host page.

#[cfg(feature = "native")]
mod app;

#[cfg(feature = "native")]
pub use app::{App, AppConfig, AppError};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{ContextSurface, ElementIndicator, MountedSketchpad, init, mount, teardown};
