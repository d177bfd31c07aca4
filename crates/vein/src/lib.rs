//! # vein
//!
//! Immediate-mode UI toolkit drawing through a host renderer.
//!
//! The UI is rebuilt from scratch every tick. Frames remember only where they are and
//! how large their content was last time; everything else is recomputed as widgets
//! are called. Drawing and text measurement go through the host's [`Renderer`], and
//! input is polled from its [`InputSource`].
//!
//! ## Core Types
//!
//! - [`Context`] - Owns the backend, style and frame memory across ticks
//! - [`Frame`] - One layout pass of a positionable, draggable surface
//! - [`Layout`] - Places items in stacks and rows
//! - [`Painter`] - Scaled drawing cursor issuing backend draw calls
//!
//! ## Styling
//!
//! - [`Style`] - CSS-like stylesheet over a built-in default theme
//! - [`StyleKey`] - Selector, state and id scope of a style lookup
//! - [`Metrics`] - Layout dimensions of frames and widgets
//!
//! ## Backend
//!
//! - [`Renderer`] / [`InputSource`] - Implemented by the host
//! - [`RecordingBackend`] - Headless backend for tests and inspection

mod backend;
mod color;
mod context;
mod error;
mod frame;
mod input;
mod layout;
mod painter;
mod primitives;
pub mod style;

pub use backend::*;
pub use color::*;
pub use context::*;
pub use error::*;
pub use frame::*;
pub use input::*;
pub use layout::*;
pub use painter::*;
pub use primitives::*;
pub use style::{
    Metrics, Property, PropertyValue, Selector, Style, StyleKey, StylePropertyValues, StyleState,
    DEFAULT_STYLE,
};

pub use glam::Vec2;
