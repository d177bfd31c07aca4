//! Context owning everything that outlives a single frame
//!
//! The [`Context`] holds the host backend, the style, the memory of every frame seen
//! so far and the configuration queued for the next frame. A host creates one
//! context and begins its frames from it every tick:
//!
//! ```ignore
//! let mut ctx = Context::new(backend);
//!
//! // in the render callback
//! ctx.set_next_frame_position(0.1, 0.1);
//! ctx.frame(Some("inventory"), |frame| {
//!     heading(frame, "Inventory")?;
//!     if button(frame, "Close")? {
//!         // ...
//!     }
//!     Ok(())
//! })?;
//! ```

use crate::backend::Backend;
use crate::error::{Result, StyleError};
use crate::frame::{Frame, FrameConfig, FrameFlags, FrameMemory};
use crate::input::InputFlags;
use crate::style::Style;
use glam::Vec2;
use std::collections::HashMap;

pub struct Context<B: Backend> {
    pub(crate) backend: B,
    pub(crate) style: Style,
    pub(crate) memories: HashMap<String, FrameMemory>,
    pub(crate) next_frame: FrameConfig,
    pub(crate) debug: bool,
}

impl<B: Backend> Context<B> {
    /// Id of frames begun without one
    pub const DEFAULT_FRAME_ID: &'static str = "DEFAULT";

    pub fn new(backend: B) -> Self {
        Self::with_style(backend, Style::new())
    }

    pub fn with_style(backend: B, style: Style) -> Self {
        Self {
            backend,
            style,
            memories: HashMap::new(),
            next_frame: FrameConfig::default(),
            debug: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Install a user stylesheet, see [`Style::set_sheet`]
    pub fn set_sheet(&mut self, sheet: &str) -> std::result::Result<(), StyleError> {
        self.style.set_sheet(sheet)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug
    }

    /// Outline every item with the window color
    pub fn set_debug_enabled(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Memory of frame `id`, once it has been begun at least once
    pub fn frame_memory(&self, id: &str) -> Option<&FrameMemory> {
        self.memories.get(id)
    }

    /// Configuration queued for the next frame
    pub fn next_frame(&self) -> &FrameConfig {
        &self.next_frame
    }

    pub fn set_next_frame_position(&mut self, x: f32, y: f32) {
        self.next_frame.position = Some(Vec2::new(x, y));
    }

    /// Scale the next frame; scales that are not positive and finite are ignored
    pub fn set_next_frame_scale(&mut self, scale: f32) {
        if scale > 0.0 && scale.is_finite() {
            self.next_frame.scale = Some(scale);
        } else {
            log::warn!("ignoring frame scale {scale}, it must be positive");
        }
    }

    /// Override the frame size per axis; `None` keeps the measured size
    pub fn set_next_frame_size(&mut self, w: Option<f32>, h: Option<f32>) {
        self.next_frame.size = (w, h);
    }

    /// Override the item spacing per axis; `None` keeps the metrics value
    pub fn set_next_frame_spacing(&mut self, x: Option<f32>, y: Option<f32>) {
        self.next_frame.spacing = (x, y);
    }

    pub fn set_next_frame_style_id(&mut self, id: impl Into<String>) {
        self.next_frame.style_id = Some(id.into());
    }

    pub fn set_next_frame_disable_background(&mut self) {
        self.next_frame.flags |= FrameFlags::DISABLE_BACKGROUND;
    }

    pub fn set_next_frame_disable_border(&mut self) {
        self.next_frame.flags |= FrameFlags::DISABLE_BORDER;
    }

    pub fn set_next_frame_disable_input(&mut self) {
        self.next_frame.input_flags |= InputFlags::DISABLE_INPUT;
    }

    pub fn set_next_frame_disable_move(&mut self) {
        self.next_frame.flags |= FrameFlags::DISABLE_MOVE;
    }

    /// Begin a pass of frame `id`, consuming the queued frame configuration
    pub fn begin_frame(&mut self, id: Option<&str>) -> Result<Frame<'_, B>> {
        Frame::begin(self, id.unwrap_or(Self::DEFAULT_FRAME_ID))
    }

    /// Run `build` inside a pass of frame `id`
    pub fn frame<R>(
        &mut self,
        id: Option<&str>,
        build: impl FnOnce(&mut Frame<'_, B>) -> Result<R>,
    ) -> Result<R> {
        let mut frame = self.begin_frame(id)?;
        let result = build(&mut frame);
        frame.end();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    #[test]
    fn test_memory_is_created_once_per_id() {
        let mut ctx = Context::new(RecordingBackend::new());
        assert!(ctx.frame_memory("a").is_none());

        ctx.frame(Some("a"), |frame| {
            assert!(frame.is_new());
            Ok(())
        })
        .unwrap();
        ctx.frame(Some("a"), |frame| {
            assert!(!frame.is_new());
            Ok(())
        })
        .unwrap();
        ctx.frame(None, |frame| {
            assert!(frame.is_new());
            Ok(())
        })
        .unwrap();

        assert!(ctx.frame_memory("a").is_some());
        assert!(ctx.frame_memory(Context::<RecordingBackend>::DEFAULT_FRAME_ID).is_some());
    }

    #[test]
    fn test_frame_consumes_config() {
        let mut ctx = Context::new(RecordingBackend::new());
        ctx.set_next_frame_style_id("hud");
        ctx.set_next_frame_disable_input();
        assert_eq!(ctx.next_frame().style_id.as_deref(), Some("hud"));

        ctx.frame(None, |_| Ok(())).unwrap();
        assert_eq!(ctx.next_frame(), &FrameConfig::default());
    }

    #[test]
    fn test_rejected_sheet_is_reported() {
        let mut ctx = Context::new(RecordingBackend::new());
        assert!(ctx.set_sheet("label { color: #01; }").is_err());
        assert!(!ctx.style().has_user_sheet());
        assert!(ctx.set_sheet("label { color: #010203; }").is_ok());
        assert!(ctx.style().has_user_sheet());
    }

    #[test]
    fn test_invalid_scale_is_ignored() {
        let mut ctx = Context::new(RecordingBackend::new());

        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            ctx.set_next_frame_scale(scale);
            assert_eq!(ctx.next_frame().scale, None);
        }

        ctx.set_next_frame_scale(1.5);
        ctx.set_next_frame_scale(0.0);
        ctx.frame(None, |frame| {
            assert_eq!(frame.scale(), 1.5);
            let canvas = frame.canvas();
            assert!(canvas.painter.text_width(canvas.renderer, "ab").is_finite());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_build_error_still_ends_frame() {
        let mut ctx = Context::new(RecordingBackend::new());
        ctx.set_next_frame_position(0.5, 0.5);

        let result: Result<()> = ctx.frame(Some("a"), |frame| {
            frame.begin_item(0.1, 0.1);
            frame.end_item()?;
            Err(StyleError::InvalidSelector("x".to_owned()).into())
        });

        assert!(result.is_err());
        let memory = ctx.frame_memory("a").unwrap();
        assert_eq!(memory.rect.position, Vec2::new(0.5, 0.5));
        assert!(memory.rect.size.x > 0.1);
    }
}
