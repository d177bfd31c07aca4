//! Host rendering backend
//!
//! The toolkit never draws pixels itself. Every primitive goes through [`Renderer`],
//! which a host implements on top of its native draw calls. Coordinates are
//! normalized screen space (0..1 on both axes, origin at the top-left) and colors
//! are 0-255 RGBA.
//!
//! [`RecordingBackend`] is a headless implementation that records draw commands
//! and measures text with a fixed advance. It is used by the test suites and by
//! hosts that want to inspect a frame before submitting it.

use crate::color::Color;
use crate::input::{Control, InputSource, InputState};
use crate::primitives::{Image, Rect};
use glam::Vec2;

/// Text configuration applied before measuring or drawing a string
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextParams {
    /// Host font family id
    pub font: i32,
    /// Text scale, already multiplied by the frame scale
    pub scale: f32,
    /// Wrap width measured from the text origin, if wrapping
    pub wrap_width: Option<f32>,
}

impl TextParams {
    pub const fn new(font: i32, scale: f32) -> Self {
        Self {
            font,
            scale,
            wrap_width: None,
        }
    }

    pub const fn with_wrap_width(mut self, wrap_width: Option<f32>) -> Self {
        self.wrap_width = wrap_width;
        self
    }
}

impl Default for TextParams {
    fn default() -> Self {
        Self::new(0, 1.0)
    }
}

/// Mouse cursor sprites understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum MouseCursor {
    None = 0,
    #[default]
    Normal = 1,
    TransparentNormal = 2,
    PreGrab = 3,
    Grab = 4,
    MiddleFinger = 5,
    LeftArrow = 6,
    RightArrow = 7,
    UpArrow = 8,
    DownArrow = 9,
    HorizontalExpand = 10,
    Add = 11,
    Remove = 12,
}

/// Native drawing and text measurement of the host
///
/// Calls are infallible: a host that cannot draw something drops it.
pub trait Renderer {
    /// Fill `rect` with `color`
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Draw `image` stretched over `rect`, tinted by `color`
    fn draw_sprite(&mut self, image: &Image, rect: Rect, color: Color);

    /// Width of `text` when rendered with `params`
    fn text_width(&mut self, text: &str, params: &TextParams) -> f32;

    /// Number of lines `text` occupies when drawn at `position` with `params`
    fn text_line_count(&mut self, text: &str, position: Vec2, params: &TextParams) -> u32;

    /// Height of a rendered character line for `params`
    fn character_height(&mut self, params: &TextParams) -> f32;

    /// Draw `text` with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, params: &TextParams, color: Color);

    /// Screen width divided by height
    fn aspect_ratio(&self) -> f32;

    /// Keep the host cursor visible this tick, showing `cursor`
    fn set_mouse_cursor(&mut self, cursor: MouseCursor);
}

/// Everything a context needs from the host
pub trait Backend: Renderer + InputSource {}

impl<T: Renderer + InputSource> Backend for T {}

/// A draw call captured by [`RecordingBackend`]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
    },
    Sprite {
        image: Image,
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        params: TextParams,
        color: Color,
    },
}

impl DrawCommand {
    pub fn rect(&self) -> Option<Rect> {
        match self {
            DrawCommand::Rect { rect, .. } | DrawCommand::Sprite { rect, .. } => Some(*rect),
            DrawCommand::Text { .. } => None,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Rect { color, .. }
            | DrawCommand::Sprite { color, .. }
            | DrawCommand::Text { color, .. } => *color,
        }
    }
}

/// Headless backend that records draw calls
///
/// Text is measured as `chars × char_advance × scale` wide and
/// `line_height × scale` tall.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    /// Input fed to frames; drive it like a host event loop
    pub input: InputState,
    pub commands: Vec<DrawCommand>,
    pub aspect_ratio: f32,
    pub char_advance: f32,
    pub line_height: f32,
    /// Cursor handed over by the last frame that accepted input
    pub mouse_cursor: Option<MouseCursor>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            commands: Vec::new(),
            aspect_ratio: 16.0 / 9.0,
            char_advance: 0.02,
            line_height: 0.03,
            mouse_cursor: None,
        }
    }

    /// Finish a tick: clear recorded commands and input edges
    pub fn next_tick(&mut self) {
        self.commands.clear();
        self.mouse_cursor = None;
        self.input.begin_frame();
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for RecordingBackend {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_sprite(&mut self, image: &Image, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Sprite {
            image: image.clone(),
            rect,
            color,
        });
    }

    fn text_width(&mut self, text: &str, params: &TextParams) -> f32 {
        text.chars().count() as f32 * self.char_advance * params.scale
    }

    fn text_line_count(&mut self, text: &str, _position: Vec2, params: &TextParams) -> u32 {
        if text.is_empty() {
            return 0;
        }

        let width = self.text_width(text, params);
        match params.wrap_width {
            Some(wrap) if wrap > 0.0 => (width / wrap).ceil().max(1.0) as u32,
            _ => 1,
        }
    }

    fn character_height(&mut self, params: &TextParams) -> f32 {
        self.line_height * params.scale
    }

    fn draw_text(&mut self, text: &str, position: Vec2, params: &TextParams, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
            params: *params,
            color,
        });
    }

    fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    fn set_mouse_cursor(&mut self, cursor: MouseCursor) {
        self.mouse_cursor = Some(cursor);
    }
}

impl InputSource for RecordingBackend {
    fn mouse_position(&self) -> Vec2 {
        self.input.mouse_position()
    }

    fn is_control_pressed(&self, control: Control) -> bool {
        self.input.is_control_pressed(control)
    }

    fn is_control_released(&self, control: Control) -> bool {
        self.input.is_control_released(control)
    }

    fn is_control_down(&self, control: Control) -> bool {
        self.input.is_control_down(control)
    }
}
