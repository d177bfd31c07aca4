//! Frames: positionable surfaces that host a layout pass of items
//!
//! A [`Frame`] is rebuilt every tick. Only its [`FrameMemory`] (position, size and
//! drag anchor) survives from one tick to the next, held by the [`Context`] under the
//! frame id.
//!
//! The size of a frame is only known once all of its items have been laid out, so
//! the first pass of a new frame draws nothing: it measures the content, and the
//! size recorded at the end is used from the next tick on.

use crate::backend::{Backend, MouseCursor, Renderer};
use crate::context::Context;
use crate::error::Result;
use crate::input::{Control, Input, InputFlags};
use crate::layout::Layout;
use crate::painter::Painter;
use crate::primitives::Rect;
use crate::style::{Property, Selector, Style, StyleKey, StyleState};
use bitflags::bitflags;
use glam::Vec2;

/// State of a frame that persists across ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMemory {
    /// Position and size from the end of the previous pass
    pub rect: Rect,
    /// Pointer position at the last drag update, while the frame is being dragged
    pub move_position: Option<Vec2>,
}

impl FrameMemory {
    pub const INITIAL_POSITION: Vec2 = Vec2::new(0.33, 0.33);

    pub fn is_moving(&self) -> bool {
        self.move_position.is_some()
    }
}

impl Default for FrameMemory {
    fn default() -> Self {
        Self {
            rect: Rect::new(Self::INITIAL_POSITION, Vec2::ZERO),
            move_position: None,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FrameFlags: u8 {
        const DISABLE_BACKGROUND = 1 << 0;
        const DISABLE_BORDER = 1 << 1;
        const DISABLE_MOVE = 1 << 2;
    }
}

/// One-shot configuration consumed by the next frame that begins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameConfig {
    /// Moves the frame; the new position is persisted
    pub position: Option<Vec2>,
    pub scale: Option<f32>,
    /// Per-axis size override in screen units
    pub size: (Option<f32>, Option<f32>),
    /// Per-axis item spacing override, unscaled
    pub spacing: (Option<f32>, Option<f32>),
    pub style_id: Option<String>,
    pub flags: FrameFlags,
    pub input_flags: InputFlags,
}

impl FrameConfig {
    pub fn scale(&self) -> f32 {
        self.scale.unwrap_or(1.0)
    }

    /// Item spacing with the per-axis override applied over `default`
    pub fn spacing_or(&self, default: Vec2) -> Vec2 {
        Vec2::new(
            self.spacing.0.unwrap_or(default.x),
            self.spacing.1.unwrap_or(default.y),
        )
    }
}

/// Overrides for the next item only
#[derive(Debug, Clone, Default)]
struct ItemState {
    style_id: Option<String>,
    width: Option<f32>,
    disabled: bool,
}

/// Painter, renderer and style of a frame, borrowed together for drawing
pub struct Canvas<'f> {
    pub painter: &'f mut Painter,
    pub renderer: &'f mut dyn Renderer,
    pub style: &'f Style,
}

/// One layout pass of a frame
///
/// Created by [`Context::begin_frame`]. The frame ends with [`Frame::end`], or when it
/// is dropped.
pub struct Frame<'a, B: Backend> {
    ctx: &'a mut Context<B>,
    id: String,
    config: FrameConfig,
    memory: FrameMemory,
    is_new: bool,
    scale: f32,
    padding: Vec2,
    input: Input,
    layout: Layout,
    painter: Painter,
    item: ItemState,
    item_width_stack: Vec<f32>,
    item_style_id_stack: Vec<String>,
    mouse_cursor: MouseCursor,
    ended: bool,
}

impl<'a, B: Backend> Frame<'a, B> {
    pub(crate) fn begin(ctx: &'a mut Context<B>, id: &str) -> Result<Self> {
        let config = std::mem::take(&mut ctx.next_frame);

        let is_new = !ctx.memories.contains_key(id);
        let memory = ctx.memories.entry(id.to_owned()).or_insert_with(|| {
            log::debug!("new frame `{id}`");
            FrameMemory::default()
        });
        if let Some(position) = config.position {
            memory.rect.position = position;
        }
        let memory = *memory;

        let scale = config.scale();
        let metrics = &ctx.style.metrics().frame;
        let padding = metrics.padding;
        let spacing = config.spacing_or(metrics.item_spacing);
        let input = Input::sample(&ctx.backend, config.input_flags);

        let mut frame = Self {
            id: id.to_owned(),
            memory,
            is_new,
            scale,
            padding,
            input,
            layout: Layout::new(Vec2::ZERO, spacing * scale),
            painter: Painter::new(Vec2::ZERO, scale, !is_new),
            item: ItemState::default(),
            item_width_stack: Vec::new(),
            item_style_id_stack: Vec::new(),
            mouse_cursor: MouseCursor::Normal,
            ended: false,
            config,
            ctx,
        };

        frame.begin_move();

        let rect = frame.rect();
        frame.layout = Layout::new(rect.position + padding * scale, spacing * scale);
        frame.painter.set_position(rect.position);

        frame.draw_background()?;

        Ok(frame)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// First pass of this frame id; nothing is drawn
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Rect of the frame for this pass: the persisted rect with the size override applied
    pub fn rect(&self) -> Rect {
        let rect = self.memory.rect;
        Rect::new(
            rect.position,
            Vec2::new(
                self.config.size.0.unwrap_or(rect.size.x),
                self.config.size.1.unwrap_or(rect.size.y),
            ),
        )
    }

    pub fn memory(&self) -> &FrameMemory {
        &self.memory
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut Painter {
        &mut self.painter
    }

    pub fn style(&self) -> &Style {
        &self.ctx.style
    }

    pub fn backend(&self) -> &B {
        &self.ctx.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.ctx.backend
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.ctx.backend.aspect_ratio()
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.ctx.debug
    }

    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas {
            painter: &mut self.painter,
            renderer: &mut self.ctx.backend,
            style: &self.ctx.style,
        }
    }

    /// Place an item of unscaled size `w × h` and move the painter to it
    pub fn begin_item(&mut self, w: f32, h: f32) -> Rect {
        let rect = self.layout.begin_item(w * self.scale, h * self.scale);
        self.painter.set_position(rect.position);
        rect
    }

    /// Close the current item; in debug mode it is outlined in the `window` color
    pub fn end_item(&mut self) -> Result<()> {
        if self.ctx.debug {
            let rect = self.layout.item_rect();
            let unscaled = rect.unscaled(self.scale);
            let color = self
                .ctx
                .style
                .color(&StyleKey::new(Selector::Window), Property::Color)?;

            self.painter.set_position(rect.position);
            self.painter.set_color(color);
            self.painter
                .draw_rect(&mut self.ctx.backend, unscaled.width(), unscaled.height());
        }

        self.layout.end_item();
        self.item = ItemState::default();
        Ok(())
    }

    pub fn begin_row(&mut self) {
        self.layout.begin_row();
    }

    pub fn end_row(&mut self) {
        self.layout.end_row();
    }

    pub fn set_next_item_width(&mut self, w: f32) {
        self.item.width = Some(w);
    }

    pub fn push_item_width(&mut self, w: f32) {
        self.item_width_stack.push(w);
    }

    pub fn pop_item_width(&mut self) {
        self.item_width_stack.pop();
    }

    /// Width requested for the next item, if any
    pub fn try_item_width(&self) -> Option<f32> {
        self.item.width.or_else(|| self.item_width_stack.last().copied())
    }

    pub fn set_next_item_style_id(&mut self, id: impl Into<String>) {
        self.item.style_id = Some(id.into());
    }

    pub fn push_item_style_id(&mut self, id: impl Into<String>) {
        self.item_style_id_stack.push(id.into());
    }

    pub fn pop_item_style_id(&mut self) {
        self.item_style_id_stack.pop();
    }

    pub fn set_next_item_disabled(&mut self) {
        self.item.disabled = true;
    }

    pub fn is_item_disabled(&self) -> bool {
        self.item.disabled
    }

    pub fn is_area_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.input.mouse_position())
    }

    pub fn is_item_hovered(&self) -> bool {
        !self.is_item_disabled() && self.is_area_hovered(self.layout.item_rect())
    }

    pub fn is_item_clicked(&self) -> bool {
        self.is_item_hovered() && self.input.is_control_released(Control::MouseLeftButton)
    }

    pub fn is_item_pressed(&self) -> bool {
        self.is_item_hovered() && self.input.is_control_down(Control::MouseLeftButton)
    }

    /// Cursor handed to the host when the frame ends
    pub fn set_mouse_cursor(&mut self, cursor: MouseCursor) {
        self.mouse_cursor = cursor;
    }

    /// Style key for `selector` scoped by the nearest item style id
    pub fn build_style_selector(&self, selector: Selector, state: Option<StyleState>) -> StyleKey {
        let id = self
            .item
            .style_id
            .as_deref()
            .or_else(|| self.item_style_id_stack.last().map(String::as_str));

        StyleKey::new(selector).with_state(state).with_id(id)
    }

    pub fn end(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        self.end_move();

        if !self.input.is_disabled() {
            self.ctx.backend.set_mouse_cursor(self.mouse_cursor);
        }
        self.mouse_cursor = MouseCursor::Normal;

        let content = self.layout.content_rect();
        self.memory.rect.size = content.size + self.padding * self.scale * 2.0;

        self.item_width_stack.clear();
        self.item_style_id_stack.clear();
        self.item = ItemState::default();

        if let Some(memory) = self.ctx.memories.get_mut(&self.id) {
            *memory = self.memory;
        }
    }

    fn begin_move(&mut self) {
        let disabled =
            self.config.flags.contains(FrameFlags::DISABLE_MOVE) || self.input.is_disabled();
        let down = self.input.is_control_down(Control::MouseLeftButton);

        // a release ends the drag wherever the pointer is
        if self.memory.is_moving() && (disabled || !down) {
            log::debug!("frame `{}` drag stopped", self.id);
            self.memory.move_position = None;
        }
        if disabled {
            return;
        }

        let rect = self.memory.rect;
        let handle = Rect::new(
            rect.position,
            Vec2::new(rect.width(), self.padding.y * self.scale),
        );
        if !self.is_area_hovered(handle) {
            return;
        }

        if !self.memory.is_moving() && self.input.is_control_pressed(Control::MouseLeftButton) {
            log::debug!("frame `{}` drag started", self.id);
            self.memory.move_position = Some(self.input.mouse_position());
        }

        if !self.memory.is_moving() {
            self.mouse_cursor = MouseCursor::PreGrab;
        }
    }

    fn end_move(&mut self) {
        let Some(anchor) = self.memory.move_position else {
            return;
        };

        let mouse_position = self.input.mouse_position();
        self.memory.rect.position += mouse_position - anchor;
        self.memory.move_position = Some(mouse_position);
        self.mouse_cursor = MouseCursor::Grab;
    }

    fn draw_background(&mut self) -> Result<()> {
        if self.is_new || self.config.flags.contains(FrameFlags::DISABLE_BACKGROUND) {
            return Ok(());
        }

        let key = StyleKey::new(Selector::Window).with_id(self.config.style_id.as_deref());
        let rect = self.rect();
        let unscaled = rect.unscaled(self.scale);
        let scale = self.scale;

        let Context { backend, style, .. } = &mut *self.ctx;
        let properties = style.properties(&key)?;
        let metrics = style.metrics();

        self.painter.draw_item_background(
            backend,
            properties,
            metrics.sprite_color,
            unscaled.width(),
            unscaled.height(),
        )?;

        if !self.config.flags.contains(FrameFlags::DISABLE_BORDER) {
            let bw = metrics.frame.border_width;
            let bh = bw * backend.aspect_ratio();

            self.painter.set_color(properties.color(Property::BorderColor)?);
            // bottom
            self.painter
                .set_position(Vec2::new(rect.position.x + bw * scale, rect.max().y));
            self.painter.draw_rect(backend, unscaled.width() - bw, bh);
            // right
            self.painter
                .set_position(Vec2::new(rect.max().x, rect.position.y + bh * scale));
            self.painter.draw_rect(backend, bw, unscaled.height());
        }

        self.painter.set_position(rect.position);
        Ok(())
    }
}

impl<B: Backend> Drop for Frame<'_, B> {
    fn drop(&mut self) {
        self.finish();
    }
}
