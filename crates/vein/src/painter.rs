use crate::backend::{Renderer, TextParams};
use crate::color::Color;
use crate::error::StyleError;
use crate::primitives::{Image, Rect};
use crate::style::{Property, StylePropertyValues};
use glam::Vec2;

/// Drawing cursor of a frame
///
/// Holds a position, a current color and text parameters, and forwards primitives
/// to the [`Renderer`]. Sizes and offsets passed in are unscaled; the painter
/// multiplies them by the frame scale. Absolute positions are already in screen
/// space.
///
/// A painter created for a frame seen for the first time is invisible: its size is
/// not known until the first pass ends, so nothing it draws would be placed right.
/// Measurement still works while invisible.
#[derive(Clone, Debug)]
pub struct Painter {
    position: Vec2,
    color: Color,
    scale: f32,
    visible: bool,
    text: TextParams,
}

impl Painter {
    pub fn new(position: Vec2, scale: f32, visible: bool) -> Self {
        Self {
            position,
            color: Color::rgb(0, 0, 0),
            scale,
            visible,
            text: TextParams::default(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Move by an unscaled offset
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.position += Vec2::new(dx, dy) * self.scale;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn rect(&self, w: f32, h: f32) -> Rect {
        Rect::new(self.position, Vec2::new(w, h) * self.scale)
    }

    pub fn draw_rect(&self, renderer: &mut dyn Renderer, w: f32, h: f32) {
        if self.visible {
            renderer.draw_rect(self.rect(w, h), self.color);
        }
    }

    pub fn draw_sprite(&self, renderer: &mut dyn Renderer, image: &Image, w: f32, h: f32) {
        if self.visible {
            renderer.draw_sprite(image, self.rect(w, h), self.color);
        }
    }

    /// Fill a `w × h` item background from its style
    ///
    /// A `background-image` wins over a flat `background-color`; the color then tints
    /// the sprite, or `sprite_color` does when no color is set.
    pub fn draw_item_background(
        &mut self,
        renderer: &mut dyn Renderer,
        properties: &StylePropertyValues,
        sprite_color: Color,
        w: f32,
        h: f32,
    ) -> Result<(), StyleError> {
        if let Some(image) = properties.try_image(Property::BackgroundImage) {
            self.set_color(
                properties
                    .try_color(Property::BackgroundColor)
                    .unwrap_or(sprite_color),
            );
            self.draw_sprite(renderer, image, w, h);
        } else {
            self.set_color(properties.color(Property::BackgroundColor)?);
            self.draw_rect(renderer, w, h);
        }

        Ok(())
    }

    /// Configure font, unscaled size and optional unscaled wrap width for text calls
    pub fn set_text(&mut self, font: i32, size: f32, wrap_width: Option<f32>) {
        self.text = TextParams::new(font, size * self.scale)
            .with_wrap_width(wrap_width.map(|w| w * self.scale));
    }

    pub fn text_params(&self) -> &TextParams {
        &self.text
    }

    /// Unscaled width of `text`
    pub fn text_width(&self, renderer: &mut dyn Renderer, text: &str) -> f32 {
        renderer.text_width(text, &self.text) / self.scale
    }

    pub fn text_line_count(&self, renderer: &mut dyn Renderer, text: &str) -> u32 {
        renderer.text_line_count(text, self.position, &self.text)
    }

    /// Unscaled height of one line of text
    pub fn character_height(&self, renderer: &mut dyn Renderer) -> f32 {
        renderer.character_height(&self.text) / self.scale
    }

    pub fn draw_text(&self, renderer: &mut dyn Renderer, text: &str) {
        if self.visible && !text.is_empty() {
            renderer.draw_text(text, self.position, &self.text, self.color);
        }
    }
}
