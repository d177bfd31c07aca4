//! # vein-widgets
//!
//! Widgets for the vein immediate-mode UI toolkit.
//!
//! Every widget is a function taking the current [`Frame`](vein::Frame). It places
//! one item in the frame layout, draws it with the frame style and reports the
//! interaction of this tick:
//!
//! ```ignore
//! ctx.frame(Some("settings"), |frame| {
//!     heading(frame, "Settings")?;
//!     *vsync = check_box(frame, *vsync, "Vertical sync")?;
//!     frame.begin_row();
//!     let apply = button(frame, "Apply")?;
//!     let cancel = button(frame, "Cancel")?;
//!     frame.end_row();
//!     Ok(apply && !cancel)
//! })?;
//! ```
//!
//! Style failures (an unknown selector or a property the sheet leaves undefined)
//! are returned as errors instead of drawing with made-up values.

mod button;
mod check_box;
mod heading;
mod label;
mod progress_bar;
mod separator;

pub use button::*;
pub use check_box::*;
pub use heading::*;
pub use label::*;
pub use progress_bar::*;
pub use separator::*;

use vein::{Painter, Property, Style, StyleKey};

/// Configure the painter font from the style of `key`
fn apply_text_style(
    painter: &mut Painter,
    style: &Style,
    key: &StyleKey,
    wrap_width: Option<f32>,
) -> vein::Result<()> {
    let properties = style.properties(key)?;
    painter.set_text(
        properties.integer(Property::FontFamily)?,
        properties.font_size(Property::FontSize)?,
        wrap_width,
    );
    Ok(())
}

#[cfg(test)]
mod test_support {
    use vein::{Context, RecordingBackend, Vec2};

    /// Top-left of the first item of a fresh frame at scale 1
    pub const FIRST_ITEM: Vec2 = Vec2::new(0.34, 0.348);

    pub fn context() -> Context<RecordingBackend> {
        let _ = env_logger::builder().is_test(true).try_init();
        Context::new(RecordingBackend::new())
    }

    /// Put the pointer inside the first item and click it this tick
    pub fn click_first_item(ctx: &mut Context<RecordingBackend>) {
        let input = &mut ctx.backend_mut().input;
        input.set_cursor_position(Some(FIRST_ITEM + Vec2::new(0.002, 0.002)));
        input.release_button(vein::MouseButton::Left);
    }
}
