//! Push button

use crate::apply_text_style;
use vein::{Backend, Canvas, Frame, Property, Selector, StyleState};

/// A text button; returns whether it was clicked this tick
///
/// Sized to the label plus horizontal padding unless an item width is set. The
/// `button:hover` style applies while the pointer is over an enabled button.
pub fn button<B: Backend>(frame: &mut Frame<'_, B>, text: &str) -> vein::Result<bool> {
    let key = frame.build_style_selector(Selector::Button, None);
    let item_width = frame.try_item_width();

    let Canvas {
        painter,
        renderer,
        style,
    } = frame.canvas();
    let metrics = style.metrics();
    let padding = metrics.button.padding;
    let h = metrics.item.height;
    let text_offset = metrics.item.text_offset;

    apply_text_style(painter, style, &key, None)?;
    let w = item_width.unwrap_or_else(|| painter.text_width(renderer, text) + padding * 2.0);

    frame.begin_item(w, h);

    let clicked = frame.is_item_clicked();
    let key = if frame.is_item_hovered() {
        frame.build_style_selector(Selector::Button, Some(StyleState::Hover))
    } else {
        key
    };

    let Canvas {
        painter,
        renderer,
        style,
    } = frame.canvas();
    let properties = style.properties(&key)?;

    painter.draw_item_background(renderer, properties, style.metrics().sprite_color, w, h)?;
    painter.set_color(properties.color(Property::Color)?);
    painter.move_by(padding, (h - painter.character_height(renderer)) / 2.0 + text_offset);
    painter.draw_text(renderer, text);

    frame.end_item()?;

    if clicked {
        log::trace!("button `{text}` clicked");
    }
    Ok(clicked)
}
