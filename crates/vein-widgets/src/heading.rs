use crate::apply_text_style;
use vein::{Backend, Canvas, Frame, Property, Selector};

/// Section title in the heading font
pub fn heading<B: Backend>(frame: &mut Frame<'_, B>, text: &str) -> vein::Result<()> {
    let key = frame.build_style_selector(Selector::Heading, None);
    let item_width = frame.try_item_width();

    let Canvas {
        painter,
        renderer,
        style,
    } = frame.canvas();
    let h = style.metrics().heading.height;
    let text_offset = style.metrics().item.text_offset;
    let color = style.color(&key, Property::Color)?;

    apply_text_style(painter, style, &key, None)?;
    let w = item_width.unwrap_or_else(|| painter.text_width(renderer, text));

    frame.begin_item(w, h);

    let Canvas {
        painter, renderer, ..
    } = frame.canvas();
    painter.set_color(color);
    painter.move_by(0.0, (h - painter.character_height(renderer)) / 2.0 + text_offset);
    painter.draw_text(renderer, text);

    frame.end_item()?;
    Ok(())
}
