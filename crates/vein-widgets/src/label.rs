use crate::apply_text_style;
use vein::{Backend, Canvas, Frame, Property, Selector};

/// Plain text
///
/// With an item width set the text wraps to it, and the item grows by one line
/// height per extra line.
pub fn label<B: Backend>(frame: &mut Frame<'_, B>, text: &str) -> vein::Result<()> {
    let key = frame.build_style_selector(Selector::Label, None);
    let item_width = frame.try_item_width();

    let Canvas {
        painter,
        renderer,
        style,
    } = frame.canvas();
    let item_height = style.metrics().item.height;
    let text_offset = style.metrics().label.text_offset;
    let color = style.color(&key, Property::Color)?;

    apply_text_style(painter, style, &key, item_width)?;
    let line_height = painter.character_height(renderer);
    let lines = painter.text_line_count(renderer, text).max(1);

    let w = item_width.unwrap_or_else(|| painter.text_width(renderer, text));
    let h = item_height + line_height * (lines - 1) as f32;

    frame.begin_item(w, h);

    let Canvas {
        painter, renderer, ..
    } = frame.canvas();
    painter.set_color(color);
    painter.move_by(0.0, (item_height - line_height) / 2.0 + text_offset);
    painter.draw_text(renderer, text);

    frame.end_item()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::context;
    use vein::palette;

    #[test]
    fn test_single_line() {
        let mut ctx = context();
        ctx.frame(None, |_| Ok(())).unwrap();

        ctx.backend_mut().next_tick();
        ctx.set_next_frame_disable_background();
        ctx.frame(None, |frame| {
            label(frame, "Health")?;
            let rect = frame.layout().item_rect();
            assert!((rect.width() - 6.0 * 0.02 * 0.325).abs() < 1e-6);
            assert_eq!(rect.height(), 0.035);
            Ok(())
        })
        .unwrap();

        assert_eq!(ctx.backend().commands.len(), 1);
        assert_eq!(ctx.backend().commands[0].color(), palette::SUBTEXT);
    }

    #[test]
    fn test_wraps_to_item_width() {
        let mut ctx = context();

        ctx.frame(None, |frame| {
            // 20 characters at 0.0065 each, 3 lines at this width
            frame.set_next_item_width(0.05);
            label(frame, "a fairly long string")?;

            let rect = frame.layout().item_rect();
            assert_eq!(rect.width(), 0.05);
            assert!((rect.height() - (0.035 + 2.0 * 0.03 * 0.325)).abs() < 1e-6);
            assert_eq!(frame.painter().text_params().wrap_width, Some(0.05));
            Ok(())
        })
        .unwrap();
    }
}
