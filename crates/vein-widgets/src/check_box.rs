//! Check box with a trailing label

use crate::apply_text_style;
use vein::{Backend, Canvas, Frame, Property, Selector, StyleState};

/// A check box; returns the state after this tick's click, if any
///
/// The box is square on screen: its width is its height divided by the aspect ratio.
/// A check mark inset by the inline height fills it while checked.
pub fn check_box<B: Backend>(
    frame: &mut Frame<'_, B>,
    checked: bool,
    text: &str,
) -> vein::Result<bool> {
    let key = frame.build_style_selector(Selector::CheckBox, None);
    let item_width = frame.try_item_width();
    let aspect_ratio = frame.aspect_ratio();

    let Canvas {
        painter,
        renderer,
        style,
    } = frame.canvas();
    let metrics = style.metrics();
    let box_metrics = metrics.check_box.clone();
    let h = metrics.item.height;
    let text_offset = metrics.item.text_offset;
    let box_width = box_metrics.height / aspect_ratio;

    apply_text_style(painter, style, &key, None)?;
    let w = item_width.unwrap_or_else(|| match painter.text_width(renderer, text) {
        tw if tw > 0.0 => box_width + box_metrics.spacing + tw,
        _ => box_width,
    });

    frame.begin_item(w, h);

    let mut checked = checked;
    let key = if frame.is_item_hovered() {
        if frame.is_item_clicked() {
            checked = !checked;
            log::trace!("check box `{text}` toggled to {checked}");
        }
        frame.build_style_selector(Selector::CheckBox, Some(StyleState::Hover))
    } else {
        key
    };

    let Canvas {
        painter,
        renderer,
        style,
    } = frame.canvas();
    let properties = style.properties(&key)?;
    let color = properties.color(Property::Color)?;
    let background_color = properties.color(Property::BackgroundColor)?;

    let vo = (h - box_metrics.height) / 2.0;
    painter.set_color(background_color);
    painter.move_by(0.0, vo);
    painter.draw_rect(renderer, box_width, box_metrics.height);

    if checked {
        let inset = box_metrics.inline_height / aspect_ratio;
        let mark_width = box_width - inset * 2.0;

        painter.move_by(inset, box_metrics.inline_height);
        painter.set_color(color);
        painter.draw_rect(renderer, mark_width, mark_width * aspect_ratio);
        painter.move_by(-inset, -box_metrics.inline_height);
    }

    painter.move_by(0.0, -vo);

    painter.set_color(color);
    painter.move_by(
        box_width + box_metrics.spacing,
        (h - painter.character_height(renderer)) / 2.0 + text_offset,
    );
    painter.draw_text(renderer, text);

    frame.end_item()?;

    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{click_first_item, context};
    use vein::{palette, DrawCommand};

    #[test]
    fn test_click_toggles() {
        let mut ctx = context();
        click_first_item(&mut ctx);

        let checked = ctx
            .frame(None, |frame| check_box(frame, false, "Sound"))
            .unwrap();
        assert!(checked);

        let checked = ctx
            .frame(None, |frame| check_box(frame, true, "Sound"))
            .unwrap();
        assert!(!checked);

        ctx.backend_mut().next_tick();
        let checked = ctx
            .frame(None, |frame| check_box(frame, true, "Sound"))
            .unwrap();
        assert!(checked);
    }

    #[test]
    fn test_box_is_square_and_marked() {
        let mut ctx = context();
        ctx.frame(None, |_| Ok(())).unwrap();

        ctx.backend_mut().next_tick();
        ctx.set_next_frame_disable_background();
        ctx.frame(None, |frame| {
            check_box(frame, true, "")?;
            let aspect_ratio = frame.aspect_ratio();
            assert!((frame.layout().item_rect().width() - 0.02 / aspect_ratio).abs() < 1e-6);
            Ok(())
        })
        .unwrap();

        let rects: Vec<_> = ctx.backend().rects().collect();
        assert_eq!(rects.len(), 2);

        let (outer, outer_color) = rects[0];
        assert_eq!(*outer_color, palette::SURFACE);
        assert!((outer.width() * ctx.backend().aspect_ratio - outer.height()).abs() < 1e-6);

        let (mark, mark_color) = rects[1];
        assert_eq!(*mark_color, palette::TEXT);
        assert!(outer.contains(mark.position) && outer.contains(mark.max()));

        // empty labels are not drawn
        assert!(ctx.backend().texts().next().is_none());
    }

    #[test]
    fn test_hover_color() {
        let mut ctx = context();
        ctx.frame(None, |_| Ok(())).unwrap();

        ctx.backend_mut().next_tick();
        ctx.backend_mut()
            .input
            .set_cursor_position(Some(crate::test_support::FIRST_ITEM + vein::Vec2::splat(0.002)));
        ctx.set_next_frame_disable_background();
        ctx.frame(None, |frame| check_box(frame, false, "Sound").map(|_| ()))
            .unwrap();

        assert!(matches!(
            ctx.backend().commands.last(),
            Some(DrawCommand::Text { color, .. }) if *color == palette::ACCENT
        ));
    }
}
