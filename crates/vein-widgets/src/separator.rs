use vein::{Backend, Frame, Property, Selector};

/// Width of a full-width item: the item width if set, else the content laid out so far
pub(crate) fn stretch_width<B: Backend>(frame: &Frame<'_, B>) -> f32 {
    frame
        .try_item_width()
        .unwrap_or_else(|| frame.layout().content_rect().width() / frame.scale())
}

/// Thin horizontal rule across the frame content
pub fn separator<B: Backend>(frame: &mut Frame<'_, B>) -> vein::Result<()> {
    let key = frame.build_style_selector(Selector::Separator, None);
    let color = frame.style().color(&key, Property::Color)?;
    let h = frame.style().metrics().separator.height;
    let w = stretch_width(frame);

    frame.begin_item(w, h);

    let canvas = frame.canvas();
    canvas.painter.set_color(color);
    canvas.painter.draw_rect(canvas.renderer, w, h);

    frame.end_item()?;
    Ok(())
}
