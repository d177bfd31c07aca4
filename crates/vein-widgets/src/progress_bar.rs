use crate::separator::stretch_width;
use vein::{Backend, Frame, Property, Selector};

/// Horizontal bar filled to `fraction` (clamped to 0..=1)
///
/// The track is drawn in `background-color`, the filled part in `color`. Like a
/// separator it spans the content unless an item width is set.
pub fn progress_bar<B: Backend>(frame: &mut Frame<'_, B>, fraction: f32) -> vein::Result<()> {
    let key = frame.build_style_selector(Selector::ProgressBar, None);
    let properties = frame.style().properties(&key)?;
    let color = properties.color(Property::Color)?;
    let background_color = properties.color(Property::BackgroundColor)?;
    let h = frame.style().metrics().progress_bar.height;
    let w = stretch_width(frame);
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };

    frame.begin_item(w, h);

    let canvas = frame.canvas();
    canvas.painter.set_color(background_color);
    canvas.painter.draw_rect(canvas.renderer, w, h);
    if fraction > 0.0 {
        canvas.painter.set_color(color);
        canvas.painter.draw_rect(canvas.renderer, w * fraction, h);
    }

    frame.end_item()?;
    Ok(())
}
