//! Settings window example
//!
//! Drives a settings frame for a few simulated ticks on the headless recording
//! backend: the pointer clicks the check box, then drags the frame by its title
//! strip. Each tick logs the draw calls the host would receive.
//!
//! Run with `RUST_LOG=debug` to also see frame and drag events.

use vein::{Context, DrawCommand, MouseButton, RecordingBackend, Vec2};
use vein_widgets::{button, check_box, heading, label, progress_bar, separator};

const THEME: &str = r#"
/* accent the primary action */
#primary.button {
    background-color: #009B67;
}

#primary.button:hover {
    background-color: #F50551;
}
"#;

struct Settings {
    vsync: bool,
    volume: f32,
    applied: bool,
}

fn build(ctx: &mut Context<RecordingBackend>, settings: &mut Settings) -> vein::Result<()> {
    ctx.set_next_frame_style_id("settings");
    ctx.frame(Some("settings"), |frame| {
        heading(frame, "Settings")?;
        separator(frame)?;

        settings.vsync = check_box(frame, settings.vsync, "Vertical sync")?;

        frame.set_next_item_width(0.15);
        label(frame, "Volume applies to music and effects alike")?;
        progress_bar(frame, settings.volume)?;

        frame.begin_row();
        frame.set_next_item_style_id("primary");
        if button(frame, "Apply")? {
            settings.applied = true;
        }
        if button(frame, "Louder")? {
            settings.volume = (settings.volume + 0.1).min(1.0);
        }
        frame.end_row();

        Ok(())
    })
}

fn log_commands(tick: usize, backend: &RecordingBackend) {
    log::info!("tick {tick}: {} draw calls", backend.commands.len());
    for command in &backend.commands {
        match command {
            DrawCommand::Rect { rect, color } => log::info!("  rect {rect:?} {color:?}"),
            DrawCommand::Sprite { image, rect, .. } => log::info!("  sprite {image:?} {rect:?}"),
            DrawCommand::Text { text, position, .. } => log::info!("  text {text:?} at {position}"),
        }
    }
    if let Some(cursor) = backend.mouse_cursor {
        log::info!("  cursor {cursor:?}");
    }
}

fn main() -> vein::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut ctx = Context::new(RecordingBackend::new());
    ctx.set_sheet(THEME)?;

    let mut settings = Settings {
        vsync: false,
        volume: 0.5,
        applied: false,
    };

    for tick in 0..6 {
        let position = ctx
            .frame_memory("settings")
            .map(|memory| memory.rect.position)
            .unwrap_or_default();

        let input = &mut ctx.backend_mut().input;
        match tick {
            // click the check box below the heading and separator
            1 => {
                input.set_cursor_position(Some(position + Vec2::new(0.012, 0.085)));
                input.press_button(MouseButton::Left);
                input.release_button(MouseButton::Left);
            }
            // grab the title strip, drag, drop
            2 => {
                input.set_cursor_position(Some(position + Vec2::new(0.05, 0.005)));
                input.press_button(MouseButton::Left);
            }
            3 => input.set_cursor_position(Some(position + Vec2::new(0.15, 0.105))),
            4 => input.release_button(MouseButton::Left),
            _ => {}
        }

        build(&mut ctx, &mut settings)?;
        log_commands(tick, ctx.backend());
        ctx.backend_mut().next_tick();
    }

    log::info!(
        "vsync: {}, volume: {:.1}, applied: {}",
        settings.vsync,
        settings.volume,
        settings.applied
    );
    Ok(())
}
