//! Layout dimensions of frames and widgets
//!
//! All values are unscaled, in normalized screen units. Frames multiply them by
//! their scale factor when laying out and drawing.

use crate::color::{palette, Color};
use glam::Vec2;
use vein_macros::WithBuilders;

#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct FrameMetrics {
    /// Space between the frame edge and its content; the top strip doubles as the drag handle
    #[with_builders(into)]
    pub padding: Vec2,
    /// Horizontal spacing between items in a row, vertical spacing between lines
    #[with_builders(into)]
    pub item_spacing: Vec2,
    pub border_width: f32,
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self {
            padding: Vec2::new(0.01, 0.018),
            item_spacing: Vec2::new(0.005, 0.01),
            border_width: 0.001,
        }
    }
}

#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct ItemMetrics {
    pub height: f32,
    /// Vertical correction applied after centering text in an item
    pub text_offset: f32,
}

impl Default for ItemMetrics {
    fn default() -> Self {
        Self {
            height: 0.035,
            text_offset: -0.0035,
        }
    }
}

#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct ButtonMetrics {
    /// Horizontal space on each side of the label
    pub padding: f32,
}

impl Default for ButtonMetrics {
    fn default() -> Self {
        Self { padding: 0.005 }
    }
}

#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct CheckBoxMetrics {
    /// Height of the box; its width is derived from the aspect ratio
    pub height: f32,
    /// Gap between the box and the label
    pub spacing: f32,
    /// Inset of the check mark inside the box
    pub inline_height: f32,
}

impl Default for CheckBoxMetrics {
    fn default() -> Self {
        Self {
            height: 0.02,
            spacing: 0.0025,
            inline_height: 0.0035,
        }
    }
}

#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct HeadingMetrics {
    pub height: f32,
}

impl Default for HeadingMetrics {
    fn default() -> Self {
        Self { height: 0.045 }
    }
}

#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct LabelMetrics {
    pub text_offset: f32,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self { text_offset: -0.005 }
    }
}

#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct ProgressBarMetrics {
    pub height: f32,
}

impl Default for ProgressBarMetrics {
    fn default() -> Self {
        Self { height: 0.004 }
    }
}

#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct SeparatorMetrics {
    pub height: f32,
}

impl Default for SeparatorMetrics {
    fn default() -> Self {
        Self { height: 0.001 }
    }
}

/// Every dimension the toolkit lays out with
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct Metrics {
    pub frame: FrameMetrics,
    pub item: ItemMetrics,
    pub button: ButtonMetrics,
    pub check_box: CheckBoxMetrics,
    pub heading: HeadingMetrics,
    pub label: LabelMetrics,
    pub progress_bar: ProgressBarMetrics,
    pub separator: SeparatorMetrics,
    /// Tint for background sprites without a background color
    pub sprite_color: Color,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            frame: FrameMetrics::default(),
            item: ItemMetrics::default(),
            button: ButtonMetrics::default(),
            check_box: CheckBoxMetrics::default(),
            heading: HeadingMetrics::default(),
            label: LabelMetrics::default(),
            progress_bar: ProgressBarMetrics::default(),
            separator: SeparatorMetrics::default(),
            sprite_color: palette::SPRITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_override_fields() {
        let metrics = Metrics::default()
            .with_frame(FrameMetrics::default().with_padding([0.02, 0.03]))
            .with_button(ButtonMetrics::default().with_padding(0.01));

        assert_eq!(metrics.frame.padding, Vec2::new(0.02, 0.03));
        assert_eq!(metrics.frame.item_spacing, Vec2::new(0.005, 0.01));
        assert_eq!(metrics.button.padding, 0.01);
        assert_eq!(metrics.sprite_color, palette::SPRITE);
    }
}
