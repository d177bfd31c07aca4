use crate::primitives::Rect;
use glam::Vec2;

/// Row currently being filled left to right
#[derive(Clone, Copy, Debug)]
struct Row {
    /// Top edge shared by every item in the row
    y: f32,
    /// Width including inner spacing, height of the tallest item
    size: Vec2,
    has_items: bool,
}

/// Sequential item placement for one frame pass
///
/// Items stack vertically by default. Between [`Layout::begin_row`] and
/// [`Layout::end_row`] they are placed side by side, and the whole row then counts as
/// one line of the stack. Spacing goes between lines and between items of a row,
/// never before the first one.
///
/// All values are in scaled screen units; the frame scales requested sizes before
/// handing them over.
#[derive(Clone, Debug)]
pub struct Layout {
    origin: Vec2,
    cursor: Vec2,
    spacing: Vec2,
    item: Rect,
    content: Vec2,
    has_lines: bool,
    row: Option<Row>,
}

impl Layout {
    pub fn new(origin: Vec2, spacing: Vec2) -> Self {
        Self {
            origin,
            cursor: origin,
            spacing,
            item: Rect::new(origin, Vec2::ZERO),
            content: Vec2::ZERO,
            has_lines: false,
            row: None,
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn spacing(&self) -> Vec2 {
        self.spacing
    }

    /// Start placing items horizontally; ignored while a row is already open
    pub fn begin_row(&mut self) {
        if self.row.is_some() {
            log::trace!("begin_row inside an open row ignored");
            return;
        }

        self.row = Some(Row {
            y: self.cursor.y,
            size: Vec2::ZERO,
            has_items: false,
        });
    }

    /// Close the open row and move below it; an empty row leaves no trace
    pub fn end_row(&mut self) {
        let Some(row) = self.row.take() else {
            return;
        };

        if !row.has_items {
            return;
        }

        self.content.x = self.content.x.max(row.size.x);
        self.content.y += row.size.y;
        self.cursor = Vec2::new(self.origin.x, row.y + row.size.y);
        self.has_lines = true;
    }

    pub fn is_in_row(&self) -> bool {
        self.row.is_some()
    }

    /// Assign the next rect of size `w × h`
    pub fn begin_item(&mut self, w: f32, h: f32) -> Rect {
        let position = match self.row {
            Some(row) if row.has_items => Vec2::new(self.cursor.x + self.spacing.x, row.y),
            _ => {
                self.cursor.y += self.line_spacing();
                if let Some(row) = self.row.as_mut() {
                    row.y = self.cursor.y;
                }
                Vec2::new(self.origin.x, self.cursor.y)
            }
        };

        self.item = Rect::new(position, Vec2::new(w, h));
        log::trace!("item placed at {:?}", self.item);
        self.item
    }

    /// Advance past the item assigned by the last [`Layout::begin_item`]
    pub fn end_item(&mut self) {
        let item = self.item;

        match self.row {
            Some(ref mut row) => {
                row.size.x = item.max().x - self.origin.x;
                row.size.y = row.size.y.max(item.height());
                row.has_items = true;
                self.cursor.x = item.max().x;
            }
            None => {
                self.content.x = self.content.x.max(item.width());
                self.content.y += item.height();
                self.cursor = Vec2::new(self.origin.x, item.max().y);
                self.has_lines = true;
            }
        }
    }

    /// Rect of the item placed last
    pub fn item_rect(&self) -> Rect {
        self.item
    }

    /// Bounding box of everything placed so far, including an open row
    pub fn content_rect(&self) -> Rect {
        let mut size = self.content;

        if let Some(row) = self.row.filter(|row| row.has_items) {
            size.x = size.x.max(row.size.x);
            size.y = row.y + row.size.y - self.origin.y;
        }

        Rect::new(self.origin, size)
    }

    /// Vertical spacing owed before a new line, added to the content height
    fn line_spacing(&mut self) -> f32 {
        if !self.has_lines {
            return 0.0;
        }

        self.content.y += self.spacing.y;
        self.spacing.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(Vec2::new(1.0, 2.0), Vec2::new(0.5, 0.25))
    }

    #[test]
    fn test_vertical_stacking() {
        let mut layout = layout();

        let first = layout.begin_item(4.0, 1.0);
        layout.end_item();
        let second = layout.begin_item(2.0, 3.0);
        layout.end_item();

        assert_eq!(first, Rect::from_xywh(1.0, 2.0, 4.0, 1.0));
        assert_eq!(second, Rect::from_xywh(1.0, 3.25, 2.0, 3.0));
        assert_eq!(layout.item_rect(), second);
        assert_eq!(layout.content_rect(), Rect::from_xywh(1.0, 2.0, 4.0, 4.25));
    }

    #[test]
    fn test_row_places_items_side_by_side() {
        let mut layout = layout();
        let widths = [1.0, 2.0, 3.0];

        layout.begin_row();
        let rects: Vec<Rect> = widths
            .iter()
            .map(|&w| {
                let rect = layout.begin_item(w, 1.0);
                layout.end_item();
                rect
            })
            .collect();
        layout.end_row();

        assert_eq!(rects[0].position, Vec2::new(1.0, 2.0));
        assert_eq!(rects[1].position, Vec2::new(2.5, 2.0));
        assert_eq!(rects[2].position, Vec2::new(5.0, 2.0));

        // sum of widths plus (n - 1) spacings
        let content = layout.content_rect();
        assert_eq!(content.size, Vec2::new(7.0, 1.0));
        assert!(!layout.is_in_row());
    }

    #[test]
    fn test_row_height_is_tallest_item() {
        let mut layout = layout();

        layout.begin_item(1.0, 1.0);
        layout.end_item();

        layout.begin_row();
        for h in [2.0, 4.0, 3.0] {
            layout.begin_item(1.0, h);
            layout.end_item();
        }
        layout.end_row();

        let below = layout.begin_item(1.0, 1.0);
        layout.end_item();

        // line, spacing, row of height 4, spacing, line
        assert_eq!(below.position, Vec2::new(1.0, 2.0 + 1.0 + 0.25 + 4.0 + 0.25));
        assert_eq!(layout.content_rect().size, Vec2::new(4.0, 6.5));
    }

    #[test]
    fn test_empty_row_is_noop() {
        let mut layout = layout();

        layout.begin_item(1.0, 1.0);
        layout.end_item();
        let before = layout.content_rect();

        layout.begin_row();
        layout.end_row();

        assert_eq!(layout.content_rect(), before);
        let next = layout.begin_item(1.0, 1.0);
        assert_eq!(next.position, Vec2::new(1.0, 3.25));
    }

    #[test]
    fn test_nested_row_is_ignored() {
        let mut layout = layout();

        layout.begin_row();
        layout.begin_item(1.0, 1.0);
        layout.end_item();
        layout.begin_row();
        let second = layout.begin_item(1.0, 1.0);
        layout.end_item();
        layout.end_row();

        assert_eq!(second.position, Vec2::new(2.5, 2.0));
        assert!(!layout.is_in_row());
    }

    #[test]
    fn test_content_includes_open_row() {
        let mut layout = layout();

        layout.begin_row();
        layout.begin_item(1.0, 2.0);
        layout.end_item();
        layout.begin_item(1.0, 1.0);
        layout.end_item();

        assert_eq!(layout.content_rect().size, Vec2::new(2.5, 2.0));
    }
}
