use glam::Vec2;

/// Axis-aligned rectangle in normalized screen space, anchored at its top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const ZERO: Self = Self::new(Vec2::ZERO, Vec2::ZERO);

    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Check if a point is inside this rectangle (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.position.x
            && point.x <= max.x
            && point.y >= self.position.y
            && point.y <= max.y
    }

    /// Copy of this rect with the size divided by `scale`
    pub fn unscaled(&self, scale: f32) -> Self {
        Self::new(self.position, self.size / scale)
    }
}

/// Sprite reference: texture atlas (dictionary) and sprite name within it
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Image {
    pub atlas: String,
    pub name: String,
}

impl Image {
    pub fn new(atlas: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            atlas: atlas.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_includes_edges() {
        let rect = Rect::from_xywh(0.125, 0.25, 0.25, 0.5);

        assert!(rect.contains(Vec2::new(0.125, 0.25)));
        assert!(rect.contains(Vec2::new(0.375, 0.75)));
        assert!(rect.contains(Vec2::new(0.25, 0.5)));
        assert!(!rect.contains(Vec2::new(0.5, 0.5)));
        assert!(!rect.contains(Vec2::new(0.2, 0.1)));
    }

    #[test]
    fn test_unscaled_keeps_position() {
        let rect = Rect::from_xywh(0.5, 0.5, 0.2, 0.1).unscaled(2.0);

        assert_eq!(rect.position, Vec2::new(0.5, 0.5));
        assert_eq!(rect.size, Vec2::new(0.1, 0.05));
    }
}
