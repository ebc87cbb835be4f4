//! 2D vector type for pointer coordinates and pan offsets

/// 2D vector for pointer positions and offsets (CSS pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Distance to another point
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp each axis into `[-bound, +bound]` of the matching axis of `bound`
    #[inline]
    pub fn clamp_symmetric(self, bound: Vec2) -> Self {
        Self::new(
            self.x.clamp(-bound.x, bound.x),
            self.y.clamp(-bound.y, bound.y),
        )
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_sub() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(3.0, 4.0);

        let diff = a - b;
        assert!((diff.x - 7.0).abs() < 0.001);
        assert!((diff.y - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_symmetric() {
        let bound = Vec2::new(50.0, 0.0);
        let clamped = Vec2::new(120.0, -30.0).clamp_symmetric(bound);
        assert!((clamped.x - 50.0).abs() < 0.001);
        assert!(clamped.y.abs() < 0.001);

        let inside = Vec2::new(-20.0, 0.0).clamp_symmetric(bound);
        assert!((inside.x + 20.0).abs() < 0.001);
    }
}
