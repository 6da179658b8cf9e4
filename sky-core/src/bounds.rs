use glam::IVec2;

use crate::point::Point;

/// Axis-aligned bounding box over a point field at one step.
///
/// This is a transient measurement: it is recomputed from scratch every
/// step and never carried across steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: IVec2,
    pub max: IVec2,
}

impl BoundingBox {
    /// Measures the bounding box of a point slice.
    ///
    /// ### Returns
    /// `None` if the slice is empty, otherwise the componentwise min/max
    /// over all positions. A point sitting exactly on an edge of the box
    /// is part of it (the box is inclusive on all four edges).
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut min = first.pos;
        let mut max = first.pos;
        for p in &points[1..] {
            min = min.min(p.pos);
            max = max.max(p.pos);
        }
        Some(Self { min, max })
    }

    /// Horizontal extent, `max.x - min.x`.
    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Vertical extent, `max.y - min.y`.
    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// True geometric area of the box, `width * height`, in `i64`.
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Convergence signal: `(max.x + |min.x|) * (max.y + |min.y|)`.
    ///
    /// This is **not** the geometric area. It folds the absolute value of
    /// the minimum into each extent, so for boxes straddling the origin it
    /// matches `width * height` only by coincidence. It is kept in this
    /// exact form because the reported step count depends on where this
    /// quantity, not the true area, stops shrinking.
    pub fn heuristic_area(&self) -> i64 {
        let x = self.max.x as i64 + (self.min.x as i64).abs();
        let y = self.max.y as i64 + (self.min.y as i64).abs();
        x * y
    }
}
