use crate::foundation::core::{Point, Rgba8, Size};

/// Four corner positions and four corner colors driving a quad fill.
///
/// Corners are in triangle-strip order over the content rectangle:
/// index 0 = (0,0), 1 = (w,0), 2 = (0,h), 3 = (w,h), with positions
/// scaled by the owning layer's content-scale factor. Exclusively owned
/// and mutated by that layer; the renderer only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGeometry {
    positions: [Point; 4],
    colors: [Rgba8; 4],
}

impl Default for ColorGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorGeometry {
    pub fn new() -> Self {
        Self {
            positions: [Point::ZERO; 4],
            colors: [Rgba8::TRANSPARENT; 4],
        }
    }

    /// Recompute corner positions for `size` in points at `scale`
    /// points-per-pixel.
    pub fn resize(&mut self, size: Size, scale: f64) {
        let w = size.width * scale;
        let h = size.height * scale;
        self.positions = [
            Point::ZERO,
            Point::new(w, 0.0),
            Point::new(0.0, h),
            Point::new(w, h),
        ];
    }

    /// Write the same color to all four corners.
    pub fn set_uniform(&mut self, color: Rgba8) {
        self.colors = [color; 4];
    }

    /// Write independent corner colors, in corner-index order.
    pub fn set_per_corner(&mut self, colors: [Rgba8; 4]) {
        self.colors = colors;
    }

    pub fn positions(&self) -> &[Point; 4] {
        &self.positions
    }

    pub fn colors(&self) -> &[Rgba8; 4] {
        &self.colors
    }
}
