use crate::foundation::core::{Point, Rgb8, Rgba8};
use serde::{Deserialize, Serialize};

/// GL-style blend factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    DstColor,
    OneMinusDstColor,
    SrcAlphaSaturate,
}

/// Source/destination blend-factor pair for a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendFunc {
    pub src: BlendFactor,
    pub dst: BlendFactor,
}

impl BlendFunc {
    /// Backend default: premultiplied-alpha compositing.
    pub const DEFAULT: Self = Self {
        src: BlendFactor::One,
        dst: BlendFactor::OneMinusSrcAlpha,
    };

    /// Straight-alpha compositing, used when a translucent layer draws
    /// with the default pair otherwise unchanged.
    pub const ALPHA_NON_PREMULTIPLIED: Self = Self {
        src: BlendFactor::SrcAlpha,
        dst: BlendFactor::OneMinusSrcAlpha,
    };
}

impl Default for BlendFunc {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Immediate-mode 2D canvas interface (save/restore, affine transforms,
/// solid fills). Mirrors the subset of an HTML-canvas-style context the
/// layer draw path needs.
pub trait Canvas2d {
    fn save(&mut self);
    fn restore(&mut self);
    /// Global alpha applied to subsequent fills, in `0.0..=1.0`.
    fn set_alpha(&mut self, alpha: f64);
    fn translate(&mut self, x: f64, y: f64);
    /// Rotate the current transform by `radians`.
    fn rotate(&mut self, radians: f64);
    /// Multiply the current transform by the 2x3 matrix `[a b c d tx ty]`.
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64);
    fn set_fill_color(&mut self, color: Rgb8);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// Vertex-array draw interface: a colored quad in triangle-strip corner
/// order with an explicit blend state.
pub trait QuadRenderer {
    fn set_blend_func(&mut self, blend: BlendFunc);
    fn draw_quad(&mut self, positions: &[Point; 4], colors: &[Rgba8; 4]);
}

/// The graphics interface a draw call drives.
///
/// Which variant is in effect is host configuration; layers render to
/// whichever target they are handed each frame.
pub enum RenderTarget<'a> {
    Canvas(&'a mut dyn Canvas2d),
    Quads(&'a mut dyn QuadRenderer),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_blend_is_premultiplied() {
        let blend = BlendFunc::default();
        assert_eq!(blend, BlendFunc::DEFAULT);
        assert_eq!(blend.src, BlendFactor::One);
        assert_eq!(blend.dst, BlendFactor::OneMinusSrcAlpha);
    }

    #[test]
    fn blend_func_json_roundtrip() {
        let s = serde_json::to_string(&BlendFunc::ALPHA_NON_PREMULTIPLIED).unwrap();
        let de: BlendFunc = serde_json::from_str(&s).unwrap();
        assert_eq!(de, BlendFunc::ALPHA_NON_PREMULTIPLIED);
    }
}
