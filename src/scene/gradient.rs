use crate::foundation::core::{Rgb8, Rgba8, Size, Stage, Vec2};
use crate::foundation::error::LaminaResult;
use crate::input::InputDispatchers;
use crate::render::backend::{BlendFunc, RenderTarget};
use crate::scene::geometry::ColorGeometry;
use crate::scene::layer::Layer;
use crate::scene::node::{LayerNode, Node};
use crate::scene::solid::SolidLayer;

/// A layer filled with a linear gradient between a start and an end color.
///
/// Colors interpolate along `direction` (origin toward terminus); the
/// default `(0, -1)` fades vertically. With compressed interpolation
/// (default on) both endpoint colors stay visible at the quad's extremes
/// for non-cardinal directions.
#[derive(Debug)]
pub struct GradientLayer {
    solid: SolidLayer,
    end_color: Rgb8,
    start_opacity: u8,
    end_opacity: u8,
    direction: Vec2,
    compressed_interpolation: bool,
}

impl GradientLayer {
    /// Full-window gradient along the default `(0, -1)` direction.
    pub fn with_colors(stage: &Stage, start: Rgba8, end: Rgba8) -> LaminaResult<Self> {
        Self::with_colors_along(stage, start, end, Vec2::new(0.0, -1.0))
    }

    /// Full-window gradient along `direction`.
    pub fn with_colors_along(
        stage: &Stage,
        start: Rgba8,
        end: Rgba8,
        direction: Vec2,
    ) -> LaminaResult<Self> {
        // The base fill carries the start color at full opacity; the
        // endpoint opacities live on the gradient itself.
        let solid = SolidLayer::with_color(stage, Rgba8::from_rgb(start.rgb(), 255))?;
        let mut this = Self {
            solid,
            end_color: end.rgb(),
            start_opacity: start.a,
            end_opacity: end.a,
            direction,
            compressed_interpolation: true,
        };
        this.update_color();
        Ok(this)
    }

    pub fn start_color(&self) -> Rgb8 {
        self.solid.color
    }

    pub fn set_start_color(&mut self, color: Rgb8) {
        self.solid.color = color;
        self.update_color();
    }

    pub fn end_color(&self) -> Rgb8 {
        self.end_color
    }

    pub fn set_end_color(&mut self, color: Rgb8) {
        self.end_color = color;
        self.update_color();
    }

    pub fn start_opacity(&self) -> u8 {
        self.start_opacity
    }

    pub fn set_start_opacity(&mut self, opacity: u8) {
        self.start_opacity = opacity;
        self.update_color();
    }

    pub fn end_opacity(&self) -> u8 {
        self.end_opacity
    }

    pub fn set_end_opacity(&mut self, opacity: u8) {
        self.end_opacity = opacity;
        self.update_color();
    }

    pub fn vector(&self) -> Vec2 {
        self.direction
    }

    pub fn set_vector(&mut self, direction: Vec2) {
        self.direction = direction;
        self.update_color();
    }

    pub fn is_compressed_interpolation(&self) -> bool {
        self.compressed_interpolation
    }

    pub fn set_compressed_interpolation(&mut self, compressed: bool) {
        self.compressed_interpolation = compressed;
        self.update_color();
    }

    /// Whole-layer opacity; scales both endpoint opacities.
    pub fn opacity(&self) -> u8 {
        self.solid.opacity
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        self.solid.opacity = opacity;
        self.update_color();
    }

    pub fn blend_func(&self) -> BlendFunc {
        self.solid.blend_func()
    }

    pub fn set_blend_func(&mut self, blend: BlendFunc) {
        self.solid.set_blend_func(blend);
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.solid.set_content_size(size);
    }

    pub fn change_width(&mut self, width: f64) {
        self.solid.change_width(width);
    }

    pub fn change_height(&mut self, height: f64) {
        self.solid.change_height(height);
    }

    pub fn change_width_and_height(&mut self, width: f64, height: f64) {
        self.solid.change_width_and_height(width, height);
    }

    pub fn geometry(&self) -> &ColorGeometry {
        self.solid.geometry()
    }

    pub fn layer(&self) -> &Layer {
        self.solid.layer()
    }

    pub fn layer_mut(&mut self) -> &mut Layer {
        self.solid.layer_mut()
    }

    /// Recompute all four corner colors from the gradient parameters.
    ///
    /// A zero-length direction is a no-op that retains the previous corner
    /// colors, and the compressed rescale divides by
    /// `floor(u.x) + floor(u.y)` rather than a magnitude. Both are kept
    /// bit-for-bit compatible with the engine this fill model comes from.
    fn update_color(&mut self) {
        let h = self.direction.hypot();
        if h == 0.0 {
            return;
        }

        let c = std::f64::consts::SQRT_2;
        let mut u = self.direction / h;
        if self.compressed_interpolation {
            let h2 = 1.0 / (u.x.floor() + u.y.floor());
            u = u * (h2 * c);
        }

        let opacity_f = f64::from(self.solid.opacity) / 255.0;
        let start = [
            f64::from(self.solid.color.r),
            f64::from(self.solid.color.g),
            f64::from(self.solid.color.b),
            f64::from(self.start_opacity) * opacity_f,
        ];
        let end = [
            f64::from(self.end_color.r),
            f64::from(self.end_color.g),
            f64::from(self.end_color.b),
            f64::from(self.end_opacity) * opacity_f,
        ];

        fn channel(v: f64) -> u8 {
            v.clamp(0.0, 255.0).round() as u8
        }

        let corner_signs = [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)];
        let mut corners = [Rgba8::TRANSPARENT; 4];
        for (corner, (sx, sy)) in corners.iter_mut().zip(corner_signs) {
            // Projection of the signed corner offset onto the direction,
            // normalized so the extremes land on the endpoint colors.
            let t = (c - sx * u.x - sy * u.y) / (2.0 * c);
            *corner = Rgba8::new(
                channel(end[0] + (start[0] - end[0]) * t),
                channel(end[1] + (start[1] - end[1]) * t),
                channel(end[2] + (start[2] - end[2]) * t),
                channel(end[3] + (start[3] - end[3]) * t),
            );
        }
        self.solid.geometry.set_per_corner(corners);
    }
}

impl LayerNode for GradientLayer {
    fn node(&self) -> &Node {
        self.solid.node()
    }

    fn node_mut(&mut self) -> &mut Node {
        self.solid.node_mut()
    }

    fn on_enter(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.solid.on_enter(dispatchers);
    }

    fn on_exit(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.solid.on_exit(dispatchers);
    }

    fn on_enter_transition_did_finish(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.solid.on_enter_transition_did_finish(dispatchers);
    }

    fn draw(&self, target: &mut RenderTarget<'_>) {
        self.solid.draw_target(target);
    }
}
