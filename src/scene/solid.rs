use crate::foundation::core::{Point, Rgb8, Rgba8, Size, Stage};
use crate::foundation::error::LaminaResult;
use crate::input::InputDispatchers;
use crate::render::backend::{BlendFunc, RenderTarget};
use crate::scene::geometry::ColorGeometry;
use crate::scene::layer::Layer;
use crate::scene::node::{LayerNode, Node};

/// A layer filled with a single color at a single opacity.
#[derive(Debug)]
pub struct SolidLayer {
    pub(crate) layer: Layer,
    pub(crate) geometry: ColorGeometry,
    pub(crate) color: Rgb8,
    pub(crate) opacity: u8,
    pub(crate) blend: BlendFunc,
}

impl SolidLayer {
    /// A colored layer covering the whole stage window.
    pub fn with_color(stage: &Stage, color: Rgba8) -> LaminaResult<Self> {
        Self::with_color_and_size(stage, color, stage.win_size())
    }

    pub fn with_color_and_size(stage: &Stage, color: Rgba8, size: Size) -> LaminaResult<Self> {
        let mut layer = Layer::with_size(stage, size)?;
        // Color layers anchor at their top-left corner.
        layer.node_mut().set_anchor(Point::new(0.0, 1.0));

        let mut this = Self {
            layer,
            geometry: ColorGeometry::new(),
            color: color.rgb(),
            opacity: color.a,
            blend: BlendFunc::DEFAULT,
        };
        this.set_content_size(size);
        this.update_color();
        Ok(this)
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb8) {
        self.color = color;
        self.update_color();
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity;
        self.update_color();
    }

    pub fn blend_func(&self) -> BlendFunc {
        self.blend
    }

    pub fn set_blend_func(&mut self, blend: BlendFunc) {
        self.blend = blend;
    }

    /// Whether opacity is folded into the color channels. Always false
    /// here; the quad path carries opacity in the vertex alpha instead.
    pub fn opacity_modifies_rgb(&self) -> bool {
        false
    }

    /// Resize the layer, keeping vertex geometry in step with the node's
    /// content-size bookkeeping.
    pub fn set_content_size(&mut self, size: Size) {
        self.geometry.resize(size, self.layer.node().content_scale());
        self.layer.node_mut().set_content_size(size);
    }

    pub fn change_width(&mut self, width: f64) {
        let height = self.layer.node().content_size().height;
        self.set_content_size(Size::new(width, height));
    }

    pub fn change_height(&mut self, height: f64) {
        let width = self.layer.node().content_size().width;
        self.set_content_size(Size::new(width, height));
    }

    pub fn change_width_and_height(&mut self, width: f64, height: f64) {
        self.set_content_size(Size::new(width, height));
    }

    pub fn geometry(&self) -> &ColorGeometry {
        &self.geometry
    }

    /// The embedded plain layer, for input routing and node access.
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    /// Push `(color, opacity)` into every geometry corner.
    pub(crate) fn update_color(&mut self) {
        self.geometry
            .set_uniform(Rgba8::from_rgb(self.color, self.opacity));
    }

    pub(crate) fn draw_target(&self, target: &mut RenderTarget<'_>) {
        match target {
            RenderTarget::Canvas(canvas) => {
                let node = self.layer.node();
                canvas.save();
                if self.opacity != 255 {
                    canvas.set_alpha(f64::from(self.opacity) / 255.0);
                }

                let position = node.position();
                canvas.translate(position.x, -position.y);
                if node.rotation_deg() != 0.0 {
                    canvas.rotate(node.rotation_deg().to_radians());
                }
                let scale = node.scale();
                let skew = node.skew_deg();
                canvas.transform(
                    scale.x,
                    (-skew.y).to_radians().tan(),
                    (-skew.x).to_radians().tan(),
                    scale.y,
                    0.0,
                    0.0,
                );

                // Opacity travels through the global alpha; the fill style
                // itself stays fully opaque.
                canvas.set_fill_color(self.color);
                let size = node.content_size();
                let anchor = node.anchor();
                canvas.fill_rect(
                    -size.width * anchor.x,
                    -size.height * anchor.y,
                    size.width,
                    size.height,
                );
                canvas.restore();
            }
            RenderTarget::Quads(quads) => {
                let custom_blend = self.blend != BlendFunc::DEFAULT || self.opacity != 255;
                if custom_blend {
                    let blend = if self.blend != BlendFunc::DEFAULT {
                        self.blend
                    } else {
                        BlendFunc::ALPHA_NON_PREMULTIPLIED
                    };
                    quads.set_blend_func(blend);
                }

                quads.draw_quad(self.geometry.positions(), self.geometry.colors());

                if custom_blend {
                    quads.set_blend_func(BlendFunc::DEFAULT);
                }
            }
        }
    }
}

impl LayerNode for SolidLayer {
    fn node(&self) -> &Node {
        self.layer.node()
    }

    fn node_mut(&mut self) -> &mut Node {
        self.layer.node_mut()
    }

    fn on_enter(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.layer.on_enter(dispatchers);
    }

    fn on_exit(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.layer.on_exit(dispatchers);
    }

    fn on_enter_transition_did_finish(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.layer.on_enter_transition_did_finish(dispatchers);
    }

    fn draw(&self, target: &mut RenderTarget<'_>) {
        self.draw_target(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::backend::{BlendFactor, Canvas2d, QuadRenderer};

    fn stage() -> Stage {
        Stage::new(Size::new(320.0, 480.0), 2.0).unwrap()
    }

    fn layer() -> SolidLayer {
        SolidLayer::with_color_and_size(&stage(), Rgba8::new(10, 20, 30, 255), Size::new(100.0, 50.0))
            .unwrap()
    }

    #[test]
    fn factory_seeds_color_opacity_and_geometry() {
        let layer = layer();
        assert_eq!(layer.color(), Rgb8::new(10, 20, 30));
        assert_eq!(layer.opacity(), 255);
        assert_eq!(layer.geometry().colors(), &[Rgba8::new(10, 20, 30, 255); 4]);
        assert_eq!(layer.geometry().positions()[3], Point::new(200.0, 100.0));
    }

    #[test]
    fn window_sized_factory_uses_stage_metrics() {
        let layer = SolidLayer::with_color(&stage(), Rgba8::new(0, 0, 0, 255)).unwrap();
        assert_eq!(layer.node().content_size(), Size::new(320.0, 480.0));
    }

    #[test]
    fn set_color_roundtrips_and_refreshes_corners() {
        let mut layer = layer();
        layer.set_color(Rgb8::new(200, 100, 50));
        assert_eq!(layer.color(), Rgb8::new(200, 100, 50));
        for corner in layer.geometry().colors() {
            assert_eq!(corner.rgb(), Rgb8::new(200, 100, 50));
        }
    }

    #[test]
    fn set_opacity_lands_in_every_corner_alpha() {
        let mut layer = layer();
        layer.set_opacity(90);
        for corner in layer.geometry().colors() {
            assert_eq!(corner.a, 90);
        }
    }

    #[test]
    fn set_color_is_idempotent() {
        let mut layer = layer();
        layer.set_color(Rgb8::new(9, 8, 7));
        let once = layer.geometry().clone();
        layer.set_color(Rgb8::new(9, 8, 7));
        assert_eq!(layer.geometry(), &once);
    }

    #[test]
    fn corner_positions_are_independent_of_setter_order() {
        let mut a = layer();
        a.set_color(Rgb8::new(1, 2, 3));
        a.set_content_size(Size::new(40.0, 30.0));

        let mut b = layer();
        b.set_content_size(Size::new(40.0, 30.0));
        b.set_color(Rgb8::new(1, 2, 3));

        assert_eq!(a.geometry(), b.geometry());
        assert_eq!(
            a.geometry().positions(),
            &[
                Point::ZERO,
                Point::new(80.0, 0.0),
                Point::new(0.0, 60.0),
                Point::new(80.0, 60.0),
            ]
        );
    }

    #[test]
    fn change_width_and_height_wrappers_forward() {
        let mut layer = layer();
        layer.change_width(10.0);
        assert_eq!(layer.node().content_size(), Size::new(10.0, 50.0));
        layer.change_height(20.0);
        assert_eq!(layer.node().content_size(), Size::new(10.0, 20.0));
        layer.change_width_and_height(7.0, 8.0);
        assert_eq!(layer.node().content_size(), Size::new(7.0, 8.0));
    }

    #[derive(Default)]
    struct QuadRecorder {
        blend_calls: Vec<BlendFunc>,
        draws: usize,
    }

    impl QuadRenderer for QuadRecorder {
        fn set_blend_func(&mut self, blend: BlendFunc) {
            self.blend_calls.push(blend);
        }

        fn draw_quad(&mut self, _positions: &[Point; 4], _colors: &[Rgba8; 4]) {
            self.draws += 1;
        }
    }

    #[test]
    fn opaque_default_blend_draw_touches_no_blend_state() {
        let layer = layer();
        let mut quads = QuadRecorder::default();
        layer.draw_target(&mut RenderTarget::Quads(&mut quads));
        assert_eq!(quads.draws, 1);
        assert!(quads.blend_calls.is_empty());
    }

    #[test]
    fn translucent_draw_selects_straight_alpha_then_restores_default() {
        let mut layer = layer();
        layer.set_opacity(128);
        let mut quads = QuadRecorder::default();
        layer.draw_target(&mut RenderTarget::Quads(&mut quads));
        assert_eq!(
            quads.blend_calls,
            vec![BlendFunc::ALPHA_NON_PREMULTIPLIED, BlendFunc::DEFAULT]
        );
    }

    #[test]
    fn custom_blend_pair_wins_over_translucency() {
        let mut layer = layer();
        layer.set_opacity(128);
        let custom = BlendFunc {
            src: BlendFactor::SrcAlpha,
            dst: BlendFactor::One,
        };
        layer.set_blend_func(custom);
        let mut quads = QuadRecorder::default();
        layer.draw_target(&mut RenderTarget::Quads(&mut quads));
        assert_eq!(quads.blend_calls, vec![custom, BlendFunc::DEFAULT]);
    }

    #[derive(Default)]
    struct CanvasRecorder {
        ops: Vec<String>,
    }

    impl Canvas2d for CanvasRecorder {
        fn save(&mut self) {
            self.ops.push("save".into());
        }

        fn restore(&mut self) {
            self.ops.push("restore".into());
        }

        fn set_alpha(&mut self, alpha: f64) {
            self.ops.push(format!("alpha {alpha:.3}"));
        }

        fn translate(&mut self, x: f64, y: f64) {
            self.ops.push(format!("translate {x} {y}"));
        }

        fn rotate(&mut self, radians: f64) {
            self.ops.push(format!("rotate {radians:.3}"));
        }

        fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, _tx: f64, _ty: f64) {
            self.ops.push(format!("transform {a} {b:.3} {c:.3} {d}"));
        }

        fn set_fill_color(&mut self, color: Rgb8) {
            self.ops.push(format!("fill_color {} {} {}", color.r, color.g, color.b));
        }

        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(format!("fill_rect {x} {y} {width} {height}"));
        }
    }

    #[test]
    fn canvas_draw_fills_anchored_rect_with_opaque_style() {
        let mut layer = layer();
        layer.node_mut().set_position(Point::new(15.0, 25.0));
        layer.set_opacity(128);
        let mut canvas = CanvasRecorder::default();
        layer.draw_target(&mut RenderTarget::Canvas(&mut canvas));

        assert_eq!(
            canvas.ops,
            vec![
                "save".to_string(),
                format!("alpha {:.3}", 128.0 / 255.0),
                "translate 15 -25".to_string(),
                // Zero skew negated is -0.0, which Display keeps signed.
                "transform 1 -0.000 -0.000 1".to_string(),
                "fill_color 10 20 30".to_string(),
                // Anchored top-left: x offset 0, y offset -height.
                "fill_rect -0 -50 100 50".to_string(),
                "restore".to_string(),
            ]
        );
    }
}
