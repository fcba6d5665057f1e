use crate::foundation::core::{Point, Size, Vec2};
use crate::input::InputDispatchers;
use crate::render::backend::RenderTarget;

/// Common node state every layer embeds.
///
/// The full scene-graph tree (parent/child ownership, transform
/// composition, z ordering) is host territory; this struct carries only
/// the fields the layer draw path and lifecycle consume.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    position: Point,
    rotation_deg: f64,
    scale: Vec2,
    skew_deg: Vec2,
    /// Normalized anchor inside the content rectangle.
    anchor: Point,
    content_size: Size,
    content_scale: f64,
    visible: bool,
    running: bool,
}

impl Node {
    pub fn new(content_size: Size, content_scale: f64) -> Self {
        Self {
            position: Point::ZERO,
            rotation_deg: 0.0,
            scale: Vec2::new(1.0, 1.0),
            skew_deg: Vec2::ZERO,
            anchor: Point::new(0.5, 0.5),
            content_size,
            content_scale,
            visible: true,
            running: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub fn set_rotation_deg(&mut self, degrees: f64) {
        self.rotation_deg = degrees;
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn skew_deg(&self) -> Vec2 {
        self.skew_deg
    }

    pub fn set_skew_deg(&mut self, skew: Vec2) {
        self.skew_deg = skew;
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    pub fn content_scale(&self) -> f64 {
        self.content_scale
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the node is currently live in the running scene graph.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn mark_entered(&mut self) {
        self.running = true;
    }

    pub(crate) fn mark_exited(&mut self) {
        self.running = false;
    }
}

/// The behavior the scene graph drives on any layer variant.
///
/// Lifecycle hooks take the host dispatcher seam so input registration
/// happens inside the enter/exit transition that caused it.
pub trait LayerNode {
    fn node(&self) -> &Node;

    fn node_mut(&mut self) -> &mut Node;

    /// The layer became live in the running scene graph.
    fn on_enter(&mut self, dispatchers: &mut dyn InputDispatchers);

    /// The layer left the running scene graph.
    fn on_exit(&mut self, dispatchers: &mut dyn InputDispatchers);

    /// The incoming scene's transition finished.
    fn on_enter_transition_did_finish(&mut self, dispatchers: &mut dyn InputDispatchers);

    /// Draw this layer's own content for the current frame.
    fn draw(&self, target: &mut RenderTarget<'_>);
}
