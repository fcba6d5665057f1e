use crate::foundation::core::Stage;
use crate::foundation::error::{LaminaError, LaminaResult};
use crate::input::InputDispatchers;
use crate::render::backend::RenderTarget;
use crate::scene::layer::Layer;
use crate::scene::node::{LayerNode, Node};
use tracing::debug;

/// A layer multiplexing several child layers, exactly one active at a time.
///
/// The multiplexer owns the full child set; the active child is the only
/// one attached to the running scene graph between calls. Indices are a
/// programmer contract: switching to an out-of-range or released slot
/// panics rather than returning an error.
pub struct MultiplexLayer {
    layer: Layer,
    children: Vec<Option<Box<dyn LayerNode>>>,
    active: usize,
}

impl MultiplexLayer {
    /// Build a multiplexer over `children`, activating index 0.
    pub fn with_children(
        stage: &Stage,
        children: Vec<Box<dyn LayerNode>>,
    ) -> LaminaResult<Self> {
        if children.is_empty() {
            return Err(LaminaError::init("multiplex layer needs at least one child"));
        }
        Ok(Self {
            layer: Layer::new(stage)?,
            children: children.into_iter().map(Some).collect(),
            active: 0,
        })
    }

    /// Single-child convenience constructor.
    pub fn with_child(stage: &Stage, child: Box<dyn LayerNode>) -> LaminaResult<Self> {
        Self::with_children(stage, vec![child])
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Index of the currently attached child.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_child(&self) -> &dyn LayerNode {
        self.children[self.active]
            .as_deref()
            .expect("multiplex active slot was released")
    }

    pub fn active_child_mut(&mut self) -> &mut dyn LayerNode {
        self.children[self.active]
            .as_deref_mut()
            .expect("multiplex active slot was released")
    }

    /// Switch to the child at `n`.
    ///
    /// Detaches the active child (firing its exit lifecycle while
    /// running), then attaches child `n` (firing its enter lifecycle).
    /// Both happen before this returns, so no frame observes zero or two
    /// attached children. Switching to the already-active index still
    /// detaches and reattaches it.
    pub fn switch_to(&mut self, n: usize, dispatchers: &mut dyn InputDispatchers) {
        assert!(
            n < self.children.len(),
            "invalid index {n} in multiplex switch_to ({} children)",
            self.children.len()
        );
        assert!(
            self.children[n].is_some(),
            "multiplex switch_to({n}) targets a released slot"
        );
        debug!(from = self.active, to = n, "multiplex switch");

        self.detach_active(dispatchers);
        self.active = n;
        self.attach_active(dispatchers);
    }

    /// Like [`switch_to`](Self::switch_to), but releases the multiplexer's
    /// ownership slot for the previously active child.
    ///
    /// The old slot is left empty; switching back to it later is a
    /// contract violation.
    pub fn switch_to_and_release(&mut self, n: usize, dispatchers: &mut dyn InputDispatchers) {
        assert!(
            n < self.children.len(),
            "invalid index {n} in multiplex switch_to_and_release ({} children)",
            self.children.len()
        );
        assert!(
            self.children[n].is_some(),
            "multiplex switch_to_and_release({n}) targets a released slot"
        );

        self.detach_active(dispatchers);
        self.children[self.active] = None;
        self.active = n;
        self.attach_active(dispatchers);
    }

    fn detach_active(&mut self, dispatchers: &mut dyn InputDispatchers) {
        let running = self.layer.node().is_running();
        let child = self.children[self.active]
            .as_deref_mut()
            .expect("multiplex active slot was released");
        if running {
            child.on_exit(dispatchers);
        }
    }

    fn attach_active(&mut self, dispatchers: &mut dyn InputDispatchers) {
        let running = self.layer.node().is_running();
        let child = self.children[self.active]
            .as_deref_mut()
            .expect("multiplex active slot was released");
        if running {
            child.on_enter(dispatchers);
        }
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }
}

impl LayerNode for MultiplexLayer {
    fn node(&self) -> &Node {
        self.layer.node()
    }

    fn node_mut(&mut self) -> &mut Node {
        self.layer.node_mut()
    }

    fn on_enter(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.layer.on_enter(dispatchers);
        self.attach_active(dispatchers);
    }

    fn on_exit(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.detach_active(dispatchers);
        self.layer.on_exit(dispatchers);
    }

    fn on_enter_transition_did_finish(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.layer.on_enter_transition_did_finish(dispatchers);
        if let Some(child) = self.children[self.active].as_deref_mut() {
            child.on_enter_transition_did_finish(dispatchers);
        }
    }

    fn draw(&self, target: &mut RenderTarget<'_>) {
        self.active_child().draw(target);
    }
}
