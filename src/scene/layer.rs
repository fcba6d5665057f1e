use crate::foundation::core::{Size, Stage};
use crate::foundation::error::{LaminaError, LaminaResult};
use crate::input::{DelegateId, InputDispatchers, InputKind, InputRouting, TouchMode};
use crate::render::backend::RenderTarget;
use crate::scene::node::{LayerNode, Node};
use tracing::debug;

/// A plain layer: a rectangular node that can receive routed input but
/// draws nothing of its own.
///
/// [`SolidLayer`](crate::SolidLayer) and friends embed one of these for
/// the node bookkeeping and the input-registration lifecycle.
#[derive(Debug)]
pub struct Layer {
    node: Node,
    input: InputRouting,
}

impl Layer {
    /// A layer covering the whole stage window.
    pub fn new(stage: &Stage) -> LaminaResult<Self> {
        Self::with_size(stage, stage.win_size())
    }

    pub fn with_size(stage: &Stage, size: Size) -> LaminaResult<Self> {
        if !(size.width.is_finite() && size.height.is_finite()) || size.width < 0.0 || size.height < 0.0
        {
            return Err(LaminaError::init(format!(
                "layer content size must be finite and non-negative, got {}x{}",
                size.width, size.height
            )));
        }
        Ok(Self {
            node: Node::new(size, stage.content_scale()),
            input: InputRouting::new(DelegateId::next()),
        })
    }

    pub fn delegate_id(&self) -> DelegateId {
        self.input.delegate_id()
    }

    pub fn is_touch_enabled(&self) -> bool {
        self.input.is_enabled(InputKind::Touch)
    }

    pub fn set_touch_enabled(&mut self, enabled: bool, dispatchers: &mut dyn InputDispatchers) {
        let running = self.node.is_running();
        self.input
            .set_enabled(InputKind::Touch, enabled, running, dispatchers);
    }

    pub fn is_accelerometer_enabled(&self) -> bool {
        self.input.is_enabled(InputKind::Accelerometer)
    }

    pub fn set_accelerometer_enabled(
        &mut self,
        enabled: bool,
        dispatchers: &mut dyn InputDispatchers,
    ) {
        let running = self.node.is_running();
        self.input
            .set_enabled(InputKind::Accelerometer, enabled, running, dispatchers);
    }

    pub fn is_keypad_enabled(&self) -> bool {
        self.input.is_enabled(InputKind::Keypad)
    }

    pub fn set_keypad_enabled(&mut self, enabled: bool, dispatchers: &mut dyn InputDispatchers) {
        let running = self.node.is_running();
        self.input
            .set_enabled(InputKind::Keypad, enabled, running, dispatchers);
    }

    pub fn touch_mode(&self) -> TouchMode {
        self.input.touch_mode()
    }

    /// Choose standard vs targeted touch delivery for the next
    /// registration.
    pub fn set_touch_mode(&mut self, mode: TouchMode) {
        self.input.set_touch_mode(mode);
    }
}

impl LayerNode for Layer {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn on_enter(&mut self, dispatchers: &mut dyn InputDispatchers) {
        debug!(id = self.delegate_id().0, "layer enter");
        // Touch registers before the node is marked live so parents sit
        // behind children in dispatch priority order.
        self.input.on_enter(dispatchers);
        self.node.mark_entered();
    }

    fn on_exit(&mut self, dispatchers: &mut dyn InputDispatchers) {
        debug!(id = self.delegate_id().0, "layer exit");
        self.input.on_exit(dispatchers);
        self.node.mark_exited();
    }

    fn on_enter_transition_did_finish(&mut self, dispatchers: &mut dyn InputDispatchers) {
        self.input.on_enter_transition_did_finish(dispatchers);
    }

    fn draw(&self, _target: &mut RenderTarget<'_>) {}
}
