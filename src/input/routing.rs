use crate::input::dispatch::{DelegateId, InputDispatchers, TouchMode};
use tracing::trace;

/// The three input channels a layer can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Touch,
    Accelerometer,
    Keypad,
}

/// Per-channel registration state.
///
/// `enabled` is the user-facing flag; `active` tracks whether a
/// registration is currently held with the host dispatcher. The pair
/// encodes disabled / enabled-inactive / enabled-active, and is what makes
/// repeated enable/disable toggling and repeated enter/exit idempotent.
#[derive(Debug, Clone, Copy, Default)]
struct Flag {
    enabled: bool,
    active: bool,
}

/// Input registration lifecycle for one layer.
///
/// Owned by the layer; every mutation takes the dispatcher seam and the
/// layer's running state as parameters, so registration happens exactly at
/// the transitions the scene graph defines.
#[derive(Debug)]
pub struct InputRouting {
    id: DelegateId,
    touch: Flag,
    accelerometer: Flag,
    keypad: Flag,
    touch_mode: TouchMode,
}

impl InputRouting {
    pub fn new(id: DelegateId) -> Self {
        Self {
            id,
            touch: Flag::default(),
            accelerometer: Flag::default(),
            keypad: Flag::default(),
            touch_mode: TouchMode::default(),
        }
    }

    pub fn delegate_id(&self) -> DelegateId {
        self.id
    }

    pub fn touch_mode(&self) -> TouchMode {
        self.touch_mode
    }

    /// Choose standard vs targeted touch registration.
    ///
    /// Takes effect on the next registration; an already-active standard
    /// registration is not migrated in place.
    pub fn set_touch_mode(&mut self, mode: TouchMode) {
        self.touch_mode = mode;
    }

    pub fn is_enabled(&self, kind: InputKind) -> bool {
        self.flag(kind).enabled
    }

    /// Enable or disable one channel.
    ///
    /// Unchanged values are a no-op. While the layer is running, enabling
    /// registers with the host immediately and disabling deregisters;
    /// otherwise the change waits for the next `on_enter`.
    pub fn set_enabled(
        &mut self,
        kind: InputKind,
        enabled: bool,
        running: bool,
        dispatchers: &mut dyn InputDispatchers,
    ) {
        if self.flag(kind).enabled == enabled {
            return;
        }
        self.flag_mut(kind).enabled = enabled;

        if running {
            if enabled {
                self.register(kind, dispatchers);
            } else {
                self.deregister(kind, dispatchers);
            }
        }
    }

    /// Scene-entry: register every enabled channel that is not yet active.
    ///
    /// Touch registers first so parent layers end up behind their children
    /// in priority order, then accelerometer, then keypad.
    pub fn on_enter(&mut self, dispatchers: &mut dyn InputDispatchers) {
        for kind in [InputKind::Touch, InputKind::Accelerometer, InputKind::Keypad] {
            let flag = self.flag(kind);
            if flag.enabled && !flag.active {
                self.register(kind, dispatchers);
            }
        }
    }

    /// Scene-exit: drop every active registration.
    pub fn on_exit(&mut self, dispatchers: &mut dyn InputDispatchers) {
        for kind in [InputKind::Touch, InputKind::Accelerometer, InputKind::Keypad] {
            if self.flag(kind).active {
                self.deregister(kind, dispatchers);
            }
        }
    }

    /// Transition-finish: re-assert the accelerometer delegate slot.
    ///
    /// The slot is single-owner, so a transition scene that held it in the
    /// meantime is displaced here. Setting it again while already active is
    /// harmless by the dispatcher contract.
    pub fn on_enter_transition_did_finish(&mut self, dispatchers: &mut dyn InputDispatchers) {
        if self.accelerometer.enabled {
            dispatchers.set_accelerometer_delegate(Some(self.id));
            self.accelerometer.active = true;
        }
    }

    fn register(&mut self, kind: InputKind, dispatchers: &mut dyn InputDispatchers) {
        trace!(id = self.id.0, ?kind, "register input delegate");
        match kind {
            InputKind::Touch => match self.touch_mode {
                TouchMode::Standard { priority } => {
                    dispatchers.add_standard_touch_delegate(self.id, priority);
                }
                TouchMode::Targeted { priority, swallows } => {
                    dispatchers.add_targeted_touch_delegate(self.id, priority, swallows);
                }
            },
            InputKind::Accelerometer => dispatchers.set_accelerometer_delegate(Some(self.id)),
            InputKind::Keypad => dispatchers.add_keypad_delegate(self.id),
        }
        self.flag_mut(kind).active = true;
    }

    fn deregister(&mut self, kind: InputKind, dispatchers: &mut dyn InputDispatchers) {
        trace!(id = self.id.0, ?kind, "deregister input delegate");
        match kind {
            InputKind::Touch => dispatchers.remove_touch_delegate(self.id),
            InputKind::Accelerometer => dispatchers.set_accelerometer_delegate(None),
            InputKind::Keypad => dispatchers.remove_keypad_delegate(self.id),
        }
        self.flag_mut(kind).active = false;
    }

    fn flag(&self, kind: InputKind) -> Flag {
        match kind {
            InputKind::Touch => self.touch,
            InputKind::Accelerometer => self.accelerometer,
            InputKind::Keypad => self.keypad,
        }
    }

    fn flag_mut(&mut self, kind: InputKind) -> &mut Flag {
        match kind {
            InputKind::Touch => &mut self.touch,
            InputKind::Accelerometer => &mut self.accelerometer,
            InputKind::Keypad => &mut self.keypad,
        }
    }
}
