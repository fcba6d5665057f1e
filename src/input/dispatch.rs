use serde::{Deserialize, Serialize};

/// Handle identifying a layer to the host dispatchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelegateId(pub u64);

impl DelegateId {
    /// Allocate a process-unique id for a new layer.
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// How a layer registers for touch delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchMode {
    /// Broadcast delivery of whole touch sets, ordered by priority.
    Standard { priority: i32 },
    /// Per-touch delivery; the delegate may swallow touches it claims.
    Targeted { priority: i32, swallows: bool },
}

impl Default for TouchMode {
    fn default() -> Self {
        Self::Standard { priority: 0 }
    }
}

/// The host's touch/accelerometer/keypad dispatchers, behind one seam.
///
/// Injected into the lifecycle hooks so the routing logic stays testable
/// without any process-wide singletons. Implementations must tolerate
/// removal of an unregistered delegate (a no-op).
pub trait InputDispatchers {
    fn add_standard_touch_delegate(&mut self, id: DelegateId, priority: i32);
    fn add_targeted_touch_delegate(&mut self, id: DelegateId, priority: i32, swallows: bool);
    fn remove_touch_delegate(&mut self, id: DelegateId);

    /// The accelerometer has a single delegate slot; `None` clears it.
    fn set_accelerometer_delegate(&mut self, id: Option<DelegateId>);

    fn add_keypad_delegate(&mut self, id: DelegateId);
    fn remove_keypad_delegate(&mut self, id: DelegateId);
}
