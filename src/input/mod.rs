//! Input routing for layers.
//!
//! The dispatch machinery itself (hit testing, event queues) lives in the
//! host; this module owns the enable flags, the delegate registration
//! lifecycle, and the event/delegate types the host calls back through.

mod dispatch;
mod events;
mod routing;

pub use dispatch::{DelegateId, InputDispatchers, TouchMode};
pub use events::{Acceleration, InputDelegate, KeypadKey, Touch};
pub use routing::{InputKind, InputRouting};
