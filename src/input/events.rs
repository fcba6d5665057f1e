use crate::foundation::core::Point;

/// A single touch point, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Stable identifier for the duration of the touch.
    pub id: u64,
    pub location: Point,
    pub previous_location: Point,
}

/// One accelerometer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceleration {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Sample time in seconds, host clock.
    pub timestamp: f64,
}

/// Hardware keypad keys routed to layers.
///
/// Intentionally minimal; pointer and keyboard text input are host
/// concerns, not layer concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadKey {
    Back,
    Menu,
    Unknown(u32),
}

/// Callbacks the host dispatchers invoke on a registered layer.
///
/// Every method has a default no-op body; layers override only what they
/// consume. `touch_began` defaults to claiming the touch so a targeted
/// delegate that forgets to override it still swallows as configured.
pub trait InputDelegate {
    fn touch_began(&mut self, _touch: &Touch) -> bool {
        true
    }

    fn touch_moved(&mut self, _touch: &Touch) {}

    fn touch_ended(&mut self, _touch: &Touch) {}

    fn touch_cancelled(&mut self, _touch: &Touch) {}

    fn accelerate(&mut self, _accel: &Acceleration) {}

    fn keypad(&mut self, _key: KeypadKey) {}
}
