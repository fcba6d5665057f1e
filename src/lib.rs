//! Lamina provides the layer nodes of a 2D scene graph: rectangular
//! drawable regions that receive routed input and fill their content
//! rectangle with a solid color or a linear gradient.
//!
//! The surrounding engine (the node tree, the frame loop, the input
//! dispatchers, the graphics context) stays on the host side and is
//! consumed through narrow traits:
//!
//! - Build a [`SolidLayer`], [`GradientLayer`] or [`MultiplexLayer`]
//!   against a [`Stage`]
//! - Drive `on_enter` / `on_exit` from the scene graph with your
//!   [`InputDispatchers`] implementation
//! - Hand each frame's [`RenderTarget`] to `draw`
#![forbid(unsafe_code)]

mod foundation;

pub mod input;
pub mod render;
pub mod scene;

pub use crate::foundation::core::{Affine, Point, Rect, Rgb8, Rgba8, Size, Stage, Vec2};
pub use crate::foundation::error::{LaminaError, LaminaResult};

pub use crate::input::{
    Acceleration, DelegateId, InputDelegate, InputDispatchers, InputKind, KeypadKey, Touch,
    TouchMode,
};
pub use crate::render::backend::{BlendFactor, BlendFunc, Canvas2d, QuadRenderer, RenderTarget};
pub use crate::scene::{
    ColorGeometry, GradientLayer, Layer, LayerNode, MultiplexLayer, Node, SolidLayer,
};
