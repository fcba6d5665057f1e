//! Layer nodes: the rectangular, input-receiving, background-drawing
//! members of the scene graph.

mod geometry;
mod gradient;
mod layer;
mod multiplex;
mod node;
mod solid;

pub use geometry::ColorGeometry;
pub use gradient::GradientLayer;
pub use layer::Layer;
pub use multiplex::MultiplexLayer;
pub use node::{LayerNode, Node};
pub use solid::SolidLayer;
