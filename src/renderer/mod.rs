//! WebGPU rendering module
//!
//! Tessellates the playfield into colored triangles each frame and draws them
//! with a single passthrough pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};
