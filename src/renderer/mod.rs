//! wgpu rendering module
//!
//! Scene composition is plain data (`scene`, `shapes`, `text`); only
//! `pipeline` touches the GPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Overlay, build_frame};
pub use vertex::Vertex;
