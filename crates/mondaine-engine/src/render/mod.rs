//! GPU rendering subsystem.
//!
//! The scene draw stream is tessellated on the CPU into a single indexed
//! mesh (`tessellate`) and drawn in one pass by `MeshRenderer`. One mesh per
//! frame keeps paint order exact across shape kinds.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod mesh;
pub mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
