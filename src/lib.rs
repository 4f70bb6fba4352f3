pub mod pipeline;
pub mod raster;
pub mod sampler;
pub mod stage;
pub mod texture;
pub mod uniforms;
pub mod vertex;

// Re-export commonly used items
pub use pipeline::{LinkageError, ShadingPass, VaryingSlot, VaryingType, link};
pub use raster::{Framebuffer, draw_indexed};
pub use sampler::{AddressMode, Filter, SAMPLER_BINDING, Sampler};
pub use stage::{
  fragment::{FragmentInput, FragmentStage, TexturedFragmentStage},
  vertex::{ModelVertexStage, VertexStage},
};
pub use texture::{TEXTURE_BINDING, Texture};
pub use uniforms::{TransformUniforms, UNIFORM_BINDING};
pub use vertex::{VertexAttribute, VertexFormat, VertexInput, VertexLayout, VertexOutput};
