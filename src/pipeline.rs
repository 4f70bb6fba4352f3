//! Stage pairing and setup-time validation.
//!
//! The shader stages themselves are total functions with no failure
//! modes; the only things that can go wrong live at the seam between
//! them. A vertex stage and a fragment stage agree on an inter-stage
//! interface (which varyings exist, at which locations, with which
//! types), and a disagreement there is a pipeline construction error,
//! not something either stage could detect at invocation time. [`link`]
//! and [`ShadingPass::link`] perform that check once, up front, the way
//! a graphics API validates a pipeline at creation.
//!
//! # Example
//! ```
//! use softshade::{
//!   ModelVertexStage, Sampler, ShadingPass, Texture, TexturedFragmentStage, TransformUniforms,
//! };
//!
//! let uniforms = TransformUniforms::IDENTITY;
//! let texture = Texture::from_fn(1, 1, |_, _| [255, 255, 255, 255]);
//! let sampler = Sampler::default();
//!
//! let pass = ShadingPass::link(
//!   ModelVertexStage::new(&uniforms),
//!   TexturedFragmentStage::new(&texture, &sampler),
//! )
//! .expect("matching interfaces always link");
//! ```

use thiserror::Error;

use crate::stage::{fragment::FragmentStage, vertex::VertexStage};

/// Type of a value interpolated between the stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VaryingType {
  Vec2,
  Vec3,
}

/// One slot of a stage's inter-stage interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaryingSlot {
  pub location: u32,
  pub ty: VaryingType,
}

/// Why a vertex/fragment stage pair refused to link.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkageError {
  #[error("vertex stage writes {vertex} varyings but fragment stage reads {fragment}")]
  SlotCountMismatch { vertex: usize, fragment: usize },

  #[error(
    "varying slot {index}: vertex stage writes location {vertex} but fragment stage reads location {fragment}"
  )]
  LocationMismatch { index: usize, vertex: u32, fragment: u32 },

  #[error(
    "varying location {location}: vertex stage writes {vertex:?} but fragment stage reads {fragment:?}"
  )]
  TypeMismatch {
    location: u32,
    vertex: VaryingType,
    fragment: VaryingType,
  },
}

/// Checks that the varyings one stage writes are exactly the varyings the
/// other reads, slot for slot, in order.
pub fn link(outputs: &[VaryingSlot], inputs: &[VaryingSlot]) -> Result<(), LinkageError> {
  if outputs.len() != inputs.len() {
    return Err(LinkageError::SlotCountMismatch {
      vertex: outputs.len(),
      fragment: inputs.len(),
    });
  }

  for (index, (output, input)) in outputs.iter().zip(inputs).enumerate() {
    if output.location != input.location {
      return Err(LinkageError::LocationMismatch {
        index,
        vertex: output.location,
        fragment: input.location,
      });
    }
    if output.ty != input.ty {
      return Err(LinkageError::TypeMismatch {
        location: output.location,
        vertex: output.ty,
        fragment: input.ty,
      });
    }
  }

  Ok(())
}

/// A vertex stage and a fragment stage whose interfaces have been proven
/// compatible. Construction is the only way to get one, so holding a
/// `ShadingPass` is holding the proof.
pub struct ShadingPass<V: VertexStage, F: FragmentStage> {
  pub vertex: V,
  pub fragment: F,
}

impl<V: VertexStage, F: FragmentStage> ShadingPass<V, F> {
  pub fn link(vertex: V, fragment: F) -> Result<Self, LinkageError> {
    link(V::OUTPUTS, F::INPUTS)?;
    log::debug!(
      "linked shading pass with {} inter-stage varyings",
      V::OUTPUTS.len()
    );
    Ok(Self { vertex, fragment })
  }
}
