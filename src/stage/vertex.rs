use glam::{Vec2, Vec3};

use crate::{
  pipeline::{VaryingSlot, VaryingType},
  uniforms::TransformUniforms,
  vertex::{VertexInput, VertexOutput},
};

/// A per-vertex pure function: one `VertexInput` in, one `VertexOutput`
/// out, no side effects, no communication between invocations.
pub trait VertexStage {
  /// Varyings this stage writes, in location order. Checked against the
  /// fragment stage at link time.
  const OUTPUTS: &'static [VaryingSlot];

  fn run(&self, vertex: VertexInput) -> VertexOutput;
}

/// The model-pass vertex stage: transform the position through
/// model, view, and projection, and pass color and tex_coord through
/// untouched.
pub struct ModelVertexStage<'a> {
  uniforms: &'a TransformUniforms,
}

impl<'a> ModelVertexStage<'a> {
  pub fn new(uniforms: &'a TransformUniforms) -> Self {
    Self { uniforms }
  }
}

impl VertexStage for ModelVertexStage<'_> {
  const OUTPUTS: &'static [VaryingSlot] = &[
    VaryingSlot {
      location: 0,
      ty: VaryingType::Vec3,
    },
    VaryingSlot {
      location: 1,
      ty: VaryingType::Vec2,
    },
  ];

  fn run(&self, vertex: VertexInput) -> VertexOutput {
    let position = Vec3::from_array(vertex.position).extend(1.0);
    // Object -> world -> view -> clip. Right-to-left, always.
    let clip_position =
      self.uniforms.projection * (self.uniforms.view * (self.uniforms.model * position));

    VertexOutput {
      clip_position,
      color: Vec3::from_array(vertex.color),
      tex_coord: Vec2::from_array(vertex.tex_coord),
    }
  }
}
