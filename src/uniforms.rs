use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Slot the uniform block is bound at in the default resource space.
pub const UNIFORM_BINDING: u32 = 0;

/// The per-draw transform block shared by every vertex-stage invocation.
///
/// Layout is the wire layout: three column-major 4x4 float matrices in
/// declaration order, 64 bytes each, 192 bytes total, no padding.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TransformUniforms {
  pub model: Mat4,
  pub view: Mat4,
  pub projection: Mat4,
}

impl TransformUniforms {
  pub const IDENTITY: Self = Self {
    model: Mat4::IDENTITY,
    view: Mat4::IDENTITY,
    projection: Mat4::IDENTITY,
  };

  pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
    Self {
      model,
      view,
      projection,
    }
  }

  /// The block exactly as the draw-call issuer would upload it.
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }
}

impl Default for TransformUniforms {
  fn default() -> Self {
    Self::IDENTITY
  }
}

#[cfg(test)]
mod tests {
  use glam::Vec3;

  use super::*;

  #[test]
  fn block_is_exactly_192_bytes() {
    assert_eq!(std::mem::size_of::<TransformUniforms>(), 192);
    assert_eq!(TransformUniforms::IDENTITY.as_bytes().len(), 192);
  }

  #[test]
  fn matrices_are_stored_in_declaration_order() {
    let uniforms = TransformUniforms::new(
      Mat4::from_scale(Vec3::splat(2.0)),
      Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)),
      Mat4::from_rotation_z(0.5),
    );

    let model = uniforms.model.to_cols_array();
    let view = uniforms.view.to_cols_array();
    let projection = uniforms.projection.to_cols_array();

    let bytes = uniforms.as_bytes();
    assert_eq!(&bytes[0..64], bytemuck::cast_slice::<f32, u8>(&model));
    assert_eq!(&bytes[64..128], bytemuck::cast_slice::<f32, u8>(&view));
    assert_eq!(&bytes[128..192], bytemuck::cast_slice::<f32, u8>(&projection));
  }
}
