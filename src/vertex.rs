use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

/// One vertex as laid out in the vertex buffer.
///
/// Attribute locations are fixed by the pass contract: 0 = position,
/// 1 = color, 2 = tex_coord.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct VertexInput {
  pub position: [f32; 3],
  pub color: [f32; 3],
  pub tex_coord: [f32; 2],
}

impl VertexInput {
  pub fn new(position: Vec3, color: Vec3, tex_coord: Vec2) -> Self {
    Self {
      position: position.to_array(),
      color: color.to_array(),
      tex_coord: tex_coord.to_array(),
    }
  }
}

/// What the vertex stage hands to the rasterizer: a clip-space position
/// plus the varyings interpolated across the triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexOutput {
  pub clip_position: Vec4,
  pub color: Vec3,
  pub tex_coord: Vec2,
}

/// Component layout of a single vertex attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexFormat {
  R32G32Sfloat,
  R32G32B32Sfloat,
}

impl VertexFormat {
  pub fn size(&self) -> u32 {
    match self {
      VertexFormat::R32G32Sfloat => 8,
      VertexFormat::R32G32B32Sfloat => 12,
    }
  }
}

/// One attribute of a vertex buffer binding: where the shader reads it
/// (location) and where it lives in the record (format + byte offset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
  pub location: u32,
  pub format: VertexFormat,
  pub offset: u32,
}

/// Describes how a vertex record maps onto buffer bytes, mirroring what a
/// graphics API's vertex-input state would be built from.
pub trait VertexLayout {
  fn stride() -> u32;
  fn attributes() -> Vec<VertexAttribute>;
}

impl VertexLayout for VertexInput {
  fn stride() -> u32 {
    size_of::<Self>() as u32
  }

  fn attributes() -> Vec<VertexAttribute> {
    vec![
      VertexAttribute {
        location: 0,
        format: VertexFormat::R32G32B32Sfloat,
        offset: offset_of!(VertexInput, position) as u32,
      },
      VertexAttribute {
        location: 1,
        format: VertexFormat::R32G32B32Sfloat,
        offset: offset_of!(VertexInput, color) as u32,
      },
      VertexAttribute {
        location: 2,
        format: VertexFormat::R32G32Sfloat,
        offset: offset_of!(VertexInput, tex_coord) as u32,
      },
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn vertex_record_is_tightly_packed() {
    assert_eq!(VertexInput::stride(), 32);
    assert_eq!(size_of::<VertexInput>(), 32);
  }

  #[test]
  fn attribute_locations_and_offsets_match_the_binding_contract() {
    let attributes = VertexInput::attributes();
    assert_eq!(attributes.len(), 3);

    assert_eq!(attributes[0].location, 0);
    assert_eq!(attributes[0].format, VertexFormat::R32G32B32Sfloat);
    assert_eq!(attributes[0].offset, 0);

    assert_eq!(attributes[1].location, 1);
    assert_eq!(attributes[1].format, VertexFormat::R32G32B32Sfloat);
    assert_eq!(attributes[1].offset, 12);

    assert_eq!(attributes[2].location, 2);
    assert_eq!(attributes[2].format, VertexFormat::R32G32Sfloat);
    assert_eq!(attributes[2].offset, 24);
  }

  #[test]
  fn attribute_formats_cover_the_whole_record() {
    let covered: u32 = VertexInput::attributes()
      .iter()
      .map(|a| a.format.size())
      .sum();
    assert_eq!(covered, VertexInput::stride());
  }
}
