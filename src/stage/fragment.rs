use glam::{Vec2, Vec3, Vec4};

use crate::{
  pipeline::{VaryingSlot, VaryingType},
  sampler::Sampler,
  texture::Texture,
};

/// Varyings arriving at one fragment, already interpolated by the
/// rasterizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentInput {
  pub color: Vec3,
  pub tex_coord: Vec2,
}

/// A per-fragment pure function: interpolated varyings in, one RGBA
/// color out.
pub trait FragmentStage {
  /// Varyings this stage reads, in location order. Checked against the
  /// vertex stage at link time.
  const INPUTS: &'static [VaryingSlot];

  fn run(&self, input: FragmentInput) -> Vec4;
}

/// The model-pass fragment stage: the output is the texture sample at the
/// interpolated tex_coord, nothing else.
pub struct TexturedFragmentStage<'a> {
  texture: &'a Texture,
  sampler: &'a Sampler,
}

impl<'a> TexturedFragmentStage<'a> {
  pub fn new(texture: &'a Texture, sampler: &'a Sampler) -> Self {
    Self { texture, sampler }
  }
}

impl FragmentStage for TexturedFragmentStage<'_> {
  const INPUTS: &'static [VaryingSlot] = &[
    VaryingSlot {
      location: 0,
      ty: VaryingType::Vec3,
    },
    VaryingSlot {
      location: 1,
      ty: VaryingType::Vec2,
    },
  ];

  fn run(&self, input: FragmentInput) -> Vec4 {
    // The interpolated vertex color arrives at location 0 but does not
    // participate in the output. Kept as shipped.
    self.sampler.sample(self.texture, input.tex_coord)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_texture() -> Texture {
    Texture::from_fn(4, 4, |x, y| [(x * 60) as u8, (y * 60) as u8, 128, 255])
  }

  #[test]
  fn output_is_the_sample_at_the_interpolated_coordinate() {
    let texture = test_texture();
    let sampler = Sampler::nearest_clamp();
    let stage = TexturedFragmentStage::new(&texture, &sampler);

    let tex_coord = Vec2::new(0.625, 0.375);
    let out = stage.run(FragmentInput {
      color: Vec3::ONE,
      tex_coord,
    });
    assert_eq!(out, sampler.sample(&texture, tex_coord));
    assert_eq!(out, texture.texel(2, 1));
  }

  #[test]
  fn output_ignores_the_interpolated_vertex_color() {
    let texture = test_texture();
    let sampler = Sampler::default();
    let stage = TexturedFragmentStage::new(&texture, &sampler);

    let tex_coord = Vec2::new(0.4, 0.9);
    let lit = stage.run(FragmentInput {
      color: Vec3::new(1.0, 0.0, 0.5),
      tex_coord,
    });
    let unlit = stage.run(FragmentInput {
      color: Vec3::ZERO,
      tex_coord,
    });
    assert_eq!(lit, unlit);
  }
}
