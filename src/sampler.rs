//! Sampler configuration and the sampling math it drives.
//!
//! A [`Sampler`] is external, read-only configuration: the fragment stage
//! never inspects it beyond asking for a sample. Addressing is applied to
//! texel indices after the coordinate is scaled into texel space, so
//! out-of-[0, 1] coordinates resolve to whatever the configured mode
//! defines rather than being an error.

use glam::{Vec2, Vec4};

use crate::texture::Texture;

/// Slot the sampler is bound at. Distinct namespace from
/// [`crate::texture::TEXTURE_BINDING`], same index.
pub const SAMPLER_BINDING: u32 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
  Nearest,
  #[default]
  Linear,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressMode {
  #[default]
  Repeat,
  MirroredRepeat,
  ClampToEdge,
}

/// Filtering and addressing configuration for texture sampling.
///
/// Defaults mirror the pass as shipped: linear filtering with repeat
/// addressing on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sampler {
  pub mag_filter: Filter,
  pub min_filter: Filter,
  pub address_mode_u: AddressMode,
  pub address_mode_v: AddressMode,
}

impl Sampler {
  pub fn nearest_clamp() -> Self {
    Self {
      mag_filter: Filter::Nearest,
      min_filter: Filter::Nearest,
      address_mode_u: AddressMode::ClampToEdge,
      address_mode_v: AddressMode::ClampToEdge,
    }
  }

  /// Samples `texture` at the normalized coordinate `uv`.
  ///
  /// There is no LOD selection on the CPU path, so the magnification
  /// filter always applies.
  pub fn sample(&self, texture: &Texture, uv: Vec2) -> Vec4 {
    match self.mag_filter {
      Filter::Nearest => self.sample_nearest(texture, uv),
      Filter::Linear => self.sample_linear(texture, uv),
    }
  }

  fn sample_nearest(&self, texture: &Texture, uv: Vec2) -> Vec4 {
    let x = (uv.x * texture.width() as f32).floor() as i64;
    let y = (uv.y * texture.height() as f32).floor() as i64;
    texture.texel(
      wrap(x, texture.width(), self.address_mode_u),
      wrap(y, texture.height(), self.address_mode_v),
    )
  }

  fn sample_linear(&self, texture: &Texture, uv: Vec2) -> Vec4 {
    // Texel centers sit at half-integer coordinates.
    let x = uv.x * texture.width() as f32 - 0.5;
    let y = uv.y * texture.height() as f32 - 0.5;
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let x0 = x0 as i64;
    let y0 = y0 as i64;
    let tx0 = wrap(x0, texture.width(), self.address_mode_u);
    let tx1 = wrap(x0 + 1, texture.width(), self.address_mode_u);
    let ty0 = wrap(y0, texture.height(), self.address_mode_v);
    let ty1 = wrap(y0 + 1, texture.height(), self.address_mode_v);

    let top = texture.texel(tx0, ty0).lerp(texture.texel(tx1, ty0), fx);
    let bottom = texture.texel(tx0, ty1).lerp(texture.texel(tx1, ty1), fx);
    top.lerp(bottom, fy)
  }
}

/// Resolves a texel index to a valid coordinate under an addressing mode.
fn wrap(coord: i64, size: u32, mode: AddressMode) -> u32 {
  let size = size as i64;
  match mode {
    AddressMode::Repeat => ((coord % size + size) % size) as u32,
    AddressMode::MirroredRepeat => {
      let period = 2 * size;
      let m = ((coord % period) + period) % period;
      if m < size {
        m as u32
      } else {
        (period - 1 - m) as u32
      }
    }
    AddressMode::ClampToEdge => coord.clamp(0, size - 1) as u32,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn quad_texture() -> Texture {
    // 2x2 with a distinct primary per texel.
    Texture::from_rgba8(
      2,
      2,
      vec![
        255, 0, 0, 255, // (0,0) red
        0, 255, 0, 255, // (1,0) green
        0, 0, 255, 255, // (0,1) blue
        255, 255, 255, 255, // (1,1) white
      ],
    )
  }

  #[test]
  fn nearest_hits_texel_centers() {
    let texture = quad_texture();
    let sampler = Sampler::nearest_clamp();
    assert_eq!(
      sampler.sample(&texture, Vec2::new(0.25, 0.25)),
      texture.texel(0, 0)
    );
    assert_eq!(
      sampler.sample(&texture, Vec2::new(0.75, 0.25)),
      texture.texel(1, 0)
    );
    assert_eq!(
      sampler.sample(&texture, Vec2::new(0.25, 0.75)),
      texture.texel(0, 1)
    );
  }

  #[test]
  fn clamp_resolves_edge_and_outside_coordinates_to_border_texels() {
    let texture = quad_texture();
    let sampler = Sampler::nearest_clamp();
    // uv = 1.0 lands exactly on the far edge.
    assert_eq!(
      sampler.sample(&texture, Vec2::new(1.0, 0.25)),
      texture.texel(1, 0)
    );
    assert_eq!(
      sampler.sample(&texture, Vec2::new(-0.6, 0.25)),
      texture.texel(0, 0)
    );
    assert_eq!(
      sampler.sample(&texture, Vec2::new(2.4, 0.75)),
      texture.texel(1, 1)
    );
  }

  #[test]
  fn repeat_tiles_out_of_range_coordinates() {
    let texture = quad_texture();
    let sampler = Sampler {
      mag_filter: Filter::Nearest,
      min_filter: Filter::Nearest,
      ..Sampler::default()
    };
    assert_eq!(
      sampler.sample(&texture, Vec2::new(1.25, 0.25)),
      texture.texel(0, 0)
    );
    assert_eq!(
      sampler.sample(&texture, Vec2::new(-0.25, 0.25)),
      texture.texel(1, 0)
    );
    assert_eq!(
      sampler.sample(&texture, Vec2::new(0.25, -0.75)),
      texture.texel(0, 0)
    );
  }

  #[test]
  fn mirrored_repeat_reflects_across_the_edge() {
    let texture = quad_texture();
    let sampler = Sampler {
      mag_filter: Filter::Nearest,
      min_filter: Filter::Nearest,
      address_mode_u: AddressMode::MirroredRepeat,
      address_mode_v: AddressMode::MirroredRepeat,
    };
    // -0.25 mirrors to 0.25, 1.25 mirrors to 0.75.
    assert_eq!(
      sampler.sample(&texture, Vec2::new(-0.25, 0.25)),
      texture.texel(0, 0)
    );
    assert_eq!(
      sampler.sample(&texture, Vec2::new(1.25, 0.25)),
      texture.texel(1, 0)
    );
  }

  #[test]
  fn linear_blends_between_texel_centers() {
    let texture = Texture::from_rgba8(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]);
    let sampler = Sampler::default();
    let sampled = sampler.sample(&texture, Vec2::new(0.5, 0.5));
    assert!((sampled.x - 0.5).abs() < 1e-6);
    assert!((sampled.y - 0.5).abs() < 1e-6);
    assert!((sampled.z - 0.5).abs() < 1e-6);
    assert!((sampled.w - 1.0).abs() < 1e-6);
  }

  #[test]
  fn linear_at_a_texel_center_returns_the_texel() {
    let texture = quad_texture();
    let sampler = Sampler::default();
    let sampled = sampler.sample(&texture, Vec2::new(0.25, 0.25));
    assert!((sampled - texture.texel(0, 0)).abs().max_element() < 1e-6);
  }
}
