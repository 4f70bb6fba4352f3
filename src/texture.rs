use glam::Vec4;
use image::DynamicImage;

/// Slot the texture is bound at. The sampler has its own namespace, see
/// [`crate::sampler::SAMPLER_BINDING`].
pub const TEXTURE_BINDING: u32 = 1;

/// A CPU-resident RGBA8 texture.
///
/// Read-only for the duration of a draw; the fragment stage only ever
/// borrows it. Texels are returned as normalized floats so that sampling
/// math matches what the GPU hands the shader.
pub struct Texture {
  pixels: Vec<[u8; 4]>,
  width: u32,
  height: u32,
}

impl Texture {
  /// Wraps raw RGBA8 pixel data, row-major, top row first.
  pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Self {
    assert_eq!(
      data.len(),
      (width * height * 4) as usize,
      "pixel data does not match {width}x{height} RGBA8"
    );
    let pixels = data
      .chunks_exact(4)
      .map(|rgba| [rgba[0], rgba[1], rgba[2], rgba[3]])
      .collect();
    Self {
      pixels,
      width,
      height,
    }
  }

  pub fn from_image(image: &DynamicImage) -> Self {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Self::from_rgba8(width, height, rgba.into_raw())
  }

  /// Builds a texture procedurally, one call per texel.
  pub fn from_fn(width: u32, height: u32, mut texel: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
      for x in 0..width {
        pixels.push(texel(x, y));
      }
    }
    Self {
      pixels,
      width,
      height,
    }
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  /// Fetches the texel at integer coordinates, normalized to [0, 1].
  ///
  /// Coordinates must already be wrapped into range; that is the
  /// sampler's job.
  pub fn texel(&self, x: u32, y: u32) -> Vec4 {
    let [r, g, b, a] = self.pixels[(y * self.width + x) as usize];
    Vec4::new(
      r as f32 / 255.0,
      g as f32 / 255.0,
      b as f32 / 255.0,
      a as f32 / 255.0,
    )
  }
}
