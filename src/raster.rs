//! Minimal software stand-in for the fixed-function work between the two
//! stages: viewport transform, triangle coverage, and varying
//! interpolation.
//!
//! This is just enough rasterizer to drive the pass end to end the way
//! the GPU pipeline would: run the vertex stage once per vertex,
//! interpolate its outputs across each covered pixel, run the fragment
//! stage once per covered pixel. Pixel centers are sampled at
//! half-integer coordinates; there is no depth test, no blending, and no
//! clipping (triangles touching the w = 0 plane are dropped whole).

use glam::{Vec2, Vec4};

use crate::{
  pipeline::ShadingPass,
  stage::{
    fragment::{FragmentInput, FragmentStage},
    vertex::VertexStage,
  },
  vertex::{VertexInput, VertexOutput},
};

/// A single RGBA float color attachment.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
  width: u32,
  height: u32,
  pixels: Vec<Vec4>,
}

impl Framebuffer {
  pub fn new(width: u32, height: u32, clear_color: Vec4) -> Self {
    Self {
      width,
      height,
      pixels: vec![clear_color; (width * height) as usize],
    }
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn pixel(&self, x: u32, y: u32) -> Vec4 {
    self.pixels[(y * self.width + x) as usize]
  }

  fn put(&mut self, x: u32, y: u32, color: Vec4) {
    self.pixels[(y * self.width + x) as usize] = color;
  }

  /// Converts the attachment to an 8-bit image, top row first.
  pub fn to_image(&self) -> image::RgbaImage {
    image::RgbaImage::from_fn(self.width, self.height, |x, y| {
      let color = self.pixel(x, y);
      image::Rgba([
        to_u8(color.x),
        to_u8(color.y),
        to_u8(color.z),
        to_u8(color.w),
      ])
    })
  }
}

fn to_u8(value: f32) -> u8 {
  (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Signed parallelogram area of (b - a) x (p - a).
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
  (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Clip space -> screen space for one vertex: perspective divide, then
/// viewport transform. The y axis flips so that +y in clip space is up
/// in the written image.
fn to_screen(clip: Vec4, target: &Framebuffer) -> Vec2 {
  let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
  Vec2::new(
    (ndc.x * 0.5 + 0.5) * target.width as f32,
    (0.5 - ndc.y * 0.5) * target.height as f32,
  )
}

/// Draws an indexed triangle list through a linked pass.
///
/// For each triangle: perspective divide, viewport transform, then one
/// fragment-stage invocation per covered pixel center with affinely
/// interpolated varyings.
pub fn draw_indexed<V: VertexStage, F: FragmentStage>(
  pass: &ShadingPass<V, F>,
  vertices: &[VertexInput],
  indices: &[u32],
  target: &mut Framebuffer,
) {
  assert_eq!(indices.len() % 3, 0, "indices must form whole triangles");
  log::debug!(
    "draw_indexed: {} vertices, {} triangles into {}x{}",
    vertices.len(),
    indices.len() / 3,
    target.width,
    target.height,
  );

  let outputs: Vec<VertexOutput> = vertices.iter().map(|v| pass.vertex.run(*v)).collect();

  for triangle in indices.chunks_exact(3) {
    let a = &outputs[triangle[0] as usize];
    let b = &outputs[triangle[1] as usize];
    let c = &outputs[triangle[2] as usize];

    // No clipping: anything reaching w <= 0 is dropped whole.
    if a.clip_position.w <= 0.0 || b.clip_position.w <= 0.0 || c.clip_position.w <= 0.0 {
      log::trace!("dropping triangle {triangle:?} behind the w = 0 plane");
      continue;
    }

    let sa = to_screen(a.clip_position, target);
    let sb = to_screen(b.clip_position, target);
    let sc = to_screen(c.clip_position, target);

    let area = edge(sa, sb, sc);
    if area == 0.0 {
      continue;
    }

    let min_x = sa.x.min(sb.x).min(sc.x).floor().max(0.0) as u32;
    let max_x = (sa.x.max(sb.x).max(sc.x).ceil() as u32).min(target.width);
    let min_y = sa.y.min(sb.y).min(sc.y).floor().max(0.0) as u32;
    let max_y = (sa.y.max(sb.y).max(sc.y).ceil() as u32).min(target.height);

    for y in min_y..max_y {
      for x in min_x..max_x {
        let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

        // Dividing by the signed area makes the inside test independent
        // of winding.
        let l0 = edge(sb, sc, p) / area;
        let l1 = edge(sc, sa, p) / area;
        let l2 = edge(sa, sb, p) / area;
        if l0 < 0.0 || l1 < 0.0 || l2 < 0.0 {
          continue;
        }

        let input = FragmentInput {
          color: a.color * l0 + b.color * l1 + c.color * l2,
          tex_coord: a.tex_coord * l0 + b.tex_coord * l1 + c.tex_coord * l2,
        };
        let color = pass.fragment.run(input);
        target.put(x, y, color);
      }
    }
  }
}
