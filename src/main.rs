use std::error::Error;

use glam::{Mat4, Vec2, Vec3, Vec4};
use softshade::{
  Framebuffer, ModelVertexStage, Sampler, ShadingPass, Texture, TexturedFragmentStage,
  TransformUniforms, VertexInput, draw_indexed,
};

fn main() -> Result<(), Box<dyn Error>> {
  env_logger::init();

  let texture = Texture::from_fn(64, 64, |x, y| {
    if (x / 8 + y / 8) % 2 == 0 {
      [220, 220, 220, 255]
    } else {
      [40, 40, 40, 255]
    }
  });
  let sampler = Sampler::default();

  let uniforms = TransformUniforms::new(
    Mat4::from_rotation_z(0.6),
    Mat4::look_at_rh(Vec3::new(0.0, 0.8, 2.0), Vec3::ZERO, Vec3::Y),
    Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0),
  );

  let pass = ShadingPass::link(
    ModelVertexStage::new(&uniforms),
    TexturedFragmentStage::new(&texture, &sampler),
  )?;

  let vertices = [
    VertexInput::new(Vec3::new(-0.8, -0.8, 0.0), Vec3::X, Vec2::new(0.0, 1.0)),
    VertexInput::new(Vec3::new(0.8, -0.8, 0.0), Vec3::Y, Vec2::new(1.0, 1.0)),
    VertexInput::new(Vec3::new(0.8, 0.8, 0.0), Vec3::Z, Vec2::new(1.0, 0.0)),
    VertexInput::new(Vec3::new(-0.8, 0.8, 0.0), Vec3::ONE, Vec2::new(0.0, 0.0)),
  ];
  let indices = [0, 1, 2, 2, 3, 0];

  let mut framebuffer = Framebuffer::new(512, 512, Vec4::new(0.05, 0.05, 0.08, 1.0));
  draw_indexed(&pass, &vertices, &indices, &mut framebuffer);

  framebuffer.to_image().save("softshade.png")?;
  log::info!("wrote softshade.png");
  Ok(())
}
