use {
  euclid::{Box2D, Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    geometry::{BoundingBox, PixelSpace},
    sdf::SDF
  }
};

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: SDF<f64, PixelSpace> + BoundingBox<f64, PixelSpace>
{
  fn draw(&self, image: &mut RgbaImage) {
    let screen = Box2D::from_size(Size2D::<_, PixelSpace>::from(image.dimensions()).to_f64());
    let bounding_box = match self.shape.bounding_box()
      .round_out()
      .intersection(&screen) {
      Some(x) => x.to_u32(),
      None => return // bounding box has no intersection with screen at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        let center = Point2D::new(x as f64 + 0.5, y as f64 + 0.5);
        let sdf = self.shape.sdf(center);
        let pixel = image.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(sdf, *pixel, self.texture);
      });
  }
}

/// Blend `col2` over `col1`, with coverage taken from the distance to the edge.
/// One pixel wide antialiasing band.
fn sdf_overlay_aa(sdf: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let alpha = (0.5 - sdf).clamp(0.0, 1.0);
  if alpha == 0.0 { return col1 }
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}
