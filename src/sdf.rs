use {
  euclid::{Point2D, Box2D},
  crate::geometry::BoundingBox,
  num_traits::Float
};

/// Signed distance function
pub trait SDF<T, Space> {
  fn sdf(&self, pixel: Point2D<T, Space>) -> T;
}

/// Line segment with round caps, i.e. every point within `radius` of `[a, b]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Capsule<T, Space> {
  pub a: Point2D<T, Space>,
  pub b: Point2D<T, Space>,
  pub radius: T
}

impl<T, S> Capsule<T, S> {
  pub fn new(a: Point2D<T, S>, b: Point2D<T, S>, radius: T) -> Self {
    Self { a, b, radius }
  }
}

impl<T: Float, S> SDF<T, S> for Capsule<T, S> {
  fn sdf(&self, pixel: Point2D<T, S>) -> T {
    let pa = pixel - self.a;
    let ba = self.b - self.a;
    let len2 = ba.square_length();
    // degenerate segment is a disk
    let h = if len2 > T::zero() {
      (pa.dot(ba) / len2).max(T::zero()).min(T::one())
    } else {
      T::zero()
    };
    (pa - ba * h).length() - self.radius
  }
}

impl<T: Float, S> BoundingBox<T, S> for Capsule<T, S> {
  fn bounding_box(&self) -> Box2D<T, S> {
    Box2D::from_points([self.a, self.b])
      .inflate(self.radius, self.radius)
  }
}
