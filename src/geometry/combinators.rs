use super::{Curve, Linear2, Shape};

/// Pointwise linear map of a shape.
#[derive(Debug, Copy, Clone)]
pub struct Transform<S> {
  pub shape: S,
  pub matrix: Linear2
}

impl <S: Curve> Curve for Transform<S> {
  fn curve_x(&self, t: f64) -> f64 {
    let [[a, b], _] = self.matrix.rows();
    a * self.shape.x(t) + b * self.shape.y(t)
  }
  fn curve_y(&self, t: f64) -> f64 {
    let [_, [c, d]] = self.matrix.rows();
    c * self.shape.x(t) + d * self.shape.y(t)
  }
  fn name(&self) -> String {
    format!("transform({}, {})", self.shape.name(), self.matrix)
  }
}

impl <S> Transform<Transform<S>> {
  /// Collapse `transform(transform(s, a), b)` into `transform(s, b * a)`.
  pub fn flatten(self) -> Transform<S> {
    Transform {
      shape: self.shape.shape,
      matrix: self.matrix * self.shape.matrix
    }
  }
}

/// Circular phase shift of each coordinate's parameter.
#[derive(Debug, Copy, Clone)]
pub struct Offset<S> {
  pub shape: S,
  pub dx: f64,
  pub dy: f64
}

impl <S: Curve> Curve for Offset<S> {
  fn curve_x(&self, t: f64) -> f64 {
    self.shape.x(t + self.dx)
  }
  fn curve_y(&self, t: f64) -> f64 {
    self.shape.y(t + self.dy)
  }
  fn name(&self) -> String {
    format!("offset({}, {}, {})", self.shape.name(), self.dx, self.dy)
  }
}
