use {
  super::Curve,
  std::f64::consts::TAU
};

/// Circle centered in the origin, starting at `(radius, 0)`.
///
/// A negative radius is a valid circle, mirrored through the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub radius: f64
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipse {
  pub axis1: f64,
  pub axis2: f64
}

/// Axis-aligned rectangle with one corner in the origin.
///
/// The perimeter is split into four quarters of `t`:
/// `(0, 0) -> (side1, 0) -> (side1, side2) -> (0, side2) -> (0, 0)`.
/// A breakpoint (0.25, 0.5, 0.75) belongs to the segment that starts there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
  pub side1: f64,
  pub side2: f64
}

impl Curve for Circle {
  fn curve_x(&self, t: f64) -> f64 {
    self.radius * (t * TAU).cos()
  }
  fn curve_y(&self, t: f64) -> f64 {
    self.radius * (t * TAU).sin()
  }
  fn name(&self) -> String {
    format!("circle({})", self.radius)
  }
}

impl Curve for Ellipse {
  fn curve_x(&self, t: f64) -> f64 {
    self.axis1 * (t * TAU).cos()
  }
  fn curve_y(&self, t: f64) -> f64 {
    self.axis2 * (t * TAU).sin()
  }
  fn name(&self) -> String {
    format!("ellipse({}, {})", self.axis1, self.axis2)
  }
}

impl Curve for Rectangle {
  fn curve_x(&self, t: f64) -> f64 {
    let a = self.side1;
    if t < 0.25 { 4.0 * a * t }
    else if t < 0.5 { a }
    else if t < 0.75 { a - 4.0 * a * (t - 0.5) }
    else { 0.0 }
  }
  fn curve_y(&self, t: f64) -> f64 {
    let b = self.side2;
    if t < 0.25 { 0.0 }
    else if t < 0.5 { 4.0 * b * (t - 0.25) }
    else if t < 0.75 { b }
    else { b - 4.0 * b * (t - 0.75) }
  }
  fn name(&self) -> String {
    format!("rectangle({}, {})", self.side1, self.side2)
  }
}
