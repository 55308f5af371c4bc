//! Closed parametric curves.
//!
//! A shape is a pair of scalar functions of one parameter `t`. Every evaluation goes through
//! [`normalize`] first, so all shapes are periodic with period 1 no matter how they are
//! defined. Shapes are immutable values; combinators take the shape by value (or by reference,
//! since `&S` is a shape too) and wrap it into a new one.

use {
  std::{fmt, sync::Arc},
  euclid::{Box2D, Point2D},
  num_traits::Float,
  crate::error::Result
};

pub mod shapes;
pub use shapes::*;
pub mod patate;
pub use patate::{Complexity, Patate};
pub mod linear;
pub use linear::Linear2;
pub mod combinators;
pub use combinators::{Offset, Transform};

#[cfg(test)] mod tests;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Curve coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub type P2 = Point2D<f64, WorldSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Map any real `t` into `[0, 1)`.
///
/// This is `t - floor(t)`, so `-0.25` maps to `0.75`.
pub fn normalize<T: Float>(t: T) -> T {
  let t = t - t.floor();
  // tiny negative inputs round up to exactly 1
  if t >= T::one() { T::zero() } else { t }
}

/// Raw coordinate functions of a shape.
///
/// `curve_x` and `curve_y` are only ever called with `t` already in `[0, 1)`; callers go through
/// [`Shape::x`] and [`Shape::y`].
pub trait Curve {
  fn curve_x(&self, t: f64) -> f64;
  fn curve_y(&self, t: f64) -> f64;
  /// Descriptive label, carries provenance only.
  fn name(&self) -> String;
}

/// A closed curve, evaluated through parameter normalization.
pub trait Shape: Curve {
  fn x(&self, t: f64) -> f64 {
    self.curve_x(normalize(t))
  }
  fn y(&self, t: f64) -> f64 {
    self.curve_y(normalize(t))
  }
  fn point(&self, t: f64) -> P2 {
    P2::new(self.x(t), self.y(t))
  }
  /// Apply a linear map to every point of the curve.
  fn transform(self, matrix: Linear2) -> Transform<Self> where Self: Sized {
    Transform { shape: self, matrix }
  }
  /// Shift the parameter of each axis by its own phase.
  ///
  /// This is *not* a translation of the curve in the plane: with `dx != dy` the two coordinate
  /// functions drift apart and the outline is distorted.
  fn offset(self, dx: f64, dy: f64) -> Offset<Self> where Self: Sized {
    Offset { shape: self, dx, dy }
  }
  fn into_dyn(self) -> DynShape where Self: Sized + Send + Sync + 'static {
    Arc::new(self)
  }
  #[cfg(feature = "drawing")]
  #[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
  fn plot(&self) -> crate::drawing::Plot<'_, Self> {
    crate::drawing::Plot::new(self)
  }
}
impl <T> Shape for T where T: Curve + ?Sized {}

/// Type-erased shape, for heterogeneous collections.
pub type DynShape = Arc<dyn Curve + Send + Sync>;

impl <C: Curve + ?Sized> Curve for &C {
  fn curve_x(&self, t: f64) -> f64 { (**self).curve_x(t) }
  fn curve_y(&self, t: f64) -> f64 { (**self).curve_y(t) }
  fn name(&self) -> String { (**self).name() }
}
impl <C: Curve + ?Sized> Curve for Box<C> {
  fn curve_x(&self, t: f64) -> f64 { (**self).curve_x(t) }
  fn curve_y(&self, t: f64) -> f64 { (**self).curve_y(t) }
  fn name(&self) -> String { (**self).name() }
}
impl <C: Curve + ?Sized> Curve for Arc<C> {
  fn curve_x(&self, t: f64) -> f64 { (**self).curve_x(t) }
  fn curve_y(&self, t: f64) -> f64 { (**self).curve_y(t) }
  fn name(&self) -> String { (**self).name() }
}

type CoordFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Shape built from two arbitrary coordinate functions.
///
/// The functions only have to be defined on `[0, 1)`. If one of them is undefined somewhere in
/// that interval, the fault shows up as a non-finite coordinate at evaluation time.
#[derive(Clone)]
pub struct FnShape {
  x: CoordFn,
  y: CoordFn,
  name: String
}

impl FnShape {
  pub fn new(
    x: impl Fn(f64) -> f64 + Send + Sync + 'static,
    y: impl Fn(f64) -> f64 + Send + Sync + 'static,
    name: impl Into<String>
  ) -> Self {
    Self { x: Arc::new(x), y: Arc::new(y), name: name.into() }
  }
}

impl fmt::Debug for FnShape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FnShape")
      .field("name", &self.name)
      .finish_non_exhaustive()
  }
}

impl Curve for FnShape {
  fn curve_x(&self, t: f64) -> f64 { (self.x)(t) }
  fn curve_y(&self, t: f64) -> f64 { (self.y)(t) }
  fn name(&self) -> String { self.name.clone() }
}

pub fn circle(radius: f64) -> Circle {
  Circle { radius }
}

pub fn ellipse(axis1: f64, axis2: f64) -> Ellipse {
  Ellipse { axis1, axis2 }
}

pub fn rectangle(side1: f64, side2: f64) -> Rectangle {
  Rectangle { side1, side2 }
}

/// Random potato number `seed`. See [`Patate`].
pub fn patate(seed: u64, complexity: impl Into<Complexity>) -> Patate {
  Patate::new(seed, complexity.into())
}

pub fn transform<S: Shape>(shape: S, matrix: Linear2) -> Transform<S> {
  shape.transform(matrix)
}

/// Same as [`transform`], for a matrix given as rows. Anything but 2x2 is rejected here,
/// before a shape is built.
pub fn transform_rows<S: Shape, R: AsRef<[f64]>>(shape: S, rows: &[R]) -> Result<Transform<S>> {
  Ok(shape.transform(Linear2::from_rows(rows)?))
}

pub fn offset<S: Shape>(shape: S, dx: f64, dy: f64) -> Offset<S> {
  shape.offset(dx, dy)
}
