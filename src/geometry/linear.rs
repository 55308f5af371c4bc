use {
  super::{P2, WorldSpace},
  crate::error::{Error, Result},
  std::{fmt, ops::Mul},
  euclid::{Angle, Transform2D}
};

/// 2x2 real matrix `[[a, b], [c, d]]`, acting on column vectors:
/// `x' = a·x + b·y`, `y' = c·x + d·y`.
///
/// Stored as a translation-free `Transform2D`; euclid uses row vectors, so the matrix is kept
/// transposed internally.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Linear2(Transform2D<f64, WorldSpace, WorldSpace>);

impl Linear2 {
  pub fn new([[a, b], [c, d]]: [[f64; 2]; 2]) -> Self {
    Self(Transform2D::new(a, c, b, d, 0.0, 0.0))
  }

  pub fn identity() -> Self {
    Self(Transform2D::identity())
  }

  /// Counter-clockwise rotation around the origin.
  pub fn rotation(angle: Angle<f64>) -> Self {
    let (sin, cos) = angle.get().sin_cos();
    Self::new([[cos, -sin], [sin, cos]])
  }

  pub fn scale(sx: f64, sy: f64) -> Self {
    Self(Transform2D::scale(sx, sy))
  }

  pub fn shear(kx: f64, ky: f64) -> Self {
    Self::new([[1.0, kx], [ky, 1.0]])
  }

  /// Mirror across the x axis.
  pub fn reflection_x() -> Self {
    Self::scale(1.0, -1.0)
  }

  /// Mirror across the y axis.
  pub fn reflection_y() -> Self {
    Self::scale(-1.0, 1.0)
  }

  /// Build from a list of rows, rejecting anything that is not exactly 2x2.
  pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
    let malformed = |cols| Error::MalformedMatrix { rows: rows.len(), cols };
    match rows {
      [r0, r1] => match (r0.as_ref(), r1.as_ref()) {
        (&[a, b], &[c, d]) => Ok(Self::new([[a, b], [c, d]])),
        (&[_, _], r) | (r, _) => Err(malformed(r.len()))
      },
      _ => Err(malformed(rows.first().map_or(0, |r| r.as_ref().len())))
    }
  }

  pub fn rows(&self) -> [[f64; 2]; 2] {
    let m = &self.0;
    [[m.m11, m.m21], [m.m12, m.m22]]
  }

  pub fn determinant(&self) -> f64 {
    self.0.determinant()
  }

  /// Apply `self`, then `other`.
  pub fn then(&self, other: &Self) -> Self {
    Self(self.0.then(&other.0))
  }

  pub fn apply(&self, point: P2) -> P2 {
    let [[a, b], [c, d]] = self.rows();
    P2::new(a * point.x + b * point.y, c * point.x + d * point.y)
  }
}

impl Default for Linear2 {
  fn default() -> Self { Self::identity() }
}

impl From<[[f64; 2]; 2]> for Linear2 {
  fn from(rows: [[f64; 2]; 2]) -> Self { Self::new(rows) }
}

impl TryFrom<Vec<Vec<f64>>> for Linear2 {
  type Error = Error;

  fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
    Self::from_rows(&rows)
  }
}

/// Matrix product: `b * a` applies `a` first.
impl Mul for Linear2 {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self::Output {
    rhs.then(&self)
  }
}

impl fmt::Display for Linear2 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [[a, b], [c, d]] = self.rows();
    write!(f, "[[{}, {}], [{}, {}]]", a, b, c, d)
  }
}
