//! Error types shared by the shape algebra and the renderer.

/// Everything that can go wrong in this crate.
///
/// Shape evaluation itself never fails; a domain fault only surfaces once somebody
/// looks at the coordinates, which in practice means the renderer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// A linear map was given as something other than 2 rows of 2 columns.
  #[error("transform matrix must be 2x2, got {rows} row(s) with {cols} column(s)")]
  MalformedMatrix { rows: usize, cols: usize },

  /// Curve approximation needs at least one segment.
  #[error("sample count must be at least 1")]
  ZeroSamples,

  /// The underlying function is undefined at this (normalized) parameter.
  #[error("shape `{name}` is not finite at t = {t}")]
  NonFinite { name: String, t: f64 },

  #[cfg(feature = "drawing")]
  #[error(transparent)]
  Image(#[from] image::ImageError),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
