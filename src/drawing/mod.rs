//! Raster renderer.
//!
//! The curve is approximated by `N + 1` evenly spaced samples in `[0, 1]`, fitted into the
//! image with equal aspect ratio and 5% padding on each side, and stroked as a polyline.
//! Overlay segments `(t1, t2)` are drawn as straight lines between the two curve points.

use {
  std::path::{Path, PathBuf},
  euclid::{Box2D, Point2D, Size2D},
  image::{Rgba, RgbaImage},
  itertools::Itertools,
  log::{debug, trace, warn},
  crate::{
    error::{Error, Result},
    geometry::{PixelSpace, Shape, WorldSpace, P2},
    sdf::Capsule
  }
};

mod raster;
pub use raster::{Draw, Texture};

/// Straight line between the curve points at `t1` and `t2`.
pub type Segment = (f64, f64);

#[derive(Debug, Clone)]
pub struct RenderConfig {
  /// Number of polyline segments approximating the curve.
  pub sample_count: usize,
  pub resolution: Size2D<u32, PixelSpace>,
  /// Fraction of the data range added on each side.
  pub padding: f64,
  /// Absolute padding used when a data range is exactly zero.
  pub min_padding: f64,
  /// Stroke widths, in pixels.
  pub curve_width: f64,
  pub segment_width: f64,
  pub background: Rgba<u8>,
  pub curve_color: Rgba<u8>,
  /// Cycled over overlay segments.
  pub segment_colors: Vec<Rgba<u8>>
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      sample_count: 1000,
      resolution: Size2D::new(640, 480),
      padding: 0.05,
      min_padding: 1e-3,
      curve_width: 2.0,
      segment_width: 1.0,
      background: Rgba([255, 255, 255, 255]),
      curve_color: Rgba([0x1f, 0x77, 0xb4, 255]),
      segment_colors: vec![
        Rgba([0xff, 0x7f, 0x0e, 255]),
        Rgba([0x2c, 0xa0, 0x2c, 255]),
        Rgba([0xd6, 0x27, 0x28, 255]),
        Rgba([0x94, 0x67, 0xbd, 255]),
        Rgba([0x8c, 0x56, 0x4b, 255]),
        Rgba([0xe3, 0x77, 0xc2, 255]),
        Rgba([0x7f, 0x7f, 0x7f, 255]),
        Rgba([0xbc, 0xbd, 0x22, 255]),
        Rgba([0x17, 0xbe, 0xcf, 255]),
      ]
    }}}

/// Where a rendered plot goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
  /// Open in the platform image viewer.
  #[default]
  Display,
  /// Write an image file (format from the extension), without displaying it.
  File(PathBuf)
}

impl Output {
  pub fn file(path: impl Into<PathBuf>) -> Self {
    Output::File(path.into())
  }
}

/// Evaluate `shape` at `i / sample_count` for `i = 0..=sample_count`.
pub fn sample<S: Shape + ?Sized>(shape: &S, sample_count: usize) -> Result<Vec<P2>> {
  if sample_count == 0 {
    return Err(Error::ZeroSamples);
  }
  (0..=sample_count)
    .map(|i| checked_point(shape, i as f64 / sample_count as f64))
    .collect()
}

fn checked_point<S: Shape + ?Sized>(shape: &S, t: f64) -> Result<P2> {
  let point = shape.point(t);
  if point.x.is_finite() && point.y.is_finite() {
    Ok(point)
  } else {
    Err(Error::NonFinite { name: shape.name(), t })
  }
}

/// Visible region of curve space, and its placement in the image.
#[derive(Debug, Copy, Clone)]
pub struct Viewport {
  pub world: Box2D<f64, WorldSpace>,
  pub resolution: Size2D<u32, PixelSpace>
}

impl Viewport {
  /// Bounds of `points`, padded by `config.padding` of the range on each side.
  pub fn fit(points: &[P2], config: &RenderConfig) -> Self {
    let bounds = Box2D::from_points(points);
    let pad = |range: f64| {
      if range > 0.0 { range * config.padding } else {
        warn!("zero-width data range, padding by {}", config.min_padding);
        config.min_padding
      }
    };
    let size = bounds.size();
    let world = bounds.inflate(pad(size.width), pad(size.height));
    Self { world, resolution: config.resolution }
  }

  /// Pixels per curve unit, the same on both axes.
  pub fn scale(&self) -> f64 {
    let world = self.world.size();
    let screen = self.resolution.to_f64();
    (screen.width / world.width).min(screen.height / world.height)
  }

  /// Map into pixel space, centered, y axis pointing up.
  pub fn to_pixel(&self, point: P2) -> Point2D<f64, PixelSpace> {
    let scale = self.scale();
    let center = self.world.center();
    let screen = self.resolution.to_f64();
    Point2D::new(
      screen.width / 2.0 + (point.x - center.x) * scale,
      screen.height / 2.0 - (point.y - center.y) * scale
    )
  }
}

/// A shape with everything needed to render it.
pub struct Plot<'a, S: ?Sized> {
  shape: &'a S,
  segments: Vec<Segment>,
  config: RenderConfig
}

impl<'a, S: Shape + ?Sized> Plot<'a, S> {
  pub fn new(shape: &'a S) -> Self {
    Self { shape, segments: vec![], config: RenderConfig::default() }
  }

  pub fn segments(mut self, segments: impl IntoIterator<Item = Segment>) -> Self {
    self.segments.extend(segments);
    self
  }

  pub fn sample_count(mut self, sample_count: usize) -> Self {
    self.config.sample_count = sample_count;
    self
  }

  pub fn config(mut self, config: RenderConfig) -> Self {
    self.config = config;
    self
  }

  pub fn rasterize(&self) -> Result<RgbaImage> {
    let config = &self.config;
    let points = sample(self.shape, config.sample_count)?;
    let viewport = Viewport::fit(&points, config);
    debug!("{}: {} samples, viewport {:?}", self.shape.name(), points.len(), viewport.world);

    let mut image = RgbaImage::from_pixel(
      config.resolution.width,
      config.resolution.height,
      config.background
    );

    points.iter()
      .map(|&p| viewport.to_pixel(p))
      .tuple_windows()
      .for_each(|(a, b)| Texture {
        shape: Capsule::new(a, b, config.curve_width / 2.0),
        texture: config.curve_color
      }.draw(&mut image));

    for (i, &(t1, t2)) in self.segments.iter().enumerate() {
      let a = checked_point(self.shape, t1)?;
      let b = checked_point(self.shape, t2)?;
      trace!("segment #{}: {:?} -> {:?}", i, a, b);
      let color = match config.segment_colors.len() {
        0 => config.curve_color,
        n => config.segment_colors[i % n]
      };
      Texture {
        shape: Capsule::new(viewport.to_pixel(a), viewport.to_pixel(b), config.segment_width / 2.0),
        texture: color
      }.draw(&mut image);
    }

    Ok(image)
  }

  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    self.rasterize()?.save(path)?;
    debug!("{} saved to {}", self.shape.name(), path.display());
    Ok(())
  }

  /// Render into a temporary file and open it.
  ///
  /// The file is kept, since the viewer reads it after this returns.
  pub fn show(&self) -> Result<()> {
    let path = tempfile::Builder::new()
      .prefix("hole-shapes-")
      .suffix(".png")
      .tempfile()?
      .into_temp_path()
      .keep()
      .map_err(std::io::Error::from)?;
    self.save(&path)?;
    open::that(&path)?;
    Ok(())
  }

  pub fn render(&self, output: &Output) -> Result<()> {
    match output {
      Output::Display => self.show(),
      Output::File(path) => self.save(path)
    }
  }
}

/// Render `shape` with `segments` overlaid, approximated by `sample_count` segments.
pub fn render<S: Shape + ?Sized>(
  shape: &S,
  segments: &[Segment],
  sample_count: usize,
  output: &Output
) -> Result<()> {
  Plot::new(shape)
    .segments(segments.iter().copied())
    .sample_count(sample_count)
    .render(output)
}
