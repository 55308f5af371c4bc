//! Procedural "potato" shapes.
//!
//! Each coordinate is a weighted sum over the same fixed list of periodic basis functions,
//! with weights drawn from a PCG stream seeded by the shape number. The result is smooth and
//! closed, but nothing prevents it from crossing itself.

use {
  super::Curve,
  std::{fmt, f64::consts::{PI, TAU}},
  rand::prelude::*,
  rand_pcg::Pcg64,
  log::warn
};

pub type Basis = fn(f64) -> f64;

fn cos_1(t: f64) -> f64 { (t * TAU).cos() }
fn sin_1(t: f64) -> f64 { (t * TAU).sin() }
fn parabola(t: f64) -> f64 { 4.0 * (0.5 - t).powi(2) }
fn cubic(t: f64) -> f64 { 25.0 / 3.0 * (0.5 - t).abs().powi(3) }
fn bump(t: f64) -> f64 { (-25.0 * (t - 0.5).powi(2)).exp() }
fn cos_5(t: f64) -> f64 { (t * 10.0 * PI).cos() / 10.0 }
fn sin_6(t: f64) -> f64 { (t * 12.0 * PI).sin() / 15.0 }

/// Basis functions, in the order their weights are drawn.
pub const BASIS: [Basis; 7] = [cos_1, sin_1, parabola, cubic, bump, cos_5, sin_6];

/// How many of the [`BASIS`] functions a potato uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Complexity {
  #[default]
  Full,
  /// First `n` basis functions. `0` means [`Complexity::Full`], anything above `BASIS.len()` is
  /// clamped.
  First(usize)
}

impl Complexity {
  pub fn basis_len(self) -> usize {
    match self {
      Complexity::Full | Complexity::First(0) => BASIS.len(),
      Complexity::First(n) => n.min(BASIS.len())
    }
  }
}

/// Signed convention: `n <= 0` uses every basis function.
impl From<i32> for Complexity {
  fn from(n: i32) -> Self {
    if n > 0 { Complexity::First(n as usize) } else { Complexity::Full }
  }
}

impl From<Option<usize>> for Complexity {
  fn from(n: Option<usize>) -> Self {
    n.map_or(Complexity::Full, Complexity::First)
  }
}

impl fmt::Display for Complexity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Complexity::Full => write!(f, "-1"),
      Complexity::First(n) => write!(f, "{}", n)
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Patate {
  seed: u64,
  complexity: Complexity,
  weights_x: Vec<f64>,
  weights_y: Vec<f64>
}

impl Patate {
  /// Same `(seed, complexity)` always gives the same shape: the generator is seeded once, then
  /// `n` weights are drawn for x followed by `n` weights for y.
  pub fn new(seed: u64, complexity: Complexity) -> Self {
    if let Complexity::First(n) = complexity {
      if n > BASIS.len() {
        warn!("patate({}): complexity {} clamped to {}", seed, n, BASIS.len());
      }
    }
    let n = complexity.basis_len();
    let mut rng = Pcg64::seed_from_u64(seed);
    let weights_x = (0..n).map(|_| rng.gen::<f64>()).collect();
    let weights_y = (0..n).map(|_| rng.gen::<f64>()).collect();
    Self { seed, complexity, weights_x, weights_y }
  }

  pub fn seed(&self) -> u64 { self.seed }
  pub fn complexity(&self) -> Complexity { self.complexity }
  pub fn basis_len(&self) -> usize { self.weights_x.len() }
  pub fn weights_x(&self) -> &[f64] { &self.weights_x }
  pub fn weights_y(&self) -> &[f64] { &self.weights_y }
}

fn weighted_sum(weights: &[f64], t: f64) -> f64 {
  weights.iter()
    .zip(BASIS.iter())
    .map(|(w, f)| w * f(t))
    .sum()
}

impl Curve for Patate {
  fn curve_x(&self, t: f64) -> f64 {
    weighted_sum(&self.weights_x, t)
  }
  fn curve_y(&self, t: f64) -> f64 {
    weighted_sum(&self.weights_y, t)
  }
  fn name(&self) -> String {
    format!("patate({}, complexity={})", self.seed, self.complexity)
  }
}
