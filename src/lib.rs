//! Closed parametric curves in ℝ², for measuring the largest dimension of a hole.
//!
//! A [`Shape`](`geometry::Shape`) is a pair of functions `x(t)`, `y(t)`, periodic with period 1.
//! Base shapes come from the factories in [`geometry`] (circle, ellipse, rectangle, and the random
//! "patate"), and are combined by wrapping:
//! - `.transform(matrix)` applies a 2x2 linear map to every point;
//! - `.offset(dx, dy)` shifts the parameter of each axis independently.
//!
//! Shapes are immutable values. The same seed always gives the same patate.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   hole_shapes::{
//! #     error::Result,
//! #     geometry::{self, Shape, Linear2}
//! #   },
//! #   euclid::Angle
//! # };
//! # fn main() -> Result<()> {
//! let shape = geometry::rectangle(5.0, 7.0)
//!   .transform(Linear2::rotation(Angle::degrees(45.0)));
//! assert_eq!(shape.x(0.0), 0.0);
//!
//! shape.plot()
//!   .segments([(0.0, 0.5), (0.25, 0.73)]) // overlay chords between curve points
//!   .save("out.png")?;
//! #   Ok(())
//! # }
//! ```
//! Patates may cross themselves; nothing here checks for that.
//! ```
//! # use hole_shapes::geometry::{self, Curve, Shape};
//! let a = geometry::patate(7, 4);
//! let b = geometry::patate(7, 4);
//! assert_eq!(a.point(0.37), b.point(0.37));
//! assert_eq!(a.name(), "patate(7, complexity=4)");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod sdf;
pub mod geometry;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
