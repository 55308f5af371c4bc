use {
  super::*,
  crate::error::Error,
  anyhow::Result,
  euclid::Angle,
  rand::prelude::*,
  std::f64::consts::TAU
};

const EPS: f64 = 1e-9;
const TS: [f64; 8] = [0.0, 0.1, 0.25, 0.37, 0.5, 0.62, 0.75, 0.99];

fn close(a: f64, b: f64) -> bool {
  (a - b).abs() < EPS
}

fn assert_same_curve(a: &impl Shape, b: &impl Shape) {
  for t in TS {
    assert!(close(a.x(t), b.x(t)), "x({}): {} != {}", t, a.x(t), b.x(t));
    assert!(close(a.y(t), b.y(t)), "y({}): {} != {}", t, a.y(t), b.y(t));
  }
}

fn zoo() -> Vec<DynShape> {
  vec![
    circle(5.0).into_dyn(),
    ellipse(10.0, 7.0).into_dyn(),
    rectangle(6.0, 8.0).into_dyn(),
    patate(7, 4).into_dyn(),
    patate(42, Complexity::Full).into_dyn(),
    rectangle(5.0, 7.0)
      .transform(Linear2::rotation(Angle::degrees(45.0)))
      .offset(0.1, 0.3)
      .into_dyn(),
  ]
}

#[test] fn normalize_range() {
  assert_eq!(normalize(0.0), 0.0);
  assert_eq!(normalize(0.75), 0.75);
  assert_eq!(normalize(1.0), 0.0);
  assert_eq!(normalize(2.5), 0.5);
  assert_eq!(normalize(-0.25), 0.75);
  assert_eq!(normalize(-3.5), 0.5);
  // rounds to 1.0 without the fold-back
  let tiny = normalize(-1e-20);
  assert!((0.0..1.0).contains(&tiny), "{}", tiny);
}

#[test] fn periodicity() {
  for shape in zoo() {
    for t in [-2.3, -0.25, 0.0, 0.1, 0.37, 0.5, 0.99, 1.7] {
      assert!(close(shape.x(t), shape.x(t + 1.0)), "{} x({})", shape.name(), t);
      assert!(close(shape.y(t), shape.y(t + 1.0)), "{} y({})", shape.name(), t);
    }
  }
}

#[test] fn negative_parameter() {
  for shape in zoo() {
    assert_eq!(shape.x(-0.25), shape.x(0.75), "{}", shape.name());
    assert_eq!(shape.y(-0.25), shape.y(0.75), "{}", shape.name());
  }
}

#[test] fn circle_points() {
  let c = circle(5.0);
  assert_eq!(c.x(0.0), 5.0);
  assert_eq!(c.y(0.0), 0.0);
  assert!(close(c.x(0.25), 0.0));
  assert!(close(c.y(0.25), 5.0));
  assert!(close(c.x(0.5), -5.0));
  for t in TS {
    assert!(close(c.point(t).to_vector().length(), 5.0));
  }
}

#[test] fn negative_radius_mirrors() {
  let (a, b) = (circle(2.0), circle(-2.0));
  for t in TS {
    assert!(close(a.x(t), -b.x(t)));
    assert!(close(a.y(t), -b.y(t)));
  }
}

#[test] fn ellipse_axes() {
  let e = ellipse(10.0, 7.0);
  assert_eq!(e.x(0.0), 10.0);
  assert!(close(e.y(0.25), 7.0));
  assert!(close(e.x(0.5), -10.0));
  assert!(close(e.y(0.75), -7.0));
  assert_same_curve(&ellipse(3.0, 3.0), &circle(3.0));
}

#[test] fn rectangle_corners() {
  let r = rectangle(6.0, 8.0);
  assert_eq!((r.x(0.0), r.y(0.0)), (0.0, 0.0));
  assert_eq!((r.x(0.25), r.y(0.25)), (6.0, 0.0));
  assert_eq!((r.x(0.5), r.y(0.5)), (6.0, 8.0));
  assert_eq!((r.x(0.75), r.y(0.75)), (0.0, 8.0));
  // edge midpoints
  assert_eq!((r.x(0.125), r.y(0.125)), (3.0, 0.0));
  assert_eq!((r.x(0.375), r.y(0.375)), (6.0, 4.0));
  assert_eq!((r.x(0.625), r.y(0.625)), (3.0, 8.0));
  assert_eq!((r.x(0.875), r.y(0.875)), (0.0, 4.0));
}

#[test] fn rectangle_breakpoints_start_next_edge() {
  let r = rectangle(6.0, 8.0);
  // the left side of each breakpoint is still interpolating
  assert!(r.x(0.25 - 1e-12) < 6.0);
  assert_eq!(r.x(0.25), 6.0);
  assert!(r.y(0.5 - 1e-12) < 8.0);
  assert_eq!(r.y(0.5), 8.0);
  assert!(r.x(0.75 - 1e-12) > 0.0);
  assert_eq!(r.x(0.75), 0.0);
}

#[test] fn transform_linearity() {
  let s = patate(3, Complexity::Full);
  let m = Linear2::new([[1.5, -0.5], [0.25, 2.0]]);
  let shape = (&s).transform(m);
  for t in TS {
    assert_eq!(shape.x(t), 1.5 * s.x(t) + -0.5 * s.y(t));
    assert_eq!(shape.y(t), 0.25 * s.x(t) + 2.0 * s.y(t));
  }
}

#[test] fn transform_composition() {
  let s = patate(11, 5);
  let a = Linear2::new([[1.0, 2.0], [-1.0, 0.5]]);
  let b = Linear2::rotation(Angle::degrees(30.0));

  let nested = (&s).transform(a).transform(b);
  assert_same_curve(&nested, &(&s).transform(b * a));
  assert_same_curve(&nested, &(&s).transform(a.then(&b)));
  assert_same_curve(&nested, &nested.flatten());
}

#[test] fn rotation_quarter_turn() {
  let rotated = circle(1.0).transform(Linear2::rotation(Angle::degrees(90.0)));
  assert!(close(rotated.x(0.0), 0.0));
  assert!(close(rotated.y(0.0), 1.0));
  assert_same_curve(&rotated, &circle(1.0).offset(0.25, 0.25));
}

#[test] fn linear_constructors() {
  assert_eq!(Linear2::default().rows(), [[1.0, 0.0], [0.0, 1.0]]);
  assert_eq!(Linear2::scale(2.0, 3.0).rows(), [[2.0, 0.0], [0.0, 3.0]]);
  assert_eq!(Linear2::shear(0.5, 0.0).rows(), [[1.0, 0.5], [0.0, 1.0]]);
  assert_eq!(Linear2::reflection_x().apply(P2::new(1.0, 2.0)), P2::new(1.0, -2.0));
  assert_eq!(Linear2::reflection_y().apply(P2::new(1.0, 2.0)), P2::new(-1.0, 2.0));
  assert!(close(Linear2::rotation(Angle::radians(1.234)).determinant(), 1.0));
  assert!(close(Linear2::new([[1.0, 2.0], [3.0, 4.0]]).determinant(), -2.0));

  // b * a applies a first
  let (a, b) = (Linear2::scale(2.0, 1.0), Linear2::shear(1.0, 0.0));
  assert_eq!((b * a).apply(P2::new(1.0, 1.0)), b.apply(a.apply(P2::new(1.0, 1.0))));
  assert_eq!((b * a).rows(), [[2.0, 1.0], [0.0, 1.0]]);
}

#[test] fn malformed_matrix() -> Result<()> {
  let err = |rows: Vec<Vec<f64>>| match Linear2::try_from(rows) {
    Err(Error::MalformedMatrix { rows, cols }) => (rows, cols),
    other => panic!("expected malformed matrix, got {:?}", other)
  };
  assert_eq!(err(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0]]), (2, 3));
  assert_eq!(err(vec![vec![1.0, 0.0], vec![0.0]]), (2, 1));
  assert_eq!(err(vec![vec![1.0, 0.0]; 3]), (3, 2));
  assert_eq!(err(vec![]), (0, 0));

  let ok = transform_rows(circle(1.0), &[[0.0, -1.0], [1.0, 0.0]])?;
  assert!(close(ok.y(0.0), 1.0));
  assert!(transform_rows(circle(1.0), &[vec![0.0, -1.0]]).is_err());
  Ok(())
}

#[test] fn offset_phase_shift() {
  let s = patate(5, 6);
  let (dx, dy) = (0.3, -0.45);
  let shifted = offset(&s, dx, dy);
  for t in TS {
    assert_eq!(shifted.x(t), s.x(t + dx));
    assert_eq!(shifted.y(t), s.y(t + dy));
  }
  // whole turns are a no-op
  assert_same_curve(&offset(&s, 2.0, -1.0), &s);
}

#[test] fn offset_distorts() {
  // x lags a quarter turn behind y: the curve collapses onto a diagonal segment
  let squashed = circle(1.0).offset(0.25, 0.0);
  assert!(close(squashed.x(0.0), 0.0));
  assert!(close(squashed.y(0.0), 0.0));
  for t in TS {
    assert!(close(squashed.x(t), -squashed.y(t)));
  }
}

#[test] fn patate_deterministic() {
  let (a, b) = (patate(7, 4), patate(7, 4));
  assert_eq!(a, b);
  for t in [0.0, 0.1, 0.37, 0.99] {
    assert_eq!(a.x(t), b.x(t));
    assert_eq!(a.y(t), b.y(t));
  }
  assert_ne!(patate(7, 4).weights_x(), patate(8, 4).weights_x());
}

#[test] fn patate_truncation() {
  let seed = 1234;
  let shape = patate(seed, 2);
  let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
  let (wx0, wx1, wy0, wy1): (f64, f64, f64, f64) = (rng.gen(), rng.gen(), rng.gen(), rng.gen());
  assert_eq!(shape.weights_x(), &[wx0, wx1]);
  assert_eq!(shape.weights_y(), &[wy0, wy1]);
  for t in TS {
    let (c, s) = ((t * TAU).cos(), (t * TAU).sin());
    assert!(close(shape.x(t), wx0 * c + wx1 * s));
    assert!(close(shape.y(t), wy0 * c + wy1 * s));
  }
}

#[test] fn patate_basis() {
  let t = 0.3;
  let expected = [
    (t * TAU).cos(),
    (t * TAU).sin(),
    4.0 * (0.5 - t) * (0.5 - t),
    25.0 / 3.0 * (0.5 - t).abs().powi(3),
    (-25.0 * (t - 0.5) * (t - 0.5)).exp(),
    (10.0 * std::f64::consts::PI * t).cos() / 10.0,
    (12.0 * std::f64::consts::PI * t).sin() / 15.0,
  ];
  for (f, e) in patate::BASIS.iter().zip(expected) {
    assert!(close(f(t), e));
  }
}

#[test] fn patate_weights() {
  let p = patate(99, Complexity::Full);
  assert_eq!(p.basis_len(), patate::BASIS.len());
  assert_eq!(p.weights_y().len(), patate::BASIS.len());
  assert!(p.weights_x().iter().chain(p.weights_y()).all(|w| (0.0..1.0).contains(w)));
}

#[test] fn complexity_convention() {
  assert_eq!(Complexity::from(-1), Complexity::Full);
  assert_eq!(Complexity::from(0), Complexity::Full);
  assert_eq!(Complexity::from(3), Complexity::First(3));
  assert_eq!(Complexity::from(None), Complexity::Full);
  assert_eq!(Complexity::First(0).basis_len(), 7);
  assert_eq!(Complexity::First(12).basis_len(), 7);

  // clamped complexity draws exactly the full set of weights
  let clamped = patate(1, 12);
  let full = patate(1, -1);
  assert_eq!(clamped.weights_x(), full.weights_x());
  assert_eq!(clamped.weights_y(), full.weights_y());
}

#[test] fn names() {
  assert_eq!(circle(5.0).name(), "circle(5)");
  assert_eq!(ellipse(10.0, 7.5).name(), "ellipse(10, 7.5)");
  assert_eq!(rectangle(6.0, 8.0).name(), "rectangle(6, 8)");
  assert_eq!(patate(7, 4).name(), "patate(7, complexity=4)");
  assert_eq!(patate(7, -1).name(), "patate(7, complexity=-1)");
  assert_eq!(
    circle(1.0).transform(Linear2::new([[0.0, -1.0], [1.0, 0.0]])).name(),
    "transform(circle(1), [[0, -1], [1, 0]])"
  );
  assert_eq!(circle(1.0).offset(0.25, 0.0).name(), "offset(circle(1), 0.25, 0)");
}

#[test] fn fn_shape() {
  let lemniscate = FnShape::new(
    |t| (t * TAU).cos(),
    |t| (2.0 * t * TAU).sin() / 2.0,
    "lemniscate"
  );
  assert_eq!(lemniscate.name(), "lemniscate");
  assert_eq!(lemniscate.x(1.25), lemniscate.x(0.25));

  let copy = lemniscate.clone().transform(Linear2::scale(2.0, 2.0));
  assert!(close(copy.x(0.0), 2.0));
  assert!(format!("{:?}", lemniscate).contains("lemniscate"));
}

#[test] fn domain_fault_is_not_a_panic() {
  let pole = FnShape::new(|t| 1.0 / (t - 0.5), |_| 0.0, "pole");
  assert!(pole.x(0.5).is_infinite());
  // 0 · inf
  assert!(pole.transform(Linear2::identity()).y(1.5).is_nan());
}

#[test] fn combinators_keep_input() {
  let base = rectangle(2.0, 3.0);
  let before: Vec<_> = TS.iter().map(|&t| base.point(t)).collect();
  let _derived = (&base).transform(Linear2::scale(5.0, 5.0)).offset(0.5, 0.1);
  let after: Vec<_> = TS.iter().map(|&t| base.point(t)).collect();
  assert_eq!(before, after);
}
