pub fn linear(delta: f32) -> f32 {
    delta
}

pub fn ease_in_out(delta: f32) -> f32 {
    if delta < 0.5 {
        2.0 * delta * delta
    } else {
        -2.0 * delta * delta + 4.0 * delta - 1.0
    }
}

pub fn ease_out_quint(delta: f32) -> f32 {
    1.0 - (1.0 - delta).powi(5)
}

/// A CSS style `cubic-bezier(x1, y1, x2, y2)` timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl From<[f32; 4]> for CubicBezier {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl CubicBezier {
    pub const EASE: CubicBezier = CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    /// The x control points are clamped into `0..=1` so the curve stays a
    /// function of time.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0., 1.),
            y1,
            x2: x2.clamp(0., 1.),
            y2,
        }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        let inv = 1. - t;
        3. * inv * inv * t * a1 + 3. * inv * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f32, a2: f32, t: f32) -> f32 {
        let inv = 1. - t;
        3. * inv * inv * a1 + 6. * inv * t * (a2 - a1) + 3. * t * t * (1. - a2)
    }

    fn solve_t_for_x(&self, x: f32) -> f32 {
        let mut t = x;

        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < 1e-6 {
                return t;
            }

            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }

            t -= error / slope;
        }

        // Newton didn't converge; fall back to bisection.
        let (mut lo, mut hi) = (0f32, 1f32);
        t = x;

        while hi - lo > 1e-6 {
            let sampled = Self::sample(self.x1, self.x2, t);
            if (sampled - x).abs() < 1e-6 {
                break;
            }

            if sampled < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.;
        }

        t
    }

    /// Progress along the curve at time `delta` (`0..=1`).
    pub fn evaluate(&self, delta: f32) -> f32 {
        let delta = delta.clamp(0., 1.);

        if delta == 0. || delta == 1. {
            return delta;
        }

        Self::sample(self.y1, self.y2, self.solve_t_for_x(delta))
    }

    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}
