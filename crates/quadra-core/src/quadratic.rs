use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QuadraError, QuadraResult};

/// Coefficients of `ax² + bx + c = 0`, validated so that the equation
/// is actually quadratic (`a ≠ 0`) and every value is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> QuadraResult<Self> {
        for (name, value) in [("a", a), ("b", b), ("c", c)] {
            if !value.is_finite() {
                return Err(QuadraError::NonFinite { name, value });
            }
        }
        if a == 0.0 {
            return Err(QuadraError::Degenerate);
        }
        Ok(Self { a, b, c })
    }

    /// `b² − 4ac`.
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Classify the roots by the sign of the discriminant.
    pub fn roots(&self) -> Roots {
        let d = self.discriminant();
        let denom = 2.0 * self.a;

        if d > 0.0 {
            Roots::RealDistinct {
                r1: (-self.b + d.sqrt()) / denom,
                r2: (-self.b - d.sqrt()) / denom,
            }
        } else if d == 0.0 {
            Roots::RealEqual {
                root: -self.b / denom,
            }
        } else {
            Roots::Complex {
                real: -self.b / denom,
                imag: (-d).sqrt() / denom,
            }
        }
    }
}

/// Classified roots of a quadratic equation.
///
/// `Complex` holds one member of the conjugate pair; the other is
/// `real − imag·i`. Values are unrounded; the 2-decimal rounding of
/// the complex parts happens only in `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roots {
    RealDistinct { r1: f64, r2: f64 },
    RealEqual { root: f64 },
    Complex { real: f64, imag: f64 },
}

impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RealDistinct { r1, r2 } => {
                write!(f, "The roots of quadratic equation are {r1} and {r2}")
            }
            Self::RealEqual { root } => {
                write!(f, "The roots of quadratic equation are {root} and {root}")
            }
            Self::Complex { real, imag } => write!(
                f,
                "The roots of quadratic equation are {real:.2} + {imag:.2}i and {real:.2} - {imag:.2}i"
            ),
        }
    }
}

/// Validate coefficients and classify in one call.
pub fn solve(a: f64, b: f64, c: f64) -> QuadraResult<Roots> {
    Ok(Coefficients::new(a, b, c)?.roots())
}
