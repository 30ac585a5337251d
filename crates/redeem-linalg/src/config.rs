use serde::{Deserialize, Serialize};
use std::fmt::{Display, LowerExp};
use std::str::FromStr;

/// Shared settings for comparisons and rendering.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LinalgConfig {
    /// Absolute tolerance used by `approx_eq_with`.
    pub tolerance: f64,

    #[serde(flatten)]
    pub notation: Notation,
}

/// Number format used when rendering vectors and matrices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(tag = "notation", rename_all = "snake_case")]
pub enum Notation {
    /// The element type's own `Display` output.
    #[default]
    Plain,
    /// Fixed number of decimal places. Ignored by integer element types.
    Fixed { precision: usize },
    /// Exponent form, optionally with a fixed mantissa precision.
    Scientific { precision: Option<usize> },
}

impl Notation {
    const DEFAULT_PRECISION: usize = 4;

    pub fn format<T>(&self, value: &T) -> String
    where
        T: Display + LowerExp,
    {
        match self {
            Notation::Plain => format!("{}", value),
            Notation::Fixed { precision } => format!("{:.*}", precision, value),
            Notation::Scientific { precision: None } => format!("{:e}", value),
            Notation::Scientific {
                precision: Some(precision),
            } => format!("{:.*e}", precision, value),
        }
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Notation::Plain),
            "fixed" => Ok(Notation::Fixed {
                precision: Notation::DEFAULT_PRECISION,
            }),
            "scientific" => Ok(Notation::Scientific { precision: None }),
            _ => Err(format!(
                "Unknown notation: {}. Expected one of `plain`, `fixed` or `scientific`",
                s
            )),
        }
    }
}

impl LinalgConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    pub fn new(tolerance: f64, notation: Notation) -> Self {
        Self {
            tolerance,
            notation,
        }
    }
}

impl Default for LinalgConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            notation: Notation::Plain,
        }
    }
}

/// Absolute-difference comparison shared by `Vector` and `Matrix`.
pub(crate) fn within_tolerance<T: num_traits::ToPrimitive>(a: &T, b: &T, tolerance: f64) -> bool {
    match (a.to_f64(), b.to_f64()) {
        (Some(a), Some(b)) => (a - b).abs() <= tolerance,
        _ => false,
    }
}
