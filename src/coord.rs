//! Heterogeneous coordinate input and the normalizer that canonicalizes it.
//!
//! Grid coordinates arrive as integers, floats, or text (query parameters
//! are always text), and the text comes with Swiss formatting habits:
//! apostrophe thousands-separators and decimal commas. All of it resolves
//! here, once, into a plain `i32`. No bounds check happens at this stage;
//! whether a coordinate lands on the panel is the rasterizer's concern.
//!
//! ## Rust concepts
//! - Enums with data (tagged unions) instead of runtime `type()` dispatch
//! - `From` conversions so call sites stay literal-friendly
//! - `#[serde(untagged)]` to absorb raw JSON scalars

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw coordinate as supplied by a caller, before normalization.
///
/// Deserializes untagged, so JSON `3`, `3.5` and `"3,5"` map to the
/// variants in declaration order (integer first, then float, then text).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    /// Already an integer; normalization is the identity.
    Int(i32),
    /// Fractional input; rounded half-to-even.
    Float(f64),
    /// Text input; cleaned up and parsed before rounding.
    Text(String),
}

/// A coordinate that could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    /// The input survives no amount of separator cleanup. Carries the
    /// original input, not the cleaned-up form.
    #[error("unparseable coordinate {0:?}")]
    Unparseable(String),
}

impl Coordinate {
    /// Resolve this input to an integer grid coordinate.
    ///
    /// Text is cleaned first: all whitespace stripped, `'`
    /// thousands-separators dropped, decimal commas turned into periods.
    /// Rounding is half-to-even throughout, so `"3,5"` becomes 4 and `2.5`
    /// becomes 2. Values outside [0,7] are returned as-is; bounds are the
    /// caller's responsibility.
    pub fn normalize(&self) -> Result<i32, CoordError> {
        match self {
            Coordinate::Int(v) => Ok(*v),
            Coordinate::Float(v) => {
                round_half_even(*v).ok_or_else(|| CoordError::Unparseable(v.to_string()))
            }
            Coordinate::Text(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| !c.is_whitespace() && *c != '\'')
                    .map(|c| if c == ',' { '.' } else { c })
                    .collect();
                let value: f64 = cleaned
                    .parse()
                    .map_err(|_| CoordError::Unparseable(s.clone()))?;
                round_half_even(value).ok_or_else(|| CoordError::Unparseable(s.clone()))
            }
        }
    }
}

/// Round half-to-even into `i32`. Non-finite values (NaN, infinities parse
/// as valid floats) get `None` rather than a bogus grid coordinate.
fn round_half_even(value: f64) -> Option<i32> {
    value.is_finite().then(|| value.round_ties_even() as i32)
}

impl From<i32> for Coordinate {
    fn from(v: i32) -> Self {
        Coordinate::Int(v)
    }
}

impl From<u8> for Coordinate {
    fn from(v: u8) -> Self {
        Coordinate::Int(v as i32)
    }
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Coordinate::Float(v)
    }
}

impl From<f32> for Coordinate {
    fn from(v: f32) -> Self {
        Coordinate::Float(v as f64)
    }
}

impl From<&str> for Coordinate {
    fn from(v: &str) -> Self {
        Coordinate::Text(v.to_string())
    }
}

impl From<String> for Coordinate {
    fn from(v: String) -> Self {
        Coordinate::Text(v)
    }
}

// ── Tests ──────────────────────────────────────────────────────────
