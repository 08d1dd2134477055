//! Serde helpers for numbers the Icinga API encodes as floats.
//!
//! Icinga 2 reports states and counters as JSON numbers that are often
//! written with a fractional part (`2.0`). Both spellings are accepted as long
//! as the value is integral.

use serde::{Deserialize, Deserializer, de::Error};

fn integral<'de, D>(deserializer: D, min: f64, max: f64) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < min || value > max {
        return Err(D::Error::custom(format!(
            "expected an integral number in [{}, {}], got {}",
            min, max, value
        )));
    }
    Ok(value)
}

/// Deserialization of state and state-type ordinals.
pub mod ordinal {
    use super::*;

    /// Deserialize an integral JSON number into an `i32`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        integral(deserializer, f64::from(i32::MIN), f64::from(i32::MAX)).map(|v| v as i32)
    }
}

/// Deserialization of non-negative object counters.
pub mod counter {
    use super::*;

    /// Deserialize an integral, non-negative JSON number into a `u64`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        // 2^53 is the largest range where every integer survives as f64.
        integral(deserializer, 0.0, 9_007_199_254_740_992.0).map(|v| v as u64)
    }
}
