//! Model error type and parameter checks.
//!
//! Every error here is a caller error: a parameter that is out of range or a
//! sample that cannot be drawn.  Nothing is retryable, and no generator ever
//! returns a partial result alongside an error.

use thiserror::Error;

/// The error type shared by the network and trajectory generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnError {
    #[error("{param}: min {min} is greater than max {max}")]
    InvertedRange {
        param: &'static str,
        min:   i64,
        max:   i64,
    },

    #[error("{param}: probability {value} is outside [0, 1]")]
    Probability { param: &'static str, value: f64 },

    #[error("{param}: value {value} is outside [{min}, {max}]")]
    OutOfRange {
        param: &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },

    #[error("cannot sample {requested} items without replacement from {available}")]
    SampleTooLarge { requested: u64, available: u64 },
}

/// Shorthand result type for all `sn-*` model crates.
pub type SnResult<T> = Result<T, SnError>;

/// Fail with [`SnError::InvertedRange`] unless `min <= max`.
pub fn check_range<T: Into<i64> + Copy>(param: &'static str, min: T, max: T) -> SnResult<()> {
    let (min, max) = (min.into(), max.into());
    if min > max {
        return Err(SnError::InvertedRange { param, min, max });
    }
    Ok(())
}

/// Fail with [`SnError::Probability`] unless `value` is a finite number in
/// `[0, 1]`.
pub fn check_probability(param: &'static str, value: f64) -> SnResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SnError::Probability { param, value });
    }
    Ok(())
}

/// Fail with [`SnError::OutOfRange`] unless `min <= value <= max`.
///
/// NaN is always rejected.
pub fn check_within(param: &'static str, value: f64, min: f64, max: f64) -> SnResult<()> {
    if !(min..=max).contains(&value) {
        return Err(SnError::OutOfRange { param, value, min, max });
    }
    Ok(())
}
