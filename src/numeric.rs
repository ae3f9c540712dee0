// src/numeric.rs
//! Range checks and clamping for any ordered type

use std::fmt::Display;

use crate::error::NumericError;

/// `from <= value <= to`
pub fn is_between<T: PartialOrd>(value: T, from: T, to: T) -> bool {
    value >= from && value <= to
}

/// Clamp `current` into `[min, max]`. Fails if `min > max`; `min == max` is fine.
pub fn clamp<T: PartialOrd + Display>(current: T, min: T, max: T) -> Result<T, NumericError> {
    if min > max {
        return Err(NumericError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }

    Ok(if current < min {
        min
    } else if current > max {
        max
    } else {
        current
    })
}
