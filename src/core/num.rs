// src/core/num.rs

/// Arithmetic mean; empty input averages to 0 by policy, never an error.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        0.0
    } else {
        xs.iter().sum::<f64>() / xs.len() as f64
    }
}

/// Round to 2 decimal places (averages, deltas).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to 6 decimal places (efficiency scores).
pub fn round6(x: f64) -> f64 {
    (x * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0]), 3.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(81.23456), 81.23);
        assert_eq!(round2(81.235), 81.24);
        assert_eq!(round6(0.0049999996), 0.005);
    }
}
