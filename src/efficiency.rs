// src/efficiency.rs
//
// Size-normalized efficiency. Parsing a size string can always fail;
// failure is a defined fallback (0), never an error.

use crate::core::num::round6;

/// Parse a human-readable magnitude string: "2k" → 2000, "1.5m" → 1.5e6,
/// "1b" → 1e9, "300" → 300. Unparsable or non-positive sizes are `None`.
pub fn parse_size(s: &str) -> Option<f64> {
    let t = s.trim().to_ascii_lowercase();
    let (digits, mult) = if let Some(p) = t.strip_suffix('k') {
        (p, 1e3)
    } else if let Some(p) = t.strip_suffix('m') {
        (p, 1e6)
    } else if let Some(p) = t.strip_suffix('b') {
        (p, 1e9)
    } else {
        (t.as_str(), 1.0)
    };
    let size = digits.trim().parse::<f64>().ok()? * mult;
    (size > 0.0).then_some(size)
}

/// Absolute score-per-example, rounded to 6 decimal places. Zero when the
/// score is non-positive or the size string does not parse.
pub fn efficiency(score: f64, size_str: &str) -> f64 {
    if score <= 0.0 {
        return 0.0;
    }
    match parse_size(size_str) {
        Some(size) => round6(score / size),
        None => 0.0,
    }
}

/// The emitted metric: this entry's efficiency minus what the base model's
/// score would earn per example at the *same* declared size. A normalized,
/// baseline-adjusted improvement, not a raw ratio.
pub fn efficiency_delta(score: f64, base_score: f64, size_str: &str) -> f64 {
    round6(efficiency(score, size_str) - efficiency(base_score, size_str))
}
