// src/core/utils/mod.rs

pub mod sysfs;

// Percentage of `part` out of `whole`, scaled before rounding.
pub fn scaled_percent(part: f64, whole: f64) -> i64 {
    if whole == 0.0 {
        return 0;
    }
    (part / whole * 100.0).round() as i64
}
