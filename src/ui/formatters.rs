//! Shared formatting utilities for UI components.

/// Format a number with thousand separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format an axis tick label.
///
/// Whole numbers get thousand separators, everything else smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if val.fract() == 0.0 && abs_val < 1e15 {
        let digits = format_number(abs_val as u64);
        if val < 0.0 {
            format!("-{}", digits)
        } else {
            digits
        }
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}
