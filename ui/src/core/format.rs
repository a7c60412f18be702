//! Formatting helpers for presenting word weights.

/// Weight as shown in tooltips: integral values without a fractional part.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Tooltip text for one word, `"text: value"`.
pub fn word_tooltip(text: &str, value: f64) -> String {
    format!("{text}: {}", format_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_drop_fraction() {
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(2.5), "2.5");
    }

    #[test]
    fn tooltip_joins_text_and_value() {
        assert_eq!(word_tooltip("Rust", 42.0), "Rust: 42");
    }
}
