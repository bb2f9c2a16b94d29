//! Number formatting for display

/// Format an amount with `,` thousands separators and two decimals
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Values that round to zero print unsigned
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    format!("{sign}{grouped}.{frac_part}")
}

/// Format a percentage with two decimals
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1331.0), "1,331.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(100_000.0), "100,000.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(33.1), "33.10%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
