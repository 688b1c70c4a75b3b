/// Upper bound on accepted amounts. Blocks pathological input from
/// reaching the formatting code, not a business rule.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Why an amount string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// Not a number, or not a positive finite one
    Invalid,
    /// Numeric but above `MAX_AMOUNT`; callers may warn instead of
    /// staying silent
    TooLarge,
}

/// Parse a free-text quantity into a positive finite number.
///
/// Accepts Persian digits, thousands-separator commas and interior
/// spaces: `"۱۰۰,۰۰۰"` parses to `100000.0`.
pub fn parse_amount(raw: &str) -> Result<f64, AmountError> {
    let normalized: String = raw
        .trim()
        .chars()
        .filter_map(|c| match c {
            ',' | ' ' => None,
            _ => Some(persian_digit_to_ascii(c)),
        })
        .collect();

    let amount = normalized.parse::<f64>().map_err(|_| AmountError::Invalid)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AmountError::Invalid);
    }
    if amount > MAX_AMOUNT {
        return Err(AmountError::TooLarge);
    }
    Ok(amount)
}

fn persian_digit_to_ascii(c: char) -> char {
    match c {
        '۰' => '0',
        '۱' => '1',
        '۲' => '2',
        '۳' => '3',
        '۴' => '4',
        '۵' => '5',
        '۶' => '6',
        '۷' => '7',
        '۸' => '8',
        '۹' => '9',
        _ => c,
    }
}

/// Format a number with thousands-separator commas, trimming trailing
/// zeros from the fractional part
pub fn format_number(number: f64) -> String {
    let mut text = format!("{:.6}", number);
    if text.contains('.') {
        text = text.trim_end_matches('0').trim_end_matches('.').to_string();
    }

    let (int_part, dec_part) = match text.split_once('.') {
        Some((i, d)) => (i.to_string(), Some(d.to_string())),
        None => (text, None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match dec_part {
        Some(dec) => format!("{}{}.{}", sign, grouped, dec),
        None => format!("{}{}", sign, grouped),
    }
}

/// Whole results render as integers, everything else with 2 decimals
pub fn round_amount(amount: f64) -> f64 {
    if amount == amount.trunc() {
        amount
    } else {
        (amount * 100.0).round() / 100.0
    }
}

/// Displayed rates keep 2 decimals above 0.01 and 6 below, so sub-cent
/// rates stay legible
pub fn round_rate(rate: f64) -> f64 {
    if rate >= 0.01 {
        (rate * 100.0).round() / 100.0
    } else {
        (rate * 1_000_000.0).round() / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_persian_digits_with_separator() {
        assert_eq!(parse_amount("۱۰۰,۰۰۰"), Ok(100_000.0));
    }

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(parse_amount("12.5"), Ok(12.5));
    }

    #[test]
    fn test_parse_interior_spaces() {
        assert_eq!(parse_amount("1 000 000"), Ok(1_000_000.0));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(parse_amount("-5"), Err(AmountError::Invalid));
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(parse_amount("0"), Err(AmountError::Invalid));
    }

    #[test]
    fn test_over_ceiling_rejected() {
        assert_eq!(parse_amount("2000000000"), Err(AmountError::TooLarge));
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(parse_amount("abc"), Err(AmountError::Invalid));
        assert_eq!(parse_amount("1.2.3"), Err(AmountError::Invalid));
        assert_eq!(parse_amount(""), Err(AmountError::Invalid));
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(58_000.0), "58,000");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(950.0), "950");
    }

    #[test]
    fn test_format_number_trims_trailing_zeros() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.003), "0.003");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1_500.0), "-1,500");
    }

    #[test]
    fn test_round_amount() {
        assert_eq!(round_amount(58_000.0), 58_000.0);
        assert_eq!(round_amount(12.3456), 12.35);
    }

    #[test]
    fn test_round_rate_magnitude_threshold() {
        assert_eq!(round_rate(1.23456), 1.23);
        assert_eq!(round_rate(0.0000123456), 0.000012);
    }
}
