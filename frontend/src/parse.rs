/// Parse a numeric form entry the way a browser number field feeds the page:
/// take the longest leading decimal prefix, and fall back to `0` when there
/// is none.
///
/// `"12.5"` → 12.5, `" 7tokens"` → 7, `"1e3"` → 1000, `"abc"` → 0, `""` → 0.
pub fn parse_amount(raw: &str) -> f64 {
    let value = leading_float(raw.trim()).unwrap_or(0.0);
    // Entries that are zero (including -0) or NaN collapse to 0.
    if value == 0.0 || value.is_nan() {
        0.0
    } else {
        value
    }
}

fn leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut probe = end + 1;
        while probe < bytes.len() && bytes[probe].is_ascii_digit() {
            probe += 1;
        }
        frac_digits = probe - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = probe;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    let mantissa_end = end;

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut probe = end + 1;
        if probe < bytes.len() && (bytes[probe] == b'+' || bytes[probe] == b'-') {
            probe += 1;
        }
        let exp_start = probe;
        while probe < bytes.len() && bytes[probe].is_ascii_digit() {
            probe += 1;
        }
        if probe > exp_start {
            end = probe;
        }
    }

    let mut literal = String::with_capacity(end + 2);
    if negative {
        literal.push('-');
    }
    if int_digits == 0 {
        literal.push('0');
    }
    literal.push_str(&s[int_start..mantissa_end]);
    if frac_digits == 0 && literal.ends_with('.') {
        literal.pop();
    }
    literal.push_str(&s[mantissa_end..end]);

    literal.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_amount("100"), 100.0);
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("-5"), -5.0);
        assert_eq!(parse_amount("+3"), 3.0);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_negative_zero_normalised() {
        let value = parse_amount("-0");
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_leading_prefix() {
        assert_eq!(parse_amount("  7tokens"), 7.0);
        assert_eq!(parse_amount("1.5.3"), 1.5);
        assert_eq!(parse_amount("42e"), 42.0);
        assert_eq!(parse_amount("42e+"), 42.0);
    }

    #[test]
    fn test_partial_decimals() {
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("-.25"), -0.25);
        assert_eq!(parse_amount("5."), 5.0);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("2.5E-1"), 0.25);
        assert_eq!(parse_amount("5.e2"), 500.0);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_amount("Infinity"), f64::INFINITY);
        assert_eq!(parse_amount("-Infinity"), f64::NEG_INFINITY);
    }
}
