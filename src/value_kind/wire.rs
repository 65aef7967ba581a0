//! Lenient parsing of textual result cells.
//!
//! Backends hand over result cells as text. Numbers are read the way the C
//! library reads them: leading whitespace is skipped, the longest numeric prefix
//! is used, and a cell without any number yields zero.

/// Parse an integral cell. Out-of-range values saturate.
pub fn parse_integral(data: &[u8]) -> i64 {
    let text = trim_ascii(data);
    let (negative, digits) = match text.first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digit_count = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if digit_count == 0 {
        log::warn!(
            "Malformed integral cell {:?}, using 0",
            String::from_utf8_lossy(data)
        );
        return 0;
    }

    let mut value: i64 = 0;
    for &b in &digits[..digit_count] {
        let digit = i64::from(b - b'0');
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
        match next {
            Some(v) => value = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    value
}

/// Parse a floating point cell.
pub fn parse_floating_point(data: &[u8]) -> f64 {
    let text = trim_ascii(data);
    let whole = std::str::from_utf8(text).ok();
    if let Some(value) = whole.and_then(|s| s.parse::<f64>().ok()) {
        return value;
    }

    let prefix = &text[..floating_point_prefix_len(text)];
    if let Some(value) = std::str::from_utf8(prefix)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
    {
        return value;
    }

    log::warn!(
        "Malformed floating point cell {:?}, using 0",
        String::from_utf8_lossy(data)
    );
    0.0
}

/// Length of the leading `[sign]digits[.digits][e[sign]digits]` run, or 0 when
/// it holds no mantissa digit.
fn floating_point_prefix_len(text: &[u8]) -> usize {
    let digits_from = |start: usize| {
        text[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(text.first(), Some(b'+' | b'-')));
    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if text.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        end += 1 + fraction_digits;
    }
    if integer_digits + fraction_digits == 0 {
        return 0;
    }

    if matches!(text.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(text.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }
    end
}

/// Parse a boolean cell.
pub fn parse_boolean(data: &[u8]) -> bool {
    matches!(
        trim_ascii(data).first(),
        Some(b't' | b'T' | b'1' | b'y' | b'Y')
    )
}

/// Decode a text cell; invalid UTF-8 sequences are replaced.
pub fn parse_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

fn trim_ascii(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    let end = data
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &data[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integral() {
        assert_eq!(parse_integral(b"42"), 42);
        assert_eq!(parse_integral(b"-17"), -17);
        assert_eq!(parse_integral(b"+8"), 8);
        assert_eq!(parse_integral(b"  12  "), 12);
        assert_eq!(parse_integral(b"12abc"), 12);
        assert_eq!(parse_integral(b"abc"), 0);
        assert_eq!(parse_integral(b""), 0);
        assert_eq!(parse_integral(b"-"), 0);
    }

    #[test]
    fn test_parse_integral_saturates() {
        assert_eq!(parse_integral(b"9223372036854775807"), i64::MAX);
        assert_eq!(parse_integral(b"-9223372036854775808"), i64::MIN);
        assert_eq!(parse_integral(b"99999999999999999999"), i64::MAX);
        assert_eq!(parse_integral(b"-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_parse_floating_point() {
        assert_eq!(parse_floating_point(b"2.5"), 2.5);
        assert_eq!(parse_floating_point(b"-0.125"), -0.125);
        assert_eq!(parse_floating_point(b"1e3"), 1000.0);
        assert_eq!(parse_floating_point(b" 7 "), 7.0);
        assert_eq!(parse_floating_point(b"3.75kg"), 3.75);
        assert_eq!(parse_floating_point(b"kg"), 0.0);
        assert!(parse_floating_point(b"NaN").is_nan());
    }

    #[test]
    fn test_parse_floating_point_prefix() {
        assert_eq!(parse_floating_point(b"1.5e2x"), 150.0);
        assert_eq!(parse_floating_point(b"2e"), 2.0);
        assert_eq!(parse_floating_point(b"2e+"), 2.0);
        assert_eq!(parse_floating_point(b"-.5;"), -0.5);
        assert_eq!(parse_floating_point(b"8.,"), 8.0);
        assert_eq!(parse_floating_point(b"12.5.3"), 12.5);
        assert_eq!(parse_floating_point(b"-x"), 0.0);
        assert_eq!(parse_floating_point(b"."), 0.0);
        assert_eq!(parse_floating_point(&[b'4', b'2', 0xff]), 42.0);
    }

    #[test]
    fn test_parse_boolean() {
        assert!(parse_boolean(b"t"));
        assert!(parse_boolean(b"true"));
        assert!(parse_boolean(b"1"));
        assert!(parse_boolean(b"Y"));
        assert!(!parse_boolean(b"f"));
        assert!(!parse_boolean(b"0"));
        assert!(!parse_boolean(b""));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_text(b"hello"), "hello");
        assert_eq!(parse_text(b""), "");
        assert_eq!(parse_text(&[b'a', 0xff, b'b']), "a\u{fffd}b");
    }
}
