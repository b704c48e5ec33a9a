//! Number parsing and formatting for display text
//!
//! Operands live as display strings, so every transition parses the display
//! and formats its result back into text. Parsing takes the longest numeric
//! prefix of the input; formatting produces the shortest digit string that
//! round-trips, switching to `d.ddde±x` outside the `[1e-6, 1e21)` range.

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Returns NaN when no digits are found, so
/// `"-"` and `""` both yield NaN while `"0."` yields zero and `"12abc"`
/// yields twelve. The words `Infinity` and `-Infinity` are recognised so
/// that formatted overflow values parse back.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let negative = bytes.first() == Some(&b'-');

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if trimmed[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats a number the way it should appear on the display.
///
/// Uses the shortest round-trip digits. Integers print without a fraction,
/// `-0` prints as `0`, and magnitudes at or above `1e21` or below `1e-6`
/// switch to exponent form with an explicit sign (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let (digits, point) = shortest_digits(value.abs());
    let count = digits.len() as i32;
    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }

    if count <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((point - count) as usize));
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        out.push_str(whole);
        out.push('.');
        out.push_str(fraction);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        push_exponent(&mut out, point - 1);
    }
    out
}

/// Returns the shortest round-trip significant digits of a positive finite
/// value and the position of the decimal point relative to the first digit.
fn shortest_digits(value: f64) -> (String, i32) {
    let sci = format!("{value:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    (digits, exponent + 1)
}

fn push_exponent(out: &mut String, exponent: i32) {
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&exponent.unsigned_abs().to_string());
}

/// Upper bound on fraction digits in exponent notation
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Formats a number in exponent notation with a fixed number of fraction
/// digits, e.g. `1234567890123` with 6 digits gives `1.234568e+12`.
///
/// NaN and infinities fall back to [`format_number`]. `fraction_digits` is
/// capped at [`MAX_FRACTION_DIGITS`].
#[must_use]
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let fraction_digits = fraction_digits.min(MAX_FRACTION_DIGITS);
    // -0 has no sign in the readout
    let value = if value == 0.0 { 0.0 } else { value };
    let sci = format!("{value:.fraction_digits$e}");
    match sci.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => sci,
    }
}
