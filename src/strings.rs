//! Lenient text helpers for header fields read out of binary containers.

use crate::error::{checked_range, BitsResult};

/// Reads `len` bytes at `start` as Latin-1 text, dropping NUL padding.
pub fn string_at(buf: &[u8], start: usize, len: usize) -> BitsResult<String> {
    let bytes = checked_range(buf, start, len)?;
    Ok(bytes
        .iter()
        .filter(|&&b| b != 0)
        .map(|&b| char::from(b))
        .collect())
}

pub fn trim(s: &str) -> &str {
    s.trim()
}

pub fn strip_leading_zeros(s: &str) -> &str {
    s.trim_start_matches('0')
}

/// Parses the leading decimal integer of `s`, ignoring leading zeros.
///
/// Returns 0 when there is nothing to parse and saturates at the `i64` bounds.
pub fn safe_parse_int(s: &str) -> i64 {
    let s = strip_leading_zeros(s).trim_start();
    let (negative, rest) = split_sign(s);

    let mut value: i64 = 0;
    for d in rest.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(d - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(d)
        } else {
            value.saturating_add(d)
        };
    }
    value
}

/// Parses the leading decimal float of `s`, ignoring leading zeros.
///
/// An empty string is 0; text with no numeric prefix is NaN.
pub fn safe_parse_float(s: &str) -> f64 {
    let s = strip_leading_zeros(s);
    if s.is_empty() {
        return 0.0;
    }

    let s = s.trim_start();
    let (negative, rest) = split_sign(s);
    if rest.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let end = float_prefix_len(rest.as_bytes());
    if end == 0 {
        return f64::NAN;
    }
    // Only `[0-9.eE+-]` went into the prefix, so this cannot fail.
    let value = rest[..end].parse::<f64>().unwrap_or(f64::NAN);
    if negative {
        -value
    } else {
        value
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

/// Length of the longest `digits [. digits] [e [sign] digits]` prefix that has
/// at least one mantissa digit.
fn float_prefix_len(b: &[u8]) -> usize {
    let digits = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let int_digits = digits(0);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if b.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if let Some(b'e') | Some(b'E') = b.get(end) {
        let mut exp = end + 1;
        if let Some(b'+') | Some(b'-') = b.get(exp) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

/// `"bitsStored"` becomes `"Bits Stored"`.
pub fn camel_case_to_title_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut spaced = String::with_capacity(s.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        let next_is_lower = chars.get(i + 1).map_or(false, char::is_ascii_lowercase);
        if c.is_ascii_uppercase() && next_is_lower {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut out = String::with_capacity(spaced.len());
    let mut rest = spaced.chars();
    if let Some(first) = rest.next() {
        out.extend(first.to_uppercase());
        out.extend(rest);
    }
    out.trim().to_string()
}

/// Upper-case hex of `i + 0x10000`, so tag halves print with a leading `1`.
pub fn dec2hex(i: u32) -> String {
    format!("{:X}", u64::from(i) + 0x10000)
}
