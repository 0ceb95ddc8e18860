//! Numeric literal rules.

use crate::{Category, Segment, SyntaxRule};

/// Type suffixes accepted after a decimal literal (`10L`, `1.5f`, `7UL`).
const SUFFIXES: &[char] = &['f', 'F', 'd', 'D', 'l', 'L', 'u', 'U'];

/// Whether `text` is lexically a number.
///
/// Accepts decimal integers and floats with optional exponent, an optional
/// leading `-`, `_` digit separators, `0x`/`0b`/`0o` radix prefixes and up to
/// two type-suffix letters on decimals.
pub fn is_number(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.as_bytes() {
        [b'0', b'x' | b'X', rest @ ..] => digit_run(rest, u8::is_ascii_hexdigit, false),
        [b'0', b'b' | b'B', rest @ ..] => digit_run(rest, |b| matches!(b, b'0' | b'1'), false),
        [b'0', b'o' | b'O', rest @ ..] => digit_run(rest, |b| matches!(b, b'0'..=b'7'), false),
        _ => is_decimal(unsigned),
    }
}

fn is_decimal(text: &str) -> bool {
    let stripped = text.strip_suffix(SUFFIXES).unwrap_or(text);
    let stripped = stripped.strip_suffix(SUFFIXES).unwrap_or(stripped);

    let (mantissa, exponent) = match stripped.find(['e', 'E']) {
        Some(at) => (&stripped[..at], Some(&stripped[at + 1..])),
        None => (stripped, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !digit_run(int_part.as_bytes(), u8::is_ascii_digit, true)
        || !digit_run(frac_part.as_bytes(), u8::is_ascii_digit, true)
    {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            digit_run(exp.as_bytes(), u8::is_ascii_digit, false)
        }
    }
}

/// Digits with `_` separators between them. `allow_empty` accepts `""`.
fn digit_run(bytes: &[u8], is_digit: impl Fn(&u8) -> bool, allow_empty: bool) -> bool {
    match bytes {
        [] => allow_empty,
        [b'_', ..] | [.., b'_'] => false,
        _ => bytes.iter().all(|b| *b == b'_' || is_digit(b)),
    }
}

/// Numeric literals.
///
/// With decimal splitting enabled, a lone `.` between two numeric tokens is
/// also a number, for grammars whose delimiters cut `1.5` into three tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberRule {
    decimal_split: bool,
}

impl NumberRule {
    pub fn new() -> Self {
        NumberRule {
            decimal_split: false,
        }
    }

    pub fn with_decimal_split() -> Self {
        NumberRule {
            decimal_split: true,
        }
    }
}

impl SyntaxRule for NumberRule {
    fn category(&self) -> Category {
        Category::Number
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        if is_number(current) {
            return true;
        }
        if !self.decimal_split || current != "." {
            return false;
        }
        match (segment.previous(), segment.next()) {
            (Some(prev), Some(next)) => is_number(prev) && is_number(next),
            _ => false,
        }
    }

    fn name(&self) -> &'static str {
        "number"
    }
}
