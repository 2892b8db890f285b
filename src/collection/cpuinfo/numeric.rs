//! Permissive integer parsing for kernel-provided text.
//!
//! Kernel output is well-formed in practice, so these never fail. Anything that
//! is not a number parses as `0`, as does anything that overflows an [`i64`].
//! Trailing garbage after a valid digit prefix is ignored, so `"1800000\n"`
//! parses as `1800000`.

/// Parses a base-10 integer, returning `0` for non-numeric or overflowing input.
#[inline]
pub fn parse_decimal(text: &[u8]) -> i64 {
    parse_permissive(text, 10)
}

/// Parses a base-16 integer with an optional `0x`/`0X` prefix, returning `0`
/// for non-numeric or overflowing input.
#[inline]
pub fn parse_hex(text: &[u8]) -> i64 {
    parse_permissive(text, 16)
}

/// Converts a parsed value into a narrower field type, falling back to the
/// type's default (zero) if it does not fit.
#[inline]
pub(crate) fn narrow<T>(value: i64) -> T
where
    T: TryFrom<i64> + Default,
{
    T::try_from(value).unwrap_or_default()
}

fn parse_permissive(text: &[u8], radix: u32) -> i64 {
    let start = text
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(text.len());
    let text = &text[start..];

    let (is_negative, digits) = match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, text),
    };

    let digits = if radix == 16 {
        digits
            .strip_prefix(b"0x")
            .or_else(|| digits.strip_prefix(b"0X"))
            .unwrap_or(digits)
    } else {
        digits
    };

    let mut value: i64 = 0;
    for &byte in digits {
        let Some(digit) = char::from(byte).to_digit(radix) else {
            break;
        };

        match value
            .checked_mul(i64::from(radix))
            .and_then(|v| v.checked_add(i64::from(digit)))
        {
            Some(next) => value = next,
            None => return 0,
        }
    }

    if is_negative { -value } else { value }
}
