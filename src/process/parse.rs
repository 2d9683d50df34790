// src/process/parse.rs

use tracing::debug;

use crate::schema::{ColumnKind, Value};

/// Conversion of one text token into an optional typed value.
///
/// Conversions never fail: a token that cannot be read as `Self` yields
/// `None`. Numeric conversions read the longest valid base-10 prefix and
/// discard whatever follows it, so `"42xyz"` is `Some(42)`.
pub trait FromToken: Sized {
    /// Column kind recorded in the schema for fields of this type.
    const KIND: ColumnKind;

    fn from_token(token: &str) -> Option<Self>;

    /// Tag a parsed field for column-oriented consumers.
    fn as_value(field: &Option<Self>) -> Value<'_>;
}

/// Parse `token` as `T`.
pub fn parse<T: FromToken>(token: &str) -> Option<T> {
    T::from_token(token)
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Leading whitespace, an optional sign, then at least one digit.
/// Returns the sign and the digit run.
fn scan_integer(token: &str) -> Option<(bool, &str)> {
    let s = token.trim_start_matches(is_space);
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some((negative, &rest[..end]))
    }
}

/// `strtoull` semantics: overflow saturates, a minus sign wraps.
fn unsigned_prefix(token: &str) -> Option<u64> {
    let (negative, digits) = scan_integer(token)?;
    let magnitude = digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    });
    Some(match magnitude {
        Some(v) if negative => v.wrapping_neg(),
        Some(v) => v,
        None => u64::MAX,
    })
}

/// `strtoll` semantics: overflow saturates towards the sign.
fn signed_prefix(token: &str) -> Option<i64> {
    let (negative, digits) = scan_integer(token)?;
    // accumulate negatively so i64::MIN is reachable
    let value = digits.bytes().try_fold(0i64, |acc, b| {
        acc.checked_mul(10)?.checked_sub(i64::from(b - b'0'))
    });
    Some(match value {
        Some(v) if negative => v,
        Some(v) => v.checked_neg().unwrap_or(i64::MAX),
        None if negative => i64::MIN,
        None => i64::MAX,
    })
}

/// Longest prefix of `token` (after leading whitespace) that reads as a
/// decimal floating point number, or `None` if there is none.
fn decimal_prefix(token: &str) -> Option<&str> {
    let start = token.len() - token.trim_start_matches(is_space).len();
    let bytes = token.as_bytes();
    let digits_from = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |b| b.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = start;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let matched = bytes
            .get(end..end + word.len())
            .is_some_and(|b| b.eq_ignore_ascii_case(word.as_bytes()));
        if matched {
            return Some(&token[start..end + word.len()]);
        }
    }

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = digits_from(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    Some(&token[start..end])
}

macro_rules! unsigned_from_token {
    ($($t:ty),+) => {$(
        impl FromToken for $t {
            const KIND: ColumnKind = ColumnKind::Unsigned;

            fn from_token(token: &str) -> Option<Self> {
                unsigned_prefix(token).map(|v| v as $t)
            }

            fn as_value(field: &Option<Self>) -> Value<'_> {
                Value::Unsigned(field.map(|v| v as u64))
            }
        }
    )+};
}

macro_rules! signed_from_token {
    ($($t:ty),+) => {$(
        impl FromToken for $t {
            const KIND: ColumnKind = ColumnKind::Signed;

            fn from_token(token: &str) -> Option<Self> {
                signed_prefix(token).map(|v| v as $t)
            }

            fn as_value(field: &Option<Self>) -> Value<'_> {
                Value::Signed(field.map(|v| v as i64))
            }
        }
    )+};
}

macro_rules! decimal_from_token {
    ($($t:ty),+) => {$(
        impl FromToken for $t {
            const KIND: ColumnKind = ColumnKind::Decimal;

            fn from_token(token: &str) -> Option<Self> {
                let prefix = decimal_prefix(token)?;
                match prefix.parse::<$t>() {
                    Ok(v) => Some(v),
                    Err(err) => {
                        debug!(token, prefix, %err, "decimal prefix rejected; treating as absent");
                        None
                    }
                }
            }

            fn as_value(field: &Option<Self>) -> Value<'_> {
                Value::Decimal(field.map(f64::from))
            }
        }
    )+};
}

unsigned_from_token!(u8, u16, u32, u64, usize);
signed_from_token!(i8, i16, i32, i64, isize);
decimal_from_token!(f32, f64);

impl FromToken for char {
    const KIND: ColumnKind = ColumnKind::Character;

    fn from_token(token: &str) -> Option<Self> {
        token.chars().next()
    }

    fn as_value(field: &Option<Self>) -> Value<'_> {
        Value::Character(*field)
    }
}

impl FromToken for bool {
    const KIND: ColumnKind = ColumnKind::Boolean;

    /// Always present; only the literal set below reads as `true`.
    fn from_token(token: &str) -> Option<Self> {
        Some(matches!(token, "true" | "True" | "TRUE" | "T" | "1"))
    }

    fn as_value(field: &Option<Self>) -> Value<'_> {
        Value::Boolean(*field)
    }
}

impl FromToken for String {
    const KIND: ColumnKind = ColumnKind::Text;

    fn from_token(token: &str) -> Option<Self> {
        Some(token.to_string())
    }

    fn as_value(field: &Option<Self>) -> Value<'_> {
        Value::Text(field.as_deref())
    }
}
