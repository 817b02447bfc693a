//! JSON literal decoding for single tokens.

use serde_json::Value;

use crate::error::FormatError;

/// Decodes one token as a JSON scalar: number, string, boolean or `null`.
///
/// Arrays and objects are valid JSON but not literals, so they are rejected
/// along with anything `serde_json` refuses. A well-formed number too large
/// for an `f64` (`1e400`) decodes to `null`, so it reaches the field checks
/// as a non-number instead of failing here.
pub fn decode(token: &str) -> Result<Value, FormatError> {
    match serde_json::from_str::<Value>(token) {
        Ok(Value::Array(_)) | Ok(Value::Object(_)) => Err(FormatError::InvalidLiteral(token.to_string())),
        Ok(value) => Ok(value),
        Err(_) if is_number(token) => Ok(Value::Null),
        Err(_) => Err(FormatError::InvalidLiteral(token.to_string())),
    }
}

/// Matches the JSON number grammar:
/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
fn is_number(token: &str) -> bool {
    fn digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let mut rest = token.as_bytes();
    if let Some(b'-') = rest.first() {
        rest = &rest[1..];
    }
    match rest.first() {
        Some(b'0') => rest = &rest[1..],
        Some(b'1'..=b'9') => rest = &rest[digits(rest)..],
        _ => return false,
    }
    if let Some(b'.') = rest.first() {
        let n = digits(&rest[1..]);
        if n == 0 {
            return false;
        }
        rest = &rest[1 + n..];
    }
    if let Some(b'e') | Some(b'E') = rest.first() {
        rest = &rest[1..];
        if let Some(b'+') | Some(b'-') = rest.first() {
            rest = &rest[1..];
        }
        let n = digits(rest);
        if n == 0 {
            return false;
        }
        rest = &rest[n..];
    }
    rest.is_empty()
}

pub fn decode_all(tokens: &[&str]) -> Result<Vec<Value>, FormatError> {
    tokens.iter().map(|token| decode(token)).collect()
}

/// Reads a non-negative whole number.
///
/// Floats with no fractional part (`1.0`, `1e2`, `-0`) count as whole.
pub fn whole(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(n) => n,
        _ => return None,
    };
    if let Some(n) = number.as_u64() {
        return Some(n);
    }
    let n = number.as_f64()?;
    // u64::MAX as f64 rounds up to 2^64
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n < u64::MAX as f64 {
        Some(n as u64)
    } else {
        None
    }
}

/// Reads a non-empty string.
pub fn name(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Reads the integer flags `0` and `1`. JSON `true`/`false` are not flags.
pub fn flag(value: &Value) -> Option<bool> {
    match whole(value)? {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}
