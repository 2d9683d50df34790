// src/process/split.rs

/// Split `line` on every occurrence of `delimiter`.
///
/// No quoting, escaping or collapsing: adjacent delimiters produce empty
/// tokens, a trailing delimiter produces a trailing empty token, and the
/// final (undelimited) token is always included. `capacity` only pre-sizes
/// the result.
pub fn split(line: &str, delimiter: char, capacity: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(capacity);
    fields.extend(line.split(delimiter));
    fields
}
