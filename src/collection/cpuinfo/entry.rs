//! Splitting a single `key : value` line from `/proc/cpuinfo`.

use std::{borrow::Cow, fmt};

/// A key/value pair borrowed from a single line of text. Both sides are
/// already trimmed of surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub key: &'a [u8],
    pub value: &'a [u8],
}

impl KeyValue<'_> {
    /// The key, with any invalid UTF-8 replaced.
    pub fn key_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.key)
    }

    /// The value, with any invalid UTF-8 replaced.
    pub fn value_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.value)
    }
}

impl fmt::Display for KeyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': '{}'", self.key_lossy(), self.value_lossy())
    }
}

#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
fn trim_front(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| !is_whitespace(b)) {
        Some(start) => &bytes[start..],
        None => &[],
    }
}

#[inline]
fn trim_back(bytes: &[u8]) -> &[u8] {
    match bytes.iter().rposition(|&b| !is_whitespace(b)) {
        Some(end) => &bytes[..=end],
        None => &[],
    }
}

/// Parses one line into a [`KeyValue`], splitting on the first `:`.
///
/// Returns `None` if the line is blank, has no delimiter, or if either the key
/// or the value is empty once trimmed. Any further `:` characters are part of
/// the value.
pub fn parse_entry(line: &[u8]) -> Option<KeyValue<'_>> {
    let line = trim_back(trim_front(line));
    if line.is_empty() {
        return None;
    }

    let delimiter = line.iter().position(|&b| b == b':')?;

    let key = trim_back(&line[..delimiter]);
    if key.is_empty() {
        return None;
    }

    // The right edge was already trimmed above.
    let value = trim_front(&line[delimiter + 1..]);
    if value.is_empty() {
        return None;
    }

    Some(KeyValue { key, value })
}
