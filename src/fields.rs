//! Label/value extraction for `/proc` text files.
//!
//! `/proc/meminfo` and friends expose lines like `MemTotal:  16302724 kB`.
//! Lookups are plain substring searches: the first occurrence of the label
//! wins and the integer right after it is parsed the way `strtol` does
//! (leading whitespace skipped, optional sign, longest run of digits, any
//! unit suffix ignored).

use crate::error::MemInfoError;

/// Parses the longest signed decimal integer at the start of `s`.
///
/// Leading ASCII whitespace (including newlines) is skipped. Returns `None`
/// if no digit follows or the value does not fit in an `i64`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in rest[..digits].bytes() {
        let d = i64::from(b - b'0');
        // Accumulate negatively so i64::MIN stays representable.
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(d)?
        } else {
            value.checked_add(d)?
        };
    }
    Some(value)
}

/// Returns the value following the first occurrence of `name` in `buf`.
pub fn get_entry(buf: &str, name: &str) -> Option<i64> {
    let hit = buf.find(name)?;
    parse_leading_int(&buf[hit + name.len()..])
}

/// Like [`get_entry`], but a missing value is a schema error.
pub fn get_entry_fatal(buf: &str, name: &'static str) -> Result<i64, MemInfoError> {
    get_entry(buf, name).ok_or(MemInfoError::MissingField(name))
}
