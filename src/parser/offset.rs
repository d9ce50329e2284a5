// Tue Jan 20 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

static OFFSET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//\s*([0-9a-fA-F]+)").expect("offset pattern"));

/// Extracts the byte offset encoded in a trailing line comment, e.g.
/// `// 1A0`. The value is always hexadecimal, with or without padding.
/// Only a comment that is the immediate next sibling of the field
/// declaration is ever passed here.
pub fn extract_offset(comment: &str) -> Option<u64> {
    let captures = OFFSET_PATTERN.captures(comment)?;
    u64::from_str_radix(captures.get(1)?.as_str(), 16).ok()
}
