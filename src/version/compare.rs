//! Dotted version comparison with zero padding

use std::cmp::Ordering;

/// Split a dotted version string into numeric segments.
///
/// Segments that are empty or not a plain non-negative integer become 0,
/// so this never fails. Segments too large for `u64` saturate.
///
/// Examples:
/// - "91.4.1" -> [91, 4, 1]
/// - "100.0" -> [100, 0]
/// - "1..x" -> [1, 0, 0]
pub fn parse_segments(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|segment| parse_number(segment.trim()))
        .collect()
}

/// Digits-only strings saturate on overflow, anything else is 0
fn parse_number(digits: &str) -> u64 {
    match digits.parse::<u64>() {
        Ok(n) => n,
        Err(_) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => u64::MAX,
        Err(_) => 0,
    }
}

/// Compare two dotted version strings segment by segment.
///
/// The shorter version is padded with zeros, so "91.4.1" equals "91.4.1.0".
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = parse_segments(a);
    let b = parse_segments(b);
    let len = a.len().max(b.len());

    (0..len)
        .map(|i| {
            let left = a.get(i).copied().unwrap_or(0);
            let right = b.get(i).copied().unwrap_or(0);
            left.cmp(&right)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Leading integer of a version string, 0 when there is none.
/// Saturates at `u32::MAX`.
pub fn major_version(version: &str) -> u32 {
    let digits = version
        .trim_start()
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or_default();

    u32::try_from(parse_number(digits)).unwrap_or(u32::MAX)
}
