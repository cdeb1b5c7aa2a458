//! Cell normalization for bulk import.
//!
//! Spreadsheet exports spell dates and clock times a handful of ways. These
//! functions turn the accepted spellings into canonical `YYYY-MM-DD` and
//! `HH:MM` strings; anything else yields an empty string, which the import
//! path treats as an invalid cell.

/// Normalizes a date cell to `YYYY-MM-DD`.
///
/// Accepted inputs: canonical `YYYY-MM-DD` (returned unchanged) and
/// `D.M.YYYY` / `D/M/YYYY` / `D-M-YYYY` with a 1-2 digit day and month and a
/// 4-digit year.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if is_iso_date(raw) {
        return raw.to_string();
    }
    for sep in ['.', '/', '-'] {
        let parts: Vec<&str> = raw.split(sep).collect();
        if parts.len() != 3 {
            continue;
        }
        let (day, month, year) = (parts[0], parts[1], parts[2]);
        if is_digits(day, 1, 2) && is_digits(month, 1, 2) && is_digits(year, 4, 4) {
            return format!("{}-{:0>2}-{:0>2}", year, month, day);
        }
    }
    String::new()
}

/// Normalizes a clock-time cell to zero-padded `HH:MM`.
///
/// Accepted inputs: a 1-2 digit hour, an optional colon, and exactly two
/// minute digits, e.g. `9:30`, `09:30`, `930`, `0930`.
pub fn normalize_time(raw: &str) -> String {
    let raw = raw.trim();
    let (hours, minutes) = match raw.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None if is_digits(raw, 3, 4) => raw.split_at(raw.len() - 2),
        None => return String::new(),
    };
    if is_digits(hours, 1, 2) && is_digits(minutes, 2, 2) {
        format!("{:0>2}:{}", hours, minutes)
    } else {
        String::new()
    }
}

fn is_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9].iter().all(|&i| bytes[i].is_ascii_digit())
}

fn is_digits(raw: &str, min: usize, max: usize) -> bool {
    raw.len() >= min && raw.len() <= max && raw.bytes().all(|b| b.is_ascii_digit())
}
