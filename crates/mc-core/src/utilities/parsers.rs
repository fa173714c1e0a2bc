//! Date-text parsing helpers.
//!
//! These functions only split and convert digits; they do not know about
//! calendar systems. Interpreting the resulting triple (and validating it)
//! is the adapter's job.

/// Replace Extended Arabic-Indic (Persian, `۰`–`۹`) and Arabic-Indic
/// (`٠`–`٩`) digits with their ASCII equivalents.
pub fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            _ => c,
        })
        .collect()
}

/// Parse three integer fields separated by `sep`, e.g. `"1403/1/12"`.
///
/// Returns `(year, month, day)` exactly as written (1-based month) or
/// `None` when the text does not have that shape. Native digits are
/// accepted.
pub fn parse_triple(s: &str, sep: char) -> Option<(i32, u32, u32)> {
    let normalized = normalize_digits(s.trim());
    let mut parts = normalized.split(sep).map(str::trim);
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(i32, u32, u32)> {
    let s = s.trim();
    // A leading '-' would be a negative year, which ISO text for this
    // library never carries.
    if s.starts_with('-') {
        return None;
    }
    parse_triple(s, '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("1403/1/12", '/'), Some((1403, 1, 12)));
        assert_eq!(parse_triple(" 1403 / 01 / 02 ", '/'), Some((1403, 1, 2)));
        assert_eq!(parse_triple("1403/1", '/'), None);
        assert_eq!(parse_triple("1403/1/2/3", '/'), None);
        assert_eq!(parse_triple("abc", '/'), None);
        assert_eq!(parse_triple("", '/'), None);
    }

    #[test]
    fn test_native_digits() {
        assert_eq!(normalize_digits("۱۴۰۳/۱/۱"), "1403/1/1");
        assert_eq!(normalize_digits("١٤٤٥/٩/١٠"), "1445/9/10");
        assert_eq!(parse_triple("۱۴۰۳/۱۲/۳۰", '/'), Some((1403, 12, 30)));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-03-20"), Some((2024, 3, 20)));
        assert_eq!(parse_iso_date("-2024-03-20"), None);
        assert_eq!(parse_iso_date("bad"), None);
    }
}
