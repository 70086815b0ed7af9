//! Date helpers for model-produced `DD.MM.YYYY` strings

use chrono::NaiveDate;

/// Find the first `DD.MM.YYYY` occurrence in `text` and return it as a date.
///
/// The pattern may be embedded in other text ("until 17.06.2026"). Values that
/// are not real calendar days (`31.02.2026`) and placeholders such as
/// "Not specified" yield `None`.
///
/// # Examples
///
/// ```
/// use meetline_domain::utils::dates::convert_date;
///
/// let date = convert_date("17.06.2026").map(|d| d.to_string());
/// assert_eq!(date.as_deref(), Some("2026-06-17"));
/// assert_eq!(convert_date("Not specified"), None);
/// ```
pub fn convert_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() < 10 {
        return None;
    }

    (0..=bytes.len() - 10).find_map(|start| {
        let window = &bytes[start..start + 10];
        if !is_date_shape(window) {
            return None;
        }
        let day = parse_digits(&window[0..2]);
        let month = parse_digits(&window[3..5]);
        let year = parse_digits(&window[6..10]);
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
    })
}

/// `YYYY-MM-DD` rendering of [`convert_date`].
pub fn to_iso_date(text: &str) -> Option<String> {
    convert_date(text).map(|date| date.format("%Y-%m-%d").to_string())
}

fn is_date_shape(window: &[u8]) -> bool {
    window.iter().enumerate().all(|(index, byte)| match index {
        2 | 5 => *byte == b'.',
        _ => byte.is_ascii_digit(),
    })
}

fn parse_digits(digits: &[u8]) -> u32 {
    digits.iter().fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
}
