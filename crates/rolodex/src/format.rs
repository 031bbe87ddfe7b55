//! Display formatting for phone numbers and national IDs.
//!
//! Records store their phone and national ID fields in a single canonical
//! display form, applied once at registration time. The functions here are
//! pure: malformed input is returned unchanged rather than rejected, since
//! digit-count validation happens before formatting.

/// Remove every character that is not an ASCII digit.
#[must_use]
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format a phone number for display.
///
/// A 10-digit number becomes `(DD) DDDD-DDDD`, an 11-digit number becomes
/// `(DD) DDDDD-DDDD`. Any other digit count returns the input unchanged.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        _ => raw.to_string(),
    }
}

/// Format a national ID for display as `DDD.DDD.DDD-DD`.
///
/// Anything other than exactly 11 digits returns the input unchanged.
#[must_use]
pub fn format_national_id(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    if digits.len() == 11 {
        format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        )
    } else {
        raw.to_string()
    }
}
