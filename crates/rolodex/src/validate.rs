//! Customer validation.
//!
//! Validation produces a per-field error report rather than failing on the
//! first problem: every field is checked independently and the presentation
//! layer maps field keys to its own elements. An empty report means the
//! candidate is valid.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::customer::CustomerDraft;
use crate::format::strip_non_digits;

/// A validatable customer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Customer name.
    Name,
    /// Street address.
    Address,
    /// Phone number.
    Phone,
    /// National identification number (optional field).
    NationalId,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Address => write!(f, "address"),
            Self::Phone => write!(f, "phone"),
            Self::NationalId => write!(f, "national_id"),
        }
    }
}

/// The outcome of validating a [`CustomerDraft`].
///
/// Maps each failing field to a human-readable message. Field evaluation
/// order never affects the content of the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    /// True when no field failed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when the report carries no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error message for a field, if that field failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Iterate over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a customer draft, returning one error message per failing field.
#[must_use]
pub fn validate_customer(draft: &CustomerDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    let name = draft.name.trim();
    if name.is_empty() {
        report.add(Field::Name, "name is required");
    } else if name.chars().count() < 2 {
        report.add(Field::Name, "name must have at least 2 characters");
    }

    let address = draft.address.trim();
    if address.is_empty() {
        report.add(Field::Address, "address is required");
    } else if address.chars().count() < 5 {
        report.add(Field::Address, "address must have at least 5 characters");
    }

    let phone = draft.phone.trim();
    if phone.is_empty() {
        report.add(Field::Phone, "phone is required");
    } else {
        let digits = strip_non_digits(phone);
        if !(10..=11).contains(&digits.len()) {
            report.add(Field::Phone, "phone must have 10 or 11 digits");
        }
    }

    // The national ID is optional; blank input means "not provided".
    if let Some(id) = draft.national_id.as_deref() {
        let id = id.trim();
        if !id.is_empty() {
            let digits = strip_non_digits(id);
            if digits.len() != 11 {
                report.add(Field::NationalId, "national ID must have 11 digits");
            } else if !is_valid_national_id(&digits) {
                report.add(Field::NationalId, "national ID is invalid");
            }
        }
    }

    report
}

/// Check an 11-digit national ID against its two check digits.
///
/// Formatting punctuation is stripped before checking. Sequences where all
/// eleven digits are identical are rejected outright; they satisfy the
/// check-digit arithmetic but are not valid IDs.
#[must_use]
pub fn is_valid_national_id(id: &str) -> bool {
    let digits: Vec<u32> = strip_non_digits(id)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == check_digit(&digits[..9]) && digits[10] == check_digit(&digits[..10])
}

/// Compute the expected check digit for a prefix of the ID.
///
/// Digits are weighted from `prefix.len() + 1` down to 2, then
/// `r = (sum * 10) mod 11`, with 10 mapped to 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let top = u32::try_from(prefix.len()).unwrap_or(0) + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &digit)| digit * (top - u32::try_from(i).unwrap_or(0)))
        .sum();

    let r = (sum * 10) % 11;
    if r == 10 {
        0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CustomerDraft {
        CustomerDraft {
            name: "Ana Silva".to_string(),
            address: "Rua A, 123".to_string(),
            phone: "11987654321".to_string(),
            national_id: None,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let report = validate_customer(&valid_draft());
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_name_required() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();

        let report = validate_customer(&draft);
        assert_eq!(report.message(Field::Name), Some("name is required"));
    }

    #[test]
    fn test_name_too_short() {
        let mut draft = valid_draft();
        draft.name = " A ".to_string();

        let report = validate_customer(&draft);
        assert_eq!(
            report.message(Field::Name),
            Some("name must have at least 2 characters")
        );
    }

    #[test]
    fn test_address_required() {
        let mut draft = valid_draft();
        draft.address = String::new();

        let report = validate_customer(&draft);
        assert_eq!(report.message(Field::Address), Some("address is required"));
    }

    #[test]
    fn test_address_too_short() {
        let mut draft = valid_draft();
        draft.address = "Rua".to_string();

        let report = validate_customer(&draft);
        assert_eq!(
            report.message(Field::Address),
            Some("address must have at least 5 characters")
        );
    }

    #[test]
    fn test_phone_required() {
        let mut draft = valid_draft();
        draft.phone = String::new();

        let report = validate_customer(&draft);
        assert_eq!(report.message(Field::Phone), Some("phone is required"));
    }

    #[test]
    fn test_phone_digit_count() {
        let mut draft = valid_draft();

        draft.phone = "123456789".to_string(); // 9 digits
        assert!(!validate_customer(&draft).is_valid());

        draft.phone = "123456789012".to_string(); // 12 digits
        assert!(!validate_customer(&draft).is_valid());

        draft.phone = "1133334444".to_string(); // 10 digits
        assert!(validate_customer(&draft).is_valid());

        draft.phone = "(11) 98765-4321".to_string(); // 11 digits, formatted
        assert!(validate_customer(&draft).is_valid());
    }

    #[test]
    fn test_national_id_optional() {
        let mut draft = valid_draft();
        draft.national_id = Some("   ".to_string());
        assert!(validate_customer(&draft).is_valid());

        draft.national_id = None;
        assert!(validate_customer(&draft).is_valid());
    }

    #[test]
    fn test_national_id_wrong_length() {
        let mut draft = valid_draft();
        draft.national_id = Some("12345".to_string());

        let report = validate_customer(&draft);
        assert_eq!(
            report.message(Field::NationalId),
            Some("national ID must have 11 digits")
        );
    }

    #[test]
    fn test_national_id_repeated_digits_rejected() {
        let mut draft = valid_draft();
        draft.national_id = Some("11111111111".to_string());

        let report = validate_customer(&draft);
        assert_eq!(
            report.message(Field::NationalId),
            Some("national ID is invalid")
        );
    }

    #[test]
    fn test_national_id_valid_accepted() {
        let mut draft = valid_draft();
        draft.national_id = Some("111.444.777-35".to_string());
        assert!(validate_customer(&draft).is_valid());
    }

    #[test]
    fn test_errors_are_independent() {
        let draft = CustomerDraft {
            name: String::new(),
            address: String::new(),
            phone: String::new(),
            national_id: Some("123".to_string()),
        };

        let report = validate_customer(&draft);
        assert_eq!(report.len(), 4);
        assert!(report.message(Field::Name).is_some());
        assert!(report.message(Field::Address).is_some());
        assert!(report.message(Field::Phone).is_some());
        assert!(report.message(Field::NationalId).is_some());
    }

    #[test]
    fn test_checksum_known_valid() {
        assert!(is_valid_national_id("11144477735"));
    }

    #[test]
    fn test_checksum_corrupted_last_digit() {
        assert!(!is_valid_national_id("11144477736"));
    }

    #[test]
    fn test_checksum_all_same_digit() {
        for d in 0..=9 {
            let id = d.to_string().repeat(11);
            assert!(!is_valid_national_id(&id), "{id} should be invalid");
        }
    }

    #[test]
    fn test_checksum_accepts_formatted_input() {
        assert!(is_valid_national_id("111.444.777-35"));
    }

    #[test]
    fn test_checksum_wrong_length() {
        assert!(!is_valid_national_id(""));
        assert!(!is_valid_national_id("1114447773"));
        assert!(!is_valid_national_id("111444777350"));
    }

    #[test]
    fn test_report_display() {
        let mut draft = valid_draft();
        draft.name = String::new();
        draft.phone = "123".to_string();

        let report = validate_customer(&draft);
        let rendered = report.to_string();
        assert!(rendered.contains("name: name is required"));
        assert!(rendered.contains("phone: phone must have 10 or 11 digits"));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Name.to_string(), "name");
        assert_eq!(Field::NationalId.to_string(), "national_id");
    }
}
