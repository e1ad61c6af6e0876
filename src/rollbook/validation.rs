//! # Record Validation
//!
//! Validation is a pure function of a candidate and the records already stored.
//! The store is consulted only for roll number uniqueness.
//!
//! Every field is checked on every call: a caller sees all violated fields at once
//! rather than just the first one. Within a single field the rules are ordered and
//! the first failing rule supplies that field's message.
//!
//! Create and update run the exact same checks. The candidate's id is what keeps an
//! update from colliding with its own, unchanged roll number.

use crate::model::{StudentId, StudentInput, StudentRecord, Year};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]{2,}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// The editable fields of a student record, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    RollNo,
    Department,
    Year,
    Email,
    Phone,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::RollNo => "rollNo",
            Field::Department => "department",
            Field::Year => "year",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to human-readable message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        f.write_str(&parts.join("; "))
    }
}

/// Validates `input` as the record identified by `id`.
///
/// `existing` is the current collection; a record sharing `id` is ignored when
/// checking roll number uniqueness.
pub fn validate(id: &StudentId, input: &StudentInput, existing: &[StudentRecord]) -> ErrorMap {
    let mut errors = ErrorMap::new();

    let checks = [
        (Field::Name, check_name(&input.name)),
        (Field::RollNo, check_roll_no(id, &input.roll_no, existing)),
        (Field::Department, check_department(&input.department)),
        (Field::Year, check_year(&input.year)),
        (Field::Email, check_email(&input.email)),
        (Field::Phone, check_phone(&input.phone)),
    ];

    for (field, outcome) in checks {
        if let Err(message) = outcome {
            errors.insert(field, message);
        }
    }

    errors
}

type Check = std::result::Result<(), &'static str>;

fn check_name(name: &str) -> Check {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Full name is required");
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err("Name must be at least 2 characters");
    }
    if !NAME_RE.is_match(trimmed) {
        return Err("Name can only contain letters and spaces");
    }
    Ok(())
}

fn check_roll_no(id: &StudentId, roll_no: &str, existing: &[StudentRecord]) -> Check {
    if roll_no.trim().is_empty() {
        return Err("Roll number is required");
    }
    if existing
        .iter()
        .any(|s| s.roll_no == roll_no && &s.id != id)
    {
        return Err("This roll number is already registered");
    }
    Ok(())
}

// Any non-empty department is accepted; KNOWN_DEPARTMENTS only feeds suggestions.
fn check_department(department: &str) -> Check {
    if department.trim().is_empty() {
        return Err("Please select a department");
    }
    Ok(())
}

fn check_year(year: &str) -> Check {
    if year.trim().is_empty() {
        return Err("Please select academic year");
    }
    if year.parse::<Year>().is_err() {
        return Err("Academic year must be between 1 and 5");
    }
    Ok(())
}

fn check_email(email: &str) -> Check {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err("Email address is required");
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

fn check_phone(phone: &str) -> Check {
    if phone.trim().is_empty() {
        return Err("Phone number is required");
    }
    let digits = phone_digits(phone).len();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err("Please enter a valid phone number (10-15 digits)");
    }
    Ok(())
}

/// Digits-only projection of a phone number.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> StudentInput {
        StudentInput {
            name: "Alice Smith".into(),
            roll_no: "R1".into(),
            department: "Data Science".into(),
            year: "2".into(),
            email: "alice@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
        }
    }

    fn record(id: &str, roll_no: &str) -> StudentRecord {
        StudentRecord {
            id: id.into(),
            name: "Someone".into(),
            roll_no: roll_no.into(),
            department: "Data Science".into(),
            year: Year::First,
            email: "someone@example.com".into(),
            phone: "5551234567".into(),
        }
    }

    #[test]
    fn valid_candidate_has_no_errors() {
        let errors = validate(&StudentId::generate(), &valid_input(), &[]);
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn reports_every_invalid_field_at_once() {
        let errors = validate(&StudentId::generate(), &StudentInput::default(), &[]);
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(Field::Name), Some("Full name is required"));
        assert_eq!(errors.get(Field::RollNo), Some("Roll number is required"));
        assert_eq!(errors.get(Field::Department), Some("Please select a department"));
        assert_eq!(errors.get(Field::Year), Some("Please select academic year"));
        assert_eq!(errors.get(Field::Email), Some("Email address is required"));
        assert_eq!(errors.get(Field::Phone), Some("Phone number is required"));
    }

    #[test]
    fn short_name_is_rejected() {
        let input = StudentInput {
            name: "A".into(),
            ..valid_input()
        };
        let errors = validate(&StudentId::generate(), &input, &[]);
        assert_eq!(
            errors.get(Field::Name),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn name_with_digits_is_rejected() {
        let input = StudentInput {
            name: "R2 D2".into(),
            ..valid_input()
        };
        let errors = validate(&StudentId::generate(), &input, &[]);
        assert_eq!(
            errors.get(Field::Name),
            Some("Name can only contain letters and spaces")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn duplicate_roll_no_is_rejected_for_other_ids() {
        let existing = vec![record("a", "R1")];
        let errors = validate(&StudentId::generate(), &valid_input(), &existing);
        assert_eq!(
            errors.get(Field::RollNo),
            Some("This roll number is already registered")
        );
    }

    #[test]
    fn own_roll_no_is_not_a_duplicate() {
        let existing = vec![record("a", "R1")];
        let errors = validate(&"a".into(), &valid_input(), &existing);
        assert!(errors.is_empty());
    }

    #[test]
    fn roll_no_match_is_case_sensitive() {
        let existing = vec![record("a", "r1")];
        let errors = validate(&StudentId::generate(), &valid_input(), &existing);
        assert!(!errors.contains(Field::RollNo));
    }

    #[test]
    fn year_outside_range_is_rejected() {
        let input = StudentInput {
            year: "6".into(),
            ..valid_input()
        };
        let errors = validate(&StudentId::generate(), &input, &[]);
        assert_eq!(
            errors.get(Field::Year),
            Some("Academic year must be between 1 and 5")
        );
    }

    #[test]
    fn email_shape() {
        for bad in ["alice", "alice@example", "al ice@example.com", "@example.com"] {
            let input = StudentInput {
                email: bad.into(),
                ..valid_input()
            };
            let errors = validate(&StudentId::generate(), &input, &[]);
            assert!(errors.contains(Field::Email), "accepted {}", bad);
        }
    }

    #[test]
    fn phone_counts_digits_only() {
        let ok = ["1234567890", "+91 93457 33566", "123456789012345"];
        let bad = ["123456789", "1234567890123456", "phone-number"];
        for phone in ok {
            let input = StudentInput {
                phone: phone.into(),
                ..valid_input()
            };
            assert!(validate(&StudentId::generate(), &input, &[]).is_empty());
        }
        for phone in bad {
            let input = StudentInput {
                phone: phone.into(),
                ..valid_input()
            };
            assert!(validate(&StudentId::generate(), &input, &[]).contains(Field::Phone));
        }
    }

    #[test]
    fn error_map_serializes_with_field_names() {
        let mut errors = ErrorMap::new();
        errors.insert(Field::RollNo, "taken");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["rollNo"], "taken");
    }
}
