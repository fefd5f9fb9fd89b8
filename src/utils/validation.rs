use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::schemas::employee_schema::EmployeeSchema;
use crate::utils::response::ApiError;

pub const NAME_MAX_CHARS: usize = 50;
pub const POSITION_MAX_CHARS: usize = 100;

/// Kind of a single field violation. The code ends up in `ValidationError::code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    TooLong,
    InvalidFormat,
    FutureDate,
}

impl ViolationKind {
    pub fn code(self) -> &'static str {
        match self {
            ViolationKind::Required => "required",
            ViolationKind::TooLong => "too_long",
            ViolationKind::InvalidFormat => "invalid_format",
            ViolationKind::FutureDate => "future_date",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "required" => Some(ViolationKind::Required),
            "too_long" => Some(ViolationKind::TooLong),
            "invalid_format" => Some(ViolationKind::InvalidFormat),
            "future_date" => Some(ViolationKind::FutureDate),
            _ => None,
        }
    }

    fn error(self, message: &'static str) -> ValidationError {
        ValidationError::new(self.code()).with_message(Cow::Borrowed(message))
    }
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

pub fn exceeds(value: Option<&str>, max_chars: usize) -> bool {
    value.is_some_and(|v| v.chars().count() > max_chars)
}

// Blank values are left to the Required check.
pub fn is_malformed_email(value: Option<&str>) -> bool {
    match value {
        Some(v) if !v.trim().is_empty() => !v.validate_email(),
        _ => false,
    }
}

pub fn is_after(value: Option<NaiveDate>, today: NaiveDate) -> bool {
    value.is_some_and(|d| d > today)
}

/// Check every field of an employee payload against `today`.
///
/// All fields are evaluated; a failure on one never hides a failure on another.
pub fn validate_employee(schema: &EmployeeSchema, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_text(
        &mut errors,
        "firstName",
        schema.first_name.as_deref(),
        NAME_MAX_CHARS,
        "First name is mandatory",
        "First name must be less than 50 characters",
    );
    check_text(
        &mut errors,
        "lastName",
        schema.last_name.as_deref(),
        NAME_MAX_CHARS,
        "Last name is mandatory",
        "Last name must be less than 50 characters",
    );

    let email = schema.email.as_deref();
    if is_blank(email) {
        errors.add("email", ViolationKind::Required.error("Email is mandatory"));
    }
    if is_malformed_email(email) {
        errors.add("email", ViolationKind::InvalidFormat.error("Email should be valid"));
    }

    check_text(
        &mut errors,
        "position",
        schema.position.as_deref(),
        POSITION_MAX_CHARS,
        "Position is mandatory",
        "Position must be less than 100 characters",
    );

    if is_after(schema.hire_date, today) {
        errors.add(
            "hireDate",
            ViolationKind::FutureDate.error("Hire date cannot be in the future"),
        );
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
    required_message: &'static str,
    too_long_message: &'static str,
) {
    if is_blank(value) {
        errors.add(field, ViolationKind::Required.error(required_message));
    }
    if exceeds(value, max_chars) {
        errors.add(field, ViolationKind::TooLong.error(too_long_message));
    }
}

/// Flatten validator errors to one message per field; the last violation recorded wins.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    let mut messages = BTreeMap::new();
    for (field, errs) in errors.field_errors().iter() {
        for e in errs.iter() {
            let msg = e
                .message
                .clone()
                .unwrap_or_else(|| "Invalid input".into())
                .to_string();
            messages.insert(field.to_string(), msg);
        }
    }
    messages
}

/// Validate a payload implementing `validator::Validate` and turn a failure into the
/// boundary error so handlers can `?` it.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ApiError> {
    if let Err(errors) = payload.validate() {
        return Err(ApiError::Validation {
            errors: field_messages(&errors),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid() -> EmployeeSchema {
        EmployeeSchema {
            id: None,
            first_name: Some("Alice".into()),
            last_name: Some("Smith".into()),
            email: Some("alice.smith@example.com".into()),
            position: Some("Engineer".into()),
            hire_date: NaiveDate::from_ymd_opt(2023, 10, 1),
        }
    }

    fn kinds(errors: &ValidationErrors, field: &str) -> Vec<ViolationKind> {
        errors
            .field_errors()
            .iter()
            .find(|(f, _)| f.to_string() == field)
            .map(|(_, errs)| {
                errs.iter()
                    .filter_map(|e| ViolationKind::from_code(&e.code))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(validate_employee(&valid(), today()).is_ok());
    }

    #[test]
    fn test_hire_date_is_optional_and_today_is_allowed() {
        let mut schema = valid();
        schema.hire_date = None;
        assert!(validate_employee(&schema, today()).is_ok());
        schema.hire_date = Some(today());
        assert!(validate_employee(&schema, today()).is_ok());
    }

    #[test]
    fn test_collects_every_failing_field() {
        let schema = EmployeeSchema {
            id: None,
            first_name: Some("".into()),
            last_name: Some("Smith".into()),
            email: Some("bad-email".into()),
            position: Some("Eng".into()),
            hire_date: today().succ_opt(),
        };
        let errors = validate_employee(&schema, today()).unwrap_err();
        let messages = field_messages(&errors);

        assert_eq!(messages.len(), 3);
        assert_eq!(kinds(&errors, "firstName"), vec![ViolationKind::Required]);
        assert_eq!(kinds(&errors, "email"), vec![ViolationKind::InvalidFormat]);
        assert_eq!(kinds(&errors, "hireDate"), vec![ViolationKind::FutureDate]);
        assert_eq!(messages["firstName"], "First name is mandatory");
        assert_eq!(messages["email"], "Email should be valid");
        assert_eq!(messages["hireDate"], "Hire date cannot be in the future");
        assert!(!messages.contains_key("position"));
        assert!(!messages.contains_key("lastName"));
    }

    #[test]
    fn test_missing_and_blank_fields_are_required() {
        let schema = EmployeeSchema {
            first_name: Some("   ".into()),
            ..Default::default()
        };
        let messages = field_messages(&validate_employee(&schema, today()).unwrap_err());
        assert_eq!(messages["firstName"], "First name is mandatory");
        assert_eq!(messages["lastName"], "Last name is mandatory");
        assert_eq!(messages["email"], "Email is mandatory");
        assert_eq!(messages["position"], "Position is mandatory");
        assert!(!messages.contains_key("hireDate"));
    }

    #[test]
    fn test_blank_email_reports_required_only() {
        let mut schema = valid();
        schema.email = Some("".into());
        let errors = validate_employee(&schema, today()).unwrap_err();
        assert_eq!(kinds(&errors, "email"), vec![ViolationKind::Required]);
    }

    #[test]
    fn test_length_limits_count_characters() {
        let mut schema = valid();
        schema.first_name = Some("é".repeat(50));
        schema.position = Some("p".repeat(100));
        assert!(validate_employee(&schema, today()).is_ok());

        schema.first_name = Some("é".repeat(51));
        schema.last_name = Some("l".repeat(51));
        schema.position = Some("p".repeat(101));
        let messages = field_messages(&validate_employee(&schema, today()).unwrap_err());
        assert_eq!(messages["firstName"], "First name must be less than 50 characters");
        assert_eq!(messages["lastName"], "Last name must be less than 50 characters");
        assert_eq!(messages["position"], "Position must be less than 100 characters");
    }

    #[test]
    fn test_last_violation_wins_per_field() {
        let mut schema = valid();
        schema.first_name = Some(" ".repeat(60));
        let errors = validate_employee(&schema, today()).unwrap_err();
        assert_eq!(
            kinds(&errors, "firstName"),
            vec![ViolationKind::Required, ViolationKind::TooLong]
        );
        assert_eq!(
            field_messages(&errors)["firstName"],
            "First name must be less than 50 characters"
        );
    }

    #[test]
    fn test_validate_payload_err() {
        let schema = EmployeeSchema::default();
        let res = validate_payload(&schema);
        match res {
            Err(ApiError::Validation { errors }) => assert_eq!(errors.len(), 4),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_payload_ok() {
        assert!(validate_payload(&valid()).is_ok());
    }
}
