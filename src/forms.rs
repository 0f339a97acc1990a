//! Form state and validation for the creation flows.
//!
//! A form holds raw field values exactly as entered; the empty string means
//! "no value". `validate` either yields the typed wire payload or the list
//! of field-level errors — the conversion from empty strings to explicit
//! absent wire values happens here and nowhere else.

use std::fmt;

use chrono::NaiveDate;

use crate::api::{NewEmployee, NewTeam};

/// Date entry format for the employment fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validation failure attached to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input for the team creation form.
#[derive(Debug, Clone, Default)]
pub struct TeamForm {
    pub name: String,
    /// Parent team id; empty means "no parent".
    pub parent_team: String,
}

impl TeamForm {
    pub fn validate(&self) -> Result<NewTeam, Vec<FieldError>> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(vec![FieldError::new("name", "Name is required")]);
        }

        Ok(NewTeam {
            name: name.to_string(),
            parent_team_id: optional(&self.parent_team),
        })
    }
}

/// Input for the employee creation form.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub surname: String,
    pub position: String,
    /// Owning team id; empty means "no team selected".
    pub team: String,
    /// `YYYY-MM-DD` or empty.
    pub start_date: String,
    /// `YYYY-MM-DD` or empty.
    pub end_date: String,
}

impl EmployeeForm {
    pub fn validate(&self) -> Result<NewEmployee, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }

        let surname = self.surname.trim();
        if surname.is_empty() {
            errors.push(FieldError::new("surname", "Surname is required"));
        }

        let start_date = match optional_date(&self.start_date, "start_date") {
            Ok(date) => date,
            Err(error) => {
                errors.push(error);
                None
            }
        };

        let end_date = match optional_date(&self.end_date, "end_date") {
            Ok(date) => date,
            Err(error) => {
                errors.push(error);
                None
            }
        };

        // Cross-field rule: an employment period cannot end before it starts
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                errors.push(FieldError::new(
                    "end_date",
                    "End date can't be before start date",
                ));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEmployee {
            name: name.to_string(),
            surname: surname.to_string(),
            position: self.position.trim().to_string(),
            team_id: self.team.trim().to_string(),
            start_date,
            end_date,
        })
    }
}

/// Empty or whitespace-only input maps to an explicit absent value.
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn optional_date(value: &str, field: &'static str) -> Result<Option<NaiveDate>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FieldError::new(field, format!("Invalid date '{}' (expected YYYY-MM-DD)", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_form() -> EmployeeForm {
        EmployeeForm {
            name: "Jan".to_string(),
            surname: "Novak".to_string(),
            position: "Developer".to_string(),
            team: "t1".to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_team_name_required() {
        let form = TeamForm {
            name: "  ".to_string(),
            parent_team: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["name"]);
    }

    #[test]
    fn test_team_without_parent_maps_to_none() {
        let form = TeamForm {
            name: "Engineering".to_string(),
            parent_team: String::new(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Engineering");
        assert_eq!(payload.parent_team_id, None);
    }

    #[test]
    fn test_team_any_parent_value_passes() {
        let form = TeamForm {
            name: "Platform".to_string(),
            parent_team: "t1".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.parent_team_id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_employee_required_fields() {
        let form = EmployeeForm {
            name: String::new(),
            surname: String::new(),
            ..employee_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["name", "surname"]);
    }

    #[test]
    fn test_employee_only_names_required() {
        let form = EmployeeForm {
            position: String::new(),
            team: String::new(),
            ..employee_form()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.position, "");
        assert_eq!(payload.team_id, "");
        assert_eq!(payload.start_date, None);
        assert_eq!(payload.end_date, None);
    }

    #[test]
    fn test_employee_end_before_start_fails_on_end_date() {
        let form = EmployeeForm {
            start_date: "2024-01-01".to_string(),
            end_date: "2023-12-31".to_string(),
            ..employee_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "end_date");
        assert_eq!(errors[0].message, "End date can't be before start date");
    }

    #[test]
    fn test_employee_equal_dates_pass() {
        let form = EmployeeForm {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-01".to_string(),
            ..employee_form()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.start_date, payload.end_date);
    }

    #[test]
    fn test_employee_malformed_date_fails_on_that_field() {
        let form = EmployeeForm {
            start_date: "01/15/2024".to_string(),
            ..employee_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["start_date"]);
    }

    #[test]
    fn test_employee_both_dates_malformed() {
        let form = EmployeeForm {
            start_date: "soon".to_string(),
            end_date: "later".to_string(),
            ..employee_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["start_date", "end_date"]);
    }

    #[test]
    fn test_employee_dates_convert_to_payload() {
        let form = EmployeeForm {
            start_date: "2023-01-15".to_string(),
            end_date: "2023-12-31".to_string(),
            ..employee_form()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.start_date, NaiveDate::from_ymd_opt(2023, 1, 15));
        assert_eq!(payload.end_date, NaiveDate::from_ymd_opt(2023, 12, 31));
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError::new("name", "Name is required");
        assert_eq!(error.to_string(), "name: Name is required");
    }
}
