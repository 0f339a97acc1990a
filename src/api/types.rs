//! Request payloads for the teams API.
//!
//! Keys are the API's snake_case names. Optional fields serialize as
//! explicit `null`, never as an empty string; the form layer performs that
//! conversion before a payload is constructed.

use chrono::NaiveDate;
use serde::Serialize;

/// Body for `POST /teams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTeam {
    pub name: String,
    pub parent_team_id: Option<String>,
}

/// Body for `POST /employees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub surname: String,
    pub position: String,
    pub team_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Body for `POST /employees/bulk-delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDeleteRequest {
    pub employee_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_team_without_parent_serializes_null() {
        let team = NewTeam {
            name: "Engineering".to_string(),
            parent_team_id: None,
        };
        assert_eq!(
            serde_json::to_value(&team).unwrap(),
            json!({"name": "Engineering", "parent_team_id": null})
        );
    }

    #[test]
    fn test_new_team_with_parent() {
        let team = NewTeam {
            name: "Platform".to_string(),
            parent_team_id: Some("t1".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&team).unwrap(),
            json!({"name": "Platform", "parent_team_id": "t1"})
        );
    }

    #[test]
    fn test_new_employee_dates_as_iso_days() {
        let employee = NewEmployee {
            name: "Jan".to_string(),
            surname: "Novak".to_string(),
            position: "Developer".to_string(),
            team_id: "t1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 15),
            end_date: None,
        };
        assert_eq!(
            serde_json::to_value(&employee).unwrap(),
            json!({
                "name": "Jan",
                "surname": "Novak",
                "position": "Developer",
                "team_id": "t1",
                "start_date": "2023-01-15",
                "end_date": null
            })
        );
    }

    #[test]
    fn test_bulk_delete_request_shape() {
        let request = BulkDeleteRequest {
            employee_ids: vec!["e1".to_string(), "e2".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"employee_ids": ["e1", "e2"]})
        );
    }
}
