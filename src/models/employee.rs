use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An employee record as returned by the API.
///
/// Ids are opaque strings minted by the service. `start_date` and `end_date`
/// bound the employment period; either may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub position: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    pub team_id: String,
}

impl Employee {
    /// Full display name: "Name Surname"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// An employee is inactive once their end date has passed.
    /// An end date exactly at `now` still counts as active.
    pub fn is_inactive(&self, now: NaiveDateTime) -> bool {
        match self.end_date {
            Some(end) => end < now,
            None => false,
        }
    }
}
