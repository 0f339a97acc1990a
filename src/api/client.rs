//! HTTP client for the teams API.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use super::types::{BulkDeleteRequest, NewEmployee, NewTeam};
use crate::config::ApiConfig;
use crate::models::{Employee, Team};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unauthorized: the API rejected the bearer token")]
    Unauthorized,
    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Blocking client for the teams API.
///
/// Every request carries the configured static bearer token. Non-success
/// responses convert to `ApiError`; nothing is retried or swallowed.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        // Parse up front so a malformed URL fails here, not on first request
        Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.auth_token.clone(),
        })
    }

    /// Fetch the flat team list, with employees embedded per team.
    pub fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/teams"))
            .bearer_auth(&self.token)
            .send()?;

        Ok(Self::check(response)?.json()?)
    }

    /// Create a team. Returns the record as the API stored it.
    pub fn create_team(&self, team: &NewTeam) -> Result<Team, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/teams"))
            .bearer_auth(&self.token)
            .json(team)
            .send()?;

        Ok(Self::check(response)?.json()?)
    }

    /// Fetch all employees across teams.
    pub fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/employees"))
            .bearer_auth(&self.token)
            .send()?;

        Ok(Self::check(response)?.json()?)
    }

    /// Fetch a single employee by id. Unknown ids return `None`.
    pub fn get_employee(&self, id: &str) -> Result<Option<Employee>, ApiError> {
        let response = self
            .client
            .get(self.endpoint(&format!("/employees/{}", id)))
            .bearer_auth(&self.token)
            .send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(Self::check(response)?.json()?))
    }

    /// Create an employee. Returns the record as the API stored it.
    pub fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/employees"))
            .bearer_auth(&self.token)
            .json(employee)
            .send()?;

        Ok(Self::check(response)?.json()?)
    }

    /// Delete a single employee by id.
    pub fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/employees/{}", id)))
            .bearer_auth(&self.token)
            .send()?;

        Self::check(response)?;
        Ok(())
    }

    /// Delete a set of employees in one request.
    pub fn bulk_delete_employees(&self, ids: &[String]) -> Result<(), ApiError> {
        let request = BulkDeleteRequest {
            employee_ids: ids.to_vec(),
        };

        let response = self
            .client
            .post(self.endpoint("/employees/bulk-delete"))
            .bearer_auth(&self.token)
            .json(&request)
            .send()?;

        Self::check(response)?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert non-success responses into errors, keeping the body for
    /// the user-facing message.
    fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }
}
