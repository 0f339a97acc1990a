//! Driver for the external teams/employees HTTP service.
//!
//! The service is the source of truth; this module only speaks its wire
//! contract. All mutations report success or failure to the caller —
//! nothing is swallowed.

mod client;
mod types;

pub use client::{ApiClient, ApiError};
pub use types::{BulkDeleteRequest, NewEmployee, NewTeam};
