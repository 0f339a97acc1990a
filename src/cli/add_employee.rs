use anyhow::{anyhow, Result};

use crate::api::{ApiClient, NewEmployee};
use crate::cli::ui::{self, prompt_field, select_team, FormResult};
use crate::forms::EmployeeForm;

/// Execute the add-employee command
///
/// With no options the interactive form runs; otherwise the options are
/// validated and submitted directly. Validation failures never reach the
/// network.
pub fn run_add_employee(
    client: &ApiClient,
    name: Option<String>,
    surname: Option<String>,
    position: Option<String>,
    team: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let all_none = name.is_none()
        && surname.is_none()
        && position.is_none()
        && team.is_none()
        && start.is_none()
        && end.is_none();

    if all_none {
        return run_interactive(client);
    }

    let form = EmployeeForm {
        name: name.unwrap_or_default(),
        surname: surname.unwrap_or_default(),
        position: position.unwrap_or_default(),
        team: team.unwrap_or_default(),
        start_date: start.unwrap_or_default(),
        end_date: end.unwrap_or_default(),
    };

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            for field_error in &errors {
                ui::error(&field_error.to_string());
            }
            return Err(anyhow!("Validation failed."));
        }
    };

    submit(client, &payload)
}

fn run_interactive(client: &ApiClient) -> Result<()> {
    // Selector options come from the current flat team list
    let teams = client.list_teams()?;
    let mut form = EmployeeForm::default();

    loop {
        form.name = match prompt_retained("name", &form.name)? {
            Some(value) => value,
            None => return cancelled(),
        };

        form.surname = match prompt_retained("surname", &form.surname)? {
            Some(value) => value,
            None => return cancelled(),
        };

        form.position = match prompt_retained("position", &form.position)? {
            Some(value) => value,
            None => return cancelled(),
        };

        form.team = match select_team("team:", &teams, "(none)")? {
            FormResult::Value(value) => value,
            FormResult::Cancelled => return cancelled(),
        };

        form.start_date = match prompt_retained("start date (YYYY-MM-DD)", &form.start_date)? {
            Some(value) => value,
            None => return cancelled(),
        };

        form.end_date = match prompt_retained("end date (YYYY-MM-DD)", &form.end_date)? {
            Some(value) => value,
            None => return cancelled(),
        };

        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                for field_error in &errors {
                    ui::error(&field_error.to_string());
                }
                // Re-prompt with the entered values retained
                continue;
            }
        };

        match submit(client, &payload) {
            Ok(()) => return Ok(()),
            Err(e) => {
                ui::error(&format!("{:#}", e));
                continue;
            }
        }
    }
}

/// Prompt a field keeping its previous value as the default.
/// Returns None when the user cancels.
fn prompt_retained(label: &str, current: &str) -> Result<Option<String>> {
    match prompt_field(label, Some(current))? {
        FormResult::Value(value) => Ok(Some(value)),
        FormResult::Cancelled => Ok(None),
    }
}

fn cancelled() -> Result<()> {
    println!("Cancelled.");
    Ok(())
}

fn submit(client: &ApiClient, payload: &NewEmployee) -> Result<()> {
    let created = client.create_employee(payload)?;
    ui::status(&format!("Created employee: {}", created.full_name()));
    Ok(())
}
