use anyhow::{anyhow, Result};

use crate::api::{ApiClient, NewTeam};
use crate::cli::ui::{self, prompt_field, select_team, FormResult};
use crate::forms::TeamForm;

/// Execute the add-team command
///
/// With no options the interactive form runs; otherwise the options are
/// validated and submitted directly.
pub fn run_add_team(
    client: &ApiClient,
    name: Option<String>,
    parent: Option<String>,
) -> Result<()> {
    if name.is_none() && parent.is_none() {
        return run_interactive(client);
    }

    let form = TeamForm {
        name: name.unwrap_or_default(),
        parent_team: parent.unwrap_or_default(),
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
    let mut form = TeamForm::default();

    loop {
        form.name = match prompt_field("name", Some(form.name.as_str()))? {
            FormResult::Value(value) => value,
            FormResult::Cancelled => {
                println!("Cancelled.");
                return Ok(());
            }
        };

        form.parent_team = match select_team("parent team:", &teams, "(none)")? {
            FormResult::Value(value) => value,
            FormResult::Cancelled => {
                println!("Cancelled.");
                return Ok(());
            }
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

fn submit(client: &ApiClient, payload: &NewTeam) -> Result<()> {
    let created = client.create_team(payload)?;
    ui::status(&format!("Created team: {}", created.name));
    Ok(())
}
