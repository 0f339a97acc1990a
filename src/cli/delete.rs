use std::fmt;

use anyhow::{Context, Result};
use chrono::Utc;
use inquire::MultiSelect;

use crate::api::ApiClient;
use crate::cli::display::format_employee_line;
use crate::cli::ui::{self, minimal_render_config};

/// Execute the delete command
///
/// With explicit ids the confirmation prompt runs directly; with none, the
/// employee list is fetched for multi-selection. A failed delete is
/// reported like any other mutation.
pub fn run_delete(client: &ApiClient, ids: Vec<String>, yes: bool) -> Result<()> {
    if ids.is_empty() {
        return run_interactive(client, yes);
    }

    delete_with_confirm(client, &ids, yes)
}

/// One selectable row in the multi-select list.
struct EmployeeChoice {
    id: String,
    label: String,
}

impl fmt::Display for EmployeeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn run_interactive(client: &ApiClient, yes: bool) -> Result<()> {
    let employees = client.list_employees()?;

    if employees.is_empty() {
        println!("No employees.");
        return Ok(());
    }

    let now = Utc::now().naive_utc();
    let choices: Vec<EmployeeChoice> = employees
        .iter()
        .map(|employee| EmployeeChoice {
            id: employee.id.clone(),
            label: format_employee_line(employee, now),
        })
        .collect();

    let selected = MultiSelect::new("Select employees to delete:", choices)
        .with_render_config(minimal_render_config())
        .with_vim_mode(true)
        .prompt_skippable()?;

    let Some(selected) = selected else {
        return Ok(());
    };

    if selected.is_empty() {
        println!("Nothing selected.");
        return Ok(());
    }

    let ids: Vec<String> = selected.into_iter().map(|choice| choice.id).collect();
    delete_with_confirm(client, &ids, yes)
}

fn delete_with_confirm(client: &ApiClient, ids: &[String], yes: bool) -> Result<()> {
    let label = if ids.len() == 1 { "employee" } else { "employees" };

    if !yes {
        let confirmed = ui::confirm(&format!("Delete {} selected {}?", ids.len(), label))?;
        if !confirmed {
            return Ok(());
        }
    }

    // Single deletes use the dedicated endpoint; sets go through bulk-delete
    if let [id] = ids {
        client
            .delete_employee(id)
            .with_context(|| format!("Failed to delete employee {}", id))?;
    } else {
        client
            .bulk_delete_employees(ids)
            .context("Failed to delete selected employees")?;
    }

    ui::status(&format!("Deleted {} {}.", ids.len(), label));
    Ok(())
}
