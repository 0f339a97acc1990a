//! Shared UI primitives for teamcmd
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `name: `
//! - Feedback: single short line: `Created team: Engineering`
//! - Every mutation reports success or failure; nothing is swallowed

use anyhow::Result;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, InquireError, Select, Text};
use std::io::{self, Write};

use crate::models::{Employee, Team};

/// Result type for form inputs that can be cancelled
pub enum FormResult<T> {
    Value(T),
    Cancelled,
}

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Print a status message to stdout
#[inline]
pub fn status(msg: &str) {
    println!("{}", msg);
}

/// Print an error message to stderr
#[inline]
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

/// Prompt for a field with optional current value
/// Format: `field [current]: ` or `field: ` if no current value
/// Empty input keeps the current value
pub fn prompt_field(field: &str, current: Option<&str>) -> Result<FormResult<String>> {
    let prompt = match current {
        Some(value) if !value.is_empty() => format!("{} [{}]: ", field, value),
        _ => format!("{}: ", field),
    };

    let result = Text::new(&prompt)
        .with_render_config(minimal_render_config())
        .prompt();

    match result {
        Ok(input) => {
            let input = input.trim();
            if input.is_empty() {
                Ok(FormResult::Value(current.unwrap_or("").to_string()))
            } else {
                Ok(FormResult::Value(input.to_string()))
            }
        }
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt()?;
    Ok(result)
}

/// Team selector populated from the flat team list.
///
/// The first entry means "no team" and yields an empty id, matching the
/// form convention that empty means absent.
pub fn select_team(prompt: &str, teams: &[Team], none_label: &str) -> Result<FormResult<String>> {
    let mut options: Vec<String> = Vec::with_capacity(teams.len() + 1);
    options.push(none_label.to_string());
    options.extend(teams.iter().map(|team| team.name.clone()));

    let result = Select::new(prompt, options)
        .with_render_config(minimal_render_config())
        .with_vim_mode(true)
        .prompt_skippable();

    match result {
        Ok(Some(selected)) => {
            if selected == none_label {
                return Ok(FormResult::Value(String::new()));
            }
            let id = teams
                .iter()
                .find(|team| team.name == selected)
                .map(|team| team.id.clone())
                .unwrap_or_default();
            Ok(FormResult::Value(id))
        }
        Ok(None) => Ok(FormResult::Cancelled),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Display an employee selection menu using inquire Select
/// Returns the selected Employee or None if cancelled
pub fn select_employee(employees: &[Employee]) -> Result<Option<Employee>> {
    if employees.is_empty() {
        return Ok(None);
    }

    // Single match goes directly through (no selection needed)
    if employees.len() == 1 {
        return Ok(Some(employees[0].clone()));
    }

    let options: Vec<String> = employees
        .iter()
        .map(|employee| format!("{} [{}]", employee.full_name(), employee.id))
        .collect();

    let result = Select::new("Select:", options.clone())
        .with_render_config(minimal_render_config())
        .with_vim_mode(true)
        .prompt_skippable()?;

    match result {
        Some(selected) => {
            let idx = options
                .iter()
                .position(|option| *option == selected)
                .unwrap_or(0);
            Ok(Some(employees[idx].clone()))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_render_config() {
        let config = minimal_render_config();
        // Just verify it doesn't panic
        let _ = config;
    }
}
