//! Main menu for teamcmd
//!
//! Uses inquire for clean, reliable terminal interaction.

use anyhow::{anyhow, Result};
use inquire::{Select, Text};
use std::io::{self, IsTerminal};

use crate::api::ApiClient;
use crate::cli::ui::{clear_screen, minimal_render_config};
use crate::cli::{run_add_employee, run_add_team, run_delete, run_employees, run_show, run_tree};

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Tree,
    Employees,
    Show,
    AddTeam,
    AddEmployee,
    Delete,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::Tree,
        MenuOption::Employees,
        MenuOption::Show,
        MenuOption::AddTeam,
        MenuOption::AddEmployee,
        MenuOption::Delete,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::Tree => "Tree",
            MenuOption::Employees => "Employees",
            MenuOption::Show => "Show",
            MenuOption::AddTeam => "Add Team",
            MenuOption::AddEmployee => "Add Employee",
            MenuOption::Delete => "Delete",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// Run the interactive main menu
pub fn run_menu(client: &ApiClient) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            teamcmd tree\n  \
            teamcmd employees\n  \
            teamcmd add-team --name <name>\n  \
            Run 'teamcmd --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        // Clear screen - if this fails, continue anyway (degraded but functional)
        let _ = clear_screen();

        let selection = Select::new("teamcmd", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Handle prompt errors (Ctrl+C, terminal issues) - exit gracefully
        let selection = match selection {
            Ok(sel) => sel,
            Err(_) => return Ok(()),
        };

        let Some(choice_label) = selection else {
            // User pressed Escape
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            // Should never happen with type-safe menu, but handle gracefully
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        // Execute the flow - errors are caught, shown, and return to the menu
        match execute_command(client, choice) {
            Ok(()) => wait_for_continue(),
            Err(e) => {
                eprintln!("\nError: {}", e);
                wait_for_continue();
            }
        }
    }
}

/// Execute a menu command, catching all errors
fn execute_command(client: &ApiClient, choice: MenuOption) -> Result<()> {
    match choice {
        MenuOption::Tree => run_tree(client),
        MenuOption::Employees => run_employees(client, false),
        MenuOption::Show => {
            let identifier = prompt_for_input("name or id: ")?;
            if identifier.is_empty() {
                return Ok(());
            }
            run_show(client, &identifier)
        }
        MenuOption::AddTeam => run_add_team(client, None, None),
        MenuOption::AddEmployee => run_add_employee(client, None, None, None, None, None, None),
        MenuOption::Delete => run_delete(client, Vec::new(), false),
        MenuOption::Quit => Ok(()),
    }
}

/// Prompt for text input, returning empty string on cancel
fn prompt_for_input(label: &str) -> Result<String> {
    let result = Text::new(label)
        .with_render_config(minimal_render_config())
        .prompt_skippable()?;
    Ok(result.unwrap_or_default())
}

/// Wait for user to press enter to continue
fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_option_roundtrip() {
        for opt in MenuOption::ALL {
            let label = opt.label();
            let recovered = MenuOption::from_label(label);
            assert_eq!(recovered, Some(*opt), "Failed roundtrip for {:?}", opt);
        }
    }

    #[test]
    fn test_menu_option_from_invalid_label() {
        assert_eq!(MenuOption::from_label("Invalid"), None);
        assert_eq!(MenuOption::from_label(""), None);
    }

    #[test]
    fn test_menu_option_all_has_correct_count() {
        assert_eq!(MenuOption::ALL.len(), 7);
    }
}
