use anyhow::{anyhow, Result};
use chrono::Utc;

use crate::api::ApiClient;
use crate::cli::ui::select_employee;
use crate::models::Employee;

/// Execute the show command
///
/// The identifier is tried as an employee id first, then as a name search
/// across all employees, prompting for selection on multiple matches.
pub fn run_show(client: &ApiClient, identifier: &str) -> Result<()> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    if let Some(employee) = client.get_employee(identifier)? {
        print_employee(&employee);
        return Ok(());
    }

    // Not an id, search by name
    let needle = identifier.to_lowercase();
    let matches: Vec<Employee> = client
        .list_employees()?
        .into_iter()
        .filter(|employee| employee.full_name().to_lowercase().contains(&needle))
        .collect();

    match matches.len() {
        0 => println!("No matches."),
        1 => print_employee(&matches[0]),
        _ => {
            if let Some(employee) = select_employee(&matches)? {
                print_employee(&employee);
            }
        }
    }

    Ok(())
}

fn print_employee(employee: &Employee) {
    let now = Utc::now().naive_utc();

    println!("{}", employee.full_name());
    if !employee.position.is_empty() {
        println!("  position: {}", employee.position);
    }
    if let Some(start) = employee.start_date {
        println!("  start:    {}", start.format("%Y-%m-%d"));
    }
    if let Some(end) = employee.end_date {
        println!("  end:      {}", end.format("%Y-%m-%d"));
    }
    println!("  team:     {}", employee.team_id);
    println!("  id:       {}", employee.id);
    if employee.is_inactive(now) {
        println!("  status:   inactive");
    }
}
