use anyhow::Result;
use chrono::Utc;

use crate::api::ApiClient;
use crate::cli::display::format_employee_line;

/// Execute the employees command: list all employees across teams, one per
/// line with id, optionally filtered to inactive ones.
pub fn run_employees(client: &ApiClient, inactive_only: bool) -> Result<()> {
    let employees = client.list_employees()?;
    let now = Utc::now().naive_utc();

    let mut shown = 0;
    for employee in &employees {
        if inactive_only && !employee.is_inactive(now) {
            continue;
        }
        println!("{}  {}", employee.id, format_employee_line(employee, now));
        shown += 1;
    }

    if shown == 0 {
        println!("No employees.");
    }

    Ok(())
}
