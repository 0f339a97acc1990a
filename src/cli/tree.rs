use anyhow::Result;
use chrono::Utc;

use crate::api::ApiClient;
use crate::cli::display::render_forest;
use crate::tree::build_forest;

/// Execute the tree command: fetch the flat team list, build the forest,
/// and print it with employees nested under their teams.
pub fn run_tree(client: &ApiClient) -> Result<()> {
    let teams = client.list_teams()?;

    if teams.is_empty() {
        println!("No teams.");
        return Ok(());
    }

    let forest = build_forest(&teams)?;
    print!("{}", render_forest(&forest, Utc::now().naive_utc()));

    Ok(())
}
