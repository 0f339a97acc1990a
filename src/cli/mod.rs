use clap::{Args, Parser, Subcommand};

pub mod add_employee;
pub mod add_team;
pub mod delete;
pub mod display;
pub mod list;
pub mod menu;
pub mod show;
pub mod tree;
pub mod ui;

pub use add_employee::run_add_employee;
pub use add_team::run_add_team;
pub use delete::run_delete;
pub use list::run_employees;
pub use menu::run_menu;
pub use show::run_show;
pub use tree::run_tree;

#[derive(Parser)]
#[command(name = "teamcmd")]
#[command(about = "Team and employee administration for the command line")]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides TEAMCMD_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// API bearer token (overrides TEAMCMD_API_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the team hierarchy with employees
    Tree,
    /// List employees across all teams
    Employees(EmployeesArgs),
    /// Show full details for an employee
    Show(ShowArgs),
    /// Add a new team
    AddTeam(AddTeamArgs),
    /// Add a new employee
    AddEmployee(AddEmployeeArgs),
    /// Delete employees by id or by selection
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct EmployeesArgs {
    /// Only show employees whose end date has passed
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Employee id or name
    pub identifier: String,
}

#[derive(Args)]
pub struct AddTeamArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    /// Parent team id
    #[arg(short, long)]
    pub parent: Option<String>,
}

#[derive(Args)]
pub struct AddEmployeeArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub surname: Option<String>,
    #[arg(short, long)]
    pub position: Option<String>,
    /// Owning team id
    #[arg(short, long)]
    pub team: Option<String>,
    /// Employment start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    /// Employment end date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Employee ids to delete; prompts for selection when omitted
    pub ids: Vec<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}
