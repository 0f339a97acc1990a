use clap::Parser;
use teamcmd::api::ApiClient;
use teamcmd::cli::{
    run_add_employee, run_add_team, run_delete, run_employees, run_menu, run_show, run_tree, Cli,
    Commands,
};
use teamcmd::config::ApiConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ApiConfig::resolve(cli.api_url, cli.token)?;
    let client = ApiClient::new(&config)?;

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu(&client)?;
        }
        Some(Commands::Tree) => {
            run_tree(&client)?;
        }
        Some(Commands::Employees(args)) => {
            run_employees(&client, args.inactive)?;
        }
        Some(Commands::Show(args)) => {
            run_show(&client, &args.identifier)?;
        }
        Some(Commands::AddTeam(args)) => {
            run_add_team(&client, args.name, args.parent)?;
        }
        Some(Commands::AddEmployee(args)) => {
            run_add_employee(
                &client,
                args.name,
                args.surname,
                args.position,
                args.team,
                args.start,
                args.end,
            )?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&client, args.ids, args.yes)?;
        }
    }

    Ok(())
}
