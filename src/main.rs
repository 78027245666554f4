use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fintrack::cli::{
    handle_expenses_command, handle_export_command, handle_insights_command,
    handle_setting_command, handle_transfer_command,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::logging::init_tracing;
use fintrack::storage::{validate_transfer_ids, Dataset};

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Financial insights, transfers and settings from the command line",
    long_about = "fintrack computes the figures behind a personal finance dashboard: \
                  monthly income and expense insights, an expense breakdown, a \
                  searchable list of international transfers and account settings. \
                  It reads a JSON dataset and falls back to built-in sample data."
)]
struct Cli {
    /// Dataset JSON file (defaults to dataset.json in the config directory, then sample data)
    #[arg(long, global = true, env = "FINTRACK_DATA")]
    data: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show monthly income, expenses, profit and savings rate
    Insights(fintrack::cli::InsightsArgs),

    /// Show the expense breakdown by category
    Expenses(fintrack::cli::ExpensesArgs),

    /// International transfer commands
    #[command(subcommand, alias = "transfer")]
    Transfers(fintrack::cli::TransferCommands),

    /// Account settings commands
    #[command(subcommand, alias = "setting")]
    Settings(fintrack::cli::SettingCommands),

    /// Export the dashboard snapshot or transfers
    Export(fintrack::cli::ExportArgs),

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("fintrack - personal finance dashboard in the terminal");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        println!("Run 'fintrack insights' to see the financial overview.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Wrote {}", paths.settings_file().display());
            println!();
            println!(
                "Place a dataset at {} or pass --data FILE to use your own figures.",
                paths.dataset_file().display()
            );
            return Ok(());
        }
        Commands::Config => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Dataset file:     {}", paths.dataset_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Preferences:");
            println!("  Currency:       {} ({})", settings.default_currency, settings.currency_symbol);
            println!("  Language:       {}", settings.language);
            println!("  Time zone:      {}", settings.time_zone);
            println!("  Insight period: {}", settings.insight_period);
            println!("  Date format:    {}", settings.date_format);
            return Ok(());
        }
        _ => {}
    }

    let dataset = Dataset::resolve(cli.data.as_deref(), &paths.dataset_file())?;
    validate_transfer_ids(&dataset)?;

    match command {
        Commands::Insights(args) => handle_insights_command(&dataset, &settings, args)?,
        Commands::Expenses(args) => handle_expenses_command(&dataset, &settings, args)?,
        Commands::Transfers(cmd) => handle_transfer_command(&dataset, cmd)?,
        Commands::Settings(cmd) => handle_setting_command(dataset, cmd)?,
        Commands::Export(args) => handle_export_command(&dataset, &settings, args)?,
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}
