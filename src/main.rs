use anyhow::{Context, Result as AnyhowResult};
use breaches::app::{print_all, Pager, Session, StartupError};
use breaches::config::Config;
use breaches::config_io::{CliOverrides, ConfigResolver, DirectoryContext};
use breaches::services::log_dirs;
use breaches::services::terminal_modes::{self, TerminalModes};
use breaches::services::{importer, tracing_setup, SqliteStore};
use breaches::view::TableRenderer;
use clap::{Parser, Subcommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;

/// Import person records into SQLite and browse them page by page
#[derive(Parser, Debug)]
#[command(name = "breaches")]
#[command(about = "Import colon-delimited person records and page through them", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database file (overrides the config)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: state dir)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the flat file into the database
    Import {
        /// Input file (overrides the config)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Browse stored records interactively
    View {
        /// Records per page
        #[arg(long, value_name = "N")]
        page_size: Option<usize>,
    },

    /// Write every stored record to stdout as a plain table
    Print {
        /// Records per page
        #[arg(long, value_name = "N")]
        page_size: Option<usize>,
    },

    /// Print the directories and files used by breaches
    Paths,

    /// Print the effective configuration as JSON
    Config,
}

fn resolver(args: &Args) -> AnyhowResult<ConfigResolver> {
    let dir_context = DirectoryContext::from_system()?;
    let working_dir = std::env::current_dir().unwrap_or_default();
    Ok(ConfigResolver::new(dir_context, working_dir).with_explicit_path(args.config.clone()))
}

/// Command-line flags that take precedence over the config file and environment.
fn overrides(args: &Args) -> CliOverrides {
    let mut overrides = CliOverrides {
        database: args.db.clone(),
        ..CliOverrides::default()
    };
    match &args.command {
        Commands::Import { file } => overrides.data_file = file.clone(),
        Commands::View { page_size } | Commands::Print { page_size } => {
            overrides.page_size = *page_size
        }
        Commands::Paths | Commands::Config => {}
    }
    overrides
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    resolver(args)?
        .with_overrides(overrides(args))
        .resolve()
        .context("Failed to load configuration")
}

fn run_import(config: &Config) -> AnyhowResult<()> {
    let mut store = SqliteStore::open(&config.database)
        .with_context(|| format!("Failed to open database {}", config.database.display()))?;

    let report = importer::import_file(&mut store, &config.data_file, config.delimiter)
        .with_context(|| format!("Failed to import {}", config.data_file.display()))?;

    for skipped in &report.skipped {
        eprintln!("Skipped {}", skipped);
    }
    println!("{}", report);
    Ok(())
}

fn open_for_reading(config: &Config) -> Result<SqliteStore, StartupError> {
    SqliteStore::open_existing(&config.database).map_err(StartupError::OpenStore)
}

fn run_view(config: &Config) -> AnyhowResult<()> {
    let store = open_for_reading(config)
        .with_context(|| format!("Cannot view {}", config.database.display()))?;

    // The first page is loaded before the terminal is touched
    let mut session = Session::start(store, &config.view)
        .with_context(|| format!("Cannot view {}", config.database.display()))?;

    let mut terminal_modes = TerminalModes::enable()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = session.run(&mut terminal);

    terminal_modes.undo();
    result.context("Terminal I/O failed")
}

fn run_print(config: &Config) -> AnyhowResult<()> {
    let store = open_for_reading(config)
        .with_context(|| format!("Cannot print {}", config.database.display()))?;
    let renderer = TableRenderer::from_config(&config.view);
    let mut pager = Pager::new(store, config.view.page_size);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_all(&mut pager, &renderer, &mut out)
        .with_context(|| format!("Cannot print {}", config.database.display()))?;
    Ok(())
}

fn run_dump_config(args: &Args) -> AnyhowResult<()> {
    let config = load_config(args)?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{}", json);
    Ok(())
}

fn run_show_paths(args: &Args) -> AnyhowResult<()> {
    let config_path = resolver(args)?.find_config_path();
    log_dirs::print_all_paths(config_path.as_deref());
    Ok(())
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle the informational commands early (no logging or store needed)
    match &args.command {
        Commands::Paths => return run_show_paths(&args),
        Commands::Config => return run_dump_config(&args),
        _ => {}
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if !tracing_setup::init_global(&log_file) {
        eprintln!("Warning: could not open log file {}", log_file.display());
    }

    // Clean up stale log files from dead processes on startup
    log_dirs::cleanup_stale_logs();

    tracing::info!("breaches starting: {:?}", args.command);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let config = load_config(&args)?;

    let result = match &args.command {
        Commands::Import { .. } => run_import(&config),
        Commands::View { .. } => run_view(&config),
        Commands::Print { .. } => run_print(&config),
        Commands::Paths | Commands::Config => Ok(()),
    };

    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}
