// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

// Use library instead of local modules
use vex_inventory::{logging, visible_parts, Catalog, CategorySelector, PartDefinition};

#[derive(Parser, Debug)]
#[command(name = "vex-inventory", version, about = "Track the VEX robotics parts your team owns")]
struct Cli {
    /// Write logs to this file (the interactive UI never logs to the terminal)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive inventory tracker (default)
    Ui,
    /// Print the parts catalog, optionally filtered
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// All, Structure, Motion, Electronics, Pneumatics or Hardware
    #[arg(long, default_value = "All")]
    category: CategorySelector,

    /// Case-insensitive text matched against part names and part numbers
    #[arg(long, default_value = "")]
    search: String,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Catalog(args)) => {
            match &cli.log_file {
                Some(path) => logging::init_file(path, cli.verbose)?,
                None => logging::init_stderr(cli.verbose),
            }
            run_catalog(&args)?;
        }
        Some(Command::Ui) | None => {
            if let Some(path) = &cli.log_file {
                logging::init_file(path, cli.verbose)?;
            }
            run_ui_mode()?;
        }
    }

    Ok(())
}

fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let parts = visible_parts(&catalog, args.category, &args.search);
    info!(category = %args.category, search = %args.search, matches = parts.len(), "catalog query");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
        return Ok(());
    }

    print_catalog_table(&parts);
    Ok(())
}

fn print_catalog_table(parts: &[&PartDefinition]) {
    if parts.is_empty() {
        println!("No parts match.");
        return;
    }

    println!(
        "{:<4} {:<26} {:<10} {:<12} {}",
        "ID", "Name", "Part #", "Category", "Description"
    );
    println!("{}", "─".repeat(84));
    for part in parts {
        println!(
            "{:<4} {:<26} {:<10} {:<12} {}",
            part.id, part.name, part.part_number, part.category, part.description
        );
    }
    println!("\n{} part(s)", parts.len());
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    let catalog = Catalog::builtin()?;
    info!(parts = catalog.len(), version = vex_inventory::VERSION, "starting tracker UI");

    let mut app = ui::App::new(catalog);
    ui::run_ui(&mut app)?;

    info!(total = app.session.total_count(), "tracker UI closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or list parts: vex-inventory catalog");
    std::process::exit(1);
}
