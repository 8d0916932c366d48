//! CLI entry point for browsing hierarchical location listings.
//!
//! This binary drives the locnav screen controller against a JSON-backed
//! dataset, mirroring how a UI shell would: intents in, view-model out.
//!
//! # Usage
//!
//! ```bash
//! locnav [OPTIONS] <COMMAND>
//!
//! # Root listing, filtered by name
//! locnav list --data locations.json --filter name=Tehran
//!
//! # Children of one location
//! locnav children 42 --data locations.json
//!
//! # Drill down a path and show the breadcrumb trail
//! locnav drill 42 7 --data locations.json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use locnav_controller::{Intent, LocationService, LookupCache, ScreenDriver, ViewState};
use locnav_core::{Config, FilterCriteria, LocationId};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod data;

use data::JsonDataService;

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// CLI for browsing hierarchical location listings.
///
/// Loads a JSON dataset and runs the navigation/query controller over it,
/// printing the view-model a UI would render.
#[derive(Parser)]
#[command(name = "locnav", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to the JSON dataset file.
    #[arg(short, long, global = true, env = "LOCNAV_DATA")]
    data: Option<Utf8PathBuf>,

    /// Path to an optional JSON configuration file.
    #[arg(short, long, global = true, env = "LOCNAV_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the root listing, optionally filtered.
    List {
        /// Filter criteria as key=value (repeatable; keys per the schema).
        #[arg(short, long)]
        filter: Vec<String>,
    },

    /// List the children of a location.
    Children {
        /// Identifier of the parent location.
        id: String,
    },

    /// Drill down a path of location ids and show the resulting screen.
    Drill {
        /// Location ids, outermost first.
        ids: Vec<String>,
    },

    /// Dump the levels reference table.
    Levels,

    /// Dump the users reference table.
    Users,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},tokio=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds a [`Config`] from CLI arguments.
///
/// Loads the configuration file if one was given, then applies the
/// dataset path override.
///
/// # Errors
///
/// Returns an error if the configuration or dataset path is missing or
/// invalid.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load configuration: {}", e))?,
        None => Config::default(),
    };

    if let Some(data) = &cli.data {
        config.service.dataset_path = data.clone();
    }

    if config.service.dataset_path.as_str().is_empty() {
        return Err(color_eyre::eyre::eyre!(
            "Dataset path is required (use --data or LOCNAV_DATA)."
        ));
    }
    if !config.service.dataset_path.exists() {
        return Err(color_eyre::eyre::eyre!(
            "Dataset file does not exist: {}",
            config.service.dataset_path
        ));
    }

    Ok(config)
}

/// Parses repeatable `key=value` filter arguments into criteria.
///
/// # Errors
///
/// Returns an error for arguments without a `=` separator.
fn parse_filter_args(args: &[String]) -> color_eyre::Result<FilterCriteria> {
    let mut criteria = FilterCriteria::default();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(color_eyre::eyre::eyre!(
                "Invalid filter '{arg}': expected key=value"
            ));
        };
        criteria.insert(key.to_owned(), value.to_owned());
    }
    Ok(criteria)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the root listing through the screen controller.
async fn run_list(config: &Config, filter_args: &[String]) -> color_eyre::Result<()> {
    let criteria = parse_filter_args(filter_args)?;
    let service = JsonDataService::load(&config.service.dataset_path)?;

    let mut driver = ScreenDriver::new(service, config);
    driver.startup();
    for (key, value) in &criteria {
        driver.handle(Intent::SetFilterField {
            key: key.clone(),
            value: value.clone(),
        });
    }
    if !criteria.is_empty() {
        driver.handle(Intent::SubmitFilter);
    }
    driver
        .run_until_idle()
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Driver failed: {}", e))?;

    print_view(&driver.view())?;
    Ok(())
}

/// Lists the children of one location, joined with the lookups.
async fn run_children(config: &Config, id: &str) -> color_eyre::Result<()> {
    let service = JsonDataService::load(&config.service.dataset_path)?;

    let mut cache = LookupCache::new();
    cache.load_levels(service.fetch_levels().await);
    cache.load_users(service.fetch_users().await);

    let rows = service
        .fetch_children(LocationId::new(id), FilterCriteria::default())
        .await
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let joined = locnav_controller::join(&rows, &cache).unwrap_or_default();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "Children of {id} ({}):", joined.len())?;
    print_rows(&mut handle, &joined)?;
    Ok(())
}

/// Drills down a path of ids and prints the resulting screen state.
async fn run_drill(config: &Config, ids: &[String]) -> color_eyre::Result<()> {
    let service = JsonDataService::load(&config.service.dataset_path)?;

    let mut driver = ScreenDriver::new(service, config);
    driver.startup();
    driver
        .run_until_idle()
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Driver failed: {}", e))?;

    for id in ids {
        let before = driver.view().breadcrumb_trail.len();
        driver.handle(Intent::SelectRow(LocationId::new(id.as_str())));
        driver
            .run_until_idle()
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Driver failed: {}", e))?;

        if driver.view().breadcrumb_trail.len() == before {
            return Err(color_eyre::eyre::eyre!(
                "Location {id} is not in the current listing."
            ));
        }
        info!(%id, "Drilled in");
    }

    print_view(&driver.view())?;
    Ok(())
}

/// Dumps a reference table.
async fn run_reference(config: &Config, levels: bool) -> color_eyre::Result<()> {
    let service = JsonDataService::load(&config.service.dataset_path)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if levels {
        for level in service.fetch_levels().await? {
            writeln!(handle, "{:<10} {}", level.id, level.name)?;
        }
    } else {
        for user in service.fetch_users().await? {
            writeln!(handle, "{:<10} {}", user.id, user.full_name)?;
        }
    }
    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints the full view-model: breadcrumbs, banner, and rows.
fn print_view(view: &ViewState) -> color_eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if view.breadcrumb_trail.is_empty() {
        writeln!(handle, "Location: (root)")?;
    } else {
        let trail: Vec<&str> = view
            .breadcrumb_trail
            .iter()
            .map(|b| b.display_name.as_str())
            .collect();
        writeln!(handle, "Location: {}", trail.join(" > "))?;
    }

    if let Some(error) = &view.error {
        writeln!(handle, "Error: {error}")?;
    }

    writeln!(handle)?;
    print_rows(&mut handle, &view.rows)?;

    if view.rows.is_empty() && !view.loading && view.error.is_none() {
        writeln!(handle, "No locations match.")?;
    }
    Ok(())
}

/// Prints joined rows as an aligned table.
fn print_rows(handle: &mut impl Write, rows: &[locnav_core::LocationRow]) -> std::io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    writeln!(
        handle,
        "{:<20} {:<22} {:<16} {:<18} {:>10} {:>10}",
        "Name", "Manager", "Parent", "Level", "X", "Y"
    )?;
    for row in rows {
        writeln!(
            handle,
            "{:<20} {:<22} {:<16} {:<18} {:>10.4} {:>10.4}",
            row.record.name,
            row.manager_name,
            row.record.parent_location.as_deref().unwrap_or("-"),
            row.level_name,
            row.record.location_x,
            row.record.location_y,
        )?;
    }
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    let config = build_config(&cli)?;

    match &cli.command {
        Commands::List { filter } => run_list(&config, filter).await,
        Commands::Children { id } => run_children(&config, id).await,
        Commands::Drill { ids } => run_drill(&config, ids).await,
        Commands::Levels => run_reference(&config, true).await,
        Commands::Users => run_reference(&config, false).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_args() {
        let criteria =
            parse_filter_args(&["name=Tehran".to_owned(), "CIAM=42".to_owned()]).unwrap();
        assert_eq!(criteria.get("name").map(String::as_str), Some("Tehran"));
        assert_eq!(criteria.get("CIAM").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_parse_filter_args_rejects_missing_separator() {
        assert!(parse_filter_args(&["name".to_owned()]).is_err());
    }

    #[test]
    fn test_parse_filter_args_keeps_value_equals() {
        let criteria = parse_filter_args(&["name=a=b".to_owned()]).unwrap();
        assert_eq!(criteria.get("name").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_cli_parses_drill_command() {
        let cli = Cli::parse_from(["locnav", "drill", "42", "7", "--data", "x.json"]);
        match cli.command {
            Commands::Drill { ids } => assert_eq!(ids, ["42", "7"]),
            _ => panic!("expected drill command"),
        }
    }
}
