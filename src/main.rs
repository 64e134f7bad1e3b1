//! conbrowse - Entry Point

use clap::{Parser, ValueEnum};
use conbrowse::config::ResolvedConfig;
use conbrowse::format::{ConsumableTable, PersonnelTable, SeriesTable, TableFormatter};
use conbrowse::model::{Consumable, Personnel, Record, Series};
use conbrowse::view::{Browser, ColorConfig};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Which record list to browse.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// Consumables (books, shows, games...)
    Consumable,
    /// Series grouping consumables
    Series,
    /// People credited on consumables
    Personnel,
}

/// conbrowse - browse and select tracker records in the terminal
#[derive(Parser, Debug)]
#[command(name = "conbrowse")]
#[command(version)]
#[command(about = "Keyboard-driven terminal browser for consumption tracker records")]
#[command(
    after_help = "Selected record IDs are printed to stdout, one per line, after quitting."
)]
pub struct Args {
    /// Kind of records in the input
    #[arg(value_enum)]
    pub list: ListKind,

    /// JSON file holding an array of records (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// strftime format for consumable start/end dates
    #[arg(long)]
    pub date_format: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = conbrowse::config::load_config_with_precedence(args.config.clone())?;
        let merged = conbrowse::config::merge_config(config_file);
        let with_env = conbrowse::config::apply_env_overrides(merged);
        let no_color_override = if args.no_color { Some(true) } else { None };
        conbrowse::config::apply_cli_overrides(
            with_env,
            args.date_format.clone(),
            no_color_override,
        )
    };
    conbrowse::config::validate_config(&config)?;

    conbrowse::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        list = ?args.list,
        "Configuration loaded and resolved"
    );

    let file = args.file.as_deref();
    match args.list {
        ListKind::Consumable => {
            let formatter = ConsumableTable::new(config.date_format.clone())
                .with_name_width(config.name_width);
            browse::<Consumable>(file, formatter, &config)
        }
        ListKind::Series => browse::<Series>(file, SeriesTable, &config),
        ListKind::Personnel => browse::<Personnel>(file, PersonnelTable, &config),
    }
}

/// Load the records, run the browser, print the selection.
fn browse<R>(
    file: Option<&Path>,
    formatter: impl TableFormatter<R> + 'static,
    config: &ResolvedConfig,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: Record + DeserializeOwned + 'static,
{
    let records: Vec<R> = conbrowse::source::load_records(file)?;

    let state = Browser::new(records, formatter)
        .with_bindings(config.keybindings.clone())
        .with_color(ColorConfig::from_env_and_args(config.no_color))
        .run()?;

    for id in state.selected_ids() {
        println!("{id}");
    }
    Ok(())
}
