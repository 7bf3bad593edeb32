//! menav-bookmarks - import browser bookmarks into a MeNav site.

mod bookmark;
mod cli;
mod config;
mod generator;
mod logger;
mod nav;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, import::ImportOutcome};
use config::ImportConfig;
use nav::NavSkipReason;
use utils::plural::{plural_count, plural_count_with};

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ImportConfig::load(&cli)?;
    config.log_paths();

    match cli::import::run_import(&config)? {
        ImportOutcome::NoSource => log!("import"; "nothing to import"),
        ImportOutcome::NoCategories { source } => {
            debug!("import"; "{} left nothing to write", config.display_path(&source));
        }
        ImportOutcome::Imported(report) => {
            if report.init.initialized
                && let Some(defaults) = &report.init.source
            {
                debug!("import"; "user config initialized from {}", config.display_path(defaults));
            }
            debug!(
                "import";
                "site.yml: {:?}, navigation: {}",
                report.site_file,
                report.nav.reason().map_or("added", NavSkipReason::code)
            );
            log!(
                "import";
                "done: {} -> {} ({}, {})",
                config.display_path(&report.source),
                config.display_path(&report.output),
                plural_count_with(report.categories, "category", "categories"),
                plural_count(report.sites, "site")
            );
        }
    }
    Ok(())
}
