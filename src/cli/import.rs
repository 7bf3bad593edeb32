//! Bookmark import: export file to page document and navigation entry.
//!
//! # Steps
//!
//! 1. pick the newest export in the bookmarks directory
//! 2. parse it into categories
//! 3. bootstrap the user config directory from the defaults
//! 4. write `<user>/pages/bookmarks.yml`
//! 5. register the bookmarks page in `<user>/site.yml`
//!
//! A missing export or an export without categories stops the import
//! before anything is written.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::bookmark::{latest_bookmark_file, parse_bookmarks};
use crate::config::ImportConfig;
use crate::generator::{BookmarksPage, PageHeader, render_page, write_generated};
use crate::nav::{
    InitOutcome, NavSkipReason, NavUpdate, SiteFileOrigin, ensure_user_config_initialized,
    ensure_user_site_yml, upsert_bookmarks_nav,
};
use crate::utils::date::DateTimeUtc;
use crate::{debug, log};

/// What an import run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// No export file was found.
    NoSource,
    /// The export contained no categories; nothing was written.
    NoCategories { source: PathBuf },
    Imported(ImportReport),
}

/// Details of a completed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub categories: usize,
    pub sites: usize,
    pub init: InitOutcome,
    pub site_file: SiteFileOrigin,
    pub nav: NavUpdate,
}

/// Run one import with the given configuration.
pub fn run_import(config: &ImportConfig) -> Result<ImportOutcome> {
    let Some(source) = latest_bookmark_file(&config.bookmarks_dir())? else {
        return Ok(ImportOutcome::NoSource);
    };

    let html = fs::read_to_string(&source)
        .with_context(|| format!("Failed to read bookmark export '{}'", source.display()))?;
    debug!("import"; "read {} bytes from {}", html.len(), config.display_path(&source));

    let document = parse_bookmarks(&html);
    if document.is_empty() {
        log!("error"; "no bookmark categories in {}, import aborted", config.display_path(&source));
        return Ok(ImportOutcome::NoCategories { source });
    }

    // Must precede any write into the user directory.
    let init = ensure_user_config_initialized(config)?;

    let output = config.output_file();
    let page = BookmarksPage {
        title: &config.page.title,
        subtitle: &config.page.subtitle,
        categories: &document.categories,
    };
    let header = PageHeader {
        generated_at: config.output.timestamp.then(DateTimeUtc::now),
        bookmarks_dir: config.display_path(&config.bookmarks_dir()),
        pages_dir: config.display_path(&config.pages_dir()),
    };
    let content = render_page(&page, &header)?;
    write_generated(&output, &content)?;
    log!("yaml"; "wrote {}", config.display_path(&output));

    let site_file = ensure_user_site_yml(config)?;
    let nav = upsert_bookmarks_nav(&config.user_site_file())?;
    match nav {
        NavUpdate::Added => {
            log!("nav"; "added bookmarks entry to {}", config.display_path(&config.user_site_file()))
        }
        NavUpdate::Skipped(NavSkipReason::AlreadyPresent) => {
            log!("nav"; "bookmarks entry already present")
        }
        NavUpdate::Skipped(reason) => {
            log!("nav"; "navigation not updated: {}", reason)
        }
    }

    Ok(ImportOutcome::Imported(ImportReport {
        source,
        output,
        categories: document.categories.len(),
        sites: document.site_count(),
        init,
        site_file,
        nav,
    }))
}
