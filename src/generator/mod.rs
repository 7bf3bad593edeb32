//! Generated configuration files.
//!
//! - **Page**: the bookmarks page document (`pages/bookmarks.yml`)
//! - **YAML**: block-style emitter shared with the navigation patcher

pub mod page;
pub mod yaml;

pub use page::{BookmarksPage, PageHeader, render_page};

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Write generated content, creating the parent directory first.
pub fn write_generated(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    if !path.is_file() {
        bail!("'{}' was not created", path.display());
    }
    Ok(())
}
