//! User configuration bootstrap.
//!
//! The site generator reads either the user config directory or the defaults
//! directory, never a merge of both. Before anything is written into the user
//! directory it therefore has to be a complete copy of the defaults.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::ImportConfig;
use crate::log;

/// Contents of a freshly created `site.yml` when no default exists.
const MINIMAL_SITE_YML: &str = "# 用户站点配置（由书签导入创建）\nnavigation: []\n";

/// Result of [`ensure_user_config_initialized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    /// The user directory was created by this call.
    pub initialized: bool,
    /// Directory the user config was copied from.
    pub source: Option<PathBuf>,
}

/// How `<user>/site.yml` came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteFileOrigin {
    Existing,
    CopiedDefault,
    CreatedMinimal,
}

/// Copy the defaults tree into the user directory if the latter is missing.
///
/// An existing user directory is never touched, even when incomplete.
pub fn ensure_user_config_initialized(config: &ImportConfig) -> Result<InitOutcome> {
    let user_dir = config.user_dir();
    let defaults_dir = config.defaults_dir();

    if user_dir.exists() || !defaults_dir.is_dir() {
        return Ok(InitOutcome {
            initialized: false,
            source: None,
        });
    }

    let count = copy_dir_recursive(&defaults_dir, &user_dir)?;
    log!(
        "init";
        "{} -> {} ({} files)",
        config.display_path(&defaults_dir),
        config.display_path(&user_dir),
        count
    );

    Ok(InitOutcome {
        initialized: true,
        source: Some(defaults_dir),
    })
}

/// Make sure `<user>/site.yml` exists so the navigation can be patched.
pub fn ensure_user_site_yml(config: &ImportConfig) -> Result<SiteFileOrigin> {
    let site_file = config.user_site_file();
    if site_file.is_file() {
        return Ok(SiteFileOrigin::Existing);
    }

    let user_dir = config.user_dir();
    fs::create_dir_all(&user_dir)
        .with_context(|| format!("Failed to create directory '{}'", user_dir.display()))?;

    let default_site = config.default_site_file();
    if default_site.is_file() {
        fs::copy(&default_site, &site_file).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                default_site.display(),
                site_file.display()
            )
        })?;
        log!("init"; "{}", config.display_path(&site_file));
        return Ok(SiteFileOrigin::CopiedDefault);
    }

    fs::write(&site_file, MINIMAL_SITE_YML)
        .with_context(|| format!("Failed to write '{}'", site_file.display()))?;
    log!("init"; "{} (minimal)", config.display_path(&site_file));
    Ok(SiteFileOrigin::CreatedMinimal)
}

/// Recursive copy, returns the number of files written.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize> {
    fs::create_dir_all(dst)
        .with_context(|| format!("Failed to create directory '{}'", dst.display()))?;

    let mut count = 0;
    for entry in fs::read_dir(src)
        .with_context(|| format!("Failed to read directory '{}'", src.display()))?
    {
        let entry = entry.context("Invalid directory entry")?;
        let src_path = entry.path();
        let dest_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            count += copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    src_path.display(),
                    dest_path.display()
                )
            })?;
            count += 1;
        }
    }
    Ok(count)
}
