//! Import configuration (`menav.toml`, optional).
//!
//! # Sections
//!
//! | Section    | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `[paths]`  | bookmarks input dir, user and default config dirs |
//! | `[page]`   | title and subtitle of the generated page          |
//! | `[output]` | generated-file header options                     |
//!
//! Every field has a default, so a missing file is the same as an empty one.
//! Relative paths resolve against the project root.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::cli::Cli;
use crate::generator::page::{DEFAULT_SUBTITLE, DEFAULT_TITLE};
use crate::{debug, log};

/// File name of the generated page inside `<user>/pages`.
pub const PAGE_FILE: &str = "bookmarks.yml";

/// Site configuration file inside a config directory.
pub const SITE_FILE: &str = "site.yml";

// ============================================================================
// sections
// ============================================================================

/// `[paths]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding browser exports.
    pub bookmarks: PathBuf,
    /// User configuration directory (written to).
    pub user: PathBuf,
    /// Default configuration directory (template for `user`).
    pub defaults: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            bookmarks: PathBuf::from("bookmarks"),
            user: PathBuf::from("config/user"),
            defaults: PathBuf::from("config/_default"),
        }
    }
}

/// `[page]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Write the generation time into the header comment.
    pub timestamp: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { timestamp: true }
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `menav.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub paths: PathsConfig,
    pub page: PageConfig,
    pub output: OutputConfig,
}

impl ImportConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// The config file is looked up relative to the project root; when it
    /// does not exist the defaults are used.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()
                .map_err(|e| ConfigError::Io(PathBuf::from("."), e))?,
        };

        let config_path = if cli.config.is_absolute() {
            cli.config.clone()
        } else {
            root.join(&cli.config)
        };

        let mut config = if config_path.is_file() {
            debug!("config"; "loading {}", config_path.display());
            Self {
                root,
                ..Self::from_path(&config_path)?
            }
        } else {
            Self::with_root(root)
        };

        if cli.no_timestamp {
            config.output.timestamp = false;
        }
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&content)
    }

    /// Parse config text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reject values that would make the import write to odd places.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("paths.bookmarks", &self.paths.bookmarks),
            ("paths.user", &self.paths.user),
            ("paths.defaults", &self.paths.defaults),
        ];
        for (field, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("`{field}` must not be empty")));
            }
        }
        if self.paths.user == self.paths.defaults {
            return Err(ConfigError::Validation(
                "`paths.user` and `paths.defaults` must differ".to_string(),
            ));
        }
        if self.page.title.trim().is_empty() {
            return Err(ConfigError::Validation("`page.title` must not be empty".to_string()));
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // resolved paths
    // ------------------------------------------------------------------------

    /// Join a configured path onto the root (absolute paths pass through).
    pub fn root_join(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    pub fn bookmarks_dir(&self) -> PathBuf {
        self.root_join(&self.paths.bookmarks)
    }

    pub fn user_dir(&self) -> PathBuf {
        self.root_join(&self.paths.user)
    }

    pub fn defaults_dir(&self) -> PathBuf {
        self.root_join(&self.paths.defaults)
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.user_dir().join("pages")
    }

    /// `<user>/pages/bookmarks.yml`
    pub fn output_file(&self) -> PathBuf {
        self.pages_dir().join(PAGE_FILE)
    }

    /// `<user>/site.yml`
    pub fn user_site_file(&self) -> PathBuf {
        self.user_dir().join(SITE_FILE)
    }

    /// `<defaults>/site.yml`
    pub fn default_site_file(&self) -> PathBuf {
        self.defaults_dir().join(SITE_FILE)
    }

    /// A path as shown to the user: relative to the root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Config for `root` with defaults, for callers that bypass the CLI.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Log the effective paths (verbose only).
    pub fn log_paths(&self) {
        debug!("config"; "root: {}", self.root.display());
        debug!("config"; "bookmarks: {}", self.display_path(&self.bookmarks_dir()));
        debug!("config"; "output: {}", self.display_path(&self.output_file()));
        if !self.output.timestamp {
            log!("config"; "timestamp disabled, output is reproducible");
        }
    }
}
