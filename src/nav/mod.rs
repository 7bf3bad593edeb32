//! Site configuration side effects of an import.
//!
//! - **init**: make the user config directory a full copy of the defaults
//! - **register**: add the bookmarks entry to the navigation list

pub mod init;
pub mod register;

pub use init::{InitOutcome, SiteFileOrigin, ensure_user_config_initialized, ensure_user_site_yml};
pub use register::{NavSkipReason, NavUpdate, upsert_bookmarks_nav};
