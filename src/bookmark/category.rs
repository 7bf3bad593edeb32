//! Category tree construction from the container tree.
//!
//! # Rules
//!
//! - each folder becomes a [`Category`] at `level` (1 = top level)
//! - below [`MAX_DEPTH`], child folders recurse and direct bookmarks become `sites`
//! - at [`MAX_DEPTH`], every bookmark of the subtree becomes `sites` (flattened)
//! - nodes without sites and without children are pruned, bottom-up
//! - sibling order follows the source

use super::icon::icon_for_url;
use super::model::{Category, MAX_DEPTH, Site};
use super::tree::{Container, RawBookmark};
use crate::debug;

/// Name used for folders whose header text is empty.
pub const UNTITLED_FOLDER: &str = "未命名文件夹";

/// Validate a raw anchor and turn it into a site.
///
/// Entries with a blank title or a missing `HREF` are discarded.
pub fn extract_site(raw: &RawBookmark) -> Option<Site> {
    let name = raw.title.trim();
    let url = raw.url.trim();
    if name.is_empty() || url.is_empty() {
        debug!("parse"; "skipped bookmark without title or link at byte {}", raw.pos);
        return None;
    }

    Some(Site {
        name: name.to_string(),
        url: url.to_string(),
        icon: icon_for_url(url).to_string(),
        description: String::new(),
    })
}

/// Convert anchors to sites, keeping order and dropping invalid entries.
pub fn collect_sites<'a>(bookmarks: impl IntoIterator<Item = &'a RawBookmark>) -> Vec<Site> {
    bookmarks.into_iter().filter_map(extract_site).collect()
}

/// Build the categories for every folder directly inside `container`.
pub fn build_categories(container: &Container, parent_path: &[String], level: u8) -> Vec<Category> {
    container
        .folders()
        .filter_map(|folder| build_category(folder, parent_path, level))
        .collect()
}

fn build_category(folder: &Container, parent_path: &[String], level: u8) -> Option<Category> {
    let name = match folder.name() {
        "" => UNTITLED_FOLDER,
        name => name,
    };

    let mut path = parent_path.to_vec();
    path.push(name.to_string());
    let mut category = Category::new(name, path, level);

    if level >= MAX_DEPTH {
        category.sites = collect_sites(folder.all_bookmarks());
    } else {
        if folder.has_folders() {
            category.children = build_categories(folder, &category.path, level + 1);
        }
        category.sites = collect_sites(folder.bookmarks());
    }

    category.has_content().then_some(category)
}
