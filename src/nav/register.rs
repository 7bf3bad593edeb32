//! Bookmarks entry in the site navigation.
//!
//! The entry is inserted as text so comments, key order and quoting of the
//! rest of the file survive. Every patch is re-parsed and compared with the
//! expected document before anything is written; a file that cannot be
//! patched safely is left as it was and a [`NavSkipReason`] is reported.
//!
//! Accepted layouts:
//!
//! ```yaml
//! # site.yml: list under `navigation:` (block, empty, `[]` or absent)
//! navigation:
//!   - name: 首页
//!     id: home
//!
//! # navigation.yml: the document itself is the list
//! - name: 首页
//!   id: home
//! ```

use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::{fmt, fs, path::Path};

use crate::generator::yaml::to_block_yaml;

/// Reserved navigation id of the bookmarks page.
pub const BOOKMARKS_NAV_ID: &str = "bookmarks";
pub const BOOKMARKS_NAV_NAME: &str = "书签";
pub const BOOKMARKS_NAV_ICON: &str = "fas fa-bookmark";

const NAV_KEY: &str = "navigation";
const DEFAULT_ITEM_INDENT: usize = 2;

/// Why a navigation file was not modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSkipReason {
    /// The reserved entry exists already.
    AlreadyPresent,
    /// The file is not parseable YAML.
    InvalidYaml,
    /// The document is neither a mapping nor a list.
    NotAMapping,
    /// `navigation` exists but is not a list.
    NavigationNotList,
    /// The list is written in a form we do not edit textually (flow style,
    /// anchors, quoted key) or the patch did not re-parse as expected.
    UnsupportedLayout,
}

impl NavSkipReason {
    /// Stable reason code for logs and callers.
    pub const fn code(self) -> &'static str {
        match self {
            Self::AlreadyPresent => "already_present",
            Self::InvalidYaml => "invalid_yaml",
            Self::NotAMapping => "not_a_mapping",
            Self::NavigationNotList => "navigation_not_list",
            Self::UnsupportedLayout => "unsupported_layout",
        }
    }
}

impl fmt::Display for NavSkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavUpdate {
    Added,
    Skipped(NavSkipReason),
}

impl NavUpdate {
    pub fn reason(self) -> Option<NavSkipReason> {
        match self {
            Self::Added => None,
            Self::Skipped(reason) => Some(reason),
        }
    }
}

/// The reserved entry as a YAML value.
pub fn bookmarks_nav_entry() -> Value {
    let mut entry = Mapping::new();
    entry.insert("name".into(), BOOKMARKS_NAV_NAME.into());
    entry.insert("icon".into(), BOOKMARKS_NAV_ICON.into());
    entry.insert("id".into(), BOOKMARKS_NAV_ID.into());
    Value::Mapping(entry)
}

/// Ensure `path` lists the bookmarks page in its navigation.
///
/// I/O errors propagate; every other problem is a [`NavUpdate::Skipped`]
/// with the file untouched.
pub fn upsert_bookmarks_nav(path: &Path) -> Result<NavUpdate> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read navigation file '{}'", path.display()))?;

    match patch_navigation(&text) {
        Ok(patched) => {
            fs::write(path, patched)
                .with_context(|| format!("Failed to write navigation file '{}'", path.display()))?;
            Ok(NavUpdate::Added)
        }
        Err(reason) => Ok(NavUpdate::Skipped(reason)),
    }
}

/// Compute the patched file text, or why it cannot be patched.
pub fn patch_navigation(text: &str) -> Result<String, NavSkipReason> {
    let doc: Value = serde_yaml::from_str(text).map_err(|_| NavSkipReason::InvalidYaml)?;

    let (patched, expected) = match &doc {
        Value::Sequence(items) => {
            ensure_absent(items)?;
            let mut expected = items.clone();
            expected.push(bookmarks_nav_entry());
            (append_to_root_list(text), Value::Sequence(expected))
        }
        Value::Null => (append_nav_key(text), expected_with_nav(&Mapping::new(), &[])),
        Value::Mapping(map) => match map.get(NAV_KEY) {
            None => (append_nav_key(text), expected_with_nav(map, &[])),
            Some(Value::Null) => (insert_into_nav_block(text)?, expected_with_nav(map, &[])),
            Some(Value::Sequence(items)) => {
                ensure_absent(items)?;
                (insert_into_nav_block(text)?, expected_with_nav(map, items))
            }
            Some(_) => return Err(NavSkipReason::NavigationNotList),
        },
        _ => return Err(NavSkipReason::NotAMapping),
    };

    let reparsed: Value =
        serde_yaml::from_str(&patched).map_err(|_| NavSkipReason::UnsupportedLayout)?;
    if reparsed != expected {
        return Err(NavSkipReason::UnsupportedLayout);
    }
    Ok(patched)
}

fn has_bookmarks_entry(items: &[Value]) -> bool {
    items
        .iter()
        .any(|item| item.get("id").and_then(Value::as_str) == Some(BOOKMARKS_NAV_ID))
}

fn ensure_absent(items: &[Value]) -> Result<(), NavSkipReason> {
    if has_bookmarks_entry(items) {
        Err(NavSkipReason::AlreadyPresent)
    } else {
        Ok(())
    }
}

fn expected_with_nav(map: &Mapping, items: &[Value]) -> Value {
    let mut map = map.clone();
    let mut items = items.to_vec();
    items.push(bookmarks_nav_entry());
    map.insert(NAV_KEY.into(), Value::Sequence(items));
    Value::Mapping(map)
}

// ============================================================================
// text edits
// ============================================================================

fn newline_of(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Entry lines as a list item at `indent`, each terminated by `newline`.
fn entry_lines(indent: usize, newline: &str) -> String {
    let pad = " ".repeat(indent);
    to_block_yaml(&Value::Sequence(vec![bookmarks_nav_entry()]))
        .lines()
        .map(|line| format!("{pad}{line}{newline}"))
        .collect()
}

fn with_trailing_newline(text: &str, newline: &str) -> String {
    let mut out = text.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push_str(newline);
    }
    out
}

/// Document is a bare list: append at the end, matching item indentation.
fn append_to_root_list(text: &str) -> String {
    let newline = newline_of(text);
    let indent = text
        .lines()
        .find(|line| line.trim_start().starts_with('-'))
        .map_or(0, leading_spaces);

    let mut out = with_trailing_newline(text, newline);
    out.push_str(&entry_lines(indent, newline));
    out
}

/// No `navigation` key yet: append one at the end of the document.
fn append_nav_key(text: &str) -> String {
    let newline = newline_of(text);
    let mut out = with_trailing_newline(text, newline);
    if !out.trim().is_empty() {
        out.push_str(newline);
    }
    out.push_str(NAV_KEY);
    out.push(':');
    out.push_str(newline);
    out.push_str(&entry_lines(DEFAULT_ITEM_INDENT, newline));
    out
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Value part of a `key: value  # comment` line.
fn inline_value(rest: &str) -> &str {
    let rest = match rest.find(" #") {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    rest.trim()
}

/// Insert after the last item of the top-level `navigation:` block.
fn insert_into_nav_block(text: &str) -> Result<String, NavSkipReason> {
    let newline = newline_of(text);
    let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();

    let key_prefix = format!("{NAV_KEY}:");
    let key_idx = lines
        .iter()
        .position(|line| line.starts_with(&key_prefix))
        .ok_or(NavSkipReason::UnsupportedLayout)?;

    let value = inline_value(lines[key_idx][key_prefix.len()..].trim_end_matches(['\r', '\n']))
        .to_string();
    match value.as_str() {
        "" => {}
        "[]" => {
            let ending = if lines[key_idx].ends_with('\n') { newline } else { "" };
            lines[key_idx] = format!("{key_prefix}{ending}");
        }
        _ => return Err(NavSkipReason::UnsupportedLayout),
    }

    // The block runs until the next line that starts a new top-level key.
    let mut last_item = key_idx;
    let mut item_indent = None;
    for (idx, line) in lines.iter().enumerate().skip(key_idx + 1) {
        let content = line.trim_end_matches(['\r', '\n']);
        let trimmed = content.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let top_level = !content.starts_with([' ', '\t']);
        if top_level && !trimmed.starts_with('-') {
            break;
        }
        if trimmed.starts_with('-') && item_indent.is_none() {
            item_indent = Some(leading_spaces(content));
        }
        last_item = idx;
    }

    if !lines[last_item].ends_with('\n') {
        lines[last_item].push_str(newline);
    }
    let entry = entry_lines(item_indent.unwrap_or(DEFAULT_ITEM_INDENT), newline);
    lines.insert(last_item + 1, entry);
    Ok(lines.concat())
}
