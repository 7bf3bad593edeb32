//! Netscape bookmark export parsing.
//!
//! # Module Structure
//!
//! - [`token`]: one-pass tokenizer for headers, anchors and container markers
//! - [`tree`]: stack-based container matching
//! - [`category`]: category tree construction and pruning
//! - [`model`]: output data model and its page-format projection
//! - [`icon`]: URL keyword icon table
//! - [`source`]: newest export selection
//!
//! # Pipeline
//!
//! ```text
//! html ─► tokenize ─► build_tree ─► resolve scope ─► build_categories
//!                                        │
//!                                        └─► root bookmarks (toolbar only)
//! ```

pub mod category;
pub mod icon;
pub mod model;
pub mod source;
pub mod token;
pub mod tree;

pub use model::{BookmarkDocument, Category};
pub use source::latest_bookmark_file;

use crate::{debug, log, utils::plural::plural_count};
use category::{build_categories, collect_sites};
use tree::{BookmarkTree, Container, build_tree};

/// Where the top-level categories come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// The bookmarks-bar folder.
    Toolbar,
    /// No toolbar marker: the first `<DL><p>` of the document.
    FirstContainer,
    /// Nothing usable found.
    Missing,
}

/// Resolve the container whose folders become top-level categories.
///
/// A toolbar header without a body yields [`ScopeKind::Missing`] rather
/// than falling back, since the export clearly has a bookmarks bar.
pub fn resolve_scope(tree: &BookmarkTree) -> (ScopeKind, Option<&Container>) {
    if let Some(toolbar) = tree.toolbar() {
        return (ScopeKind::Toolbar, Some(toolbar));
    }
    if tree.toolbar_seen {
        log!("parse"; "bookmarks bar folder has no content container");
        return (ScopeKind::Missing, None);
    }

    log!("parse"; "no bookmarks bar folder ({}), using the first container", token::TOOLBAR_MARKER);
    match tree.first_container() {
        Some(container) => (ScopeKind::FirstContainer, Some(container)),
        None => {
            log!("error"; "no bookmark container found");
            (ScopeKind::Missing, None)
        }
    }
}

/// Parse a bookmark export into a category document.
///
/// Never fails: malformed input degrades to fewer (possibly zero)
/// categories. Callers decide whether an empty document is fatal.
pub fn parse_bookmarks(html: &str) -> BookmarkDocument {
    let tokens = token::tokenize(html);
    debug!("parse"; "{}", plural_count(tokens.len(), "token"));
    let tree = build_tree(tokens, html.len());

    let (kind, scope) = resolve_scope(&tree);
    let Some(scope) = scope else {
        return BookmarkDocument::default();
    };
    debug!("parse"; "scope `{}` at bytes {}..{}", scope.name(), scope.span.start, scope.span.end);

    let mut categories = build_categories(scope, &[], 1);
    log!("parse"; "found {} top-level categories", categories.len());

    if kind == ScopeKind::Toolbar {
        let root_sites = collect_sites(scope.bookmarks());
        if !root_sites.is_empty() {
            log!("parse"; "{} directly on the bookmarks bar", plural_count(root_sites.len(), "bookmark"));
            categories.insert(0, Category::root_bookmarks(root_sites));
        }
    }

    BookmarkDocument { categories }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{MAX_DEPTH, ROOT_CATEGORY_NAME};

    const SAMPLE: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
  <DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bar</H3>
  <DL><p>
    <DT><A HREF="https://github.com/x">GH</A>
    <DT><H3>Tools</H3>
    <DL><p>
      <DT><A HREF="https://google.com">G</A>
    </DL><p>
  </DL><p>
</DL><p>
"#;

    fn assert_no_empty_nodes(categories: &[Category]) {
        for category in categories {
            assert!(category.has_content(), "empty category {}", category.name);
            assert_no_empty_nodes(&category.children);
        }
    }

    #[test]
    fn test_end_to_end_sample() {
        let doc = parse_bookmarks(SAMPLE);
        assert_eq!(doc.categories.len(), 2);

        let root = &doc.categories[0];
        assert_eq!(root.name, ROOT_CATEGORY_NAME);
        assert_eq!(root.sites.len(), 1);
        assert_eq!(root.sites[0].name, "GH");
        assert_eq!(root.sites[0].url, "https://github.com/x");
        assert_eq!(root.sites[0].icon, "fab fa-github");

        let tools = &doc.categories[1];
        assert_eq!(tools.name, "Tools");
        assert_eq!(tools.path, vec!["Tools"]);
        assert_eq!(tools.sites[0].name, "G");
        assert_eq!(tools.sites[0].url, "https://google.com");
        assert_eq!(tools.sites[0].icon, "fab fa-google");
    }

    #[test]
    fn test_no_root_category_without_direct_bookmarks() {
        let html = SAMPLE.replace(r#"<DT><A HREF="https://github.com/x">GH</A>"#, "");
        let doc = parse_bookmarks(&html);
        assert_eq!(doc.categories.len(), 1);
        assert!(doc.categories.iter().all(|c| c.name != ROOT_CATEGORY_NAME));
    }

    #[test]
    fn test_fallback_to_first_container() {
        let html = r#"<DL><p>
<DT><A HREF="https://loose.dev">loose</A>
<DT><H3>Reading</H3>
<DL><p><DT><A HREF="https://a.dev">a</A></DL><p>
</DL><p>"#;
        let doc = parse_bookmarks(html);
        let names: Vec<_> = doc.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Reading"]);
    }

    #[test]
    fn test_toolbar_binds_to_the_next_container() {
        let html = r#"<DL><p>
<DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bar</H3>
<DT><H3>Other</H3>
<DL><p><DT><A HREF="https://a.dev">a</A></DL><p>
</DL><p>"#;
        let doc = parse_bookmarks(html);
        assert_eq!(doc.categories.len(), 1);
        let root = &doc.categories[0];
        assert_eq!(root.name, ROOT_CATEGORY_NAME);
        assert!(root.children.is_empty());
        let urls: Vec<_> = root.sites.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.dev"]);
    }

    #[test]
    fn test_toolbar_without_body_yields_nothing() {
        let html = r#"<DL><p>
<DT><H3>Other</H3>
<DL><p><DT><A HREF="https://a.dev">a</A></DL><p>
<DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bar</H3>
</DL><p>"#;
        assert!(parse_bookmarks(html).is_empty());
    }

    #[test]
    fn test_folder_header_without_own_body_wraps_the_next_folder() {
        let html = r#"<DL><p>
<DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bar</H3>
<DL><p>
<DT><H3>Empty</H3>
<DT><H3>Real</H3>
<DL><p><DT><A HREF="https://r.dev">r</A></DL><p>
</DL><p>
</DL><p>"#;
        let doc = parse_bookmarks(html);
        assert_eq!(doc.categories.len(), 1);
        let empty = &doc.categories[0];
        assert_eq!(empty.name, "Empty");
        assert!(empty.sites.is_empty());
        assert_eq!(empty.children.len(), 1);

        let real = &empty.children[0];
        assert_eq!(real.name, "Real");
        assert_eq!(real.path, vec!["Empty", "Real"]);
        assert_eq!(real.sites[0].url, "https://r.dev");
    }

    #[test]
    fn test_garbage_input_is_empty() {
        assert!(parse_bookmarks("").is_empty());
        assert!(parse_bookmarks("<html><body>nothing here</body></html>").is_empty());
    }

    #[test]
    fn test_toolbar_sibling_folders_are_ignored() {
        let html = r#"<DL><p>
<DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bar</H3>
<DL><p>
<DT><H3>Inside</H3><DL><p><DT><A HREF="https://in.dev">in</A></DL><p>
</DL><p>
<DT><H3>Other bookmarks</H3>
<DL><p><DT><A HREF="https://out.dev">out</A></DL><p>
</DL><p>"#;
        let doc = parse_bookmarks(html);
        let names: Vec<_> = doc.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Inside"]);
    }

    #[test]
    fn test_deep_nesting_terminates_and_keeps_bookmarks() {
        let depth = 12;
        let mut html = String::from("<DL><p><DT><H3 PERSONAL_TOOLBAR_FOLDER=\"true\">Bar</H3><DL><p>");
        for i in 0..depth {
            html.push_str(&format!(
                "<DT><H3>F{i}</H3><DL><p><DT><A HREF=\"https://{i}.dev\">s{i}</A>"
            ));
        }
        for _ in 0..depth + 2 {
            html.push_str("</DL><p>");
        }

        let doc = parse_bookmarks(&html);
        assert_eq!(doc.site_count(), depth);
        assert_no_empty_nodes(&doc.categories);

        let mut node = &doc.categories[0];
        while let Some(child) = node.children.first() {
            node = child;
        }
        assert_eq!(node.depth, MAX_DEPTH);
        assert_eq!(node.sites.len(), depth - 3);
        assert_eq!(node.sites[0].url, "https://3.dev");
    }

    #[test]
    fn test_sibling_order_is_source_order() {
        let mut html = String::from("<DL><p><DT><H3 PERSONAL_TOOLBAR_FOLDER=\"true\">Bar</H3><DL><p>");
        for name in ["zeta", "alpha", "mid"] {
            html.push_str(&format!(
                "<DT><H3>{name}</H3><DL><p><DT><A HREF=\"https://{name}.dev\">{name}</A></DL><p>"
            ));
        }
        html.push_str("</DL><p></DL><p>");

        let doc = parse_bookmarks(&html);
        let names: Vec<_> = doc.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
