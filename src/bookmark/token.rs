//! Netscape bookmark file tokenizer.
//!
//! One linear pass over the export produces the four token kinds the tree
//! builder cares about. Everything else (doctype, meta, `<H1>`, whitespace,
//! descriptions in `<DD>`) is skipped.
//!
//! ```text
//! <DT><H3 ...>Name</H3>        -> FolderHeader
//! <DL><p>                      -> ContainerOpen
//! </DL><p>                     -> ContainerClose
//! <DT><A HREF="...">Title</A>  -> Bookmark
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::html::{find_attribute, parse_attributes, unescape};

/// Attribute marking the browser's bookmarks-bar folder.
pub const TOOLBAR_MARKER: &str = "PERSONAL_TOOLBAR_FOLDER";

/// Container markers are matched as literal multi-character tokens.
/// Header and anchor text never spans lines in browser exports.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<open><DL><p>)|(?P<close></DL><p>)|<DT><H3(?P<h_attrs>[^>]*)>(?P<h_text>.*?)</H3>|<DT><A(?P<a_attrs>[^>]*)>(?P<a_text>.*?)</A>",
    )
    .unwrap()
});

/// A token and the byte range it covers in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub pos: usize,
    pub end: usize,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `<DT><H3 ...>name</H3>`
    FolderHeader { name: String, toolbar: bool },
    /// `<DL><p>`
    ContainerOpen,
    /// `</DL><p>`
    ContainerClose,
    /// `<DT><A HREF="url" ...>title</A>`; `url` is empty when HREF is missing.
    Bookmark { url: String, title: String },
}

impl TokenKind {
    #[inline]
    pub fn is_toolbar_header(&self) -> bool {
        matches!(self, Self::FolderHeader { toolbar: true, .. })
    }
}

/// Tokenize a bookmark export.
///
/// Fresh scanner state per call; tokens are returned in document order.
pub fn tokenize(html: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let kind = if caps.name("open").is_some() {
                TokenKind::ContainerOpen
            } else if caps.name("close").is_some() {
                TokenKind::ContainerClose
            } else if let Some(attrs) = caps.name("h_attrs") {
                let attrs = parse_attributes(attrs.as_str());
                TokenKind::FolderHeader {
                    name: text_of(caps.name("h_text")),
                    toolbar: find_attribute(&attrs, TOOLBAR_MARKER).is_some(),
                }
            } else {
                let attrs = parse_attributes(caps.name("a_attrs")?.as_str());
                TokenKind::Bookmark {
                    url: find_attribute(&attrs, "HREF")
                        .map(|url| unescape(url.trim()).into_owned())
                        .unwrap_or_default(),
                    title: text_of(caps.name("a_text")),
                }
            };
            Some(Token {
                pos: whole.start(),
                end: whole.end(),
                kind,
            })
        })
        .collect()
}

fn text_of(m: Option<regex::Match<'_>>) -> String {
    m.map(|m| unescape(m.as_str().trim()).into_owned())
        .unwrap_or_default()
}
