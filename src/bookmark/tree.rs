//! Container tree reconstruction.
//!
//! The export format has no per-folder closing tag: a folder is a
//! `<DT><H3>` header followed by a `<DL><p>` body that ends at the matching
//! `</DL><p>`. Matching is done with an explicit stack over the token
//! stream (push on open, pop on close), which is the same depth counting a
//! forward scan would do, in a single pass.
//!
//! Rules for sloppy input:
//! - a header binds to the next `<DL><p>` in its enclosing container; when
//!   several headers precede one `<DL><p>`, each later header nests in the
//!   one before it and the innermost owns the body
//! - a header with no `<DL><p>` before its container closes is dropped
//! - bookmarks between a header and its `<DL><p>` belong to that folder
//! - a stray `</DL><p>` at document level is ignored
//! - containers still open at end of input are closed there
//! - an anonymous `<DL><p>` nested inside a folder is transparent

use std::ops::Range;

use super::token::{Token, TokenKind};
use crate::debug;

/// A folder header as written in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderHeader {
    pub name: String,
    pub toolbar: bool,
}

/// A bookmark anchor before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBookmark {
    pub url: String,
    pub title: String,
    pub pos: usize,
}

/// A `<DL><p>` body, with the folder header that owns it (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub header: Option<FolderHeader>,
    /// Header start (or `<DL><p>` start for anonymous containers) up to the
    /// end of the matching `</DL><p>`.
    pub span: Range<usize>,
    pub items: Vec<Item>,
    /// The header had no `<DL><p>` of its own; its body is the one owned by
    /// its last child folder.
    pub chained: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Bookmark(RawBookmark),
    Container(Container),
}

/// The whole export as a forest of document-level items.
#[derive(Debug, Clone, Default)]
pub struct BookmarkTree {
    pub items: Vec<Item>,
    /// A toolbar header appeared anywhere, bound to a body or not.
    pub toolbar_seen: bool,
}

impl Container {
    /// Display name, empty for anonymous containers.
    pub fn name(&self) -> &str {
        self.header.as_ref().map_or("", |h| h.name.as_str())
    }

    pub fn is_toolbar(&self) -> bool {
        self.header.as_ref().is_some_and(|h| h.toolbar)
    }

    /// Direct bookmarks, in document order.
    pub fn bookmarks(&self) -> impl Iterator<Item = &RawBookmark> {
        self.items.iter().filter_map(|item| match item {
            Item::Bookmark(b) => Some(b),
            Item::Container(_) => None,
        })
    }

    /// Direct child folders, in document order.
    pub fn folders(&self) -> impl Iterator<Item = &Container> {
        self.items.iter().filter_map(|item| match item {
            Item::Container(c) => Some(c),
            Item::Bookmark(_) => None,
        })
    }

    pub fn has_folders(&self) -> bool {
        self.folders().next().is_some()
    }

    /// The `<DL><p>` this folder's header is bound to.
    pub fn body(&self) -> &Container {
        match self.items.last() {
            Some(Item::Container(inner)) if self.chained => inner.body(),
            _ => self,
        }
    }

    /// Every bookmark below this container, in document order.
    pub fn all_bookmarks(&self) -> Vec<&RawBookmark> {
        let mut out = Vec::new();
        collect_bookmarks(&self.items, &mut out);
        out
    }
}

fn collect_bookmarks<'a>(items: &'a [Item], out: &mut Vec<&'a RawBookmark>) {
    for item in items {
        match item {
            Item::Bookmark(b) => out.push(b),
            Item::Container(c) => collect_bookmarks(&c.items, out),
        }
    }
}

impl BookmarkTree {
    /// The container body of the first toolbar folder, in document order.
    pub fn toolbar(&self) -> Option<&Container> {
        find_container(&self.items, &|c: &Container| c.is_toolbar()).map(Container::body)
    }

    /// The first `<DL><p>` body of any kind, in document order.
    pub fn first_container(&self) -> Option<&Container> {
        find_container(&self.items, &|_: &Container| true).map(Container::body)
    }
}

fn find_container<'a>(
    items: &'a [Item],
    pred: &dyn Fn(&Container) -> bool,
) -> Option<&'a Container> {
    items.iter().find_map(|item| match item {
        Item::Container(c) if pred(c) => Some(c),
        Item::Container(c) => find_container(&c.items, pred),
        Item::Bookmark(_) => None,
    })
}

// ============================================================================
// Construction
// ============================================================================

/// A header waiting for its `<DL><p>`.
struct Pending {
    header: FolderHeader,
    start: usize,
    bookmarks: Vec<RawBookmark>,
}

struct Builder {
    /// `frames[0]` is the document itself.
    frames: Vec<Container>,
    /// Headers seen since the last `<DL><p>`, outermost first.
    pending: Vec<Pending>,
}

impl Builder {
    fn new() -> Self {
        Self {
            frames: vec![Container {
                header: None,
                span: 0..0,
                items: Vec::new(),
                chained: false,
            }],
            pending: Vec::new(),
        }
    }

    fn top(&mut self) -> &mut Container {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Drop headers that never got a body; their bookmarks stay with the parent.
    fn flush_pending(&mut self) {
        for pending in std::mem::take(&mut self.pending) {
            debug!("parse"; "folder `{}` has no body, dropped", pending.header.name);
            self.top()
                .items
                .extend(pending.bookmarks.into_iter().map(Item::Bookmark));
        }
    }

    fn push(&mut self, token: Token) {
        match token.kind {
            TokenKind::FolderHeader { name, toolbar } => {
                self.pending.push(Pending {
                    header: FolderHeader { name, toolbar },
                    start: token.pos,
                    bookmarks: Vec::new(),
                });
            }
            TokenKind::Bookmark { url, title } => {
                let bookmark = RawBookmark {
                    url,
                    title,
                    pos: token.pos,
                };
                match self.pending.last_mut() {
                    Some(pending) => pending.bookmarks.push(bookmark),
                    None => self.top().items.push(Item::Bookmark(bookmark)),
                }
            }
            TokenKind::ContainerOpen => self.open(token.pos..token.end),
            TokenKind::ContainerClose => {
                if self.frames.len() > 1 {
                    self.close(token.end);
                }
            }
        }
    }

    /// Start a `<DL><p>` body, owned by the pending headers if there are any.
    fn open(&mut self, marker: Range<usize>) {
        if self.pending.is_empty() {
            self.frames.push(Container {
                header: None,
                span: marker,
                items: Vec::new(),
                chained: false,
            });
            return;
        }

        let innermost = self.pending.len() - 1;
        for (i, pending) in std::mem::take(&mut self.pending).into_iter().enumerate() {
            self.frames.push(Container {
                header: Some(pending.header),
                span: pending.start..marker.end,
                items: pending.bookmarks.into_iter().map(Item::Bookmark).collect(),
                chained: i < innermost,
            });
        }
    }

    /// Pop the innermost body, and the chained headers waiting on it,
    /// ending them at `end`.
    fn close(&mut self, end: usize) {
        self.flush_pending();
        while self.frames.len() > 1 {
            let Some(mut container) = self.frames.pop() else {
                return;
            };
            container.span.end = end;

            let at_document_level = self.frames.len() == 1;
            let parent = self.top();
            if container.header.is_none() && !at_document_level {
                parent.items.extend(container.items);
            } else {
                parent.items.push(Item::Container(container));
            }

            if !parent.chained {
                return;
            }
        }
    }

    fn finish(mut self, len: usize) -> Vec<Item> {
        while self.frames.len() > 1 {
            self.close(len);
        }
        self.flush_pending();
        self.frames.pop().map(|doc| doc.items).unwrap_or_default()
    }
}

/// Rebuild the container tree from a token stream.
///
/// `len` is the source length, used as the end of unterminated containers.
pub fn build_tree(tokens: Vec<Token>, len: usize) -> BookmarkTree {
    let toolbar_seen = tokens.iter().any(|t| t.kind.is_toolbar_header());

    let mut builder = Builder::new();
    for token in tokens {
        builder.push(token);
    }

    BookmarkTree {
        items: builder.finish(len),
        toolbar_seen,
    }
}
