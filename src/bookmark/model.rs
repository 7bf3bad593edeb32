//! Bookmark page data model.
//!
//! Categories are one recursive type with a `depth`; the level-specific key
//! names of the page format (`subcategories`, `groups`, `subgroups`) only
//! appear in the `Serialize` impl.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Deepest level the page format renders.
pub const MAX_DEPTH: u8 = 4;

/// Icon for folders.
pub const FOLDER_ICON: &str = "fas fa-folder";

/// Label and icon of the synthetic category holding bookmarks that sit
/// directly on the bookmarks bar.
pub const ROOT_CATEGORY_NAME: &str = "根目录书签";
pub const ROOT_CATEGORY_ICON: &str = "fas fa-star";

/// A single bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub name: String,
    pub url: String,
    pub icon: String,
    /// Filled in by later steps of the site pipeline, never by the parser.
    pub description: String,
}

/// A folder at some depth of the category tree (1 = top level).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub icon: String,
    /// Ancestor names from the top level down to this node.
    pub path: Vec<String>,
    pub depth: u8,
    pub sites: Vec<Site>,
    pub children: Vec<Category>,
}

impl Category {
    pub fn new(name: impl Into<String>, path: Vec<String>, depth: u8) -> Self {
        Self {
            name: name.into(),
            icon: FOLDER_ICON.to_string(),
            path,
            depth,
            sites: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The synthetic top-level category for bookmarks outside any folder.
    pub fn root_bookmarks(sites: Vec<Site>) -> Self {
        Self {
            name: ROOT_CATEGORY_NAME.to_string(),
            icon: ROOT_CATEGORY_ICON.to_string(),
            path: vec![ROOT_CATEGORY_NAME.to_string()],
            depth: 1,
            sites,
            children: Vec::new(),
        }
    }

    /// Whether the node survives pruning.
    #[inline]
    pub fn has_content(&self) -> bool {
        !self.sites.is_empty() || !self.children.is_empty()
    }

    /// Key the children are serialized under at this node's depth.
    pub fn children_key(&self) -> Option<&'static str> {
        children_key(self.depth)
    }

    /// Number of sites in this subtree.
    pub fn site_count(&self) -> usize {
        self.sites.len() + self.children.iter().map(Self::site_count).sum::<usize>()
    }
}

/// Depth to child-collection key: 1 -> `subcategories`, 2 -> `groups`,
/// 3 -> `subgroups`; nodes at [`MAX_DEPTH`] hold sites only.
pub const fn children_key(depth: u8) -> Option<&'static str> {
    match depth {
        1 => Some("subcategories"),
        2 => Some("groups"),
        3 => Some("subgroups"),
        _ => None,
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("icon", &self.icon)?;
        map.serialize_entry("path", &self.path)?;
        if let Some(key) = self.children_key()
            && !self.children.is_empty()
        {
            map.serialize_entry(key, &self.children)?;
        }
        if !self.sites.is_empty() {
            map.serialize_entry("sites", &self.sites)?;
        }
        map.end()
    }
}

/// Parser output: top-level categories in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookmarkDocument {
    pub categories: Vec<Category>,
}

impl BookmarkDocument {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn site_count(&self) -> usize {
        self.categories.iter().map(Category::site_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn site(name: &str) -> Site {
        Site {
            name: name.into(),
            url: format!("https://{name}.dev"),
            icon: "fas fa-link".into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_children_key_by_depth() {
        assert_eq!(children_key(1), Some("subcategories"));
        assert_eq!(children_key(2), Some("groups"));
        assert_eq!(children_key(3), Some("subgroups"));
        assert_eq!(children_key(MAX_DEPTH), None);
    }

    #[test]
    fn test_serialize_projects_depth_to_key() {
        let mut top = Category::new("Top", vec!["Top".into()], 1);
        let mut mid = Category::new("Mid", vec!["Top".into(), "Mid".into()], 2);
        mid.sites.push(site("a"));
        top.children.push(mid);

        let value = serde_yaml::to_value(&top).unwrap();
        let mid_value = &value["subcategories"][0];
        assert_eq!(mid_value["name"], Value::from("Mid"));
        assert!(mid_value.get("groups").is_none());
        assert_eq!(mid_value["sites"][0]["description"], Value::from(""));
        assert!(value.get("sites").is_none());
    }

    #[test]
    fn test_site_count_and_content() {
        let mut top = Category::new("Top", vec![], 1);
        assert!(!top.has_content());
        let mut child = Category::new("C", vec![], 2);
        child.sites = vec![site("a"), site("b")];
        top.children.push(child);
        top.sites.push(site("c"));
        assert!(top.has_content());
        assert_eq!(top.site_count(), 3);
    }

    #[test]
    fn test_root_bookmarks_category() {
        let root = Category::root_bookmarks(vec![site("a")]);
        assert_eq!(root.name, ROOT_CATEGORY_NAME);
        assert_eq!(root.icon, ROOT_CATEGORY_ICON);
        assert_eq!(root.path, vec![ROOT_CATEGORY_NAME.to_string()]);
    }
}
