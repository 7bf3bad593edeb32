//! Bookmarks page document (`pages/bookmarks.yml`).

use anyhow::{Context, Result};
use serde::Serialize;

use super::yaml::to_block_yaml;
use crate::bookmark::Category;
use crate::utils::date::DateTimeUtc;

/// Default page strings.
pub const DEFAULT_TITLE: &str = "我的书签";
pub const DEFAULT_SUBTITLE: &str = "从浏览器导入的书签收藏";

/// The page document written for the site generator.
#[derive(Debug, Clone, Serialize)]
pub struct BookmarksPage<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub categories: &'a [Category],
}

/// Values shown in the generated-file comment header.
#[derive(Debug, Clone, Default)]
pub struct PageHeader {
    /// `None` for reproducible output.
    pub generated_at: Option<DateTimeUtc>,
    /// Where new exports should be dropped, as shown to the user.
    pub bookmarks_dir: String,
    /// Directory the page file lives in, as shown to the user.
    pub pages_dir: String,
}

impl PageHeader {
    fn render(&self) -> String {
        let mut out = String::from("# 自动生成的书签配置文件\n");
        if let Some(at) = self.generated_at {
            out.push_str(&format!(
                "# 由 {} 生成于 {}\n",
                env!("CARGO_PKG_NAME"),
                at.to_rfc3339()
            ));
        }
        out.push_str(&format!(
            "# 若要更新，请将新的书签HTML文件放入 {}/ 目录\n",
            self.bookmarks_dir
        ));
        out.push_str(&format!(
            "# 此文件使用模块化配置格式，位于 {}/ 目录下\n",
            self.pages_dir
        ));
        out
    }
}

/// Render the page as commented block YAML.
pub fn render_page(page: &BookmarksPage<'_>, header: &PageHeader) -> Result<String> {
    let value = serde_yaml::to_value(page).context("Failed to convert bookmarks page to YAML")?;

    let mut out = header.render();
    out.push('\n');
    out.push_str(&to_block_yaml(&value));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::parse_bookmarks;
    use crate::bookmark::model::Site;
    use serde_yaml::Value;

    fn strip_comments(yaml: &str) -> String {
        yaml.lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(at: Option<DateTimeUtc>) -> PageHeader {
        PageHeader {
            generated_at: at,
            bookmarks_dir: "bookmarks".into(),
            pages_dir: "config/user/pages".into(),
        }
    }

    fn sample_categories() -> Vec<Category> {
        let mut category = Category::new("示例分类", vec!["示例分类".into()], 1);
        category.sites.push(Site {
            name: "Example".into(),
            url: "https://example.com".into(),
            icon: "fas fa-link".into(),
            description: String::new(),
        });
        vec![category]
    }

    #[test]
    fn test_render_has_header_and_parses() {
        let categories = sample_categories();
        let page = BookmarksPage {
            title: DEFAULT_TITLE,
            subtitle: DEFAULT_SUBTITLE,
            categories: &categories,
        };
        let text = render_page(&page, &header(None)).unwrap();

        assert!(text.starts_with("# 自动生成的书签配置文件\n"));
        assert!(text.contains("categories:\n  - name: 示例分类\n"));

        let parsed: Value = serde_yaml::from_str(&strip_comments(&text)).unwrap();
        assert_eq!(parsed["title"], Value::from(DEFAULT_TITLE));
        assert_eq!(parsed["categories"][0]["name"], Value::from("示例分类"));
    }

    #[test]
    fn test_timestamp_is_optional() {
        let categories = sample_categories();
        let page = BookmarksPage {
            title: DEFAULT_TITLE,
            subtitle: DEFAULT_SUBTITLE,
            categories: &categories,
        };
        let with = render_page(&page, &header(Some(DateTimeUtc::from_unix_seconds(0)))).unwrap();
        let without = render_page(&page, &header(None)).unwrap();

        assert!(with.contains("1970-01-01T00:00:00Z"));
        assert!(!without.contains("生成于"));
        assert_eq!(strip_comments(&with), strip_comments(&without));
        assert_eq!(without, render_page(&page, &header(None)).unwrap());
    }

    #[test]
    fn test_roundtrip_parsed_document() {
        let html = r#"<DL><p><DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bar</H3><DL><p>
<DT><A HREF="https://github.com/x">GH</A>
<DT><A HREF="https://a.dev/?q=1&amp;r=2">true</A>
<DT><H3>Dev: tools</H3><DL><p>
  <DT><A HREF="https://docs.rs">- docs #1</A>
  <DT><H3>2024</H3><DL><p>
    <DT><H3>deeper</H3><DL><p><DT><A HREF="https://x.dev">x</A></DL><p>
    <DT><A HREF="https://y.dev">'quoted'</A>
  </DL><p>
</DL><p>
</DL><p></DL><p>"#;
        let doc = parse_bookmarks(html);
        let page = BookmarksPage {
            title: DEFAULT_TITLE,
            subtitle: DEFAULT_SUBTITLE,
            categories: &doc.categories,
        };

        let text = render_page(&page, &header(Some(DateTimeUtc::now()))).unwrap();
        let parsed: Value = serde_yaml::from_str(&strip_comments(&text)).unwrap();
        assert_eq!(parsed, serde_yaml::to_value(&page).unwrap());
        assert_eq!(parsed["categories"][1]["subcategories"][0]["name"], Value::from("2024"));
    }

    #[test]
    fn test_roundtrip_titles_with_line_separators() {
        let mut categories = sample_categories();
        categories[0].sites[0].name = "line\u{2028}sep".into();
        categories[0].sites.push(Site {
            name: "para\u{2029}graph".into(),
            url: "https://example.org".into(),
            icon: "fas fa-link".into(),
            description: String::new(),
        });
        let page = BookmarksPage {
            title: DEFAULT_TITLE,
            subtitle: DEFAULT_SUBTITLE,
            categories: &categories,
        };

        let text = render_page(&page, &header(None)).unwrap();
        let parsed: Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, serde_yaml::to_value(&page).unwrap());
        assert_eq!(
            parsed["categories"][0]["sites"][0]["name"],
            Value::from("line\u{2028}sep")
        );
    }
}
