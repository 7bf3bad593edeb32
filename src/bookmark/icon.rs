//! URL keyword to icon-class table.
//!
//! Order is priority: the first keyword contained in the URL wins, so
//! `google.com` shadows the later `drive.google.com` entry.

/// Icon for bookmarks that match no keyword.
pub const DEFAULT_SITE_ICON: &str = "fas fa-link";

/// Ordered `(keyword, icon)` table. Matching is a case-sensitive substring test.
pub const ICON_TABLE: &[(&str, &str)] = &[
    ("github.com", "fab fa-github"),
    ("stackoverflow.com", "fab fa-stack-overflow"),
    ("youtube.com", "fab fa-youtube"),
    ("twitter.com", "fab fa-twitter"),
    ("facebook.com", "fab fa-facebook"),
    ("instagram.com", "fab fa-instagram"),
    ("linkedin.com", "fab fa-linkedin"),
    ("reddit.com", "fab fa-reddit"),
    ("amazon.com", "fab fa-amazon"),
    ("google.com", "fab fa-google"),
    ("gmail.com", "fas fa-envelope"),
    ("drive.google.com", "fab fa-google-drive"),
    ("docs.google.com", "fas fa-file-alt"),
    ("medium.com", "fab fa-medium"),
    ("dev.to", "fab fa-dev"),
    ("gitlab.com", "fab fa-gitlab"),
    ("bitbucket.org", "fab fa-bitbucket"),
    ("wikipedia.org", "fab fa-wikipedia-w"),
    ("discord.com", "fab fa-discord"),
    ("slack.com", "fab fa-slack"),
    ("apple.com", "fab fa-apple"),
    ("microsoft.com", "fab fa-microsoft"),
    ("android.com", "fab fa-android"),
    ("twitch.tv", "fab fa-twitch"),
    ("spotify.com", "fab fa-spotify"),
    ("pinterest.com", "fab fa-pinterest"),
    ("telegram.org", "fab fa-telegram"),
    ("whatsapp.com", "fab fa-whatsapp"),
    ("netflix.com", "fas fa-film"),
    ("trello.com", "fab fa-trello"),
    ("wordpress.com", "fab fa-wordpress"),
    ("jira", "fab fa-jira"),
    ("atlassian.com", "fab fa-atlassian"),
    ("dropbox.com", "fab fa-dropbox"),
    ("npm", "fab fa-npm"),
    ("docker.com", "fab fa-docker"),
    ("python.org", "fab fa-python"),
    ("javascript", "fab fa-js"),
    ("php.net", "fab fa-php"),
    ("java", "fab fa-java"),
    ("codepen.io", "fab fa-codepen"),
    ("behance.net", "fab fa-behance"),
    ("dribbble.com", "fab fa-dribbble"),
    ("tumblr.com", "fab fa-tumblr"),
    ("vimeo.com", "fab fa-vimeo"),
    ("flickr.com", "fab fa-flickr"),
    ("github.io", "fab fa-github"),
    ("airbnb.com", "fab fa-airbnb"),
    ("bitcoin", "fab fa-bitcoin"),
    ("paypal.com", "fab fa-paypal"),
    ("ethereum", "fab fa-ethereum"),
    ("steam", "fab fa-steam"),
];

/// Resolve the icon for a URL against [`ICON_TABLE`].
#[inline]
pub fn icon_for_url(url: &str) -> &'static str {
    icon_from_table(ICON_TABLE, url)
}

/// First-match lookup in an arbitrary ordered table.
pub fn icon_from_table(table: &[(&str, &'static str)], url: &str) -> &'static str {
    table
        .iter()
        .find(|(keyword, _)| url.contains(*keyword))
        .map_or(DEFAULT_SITE_ICON, |&(_, icon)| icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hosts() {
        assert_eq!(icon_for_url("https://github.com/rust-lang"), "fab fa-github");
        assert_eq!(icon_for_url("https://rust-lang.github.io/book"), "fab fa-github");
        assert_eq!(icon_for_url("https://www.youtube.com/watch"), "fab fa-youtube");
    }

    #[test]
    fn test_first_match_wins() {
        // `google.com` precedes `drive.google.com` in table order.
        assert_eq!(icon_for_url("https://drive.google.com/x"), "fab fa-google");
        // `javascript` precedes `java`.
        assert_eq!(icon_for_url("https://javascript.info"), "fab fa-js");
        assert_eq!(icon_for_url("https://java.com"), "fab fa-java");
    }

    #[test]
    fn test_custom_table_order() {
        let table = [("b", "icon-b"), ("a", "icon-a")];
        assert_eq!(icon_from_table(&table, "https://ab.dev"), "icon-b");
        assert_eq!(icon_from_table(&table, "https://xyz.dev"), DEFAULT_SITE_ICON);
    }

    #[test]
    fn test_default_and_case_sensitivity() {
        assert_eq!(icon_for_url("https://example.org"), DEFAULT_SITE_ICON);
        assert_eq!(icon_for_url("https://GITHUB.COM/x"), DEFAULT_SITE_ICON);
    }
}
