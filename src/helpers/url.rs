//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a query-string value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/post.html") // -> "/blog/post.html"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Link to the single-post view
///
/// # Examples
/// ```ignore
/// post_url(&config, "2") // -> "/post.html?id=2"
/// ```
pub fn post_url(config: &SiteConfig, id: &str) -> String {
    format!("{}?id={}", url_for(config, "post.html"), encode_query_value(id))
}

/// Percent-encode a query-string value
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
