//! Single-post view

use crate::content::Post;
use crate::helpers::{html_escape, image_tag, link_to, nl2br, time_tag, Helpers};
use crate::storage::Result;
use crate::store::{Metrics, PostStore};

use super::layout;

/// Outcome of resolving the `id` query parameter
#[derive(Debug, Clone)]
pub enum PostView {
    Found(Post),
    NotFound,
}

impl PostView {
    /// Resolve `id` against the store; a missing id is simply not found
    pub fn resolve(store: &PostStore, id: Option<&str>) -> Result<Self> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return Ok(Self::NotFound);
        };

        Ok(match store.find_by_id(id)? {
            Some(post) => Self::Found(post),
            None => {
                tracing::debug!("No post with id {:?}", id);
                Self::NotFound
            }
        })
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// "Post not found" state with a way back home
pub fn render_not_found(helpers: &Helpers) -> String {
    format!(
        r#"<div id="post-container" class="not-found">
    <p>Post not found.</p>
    {}
</div>"#,
        link_to(&helpers.url_for("index.html"), "Go Home", None)
    )
}

/// Full post body: header, cover image and content
pub fn render_post(helpers: &Helpers, post: &Post) -> String {
    let config = helpers.config();

    format!(
        r#"<article id="post-container">
<header>
    <div class="meta">{date} &bull; {publisher}</div>
    <h1>{title}</h1>
    {cover}
</header>
<div class="content">
{content}
</div>
<p>{back}</p>
</article>"#,
        date = time_tag(&post.date, &helpers.date(&post.date)),
        publisher = html_escape(post.publisher_or(&config.default_publisher)),
        title = html_escape(&post.title),
        cover = image_tag(
            post.image_or(&config.cover_fallback_image),
            "Cover Image",
            Some("cover")
        ),
        content = nl2br(&post.content),
        back = link_to(&helpers.url_for("index.html"), "&larr; Back to Home", None),
    )
}

/// Full single-post page
pub fn post_page(helpers: &Helpers, view: &PostView, metrics: &Metrics) -> String {
    match view {
        PostView::Found(post) => layout(helpers, &post.title, &render_post(helpers, post), metrics),
        PostView::NotFound => layout(helpers, "Not found", &render_not_found(helpers), metrics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::storage::StorageAdapter;
    use chrono::{TimeZone, Utc};

    fn helpers() -> Helpers {
        Helpers::new(SiteConfig {
            timezone: "UTC".to_string(),
            ..Default::default()
        })
    }

    fn store() -> PostStore {
        PostStore::new(StorageAdapter::in_memory())
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let store = store();
        assert!(!PostView::resolve(&store, None).unwrap().is_found());
        assert!(!PostView::resolve(&store, Some("")).unwrap().is_found());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let view = PostView::resolve(&store(), Some("99")).unwrap();
        assert!(!view.is_found());

        let page = post_page(&helpers(), &view, &Metrics::default());
        assert!(page.contains("Post not found."));
        assert!(page.contains(r#"<a href="/index.html">Go Home</a>"#));
    }

    #[test]
    fn test_seed_post_resolves() {
        let view = PostView::resolve(&store(), Some("2")).unwrap();
        match view {
            PostView::Found(post) => assert_eq!(post.title, "Understanding Large Language Models"),
            PostView::NotFound => panic!("seed post 2 should resolve"),
        }
    }

    #[test]
    fn test_content_newlines_become_breaks() {
        let post = Post {
            id: "p".to_string(),
            title: "Lines".to_string(),
            excerpt: String::new(),
            content: "first\nsecond\n<em>third</em>".to_string(),
            publisher: Some("Jane".to_string()),
            image: None,
            date: Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap(),
        };
        let html = render_post(&helpers(), &post);

        assert!(html.contains("first<br>second<br><em>third</em>"));
        assert!(html.contains("February 29, 2024"));
        assert!(html.contains("Jane"));
        assert!(html.contains("w=1200"));
    }
}
