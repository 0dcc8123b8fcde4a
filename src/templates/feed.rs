//! Feed view: one card per post, in store order

use crate::content::Post;
use crate::helpers::{html_escape, image_tag, link_to, time_tag, truncate, Helpers};
use crate::store::{Metrics, PostList};

use super::layout;

/// Render a single feed card
pub fn render_card(helpers: &Helpers, post: &Post) -> String {
    let config = helpers.config();
    let href = helpers.post_url(&post.id);
    let title = html_escape(&post.title);
    let excerpt = truncate(&post.excerpt, config.excerpt_length, None);

    format!(
        r#"<article class="card">
    {image}
    <div class="body">
        <div class="meta">{date} &bull; {publisher}</div>
        <h3>{title_link}</h3>
        <p>{excerpt}</p>
        {read_more}
    </div>
</article>"#,
        image = image_tag(post.image_or(&config.fallback_image), &post.title, None),
        date = time_tag(&post.date, &helpers.date(&post.date)),
        publisher = html_escape(post.publisher_or(&config.default_publisher)),
        title_link = link_to(&href, &title, None),
        excerpt = html_escape(&excerpt),
        read_more = link_to(&href, "Read Article &rarr;", Some("read-more")),
    )
}

/// Render the feed container with every post
pub fn render_feed(helpers: &Helpers, posts: &[Post]) -> String {
    let cards: Vec<String> = posts.iter().map(|p| render_card(helpers, p)).collect();
    format!(
        "<section id=\"blog-feed\">\n{}\n</section>",
        cards.join("\n")
    )
}

/// Full feed page
pub fn feed_page(helpers: &Helpers, list: &PostList, metrics: &Metrics) -> String {
    let config = helpers.config();
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"meta\">{}</p>\n",
        html_escape(&config.title),
        html_escape(&config.subtitle)
    );
    if list.using_defaults {
        body.push_str("<p class=\"meta\">No posts yet. Here are a few to get you started.</p>\n");
    }
    body.push_str(&render_feed(helpers, &list.posts));
    layout(helpers, "", &body, metrics)
}
