//! Print one post

use anyhow::Result;

use crate::Blog;

/// Print the post with `id`, or a not-found notice
pub fn run(blog: &Blog, id: &str) -> Result<()> {
    let Some(post) = blog.posts().find_by_id(id)? else {
        println!("Post not found: {}", id);
        return Ok(());
    };

    let helpers = blog.helpers();
    println!("{}", post.title);
    println!(
        "{} | {}",
        helpers.date(&post.date),
        post.publisher_or(&blog.config.default_publisher)
    );
    println!("{}", post.image_or(&blog.config.cover_fallback_image));
    println!();
    println!("{}", post.content);

    Ok(())
}
