//! List posts

use anyhow::Result;

use crate::Blog;

/// Print the feed in store order
pub fn run(blog: &Blog) -> Result<()> {
    let list = blog.posts().list()?;
    let helpers = blog.helpers();

    if list.using_defaults {
        println!("Posts ({}, sample content - nothing saved yet):", list.posts.len());
    } else {
        println!("Posts ({}):", list.posts.len());
    }

    for post in &list.posts {
        println!(
            "  {} - {} by {} [{}]",
            helpers.date(&post.date),
            post.title,
            post.publisher_or(&blog.config.default_publisher),
            post.id
        );
    }

    Ok(())
}
