//! Show and bump the engagement counters

use anyhow::Result;

use crate::Blog;

/// Print the current counters
pub fn show(blog: &Blog) -> Result<()> {
    let metrics = blog.metrics().load()?;
    let helpers = blog.helpers();
    println!("Visitors: {}", helpers.count(metrics.visitors));
    println!("Likes:    {}", helpers.count(metrics.likes));
    Ok(())
}

/// Record one like and print the new total
pub fn like(blog: &Blog) -> Result<()> {
    let metrics = blog.metrics().like()?;
    println!("Likes: {}", blog.helpers().count(metrics.likes));
    Ok(())
}
