//! Illustrative posts shown while the store is empty

use chrono::{DateTime, Duration, Utc};

use super::Post;

const SEED_PUBLISHER: &str = "Dr. M. Manikandan";
const SEED_CONTENT: &str = "Full content would go here. This is a mock post for demonstration.";

/// (id, title, excerpt, image, age in days)
const SEED: [(&str, &str, &str, &str, i64); 3] = [
    (
        "1",
        "The Future of Generative AI in Education",
        "How AI is transforming the way we learn and teach, making education more personalized and accessible than ever before.",
        "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        0,
    ),
    (
        "2",
        "Understanding Large Language Models",
        "A deep dive into the architecture behind GPT-4 and other LLMs, explained in simple terms for everyone.",
        "https://images.unsplash.com/photo-1677442136019-21780ecad995?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        1,
    ),
    (
        "3",
        "AI Ethics: Navigating the Grey Areas",
        "As AI becomes more powerful, we must address the ethical implications of bias, privacy, and automation.",
        "https://images.unsplash.com/photo-1617791160505-6f00504e3519?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        2,
    ),
];

/// Build the seed posts, dated relative to `now`. Never persisted.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    SEED.iter()
        .map(|(id, title, excerpt, image, age_days)| Post {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            content: SEED_CONTENT.to_string(),
            publisher: Some(SEED_PUBLISHER.to_string()),
            image: Some(image.to_string()),
            date: now - Duration::days(*age_days),
        })
        .collect()
}
