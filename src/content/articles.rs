//! Kriya Yoga articles

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Symbol name shown next to the article
    pub icon: &'static str,
}

const ARTICLES: [Article; 2] = [
    Article {
        slug: "introduction-to-kriya-yoga",
        title: "Introduction to Kriya Yoga",
        description: "Learn the basics of Kriya Yoga and its benefits.",
        icon: "book",
    },
    Article {
        slug: "breathing-techniques",
        title: "Breathing Techniques",
        description: "Master key breathing techniques in Kriya Yoga.",
        icon: "wind",
    },
];

pub fn articles() -> &'static [Article] {
    &ARTICLES
}

/// Look up an article by slug
pub fn article(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.slug == slug)
}
