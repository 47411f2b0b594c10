//! In-memory search and category filtering over loaded articles.
//!
//! # Invariants
//! - Filtering is a pure linear scan; input order is preserved.
//! - Search and category predicates are ANDed and independent of each other.
//! - The category menu always starts with [`ALL_CATEGORIES`].

use crate::model::article::Article;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Current free-text query and category selection of the listing view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFilter {
    pub query: String,
    pub category: String,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ArticleFilter {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Case-insensitive substring match on title, or on excerpt when present.
    ///
    /// An empty query matches every article.
    pub fn matches_search(&self, article: &Article) -> bool {
        let needle = self.query.to_lowercase();
        article.title.to_lowercase().contains(&needle)
            || article
                .excerpt
                .as_deref()
                .is_some_and(|excerpt| excerpt.to_lowercase().contains(&needle))
    }

    /// Exact category match, or always true for the sentinel.
    pub fn matches_category(&self, article: &Article) -> bool {
        self.category == ALL_CATEGORIES || article.category == self.category
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.matches_search(article) && self.matches_category(article)
    }
}

/// Returns the articles matching `filter`, in input order.
pub fn filter_articles<'a>(articles: &'a [Article], filter: &ArticleFilter) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| filter.matches(article))
        .collect()
}

/// Sentinel followed by each distinct category in first-seen order.
pub fn category_menu(articles: &[Article]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut menu = vec![ALL_CATEGORIES.to_string()];
    for article in articles {
        if seen.insert(article.category.as_str()) {
            menu.push(article.category.clone());
        }
    }
    menu
}

/// First article flagged `featured`, if any.
pub fn featured_article(articles: &[Article]) -> Option<&Article> {
    articles.iter().find(|article| article.featured)
}

#[cfg(test)]
mod tests {
    use super::{category_menu, featured_article, filter_articles, ArticleFilter, ALL_CATEGORIES};
    use crate::model::article::{Article, ArticleDraft};
    use uuid::Uuid;

    fn article(title: &str, excerpt: Option<&str>, category: &str, featured: bool) -> Article {
        Article::from_draft(
            ArticleDraft {
                title: title.to_string(),
                content: "body".to_string(),
                excerpt: excerpt.map(str::to_string),
                image_url: None,
                category: category.to_string(),
                tags: Vec::new(),
                featured,
                published: true,
            },
            Uuid::new_v4(),
        )
    }

    #[test]
    fn search_matches_title_or_excerpt_case_insensitively() {
        let articles = vec![
            article("Cyberpunk 2077 patch", None, "Reviews", false),
            article("Phantom Liberty", Some("Back to the CYBERPUNK world"), "DLC", false),
            article("Stardew Valley", Some("Farming"), "Indie", false),
        ];

        let hits = filter_articles(&articles, &ArticleFilter::new("cyberpunk", ALL_CATEGORIES));
        let titles: Vec<_> = hits.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Cyberpunk 2077 patch", "Phantom Liberty"]);
    }

    #[test]
    fn category_filter_is_exact() {
        let articles = vec![
            article("a", None, "PC", false),
            article("b", None, "pc", false),
        ];
        let hits = filter_articles(&articles, &ArticleFilter::new("", "PC"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "a");
    }

    #[test]
    fn empty_query_matches_everything() {
        let articles = vec![article("a", None, "PC", false), article("b", None, "Console", false)];
        assert_eq!(filter_articles(&articles, &ArticleFilter::default()).len(), 2);
    }

    #[test]
    fn category_menu_lists_distinct_categories_after_sentinel() {
        let articles = vec![
            article("a", None, "Esports", false),
            article("b", None, "PC", false),
            article("c", None, "Esports", false),
        ];
        assert_eq!(category_menu(&articles), vec!["All", "Esports", "PC"]);
        assert_eq!(category_menu(&[]), vec!["All"]);
    }

    #[test]
    fn featured_is_first_flagged_article() {
        let articles = vec![
            article("plain", None, "PC", false),
            article("hero one", None, "PC", true),
            article("hero two", None, "PC", true),
        ];
        assert_eq!(featured_article(&articles).map(|a| a.title.as_str()), Some("hero one"));
        assert!(featured_article(&articles[..1]).is_none());
    }
}
