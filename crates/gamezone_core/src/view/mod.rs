//! Render-ready projections of each page.
//!
//! These are plain serializable values; the embedding surface decides how to
//! draw them.

pub mod auth_page;
pub mod card;

pub use auth_page::AuthPage;
pub use card::ArticleCard;

use crate::model::article::{Article, ArticleId};
use crate::route::Route;
use serde::{Deserialize, Serialize};

pub const NO_ARTICLES_HEADING: &str = "No articles found";
pub const NOTHING_PUBLISHED_MESSAGE: &str =
    "No articles have been published yet. Check back later!";
pub const FILTERED_EMPTY_MESSAGE: &str =
    "Try adjusting your search query or selecting a different category.";

/// Empty grid message; which one depends on whether anything was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyState {
    pub heading: String,
    pub message: String,
    /// `true` when the unfiltered set was empty as well.
    pub nothing_published: bool,
}

impl EmptyState {
    pub fn for_listing(nothing_published: bool) -> Self {
        let message = if nothing_published {
            NOTHING_PUBLISHED_MESSAGE
        } else {
            FILTERED_EMPTY_MESSAGE
        };
        Self {
            heading: NO_ARTICLES_HEADING.to_string(),
            message: message.to_string(),
            nothing_published,
        }
    }
}

/// One entry of the category menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChip {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Grid {
    Cards { cards: Vec<ArticleCard> },
    Empty(EmptyState),
}

/// Home page projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeView {
    pub query: String,
    pub featured: Option<ArticleCard>,
    pub categories: Vec<CategoryChip>,
    pub grid: Grid,
}

/// Article detail page projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    Found {
        article: Article,
        related: Vec<ArticleCard>,
        back: Route,
    },
    NotFound {
        message: String,
        action_label: String,
        back: Route,
    },
}

impl DetailView {
    pub fn not_found() -> Self {
        Self::NotFound {
            message: "Article not found".to_string(),
            action_label: "Back to Home".to_string(),
            back: Route::Home,
        }
    }

    /// Route the page's return action navigates to.
    pub fn back(&self) -> &Route {
        match self {
            Self::Found { back, .. } | Self::NotFound { back, .. } => back,
        }
    }
}

/// One row of the admin article list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRow {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: Option<String>,
    pub category: String,
    pub featured: bool,
    /// `"Published"` or `"Draft"`.
    pub status: String,
}

impl From<&Article> for AdminRow {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            category: article.category.clone(),
            featured: article.featured,
            status: if article.published { "Published" } else { "Draft" }.to_string(),
        }
    }
}

/// Access-denied state of the admin gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDenied {
    pub title: String,
    pub description: String,
}

impl Default for AccessDenied {
    fn default() -> Self {
        Self {
            title: "Access Denied".to_string(),
            description: "You don't have admin privileges to access this panel.".to_string(),
        }
    }
}

/// Catch-all 404 page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundView {
    pub attempted_path: String,
    pub heading: String,
    pub action_label: String,
    pub back: Route,
}

impl NotFoundView {
    pub fn new(attempted_path: impl Into<String>) -> Self {
        let attempted_path = attempted_path.into();
        log::error!(
            "event=route_not_found module=route status=error path={attempted_path}"
        );
        Self {
            attempted_path,
            heading: "404".to_string(),
            action_label: "Return to GameZone".to_string(),
            back: Route::Home,
        }
    }
}
