//! Summary card shown in grids, the hero slot and related lists.

use crate::model::article::{Article, ArticleId};
use crate::route::Route;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NO_EXCERPT_FALLBACK: &str = "No excerpt available";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const CARD_TAG_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleCard {
    pub id: ArticleId,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub image_url: String,
    /// At most [`CARD_TAG_LIMIT`] tags, in stored order.
    pub tags: Vec<String>,
    pub published_on: NaiveDate,
    pub link: Route,
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            category: article.category.clone(),
            excerpt: article
                .excerpt
                .clone()
                .unwrap_or_else(|| NO_EXCERPT_FALLBACK.to_string()),
            image_url: article
                .image_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            tags: article
                .tag_list()
                .iter()
                .take(CARD_TAG_LIMIT)
                .cloned()
                .collect(),
            published_on: article.created_at.date_naive(),
            link: Route::article(article.id),
        }
    }
}
