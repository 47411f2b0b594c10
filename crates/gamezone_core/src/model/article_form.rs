//! Admin article form state and validation.
//!
//! # Responsibility
//! - Hold raw, user-typed values for every editable article field.
//! - Turn raw input into a normalized [`ArticleDraft`] or the first rule
//!   violation.
//!
//! # Invariants
//! - Rules run in field order: title, content, excerpt, image, category.
//! - Only the first violated rule is reported.
//! - Validation is pure: it never touches storage.

use crate::model::article::{Article, ArticleDraft};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

pub const TITLE_MAX_CHARS: usize = 200;
pub const EXCERPT_MAX_CHARS: usize = 300;
pub const DEFAULT_CATEGORY: &str = "gaming";

/// Raw admin form values, as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleForm {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub category: String,
    /// Comma-separated tag input.
    pub tags: String,
    pub featured: bool,
    pub published: bool,
}

impl Default for ArticleForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            image_url: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            tags: String::new(),
            featured: false,
            published: false,
        }
    }
}

/// First violated form rule. `Display` is the message shown to the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleFormError {
    TitleRequired,
    TitleTooLong,
    ContentRequired,
    ExcerptTooLong,
    InvalidImageUrl,
    CategoryRequired,
}

impl Display for ArticleFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::TitleRequired => "Title is required",
            Self::TitleTooLong => "Title too long",
            Self::ContentRequired => "Content is required",
            Self::ExcerptTooLong => "Excerpt too long",
            Self::InvalidImageUrl => "Invalid image URL",
            Self::CategoryRequired => "Category is required",
        };
        f.write_str(message)
    }
}

impl Error for ArticleFormError {}

impl ArticleForm {
    /// Populates the form from an existing row for editing.
    ///
    /// Absent optional fields become empty strings; tags are joined with `", "`.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            excerpt: article.excerpt.clone().unwrap_or_default(),
            image_url: article.image_url.clone().unwrap_or_default(),
            category: article.category.clone(),
            tags: article.tag_list().join(", "),
            featured: article.featured,
            published: article.published,
        }
    }

    /// Validates and normalizes the form into a draft.
    pub fn validate(&self) -> Result<ArticleDraft, ArticleFormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ArticleFormError::TitleRequired);
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(ArticleFormError::TitleTooLong);
        }

        let content = self.content.trim();
        if content.is_empty() {
            return Err(ArticleFormError::ContentRequired);
        }

        let excerpt = self.excerpt.trim();
        if excerpt.chars().count() > EXCERPT_MAX_CHARS {
            return Err(ArticleFormError::ExcerptTooLong);
        }

        let image_url = self.image_url.trim();
        if !image_url.is_empty() && Url::parse(image_url).is_err() {
            return Err(ArticleFormError::InvalidImageUrl);
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(ArticleFormError::CategoryRequired);
        }

        Ok(ArticleDraft {
            title: title.to_string(),
            content: content.to_string(),
            excerpt: non_empty(excerpt),
            image_url: non_empty(image_url),
            category: category.to_string(),
            tags: parse_tags(&self.tags),
            featured: self.featured,
            published: self.published,
        })
    }
}

/// Splits comma-separated tag input into trimmed values, in input order.
///
/// Only an empty input yields no tags; blank segments are kept as `""`.
pub fn parse_tags(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
