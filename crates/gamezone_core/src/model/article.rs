//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical `articles` row shared by every view.
//! - Provide the editable-field projection used by admin create/update.
//!
//! # Invariants
//! - `id` is stable and never reused for another article.
//! - `title` and `category` are never blank for a persisted row.
//! - `published` gates public visibility; `featured` only affects the hero
//!   slot and is not unique across rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an article row.
pub type ArticleId = Uuid;

/// Stable identifier for an authenticated user.
pub type UserId = Uuid;

/// Canonical article record, field-named after the backend columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Long-form body text.
    pub content: String,
    pub excerpt: Option<String>,
    /// Cover image reference; an absolute URL when set through the admin form.
    pub image_url: Option<String>,
    /// Free-text label, compared exactly by the category filter.
    pub category: String,
    /// Ordered tags; `None` when the row never had a tag list.
    pub tags: Option<Vec<String>>,
    pub featured: bool,
    pub published: bool,
    /// Millisecond precision, matching storage.
    pub created_at: DateTime<Utc>,
    pub author_id: UserId,
}

/// Editable article fields, already validated and normalized.
///
/// Produced by [`crate::ArticleForm::validate`]; consumed by insert (with an
/// owner) and by update (full replace of these fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
}

/// Structural validation errors for persisted article rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    NilId,
    NilAuthor,
    EmptyTitle,
    EmptyCategory,
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "article id must not be nil"),
            Self::NilAuthor => write!(f, "article author_id must not be nil"),
            Self::EmptyTitle => write!(f, "article title must not be blank"),
            Self::EmptyCategory => write!(f, "article category must not be blank"),
        }
    }
}

impl Error for ArticleValidationError {}

impl Article {
    /// Builds a new row from a draft, owned by `author_id`.
    ///
    /// Generates a fresh id and stamps `created_at` with the current time,
    /// truncated to milliseconds.
    pub fn from_draft(draft: ArticleDraft, author_id: UserId) -> Self {
        Self::with_id(Uuid::new_v4(), draft, author_id, now_millis())
    }

    /// Builds a row with caller-provided identity and timestamp.
    ///
    /// Used by seed/import paths and tests where identity already exists.
    pub fn with_id(
        id: ArticleId,
        draft: ArticleDraft,
        author_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            excerpt: draft.excerpt,
            image_url: draft.image_url,
            category: draft.category,
            tags: Some(draft.tags),
            featured: draft.featured,
            published: draft.published,
            created_at,
            author_id,
        }
    }

    /// Replaces every editable field with the draft's values.
    ///
    /// `id`, `created_at` and `author_id` are left untouched.
    pub fn apply_draft(&mut self, draft: ArticleDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.excerpt = draft.excerpt;
        self.image_url = draft.image_url;
        self.category = draft.category;
        self.tags = Some(draft.tags);
        self.featured = draft.featured;
        self.published = draft.published;
    }

    /// Validates the structural invariants enforced on every write and read.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.id.is_nil() {
            return Err(ArticleValidationError::NilId);
        }
        if self.author_id.is_nil() {
            return Err(ArticleValidationError::NilAuthor);
        }
        if self.title.trim().is_empty() {
            return Err(ArticleValidationError::EmptyTitle);
        }
        if self.category.trim().is_empty() {
            return Err(ArticleValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// Tags as a slice; empty when the row has no tag list.
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// Current time truncated to the millisecond precision used in storage.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
