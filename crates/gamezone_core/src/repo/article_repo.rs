//! Article repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the seven `articles` queries the views depend on.
//! - Keep SQL and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Article::validate()` before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - Ordered listings are `created_at DESC, id ASC`.

use crate::db::DbError;
use crate::model::article::{Article, ArticleDraft, ArticleId, ArticleValidationError};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ARTICLE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    excerpt,
    image_url,
    category,
    tags,
    featured,
    published,
    created_at,
    author_id
FROM articles";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for article/profile persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ArticleValidationError),
    Db(DbError),
    NotFound(Uuid),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "row not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ArticleValidationError> for RepoError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface over the `articles` table.
pub trait ArticleRepository {
    /// Published rows, newest first.
    fn list_published(&self) -> RepoResult<Vec<Article>>;
    /// One row by id, only when published.
    fn get_published(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    /// Published rows sharing `category`, excluding `exclude`, at most `limit`.
    fn list_related(
        &self,
        category: &str,
        exclude: ArticleId,
        limit: u32,
    ) -> RepoResult<Vec<Article>>;
    /// Every row regardless of `published`, newest first.
    fn list_all(&self) -> RepoResult<Vec<Article>>;
    fn insert_article(&self, article: &Article) -> RepoResult<ArticleId>;
    /// Full replace of the editable fields of one row.
    fn update_article(&self, id: ArticleId, draft: &ArticleDraft) -> RepoResult<()>;
    /// Hard delete. Returns `NotFound` when no row matched.
    fn delete_article(&self, id: ArticleId) -> RepoResult<()>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_articles(&self, sql: &str, params: impl Params) -> RepoResult<Vec<Article>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(parse_article_row(row)?);
        }
        Ok(articles)
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn list_published(&self) -> RepoResult<Vec<Article>> {
        self.query_articles(
            &format!(
                "{ARTICLE_SELECT_SQL}
                 WHERE published = 1
                 ORDER BY created_at DESC, id ASC;"
            ),
            [],
        )
    }

    fn get_published(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let mut found = self.query_articles(
            &format!(
                "{ARTICLE_SELECT_SQL}
                 WHERE id = ?1
                   AND published = 1;"
            ),
            [id.to_string()],
        )?;
        Ok(found.pop())
    }

    fn list_related(
        &self,
        category: &str,
        exclude: ArticleId,
        limit: u32,
    ) -> RepoResult<Vec<Article>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        self.query_articles(
            &format!(
                "{ARTICLE_SELECT_SQL}
                 WHERE category = ?1
                   AND id <> ?2
                   AND published = 1
                 ORDER BY created_at DESC, id ASC
                 LIMIT ?3;"
            ),
            params![category, exclude.to_string(), i64::from(limit)],
        )
    }

    fn list_all(&self) -> RepoResult<Vec<Article>> {
        self.query_articles(
            &format!("{ARTICLE_SELECT_SQL} ORDER BY created_at DESC, id ASC;"),
            [],
        )
    }

    fn insert_article(&self, article: &Article) -> RepoResult<ArticleId> {
        article.validate()?;

        self.conn.execute(
            "INSERT INTO articles (
                id,
                title,
                content,
                excerpt,
                image_url,
                category,
                tags,
                featured,
                published,
                created_at,
                author_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11);",
            params![
                article.id.to_string(),
                article.title.as_str(),
                article.content.as_str(),
                article.excerpt.as_deref(),
                article.image_url.as_deref(),
                article.category.as_str(),
                encode_tags(article.tags.as_deref())?,
                article.featured,
                article.published,
                article.created_at.timestamp_millis(),
                article.author_id.to_string(),
            ],
        )?;

        Ok(article.id)
    }

    fn update_article(&self, id: ArticleId, draft: &ArticleDraft) -> RepoResult<()> {
        if draft.title.trim().is_empty() {
            return Err(ArticleValidationError::EmptyTitle.into());
        }
        if draft.category.trim().is_empty() {
            return Err(ArticleValidationError::EmptyCategory.into());
        }

        let changed = self.conn.execute(
            "UPDATE articles
             SET
                title = ?2,
                content = ?3,
                excerpt = ?4,
                image_url = ?5,
                category = ?6,
                tags = ?7,
                featured = ?8,
                published = ?9
             WHERE id = ?1;",
            params![
                id.to_string(),
                draft.title.as_str(),
                draft.content.as_str(),
                draft.excerpt.as_deref(),
                draft.image_url.as_deref(),
                draft.category.as_str(),
                encode_tags(Some(draft.tags.as_slice()))?,
                draft.featured,
                draft.published,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_article(&self, id: ArticleId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM articles WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<Article> {
    let id = parse_uuid(row.get("id")?, "articles.id")?;
    let author_id = parse_uuid(row.get("author_id")?, "articles.author_id")?;

    let created_at_ms: i64 = row.get("created_at")?;
    let created_at = DateTime::<Utc>::from_timestamp_millis(created_at_ms).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid created_at value `{created_at_ms}` in articles.created_at"
        ))
    })?;

    let tags = match row.get::<_, Option<String>>("tags")? {
        Some(raw) => Some(serde_json::from_str::<Vec<String>>(&raw).map_err(|err| {
            RepoError::InvalidData(format!("invalid tags value `{raw}` in articles.tags: {err}"))
        })?),
        None => None,
    };

    let article = Article {
        id,
        title: row.get("title")?,
        content: row.get("content")?,
        excerpt: row.get("excerpt")?,
        image_url: row.get("image_url")?,
        category: row.get("category")?,
        tags,
        featured: parse_flag(row.get("featured")?, "articles.featured")?,
        published: parse_flag(row.get("published")?, "articles.published")?,
        created_at,
        author_id,
    };
    article.validate()?;
    Ok(article)
}

pub(crate) fn parse_uuid(value: String, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(&value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

fn parse_flag(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid flag value `{other}` in {column}"
        ))),
    }
}

fn encode_tags(tags: Option<&[String]>) -> RepoResult<Option<String>> {
    tags.map(serde_json::to_string)
        .transpose()
        .map_err(|err| RepoError::InvalidData(format!("tags are not serializable: {err}")))
}
