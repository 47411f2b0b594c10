//! Core domain logic for the GameZone news site.
//! This crate is the single source of truth for article and access rules.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod route;
pub mod search;
pub mod seed;
pub mod service;
pub mod view;

pub use app::{AdminView, App, AuthView, Page};
pub use auth::{AuthClient, AuthEvent, LocalAuthClient, Session, Subscription};
pub use config::AppConfig;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleDraft, ArticleId, ArticleValidationError, UserId};
pub use model::article_form::{ArticleForm, ArticleFormError};
pub use model::profile::Profile;
pub use notify::{Confirm, LogNotifier, Notice, NoticeLevel, Notifier, RecordingNotifier};
pub use repo::article_repo::{ArticleRepository, RepoError, RepoResult, SqliteArticleRepository};
pub use repo::profile_repo::{ProfileRepository, SqliteProfileRepository};
pub use route::Route;
pub use search::filter::{filter_articles, ArticleFilter, ALL_CATEGORIES};
pub use service::admin_service::{check_admin_access, AdminAccess, AdminError, AdminPanel};
pub use service::detail_service::DetailService;
pub use service::listing_service::{HomeFeed, ListingService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
