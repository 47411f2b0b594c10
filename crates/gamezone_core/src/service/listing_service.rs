//! Home feed use-case.
//!
//! # Responsibility
//! - Load published articles once per mount.
//! - Keep the in-memory feed state (query + category) and recompute the
//!   visible grid from the full set on every change.
//!
//! # Invariants
//! - The featured slot is the first featured article of the unfiltered set.
//! - Featured-flagged articles never appear in the regular grid.
//! - A failed load leaves an empty feed; it is logged and notified, never
//!   propagated.

use crate::model::article::Article;
use crate::notify::Notifier;
use crate::repo::article_repo::{ArticleRepository, RepoResult};
use crate::search::filter::{category_menu, featured_article, ArticleFilter};
use crate::view::{ArticleCard, CategoryChip, EmptyState, Grid, HomeView};
use log::{error, info};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load articles";

/// Loads the published article set for the home feed.
pub struct ListingService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ListingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Published articles, newest first.
    pub fn published_articles(&self) -> RepoResult<Vec<Article>> {
        self.repo.list_published()
    }

    /// Mounts the home feed with the default filter.
    ///
    /// Remote failures produce an empty feed and an error notification.
    pub fn load(&self, notifier: &dyn Notifier) -> HomeFeed {
        match self.published_articles() {
            Ok(articles) => {
                info!(
                    "event=listing_load module=listing status=ok count={}",
                    articles.len()
                );
                HomeFeed::new(articles)
            }
            Err(err) => {
                error!("event=listing_load module=listing status=error error={err}");
                notifier.error(LOAD_FAILED_MESSAGE);
                HomeFeed::new(Vec::new())
            }
        }
    }
}

/// Mounted home feed: the loaded set plus the current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeFeed {
    articles: Vec<Article>,
    filter: ArticleFilter,
}

impl HomeFeed {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            filter: ArticleFilter::default(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn filter(&self) -> &ArticleFilter {
        &self.filter
    }

    /// Search keystroke.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Category click; the sentinel clears the category filter.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn apply(&mut self, filter: ArticleFilter) {
        self.filter = filter;
    }

    pub fn featured(&self) -> Option<&Article> {
        featured_article(&self.articles)
    }

    pub fn categories(&self) -> Vec<String> {
        category_menu(&self.articles)
    }

    /// Filtered, non-featured articles in load order.
    pub fn regular(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| self.filter.matches(article) && !article.featured)
            .collect()
    }

    /// Full page projection for the current state.
    pub fn view(&self) -> HomeView {
        let regular = self.regular();
        let grid = if regular.is_empty() {
            Grid::Empty(EmptyState::for_listing(self.articles.is_empty()))
        } else {
            Grid::Cards {
                cards: regular.into_iter().map(ArticleCard::from).collect(),
            }
        };

        HomeView {
            query: self.filter.query.clone(),
            featured: self.featured().map(ArticleCard::from),
            categories: self
                .categories()
                .into_iter()
                .map(|label| CategoryChip {
                    selected: label == self.filter.category,
                    label,
                })
                .collect(),
            grid,
        }
    }
}
