//! Article detail use-case.
//!
//! # Invariants
//! - Only published articles are shown; anything else is a not-found state.
//! - At most [`RELATED_LIMIT`] related articles, same category, never the
//!   article itself.
//! - Nothing is cached across navigations.

use crate::model::article::ArticleId;
use crate::notify::Notifier;
use crate::repo::article_repo::ArticleRepository;
use crate::route::Route;
use crate::view::{ArticleCard, DetailView};
use log::{debug, error, warn};

pub const RELATED_LIMIT: u32 = 3;
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load article";

pub struct DetailService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> DetailService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the detail page for a raw route identifier.
    ///
    /// Malformed identifiers and missing rows both render as not-found.
    pub fn load(&self, raw_id: &str, notifier: &dyn Notifier) -> DetailView {
        match raw_id.trim().parse::<ArticleId>() {
            Ok(id) => self.load_by_id(id, notifier),
            Err(_) => {
                debug!("event=detail_load module=detail status=not_found reason=malformed_id");
                DetailView::not_found()
            }
        }
    }

    pub fn load_by_id(&self, id: ArticleId, notifier: &dyn Notifier) -> DetailView {
        let article = match self.repo.get_published(id) {
            Ok(Some(article)) => article,
            Ok(None) => {
                debug!("event=detail_load module=detail status=not_found id={id}");
                return DetailView::not_found();
            }
            Err(err) => {
                error!("event=detail_load module=detail status=error id={id} error={err}");
                notifier.error(DETAIL_FAILED_MESSAGE);
                return DetailView::not_found();
            }
        };

        // Related lookup failing only empties the related section.
        let related = match self
            .repo
            .list_related(&article.category, article.id, RELATED_LIMIT)
        {
            Ok(related) => related.iter().map(ArticleCard::from).collect(),
            Err(err) => {
                warn!("event=detail_related module=detail status=error id={id} error={err}");
                Vec::new()
            }
        };

        DetailView::Found {
            article,
            related,
            back: Route::Home,
        }
    }
}
