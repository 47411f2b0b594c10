//! Route dispatcher: mounts the page for a path and returns its projection.
//!
//! Each call mounts a fresh page; nothing is shared between navigations.

use crate::auth::AuthClient;
use crate::notify::Notifier;
use crate::repo::article_repo::SqliteArticleRepository;
use crate::repo::profile_repo::SqliteProfileRepository;
use crate::route::Route;
use crate::search::filter::ArticleFilter;
use crate::service::admin_service::{check_admin_access, AdminAccess, AdminPanel, FormMode};
use crate::service::detail_service::DetailService;
use crate::service::listing_service::ListingService;
use crate::view::{AccessDenied, AdminRow, AuthPage, DetailView, HomeView, NotFoundView};
use log::debug;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Admin page projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdminView {
    Redirect { to: Route },
    Denied(AccessDenied),
    Panel {
        submit_label: String,
        rows: Vec<AdminRow>,
    },
}

/// Auth page projection at mount time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthView {
    pub redirect: Option<Route>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Home(HomeView),
    Article(DetailView),
    Auth(AuthView),
    Admin(AdminView),
    NotFound(NotFoundView),
}

/// Wires the storage connection, auth client and notifier into the pages.
pub struct App<'a> {
    conn: &'a Connection,
    auth: &'a dyn AuthClient,
    notifier: Arc<dyn Notifier + Send + Sync>,
}

impl<'a> App<'a> {
    pub fn new(
        conn: &'a Connection,
        auth: &'a dyn AuthClient,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self {
            conn,
            auth,
            notifier,
        }
    }

    /// Mounts the page for `path`. `filter` only applies to the home feed.
    pub fn open(&self, path: &str, filter: ArticleFilter) -> Page {
        let route = Route::parse(path);
        debug!("event=navigate module=app status=start route={route}");

        match route {
            Route::Home => {
                let mut feed = ListingService::new(self.articles()).load(self.notifier.as_ref());
                feed.apply(filter);
                Page::Home(feed.view())
            }
            Route::Article(id) => Page::Article(
                DetailService::new(self.articles()).load(&id, self.notifier.as_ref()),
            ),
            Route::Auth => {
                let page = AuthPage::mount(self.auth, Arc::clone(&self.notifier));
                Page::Auth(AuthView {
                    redirect: page.redirect(),
                })
            }
            Route::Admin => Page::Admin(self.admin()),
            Route::NotFound(path) => Page::NotFound(NotFoundView::new(path)),
        }
    }

    /// Runs the admin gate and, when granted, mounts the panel.
    pub fn admin_panel(&self) -> Result<AdminPanel<SqliteArticleRepository<'a>>, AdminAccess> {
        let session = self.auth.get_session();
        match check_admin_access(&SqliteProfileRepository::new(self.conn), session.as_ref()) {
            AdminAccess::Granted(user_id) => Ok(AdminPanel::mount(
                self.articles(),
                user_id,
                self.notifier.as_ref(),
            )),
            other => Err(other),
        }
    }

    fn admin(&self) -> AdminView {
        match self.admin_panel() {
            Ok(panel) => AdminView::Panel {
                submit_label: FormMode::submit_label(panel.mode()).to_string(),
                rows: panel.rows(),
            },
            Err(AdminAccess::SignInRequired(to)) => AdminView::Redirect { to },
            Err(AdminAccess::Denied(denied)) => AdminView::Denied(denied),
            Err(AdminAccess::Granted(_)) => AdminView::Denied(AccessDenied::default()),
        }
    }

    fn articles(&self) -> SqliteArticleRepository<'a> {
        SqliteArticleRepository::new(self.conn)
    }
}
