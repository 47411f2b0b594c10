//! Admin access gate and article management panel.
//!
//! # Responsibility
//! - Resolve the signed-in user's role once per mount.
//! - Own the admin form state, edit selection and saving flag.
//! - Drive create/update/delete against the article repository.
//!
//! # Invariants
//! - The role check is not repeated per action; a role change is only seen
//!   after a remount.
//! - Validation failures never reach the repository.
//! - A submit while `saving` is set is rejected without a remote call.
//!   `submit` takes `&mut self`, so in-process re-entry cannot happen; the
//!   flag mirrors the view's busy state for embedders that render it.
//! - Delete only runs after an explicit confirmation.
//! - Concurrent editors are not coordinated; the last write wins.

use crate::auth::Session;
use crate::model::article::{Article, ArticleId, UserId};
use crate::model::article_form::{ArticleForm, ArticleFormError};
use crate::notify::{Confirm, Notifier};
use crate::repo::article_repo::{ArticleRepository, RepoError};
use crate::repo::profile_repo::ProfileRepository;
use crate::route::Route;
use crate::view::{AccessDenied, AdminRow};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this article?";
pub const CREATED_MESSAGE: &str = "Article created successfully";
pub const UPDATED_MESSAGE: &str = "Article updated successfully";
pub const DELETED_MESSAGE: &str = "Article deleted successfully";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete article";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch articles";
pub const SAVE_FAILED_FALLBACK: &str = "Failed to save article";

/// Outcome of the one-shot admin gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAccess {
    /// No session: the page redirects to the sign-in route.
    SignInRequired(Route),
    Denied(AccessDenied),
    Granted(UserId),
}

/// Checks whether `session` belongs to an admin.
///
/// A missing profile and a failed profile lookup are both treated as
/// denial; the lookup failure is logged.
pub fn check_admin_access<P: ProfileRepository>(
    profiles: &P,
    session: Option<&Session>,
) -> AdminAccess {
    let Some(session) = session else {
        info!("event=admin_gate module=admin status=redirect reason=no_session");
        return AdminAccess::SignInRequired(Route::Auth);
    };

    match profiles.get_profile(session.user_id) {
        Ok(Some(profile)) if profile.is_admin() => {
            info!(
                "event=admin_gate module=admin status=granted user_id={}",
                session.user_id
            );
            AdminAccess::Granted(session.user_id)
        }
        Ok(_) => {
            info!(
                "event=admin_gate module=admin status=denied user_id={}",
                session.user_id
            );
            AdminAccess::Denied(AccessDenied::default())
        }
        Err(err) => {
            error!(
                "event=admin_gate module=admin status=error user_id={} error={err}",
                session.user_id
            );
            AdminAccess::Denied(AccessDenied::default())
        }
    }
}

/// Service error for admin actions.
#[derive(Debug)]
pub enum AdminError {
    /// Form rule violation; shown inline, no remote call made.
    Validation(ArticleFormError),
    /// A submit is already outstanding.
    Busy,
    /// The requested article is not in the loaded list.
    UnknownArticle(ArticleId),
    /// Remote call failure.
    Repo(RepoError),
}

impl Display for AdminError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Busy => write!(f, "a save is already in progress"),
            Self::UnknownArticle(id) => write!(f, "article not loaded: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AdminError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Busy | Self::UnknownArticle(_) => None,
        }
    }
}

impl From<ArticleFormError> for AdminError {
    fn from(value: ArticleFormError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for AdminError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    Created(ArticleId),
    Updated(ArticleId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ArticleId),
}

impl FormMode {
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create Article",
            Self::Edit(_) => "Update Article",
        }
    }
}

/// Mounted admin panel for one authorized user.
pub struct AdminPanel<R: ArticleRepository> {
    repo: R,
    user_id: UserId,
    articles: Vec<Article>,
    selected: Option<Article>,
    form: ArticleForm,
    error: Option<String>,
    pub(crate) saving: bool,
}

impl<R: ArticleRepository> AdminPanel<R> {
    /// Mounts the panel for a user that passed [`check_admin_access`] and
    /// loads the article list.
    pub fn mount(repo: R, user_id: UserId, notifier: &dyn Notifier) -> Self {
        let mut panel = Self {
            repo,
            user_id,
            articles: Vec::new(),
            selected: None,
            form: ArticleForm::default(),
            error: None,
            saving: false,
        };
        panel.reload(notifier);
        panel
    }

    /// Refetches every article. On failure the previous list is kept.
    pub fn reload(&mut self, notifier: &dyn Notifier) {
        match self.repo.list_all() {
            Ok(articles) => self.articles = articles,
            Err(err) => {
                error!("event=admin_reload module=admin status=error error={err}");
                notifier.error(FETCH_FAILED_MESSAGE);
            }
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn rows(&self) -> Vec<AdminRow> {
        self.articles.iter().map(AdminRow::from).collect()
    }

    pub fn form(&self) -> &ArticleForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ArticleForm {
        &mut self.form
    }

    /// Inline form error from the last submit, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn mode(&self) -> FormMode {
        self.selected
            .as_ref()
            .map_or(FormMode::Create, |article| FormMode::Edit(article.id))
    }

    /// Selects a loaded article and copies it into the form.
    pub fn edit(&mut self, id: ArticleId) -> Result<(), AdminError> {
        let article = self
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or(AdminError::UnknownArticle(id))?;
        self.form = ArticleForm::from_article(&article);
        self.selected = Some(article);
        Ok(())
    }

    /// Drops the edit selection, the form contents and the inline error.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.form = ArticleForm::default();
        self.error = None;
    }

    /// Validates and saves the form.
    ///
    /// On success the form and selection are cleared and the list reloads.
    /// On failure the form, the selection and the reason are kept.
    pub fn submit(&mut self, notifier: &dyn Notifier) -> Result<Saved, AdminError> {
        if self.saving {
            warn!("event=admin_submit module=admin status=rejected reason=busy");
            return Err(AdminError::Busy);
        }
        self.error = None;
        self.saving = true;
        let result = self.save();
        self.saving = false;

        match result {
            Ok(saved) => {
                let message = match saved {
                    Saved::Created(_) => CREATED_MESSAGE,
                    Saved::Updated(_) => UPDATED_MESSAGE,
                };
                info!("event=admin_submit module=admin status=ok result={saved:?}");
                notifier.success(message);
                self.form = ArticleForm::default();
                self.selected = None;
                self.reload(notifier);
                Ok(saved)
            }
            Err(err) => {
                let message = match &err {
                    AdminError::Repo(repo_err) => {
                        error!("event=admin_submit module=admin status=error error={repo_err}");
                        let text = repo_err.to_string();
                        if text.is_empty() {
                            SAVE_FAILED_FALLBACK.to_string()
                        } else {
                            text
                        }
                    }
                    other => other.to_string(),
                };
                self.error = Some(message);
                Err(err)
            }
        }
    }

    fn save(&self) -> Result<Saved, AdminError> {
        let draft = self.form.validate()?;
        match &self.selected {
            Some(article) => {
                self.repo.update_article(article.id, &draft)?;
                Ok(Saved::Updated(article.id))
            }
            None => {
                let article = Article::from_draft(draft, self.user_id);
                let id = self.repo.insert_article(&article)?;
                Ok(Saved::Created(id))
            }
        }
    }

    /// Deletes an article after interactive confirmation.
    ///
    /// Cancelling issues no remote call. A failed delete keeps the row.
    pub fn delete(
        &mut self,
        id: ArticleId,
        confirm: &dyn Confirm,
        notifier: &dyn Notifier,
    ) -> Result<DeleteOutcome, AdminError> {
        if !confirm.confirm(DELETE_PROMPT) {
            info!("event=admin_delete module=admin status=cancelled id={id}");
            return Ok(DeleteOutcome::Cancelled);
        }

        match self.repo.delete_article(id) {
            Ok(()) => {
                info!("event=admin_delete module=admin status=ok id={id}");
                notifier.success(DELETED_MESSAGE);
                self.reload(notifier);
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                error!("event=admin_delete module=admin status=error id={id} error={err}");
                notifier.error(DELETE_FAILED_MESSAGE);
                Err(err.into())
            }
        }
    }
}
