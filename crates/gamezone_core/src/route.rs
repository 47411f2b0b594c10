//! Typed routing surface.
//!
//! Paths: `/` home, `/article/<id>` detail, `/auth`, `/admin`, anything else
//! is a not-found route that keeps the attempted path.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static ARTICLE_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/article/([^/]+)$").expect("valid article path regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "param", rename_all = "snake_case")]
pub enum Route {
    Home,
    /// Identifier is kept opaque; the detail view decides whether it exists.
    Article(String),
    Auth,
    Admin,
    NotFound(String),
}

impl Route {
    /// Parses a path, ignoring any query string/fragment and a trailing slash.
    pub fn parse(path: &str) -> Self {
        let without_query = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let normalized = match without_query.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match normalized {
            "/" => Self::Home,
            "/auth" => Self::Auth,
            "/admin" => Self::Admin,
            other => match ARTICLE_PATH_RE.captures(other).and_then(|caps| caps.get(1)) {
                Some(id) => Self::Article(id.as_str().to_string()),
                None => Self::NotFound(path.to_string()),
            },
        }
    }

    pub fn article(id: impl Display) -> Self {
        Self::Article(id.to_string())
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Article(id) => format!("/article/{id}"),
            Self::Auth => "/auth".to_string(),
            Self::Admin => "/admin".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/auth/"), Route::Auth);
        assert_eq!(Route::parse("/admin?tab=create"), Route::Admin);
        assert_eq!(
            Route::parse("/article/abc-123"),
            Route::Article("abc-123".to_string())
        );
    }

    #[test]
    fn unknown_paths_keep_attempted_path() {
        assert_eq!(
            Route::parse("/article/a/b"),
            Route::NotFound("/article/a/b".to_string())
        );
        assert_eq!(
            Route::parse("/settings"),
            Route::NotFound("/settings".to_string())
        );
    }

    #[test]
    fn path_round_trips_through_parse() {
        for route in [Route::Home, Route::Auth, Route::Admin, Route::article("42")] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
