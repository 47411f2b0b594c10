//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the backend query contracts the views call into.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Article writes enforce `Article::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod article_repo;
pub mod profile_repo;
