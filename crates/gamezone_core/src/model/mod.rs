//! Row-shaped domain records for the news site.
//!
//! # Responsibility
//! - Define the `articles` / `profiles` boundary records as plain values.
//! - Own the admin form state and its validation rules.
//!
//! # Invariants
//! - Records are immutable snapshots of backend rows, never live handles.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod article;
pub mod article_form;
pub mod profile;
