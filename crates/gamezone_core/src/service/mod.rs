//! Core use-case services, one per page.
//!
//! # Responsibility
//! - Orchestrate repository calls into page-level state.
//! - Turn remote failures into log lines and notifications, never panics.

pub mod admin_service;
pub mod detail_service;
pub mod listing_service;
