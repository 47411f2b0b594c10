//! Listing search entry points.
//!
//! # Responsibility
//! - Narrow an already-loaded article set by free-text query and category.
//! - Derive the category menu and the featured slot from that set.

pub mod filter;
