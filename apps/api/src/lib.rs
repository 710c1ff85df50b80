//! Teamwork API Library
//!
//! Manages teams of enrolled members and the pairs formed within them.
//! The Team aggregate enforces membership rules and the two-step pair
//! formation protocol; use cases, repositories and the HTTP layer are thin
//! adapters around it.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
