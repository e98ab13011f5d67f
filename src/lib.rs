//! # pressroom-core
//!
//! Content lifecycle and consistency engine for a publishing platform.
//!
//! The crate owns the write paths where multiple rows (or a row plus an
//! external object) must change together:
//!
//! - **Status transitions**: a closed state machine over article statuses
//!   (`DRAFT`, `SCHEDULED`, `PUBLISHED`, `ARCHIVED`) with deterministic
//!   timestamp side effects.
//! - **Batch reordering**: all-or-nothing positional updates for modules
//!   and navigation menus.
//! - **Deep duplication**: cloning an article together with its topic and
//!   tag associations into a fresh draft.
//! - **Media lifecycle**: coupled deletion of a metadata row and its
//!   backing stored object, with orphan detection.
//! - **Analytics**: a single-transaction dashboard snapshot.
//!
//! Persistence is abstracted behind repository traits so every operation
//! is exercisable against an in-memory backend in tests; production runs
//! on PostgreSQL through sqlx.

pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;
pub mod state_machine;
pub mod storage;
pub mod test_helpers;
pub mod utils;
pub mod web;

pub use config::CmsConfig;
pub use error::{CmsError, Result};
pub use models::{AnalyticsSnapshot, Article, CallerIdentity};
pub use state_machine::{ArticleStatus, PublishAction, StatusTransitionEngine};
