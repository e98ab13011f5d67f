//! HTTP request handlers organized by functional area.

pub mod analytics;
pub mod articles;
pub mod health;
pub mod media;
pub mod reorder;
