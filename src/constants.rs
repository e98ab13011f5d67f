//! Shared constants for the content lifecycle engine.

/// Suffix appended to a duplicated article's title.
pub const COPY_TITLE_SUFFIX: &str = " (Copy)";

/// Infix placed between the source slug and the random disambiguator
/// when duplicating an article.
pub const COPY_SLUG_INFIX: &str = "-copy-";

/// Length of the random slug disambiguator.
pub const SLUG_TOKEN_LENGTH: usize = 6;

/// Number of recently updated articles returned by the analytics snapshot.
pub const RECENT_ARTICLE_LIMIT: i64 = 10;

/// Number of recent AI usage log entries returned by the analytics snapshot.
pub const RECENT_AI_LOG_LIMIT: i64 = 5;

/// Reading speed used for article reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;
