use serde::{Deserialize, Serialize};
use std::fmt;

/// Article lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "article_status", rename_all = "UPPERCASE")]
pub enum ArticleStatus {
    /// Initial state; not visible to readers
    Draft,
    /// Carries a target timestamp; promoted to Published by an explicit
    /// publish call or the scheduled-publish sweep
    Scheduled,
    /// Live and visible to readers
    Published,
    /// Retired from the public surface
    Archived,
}

impl ArticleStatus {
    /// Whether articles in this state appear on the public surface.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "DRAFT"),
            Self::Scheduled => write!(f, "SCHEDULED"),
            Self::Published => write!(f, "PUBLISHED"),
            Self::Archived => write!(f, "ARCHIVED"),
        }
    }
}

impl std::str::FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "SCHEDULED" => Ok(Self::Scheduled),
            "PUBLISHED" => Ok(Self::Published),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(format!("Invalid article status: {s}")),
        }
    }
}

impl Default for ArticleStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Actions accepted by the status transition endpoint.
///
/// This is a direct-set model: every action is valid from every current
/// state, so there are no guard checks against the prior status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishAction {
    Publish,
    Unpublish,
    Schedule,
    Archive,
}

impl PublishAction {
    /// The status this action assigns.
    pub fn target_status(&self) -> ArticleStatus {
        match self {
            Self::Publish => ArticleStatus::Published,
            Self::Unpublish => ArticleStatus::Draft,
            Self::Schedule => ArticleStatus::Scheduled,
            Self::Archive => ArticleStatus::Archived,
        }
    }
}

impl fmt::Display for PublishAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Publish => write!(f, "publish"),
            Self::Unpublish => write!(f, "unpublish"),
            Self::Schedule => write!(f, "schedule"),
            Self::Archive => write!(f, "archive"),
        }
    }
}

impl std::str::FromStr for PublishAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(Self::Publish),
            "unpublish" => Ok(Self::Unpublish),
            "schedule" => Ok(Self::Schedule),
            "archive" => Ok(Self::Archive),
            _ => Err(format!(
                "Invalid action: {s} (expected publish, unpublish, schedule or archive)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_status() {
        assert_eq!(PublishAction::Publish.target_status(), ArticleStatus::Published);
        assert_eq!(PublishAction::Unpublish.target_status(), ArticleStatus::Draft);
        assert_eq!(PublishAction::Schedule.target_status(), ArticleStatus::Scheduled);
        assert_eq!(PublishAction::Archive.target_status(), ArticleStatus::Archived);
    }

    #[test]
    fn test_status_string_conversion() {
        assert_eq!(ArticleStatus::Published.to_string(), "PUBLISHED");
        assert_eq!("DRAFT".parse::<ArticleStatus>().unwrap(), ArticleStatus::Draft);
        assert!("published".parse::<ArticleStatus>().is_err());
    }

    #[test]
    fn test_action_parse_rejects_unknown_literal() {
        assert_eq!("publish".parse::<PublishAction>().unwrap(), PublishAction::Publish);
        assert!("delete".parse::<PublishAction>().is_err());
        assert!("PUBLISH".parse::<PublishAction>().is_err());
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&ArticleStatus::Scheduled).unwrap();
        assert_eq!(json, "\"SCHEDULED\"");
        let parsed: ArticleStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ArticleStatus::Scheduled);
    }

    #[test]
    fn test_public_visibility() {
        assert!(ArticleStatus::Published.is_public());
        assert!(!ArticleStatus::Draft.is_public());
        assert!(!ArticleStatus::Scheduled.is_public());
        assert!(!ArticleStatus::Archived.is_public());
    }
}
