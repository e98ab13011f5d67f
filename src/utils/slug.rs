//! Slug generation helpers.

use crate::constants::SLUG_TOKEN_LENGTH;

/// Lowercase a display string into a URL-safe slug: non-alphanumerics are
/// dropped, whitespace/underscore/hyphen runs collapse to single hyphens.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.trim().chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
    }

    slug
}

/// Short random token used to disambiguate derived slugs without a
/// uniqueness-check retry loop.
pub fn short_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..SLUG_TOKEN_LENGTH].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Agentic   AI — Rise! "), "agentic-ai-rise");
        assert_eq!(slugify("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn test_slugify_strips_edges() {
        assert_eq!(slugify("---edge---"), "edge");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_short_token_shape() {
        let token = short_token();
        assert_eq!(token.len(), SLUG_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(short_token(), token);
    }
}
