//! Reading-time estimation for article content.

use crate::constants::WORDS_PER_MINUTE;

/// Estimate reading time in minutes for HTML content at 200 words per
/// minute, with a floor of one minute.
pub fn estimate_minutes(content: &str) -> i32 {
    let word_count = strip_tags(content)
        .split_whitespace()
        .count();
    let minutes = word_count.div_ceil(WORDS_PER_MINUTE);
    minutes.max(1) as i32
}

/// Replace HTML tags with spaces so adjacent words stay separated.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_one_minute() {
        assert_eq!(estimate_minutes(""), 1);
        assert_eq!(estimate_minutes("<p>short</p>"), 1);
    }

    #[test]
    fn test_rounds_up() {
        let words = vec!["word"; 201].join(" ");
        assert_eq!(estimate_minutes(&words), 2);
    }

    #[test]
    fn test_tags_do_not_count_as_words() {
        let html = "<article class=\"post\"><h1>Title</h1><p>one two three</p></article>";
        let text = strip_tags(html);
        assert_eq!(text.split_whitespace().count(), 4);
    }
}
