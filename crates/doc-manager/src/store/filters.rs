use chrono::{DateTime, Utc};

use crate::document::Document;

use super::request::SearchRequest;

pub fn matches(request: &SearchRequest, document: &Document) -> bool {
    created_within(request.created_from, request.created_to, document.created)
        && author_in(request.author_ids.as_deref(), document.author.id.as_deref())
        && content_contains(request.contains_contents.as_deref(), document.content.as_deref())
        && title_has_prefix(request.title_prefixes.as_deref(), document.title.as_deref())
}

/// Both bounds are exclusive.
pub fn created_within(
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    created: DateTime<Utc>,
) -> bool {
    from.map_or(true, |from| created > from) && to.map_or(true, |to| created < to)
}

pub fn author_in(author_ids: Option<&[String]>, author_id: Option<&str>) -> bool {
    match (author_ids, author_id) {
        (None, _) => true,
        (Some(ids), Some(id)) => ids.iter().any(|candidate| candidate == id),
        (Some(_), None) => false,
    }
}

pub fn content_contains(contents: Option<&[String]>, content: Option<&str>) -> bool {
    match (contents, content) {
        (None, _) => true,
        (Some(contents), Some(content)) => content_tokens(content)
            .any(|token| contents.iter().any(|wanted| wanted == token)),
        (Some(_), None) => false,
    }
}

pub fn title_has_prefix(prefixes: Option<&[String]>, title: Option<&str>) -> bool {
    match (prefixes, title) {
        (None, _) => true,
        (Some(prefixes), Some(title)) => title
            .split(' ')
            .any(|word| prefixes.iter().any(|prefix| word.starts_with(prefix.as_str()))),
        (Some(_), None) => false,
    }
}

/// Splits on runs of ASCII whitespace, vertical tab included. Empty tokens
/// are never produced.
fn content_tokens(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_created_within_is_exclusive() {
        let now = Utc::now();
        assert!(created_within(None, None, now));
        assert!(created_within(Some(now - Duration::seconds(1)), None, now));
        assert!(!created_within(Some(now), None, now));
        assert!(!created_within(None, Some(now), now));
        assert!(created_within(None, Some(now + Duration::seconds(1)), now));
    }

    #[test]
    fn test_created_within_inverted_range_matches_nothing() {
        let now = Utc::now();
        let from = now + Duration::seconds(10);
        let to = now - Duration::seconds(10);
        assert!(!created_within(Some(from), Some(to), now));
    }

    #[test]
    fn test_author_in() {
        let ids = strings(&["a-1", "a-2"]);
        assert!(author_in(None, None));
        assert!(author_in(Some(ids.as_slice()), Some("a-2")));
        assert!(!author_in(Some(ids.as_slice()), Some("a-3")));
        assert!(!author_in(Some(ids.as_slice()), None));
        assert!(!author_in(Some(&[][..]), Some("a-1")));
    }

    #[test]
    fn test_content_contains_exact_tokens() {
        let wanted = strings(&["advanced"]);
        assert!(content_contains(Some(wanted.as_slice()), Some("Content about advanced Java")));
        assert!(content_contains(Some(wanted.as_slice()), Some("tabs\tand\nnewlines  advanced")));
        assert!(!content_contains(Some(wanted.as_slice()), Some("Advanced topics")));
        assert!(!content_contains(Some(wanted.as_slice()), Some("advancedness")));
        assert!(!content_contains(Some(wanted.as_slice()), None));
        assert!(content_contains(None, None));
    }

    #[test]
    fn test_content_contains_never_matches_empty_token() {
        let wanted = strings(&[""]);
        assert!(!content_contains(Some(wanted.as_slice()), Some("  leading and trailing  ")));
    }

    #[test]
    fn test_title_has_prefix() {
        let prefixes = strings(&["Ja", "Intro"]);
        assert!(title_has_prefix(Some(prefixes.as_slice()), Some("Advanced Java")));
        assert!(title_has_prefix(Some(prefixes.as_slice()), Some("Introduction to Rust")));
        assert!(!title_has_prefix(Some(prefixes.as_slice()), Some("advanced java")));
        assert!(!title_has_prefix(Some(prefixes.as_slice()), Some("Advanced\tJava")));
        assert!(!title_has_prefix(Some(prefixes.as_slice()), None));
        assert!(title_has_prefix(None, Some("Anything")));
    }

    #[test]
    fn test_title_prefix_is_not_infix() {
        let prefixes = strings(&["ava"]);
        assert!(!title_has_prefix(Some(prefixes.as_slice()), Some("Advanced Java")));
    }
}
