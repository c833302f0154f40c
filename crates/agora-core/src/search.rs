//! Client-side list filters.
//!
//! Matching is a case-insensitive substring test. An empty query matches
//! everything. Queries are never sent to the server.

use crate::{Forum, Topic};

/// Case-insensitive substring match.
pub fn matches(haystack: &str, query: &str) -> bool {
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Forums whose name contains `query`.
pub fn filter_forums<'a>(forums: &'a [Forum], query: &str) -> Vec<&'a Forum> {
    forums.iter().filter(|f| matches(&f.name, query)).collect()
}

/// Topics whose title contains `query`.
pub fn filter_topics<'a>(topics: &'a [Topic], query: &str) -> Vec<&'a Topic> {
    topics.iter().filter(|t| matches(&t.title, query)).collect()
}
