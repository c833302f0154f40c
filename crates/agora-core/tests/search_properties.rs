//! Property-based tests for the list filters.

use agora_core::{
    Topic,
    search::{filter_topics, matches},
};
use proptest::prelude::*;

fn topic(id: u64, title: String) -> Topic {
    Topic {
        id,
        title,
        author: String::new(),
        content: String::new(),
        replies_count: 0,
        created_at: 0,
        forum_id: 1,
    }
}

proptest! {
    /// Property: every substring of a title, in any case, matches it
    #[test]
    fn prop_substring_always_matches(title in "[a-zA-Z ]{1,24}", start in 0usize..24, len in 0usize..24) {
        let start = start.min(title.len());
        let end = (start + len).min(title.len());
        let query = &title[start..end];

        prop_assert!(matches(&title, query));
        prop_assert!(matches(&title, &query.to_uppercase()));
        prop_assert!(matches(&title, &query.to_lowercase()));
    }

    /// Property: filtering never invents or reorders topics
    #[test]
    fn prop_filter_is_ordered_subset(
        titles in prop::collection::vec("[a-z]{1,8}", 0..12),
        query in "[a-z]{0,3}",
    ) {
        let topics: Vec<Topic> =
            titles.into_iter().enumerate().map(|(i, t)| topic(i as u64, t)).collect();
        let filtered = filter_topics(&topics, &query);

        let ids: Vec<u64> = filtered.iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&ids, &sorted);
        prop_assert!(filtered.iter().all(|t| t.title.contains(&query)));
        prop_assert_eq!(
            filtered.len(),
            topics.iter().filter(|t| t.title.contains(&query)).count()
        );
    }
}
