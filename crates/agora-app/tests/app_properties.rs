//! Property-based tests for the App state machine.
//!
//! Tests verify that navigation invariants hold under arbitrary sequences of
//! user operations and (possibly stale) server responses.

use agora_app::{App, AppEvent, Operation, View};
use agora_core::{Forum, Locale, Profession, Reply, Topic, UserSession};
use proptest::prelude::*;

/// A user operation or a server response.
#[derive(Debug, Clone)]
enum Step {
    SelectForum(u64),
    ClearForum,
    SelectTopic(u64),
    ClearTopic,
    Refresh,
    ForumSearch(String),
    TopicSearch(String),
    ForumsLoaded(Vec<u64>),
    TopicsLoaded { forum_id: u64, topics: Vec<(u64, u64)> },
    RepliesLoaded { forum_id: u64, topic_id: u64, replies: Vec<(u64, u64)> },
    LoadFailed(Operation),
}

fn forum(id: u64) -> Forum {
    Forum {
        id,
        name: format!("Forum {id}"),
        description: String::new(),
        tag: String::new(),
        topics_count: 0,
        created_at: 0,
    }
}

fn topic(id: u64, forum_id: u64) -> Topic {
    Topic {
        id,
        title: format!("Topic {id}"),
        author: String::new(),
        content: String::new(),
        replies_count: 0,
        created_at: 0,
        forum_id,
    }
}

fn reply(id: u64, topic_id: u64, forum_id: u64) -> Reply {
    Reply {
        id,
        author: String::new(),
        author_id: Some(1),
        text: String::new(),
        accepted: false,
        created_at: 0,
        topic_id,
        forum_id,
    }
}

/// Generate random steps over a small id space so selections collide.
fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (1u64..5).prop_map(Step::SelectForum),
        1 => Just(Step::ClearForum),
        3 => (10u64..15).prop_map(Step::SelectTopic),
        1 => Just(Step::ClearTopic),
        1 => Just(Step::Refresh),
        1 => "[a-zA-Z ]{0,4}".prop_map(Step::ForumSearch),
        1 => "[a-zA-Z ]{0,4}".prop_map(Step::TopicSearch),
        1 => prop::collection::vec(1u64..5, 0..5).prop_map(Step::ForumsLoaded),
        3 => (1u64..5, prop::collection::vec((10u64..15, 1u64..5), 0..5))
            .prop_map(|(forum_id, topics)| Step::TopicsLoaded { forum_id, topics }),
        3 => (1u64..5, 10u64..15, prop::collection::vec((100u64..110, 10u64..15), 0..5))
            .prop_map(|(forum_id, topic_id, replies)| Step::RepliesLoaded {
                forum_id,
                topic_id,
                replies
            }),
        1 => prop_oneof![
            Just(Operation::LoadForums),
            Just(Operation::LoadTopics),
            Just(Operation::LoadReplies),
        ]
        .prop_map(Step::LoadFailed),
    ]
}

fn apply(app: &mut App, step: Step) {
    let _ = match step {
        Step::SelectForum(id) => app.select_forum(id),
        Step::ClearForum => app.clear_forum(),
        Step::SelectTopic(id) => app.select_topic(id),
        Step::ClearTopic => app.clear_topic(),
        Step::Refresh => app.refresh(),
        Step::ForumSearch(text) => app.set_forum_search(text),
        Step::TopicSearch(text) => app.set_topic_search(text),
        Step::ForumsLoaded(ids) => app.handle(AppEvent::ForumsLoaded(ids.into_iter().map(forum).collect())),
        Step::TopicsLoaded { forum_id, topics } => app.handle(AppEvent::TopicsLoaded {
            forum_id,
            topics: topics.into_iter().map(|(id, parent)| topic(id, parent)).collect(),
        }),
        Step::RepliesLoaded { forum_id, topic_id, replies } => app.handle(AppEvent::RepliesLoaded {
            forum_id,
            topic_id,
            replies: replies
                .into_iter()
                .map(|(id, parent)| reply(id, parent, forum_id))
                .collect(),
        }),
        Step::LoadFailed(operation) => {
            app.handle(AppEvent::RequestFailed { operation, reason: "offline".into() })
        },
    };
}

fn signed_in_app() -> App {
    let mut app = App::new(Locale::EnUs, Some(UserSession::new(1, "Ana", Profession::Student)));
    let _ = app.mount();
    let _ = app.handle(AppEvent::ForumsLoaded((1..5).map(forum).collect()));
    app
}

fn check_invariants(app: &App) -> Result<(), TestCaseError> {
    let forum_id = app.selected_forum_id();
    let topic_id = app.selected_topic_id();

    prop_assert!(topic_id.is_none() || forum_id.is_some(), "topic selected without forum");
    if let Some(forum_id) = forum_id {
        prop_assert!(app.forums().iter().any(|f| f.id == forum_id), "selected forum not loaded");
    }
    if let Some(topic_id) = topic_id {
        prop_assert!(app.topics().iter().any(|t| t.id == topic_id), "selected topic not loaded");
    }

    prop_assert!(
        app.topics().iter().all(|t| Some(t.forum_id) == forum_id),
        "topic list belongs to another forum"
    );
    prop_assert!(
        app.replies().iter().all(|r| Some(r.topic_id) == topic_id),
        "reply list belongs to another topic"
    );

    let expected_view = match (forum_id, topic_id) {
        (None, _) => View::Forums,
        (Some(_), None) => View::Topics,
        (Some(_), Some(_)) => View::Thread,
    };
    prop_assert_eq!(app.view(), expected_view);

    for forum in app.filtered_forums() {
        prop_assert!(
            forum.name.to_lowercase().contains(&app.forum_search().to_lowercase()),
            "filtered forum does not match query"
        );
    }
    Ok(())
}

proptest! {
    /// Property: selection and list invariants hold after every step.
    #[test]
    fn prop_navigation_invariants_hold(steps in prop::collection::vec(step_strategy(), 0..60)) {
        let mut app = signed_in_app();
        check_invariants(&app)?;

        for step in steps {
            apply(&mut app, step);
            check_invariants(&app)?;
        }
    }

    /// Property: selecting a forum always leaves no topics or replies behind.
    #[test]
    fn prop_select_forum_clears_children(
        steps in prop::collection::vec(step_strategy(), 0..30),
        forum_id in 1u64..5,
    ) {
        let mut app = signed_in_app();
        for step in steps {
            apply(&mut app, step);
        }

        let known = app.forums().iter().any(|f| f.id == forum_id);
        let _ = app.select_forum(forum_id);

        if known {
            prop_assert!(app.topics().is_empty());
            prop_assert!(app.replies().is_empty());
            prop_assert!(app.loading().topics);
            prop_assert_eq!(app.view(), View::Topics);
        }
    }

    /// Property: a failed load never leaves its loading flag set.
    #[test]
    fn prop_failed_load_clears_flag(steps in prop::collection::vec(step_strategy(), 0..30)) {
        let mut app = signed_in_app();
        for step in steps {
            apply(&mut app, step);
        }

        for operation in [Operation::LoadForums, Operation::LoadTopics, Operation::LoadReplies] {
            let _ = app.handle(AppEvent::RequestFailed { operation, reason: "offline".into() });
        }

        prop_assert!(app.loading().is_idle());
    }
}
