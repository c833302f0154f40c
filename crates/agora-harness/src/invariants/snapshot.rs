//! Observable screen state for invariant checking.
//!
//! Snapshots capture the observable state of the App at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use agora_app::{App, Loading, View};
use agora_core::{ForumId, ReplyId, TopicId, UserId};

/// Snapshot of the forum screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    /// Signed-in user. `None` on the entry screen.
    pub user: Option<UserId>,
    /// View the App reports.
    pub view: View,
    /// Selected forum.
    pub selected_forum: Option<ForumId>,
    /// Selected topic.
    pub selected_topic: Option<TopicId>,
    /// Ids of the loaded forums.
    pub forums: Vec<ForumId>,
    /// Loaded topics as `(topic, parent forum)`.
    pub topics: Vec<(TopicId, ForumId)>,
    /// Loaded replies as `(reply, parent topic)`.
    pub replies: Vec<(ReplyId, TopicId)>,
    /// Loading flags.
    pub loading: Loading,
    /// Taken while the runtime waits for input, i.e. with no action pending.
    pub quiescent: bool,
}

impl Default for ScreenSnapshot {
    fn default() -> Self {
        Self {
            user: None,
            view: View::Entry,
            selected_forum: None,
            selected_topic: None,
            forums: Vec::new(),
            topics: Vec::new(),
            replies: Vec::new(),
            loading: Loading::default(),
            quiescent: true,
        }
    }
}

impl ScreenSnapshot {
    /// Capture the App's observable state.
    pub fn from_app(app: &App, quiescent: bool) -> Self {
        Self {
            user: app.session().map(|s| s.id),
            view: app.view(),
            selected_forum: app.selected_forum_id(),
            selected_topic: app.selected_topic_id(),
            forums: app.forums().iter().map(|f| f.id).collect(),
            topics: app.topics().iter().map(|t| (t.id, t.forum_id)).collect(),
            replies: app.replies().iter().map(|r| (r.id, r.topic_id)).collect(),
            loading: app.loading(),
            quiescent,
        }
    }
}

#[cfg(test)]
mod tests {
    use agora_core::{Locale, Profession, UserSession};

    use super::*;

    #[test]
    fn captures_session_and_view() {
        let app = App::new(Locale::EnUs, Some(UserSession::new(3, "Ana", Profession::Student)));
        let snapshot = ScreenSnapshot::from_app(&app, false);

        assert_eq!(snapshot.user, Some(3));
        assert_eq!(snapshot.view, View::Forums);
        assert!(!snapshot.quiescent);
    }
}
