//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use agora_app::View;

use super::{Invariant, InvariantResult, ScreenSnapshot};

/// A topic can only be selected inside a selected forum.
pub struct TopicRequiresForum;

impl Invariant for TopicRequiresForum {
    fn name(&self) -> &'static str {
        "topic_requires_forum"
    }

    fn check(&self, state: &ScreenSnapshot) -> InvariantResult {
        if let Some(topic) = state.selected_topic
            && state.selected_forum.is_none()
        {
            return Err(self.violation(format!("topic {topic} selected without a forum")));
        }
        Ok(())
    }
}

/// Selected records must be present in their lists.
///
/// Prevents the screen from showing a header for a forum or topic it has no
/// data for.
pub struct SelectionLoaded;

impl Invariant for SelectionLoaded {
    fn name(&self) -> &'static str {
        "selection_loaded"
    }

    fn check(&self, state: &ScreenSnapshot) -> InvariantResult {
        if let Some(forum) = state.selected_forum
            && !state.forums.contains(&forum)
        {
            return Err(self.violation(format!(
                "selected forum {forum} not in forums {:?}",
                state.forums
            )));
        }
        if let Some(topic) = state.selected_topic
            && !state.topics.iter().any(|(id, _)| *id == topic)
        {
            return Err(self.violation(format!(
                "selected topic {topic} not in topics {:?}",
                state.topics
            )));
        }
        Ok(())
    }
}

/// Loaded topics belong to the selected forum and loaded replies to the
/// selected topic. Nothing is loaded below an empty selection.
pub struct ListsMatchSelection;

impl Invariant for ListsMatchSelection {
    fn name(&self) -> &'static str {
        "lists_match_selection"
    }

    fn check(&self, state: &ScreenSnapshot) -> InvariantResult {
        if let Some((topic, forum)) =
            state.topics.iter().find(|(_, forum)| Some(*forum) != state.selected_forum)
        {
            return Err(self.violation(format!(
                "topic {topic} of forum {forum} loaded while forum {:?} is selected",
                state.selected_forum
            )));
        }
        if let Some((reply, topic)) =
            state.replies.iter().find(|(_, topic)| Some(*topic) != state.selected_topic)
        {
            return Err(self.violation(format!(
                "reply {reply} of topic {topic} loaded while topic {:?} is selected",
                state.selected_topic
            )));
        }
        Ok(())
    }
}

/// The view is derived from session and selection.
pub struct ViewMatchesSelection;

impl Invariant for ViewMatchesSelection {
    fn name(&self) -> &'static str {
        "view_matches_selection"
    }

    fn check(&self, state: &ScreenSnapshot) -> InvariantResult {
        let expected = match (state.user, state.selected_forum, state.selected_topic) {
            (None, ..) => View::Entry,
            (Some(_), None, _) => View::Forums,
            (Some(_), Some(_), None) => View::Topics,
            (Some(_), Some(_), Some(_)) => View::Thread,
        };
        if state.view != expected {
            return Err(self.violation(format!("view {:?}, expected {expected:?}", state.view)));
        }
        Ok(())
    }
}

/// Without a session the screen holds no data and no selection.
pub struct EntryHoldsNothing;

impl Invariant for EntryHoldsNothing {
    fn name(&self) -> &'static str {
        "entry_holds_nothing"
    }

    fn check(&self, state: &ScreenSnapshot) -> InvariantResult {
        let empty = state.forums.is_empty()
            && state.topics.is_empty()
            && state.replies.is_empty()
            && state.selected_forum.is_none();
        if state.user.is_none() && !empty {
            return Err(self.violation(format!("signed out but holding {state:?}")));
        }
        Ok(())
    }
}

/// Every load completes before the next input is read.
///
/// Only checked on quiescent snapshots. A flag left set here would leave the
/// spinner up forever.
pub struct LoadingSettled;

impl Invariant for LoadingSettled {
    fn name(&self) -> &'static str {
        "loading_settled"
    }

    fn check(&self, state: &ScreenSnapshot) -> InvariantResult {
        if state.quiescent && !state.loading.is_idle() {
            return Err(self.violation(format!("still loading {:?}", state.loading)));
        }
        Ok(())
    }
}
