//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use agora_core::{
    ForumDraft, ForumId, NewReply, NewTopic, ReplyDraft, ReplyId, TopicDraft, TopicId, UserSession,
};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Fetch the forum list.
    LoadForums,

    /// Fetch the topics of a forum.
    LoadTopics {
        /// Parent forum.
        forum_id: ForumId,
    },

    /// Fetch the replies of a topic.
    LoadReplies {
        /// Parent forum.
        forum_id: ForumId,
        /// Parent topic.
        topic_id: TopicId,
    },

    /// Create a forum.
    CreateForum {
        /// Validated, trimmed draft.
        draft: ForumDraft,
    },

    /// Overwrite a forum.
    UpdateForum {
        /// Forum to update.
        forum_id: ForumId,
        /// Validated, trimmed draft.
        draft: ForumDraft,
    },

    /// Delete a forum.
    DeleteForum {
        /// Forum to delete.
        forum_id: ForumId,
    },

    /// Create a topic.
    CreateTopic {
        /// Parent forum.
        forum_id: ForumId,
        /// Request body.
        topic: NewTopic,
    },

    /// Overwrite a topic.
    UpdateTopic {
        /// Parent forum.
        forum_id: ForumId,
        /// Topic to update.
        topic_id: TopicId,
        /// Validated, trimmed draft.
        draft: TopicDraft,
    },

    /// Delete a topic.
    DeleteTopic {
        /// Parent forum.
        forum_id: ForumId,
        /// Topic to delete.
        topic_id: TopicId,
    },

    /// Post a reply.
    CreateReply {
        /// Parent forum.
        forum_id: ForumId,
        /// Parent topic.
        topic_id: TopicId,
        /// Request body.
        reply: NewReply,
    },

    /// Edit the text of a reply.
    UpdateReply {
        /// Parent forum.
        forum_id: ForumId,
        /// Parent topic.
        topic_id: TopicId,
        /// Reply to edit.
        reply_id: ReplyId,
        /// Validated, trimmed draft.
        draft: ReplyDraft,
    },

    /// Delete a reply.
    DeleteReply {
        /// Parent forum.
        forum_id: ForumId,
        /// Parent topic.
        topic_id: TopicId,
        /// Reply to delete.
        reply_id: ReplyId,
    },

    /// Set or clear the accepted flag of a reply.
    SetReplyAccepted {
        /// Parent forum.
        forum_id: ForumId,
        /// Parent topic.
        topic_id: TopicId,
        /// Reply to mark.
        reply_id: ReplyId,
        /// New flag.
        accepted: bool,
    },

    /// Persist the signed-in user.
    PersistSession(UserSession),

    /// Remove the persisted user.
    ClearSession,
}

impl AppAction {
    /// Whether this action is served by the forum API.
    pub fn is_request(&self) -> bool {
        !matches!(self, Self::Render | Self::Quit | Self::PersistSession(_) | Self::ClearSession)
    }
}
