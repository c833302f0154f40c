//! Application input events.
//!
//! This module defines [`AppEvent`], the inputs that drive the
//! [`crate::App`] state machine besides direct method calls.
//!
//! Events originate from two sources:
//! - The frontend (resize, periodic ticks).
//! - Completed API and session calls, translated by the runtime. Every
//!   request action produces exactly one completion event, success or
//!   [`AppEvent::RequestFailed`].

use std::fmt;

use agora_core::{Forum, ForumId, Reply, ReplyId, Topic, TopicId, UserSession};

use crate::AppAction;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Forum list fetched.
    ForumsLoaded(Vec<Forum>),

    /// Topic list fetched.
    TopicsLoaded {
        /// Forum the list was requested for.
        forum_id: ForumId,
        /// Topics as returned by the server.
        topics: Vec<Topic>,
    },

    /// Reply list fetched.
    RepliesLoaded {
        /// Forum the list was requested for.
        forum_id: ForumId,
        /// Topic the list was requested for.
        topic_id: TopicId,
        /// Replies as returned by the server.
        replies: Vec<Reply>,
    },

    /// Server created a forum.
    ForumCreated(Forum),

    /// Server updated a forum.
    ForumUpdated(Forum),

    /// Server deleted a forum.
    ForumDeleted {
        /// Deleted forum.
        forum_id: ForumId,
    },

    /// Server created a topic.
    TopicCreated(Topic),

    /// Server updated a topic.
    TopicUpdated(Topic),

    /// Server deleted a topic.
    TopicDeleted {
        /// Parent forum.
        forum_id: ForumId,
        /// Deleted topic.
        topic_id: TopicId,
    },

    /// Server created a reply.
    ReplyCreated(Reply),

    /// Server updated the text of a reply.
    ReplyUpdated(Reply),

    /// Server changed the accepted flag of a reply.
    ReplyAcceptChanged(Reply),

    /// Server deleted a reply.
    ReplyDeleted {
        /// Parent topic.
        topic_id: TopicId,
        /// Deleted reply.
        reply_id: ReplyId,
    },

    /// Session stored; the user is signed in.
    SessionPersisted(UserSession),

    /// Session removed; the user is signed out.
    LoggedOut,

    /// An API or session call failed.
    RequestFailed {
        /// What was attempted.
        operation: Operation,
        /// Error description, for the log.
        reason: String,
    },
}

/// The kind of call that produced a [`AppEvent::RequestFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `LoadForums`
    LoadForums,
    /// `LoadTopics`
    LoadTopics,
    /// `LoadReplies`
    LoadReplies,
    /// `CreateForum`
    CreateForum,
    /// `UpdateForum`
    UpdateForum,
    /// `DeleteForum`
    DeleteForum,
    /// `CreateTopic`
    CreateTopic,
    /// `UpdateTopic`
    UpdateTopic,
    /// `DeleteTopic`
    DeleteTopic,
    /// `CreateReply`
    CreateReply,
    /// `UpdateReply`
    UpdateReply,
    /// `DeleteReply`
    DeleteReply,
    /// `SetReplyAccepted`
    AcceptReply,
    /// `PersistSession`
    SaveSession,
    /// `ClearSession`
    ClearSession,
}

impl Operation {
    /// Operation performed by an action. `None` for actions without I/O.
    pub fn of(action: &AppAction) -> Option<Self> {
        let operation = match action {
            AppAction::Render | AppAction::Quit => return None,
            AppAction::LoadForums => Self::LoadForums,
            AppAction::LoadTopics { .. } => Self::LoadTopics,
            AppAction::LoadReplies { .. } => Self::LoadReplies,
            AppAction::CreateForum { .. } => Self::CreateForum,
            AppAction::UpdateForum { .. } => Self::UpdateForum,
            AppAction::DeleteForum { .. } => Self::DeleteForum,
            AppAction::CreateTopic { .. } => Self::CreateTopic,
            AppAction::UpdateTopic { .. } => Self::UpdateTopic,
            AppAction::DeleteTopic { .. } => Self::DeleteTopic,
            AppAction::CreateReply { .. } => Self::CreateReply,
            AppAction::UpdateReply { .. } => Self::UpdateReply,
            AppAction::DeleteReply { .. } => Self::DeleteReply,
            AppAction::SetReplyAccepted { .. } => Self::AcceptReply,
            AppAction::PersistSession(_) => Self::SaveSession,
            AppAction::ClearSession => Self::ClearSession,
        };
        Some(operation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LoadForums => "load_forums",
            Self::LoadTopics => "load_topics",
            Self::LoadReplies => "load_replies",
            Self::CreateForum => "create_forum",
            Self::UpdateForum => "update_forum",
            Self::DeleteForum => "delete_forum",
            Self::CreateTopic => "create_topic",
            Self::UpdateTopic => "update_topic",
            Self::DeleteTopic => "delete_topic",
            Self::CreateReply => "create_reply",
            Self::UpdateReply => "update_reply",
            Self::DeleteReply => "delete_reply",
            Self::AcceptReply => "accept_reply",
            Self::SaveSession => "save_session",
            Self::ClearSession => "clear_session",
        };
        f.write_str(name)
    }
}
