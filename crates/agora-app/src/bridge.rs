//! API-to-Application translation layer.
//!
//! The [`Bridge`] wraps a [`ForumApi`] and adapts it to the application
//! lifecycle.
//!
//! # Responsibilities
//!
//! - Converts API-bound [`crate::AppAction`]s into calls on the API.
//! - Converts each call's result back into exactly one [`crate::AppEvent`]:
//!   the matching success event, or [`AppEvent::RequestFailed`]. Loading
//!   flags rely on this to always be cleared.

use agora_client::{ApiError, ForumApi};
use agora_core::ReplyPatch;

use crate::{AppAction, AppEvent, Operation};

/// Bridge between App and the forum API.
///
/// Generic over the API so the same code runs against a real server and the
/// in-memory backend.
pub struct Bridge<A: ForumApi> {
    api: A,
}

impl<A: ForumApi> Bridge<A> {
    /// Create a new Bridge over `api`.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Underlying API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Perform an API-bound action and return its completion event.
    ///
    /// Returns one event for every action where [`AppAction::is_request`]
    /// holds, and none otherwise.
    pub async fn process_app_action(&self, action: AppAction) -> Vec<AppEvent> {
        let Some(operation) = Operation::of(&action).filter(|_| action.is_request()) else {
            return vec![];
        };

        let result = self.perform(action).await;
        let event = result.unwrap_or_else(|e| {
            tracing::warn!(%operation, error = %e, "api call failed");
            AppEvent::RequestFailed { operation, reason: e.to_string() }
        });
        vec![event]
    }

    async fn perform(&self, action: AppAction) -> Result<AppEvent, ApiError> {
        let api = &self.api;
        let event = match action {
            AppAction::LoadForums => AppEvent::ForumsLoaded(api.list_forums().await?),
            AppAction::LoadTopics { forum_id } => {
                AppEvent::TopicsLoaded { forum_id, topics: api.list_topics(forum_id).await? }
            },
            AppAction::LoadReplies { forum_id, topic_id } => AppEvent::RepliesLoaded {
                forum_id,
                topic_id,
                replies: api.list_replies(forum_id, topic_id).await?,
            },
            AppAction::CreateForum { draft } => {
                AppEvent::ForumCreated(api.create_forum(&draft).await?)
            },
            AppAction::UpdateForum { forum_id, draft } => {
                AppEvent::ForumUpdated(api.update_forum(forum_id, &draft).await?)
            },
            AppAction::DeleteForum { forum_id } => {
                api.delete_forum(forum_id).await?;
                AppEvent::ForumDeleted { forum_id }
            },
            AppAction::CreateTopic { forum_id, topic } => {
                AppEvent::TopicCreated(api.create_topic(forum_id, &topic).await?)
            },
            AppAction::UpdateTopic { forum_id, topic_id, draft } => {
                AppEvent::TopicUpdated(api.update_topic(forum_id, topic_id, &draft).await?)
            },
            AppAction::DeleteTopic { forum_id, topic_id } => {
                api.delete_topic(forum_id, topic_id).await?;
                AppEvent::TopicDeleted { forum_id, topic_id }
            },
            AppAction::CreateReply { forum_id, topic_id, reply } => {
                AppEvent::ReplyCreated(api.create_reply(forum_id, topic_id, &reply).await?)
            },
            AppAction::UpdateReply { forum_id, topic_id, reply_id, draft } => {
                let patch = ReplyPatch::text(draft.text);
                AppEvent::ReplyUpdated(api.update_reply(forum_id, topic_id, reply_id, &patch).await?)
            },
            AppAction::DeleteReply { forum_id, topic_id, reply_id } => {
                api.delete_reply(forum_id, topic_id, reply_id).await?;
                AppEvent::ReplyDeleted { topic_id, reply_id }
            },
            AppAction::SetReplyAccepted { forum_id, topic_id, reply_id, accepted } => {
                let patch = ReplyPatch::accepted(accepted);
                let reply = api.update_reply(forum_id, topic_id, reply_id, &patch).await?;
                AppEvent::ReplyAcceptChanged(reply)
            },
            // Filtered out by `process_app_action`.
            AppAction::Render
            | AppAction::Quit
            | AppAction::PersistSession(_)
            | AppAction::ClearSession => AppEvent::Tick,
        };
        Ok(event)
    }
}
