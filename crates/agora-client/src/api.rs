//! The forum API surface.

use std::future::Future;

use agora_core::{
    Forum, ForumDraft, ForumId, NewReply, NewTopic, Reply, ReplyId, ReplyPatch, Topic, TopicDraft,
    TopicId,
};

use crate::ApiError;

/// Abstracts the REST API consumed by the forum screen.
///
/// Implementations return parsed bodies. The caller awaits one call at a
/// time; implementations need not order concurrent calls.
///
/// # Implementations
///
/// - [`crate::HttpApi`]: reqwest against a real server
/// - [`crate::MemoryApi`]: in-process emulation for demo mode and tests
pub trait ForumApi: Send + Sync {
    /// Set or clear the bearer token sent with every request.
    fn set_token(&self, token: Option<String>);

    /// `GET forum`
    fn list_forums(&self) -> impl Future<Output = Result<Vec<Forum>, ApiError>> + Send;

    /// `POST forum`
    fn create_forum(
        &self,
        draft: &ForumDraft,
    ) -> impl Future<Output = Result<Forum, ApiError>> + Send;

    /// `PATCH forum/{id}`
    fn update_forum(
        &self,
        forum_id: ForumId,
        draft: &ForumDraft,
    ) -> impl Future<Output = Result<Forum, ApiError>> + Send;

    /// `DELETE forum/{id}`
    fn delete_forum(&self, forum_id: ForumId) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET forum/{id}/topics`
    fn list_topics(
        &self,
        forum_id: ForumId,
    ) -> impl Future<Output = Result<Vec<Topic>, ApiError>> + Send;

    /// `POST forum/{id}/topics`
    fn create_topic(
        &self,
        forum_id: ForumId,
        topic: &NewTopic,
    ) -> impl Future<Output = Result<Topic, ApiError>> + Send;

    /// `PATCH forum/{id}/topics/{id}`
    fn update_topic(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        draft: &TopicDraft,
    ) -> impl Future<Output = Result<Topic, ApiError>> + Send;

    /// `DELETE forum/{id}/topics/{id}`
    fn delete_topic(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET forum/{id}/topics/{id}/replies`
    fn list_replies(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
    ) -> impl Future<Output = Result<Vec<Reply>, ApiError>> + Send;

    /// `POST forum/{id}/topics/{id}/replies`
    fn create_reply(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply: &NewReply,
    ) -> impl Future<Output = Result<Reply, ApiError>> + Send;

    /// `PATCH forum/{id}/topics/{id}/replies/{id}`
    fn update_reply(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply_id: ReplyId,
        patch: &ReplyPatch,
    ) -> impl Future<Output = Result<Reply, ApiError>> + Send;

    /// `DELETE forum/{id}/topics/{id}/replies/{id}`
    fn delete_reply(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply_id: ReplyId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
