//! Server entities.
//!
//! These mirror the JSON bodies of the forum API (camelCase on the wire).
//! Ids are always server-assigned; the client never invents one.

use serde::{Deserialize, Serialize};

use crate::{ForumDraft, ReplyDraft, TopicDraft};

/// Forum identifier.
pub type ForumId = u64;
/// Topic identifier.
pub type TopicId = u64;
/// Reply identifier.
pub type ReplyId = u64;
/// User identifier.
pub type UserId = u64;
/// Milliseconds since the Unix epoch. Zero means unknown.
pub type Timestamp = i64;

/// Top-level discussion category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    /// Server-assigned id.
    pub id: ForumId,
    /// Display name. Searched by the forum filter.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Short label shown as a badge.
    #[serde(default)]
    pub tag: String,
    /// Number of topics in this forum.
    #[serde(default)]
    pub topics_count: u32,
    /// Creation time.
    #[serde(default)]
    pub created_at: Timestamp,
}

/// A thread within a forum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Server-assigned id.
    pub id: TopicId,
    /// Display title. Searched by the topic filter.
    pub title: String,
    /// Author display name.
    #[serde(default)]
    pub author: String,
    /// Opening post.
    #[serde(default)]
    pub content: String,
    /// Number of replies in this topic.
    #[serde(default)]
    pub replies_count: u32,
    /// Creation time.
    #[serde(default)]
    pub created_at: Timestamp,
    /// Parent forum.
    pub forum_id: ForumId,
}

/// A message within a topic's thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Server-assigned id.
    pub id: ReplyId,
    /// Author display name.
    #[serde(default)]
    pub author: String,
    /// Author's user id. Only this user may edit or delete the reply.
    /// `None` when the server did not send one, in which case nobody owns it.
    #[serde(default)]
    pub author_id: Option<UserId>,
    /// Message body.
    pub text: String,
    /// Marked as the resolving answer by a student.
    #[serde(default)]
    pub accepted: bool,
    /// Creation time.
    #[serde(default)]
    pub created_at: Timestamp,
    /// Parent topic.
    pub topic_id: TopicId,
    /// Parent forum.
    pub forum_id: ForumId,
}

impl Forum {
    /// Overwrite the editable fields from a draft.
    pub fn apply(&mut self, draft: &ForumDraft) {
        self.name.clone_from(&draft.name);
        self.description.clone_from(&draft.description);
        self.tag.clone_from(&draft.tag);
    }
}

/// Body of `POST forum/{id}/topics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTopic {
    /// Title and content.
    #[serde(flatten)]
    pub draft: TopicDraft,
    /// Author display name, taken from the session.
    pub author: String,
}

/// Body of `POST forum/{id}/topics/{id}/replies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReply {
    /// Reply text.
    #[serde(flatten)]
    pub draft: ReplyDraft,
    /// Author display name, taken from the session.
    pub author: String,
    /// Author's user id, taken from the session.
    pub author_id: UserId,
}

/// Body of `PATCH forum/{id}/topics/{id}/replies/{id}`.
///
/// Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPatch {
    /// New text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// New acceptance flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
}

impl ReplyPatch {
    /// Patch that only replaces the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), accepted: None }
    }

    /// Patch that only sets the acceptance flag.
    pub fn accepted(accepted: bool) -> Self {
        Self { text: None, accepted: Some(accepted) }
    }
}
