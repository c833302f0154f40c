//! In-process emulation of the forum server.
//!
//! Assigns ids and timestamps the way the real server does and keeps the
//! parent counters (`topicsCount`, `repliesCount`) in step. It enforces
//! parentage (a topic must exist under the forum it is addressed through)
//! but not authorization.

use std::sync::{
    RwLock,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use agora_core::{
    Forum, ForumDraft, ForumId, NewReply, NewTopic, Reply, ReplyId, ReplyPatch, Topic, TopicDraft,
    TopicId,
};
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{ApiError, ForumApi};

#[derive(Debug, Default)]
struct Store {
    forums: Vec<Forum>,
    topics: Vec<Topic>,
    replies: Vec<Reply>,
    next_id: u64,
}

impl Store {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn forum_mut(&mut self, forum_id: ForumId) -> Result<&mut Forum, ApiError> {
        self.forums
            .iter_mut()
            .find(|f| f.id == forum_id)
            .ok_or_else(|| ApiError::not_found(format!("forum {forum_id}")))
    }

    fn topic_mut(&mut self, forum_id: ForumId, topic_id: TopicId) -> Result<&mut Topic, ApiError> {
        self.topics
            .iter_mut()
            .find(|t| t.id == topic_id && t.forum_id == forum_id)
            .ok_or_else(|| ApiError::not_found(format!("topic {topic_id} in forum {forum_id}")))
    }

    fn reply_mut(
        &mut self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply_id: ReplyId,
    ) -> Result<&mut Reply, ApiError> {
        self.replies
            .iter_mut()
            .find(|r| r.id == reply_id && r.topic_id == topic_id && r.forum_id == forum_id)
            .ok_or_else(|| ApiError::not_found(format!("reply {reply_id}")))
    }
}

/// In-memory forum backend.
#[derive(Debug, Default)]
pub struct MemoryApi {
    store: Mutex<Store>,
    offline: AtomicBool,
    requests: AtomicUsize,
    token: RwLock<Option<String>>,
}

impl MemoryApi {
    /// Empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend preloaded with records. New ids continue after the largest
    /// id present.
    pub fn with_records(forums: Vec<Forum>, topics: Vec<Topic>, replies: Vec<Reply>) -> Self {
        let next_id = forums
            .iter()
            .map(|f| f.id)
            .chain(topics.iter().map(|t| t.id))
            .chain(replies.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);

        Self {
            store: Mutex::new(Store { forums, topics, replies, next_id }),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with [`ApiError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of calls received, including failed ones.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Bearer token most recently set.
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    /// Copy of the stored replies of a topic.
    pub async fn replies_of(&self, topic_id: TopicId) -> Vec<Reply> {
        let store = self.store.lock().await;
        store.replies.iter().filter(|r| r.topic_id == topic_id).cloned().collect()
    }

    fn begin(&self, operation: &str) -> Result<(), ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(operation, "memory backend request");
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Unavailable("backend offline".to_owned()));
        }
        Ok(())
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl ForumApi for MemoryApi {
    fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    async fn list_forums(&self) -> Result<Vec<Forum>, ApiError> {
        self.begin("list_forums")?;
        Ok(self.store.lock().await.forums.clone())
    }

    async fn create_forum(&self, draft: &ForumDraft) -> Result<Forum, ApiError> {
        self.begin("create_forum")?;
        let mut store = self.store.lock().await;
        let forum = Forum {
            id: store.allocate_id(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            tag: draft.tag.clone(),
            topics_count: 0,
            created_at: Self::now(),
        };
        store.forums.push(forum.clone());
        Ok(forum)
    }

    async fn update_forum(&self, forum_id: ForumId, draft: &ForumDraft) -> Result<Forum, ApiError> {
        self.begin("update_forum")?;
        let mut store = self.store.lock().await;
        let forum = store.forum_mut(forum_id)?;
        forum.apply(draft);
        Ok(forum.clone())
    }

    async fn delete_forum(&self, forum_id: ForumId) -> Result<(), ApiError> {
        self.begin("delete_forum")?;
        let mut store = self.store.lock().await;
        store.forum_mut(forum_id)?;
        store.forums.retain(|f| f.id != forum_id);
        store.topics.retain(|t| t.forum_id != forum_id);
        store.replies.retain(|r| r.forum_id != forum_id);
        Ok(())
    }

    async fn list_topics(&self, forum_id: ForumId) -> Result<Vec<Topic>, ApiError> {
        self.begin("list_topics")?;
        let mut store = self.store.lock().await;
        store.forum_mut(forum_id)?;
        Ok(store.topics.iter().filter(|t| t.forum_id == forum_id).cloned().collect())
    }

    async fn create_topic(&self, forum_id: ForumId, topic: &NewTopic) -> Result<Topic, ApiError> {
        self.begin("create_topic")?;
        let mut store = self.store.lock().await;
        store.forum_mut(forum_id)?.topics_count += 1;
        let topic = Topic {
            id: store.allocate_id(),
            title: topic.draft.title.clone(),
            author: topic.author.clone(),
            content: topic.draft.content.clone(),
            replies_count: 0,
            created_at: Self::now(),
            forum_id,
        };
        store.topics.push(topic.clone());
        Ok(topic)
    }

    async fn update_topic(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        draft: &TopicDraft,
    ) -> Result<Topic, ApiError> {
        self.begin("update_topic")?;
        let mut store = self.store.lock().await;
        let topic = store.topic_mut(forum_id, topic_id)?;
        topic.title.clone_from(&draft.title);
        topic.content.clone_from(&draft.content);
        Ok(topic.clone())
    }

    async fn delete_topic(&self, forum_id: ForumId, topic_id: TopicId) -> Result<(), ApiError> {
        self.begin("delete_topic")?;
        let mut store = self.store.lock().await;
        store.topic_mut(forum_id, topic_id)?;
        store.topics.retain(|t| t.id != topic_id);
        store.replies.retain(|r| r.topic_id != topic_id);
        let forum = store.forum_mut(forum_id)?;
        forum.topics_count = forum.topics_count.saturating_sub(1);
        Ok(())
    }

    async fn list_replies(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
    ) -> Result<Vec<Reply>, ApiError> {
        self.begin("list_replies")?;
        let mut store = self.store.lock().await;
        store.topic_mut(forum_id, topic_id)?;
        Ok(store.replies.iter().filter(|r| r.topic_id == topic_id).cloned().collect())
    }

    async fn create_reply(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply: &NewReply,
    ) -> Result<Reply, ApiError> {
        self.begin("create_reply")?;
        let mut store = self.store.lock().await;
        store.topic_mut(forum_id, topic_id)?.replies_count += 1;
        let reply = Reply {
            id: store.allocate_id(),
            author: reply.author.clone(),
            author_id: Some(reply.author_id),
            text: reply.draft.text.clone(),
            accepted: false,
            created_at: Self::now(),
            topic_id,
            forum_id,
        };
        store.replies.push(reply.clone());
        Ok(reply)
    }

    async fn update_reply(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply_id: ReplyId,
        patch: &ReplyPatch,
    ) -> Result<Reply, ApiError> {
        self.begin("update_reply")?;
        let mut store = self.store.lock().await;
        let reply = store.reply_mut(forum_id, topic_id, reply_id)?;
        if let Some(text) = &patch.text {
            reply.text.clone_from(text);
        }
        if let Some(accepted) = patch.accepted {
            reply.accepted = accepted;
        }
        Ok(reply.clone())
    }

    async fn delete_reply(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply_id: ReplyId,
    ) -> Result<(), ApiError> {
        self.begin("delete_reply")?;
        let mut store = self.store.lock().await;
        store.reply_mut(forum_id, topic_id, reply_id)?;
        store.replies.retain(|r| r.id != reply_id);
        let topic = store.topic_mut(forum_id, topic_id)?;
        topic.replies_count = topic.replies_count.saturating_sub(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use agora_core::{ReplyDraft, TopicDraft};

    use super::*;

    fn forum_draft(name: &str) -> ForumDraft {
        ForumDraft { name: name.into(), description: "A forum for testing".into(), tag: "T".into() }
    }

    #[tokio::test]
    async fn ids_are_server_assigned_and_unique() {
        let api = MemoryApi::new();
        let a = api.create_forum(&forum_draft("Math")).await.unwrap();
        let b = api.create_forum(&forum_draft("Physics")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(a.created_at > 0);
        assert_eq!(api.list_forums().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn topic_and_reply_counts_follow_children() {
        let api = MemoryApi::new();
        let forum = api.create_forum(&forum_draft("Math")).await.unwrap();
        let topic = api
            .create_topic(forum.id, &NewTopic {
                draft: TopicDraft { title: "Limits".into(), content: "What is a limit?".into() },
                author: "Prof".into(),
            })
            .await
            .unwrap();
        let reply = api
            .create_reply(forum.id, topic.id, &NewReply {
                draft: ReplyDraft { text: "An approach".into() },
                author: "Ana".into(),
                author_id: 7,
            })
            .await
            .unwrap();

        let forums = api.list_forums().await.unwrap();
        assert_eq!(forums[0].topics_count, 1);
        let topics = api.list_topics(forum.id).await.unwrap();
        assert_eq!(topics[0].replies_count, 1);

        api.delete_reply(forum.id, topic.id, reply.id).await.unwrap();
        let topics = api.list_topics(forum.id).await.unwrap();
        assert_eq!(topics[0].replies_count, 0);
    }

    #[tokio::test]
    async fn topic_must_belong_to_addressed_forum() {
        let api = MemoryApi::new();
        let math = api.create_forum(&forum_draft("Math")).await.unwrap();
        let physics = api.create_forum(&forum_draft("Physics")).await.unwrap();
        let topic = api
            .create_topic(math.id, &NewTopic {
                draft: TopicDraft { title: "Limits".into(), content: "What is a limit?".into() },
                author: "Prof".into(),
            })
            .await
            .unwrap();

        let result = api.list_replies(physics.id, topic.id).await;
        assert_eq!(result.unwrap_err().status(), Some(404));
    }

    #[tokio::test]
    async fn offline_backend_fails_and_counts_requests() {
        let api = MemoryApi::new();
        api.set_offline(true);

        assert!(matches!(api.list_forums().await, Err(ApiError::Unavailable(_))));
        assert_eq!(api.request_count(), 1);
    }

    #[tokio::test]
    async fn accept_patch_leaves_text_alone() {
        let api = MemoryApi::with_records(
            vec![Forum {
                id: 1,
                name: "Math".into(),
                description: String::new(),
                tag: String::new(),
                topics_count: 1,
                created_at: 1,
            }],
            vec![Topic {
                id: 2,
                title: "Limits".into(),
                author: "Prof".into(),
                content: String::new(),
                replies_count: 1,
                created_at: 1,
                forum_id: 1,
            }],
            vec![Reply {
                id: 3,
                author: "Ana".into(),
                author_id: Some(7),
                text: "original".into(),
                accepted: false,
                created_at: 1,
                topic_id: 2,
                forum_id: 1,
            }],
        );

        let reply = api.update_reply(1, 2, 3, &ReplyPatch::accepted(true)).await.unwrap();

        assert!(reply.accepted);
        assert_eq!(reply.text, "original");
        let next = api.create_forum(&forum_draft("Chemistry")).await.unwrap();
        assert_eq!(next.id, 4);
    }
}
