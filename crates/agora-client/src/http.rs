//! HTTP implementation of [`ForumApi`].

use std::{sync::RwLock, time::Duration};

use agora_core::{
    Forum, ForumDraft, ForumId, NewReply, NewTopic, Reply, ReplyId, ReplyPatch, Topic, TopicDraft,
    TopicId,
};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::{ApiError, ForumApi, Route};

/// Connection settings for [`HttpApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL. Routes are resolved relative to it.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:3000/".to_owned(), timeout: Duration::from_secs(10) }
    }
}

/// reqwest-backed forum API.
#[derive(Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
    token: RwLock<Option<String>>,
}

impl HttpApi {
    /// Build a client for `config`.
    ///
    /// A missing trailing slash on the base URL is added so that routes
    /// resolve beneath it rather than replacing its last segment.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut base = config.base_url.trim().to_owned();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, base, token: RwLock::new(None) })
    }

    /// Absolute URL of a route.
    pub fn url(&self, route: Route) -> Result<Url, ApiError> {
        self.base.join(&route.to_string()).map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    fn request(&self, method: Method, route: Route) -> Result<RequestBuilder, ApiError> {
        let url = self.url(route)?;
        tracing::debug!(%method, %url, "request");

        let request = self.client.request(method, url);
        Ok(match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }

    async fn send(request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "request rejected");
        Err(ApiError::Status { status: status.as_u16(), body })
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let bytes = Self::send(request).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute(request: RequestBuilder) -> Result<(), ApiError> {
        Self::send(request).await.map(drop)
    }
}

impl ForumApi for HttpApi {
    fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    async fn list_forums(&self) -> Result<Vec<Forum>, ApiError> {
        Self::fetch(self.request(Method::GET, Route::Forums)?).await
    }

    async fn create_forum(&self, draft: &ForumDraft) -> Result<Forum, ApiError> {
        Self::fetch(self.request(Method::POST, Route::Forums)?.json(draft)).await
    }

    async fn update_forum(&self, forum_id: ForumId, draft: &ForumDraft) -> Result<Forum, ApiError> {
        Self::fetch(self.request(Method::PATCH, Route::Forum(forum_id))?.json(draft)).await
    }

    async fn delete_forum(&self, forum_id: ForumId) -> Result<(), ApiError> {
        Self::execute(self.request(Method::DELETE, Route::Forum(forum_id))?).await
    }

    async fn list_topics(&self, forum_id: ForumId) -> Result<Vec<Topic>, ApiError> {
        Self::fetch(self.request(Method::GET, Route::Topics(forum_id))?).await
    }

    async fn create_topic(&self, forum_id: ForumId, topic: &NewTopic) -> Result<Topic, ApiError> {
        Self::fetch(self.request(Method::POST, Route::Topics(forum_id))?.json(topic)).await
    }

    async fn update_topic(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        draft: &TopicDraft,
    ) -> Result<Topic, ApiError> {
        let request = self.request(Method::PATCH, Route::Topic(forum_id, topic_id))?;
        Self::fetch(request.json(draft)).await
    }

    async fn delete_topic(&self, forum_id: ForumId, topic_id: TopicId) -> Result<(), ApiError> {
        Self::execute(self.request(Method::DELETE, Route::Topic(forum_id, topic_id))?).await
    }

    async fn list_replies(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
    ) -> Result<Vec<Reply>, ApiError> {
        Self::fetch(self.request(Method::GET, Route::Replies(forum_id, topic_id))?).await
    }

    async fn create_reply(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply: &NewReply,
    ) -> Result<Reply, ApiError> {
        let request = self.request(Method::POST, Route::Replies(forum_id, topic_id))?;
        Self::fetch(request.json(reply)).await
    }

    async fn update_reply(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply_id: ReplyId,
        patch: &ReplyPatch,
    ) -> Result<Reply, ApiError> {
        let request = self.request(Method::PATCH, Route::Reply(forum_id, topic_id, reply_id))?;
        Self::fetch(request.json(patch)).await
    }

    async fn delete_reply(
        &self,
        forum_id: ForumId,
        topic_id: TopicId,
        reply_id: ReplyId,
    ) -> Result<(), ApiError> {
        Self::execute(self.request(Method::DELETE, Route::Reply(forum_id, topic_id, reply_id))?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpApi {
        HttpApi::new(&ClientConfig { base_url: base_url.into(), ..ClientConfig::default() })
            .unwrap()
    }

    #[test]
    fn routes_resolve_below_base_path() {
        let api = api("https://school.example/api");

        assert_eq!(
            api.url(Route::Replies(1, 2)).unwrap().as_str(),
            "https://school.example/api/forum/1/topics/2/replies"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = HttpApi::new(&ClientConfig { base_url: "not a url".into(), ..Default::default() });

        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn token_can_be_set_and_cleared() {
        let api = api("http://localhost:3000");

        api.set_token(Some("abc".into()));
        assert_eq!(api.token().as_deref(), Some("abc"));

        api.set_token(None);
        assert_eq!(api.token(), None);
    }
}
