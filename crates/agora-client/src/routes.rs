//! REST paths, relative to the API base URL.

use std::fmt;

use agora_core::{ForumId, ReplyId, TopicId};

/// A resource path under `forum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `forum`
    Forums,
    /// `forum/{id}`
    Forum(ForumId),
    /// `forum/{id}/topics`
    Topics(ForumId),
    /// `forum/{id}/topics/{id}`
    Topic(ForumId, TopicId),
    /// `forum/{id}/topics/{id}/replies`
    Replies(ForumId, TopicId),
    /// `forum/{id}/topics/{id}/replies/{id}`
    Reply(ForumId, TopicId, ReplyId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forums => write!(f, "forum"),
            Self::Forum(forum) => write!(f, "forum/{forum}"),
            Self::Topics(forum) => write!(f, "forum/{forum}/topics"),
            Self::Topic(forum, topic) => write!(f, "forum/{forum}/topics/{topic}"),
            Self::Replies(forum, topic) => write!(f, "forum/{forum}/topics/{topic}/replies"),
            Self::Reply(forum, topic, reply) => {
                write!(f, "forum/{forum}/topics/{topic}/replies/{reply}")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_nest_under_forum() {
        assert_eq!(Route::Forums.to_string(), "forum");
        assert_eq!(Route::Forum(3).to_string(), "forum/3");
        assert_eq!(Route::Topics(3).to_string(), "forum/3/topics");
        assert_eq!(Route::Replies(3, 8).to_string(), "forum/3/topics/8/replies");
        assert_eq!(Route::Reply(3, 8, 21).to_string(), "forum/3/topics/8/replies/21");
    }
}
