//! Endpoint table and per-operation request descriptors.
//!
//! Every API operation is a GET against a fixed path with a fixed set of
//! query parameters. [`Request`] pairs the two; the dispatcher appends the
//! token and resolves the path against its base URL.

use crate::api::types::{KeywordSearch, ParamValue, Payload};

/// Fixed server-side operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    HashtagPosts,
    HashtagRecentPosts,
    UserInfo,
    UserPosts,
    UserPostsFromId,
    KeywordSearch,
    /// Serves both post comments and comment replies; replies carry a
    /// `comment_id` parameter.
    PostComments,
}

impl Endpoint {
    /// Path suffix appended to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::HashtagPosts => "/tt/hashtag/posts",
            Endpoint::HashtagRecentPosts => "/tt/hashtag/recent-posts",
            Endpoint::UserInfo => "/tt/user/info",
            Endpoint::UserPosts => "/tt/user/posts",
            Endpoint::UserPostsFromId => "/tt/user/posts-from-id",
            Endpoint::KeywordSearch => "/tt/keyword/search",
            Endpoint::PostComments => "/tt/post/comments",
        }
    }
}

/// Endpoint descriptor: which endpoint to call and with what parameters.
///
/// Built fresh per call. The token is not part of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub endpoint: Endpoint,
    pub payload: Payload,
}

impl Request {
    pub fn new(endpoint: Endpoint, payload: Payload) -> Self {
        Self { endpoint, payload }
    }

    /// Most popular posts for a hashtag, expanded to `depth`.
    pub fn hashtag_posts_by_depth(hashtag: &str, depth: u32) -> Self {
        Self::new(
            Endpoint::HashtagPosts,
            Payload::new().with("name", hashtag).with("depth", depth),
        )
    }

    /// One page of posts for a hashtag, starting at `cursor`.
    pub fn hashtag_posts_by_cursor(hashtag: &str, cursor: impl Into<ParamValue>) -> Self {
        Self::new(
            Endpoint::HashtagPosts,
            Payload::new().with("name", hashtag).with("cursor", cursor),
        )
    }

    /// Posts for a hashtag from the last `days` days.
    pub fn hashtag_recent_posts(hashtag: &str, days: u32) -> Self {
        Self::new(
            Endpoint::HashtagRecentPosts,
            Payload::new().with("name", hashtag).with("days", days),
        )
    }

    pub fn user_info(username: &str) -> Self {
        Self::new(Endpoint::UserInfo, Payload::new().with("username", username))
    }

    pub fn user_posts(username: &str, depth: u32) -> Self {
        Self::new(
            Endpoint::UserPosts,
            Payload::new().with("username", username).with("depth", depth),
        )
    }

    /// User posts looked up by the internal secondary user ID.
    pub fn user_posts_from_id(sec_uid: &str, depth: u32) -> Self {
        Self::new(
            Endpoint::UserPostsFromId,
            Payload::new().with("secUid", sec_uid).with("depth", depth),
        )
    }

    pub fn keyword_search(search: &KeywordSearch) -> Self {
        Self::new(
            Endpoint::KeywordSearch,
            Payload::new()
                .with("name", search.keyword.as_str())
                .with("period", search.period)
                .with("sorting", search.sorting)
                .with("cursor", search.cursor.clone()),
        )
    }

    pub fn post_comments(aweme_id: &str, cursor: impl Into<ParamValue>) -> Self {
        Self::new(
            Endpoint::PostComments,
            Payload::new().with("aweme_id", aweme_id).with("cursor", cursor),
        )
    }

    pub fn comment_replies(aweme_id: &str, comment_id: &str, cursor: impl Into<ParamValue>) -> Self {
        Self::new(
            Endpoint::PostComments,
            Payload::new()
                .with("aweme_id", aweme_id)
                .with("comment_id", comment_id)
                .with("cursor", cursor),
        )
    }
}
