//! InfluencerHunters ("IH") endpoint catalog.

use crate::api::{
    ApiResponse, ApiResult, KeywordSearch, ParamValue, Request, RequestDispatcher,
    RequestDispatcherBuilder, ReqwestTransport, Transport,
};
use crate::network::DEFAULT_IH_API_URL;

/// Client for the InfluencerHunters TikTok API.
///
/// Every method assembles its query parameters and dispatches one GET with
/// the default number of attempts. No validation or pagination is done here;
/// cursors are passed through as given.
#[derive(Debug)]
pub struct InfluencerHuntersClient<T = ReqwestTransport> {
    dispatcher: RequestDispatcher<T>,
}

impl InfluencerHuntersClient<ReqwestTransport> {
    /// Create a client for `token` against the production IH server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(token: impl Into<String>) -> ApiResult<Self> {
        Ok(Self::with_dispatcher(Self::builder(token).build()?))
    }

    /// Dispatcher builder preset to the IH server.
    pub fn builder(token: impl Into<String>) -> RequestDispatcherBuilder {
        RequestDispatcherBuilder::new(token).base_url(DEFAULT_IH_API_URL)
    }
}

impl<T: Transport> InfluencerHuntersClient<T> {
    pub fn with_dispatcher(dispatcher: RequestDispatcher<T>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &RequestDispatcher<T> {
        &self.dispatcher
    }

    /// Most popular posts for a hashtag, with user information.
    pub async fn get_posts_from_hashtag(&self, hashtag: &str, depth: u32) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::hashtag_posts_by_depth(hashtag, depth))
            .await
    }

    /// Profile information for a username (handle).
    pub async fn get_user_info(&self, username: &str) -> ApiResult<ApiResponse> {
        self.dispatcher.execute(Request::user_info(username)).await
    }

    pub async fn get_user_posts(&self, username: &str, depth: u32) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::user_posts(username, depth))
            .await
    }

    /// User posts by secondary user ID (`secUid`).
    pub async fn get_user_posts_id(&self, sec_uid: &str, depth: u32) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::user_posts_from_id(sec_uid, depth))
            .await
    }

    /// Recent posts for a hashtag from the last `days` days.
    pub async fn get_recent_posts_from_hashtag(
        &self,
        hashtag: &str,
        days: u32,
    ) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::hashtag_recent_posts(hashtag, days))
            .await
    }

    pub async fn get_post_from_keyword(&self, search: &KeywordSearch) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::keyword_search(search))
            .await
    }

    pub async fn get_comments(
        &self,
        aweme_id: &str,
        cursor: impl Into<ParamValue>,
    ) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::post_comments(aweme_id, cursor))
            .await
    }

    pub async fn get_comment_replies(
        &self,
        aweme_id: &str,
        comment_id: &str,
        cursor: impl Into<ParamValue>,
    ) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::comment_replies(aweme_id, comment_id, cursor))
            .await
    }
}
