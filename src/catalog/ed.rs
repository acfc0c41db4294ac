//! EnsembleData ("ED") endpoint catalog.

use crate::api::{
    ApiResponse, ApiResult, KeywordSearch, ParamValue, Request, RequestDispatcher,
    RequestDispatcherBuilder, ReqwestTransport, Transport,
};
use crate::network::DEFAULT_ED_API_URL;

/// Client for the EnsembleData TikTok API.
///
/// This client pages hashtag posts by cursor rather than expanding them by
/// depth. It exposes six operations: hashtag posts, user info, user posts,
/// keyword search, post comments and comment replies.
#[derive(Debug)]
pub struct EnsembleDataClient<T = ReqwestTransport> {
    dispatcher: RequestDispatcher<T>,
}

impl EnsembleDataClient<ReqwestTransport> {
    /// Create a client for `token` against the production ED server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(token: impl Into<String>) -> ApiResult<Self> {
        Ok(Self::with_dispatcher(Self::builder(token).build()?))
    }

    /// Dispatcher builder preset to the ED server.
    pub fn builder(token: impl Into<String>) -> RequestDispatcherBuilder {
        RequestDispatcherBuilder::new(token).base_url(DEFAULT_ED_API_URL)
    }
}

impl<T: Transport> EnsembleDataClient<T> {
    pub fn with_dispatcher(dispatcher: RequestDispatcher<T>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &RequestDispatcher<T> {
        &self.dispatcher
    }

    /// One page of posts for a hashtag. Pass the `nextCursor` of the
    /// previous page to continue.
    pub async fn get_hashtag_posts(
        &self,
        name: &str,
        cursor: impl Into<ParamValue>,
    ) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::hashtag_posts_by_cursor(name, cursor))
            .await
    }

    pub async fn get_user_info(&self, username: &str) -> ApiResult<ApiResponse> {
        self.dispatcher.execute(Request::user_info(username)).await
    }

    pub async fn get_user_posts(&self, username: &str, depth: u32) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::user_posts(username, depth))
            .await
    }

    pub async fn get_keyword_search(&self, search: &KeywordSearch) -> ApiResult<ApiResponse> {
        self.dispatcher
            .execute(Request::keyword_search(search))
            .await
    }

    pub async fn get_post_comments(
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
