use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{Config, ContestWindow};
use crate::data::{ErrorBody, PullRequestItem, SearchResults, UserItem};
use crate::error::FetchError;

/// Thin client over the two GitHub search endpoints the pipeline consumes.
pub struct GithubClient {
    http: reqwest::Client,
    api_root: String,
}

impl GithubClient {
    /// Build an HTTP client with the credential baked into every request.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("token {}", config.token))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("octofest/", env!("CARGO_PKG_VERSION"))),
        );

        Ok(Self {
            http: reqwest::Client::builder()
                .default_headers(headers)
                .build()?,
            api_root: config.api_root.clone(),
        })
    }

    /// PRs the user authored inside the contest window. First result page
    /// only; the contest thresholds sit well under the page size.
    pub async fn search_contest_prs(
        &self,
        username: &str,
        window: &ContestWindow,
    ) -> Result<SearchResults<PullRequestItem>, FetchError> {
        let query = format!(
            "author:{} is:pr created:{}",
            username,
            window.query_range()
        );
        self.get_search("issues", &query).await
    }

    /// Profile lookup for the same user.
    pub async fn search_user(&self, username: &str) -> Result<SearchResults<UserItem>, FetchError> {
        self.get_search("users", &format!("user:{username}")).await
    }

    /// Fan out both lookups, fan in once both have settled. A failure on one
    /// side never cancels the other; errors are folded only after the join.
    pub async fn fetch_user_activity(
        &self,
        username: &str,
        window: &ContestWindow,
    ) -> Result<(SearchResults<PullRequestItem>, SearchResults<UserItem>), FetchError> {
        let (prs, user) = futures::join!(
            self.search_contest_prs(username, window),
            self.search_user(username),
        );
        Ok((prs?, user?))
    }

    /// GET one search endpoint and decode its body, keeping transport,
    /// status and decode failures distinct.
    async fn get_search<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &str,
    ) -> Result<SearchResults<T>, FetchError> {
        let url = format!(
            "{}/search/{}?q={}",
            self.api_root,
            endpoint,
            urlencoding::encode(query)
        );
        debug!(endpoint, query, "dispatching search request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error_description = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error_description);
            return Err(FetchError::BadStatus {
                endpoint,
                status,
                error_description,
            });
        }

        let results: SearchResults<T> =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })?;

        // A well-formed body can still report a failed search.
        if let Some(errors) = &results.errors {
            return Err(FetchError::Api {
                message: errors.message.clone(),
            });
        }

        Ok(results)
    }
}
