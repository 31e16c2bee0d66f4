//! GitHub repository listing client

use std::time::Duration;

use async_trait::async_trait;
use devfolio_core::RepoListing;
use devfolio_domain::constants::MSG_NO_GITHUB_PROFILE;
use devfolio_domain::{DevfolioError, GithubConfig, RepoListingQuery, Result};
use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Lists a user's public repositories through the GitHub REST API.
pub struct GithubClient {
    http_client: HttpClient,
    api_base: Url,
    client_id: String,
    client_secret: String,
}

impl GithubClient {
    /// Build a client for the endpoint and credentials in `config`.
    ///
    /// The User-Agent is applied when the [`HttpClient`] is built; see
    /// [`GithubClient::from_config`].
    pub fn new(config: &GithubConfig, http_client: HttpClient) -> Result<Self> {
        let api_base = Url::parse(&config.api_base_url).map_err(|err| {
            DevfolioError::Config(format!(
                "invalid GitHub API base URL '{}': {err}",
                config.api_base_url
            ))
        })?;

        if api_base.cannot_be_a_base() {
            return Err(DevfolioError::Config(format!(
                "GitHub API base URL '{}' cannot carry a path",
                config.api_base_url
            )));
        }

        Ok(Self {
            http_client,
            api_base,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    /// Build the HTTP client and the GitHub client from configuration.
    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        let mut builder = HttpClient::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self::new(config, builder.build()?)
    }

    /// `{base}/users/{username}/repos?per_page=..&sort=..[&client_id=..&client_secret=..]`
    ///
    /// The username is a single percent-encoded path segment whatever it
    /// contains.
    fn listing_url(&self, query: &RepoListingQuery) -> Url {
        let mut url = self.api_base.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["users", query.username.as_str(), "repos"]);
        }

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("per_page", &query.per_page.to_string())
                .append_pair("sort", &query.sort);
            if !self.client_id.is_empty() {
                pairs.append_pair("client_id", &self.client_id);
            }
            if !self.client_secret.is_empty() {
                pairs.append_pair("client_secret", &self.client_secret);
            }
        }

        url
    }
}

#[async_trait]
impl RepoListing for GithubClient {
    async fn list_repositories(&self, query: &RepoListingQuery) -> Result<serde_json::Value> {
        let url = self.listing_url(query);

        let response = self
            .http_client
            .send(self.http_client.request(Method::GET, url))
            .await
            .inspect_err(|err| {
                warn!(username = %query.username, error = %err, "GitHub request failed");
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(username = %query.username, %status, "GitHub returned a non-success status");
            return Err(DevfolioError::UpstreamNotFound(MSG_NO_GITHUB_PROFILE.to_string()));
        }

        let body =
            response.bytes().await.map_err(|err| DevfolioError::from(InfraError::from(err)))?;
        serde_json::from_slice(&body).map_err(|err| DevfolioError::from(InfraError::from(err)))
    }
}
