//! REST client for the GitHub release endpoints

use super::{
    GenerateNotesRequest, GeneratedNotes, NewPullRequest, NewRelease, PullRequest, Release,
    ReleasePlatform,
};
use crate::error::{GitHubError, Result};
use crate::source::RepositoryContext;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Authenticated GitHub REST client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `api_url` (e.g. [`DEFAULT_API_URL`] or a GitHub
    /// Enterprise `/api/v3` root).
    pub fn new(api_url: &str, token: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| GitHubError::Request {
                operation: "build_client".to_string(),
                source,
            })?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn repo_url(&self, repository: &RepositoryContext, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url, repository.owner, repository.repo, path
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    /// Send a request and turn transport failures and non-2xx statuses into
    /// [`GitHubError`]s.
    async fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response> {
        log::debug!("GitHub API: {}", operation);

        let response = request.send().await.map_err(|source| GitHubError::Request {
            operation: operation.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        Err(GitHubError::Api {
            operation: operation.to_string(),
            status: status.as_u16(),
            message,
        }
        .into())
    }

    async fn json<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(operation, request).await?;
        let value = response.json().await.map_err(|source| GitHubError::Decode {
            operation: operation.to_string(),
            source,
        })?;
        Ok(value)
    }
}

impl ReleasePlatform for GitHubClient {
    async fn list_releases(
        &self,
        repository: &RepositoryContext,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Release>> {
        let url = self.repo_url(repository, "releases");
        let request = self
            .request(Method::GET, &url)
            .query(&[("per_page", per_page), ("page", page)]);
        self.json("list_releases", request).await
    }

    async fn generate_release_notes(
        &self,
        repository: &RepositoryContext,
        request: &GenerateNotesRequest,
    ) -> Result<GeneratedNotes> {
        let url = self.repo_url(repository, "releases/generate-notes");
        let request = self.request(Method::POST, &url).json(request);
        self.json("generate_release_notes", request).await
    }

    async fn create_pull_request(
        &self,
        repository: &RepositoryContext,
        request: &NewPullRequest,
    ) -> Result<PullRequest> {
        let url = self.repo_url(repository, "pulls");
        let request = self.request(Method::POST, &url).json(request);
        self.json("create_pull_request", request).await
    }

    async fn create_release(
        &self,
        repository: &RepositoryContext,
        request: &NewRelease,
    ) -> Result<Release> {
        let url = self.repo_url(repository, "releases");
        let request = self.request(Method::POST, &url).json(request);
        self.json("create_release", request).await
    }

    async fn delete_ref(&self, repository: &RepositoryContext, git_ref: &str) -> Result<()> {
        let url = self.repo_url(repository, &format!("git/refs/{}", git_ref));
        self.send("delete_ref", self.request(Method::DELETE, &url))
            .await?;
        Ok(())
    }
}
