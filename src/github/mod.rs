//! GitHub integration for release operations

mod client;
mod release_manager;

pub use client::{DEFAULT_API_URL, GitHubClient};
pub use release_manager::{ReleaseNotes, ReleaseOrchestrator, ReleaseOutcome};

use crate::error::Result;
use crate::source::RepositoryContext;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Page size used when listing releases
pub const RELEASES_PER_PAGE: u32 = 100;

/// The release API calls this crate depends on.
///
/// Implemented by [`GitHubClient`] against the REST API. Every method maps
/// to exactly one request; none of them retry.
pub trait ReleasePlatform {
    /// One page of releases, newest first (pages start at 1).
    fn list_releases(
        &self,
        repository: &RepositoryContext,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<Release>>> + Send;

    /// Ask the platform to summarize changes between two refs.
    fn generate_release_notes(
        &self,
        repository: &RepositoryContext,
        request: &GenerateNotesRequest,
    ) -> impl Future<Output = Result<GeneratedNotes>> + Send;

    /// Open a pull request.
    fn create_pull_request(
        &self,
        repository: &RepositoryContext,
        request: &NewPullRequest,
    ) -> impl Future<Output = Result<PullRequest>> + Send;

    /// Publish a release.
    fn create_release(
        &self,
        repository: &RepositoryContext,
        request: &NewRelease,
    ) -> impl Future<Output = Result<Release>> + Send;

    /// Delete a git ref such as `heads/release/v6.2.0`.
    fn delete_ref(
        &self,
        repository: &RepositoryContext,
        git_ref: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Release record as returned by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Tag the release points at
    pub tag_name: String,
    /// Web URL of the release page
    #[serde(default)]
    pub html_url: Option<String>,
    /// Whether the release is a draft
    #[serde(default)]
    pub draft: bool,
    /// Whether the release is a prerelease
    #[serde(default)]
    pub prerelease: bool,
}

/// Body of the generate-notes request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateNotesRequest {
    /// Tag of the release being produced
    pub tag_name: String,
    /// Ref the tag will be created from if it does not exist yet
    pub target_commitish: String,
    /// Tag to diff against
    pub previous_tag_name: String,
}

/// Generated notes returned by the platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedNotes {
    /// Suggested release title
    #[serde(default)]
    pub name: String,
    /// Markdown body
    pub body: String,
}

/// Body of the create-pull-request request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPullRequest {
    /// Source branch
    pub head: String,
    /// Branch to merge into
    pub base: String,
    /// Pull request title
    pub title: String,
    /// Pull request description
    pub body: String,
}

/// Created pull request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    /// Pull request number
    pub number: u64,
    /// Web URL of the pull request
    pub html_url: String,
}

/// Body of the create-release request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRelease {
    /// Tag to create the release for
    pub tag_name: String,
    /// Ref to create the tag from
    pub target_commitish: String,
    /// Release title
    pub name: String,
    /// Release notes
    pub body: String,
    /// Create as draft
    pub draft: bool,
    /// Mark as prerelease
    pub prerelease: bool,
    /// Let the platform generate its own notes
    pub generate_release_notes: bool,
}

impl NewRelease {
    /// A published, non-prerelease release named after its tag, carrying
    /// notes that were already generated and cleaned.
    pub fn published(tag_name: &str, target_commitish: &str, body: String) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            target_commitish: target_commitish.to_string(),
            name: tag_name.to_string(),
            body,
            draft: false,
            prerelease: false,
            generate_release_notes: false,
        }
    }
}
