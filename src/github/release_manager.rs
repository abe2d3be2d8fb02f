//! Release orchestration: notes, release pull requests and publication

use super::{
    GenerateNotesRequest, NewPullRequest, NewRelease, PullRequest, RELEASES_PER_PAGE, Release,
    ReleasePlatform,
};
use crate::error::{GitHubError, Result};
use crate::notes::strip_release_pr_lines;
use crate::source::RepositoryContext;
use crate::version::{ReleaseTarget, VersionTag};

/// Cleaned release notes and the refs they were generated between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    /// Tag of the release the notes are diffed against
    pub previous_tag: String,
    /// Notes with release pull request lines removed
    pub body: String,
}

/// Result of a release publication
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Release as returned by the platform
    pub release: Release,
    /// Whether the merged release branch was deleted afterwards
    pub branch_deleted: bool,
}

/// Drives the release API for one repository.
///
/// Each operation issues its calls one at a time and resolves the target
/// branch before the first call, so input errors never leave side effects.
pub struct ReleaseOrchestrator<P> {
    platform: P,
    repository: RepositoryContext,
    per_page: u32,
}

impl<P: ReleasePlatform> ReleaseOrchestrator<P> {
    /// Create an orchestrator for `repository`
    pub fn new(platform: P, repository: RepositoryContext) -> Self {
        Self {
            platform,
            repository,
            per_page: RELEASES_PER_PAGE,
        }
    }

    /// Override the page size used when listing releases.
    ///
    /// Clamped to `1..=RELEASES_PER_PAGE`, the most the API returns per page.
    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, RELEASES_PER_PAGE);
        self
    }

    /// Platform this orchestrator talks to
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Repository this orchestrator operates on
    pub fn repository(&self) -> &RepositoryContext {
        &self.repository
    }

    /// Latest release in the same major line as `tag`.
    ///
    /// Releases are scanned in listing order and the first one whose tag
    /// starts with the major prefix of `tag` wins; releases of other major
    /// lines are skipped even when they are newer.
    pub async fn previous_release(&self, tag: &VersionTag) -> Result<Release> {
        let prefix = tag.major_prefix();
        let mut page = 1;

        loop {
            let releases = self
                .platform
                .list_releases(&self.repository, page, self.per_page)
                .await?;
            let count = releases.len();

            if let Some(release) = releases
                .into_iter()
                .find(|release| tag.shares_major_with(&release.tag_name))
            {
                log::debug!("Previous release for {}: {}", tag, release.tag_name);
                return Ok(release);
            }

            if count < self.per_page as usize {
                break;
            }
            page += 1;
        }

        Err(GitHubError::NoMatchingRelease {
            prefix: prefix.to_string(),
        }
        .into())
    }

    /// Tag of the latest release in the same major line as `tag`
    pub async fn previous_release_tag(&self, tag: &VersionTag) -> Result<String> {
        Ok(self.previous_release(tag).await?.tag_name)
    }

    /// Generate notes for `tag` against the previous release of its major
    /// line, with release pull request titles stripped.
    pub async fn generate_release_notes(
        &self,
        tag: &VersionTag,
        target: &ReleaseTarget,
    ) -> Result<ReleaseNotes> {
        let previous_tag = self.previous_release_tag(tag).await?;

        let request = GenerateNotesRequest {
            tag_name: tag.to_string(),
            target_commitish: target.commitish.clone(),
            previous_tag_name: previous_tag.clone(),
        };
        let generated = self
            .platform
            .generate_release_notes(&self.repository, &request)
            .await?;

        Ok(ReleaseNotes {
            previous_tag,
            body: strip_release_pr_lines(&generated.body),
        })
    }

    /// Open the release pull request `release/<tag>` into the target branch.
    pub async fn generate_pr(
        &self,
        tag: &VersionTag,
        explicit_branch: Option<&str>,
    ) -> Result<PullRequest> {
        let target = ReleaseTarget::resolve(tag, explicit_branch)?;
        let notes = self.generate_release_notes(tag, &target).await?;

        let request = NewPullRequest {
            head: tag.release_branch(),
            base: target.branch,
            title: tag.pull_request_title(),
            body: notes.body,
        };
        self.platform
            .create_pull_request(&self.repository, &request)
            .await
    }

    /// Publish the release for `tag`, then delete its merged release branch.
    ///
    /// Branch deletion is best effort: a failure is logged and reported in
    /// the outcome but does not fail the release.
    pub async fn release(
        &self,
        tag: &VersionTag,
        explicit_branch: Option<&str>,
    ) -> Result<ReleaseOutcome> {
        let target = ReleaseTarget::resolve(tag, explicit_branch)?;
        let notes = self.generate_release_notes(tag, &target).await?;

        let request = NewRelease::published(tag.as_str(), &target.commitish, notes.body);
        let release = self
            .platform
            .create_release(&self.repository, &request)
            .await?;

        let branch_ref = tag.release_branch_ref();
        let branch_deleted = match self.platform.delete_ref(&self.repository, &branch_ref).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to delete {}: {}", branch_ref, e);
                false
            }
        };

        Ok(ReleaseOutcome {
            release,
            branch_deleted,
        })
    }
}
