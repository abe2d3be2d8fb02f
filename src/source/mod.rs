//! Repository resolution (org/repo notation and GitHub URLs)

use crate::error::{CliError, ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Owner and name of the repository being released
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryContext {
    /// Account or organization that owns the repository
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepositoryContext {
    /// Create a context from its parts
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse `owner/repo` or a repository URL such as
    /// `https://github.com/owner/repo.git`.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^https?://[^/]+/(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?/?$")
                .expect("repository URL regex is valid")
        });

        if let Some(caps) = URL_RE.captures(input) {
            return Ok(Self::new(&caps["owner"], &caps["repo"]));
        }

        if let Some((owner, repo)) = input.split_once('/') {
            let repo = repo.trim_end_matches(".git");
            if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') {
                return Ok(Self::new(owner, repo));
            }
        }

        Err(ReleaseError::Cli(CliError::InvalidArguments {
            reason: format!(
                "Invalid repository: '{}'. Use owner/repo or a GitHub URL",
                input
            ),
        }))
    }
}

impl fmt::Display for RepositoryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
