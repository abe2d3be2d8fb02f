//! Mapping from a tag's major version to the branch it is released from.

use super::VersionTag;
use crate::error::VersionError;

/// Major prefixes with a maintained release branch.
const MAJOR_BRANCHES: &[(&str, &str)] = &[("v6.", "main"), ("v5.", "v5.x")];

/// Branch that releases of this tag's major line are cut from.
pub fn target_branch(tag: &VersionTag) -> Result<&'static str, VersionError> {
    MAJOR_BRANCHES
        .iter()
        .find(|(prefix, _)| tag.as_str().starts_with(prefix))
        .map(|(_, branch)| *branch)
        .ok_or_else(|| VersionError::UnsupportedVersion {
            tag: tag.as_str().to_string(),
        })
}

/// Qualified ref for a branch (`heads/<branch>`).
pub fn commitish(branch: &str) -> String {
    format!("heads/{}", branch)
}

/// Where a release is cut from: the base branch of the release pull request
/// and the commit-ish handed to the notes and release endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTarget {
    /// Bare branch name
    pub branch: String,
    /// Value passed as `target_commitish`
    pub commitish: String,
}

impl ReleaseTarget {
    /// Resolve the target for a tag.
    ///
    /// An explicit branch is used verbatim for both fields. Otherwise the
    /// branch comes from the major-version mapping and the commit-ish is its
    /// qualified ref.
    pub fn resolve(tag: &VersionTag, explicit_branch: Option<&str>) -> Result<Self, VersionError> {
        if let Some(branch) = explicit_branch {
            return Ok(Self {
                branch: branch.to_string(),
                commitish: branch.to_string(),
            });
        }

        let branch = target_branch(tag)?;
        Ok(Self {
            branch: branch.to_string(),
            commitish: commitish(branch),
        })
    }
}
