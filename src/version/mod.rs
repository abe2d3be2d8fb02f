//! Version tags and the release branches they target.
//!
//! A version tag such as `v6.2.0` identifies the release being produced. Its
//! major prefix (`v6.`) selects both the branch the release is cut from and
//! the line of earlier releases it is compared against.

mod branch;

pub use branch::{ReleaseTarget, commitish, target_branch};

use crate::error::VersionError;
use std::fmt;
use std::str::FromStr;

/// Prefix of every release pull request title, followed by the tag.
pub const RELEASE_TITLE_PREFIX: &str = "[Release]";

/// Validated release tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag(String);

impl VersionTag {
    /// Validate a raw tag string.
    ///
    /// The tag must contain a `.` so that a major prefix can be taken from
    /// it. Semantic version syntax is not required; a tag that does not parse
    /// as semver is accepted with a warning.
    pub fn parse(tag: &str) -> Result<Self, VersionError> {
        if !tag.contains('.') {
            return Err(VersionError::MissingMajorPrefix {
                tag: tag.to_string(),
            });
        }

        let parsed = Self(tag.to_string());
        if parsed.semver().is_none() {
            log::warn!("Tag '{}' is not a semantic version", tag);
        }
        Ok(parsed)
    }

    /// Raw tag text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text up to and including the first `.` (`v6.2.0` -> `v6.`).
    pub fn major_prefix(&self) -> &str {
        match self.0.find('.') {
            Some(idx) => &self.0[..=idx],
            None => &self.0,
        }
    }

    /// Semantic version after stripping a leading `v`, if the tag is one.
    pub fn semver(&self) -> Option<semver::Version> {
        let raw = self.0.strip_prefix('v').unwrap_or(&self.0);
        semver::Version::parse(raw).ok()
    }

    /// Whether another tag belongs to the same major line.
    pub fn shares_major_with(&self, other_tag: &str) -> bool {
        other_tag.starts_with(self.major_prefix())
    }

    /// Head branch of the release pull request (`release/<tag>`).
    pub fn release_branch(&self) -> String {
        format!("release/{}", self.0)
    }

    /// Qualified ref of the release branch, as used by the git refs API.
    pub fn release_branch_ref(&self) -> String {
        commitish(&self.release_branch())
    }

    /// Title of the release pull request (`[Release] <tag>`).
    pub fn pull_request_title(&self) -> String {
        format!("{} {}", RELEASE_TITLE_PREFIX, self.0)
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VersionTag {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
