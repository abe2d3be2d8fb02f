//! Error types for release_orchestrator operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use thiserror::Error;

/// Result type alias for release_orchestrator operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all release_orchestrator operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Version tag errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// GitHub API errors
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Version tag errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// Tag prefix has no branch mapping
    #[error("Unsupported version '{tag}': no release branch is mapped to this major version")]
    UnsupportedVersion {
        /// Offending tag
        tag: String,
    },

    /// Tag has no `.` separator, so no major prefix can be extracted
    #[error("Version '{tag}' has no major version prefix (expected something like 'v6.2.0')")]
    MissingMajorPrefix {
        /// Offending tag
        tag: String,
    },
}

/// GitHub API errors
#[derive(Error, Debug)]
pub enum GitHubError {
    /// No earlier release shares the target's major prefix
    #[error("No previous release found with a tag starting with '{prefix}'")]
    NoMatchingRelease {
        /// Major prefix that was searched for
        prefix: String,
    },

    /// Transport-level failure
    #[error("Request '{operation}' failed: {source}")]
    Request {
        /// API operation that failed
        operation: String,
        /// Underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// Success response whose body did not match the expected shape
    #[error("Response to '{operation}' could not be decoded: {source}")]
    Decode {
        /// API operation that failed
        operation: String,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status from the API
    #[error("Request '{operation}' returned {status}: {message}")]
    Api {
        /// API operation that failed
        operation: String,
        /// HTTP status code
        status: u16,
        /// Message reported by the API
        message: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Version(VersionError::UnsupportedVersion { tag }) => vec![
                format!("Check that '{}' starts with a supported major version (v6. or v5.)", tag),
                "Pass --branch <name> to target a branch explicitly".to_string(),
            ],
            ReleaseError::Version(VersionError::MissingMajorPrefix { .. }) => {
                vec!["Use a full version tag such as v6.2.0".to_string()]
            }
            ReleaseError::GitHub(GitHubError::NoMatchingRelease { prefix }) => vec![
                format!("Publish or pre-seed at least one release tagged '{}*'", prefix),
                "Check that the repository passed with --repo is correct".to_string(),
            ],
            ReleaseError::GitHub(GitHubError::Api { status: 401, .. })
            | ReleaseError::GitHub(GitHubError::Api { status: 403, .. }) => vec![
                "Verify GH_TOKEN or GITHUB_TOKEN is set and valid".to_string(),
                "Ensure the token has contents:write and pull-requests:write permissions"
                    .to_string(),
            ],
            ReleaseError::GitHub(GitHubError::Api { status: 422, .. }) => vec![
                "The release, tag or pull request may already exist".to_string(),
                "Check that the release branch has been pushed".to_string(),
            ],
            ReleaseError::Cli(CliError::MissingArgument { argument }) => {
                vec![format!("Provide {}", argument)]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
