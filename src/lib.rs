//! # Release Orchestrator
//!
//! Release notes, release pull requests and GitHub releases for repositories
//! that maintain one release branch per major version.
//!
//! All substantive work (diffing commits, summarizing changes, tagging) is
//! done by the GitHub release API. This crate decides which branch a tag is
//! released from, which earlier release it is compared against, and removes
//! release pull request titles from the generated notes.
//!
//! ## Usage
//!
//! ```bash
//! release_orchestrator notes --tag v6.2.0          # print cleaned notes
//! release_orchestrator pr --tag v6.2.0             # open release/v6.2.0 -> main
//! release_orchestrator release --tag v5.9.1        # publish from v5.x
//! release_orchestrator previous-tag --tag v6.2.0   # print v6.1.x
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod notes;
pub mod source;
pub mod version;

pub use config::EnvConfig;
pub use error::{CliError, GitHubError, ReleaseError, Result, VersionError};
pub use github::{GitHubClient, ReleaseOrchestrator, ReleasePlatform};
pub use source::RepositoryContext;
pub use version::{ReleaseTarget, VersionTag};
