//! Post-processing of platform-generated release notes.
//!
//! The generated summary picks up the merge commit of the release pull
//! request itself, whose title (`[Release] v6.2.0`) is noise in the notes.

/// Lines containing this substring are dropped from generated notes.
pub const RELEASE_PR_MARKER: &str = "[Release] v";

/// Remove every line that mentions a release pull request title.
///
/// Lines are split and rejoined on `\n` only, so every other line keeps its
/// exact content (including `\r` and surrounding whitespace) and position.
pub fn strip_release_pr_lines(body: &str) -> String {
    body.split('\n')
        .filter(|line| !line.contains(RELEASE_PR_MARKER))
        .collect::<Vec<_>>()
        .join("\n")
}
