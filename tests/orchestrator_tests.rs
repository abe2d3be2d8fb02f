#[cfg(test)]
mod tests {
    use release_orchestrator::error::{GitHubError, ReleaseError, Result, VersionError};
    use release_orchestrator::github::{
        GenerateNotesRequest, GeneratedNotes, NewPullRequest, NewRelease, PullRequest,
        RELEASES_PER_PAGE, Release, ReleaseOrchestrator, ReleasePlatform,
    };
    use release_orchestrator::{RepositoryContext, VersionTag};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ListReleases { page: u32 },
        GenerateNotes(GenerateNotesRequest),
        CreatePullRequest(NewPullRequest),
        CreateRelease(NewRelease),
        DeleteRef(String),
    }

    #[derive(Default)]
    struct FakePlatform {
        releases: Vec<Release>,
        notes_body: String,
        fail_create_release: bool,
        fail_delete_ref: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl FakePlatform {
        fn with_tags(tags: &[&str]) -> Self {
            Self {
                releases: tags.iter().map(|tag| release(tag)).collect(),
                notes_body: "## What's Changed\n\
                             * Add widgets by @dev in #10\n\
                             * [Release] v6.1.0 by @bot in #9\n\
                             \n\
                             **Full Changelog**: compare"
                    .to_string(),
                ..Default::default()
            }
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn release(tag: &str) -> Release {
        Release {
            tag_name: tag.to_string(),
            html_url: Some(format!("https://github.com/acme/widgets/releases/tag/{tag}")),
            draft: false,
            prerelease: false,
        }
    }

    fn api_error(operation: &str) -> ReleaseError {
        GitHubError::Api {
            operation: operation.to_string(),
            status: 422,
            message: "Validation Failed".to_string(),
        }
        .into()
    }

    impl ReleasePlatform for FakePlatform {
        async fn list_releases(
            &self,
            _repository: &RepositoryContext,
            page: u32,
            per_page: u32,
        ) -> Result<Vec<Release>> {
            self.record(Call::ListReleases { page });
            // The API serves at most RELEASES_PER_PAGE entries per page.
            let per_page = per_page.min(RELEASES_PER_PAGE);
            Ok(self
                .releases
                .iter()
                .skip(((page - 1) * per_page) as usize)
                .take(per_page as usize)
                .cloned()
                .collect())
        }

        async fn generate_release_notes(
            &self,
            _repository: &RepositoryContext,
            request: &GenerateNotesRequest,
        ) -> Result<GeneratedNotes> {
            self.record(Call::GenerateNotes(request.clone()));
            Ok(GeneratedNotes {
                name: request.tag_name.clone(),
                body: self.notes_body.clone(),
            })
        }

        async fn create_pull_request(
            &self,
            _repository: &RepositoryContext,
            request: &NewPullRequest,
        ) -> Result<PullRequest> {
            self.record(Call::CreatePullRequest(request.clone()));
            Ok(PullRequest {
                number: 42,
                html_url: "https://github.com/acme/widgets/pull/42".to_string(),
            })
        }

        async fn create_release(
            &self,
            _repository: &RepositoryContext,
            request: &NewRelease,
        ) -> Result<Release> {
            self.record(Call::CreateRelease(request.clone()));
            if self.fail_create_release {
                return Err(api_error("create_release"));
            }
            Ok(release(&request.tag_name))
        }

        async fn delete_ref(&self, _repository: &RepositoryContext, git_ref: &str) -> Result<()> {
            self.record(Call::DeleteRef(git_ref.to_string()));
            if self.fail_delete_ref {
                return Err(api_error("delete_ref"));
            }
            Ok(())
        }
    }

    fn orchestrator(platform: FakePlatform) -> ReleaseOrchestrator<FakePlatform> {
        ReleaseOrchestrator::new(platform, RepositoryContext::new("acme", "widgets"))
    }

    fn tag(raw: &str) -> VersionTag {
        VersionTag::parse(raw).unwrap()
    }

    const CLEANED_NOTES: &str = "## What's Changed\n\
                                 * Add widgets by @dev in #10\n\
                                 \n\
                                 **Full Changelog**: compare";

    #[tokio::test]
    async fn test_previous_tag_matches_major_line() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&["v6.1.0", "v5.9.0"]));
        let previous = orchestrator.previous_release_tag(&tag("v6.2.0")).await.unwrap();
        assert_eq!(previous, "v6.1.0");
    }

    #[tokio::test]
    async fn test_previous_tag_skips_newer_releases_of_other_lines() {
        let orchestrator =
            orchestrator(FakePlatform::with_tags(&["v5.9.1", "v60.0.0", "v6.1.0", "v6.0.0"]));
        assert_eq!(
            orchestrator.previous_release_tag(&tag("v6.2.0")).await.unwrap(),
            "v6.1.0"
        );
        assert_eq!(
            orchestrator.previous_release_tag(&tag("v5.10.0")).await.unwrap(),
            "v5.9.1"
        );
        assert!(
            orchestrator
                .platform()
                .calls()
                .iter()
                .all(|call| matches!(call, Call::ListReleases { .. }))
        );
    }

    #[tokio::test]
    async fn test_previous_tag_without_match_fails() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&["v6.1.0", "v5.9.0"]));
        match orchestrator.previous_release_tag(&tag("v7.0.0")).await {
            Err(ReleaseError::GitHub(GitHubError::NoMatchingRelease { prefix })) => {
                assert_eq!(prefix, "v7.")
            }
            other => panic!("expected NoMatchingRelease, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_previous_tag_follows_pages_until_match() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&[
            "v5.3.0", "v5.2.0", "v5.1.0", "v6.0.0", "v6.0.0-rc.1",
        ]))
        .with_page_size(2);

        let previous = orchestrator.previous_release_tag(&tag("v6.1.0")).await.unwrap();
        assert_eq!(previous, "v6.0.0");
        assert_eq!(
            orchestrator.platform().calls(),
            vec![Call::ListReleases { page: 1 }, Call::ListReleases { page: 2 }]
        );
    }

    #[tokio::test]
    async fn test_page_size_is_capped_at_api_maximum() {
        let mut tags: Vec<String> = (0..100).map(|n| format!("v5.{n}.0")).collect();
        tags.push("v6.0.0".to_string());
        let tags: Vec<&str> = tags.iter().map(String::as_str).collect();

        let orchestrator = orchestrator(FakePlatform::with_tags(&tags)).with_page_size(250);

        let previous = orchestrator.previous_release_tag(&tag("v6.1.0")).await.unwrap();
        assert_eq!(previous, "v6.0.0");
        assert_eq!(
            orchestrator.platform().calls(),
            vec![Call::ListReleases { page: 1 }, Call::ListReleases { page: 2 }]
        );
    }

    #[tokio::test]
    async fn test_previous_tag_stops_at_short_page() {
        let platform = FakePlatform::with_tags(&["v5.3.0", "v5.2.0", "v5.1.0"]);
        let orchestrator = orchestrator(platform).with_page_size(2);

        assert!(orchestrator.previous_release_tag(&tag("v6.0.0")).await.is_err());
        assert_eq!(
            orchestrator.platform().calls(),
            vec![Call::ListReleases { page: 1 }, Call::ListReleases { page: 2 }]
        );
    }

    #[tokio::test]
    async fn test_generate_pr_opens_release_branch_into_main() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&["v6.1.0", "v5.9.0"]));
        let pull_request = orchestrator.generate_pr(&tag("v6.2.0"), None).await.unwrap();
        assert_eq!(pull_request.number, 42);

        assert_eq!(
            orchestrator.platform().calls(),
            vec![
                Call::ListReleases { page: 1 },
                Call::GenerateNotes(GenerateNotesRequest {
                    tag_name: "v6.2.0".to_string(),
                    target_commitish: "heads/main".to_string(),
                    previous_tag_name: "v6.1.0".to_string(),
                }),
                Call::CreatePullRequest(NewPullRequest {
                    head: "release/v6.2.0".to_string(),
                    base: "main".to_string(),
                    title: "[Release] v6.2.0".to_string(),
                    body: CLEANED_NOTES.to_string(),
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_generate_pr_for_v5_targets_maintenance_branch() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&["v6.1.0", "v5.9.0"]));
        orchestrator.generate_pr(&tag("v5.9.1"), None).await.unwrap();

        let calls = orchestrator.platform().calls();
        assert!(matches!(
            &calls[1],
            Call::GenerateNotes(request)
                if request.target_commitish == "heads/v5.x" && request.previous_tag_name == "v5.9.0"
        ));
        assert!(matches!(
            &calls[2],
            Call::CreatePullRequest(request) if request.base == "v5.x"
        ));
    }

    #[tokio::test]
    async fn test_unsupported_tag_makes_no_calls() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&["v7.0.0"]));

        let pr = orchestrator.generate_pr(&tag("v7.1.0"), None).await;
        match pr {
            Err(ReleaseError::Version(VersionError::UnsupportedVersion { tag })) => {
                assert_eq!(tag, "v7.1.0")
            }
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }

        let release = orchestrator.release(&tag("v7.1.0"), None).await;
        assert!(matches!(
            release,
            Err(ReleaseError::Version(VersionError::UnsupportedVersion { .. }))
        ));

        assert!(orchestrator.platform().calls().is_empty());
    }

    #[tokio::test]
    async fn test_release_publishes_and_deletes_branch() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&["v6.1.0", "v5.9.0"]));
        let outcome = orchestrator.release(&tag("v6.2.0"), None).await.unwrap();

        assert_eq!(outcome.release.tag_name, "v6.2.0");
        assert!(outcome.branch_deleted);

        let calls = orchestrator.platform().calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(
            calls[2],
            Call::CreateRelease(NewRelease {
                tag_name: "v6.2.0".to_string(),
                target_commitish: "heads/main".to_string(),
                name: "v6.2.0".to_string(),
                body: CLEANED_NOTES.to_string(),
                draft: false,
                prerelease: false,
                generate_release_notes: false,
            })
        );
        assert_eq!(calls[3], Call::DeleteRef("heads/release/v6.2.0".to_string()));
    }

    #[tokio::test]
    async fn test_release_prerelease_tag_is_still_published() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&["v6.1.0"]));
        orchestrator.release(&tag("v6.2.0-rc.1"), None).await.unwrap();

        let calls = orchestrator.platform().calls();
        assert!(matches!(
            &calls[2],
            Call::CreateRelease(request)
                if !request.draft && !request.prerelease && !request.generate_release_notes
        ));
    }

    #[tokio::test]
    async fn test_release_survives_branch_deletion_failure() {
        let platform = FakePlatform {
            fail_delete_ref: true,
            ..FakePlatform::with_tags(&["v6.1.0"])
        };
        let orchestrator = orchestrator(platform);

        let outcome = orchestrator.release(&tag("v6.2.0"), None).await.unwrap();
        assert!(!outcome.branch_deleted);
        assert_eq!(
            orchestrator.platform().calls().last(),
            Some(&Call::DeleteRef("heads/release/v6.2.0".to_string()))
        );
    }

    #[tokio::test]
    async fn test_release_failure_propagates_without_cleanup() {
        let platform = FakePlatform {
            fail_create_release: true,
            ..FakePlatform::with_tags(&["v6.1.0"])
        };
        let orchestrator = orchestrator(platform);

        let result = orchestrator.release(&tag("v6.2.0"), None).await;
        assert!(matches!(
            result,
            Err(ReleaseError::GitHub(GitHubError::Api { status: 422, .. }))
        ));
        assert!(
            !orchestrator
                .platform()
                .calls()
                .iter()
                .any(|call| matches!(call, Call::DeleteRef(_)))
        );
    }

    #[tokio::test]
    async fn test_explicit_branch_is_used_verbatim() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&["v6.1.0"]));
        orchestrator.release(&tag("v6.2.0"), Some("main")).await.unwrap();

        let calls = orchestrator.platform().calls();
        assert!(matches!(
            &calls[1],
            Call::GenerateNotes(request) if request.target_commitish == "main"
        ));
        assert!(matches!(
            &calls[2],
            Call::CreateRelease(request) if request.target_commitish == "main"
        ));
    }

    #[tokio::test]
    async fn test_missing_previous_release_aborts_before_mutation() {
        let orchestrator = orchestrator(FakePlatform::with_tags(&["v5.9.0"]));
        assert!(orchestrator.generate_pr(&tag("v6.0.0"), None).await.is_err());
        assert_eq!(
            orchestrator.platform().calls(),
            vec![Call::ListReleases { page: 1 }]
        );
    }
}
