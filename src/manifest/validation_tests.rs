#[cfg(test)]
mod tests {

    use crate::manifest::{
        CaptureField, ChecksumPolicy, IssueKind, LivecheckConfig, ReleaseManifest, Severity,
        error_count, validate,
    };

    fn example_app() -> ReleaseManifest {
        ReleaseManifest {
            name: "ExampleApp".to_string(),
            version: "latest".to_string(),
            download_url_template: "https://example.com/{version}/App.dmg".to_string(),
            checksum_policy: Some(ChecksumPolicy::NoCheck),
            ..Default::default()
        }
    }

    fn fields(manifest: &ReleaseManifest) -> Vec<String> {
        validate(manifest).into_iter().map(|issue| issue.field).collect()
    }

    #[test]
    fn test_example_app_is_valid() {
        assert!(validate(&example_app()).is_empty());
    }

    #[test]
    fn test_full_manifest_is_valid() {
        let manifest = ReleaseManifest {
            homepage: Some("https://github.com/PaoloFrigo/my-amp-switcher".to_string()),
            description: Some("Control any device through MIDI messages".to_string()),
            app: Some("ExampleApp.app".to_string()),
            livecheck: Some(
                LivecheckConfig::new(
                    "https://api.github.com/repos/o/r/releases/latest",
                    r#""tag_name":\s*"(.*?)".*?"browser_download_url":\s*"(.*?)""#,
                )
                .with_captures(vec![CaptureField::Tag, CaptureField::AssetUrl]),
            ),
            ..example_app()
        };
        assert!(manifest.validate().is_empty());
    }

    #[test]
    fn test_each_missing_field_is_named() {
        let manifest = ReleaseManifest::default();
        let issues = validate(&manifest);

        assert_eq!(fields(&manifest), vec!["name", "version", "url", "sha256"]);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
        assert!(issues.iter().all(|i| i.kind == IssueKind::MissingField));
        assert_eq!(error_count(&issues), 4);
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let manifest = ReleaseManifest {
            name: "   ".to_string(),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "name");
        assert_eq!(issues[0].to_string(), "name: missing required field 'name'");
    }

    #[test]
    fn test_empty_digest_counts_as_missing() {
        let manifest = ReleaseManifest {
            checksum_policy: Some(ChecksumPolicy::Sha256(String::new())),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingField);
    }

    #[test]
    fn test_malformed_digest() {
        let manifest = ReleaseManifest {
            version: "1.0.0".to_string(),
            checksum_policy: Some(ChecksumPolicy::Sha256("abc123".to_string())),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InvalidChecksum);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_pinned_digest_is_valid() {
        let manifest = ReleaseManifest {
            version: "1.4.2".to_string(),
            checksum_policy: Some(ChecksumPolicy::Sha256(
                "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f".to_string(),
            )),
            ..example_app()
        };
        assert!(validate(&manifest).is_empty());

        let mixed_case = ReleaseManifest {
            checksum_policy: Some(ChecksumPolicy::Sha256(
                "DFFD6021bb2bd5b0AF676290809ec3a53191dd81C7F70A4B28688a362182986f".to_string(),
            )),
            ..manifest
        };
        assert!(validate(&mixed_case).is_empty());
    }

    #[test]
    fn test_latest_with_pinned_digest_is_valid() {
        let manifest = ReleaseManifest {
            checksum_policy: Some(ChecksumPolicy::Sha256("a".repeat(64))),
            ..example_app()
        };
        assert!(validate(&manifest).is_empty());
    }

    #[test]
    fn test_non_semver_version_warns() {
        let manifest = ReleaseManifest {
            version: "nightly".to_string(),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InvalidVersion);
        assert_eq!(issues[0].severity, Severity::Warning);

        let prefixed = ReleaseManifest {
            version: "v1.4.2".to_string(),
            ..example_app()
        };
        assert!(validate(&prefixed).is_empty());
    }

    #[test]
    fn test_bad_urls() {
        let manifest = ReleaseManifest {
            download_url_template: "ftp://example.com/App.dmg".to_string(),
            homepage: Some("not a url".to_string()),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(fields(&manifest), vec!["url", "homepage"]);
        assert!(issues.iter().all(|i| i.kind == IssueKind::InvalidUrl && i.is_error()));
    }

    #[test]
    fn test_http_urls_are_valid() {
        let manifest = ReleaseManifest {
            download_url_template: "http://example.com/App.dmg".to_string(),
            homepage: Some("http://example.com".to_string()),
            ..example_app()
        };
        assert!(validate(&manifest).is_empty());
    }

    #[test]
    fn test_non_web_schemes_are_errors() {
        for url in ["ftp://example.com/App.dmg", "file:///tmp/App.dmg", "mailto:x@example.com"] {
            let manifest = ReleaseManifest {
                download_url_template: url.to_string(),
                ..example_app()
            };
            let issues = validate(&manifest);
            assert_eq!(issues.len(), 1, "{url}");
            assert_eq!(issues[0].kind, IssueKind::InvalidUrl);
            assert!(issues[0].is_error());
        }
    }

    #[test]
    fn test_template_error_reported_on_url() {
        let manifest = ReleaseManifest {
            download_url_template: "https://example.com/{tag}/App.dmg".to_string(),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "url");
        assert_eq!(issues[0].kind, IssueKind::Template);
    }

    #[test]
    fn test_zero_group_pattern_is_reported() {
        let manifest = ReleaseManifest {
            livecheck: Some(LivecheckConfig::new(
                "https://api.github.com/repos/o/r/releases",
                r#""tag_name":\s*"v\d+""#,
            )),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "livecheck.regex");
        assert_eq!(issues[0].kind, IssueKind::PatternCompile);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_uncompilable_pattern_is_reported() {
        let manifest = ReleaseManifest {
            livecheck: Some(LivecheckConfig::new("https://example.com/releases", "(unclosed")),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::PatternCompile);
    }

    #[test]
    fn test_capture_mismatch_reported_on_captures() {
        let manifest = ReleaseManifest {
            livecheck: Some(LivecheckConfig::new("https://example.com/releases", "(v.*) (.*)")),
            ..example_app()
        };
        assert_eq!(fields(&manifest), vec!["livecheck.captures"]);
    }

    #[test]
    fn test_livecheck_missing_url_and_regex() {
        let manifest = ReleaseManifest {
            livecheck: Some(LivecheckConfig::new("", "")),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(fields(&manifest), vec!["livecheck.url", "livecheck.regex"]);
        assert!(issues.iter().all(|i| i.kind == IssueKind::MissingField));
    }

    #[test]
    fn test_validation_does_not_stop_at_first_issue() {
        let manifest = ReleaseManifest {
            name: String::new(),
            download_url_template: "mailto:x@example.com".to_string(),
            checksum_policy: Some(ChecksumPolicy::Sha256("zz".to_string())),
            livecheck: Some(LivecheckConfig::new("https://example.com", "no groups")),
            ..example_app()
        };
        let issues = validate(&manifest);
        assert_eq!(error_count(&issues), 4);
    }
}
