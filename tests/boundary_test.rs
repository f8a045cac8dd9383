use new_release_version::boundary::BoundaryWarning;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_unparsable_tag_display() {
    let warning = BoundaryWarning::UnparsableTag {
        tag: "release-candidate".to_string(),
        reason: "not a release version".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("release-candidate"),
        "Message should contain tag 'release-candidate', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("not a release version"),
        "Message should contain the reason, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_manifest_without_version_display() {
    let warning = BoundaryWarning::ManifestWithoutVersion {
        file: "package.json".to_string(),
        reason: "Not found: No version found".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.starts_with("No version in 'package.json'"),
        "Unexpected message: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_unparsable_manifest_version_display() {
    let warning = BoundaryWarning::UnparsableManifestVersion {
        file: "setup.cfg".to_string(),
        version: "1.2.3.4".to_string(),
        reason: "too many components".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("'1.2.3.4'"), "got: {}", display_msg);
    assert!(display_msg.contains("'setup.cfg'"), "got: {}", display_msg);
}

#[test]
fn test_boundary_warning_no_manifest_display() {
    let warning = BoundaryWarning::NoManifestFound {
        directory: "/srv/project".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("/srv/project"), "got: {}", display_msg);
    assert!(display_msg.contains("0.0.0"), "got: {}", display_msg);
}

#[test]
fn test_boundary_warning_fetch_failed_display() {
    let warning = BoundaryWarning::FetchFailed {
        remote: "origin".to_string(),
        reason: "authentication required".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Could not fetch tags from remote 'origin'"),
        "got: {}",
        display_msg
    );
    assert!(display_msg.ends_with("Using local tags."), "got: {}", display_msg);
}

#[test]
fn test_boundary_warning_base_ahead_display() {
    let warning = BoundaryWarning::BaseAheadOfTags {
        base: "100.0.0".to_string(),
        latest: "99.0.17".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "Base version 100.0.0 is ahead of latest tag 99.0.17, using base version"
    );
}

#[test]
fn test_boundary_warning_log_does_not_panic() {
    let warnings = vec![
        BoundaryWarning::NoManifestFound {
            directory: ".".to_string(),
        },
        BoundaryWarning::FetchFailed {
            remote: "origin".to_string(),
            reason: "timeout".to_string(),
        },
    ];

    for warning in warnings {
        warning.log();
    }
}
