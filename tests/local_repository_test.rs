// tests/local_repository_test.rs
use git2::Repository;
use new_release_version::git::{LocalTagSource, TagSource};
use new_release_version::{ResolutionConfig, SemanticVersion, VersionResolver};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Helper function to setup a temporary git repo with one commit and the given tags
fn setup_test_repo(tags: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    let content_path = temp_dir.path().join("README.md");
    fs::write(&content_path, b"Initial content\n").expect("Could not write initial file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new("README.md"))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let signature = repo.signature().expect("Could not get sig");

    let commit_id = repo
        .commit(
            Some("HEAD"),
            &signature,
            &signature,
            "Initial commit",
            &tree,
            &[],
        )
        .expect("Could not create commit");
    let commit = repo
        .find_object(commit_id, None)
        .expect("Could not find commit");

    for tag in tags {
        repo.tag_lightweight(tag, &commit, false)
            .expect("Could not create tag");
    }

    temp_dir
}

#[test]
fn test_local_tag_source_lists_all_tags() {
    let repo_dir = setup_test_repo(&["v1.0.0", "v1.0.1", "docs-snapshot"]);
    let source = LocalTagSource::new(repo_dir.path(), false);

    let mut tags = source.list_tags().expect("Should list tags");
    tags.sort();
    assert_eq!(tags, vec!["docs-snapshot", "v1.0.0", "v1.0.1"]);
}

#[test]
fn test_local_tag_source_discovers_from_subdirectory() {
    let repo_dir = setup_test_repo(&["v3.2.1"]);
    let nested = repo_dir.path().join("services").join("api");
    fs::create_dir_all(&nested).expect("Could not create nested dir");

    let source = LocalTagSource::new(&nested, false);
    assert_eq!(source.list_tags().unwrap(), vec!["v3.2.1"]);
}

#[test]
fn test_local_tag_source_fetch_failure_is_not_fatal() {
    let repo_dir = setup_test_repo(&["v0.4.0"]);
    {
        let repo = Repository::open(repo_dir.path()).unwrap();
        repo.remote("origin", "/nonexistent/path/to/remote.git")
            .expect("Could not add remote");
    }

    let source = LocalTagSource::new(repo_dir.path(), true);
    assert_eq!(source.list_tags().unwrap(), vec!["v0.4.0"]);
}

#[test]
fn test_local_tag_source_fetches_tags_from_remote() {
    let upstream = setup_test_repo(&["v5.0.0", "v5.0.1"]);
    let clone_dir = TempDir::new().expect("Could not create temp dir");
    {
        let repo = Repository::init(clone_dir.path()).unwrap();
        let url = upstream.path().to_str().expect("temp path is utf-8").to_string();
        repo.remote("origin", &url).expect("Could not add remote");
    }

    let without_fetch = LocalTagSource::new(clone_dir.path(), false);
    assert!(without_fetch.list_tags().unwrap().is_empty());

    let with_fetch = LocalTagSource::new(clone_dir.path(), true);
    let mut tags = with_fetch.list_tags().unwrap();
    tags.sort();
    assert_eq!(tags, vec!["v5.0.0", "v5.0.1"]);
}

#[test]
fn test_resolve_from_local_repository_and_manifest() {
    let repo_dir = setup_test_repo(&["v1.2.2", "v1.2.3", "v1.3.0"]);
    fs::write(
        repo_dir.path().join("package.json"),
        r#"{"name": "demo", "version": "1.2.0"}"#,
    )
    .unwrap();

    let source = LocalTagSource::new(repo_dir.path(), false);

    let resolver = VersionResolver::new(ResolutionConfig {
        directory: repo_dir.path().to_path_buf(),
        ..Default::default()
    });
    assert_eq!(
        resolver.new_version(&source).unwrap(),
        SemanticVersion::new(1, 3, 1)
    );

    let same_release = VersionResolver::new(ResolutionConfig {
        directory: repo_dir.path().to_path_buf(),
        same_release: true,
        ..Default::default()
    });
    assert_eq!(
        same_release.new_version(&source).unwrap(),
        SemanticVersion::new(1, 2, 4)
    );
}

#[test]
fn test_resolve_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    let source = LocalTagSource::new(dir.path(), false);
    let resolver = VersionResolver::new(ResolutionConfig {
        directory: dir.path().to_path_buf(),
        ..Default::default()
    });

    let err = resolver.new_version(&source).unwrap_err();
    assert!(err.is_tag_source_failure());
}
