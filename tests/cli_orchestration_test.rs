// tests/cli_orchestration_test.rs
use clap::Parser;
use new_release_version::cli::orchestration::{plan, TagSourceSelection};
use new_release_version::cli::Args;
use new_release_version::config::Config;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["new-release-version"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).expect("Should parse arguments")
}

#[test]
fn test_default_arguments() {
    let args = parse(&[]);
    assert_eq!(args.directory, PathBuf::from("."));
    assert_eq!(args.base_version, None);
    assert!(!args.same_release);
    assert!(!args.minor);
    assert_eq!(args.git_fetch, None);
    assert!(!args.debug);
    assert!(!args.version);
}

#[test]
fn test_git_fetch_flag_forms() {
    assert_eq!(parse(&["--git-fetch"]).git_fetch, Some(true));
    assert_eq!(parse(&["--git-fetch=false"]).git_fetch, Some(false));
    assert_eq!(parse(&["--git-fetch=true"]).git_fetch, Some(true));
}

#[test]
fn test_all_flags() {
    let args = parse(&[
        "--directory",
        "/srv/project",
        "--base-version",
        "1.0",
        "--same-release",
        "--minor",
        "--gh-owner",
        "trendmicro",
        "--gh-repository",
        "new-release-version",
        "--debug",
    ]);
    assert_eq!(args.directory, PathBuf::from("/srv/project"));
    assert_eq!(args.base_version.as_deref(), Some("1.0"));
    assert!(args.same_release);
    assert!(args.minor);
    assert_eq!(args.gh_owner.as_deref(), Some("trendmicro"));
    assert_eq!(args.gh_repository.as_deref(), Some("new-release-version"));
    assert!(args.debug);
}

#[test]
fn test_plan_defaults_to_local_source_with_fetch() {
    let invocation = plan(&parse(&["--directory", "/srv/project"]), &Config::default()).unwrap();

    assert_eq!(
        invocation.tag_source,
        TagSourceSelection::Local {
            directory: PathBuf::from("/srv/project"),
            fetch: true,
            remote: "origin".to_string(),
        }
    );
    assert_eq!(invocation.resolution.directory, PathBuf::from("/srv/project"));
    assert_eq!(invocation.rules.len(), 10);
}

#[test]
fn test_plan_cli_fetch_overrides_config() {
    let mut config = Config::default();
    config.git.fetch = true;

    let invocation = plan(&parse(&["--git-fetch=false"]), &config).unwrap();
    assert!(matches!(
        invocation.tag_source,
        TagSourceSelection::Local { fetch: false, .. }
    ));
}

#[test]
fn test_plan_config_fetch_used_without_flag() {
    let mut config = Config::default();
    config.git.fetch = false;

    let invocation = plan(&parse(&[]), &config).unwrap();
    assert!(matches!(
        invocation.tag_source,
        TagSourceSelection::Local { fetch: false, .. }
    ));
}

#[test]
fn test_plan_selects_github_from_flags() {
    let invocation = plan(
        &parse(&["--gh-owner", "trendmicro", "--gh-repository", "new-release-version"]),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(
        invocation.tag_source,
        TagSourceSelection::GitHub {
            owner: "trendmicro".to_string(),
            repository: "new-release-version".to_string(),
            token_env: "GITHUB_AUTH_TOKEN".to_string(),
        }
    );
}

#[test]
fn test_plan_mixes_flag_and_config_for_github() {
    let mut config = Config::default();
    config.github.owner = Some("config-owner".to_string());
    config.github.repository = Some("config-repo".to_string());

    let invocation = plan(&parse(&["--gh-owner", "flag-owner"]), &config).unwrap();
    assert!(matches!(
        invocation.tag_source,
        TagSourceSelection::GitHub { ref owner, ref repository, .. }
            if owner == "flag-owner" && repository == "config-repo"
    ));
}

#[test]
fn test_plan_owner_without_repository_uses_local_source() {
    let invocation = plan(&parse(&["--gh-owner", "trendmicro"]), &Config::default()).unwrap();
    assert!(matches!(
        invocation.tag_source,
        TagSourceSelection::Local { .. }
    ));
}

#[test]
fn test_plan_config_policy_flags() {
    let mut config = Config::default();
    config.resolution.minor = true;

    let invocation = plan(&parse(&["--same-release"]), &config).unwrap();
    assert!(invocation.resolution.minor);
    assert!(invocation.resolution.same_release);
}

#[test]
fn test_plan_rejects_unknown_manifest_in_config() {
    let mut config = Config::default();
    config.manifests.order = Some(vec!["Cargo.toml".to_string()]);

    assert!(plan(&parse(&[]), &config).is_err());
}
