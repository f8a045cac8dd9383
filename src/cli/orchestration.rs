//! Resolution workflow behind the command line
//!
//! Merges command line arguments with the configuration file, picks the tag
//! source, and runs the resolver. Keeping this out of `main.rs` lets the
//! workflow be driven programmatically without a process boundary.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::Args;
use crate::config::{self, Config};
use crate::domain::SemanticVersion;
use crate::git::{GitHubTagSource, LocalTagSource, TagSource};
use crate::manifest::ManifestRules;
use crate::resolver::{ResolutionConfig, VersionResolver};
use crate::ui;

/// Where release tags are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSourceSelection {
    Local {
        directory: PathBuf,
        fetch: bool,
        remote: String,
    },
    GitHub {
        owner: String,
        repository: String,
        token_env: String,
    },
}

impl TagSourceSelection {
    /// Build the selected tag source
    pub fn build(&self) -> Box<dyn TagSource> {
        match self {
            TagSourceSelection::Local {
                directory,
                fetch,
                remote,
            } => Box::new(LocalTagSource::new(directory, *fetch).with_remote(remote.clone())),
            TagSourceSelection::GitHub {
                owner,
                repository,
                token_env,
            } => Box::new(GitHubTagSource::from_env(
                owner.clone(),
                repository.clone(),
                token_env,
            )),
        }
    }
}

/// Everything needed for one resolution run
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub resolution: ResolutionConfig,
    pub tag_source: TagSourceSelection,
    pub rules: ManifestRules,
}

/// Combine arguments and configuration; arguments take precedence.
pub fn plan(args: &Args, config: &Config) -> crate::Result<Invocation> {
    let resolution = ResolutionConfig {
        directory: args.directory.clone(),
        base_version: args.base_version.clone(),
        same_release: args.same_release || config.resolution.same_release,
        minor: args.minor || config.resolution.minor,
        debug: args.debug,
    };

    let owner = args.gh_owner.clone().or_else(|| config.github.owner.clone());
    let repository = args
        .gh_repository
        .clone()
        .or_else(|| config.github.repository.clone());

    let tag_source = match (owner, repository) {
        (Some(owner), Some(repository)) => TagSourceSelection::GitHub {
            owner,
            repository,
            token_env: config.github.token_env.clone(),
        },
        (owner, repository) => {
            if owner.is_some() || repository.is_some() {
                tracing::warn!(
                    "both a GitHub owner and repository are needed, using the local repository"
                );
            }
            TagSourceSelection::Local {
                directory: args.directory.clone(),
                fetch: args.git_fetch.unwrap_or(config.git.fetch),
                remote: config.git.remote.clone(),
            }
        }
    };

    Ok(Invocation {
        resolution,
        tag_source,
        rules: config.manifests.rules()?,
    })
}

/// Resolve the next release version for the given arguments
pub fn run(args: &Args) -> Result<SemanticVersion> {
    let config = config::load_config(args.config.as_deref(), &args.directory)
        .context("failed to load configuration")?;
    let invocation = plan(args, &config)?;
    if invocation.resolution.debug {
        ui::log_build_info();
    }
    tracing::debug!("resolving with {:?}", invocation);

    let source = invocation.tag_source.build();
    let resolver = VersionResolver::new(invocation.resolution).with_rules(invocation.rules);

    resolver
        .new_version(source.as_ref())
        .with_context(|| format!("resolving against {}", source.describe()))
}
