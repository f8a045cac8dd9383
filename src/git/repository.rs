use crate::boundary::BoundaryWarning;
use crate::error::{ReleaseVersionError, Result};
use crate::git::TagSource;
use git2::Repository;
use std::path::{Path, PathBuf};

/// Tag source reading the tags of a local git repository
///
/// When fetching is enabled, tags are first refreshed from the configured
/// remote. A failed fetch is reported and the local tags are used as-is.
#[derive(Debug, Clone)]
pub struct LocalTagSource {
    directory: PathBuf,
    fetch: bool,
    remote: String,
}

impl LocalTagSource {
    /// Create a tag source for the repository containing `directory`
    pub fn new<P: AsRef<Path>>(directory: P, fetch: bool) -> Self {
        LocalTagSource {
            directory: directory.as_ref().to_path_buf(),
            fetch,
            remote: "origin".to_string(),
        }
    }

    /// Fetch tags from `remote` instead of `origin`
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    fn open(&self) -> Result<Repository> {
        Repository::discover(&self.directory).map_err(|e| {
            ReleaseVersionError::tag_source(format!(
                "Not in a git repository '{}': {}",
                self.directory.display(),
                e
            ))
        })
    }

    /// Fetches all tags from the remote into `refs/tags`.
    ///
    /// Supports SSH authentication via keys from ~/.ssh/ or the SSH agent,
    /// and HTTPS via the configured git credential helper.
    fn fetch_tags(&self, repo: &Repository) -> Result<()> {
        let mut remote = repo.find_remote(&self.remote).map_err(|_| {
            ReleaseVersionError::tag_source(format!("Remote '{}' not found", self.remote))
        })?;
        let git_config = repo.config()?;

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = [
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            if allowed_types.contains(git2::CredentialType::USER_PASS_PLAINTEXT) {
                if let Ok(cred) = git2::Cred::credential_helper(&git_config, url, username_from_url)
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);
        fetch_options.download_tags(git2::AutotagOption::All);

        remote
            .fetch(&["+refs/tags/*:refs/tags/*"], Some(&mut fetch_options), None)
            .map_err(|e| {
                ReleaseVersionError::tag_source(format!(
                    "Failed to fetch from remote '{}': {}",
                    self.remote, e
                ))
            })?;

        Ok(())
    }
}

impl TagSource for LocalTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        tracing::debug!("Get tags from local repo {}", self.directory.display());
        let repo = self.open()?;

        if self.fetch {
            if let Err(e) = self.fetch_tags(&repo) {
                BoundaryWarning::FetchFailed {
                    remote: self.remote.clone(),
                    reason: e.to_string(),
                }
                .log();
            }
        }

        let tags = repo.tag_names(None)?;
        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn describe(&self) -> String {
        format!("local repository {}", self.directory.display())
    }
}
