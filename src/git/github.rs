use crate::error::Result;
use crate::git::TagSource;

/// Environment variable holding the GitHub token by default
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_AUTH_TOKEN";

/// Tag source listing the tags of a GitHub repository
///
/// Requests are authenticated when a token is available, unauthenticated
/// otherwise (subject to GitHub's lower anonymous rate limit).
#[derive(Clone)]
pub struct GitHubTagSource {
    owner: String,
    repository: String,
    token: Option<String>,
}

impl GitHubTagSource {
    /// Create an unauthenticated tag source for `owner/repository`
    pub fn new(owner: impl Into<String>, repository: impl Into<String>) -> Self {
        GitHubTagSource {
            owner: owner.into(),
            repository: repository.into(),
            token: None,
        }
    }

    /// Create a tag source taking its token from the environment variable `token_env`
    pub fn from_env(
        owner: impl Into<String>,
        repository: impl Into<String>,
        token_env: &str,
    ) -> Self {
        let source = GitHubTagSource::new(owner, repository);
        match std::env::var(token_env) {
            Ok(token) if !token.trim().is_empty() => source.with_token(token.trim()),
            _ => {
                tracing::debug!(
                    "no {} env var found so using unauthenticated request",
                    token_env
                );
                source
            }
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    async fn fetch_tags(&self) -> Result<Vec<String>> {
        let mut builder = octocrab::Octocrab::builder();
        if let Some(token) = &self.token {
            builder = builder.personal_token(token.clone());
        }
        let client = builder.build()?;

        let first_page = client
            .repos(&self.owner, &self.repository)
            .list_tags()
            .per_page(100)
            .send()
            .await?;
        let tags = client.all_pages(first_page).await?;

        Ok(tags.into_iter().map(|tag| tag.name).collect())
    }
}

impl TagSource for GitHubTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        tracing::debug!("Get tags from github.com/{}/{}", self.owner, self.repository);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.fetch_tags())
    }

    fn describe(&self) -> String {
        format!("github.com/{}/{}", self.owner, self.repository)
    }
}

impl std::fmt::Debug for GitHubTagSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubTagSource")
            .field("owner", &self.owner)
            .field("repository", &self.repository)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
