//! Command line surface

pub mod orchestration;

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, clap::Parser)]
#[command(
    name = "new-release-version",
    about = "Print the next release version of a project from its version file and git tags"
)]
pub struct Args {
    #[arg(long, default_value = ".", help = "Directory of git project")]
    pub directory: PathBuf,

    #[arg(long, help = "Version to use instead of version file")]
    pub base_version: Option<String>,

    #[arg(
        long,
        help = "Increment the latest base version release ignoring any releases higher than the base version release"
    )]
    pub same_release: bool,

    #[arg(long, help = "Increment minor version instead of patch")]
    pub minor: bool,

    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Fetch tags from remote [default: true]"
    )]
    pub git_fetch: Option<bool>,

    #[arg(
        long,
        help = "GitHub repository owner to fetch tags from instead of the local git repo"
    )]
    pub gh_owner: Option<String>,

    #[arg(
        long,
        help = "GitHub repository to fetch tags from instead of the local git repo"
    )]
    pub gh_repository: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print debug information to stderr")]
    pub debug: bool,

    #[arg(short, long, help = "Print version information")]
    pub version: bool,
}
