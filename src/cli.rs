use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::config::Config;
use crate::gitlab::GitLabClient;

/// Positional arguments shared by both helpers.
///
/// Each one falls back to an environment variable. Inside a pipeline GitLab
/// exports the first two; exporting `GITLAB_TOKEN` as well lets both helpers
/// run with no arguments. Positionals are taken in order, so a lone argument
/// is always the API URL, never the token.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// GitLab API base URL (e.g., https://gitlab.com/api/v4)
    #[arg(env = "CI_API_V4_URL")]
    pub api_url: String,

    /// Project id or full path (e.g., group/project)
    #[arg(env = "CI_PROJECT_ID")]
    pub project_id: String,

    /// Access token with api scope, sent as PRIVATE-TOKEN
    #[arg(env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Configuration file (defaults to ./glbuild.{toml,json,yaml,yml} if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ProjectArgs {
    /// Loads the configuration and builds a client for the selected project.
    pub fn connect(&self) -> Result<(GitLabClient, Config)> {
        let config = Config::load(self.config.as_deref())?;

        info!("Using GitLab project {} at {}", self.project_id, self.api_url);
        let client = GitLabClient::new(&self.api_url, &self.project_id, &self.token)
            .context("Failed to set up GitLab client")?;

        Ok((client, config))
    }
}
