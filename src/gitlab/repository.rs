use log::debug;

use super::client::GitLabClient;
use super::types::{Commit, Job};
use crate::error::Result;

impl GitLabClient {
    /// Fetches the first page of repository commits, newest first.
    ///
    /// Page size and ordering are left to the API defaults.
    pub async fn list_commits(&self) -> Result<Vec<Commit>> {
        let url = self.endpoint(&["repository", "commits"])?;
        debug!("GET {url}");

        Ok(self.send(self.client().get(url)).await?.json().await?)
    }

    /// Fetches the first page of project jobs matching `scope`, newest first.
    pub async fn list_jobs(&self, scope: &str, per_page: u32) -> Result<Vec<Job>> {
        let url = self.endpoint(&["jobs"])?;
        debug!("GET {url}?scope={scope}&per_page={per_page}");

        let per_page = per_page.to_string();
        let request = self
            .client()
            .get(url)
            .query(&[("scope", scope), ("per_page", per_page.as_str())]);
        Ok(self.send(request).await?.json().await?)
    }
}
