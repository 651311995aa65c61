use log::debug;
use reqwest::StatusCode;

use super::client::GitLabClient;
use super::types::{Variable, VariablePayload};
use crate::error::Result;

impl GitLabClient {
    /// Fetches a project variable by key.
    ///
    /// Returns `Ok(None)` when GitLab answers 404; every other non-success
    /// status is an error.
    pub async fn get_variable(&self, key: &str) -> Result<Option<Variable>> {
        let url = self.endpoint(&["variables", key])?;
        debug!("GET {url}");

        let response = self.client().get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let variable = Self::error_for_status(response).await?.json().await?;
        Ok(Some(variable))
    }

    pub async fn create_variable(&self, key: &str, value: &str) -> Result<Variable> {
        let url = self.endpoint(&["variables"])?;
        debug!("POST {url}");

        let request = self.client().post(url).json(&VariablePayload { key, value });
        Ok(self.send(request).await?.json().await?)
    }

    pub async fn update_variable(&self, key: &str, value: &str) -> Result<Variable> {
        let url = self.endpoint(&["variables", key])?;
        debug!("PUT {url}");

        let request = self.client().put(url).json(&VariablePayload { key, value });
        Ok(self.send(request).await?.json().await?)
    }
}
