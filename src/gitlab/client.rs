use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use crate::error::{GlBuildError, Result};

const PRIVATE_TOKEN: &str = "private-token";
const USER_AGENT: &str = concat!("glbuild/", env!("CARGO_PKG_VERSION"));

/// Thin client over the GitLab REST API (v4), scoped to a single project.
///
/// Every request carries the `PRIVATE-TOKEN` header. Requests are sent once;
/// there is no retry and no timeout beyond reqwest's defaults.
pub struct GitLabClient {
    client: Client,
    project_url: Url,
}

impl GitLabClient {
    /// Creates a client for `<api_url>/projects/<project_id>`.
    ///
    /// # Arguments
    ///
    /// * `api_url` - GitLab API base URL including the version (e.g., <https://gitlab.com/api/v4>)
    /// * `project_id` - Numeric project id or full path (e.g., "group/project")
    /// * `token` - Access token sent as `PRIVATE-TOKEN`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the token cannot be used as a
    /// header value, or the HTTP client cannot be built.
    pub fn new(api_url: &str, project_id: &str, token: &str) -> Result<Self> {
        let mut token_value = HeaderValue::from_str(token)
            .map_err(|e| GlBuildError::Config(format!("Invalid access token: {e}")))?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(PRIVATE_TOKEN), token_value);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| GlBuildError::Config(format!("Failed to create HTTP client: {e}")))?;

        let mut project_url = Url::parse(api_url)
            .map_err(|e| GlBuildError::Config(format!("Invalid API base URL: {e}")))?;

        // The project id is one path segment even when it is a "group/project" path
        project_url
            .path_segments_mut()
            .map_err(|()| GlBuildError::Config(format!("API base URL cannot be a base: {api_url}")))?
            .pop_if_empty()
            .push("projects")
            .push(project_id);

        Ok(Self {
            client,
            project_url,
        })
    }

    /// Base URL of the project all endpoints are resolved against
    pub fn project_url(&self) -> &Url {
        &self.project_url
    }

    /// Helper to get client
    pub(super) fn client(&self) -> &Client {
        &self.client
    }

    /// Construct an endpoint URL below the project URL
    pub(super) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.project_url.clone();
        url.path_segments_mut()
            .map_err(|()| GlBuildError::Config(format!("Invalid project URL: {}", self.project_url)))?
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and turns any non-success status into an `ApiError`.
    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        debug!("{} {}", response.status(), response.url());
        Self::error_for_status(response).await
    }

    pub(super) async fn error_for_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());
        Err(GlBuildError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}
