//! Blocking HTTP client for the workspace API

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use super::protocol::{
    ExportFormat, ExportResponse, ImportPayload, ImportRequest, ListResponse, ObjectInfo,
    PathPayload,
};
use super::{WorkspaceApi, WorkspaceError};

const IMPORT_ENDPOINT: &str = "2.0/workspace/import";
const EXPORT_ENDPOINT: &str = "2.0/workspace/export";
const LIST_ENDPOINT: &str = "2.0/workspace/list";
const MKDIRS_ENDPOINT: &str = "2.0/workspace/mkdirs";

/// Builds the API root from a workspace URL
///
/// URLs that already point at the API root (`.../api` or `.../api/`) are
/// kept, everything else gets `/api` appended.
pub fn api_base(workspace_url: &str) -> Result<String, WorkspaceError> {
    let url = workspace_url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(WorkspaceError::InvalidUrl(format!(
            "'{}' must start with http:// or https://",
            url
        )));
    }

    let base = url.trim_end_matches('/');
    if url.replace('/', "").ends_with("api") {
        Ok(base.to_string())
    } else {
        Ok(format!("{}/api", base))
    }
}

/// Workspace API client authenticated with a personal access token
pub struct WorkspaceClient {
    client: Client,
    base_url: String,
    token: String,
}

impl WorkspaceClient {
    pub fn new(workspace_url: &str, token: impl Into<String>, timeout: Duration) -> Result<Self, WorkspaceError> {
        let base_url = api_base(workspace_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Sends a request, turning non-success statuses into rejections
    fn send(&self, request: RequestBuilder) -> Result<Response, WorkspaceError> {
        let response = request.bearer_auth(&self.token).send()?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().unwrap_or_default();
            Err(WorkspaceError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl WorkspaceApi for WorkspaceClient {
    fn import(&self, request: &ImportRequest) -> Result<(), WorkspaceError> {
        let payload = ImportPayload::from(request);
        self.send(self.client.post(self.endpoint(IMPORT_ENDPOINT)).json(&payload))?;
        Ok(())
    }

    fn export(&self, path: &str, format: ExportFormat) -> Result<String, WorkspaceError> {
        let response = self.send(
            self.client
                .get(self.endpoint(EXPORT_ENDPOINT))
                .query(&[("path", path), ("format", format.as_str())]),
        )?;

        response.json::<ExportResponse>()?.decode()
    }

    fn list(&self, path: &str) -> Result<Vec<ObjectInfo>, WorkspaceError> {
        let response = self.send(
            self.client
                .get(self.endpoint(LIST_ENDPOINT))
                .query(&[("path", path)]),
        )?;

        Ok(response.json::<ListResponse>()?.objects)
    }

    fn mkdirs(&self, path: &str) -> Result<(), WorkspaceError> {
        let payload = PathPayload {
            path: path.to_string(),
        };
        self.send(self.client.post(self.endpoint(MKDIRS_ENDPOINT)).json(&payload))?;
        Ok(())
    }
}
