use crate::{CliClientResult, ClientError};

use rfi_config::ClientConfig;
use rfi_core::{
    ApiEnvelope, CreateRfiByNameRequest, CreateRfiRequest, PageRequest, ResolveRfiRequest,
    RfiDto, RfiStatus, UpdateRfiRequest,
};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde_json::Value;
use uuid::Uuid;

/// HTTP client for the RFI service REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    /// * `token` - Optional bearer token for the Authorization header
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self::with_reqwest(base_url, token, ReqwestClient::new())
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self::with_reqwest(base_url, token, client))
    }

    pub fn from_config(config: &ClientConfig) -> CliClientResult<Self> {
        Self::with_timeout(
            &config.server_url,
            config.token.as_deref(),
            config.timeout(),
        )
    }

    fn with_reqwest(base_url: &str, token: Option<&str>, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client,
        }
    }

    /// Join path segments onto the base URL, percent-encoding each one
    #[track_caller]
    fn url(&self, segments: &[&str]) -> CliClientResult<Url> {
        let location = Location::caller();
        let mut url = Url::parse(&self.base_url).map_err(|e| ClientError::Url {
            message: format!("{}: {}", self.base_url, e),
            location: ErrorLocation::from(location),
        })?;

        url.path_segments_mut()
            .map_err(|_| ClientError::Url {
                message: format!("{} cannot be a base URL", self.base_url),
                location: ErrorLocation::from(location),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Build a request with optional bearer token
    fn request(&self, method: Method, segments: &[&str]) -> CliClientResult<RequestBuilder> {
        let url = self.url(segments)?;
        debug!("{} {}", method, url);

        let mut req = self.client.request(method, url);
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        Ok(req)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Error bodies are `{"status":"error","message":...}` when the service produced them
            let message = serde_json::from_str::<ApiEnvelope<Value>>(&text)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            debug!("Request failed with {}: {}", status, message);
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // RFI Operations
    // =========================================================================

    /// Create a new RFI
    pub async fn create_rfi(&self, request: &CreateRfiRequest) -> CliClientResult<Value> {
        info!(
            "Creating RFI for project: {}, title: {}",
            request.project_code, request.title
        );
        let req = self.request(Method::POST, &["api", "rfis"])?.json(request);
        self.execute(req).await
    }

    /// Create a new RFI, addressing the assignee by e-mail
    pub async fn create_rfi_by_name(
        &self,
        request: &CreateRfiByNameRequest,
    ) -> CliClientResult<Value> {
        info!(
            "Creating RFI for project: {}, title: {} (assignee by e-mail)",
            request.project_code, request.title
        );
        let req = self.request(Method::POST, &["api", "rfis"])?.json(request);
        self.execute(req).await
    }

    /// Get an RFI by ID
    pub async fn get_rfi(&self, id: Uuid) -> CliClientResult<Value> {
        let id = id.to_string();
        let req = self.request(Method::GET, &["api", "rfis", &id])?;
        self.execute(req).await
    }

    /// Get an RFI by ID, decoded from the response envelope
    pub async fn fetch_rfi(&self, id: Uuid) -> CliClientResult<RfiDto> {
        let body = self.get_rfi(id).await?;
        let envelope: ApiEnvelope<RfiDto> = serde_json::from_value(body)?;

        envelope
            .into_data()
            .ok_or_else(|| ClientError::missing_data(format!("RFI {} response had no data", id)))
    }

    /// Update an RFI
    pub async fn update_rfi(&self, id: Uuid, request: &UpdateRfiRequest) -> CliClientResult<Value> {
        let id = id.to_string();
        let req = self
            .request(Method::PUT, &["api", "rfis", &id])?
            .json(request);
        self.execute(req).await
    }

    /// Delete an RFI
    pub async fn delete_rfi(&self, id: Uuid) -> CliClientResult<Value> {
        let id = id.to_string();
        let req = self.request(Method::DELETE, &["api", "rfis", &id])?;
        self.execute(req).await
    }

    /// Resolve an RFI with a closing message
    pub async fn resolve_rfi(
        &self,
        id: Uuid,
        request: &ResolveRfiRequest,
    ) -> CliClientResult<Value> {
        let id = id.to_string();
        let req = self
            .request(Method::PUT, &["api", "rfis", &id, "resolve"])?
            .json(request);
        self.execute(req).await
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// List RFIs in a project, optionally only those in `status`
    pub async fn list_project_rfis(
        &self,
        project_code: &str,
        status: Option<RfiStatus>,
        page: &PageRequest,
    ) -> CliClientResult<Value> {
        let mut req = self
            .request(Method::GET, &["api", "projects", project_code, "rfis"])?
            .query(page);
        if let Some(status) = status {
            req = req.query(&[("status", status.as_str())]);
        }
        self.execute(req).await
    }

    /// List RFIs assigned to the caller, directly or through a group
    pub async fn list_assigned_rfis(&self, page: &PageRequest) -> CliClientResult<Value> {
        let req = self
            .request(Method::GET, &["api", "rfis", "assigned"])?
            .query(page);
        self.execute(req).await
    }

    /// List RFIs the caller created
    pub async fn list_created_rfis(&self, page: &PageRequest) -> CliClientResult<Value> {
        let req = self
            .request(Method::GET, &["api", "rfis", "created"])?
            .query(page);
        self.execute(req).await
    }

    /// List the caller's RFIs that are past their due date. Not paged.
    pub async fn list_overdue_rfis(&self, project_id: Option<Uuid>) -> CliClientResult<Value> {
        let mut req = self.request(Method::GET, &["api", "rfis", "overdue"])?;
        if let Some(project_id) = project_id {
            req = req.query(&[("projectId", project_id.to_string())]);
        }
        self.execute(req).await
    }

    /// List every RFI visible to the caller
    pub async fn list_all_rfis(&self, page: &PageRequest) -> CliClientResult<Value> {
        let req = self
            .request(Method::GET, &["api", "rfis", "all"])?
            .query(page);
        self.execute(req).await
    }
}
