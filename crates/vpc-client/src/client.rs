//! VPC API client
//!
//! Implements the read side of the VPC subnet API:
//! `GET /v1/subnets/{id}` and `GET /v1/subnets`.

use crate::common::HttpClient;
use crate::common::pagination::START_PARAM;
use crate::error::VpcError;
use crate::models::*;
use crate::vpc_trait::VpcClientTrait;
use tracing::debug;

/// API version date sent with every request
pub const DEFAULT_API_VERSION: &str = "2024-11-12";

/// VPC generation served by the regional endpoint
pub const API_GENERATION: &str = "2";

/// VPC API client
#[derive(Debug, Clone)]
pub struct VpcClient {
    http: HttpClient,
    version: String,
}

impl VpcClient {
    /// Create a new VPC client
    ///
    /// # Arguments
    /// * `base_url` - Regional VPC endpoint (e.g., "https://us-south.iaas.cloud.ibm.com")
    /// * `token` - IAM access token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, VpcError> {
        Ok(Self {
            http: HttpClient::with_defaults(base_url, token)?,
            version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Pin a different API version date
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Get a subnet by ID
    ///
    /// # Arguments
    /// * `id` - Subnet identifier
    ///
    /// # Returns
    /// * `Ok(Subnet)` - The subnet object
    /// * `Err(VpcError)` - `NotFound` when the identifier is unknown, otherwise
    ///   the transport or API failure
    pub async fn get_subnet(&self, id: &str) -> Result<Subnet, VpcError> {
        if id.is_empty() {
            return Err(VpcError::InvalidRequest(
                "subnet identifier must not be empty".to_string(),
            ));
        }

        debug!("Fetching subnet {} from VPC API", id);
        let path = format!("/v1/subnets/{}", urlencoding::encode(id));
        self.http.get(&path, &self.common_query()).await
    }

    /// List one page of subnets
    ///
    /// # Arguments
    /// * `start` - Cursor from the previous page's `next` link; `None` for the first page
    ///
    /// # Returns
    /// * `Ok(SubnetCollection)` - The page, with `next` set when more pages exist
    /// * `Err(VpcError)` - If the request fails
    pub async fn list_subnets(&self, start: Option<&str>) -> Result<SubnetCollection, VpcError> {
        let mut query = self.common_query();
        if let Some(start) = start {
            query.push((START_PARAM, start));
        }

        debug!("Listing subnets (start: {:?})", start);
        self.http.get("/v1/subnets", &query).await
    }

    fn common_query(&self) -> Vec<(&str, &str)> {
        vec![("version", self.version.as_str()), ("generation", API_GENERATION)]
    }
}

#[async_trait::async_trait]
impl VpcClientTrait for VpcClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn get_subnet(&self, id: &str) -> Result<Subnet, VpcError> {
        self.get_subnet(id).await
    }

    async fn list_subnets(&self, start: Option<&str>) -> Result<SubnetCollection, VpcError> {
        self.list_subnets(start).await
    }
}
