//! Global Tagging API client
//!
//! Reads the user and access tags attached to a resource CRN
//! (`GET /v3/tags?attached_to=<crn>&tag_type=<type>`).

use crate::common::HttpClient;
use crate::error::VpcError;
use crate::models::{TagCollection, TagType};
use crate::vpc_trait::TaggingClientTrait;
use tracing::debug;

/// Largest page the tagging service returns
const MAX_TAG_LIMIT: &str = "1000";

/// Global Tagging API client
#[derive(Debug, Clone)]
pub struct GlobalTaggingClient {
    http: HttpClient,
}

impl GlobalTaggingClient {
    /// Create a new tagging client
    ///
    /// # Arguments
    /// * `base_url` - Tagging endpoint (e.g., "https://tags.global-search-tagging.cloud.ibm.com")
    /// * `token` - IAM access token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, VpcError> {
        Ok(Self {
            http: HttpClient::with_defaults(base_url, token)?,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// List the tag names of one type attached to a CRN
    pub async fn list_tags_by_crn(&self, crn: &str, tag_type: TagType) -> Result<Vec<String>, VpcError> {
        if crn.is_empty() {
            return Err(VpcError::InvalidRequest("CRN must not be empty".to_string()));
        }

        debug!("Fetching {} tags for {}", tag_type, crn);
        let query = [
            ("attached_to", crn),
            ("tag_type", tag_type.as_str()),
            ("limit", MAX_TAG_LIMIT),
        ];
        let collection: TagCollection = self.http.get("/v3/tags", &query).await?;

        Ok(collection.items.into_iter().map(|tag| tag.name).collect())
    }
}

#[async_trait::async_trait]
impl TaggingClientTrait for GlobalTaggingClient {
    async fn list_tags_by_crn(&self, crn: &str, tag_type: TagType) -> Result<Vec<String>, VpcError> {
        self.list_tags_by_crn(crn, tag_type).await
    }
}
