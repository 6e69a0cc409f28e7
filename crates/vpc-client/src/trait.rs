//! Client traits for mocking
//!
//! These traits abstract the VPC and Global Tagging clients so the data source
//! can be exercised in unit tests. The concrete clients implement them, and
//! tests use the in-memory implementations from the `mock` module.

use crate::error::VpcError;
use crate::models::*;

/// Trait for VPC subnet read operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait VpcClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Point lookup of a subnet by identifier
    async fn get_subnet(&self, id: &str) -> Result<Subnet, VpcError>;

    /// One page of the subnet collection, starting at `start` when given
    async fn list_subnets(&self, start: Option<&str>) -> Result<SubnetCollection, VpcError>;
}

/// Trait for reading tags attached to a resource CRN
#[async_trait::async_trait]
pub trait TaggingClientTrait: Send + Sync {
    /// Names of the tags of `tag_type` attached to `crn`
    async fn list_tags_by_crn(&self, crn: &str, tag_type: TagType) -> Result<Vec<String>, VpcError>;
}
