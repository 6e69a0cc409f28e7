//! IBM Cloud VPC REST API Client
//!
//! A Rust client library for the parts of the IBM Cloud VPC and Global Tagging
//! APIs that the subnet data source reads from.
//!
//! # Example
//!
//! ```no_run
//! use vpc_client::{GlobalTaggingClient, TagType, VpcClient, get_next};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let vpc = VpcClient::new(
//!     "https://us-south.iaas.cloud.ibm.com".to_string(),
//!     "your-iam-token".to_string(),
//! )?;
//!
//! // Point lookup
//! let subnet = vpc.get_subnet("0717-2f3c6c8a-7d26-4b8e-9f3c-5b0c1e9d1a01").await?;
//!
//! // One page of the subnet collection, then the cursor for the next one
//! let page = vpc.list_subnets(None).await?;
//! let start = get_next(page.next.as_ref());
//!
//! // Tags attached to the subnet
//! let tagging = GlobalTaggingClient::new(
//!     "https://tags.global-search-tagging.cloud.ibm.com".to_string(),
//!     "your-iam-token".to_string(),
//! )?;
//! let tags = tagging.list_tags_by_crn(&subnet.crn, TagType::User).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Subnets**: point fetch by identifier, paginated collection listing
//! - **Pagination**: `start` cursor extraction from `next` links
//! - **Tagging**: user and access tags attached to a CRN
//! - **Mocking**: in-memory clients behind the `test-util` feature

pub mod client;
pub mod common;
pub mod error;
pub mod models;
pub mod tagging;
#[path = "trait.rs"]
pub mod vpc_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::VpcClient;
pub use common::HttpClient;
pub use common::pagination::get_next;
pub use error::VpcError;
pub use models::*;
pub use tagging::GlobalTaggingClient;
pub use vpc_trait::{TaggingClientTrait, VpcClientTrait};
#[cfg(any(test, feature = "test-util"))]
pub use mock::{MockTaggingClient, MockVpcClient};
