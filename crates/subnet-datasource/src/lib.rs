//! `ibm_is_subnet` data source
//!
//! Resolves a VPC subnet by identifier or by name and maps it into the
//! provider state the host engine persists.
//!
//! # Example
//!
//! ```no_run
//! use subnet_datasource::{DataSourceConfig, SubnetDataSource};
//! use vpc_client::{GlobalTaggingClient, VpcClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let token = "your-iam-token".to_string();
//! let data_source = SubnetDataSource::new(
//!     Box::new(VpcClient::new("https://us-south.iaas.cloud.ibm.com".to_string(), token.clone())?),
//!     Box::new(GlobalTaggingClient::new(
//!         "https://tags.global-search-tagging.cloud.ibm.com".to_string(),
//!         token,
//!     )?),
//!     "https://cloud.ibm.com",
//! );
//!
//! let read = data_source.read(&DataSourceConfig::by_name("web-subnet")).await?;
//! println!("{} -> {}", read.state.name, read.state.ipv4_cidr_block);
//! for warning in &read.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`lookup`] - the lookup key and configuration validation
//! - [`schema`] - declared attributes of the data source
//! - [`resolver`] - point lookup and paginated name scan
//! - [`state`] - typed output state and its attribute-map form
//! - [`error`] - fatal errors of a read

pub mod error;
pub mod lookup;
pub mod resolver;
pub mod schema;
pub mod state;
#[cfg(test)]
mod test_utils;

pub use error::DataSourceError;
pub use lookup::{DataSourceConfig, LookupKey};
pub use resolver::{SUBNETS_DASHBOARD_PATH, SubnetDataSource};
pub use schema::{AttributeKind, AttributeSchema, DATA_SOURCE_NAME, Presence, subnet_schema};
pub use state::{SubnetRead, SubnetState, TagFetchWarning};
