//! Data source errors
//!
//! Only fatal conditions live here. Tag retrieval failures are not errors of
//! a read; they are reported as [`crate::state::TagFetchWarning`]s.

use crate::lookup::LookupKey;
use thiserror::Error;
use vpc_client::VpcError;

/// Errors that abort a subnet read.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The lookup configuration is unusable (both or neither key set, empty value)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Point fetch or list page failed; carries the API error with its raw response
    #[error("Error getting subnet ({key}): {source}")]
    Lookup {
        /// What was being looked up
        key: LookupKey,
        /// Underlying client error
        source: VpcError,
    },

    /// The name scan finished without a match
    #[error("No subnet found with name ({name})")]
    NotFound {
        /// Name that was searched for
        name: String,
    },
}
