//! Errors of the lookup command

use subnet_datasource::DataSourceError;
use thiserror::Error;
use vpc_client::VpcError;

/// Errors that stop the command before or during a read.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Missing or conflicting environment settings
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A client could not be built
    #[error("Client error: {0}")]
    Client(#[from] VpcError),

    /// The read itself failed
    #[error("{0}")]
    DataSource(#[from] DataSourceError),
}
