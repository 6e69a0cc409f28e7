//! Environment configuration

use crate::error::LookupError;
use subnet_datasource::DataSourceConfig;

pub const DEFAULT_VPC_URL: &str = "https://us-south.iaas.cloud.ibm.com";
pub const DEFAULT_TAGGING_URL: &str = "https://tags.global-search-tagging.cloud.ibm.com";
pub const DEFAULT_CONTROLLER_URL: &str = "https://cloud.ibm.com";

/// Settings for one read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub vpc_url: String,
    pub tagging_url: String,
    pub controller_url: String,
    pub lookup: DataSourceConfig,
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, LookupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `var`, which returns the value of a variable if set
    ///
    /// Blank values count as unset for the URLs and the token. The lookup
    /// arguments are passed through as given so that an empty identifier or
    /// name is rejected by the data source's own validation.
    pub fn from_lookup<F>(var: F) -> Result<Self, LookupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let token = non_blank("IBMCLOUD_IAM_TOKEN").ok_or_else(|| {
            LookupError::InvalidConfig("IBMCLOUD_IAM_TOKEN environment variable is required".to_string())
        })?;

        Ok(Self {
            token,
            vpc_url: non_blank("IBMCLOUD_VPC_URL").unwrap_or_else(|| DEFAULT_VPC_URL.to_string()),
            tagging_url: non_blank("IBMCLOUD_TAGGING_URL")
                .unwrap_or_else(|| DEFAULT_TAGGING_URL.to_string()),
            controller_url: non_blank("IBMCLOUD_CONTROLLER_URL")
                .unwrap_or_else(|| DEFAULT_CONTROLLER_URL.to_string()),
            lookup: DataSourceConfig {
                identifier: var("SUBNET_IDENTIFIER"),
                name: var("SUBNET_NAME"),
            },
        })
    }
}
