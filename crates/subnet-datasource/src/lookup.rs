//! Lookup key and configuration validation
//!
//! The data source accepts `identifier` and `name`; exactly one must be set
//! and it must not be empty. [`DataSourceConfig`] is the raw form the host
//! hands over, [`LookupKey`] is the validated form the resolver works with.

use crate::error::DataSourceError;
use crate::schema::{IDENTIFIER, NAME};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to look a subnet up by
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKey {
    /// Direct point lookup by subnet identifier
    ById(String),
    /// Scan of all visible subnets for an exact, case-sensitive name match
    ByName(String),
}

impl LookupKey {
    /// The identifier or name being looked up
    pub fn value(&self) -> &str {
        match self {
            LookupKey::ById(id) => id,
            LookupKey::ByName(name) => name,
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::ById(id) => write!(f, "{}={}", IDENTIFIER, id),
            LookupKey::ByName(name) => write!(f, "{}={}", NAME, name),
        }
    }
}

/// Data source arguments as supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Subnet identifier
    #[serde(default)]
    pub identifier: Option<String>,
    /// Subnet name
    #[serde(default)]
    pub name: Option<String>,
}

impl DataSourceConfig {
    /// Config that looks a subnet up by identifier
    pub fn by_id(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            name: None,
        }
    }

    /// Config that looks a subnet up by name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            identifier: None,
            name: Some(name.into()),
        }
    }

    /// Validate the arguments and produce the lookup key
    pub fn lookup_key(&self) -> Result<LookupKey, DataSourceError> {
        LookupKey::try_from(self)
    }
}

fn non_zero(attribute: &str, value: &str) -> Result<(), DataSourceError> {
    if value.trim().is_empty() {
        return Err(DataSourceError::InvalidConfig(format!(
            "\"{}\" must not be empty",
            attribute
        )));
    }
    Ok(())
}

impl TryFrom<&DataSourceConfig> for LookupKey {
    type Error = DataSourceError;

    fn try_from(config: &DataSourceConfig) -> Result<Self, Self::Error> {
        match (&config.identifier, &config.name) {
            (Some(id), None) => {
                non_zero(IDENTIFIER, id)?;
                Ok(LookupKey::ById(id.clone()))
            }
            (None, Some(name)) => {
                non_zero(NAME, name)?;
                Ok(LookupKey::ByName(name.clone()))
            }
            (Some(_), Some(_)) => Err(DataSourceError::InvalidConfig(format!(
                "only one of \"{}\" or \"{}\" can be specified",
                IDENTIFIER, NAME
            ))),
            (None, None) => Err(DataSourceError::InvalidConfig(format!(
                "one of \"{}\" or \"{}\" must be specified",
                IDENTIFIER, NAME
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_only() {
        let key = DataSourceConfig::by_id("0717-abc").lookup_key().unwrap();
        assert_eq!(key, LookupKey::ById("0717-abc".to_string()));
        assert_eq!(key.value(), "0717-abc");
    }

    #[test]
    fn test_name_only() {
        let key = DataSourceConfig::by_name("web").lookup_key().unwrap();
        assert_eq!(key, LookupKey::ByName("web".to_string()));
    }

    #[test]
    fn test_both_set_is_rejected() {
        let config = DataSourceConfig {
            identifier: Some("0717-abc".to_string()),
            name: Some("web".to_string()),
        };
        assert!(matches!(config.lookup_key(), Err(DataSourceError::InvalidConfig(_))));
    }

    #[test]
    fn test_neither_set_is_rejected() {
        let err = DataSourceConfig::default().lookup_key().unwrap_err();
        assert!(err.to_string().contains("must be specified"));
    }

    #[test]
    fn test_empty_values_are_rejected() {
        assert!(DataSourceConfig::by_id("").lookup_key().is_err());
        assert!(DataSourceConfig::by_name("   ").lookup_key().is_err());
    }

    #[test]
    fn test_config_from_host_json() {
        let config: DataSourceConfig = serde_json::from_value(serde_json::json!({"name": "web"})).unwrap();
        assert_eq!(config.lookup_key().unwrap(), LookupKey::ByName("web".to_string()));
    }

    #[test]
    fn test_display_names_the_attribute() {
        assert_eq!(LookupKey::ById("x".to_string()).to_string(), "identifier=x");
        assert_eq!(LookupKey::ByName("web".to_string()).to_string(), "name=web");
    }
}
