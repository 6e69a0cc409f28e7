//! Declared attributes of the `ibm_is_subnet` data source
//!
//! The schema is data: the host reads it to know which arguments the data
//! source accepts and which attributes it computes. Every key produced by
//! [`crate::state::SubnetState::to_attributes`] is declared here.

use serde::Serialize;

/// Name the data source is registered under
pub const DATA_SOURCE_NAME: &str = "ibm_is_subnet";

// Attribute names

/// Subnet identifier (computed)
pub const ID: &str = "id";
/// Lookup argument: subnet identifier
pub const IDENTIFIER: &str = "identifier";
/// Lookup argument: subnet name
pub const NAME: &str = "name";
pub const IPV4_CIDR_BLOCK: &str = "ipv4_cidr_block";
pub const AVAILABLE_IPV4_ADDRESS_COUNT: &str = "available_ipv4_address_count";
pub const TOTAL_IPV4_ADDRESS_COUNT: &str = "total_ipv4_address_count";
pub const TAGS: &str = "tags";
pub const ACCESS_TAGS: &str = "access_tags";
pub const CRN: &str = "crn";
pub const NETWORK_ACL: &str = "network_acl";
pub const PUBLIC_GATEWAY: &str = "public_gateway";
pub const STATUS: &str = "status";
pub const VPC: &str = "vpc";
pub const VPC_NAME: &str = "vpc_name";
pub const ZONE: &str = "zone";
pub const RESOURCE_GROUP: &str = "resource_group";
pub const RESOURCE_CONTROLLER_URL: &str = "resource_controller_url";
pub const RESOURCE_NAME: &str = "resource_name";
pub const RESOURCE_CRN: &str = "resource_crn";
pub const RESOURCE_STATUS: &str = "resource_status";
pub const RESOURCE_GROUP_NAME: &str = "resource_group_name";

/// Value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Single string
    String,
    /// Integer
    Int,
    /// Unordered set of strings
    StringSet,
}

/// Who supplies an attribute's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Argument the user may set
    Optional,
    /// Computed by the data source
    Computed,
    /// Argument the user may set, filled in by the data source otherwise
    OptionalComputed,
}

/// One declared attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    /// Attribute name
    pub name: &'static str,
    /// Value type
    pub kind: AttributeKind,
    /// Argument or computed
    pub presence: Presence,
    /// Group of arguments of which exactly one must be set
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub exactly_one_of: &'static [&'static str],
    /// Help text shown by the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl AttributeSchema {
    /// Whether the user may set this attribute
    pub fn is_argument(&self) -> bool {
        matches!(self.presence, Presence::Optional | Presence::OptionalComputed)
    }
}

const LOOKUP_ARGUMENTS: &[&str] = &[NAME, IDENTIFIER];

const fn computed(name: &'static str, kind: AttributeKind, description: Option<&'static str>) -> AttributeSchema {
    AttributeSchema {
        name,
        kind,
        presence: Presence::Computed,
        exactly_one_of: &[],
        description,
    }
}

static SUBNET_SCHEMA: &[AttributeSchema] = &[
    computed(ID, AttributeKind::String, Some("The unique identifier of the subnet")),
    AttributeSchema {
        name: IDENTIFIER,
        kind: AttributeKind::String,
        presence: Presence::Optional,
        exactly_one_of: LOOKUP_ARGUMENTS,
        description: None,
    },
    computed(IPV4_CIDR_BLOCK, AttributeKind::String, None),
    computed(AVAILABLE_IPV4_ADDRESS_COUNT, AttributeKind::Int, None),
    computed(TOTAL_IPV4_ADDRESS_COUNT, AttributeKind::Int, None),
    AttributeSchema {
        name: NAME,
        kind: AttributeKind::String,
        presence: Presence::OptionalComputed,
        exactly_one_of: LOOKUP_ARGUMENTS,
        description: None,
    },
    computed(TAGS, AttributeKind::StringSet, Some("List of tags")),
    computed(ACCESS_TAGS, AttributeKind::StringSet, Some("List of access tags")),
    computed(CRN, AttributeKind::String, Some("The crn of the resource")),
    computed(NETWORK_ACL, AttributeKind::String, None),
    computed(PUBLIC_GATEWAY, AttributeKind::String, None),
    computed(STATUS, AttributeKind::String, None),
    computed(VPC, AttributeKind::String, None),
    computed(VPC_NAME, AttributeKind::String, None),
    computed(ZONE, AttributeKind::String, None),
    computed(RESOURCE_GROUP, AttributeKind::String, None),
    computed(
        RESOURCE_CONTROLLER_URL,
        AttributeKind::String,
        Some("The URL of the IBM Cloud dashboard that can be used to explore and view details about this instance"),
    ),
    computed(RESOURCE_NAME, AttributeKind::String, Some("The name of the resource")),
    computed(RESOURCE_CRN, AttributeKind::String, Some("The crn of the resource")),
    computed(RESOURCE_STATUS, AttributeKind::String, Some("The status of the resource")),
    computed(
        RESOURCE_GROUP_NAME,
        AttributeKind::String,
        Some("The resource group name in which resource is provisioned"),
    ),
];

/// All attributes of the data source, in declaration order
pub fn subnet_schema() -> &'static [AttributeSchema] {
    SUBNET_SCHEMA
}

/// Look up one declared attribute by name
pub fn attribute(name: &str) -> Option<&'static AttributeSchema> {
    SUBNET_SCHEMA.iter().find(|attribute| attribute.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = subnet_schema().iter().map(|a| a.name).collect();
        assert_eq!(names.len(), subnet_schema().len());
    }

    #[test]
    fn test_lookup_arguments() {
        let arguments: Vec<_> = subnet_schema()
            .iter()
            .filter(|a| a.is_argument())
            .map(|a| a.name)
            .collect();
        assert_eq!(arguments, vec![IDENTIFIER, NAME]);

        for name in [IDENTIFIER, NAME] {
            let attribute = attribute(name).unwrap();
            assert!(attribute.exactly_one_of.contains(&IDENTIFIER));
            assert!(attribute.exactly_one_of.contains(&NAME));
        }
    }

    #[test]
    fn test_tag_attributes_are_sets() {
        assert_eq!(attribute(TAGS).unwrap().kind, AttributeKind::StringSet);
        assert_eq!(attribute(ACCESS_TAGS).unwrap().kind, AttributeKind::StringSet);
    }

    #[test]
    fn test_unknown_attribute() {
        assert!(attribute("ipv6_cidr_block").is_none());
    }
}
