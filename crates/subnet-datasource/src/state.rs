//! Output state of a subnet read
//!
//! [`SubnetState`] is the typed form the resolver produces. The host engine
//! stores state as a generic attribute map, so [`SubnetState::to_attributes`]
//! does the field-by-field mapping at that boundary. Optional references
//! that the subnet does not have are written as explicit nulls.

use crate::schema::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;
use std::fmt;
use vpc_client::{Subnet, TagType};

/// Attributes computed for one subnet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetState {
    /// Subnet identifier
    pub id: String,
    /// Subnet name
    pub name: String,
    /// IPv4 range in CIDR notation
    pub ipv4_cidr_block: String,
    /// Addresses still free for allocation
    pub available_ipv4_address_count: u64,
    /// Size of the range
    pub total_ipv4_address_count: u64,
    /// Unset when no network ACL is attached
    pub network_acl: Option<String>,
    /// Unset when no public gateway is attached
    pub public_gateway: Option<String>,
    /// Lifecycle status as reported by the API
    pub status: String,
    /// Zone name
    pub zone: String,
    /// Owning VPC identifier
    pub vpc: String,
    /// Owning VPC name
    pub vpc_name: String,
    /// User tags; empty when the lookup failed
    pub tags: BTreeSet<String>,
    /// Access tags; empty when the lookup failed
    pub access_tags: BTreeSet<String>,
    /// Subnet CRN
    pub crn: String,
    /// Unset when the subnet is not in a resource group
    pub resource_group: Option<String>,
    pub resource_group_name: Option<String>,
    /// Console page listing subnets
    pub resource_controller_url: String,
    /// Same as `name`
    pub resource_name: String,
    /// Same as `crn`
    pub resource_crn: String,
    /// Same as `status`
    pub resource_status: String,
}

impl SubnetState {
    /// Map a fetched subnet plus its tags into state
    pub fn from_subnet(
        subnet: &Subnet,
        tags: BTreeSet<String>,
        access_tags: BTreeSet<String>,
        controller_url: String,
    ) -> Self {
        Self {
            id: subnet.id.clone(),
            name: subnet.name.clone(),
            ipv4_cidr_block: subnet.ipv4_cidr_block.clone(),
            available_ipv4_address_count: subnet.available_ipv4_address_count,
            total_ipv4_address_count: subnet.total_ipv4_address_count,
            network_acl: subnet.network_acl.as_ref().map(|acl| acl.id.clone()),
            public_gateway: subnet.public_gateway.as_ref().map(|gateway| gateway.id.clone()),
            status: subnet.status.clone(),
            zone: subnet.zone.name.clone(),
            vpc: subnet.vpc.id.clone(),
            vpc_name: subnet.vpc.name.clone(),
            tags,
            access_tags,
            crn: subnet.crn.clone(),
            resource_group: subnet.resource_group.as_ref().map(|group| group.id.clone()),
            resource_group_name: subnet.resource_group.as_ref().map(|group| group.name.clone()),
            resource_controller_url: controller_url,
            resource_name: subnet.name.clone(),
            resource_crn: subnet.crn.clone(),
            resource_status: subnet.status.clone(),
        }
    }

    /// The state as the host's generic attribute map
    pub fn to_attributes(&self) -> Map<String, Value> {
        let mut attributes = Map::new();
        let mut set = |key: &str, value: Value| {
            attributes.insert(key.to_string(), value);
        };

        set(ID, json!(self.id));
        set(NAME, json!(self.name));
        set(IPV4_CIDR_BLOCK, json!(self.ipv4_cidr_block));
        set(AVAILABLE_IPV4_ADDRESS_COUNT, json!(self.available_ipv4_address_count));
        set(TOTAL_IPV4_ADDRESS_COUNT, json!(self.total_ipv4_address_count));
        set(NETWORK_ACL, json!(self.network_acl));
        set(PUBLIC_GATEWAY, json!(self.public_gateway));
        set(STATUS, json!(self.status));
        set(ZONE, json!(self.zone));
        set(VPC, json!(self.vpc));
        set(VPC_NAME, json!(self.vpc_name));
        set(TAGS, json!(self.tags));
        set(ACCESS_TAGS, json!(self.access_tags));
        set(CRN, json!(self.crn));
        set(RESOURCE_GROUP, json!(self.resource_group));
        set(RESOURCE_CONTROLLER_URL, json!(self.resource_controller_url));
        set(RESOURCE_NAME, json!(self.resource_name));
        set(RESOURCE_CRN, json!(self.resource_crn));
        set(RESOURCE_STATUS, json!(self.resource_status));
        set(RESOURCE_GROUP_NAME, json!(self.resource_group_name));

        attributes
    }
}

/// A tag lookup that failed without failing the read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFetchWarning {
    /// Subnet whose tags were requested
    pub subnet_id: String,
    /// CRN the lookup was keyed by
    pub crn: String,
    /// Which tag set is missing
    pub tag_type: TagType,
    /// Error reported by the tagging client
    pub message: String,
}

impl fmt::Display for TagFetchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error reading {} tags of subnet ({}): {}",
            self.tag_type, self.subnet_id, self.message
        )
    }
}

/// Result of a successful read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetRead {
    /// Resolved state
    pub state: SubnetState,
    /// Non-fatal problems hit while filling in the state
    pub warnings: Vec<TagFetchWarning>,
}

impl SubnetRead {
    /// Whether some part of the state could not be filled in
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}
