//! VPC API models
//!
//! These models match the JSON documents returned by the VPC `/v1/subnets`
//! endpoints and the Global Tagging `/v3/tags` endpoint. Only the fields the
//! subnet data source reads are modelled; unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Link to another page of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// URL of the page, absolute or path-relative, including the `start` cursor
    pub href: String,
}

/// One page of the subnet collection (`GET /v1/subnets`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubnetCollection {
    /// Subnets on this page
    pub subnets: Vec<Subnet>,
    /// Link to the first page
    #[serde(default)]
    pub first: Option<PageLink>,
    /// Absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
    /// Maximum page size
    #[serde(default)]
    pub limit: u32,
    /// Number of subnets across all pages
    #[serde(default)]
    pub total_count: u64,
}

/// Subnet model matching the VPC API `Subnet` schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Subnet {
    /// Unique identifier
    pub id: String,
    /// Unique (per VPC) user-chosen name
    pub name: String,
    /// Cloud resource name
    pub crn: String,
    #[serde(default)]
    pub href: String,
    pub ipv4_cidr_block: String, // e.g., "10.240.0.0/24"
    pub available_ipv4_address_count: u64,
    pub total_ipv4_address_count: u64,
    /// Lifecycle status ("available", "pending", "deleting", "failed", ...)
    pub status: String,
    /// Always "ipv4" for the subnets modelled here
    #[serde(default = "default_ip_version")]
    pub ip_version: String,
    pub zone: ZoneReference,
    pub vpc: VpcReference,
    #[serde(default)]
    pub network_acl: Option<NetworkAclReference>,
    #[serde(default)]
    pub public_gateway: Option<PublicGatewayReference>,
    #[serde(default)]
    pub resource_group: Option<ResourceGroupReference>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_ip_version() -> String {
    "ipv4".to_string()
}

/// Zone a subnet lives in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneReference {
    pub name: String, // e.g., "us-south-1"
    #[serde(default)]
    pub href: String,
}

/// VPC that owns a subnet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpcReference {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub crn: String,
    #[serde(default)]
    pub href: String,
}

/// Network ACL attached to a subnet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAclReference {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub crn: String,
    #[serde(default)]
    pub href: String,
}

/// Public gateway attached to a subnet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicGatewayReference {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub crn: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub resource_type: String,
}

/// Resource group a subnet belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroupReference {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub href: String,
}

/// Tag type discriminator for the Global Tagging API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    /// Plain user tags
    User,
    /// Access-management tags
    Access,
}

impl TagType {
    /// Value of the `tag_type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::User => "user",
            TagType::Access => "access",
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag as returned by the Global Tagging API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag text, e.g. "env:prod"
    pub name: String,
}

/// Tag list response (`GET /v3/tags`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCollection {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    /// Tags on this page
    #[serde(default)]
    pub items: Vec<Tag>,
}
