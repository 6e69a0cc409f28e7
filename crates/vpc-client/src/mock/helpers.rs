//! Helper functions for creating VPC model fixtures

use crate::models::*;
use uuid::Uuid;

/// Zone every fixture is placed in
pub const MOCK_ZONE: &str = "us-south-1";

/// Account segment of fixture CRNs
pub const MOCK_ACCOUNT: &str = "a/0123456789abcdef0123456789abcdef";

/// Helper functions for creating fixtures in mock implementations
#[derive(Debug, Clone)]
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    /// Create helpers that build hrefs under `base_url`
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Generate a VPC-style identifier with the given prefix
    pub fn create_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4())
    }

    /// Build a CRN for a VPC resource
    pub fn create_crn(&self, resource_type: &str, id: &str) -> String {
        format!(
            "crn:v1:bluemix:public:is:{}:{}::{}:{}",
            MOCK_ZONE, MOCK_ACCOUNT, resource_type, id
        )
    }

    /// Helper to create ZoneReference
    pub fn create_zone_reference(&self, name: &str) -> ZoneReference {
        ZoneReference {
            name: name.to_string(),
            href: format!("{}/v1/regions/us-south/zones/{}", self.base_url, name),
        }
    }

    /// Helper to create VpcReference
    pub fn create_vpc_reference(&self, name: &str) -> VpcReference {
        let id = self.create_id("r006");
        VpcReference {
            crn: self.create_crn("vpc", &id),
            href: format!("{}/v1/vpcs/{}", self.base_url, id),
            id,
            name: name.to_string(),
        }
    }

    /// Helper to create NetworkAclReference
    pub fn create_network_acl_reference(&self, name: &str) -> NetworkAclReference {
        let id = self.create_id("r006");
        NetworkAclReference {
            crn: self.create_crn("network-acl", &id),
            href: format!("{}/v1/network_acls/{}", self.base_url, id),
            id,
            name: name.to_string(),
        }
    }

    /// Helper to create PublicGatewayReference
    pub fn create_public_gateway_reference(&self, name: &str) -> PublicGatewayReference {
        let id = self.create_id("r006");
        PublicGatewayReference {
            crn: self.create_crn("public-gateway", &id),
            href: format!("{}/v1/public_gateways/{}", self.base_url, id),
            id,
            name: name.to_string(),
            resource_type: "public_gateway".to_string(),
        }
    }

    /// Helper to create ResourceGroupReference
    pub fn create_resource_group_reference(&self, name: &str) -> ResourceGroupReference {
        let id = Uuid::new_v4().simple().to_string();
        ResourceGroupReference {
            href: format!("https://resource-controller.cloud.ibm.com/v2/resource_groups/{}", id),
            id,
            name: name.to_string(),
        }
    }

    /// Helper to create a Subnet
    ///
    /// The fixture has a network ACL and a resource group but no public
    /// gateway; adjust the returned value for other shapes.
    pub fn create_subnet(&self, name: &str, ipv4_cidr_block: &str) -> Subnet {
        let id = self.create_id("0717");
        Subnet {
            crn: self.create_crn("subnet", &id),
            href: format!("{}/v1/subnets/{}", self.base_url, id),
            id,
            name: name.to_string(),
            ipv4_cidr_block: ipv4_cidr_block.to_string(),
            available_ipv4_address_count: 251,
            total_ipv4_address_count: 256,
            status: "available".to_string(),
            ip_version: "ipv4".to_string(),
            zone: self.create_zone_reference(MOCK_ZONE),
            vpc: self.create_vpc_reference("mock-vpc"),
            network_acl: Some(self.create_network_acl_reference("mock-acl")),
            public_gateway: None,
            resource_group: Some(self.create_resource_group_reference("Default")),
            created_at: Some(chrono::Utc::now()),
        }
    }
}
