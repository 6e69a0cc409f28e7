//! Test utilities for the subnet data source
//!
//! Helpers for building subnet fixtures and a data source wired to the
//! in-memory clients.

use crate::resolver::{SUBNETS_DASHBOARD_PATH, SubnetDataSource};
use std::sync::{Arc, Mutex, PoisonError};
use vpc_client::mock::helpers::Helpers;
use vpc_client::{
    MockTaggingClient, MockVpcClient, PageLink, Subnet, SubnetCollection, VpcClientTrait, VpcError,
};

pub const TEST_VPC_URL: &str = "https://us-south.iaas.test";
pub const TEST_CONTROLLER_URL: &str = "https://cloud.ibm.test";

/// Helper to create a subnet fixture (network ACL and resource group set, no public gateway)
pub fn create_test_subnet(name: &str, cidr: &str) -> Subnet {
    Helpers::new(TEST_VPC_URL.to_string()).create_subnet(name, cidr)
}

/// Attach a public gateway to a fixture
pub fn with_public_gateway(mut subnet: Subnet) -> Subnet {
    subnet.public_gateway =
        Some(Helpers::new(TEST_VPC_URL.to_string()).create_public_gateway_reference("edge-gateway"));
    subnet
}

/// Dashboard URL the test data source produces
pub fn dashboard() -> String {
    format!("{}{}", TEST_CONTROLLER_URL, SUBNETS_DASHBOARD_PATH)
}

/// Mock VPC client holding subnets named `names`, split into pages of `page_size`
pub fn create_mock_vpc(names: &[&str], page_size: usize) -> MockVpcClient {
    let vpc = MockVpcClient::new(TEST_VPC_URL).with_page_size(page_size);
    for (i, name) in names.iter().enumerate() {
        vpc.add_subnet(create_test_subnet(name, &format!("10.240.{}.0/24", i)));
    }
    vpc
}

/// Data source backed by clones of the given mocks
///
/// The mocks share their stores with the clones, so the originals can be
/// inspected after a read.
pub fn create_data_source(vpc: &MockVpcClient, tagging: &MockTaggingClient) -> SubnetDataSource {
    SubnetDataSource::new(
        Box::new(vpc.clone()),
        Box::new(tagging.clone()),
        TEST_CONTROLLER_URL,
    )
}

/// VPC client that serves a fixed list of pages in call order, ignoring the cursor
///
/// Lets tests control the `next` links exactly as a server would send them.
#[derive(Debug, Clone, Default)]
pub struct ScriptedVpcClient {
    pages: Arc<Mutex<Vec<SubnetCollection>>>,
    cursors: Arc<Mutex<Vec<Option<String>>>>,
}

impl ScriptedVpcClient {
    /// Queue a page holding `subnets` whose `next` link is `next_href`
    pub fn push_page(&self, subnets: Vec<Subnet>, next_href: Option<&str>) {
        let total_count = subnets.len() as u64;
        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SubnetCollection {
                subnets,
                first: None,
                next: next_href.map(|href| PageLink {
                    href: href.to_string(),
                }),
                limit: 1,
                total_count,
            });
    }

    /// Cursors passed to `list_subnets`, in call order
    pub fn cursors(&self) -> Vec<Option<String>> {
        self.cursors.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait::async_trait]
impl VpcClientTrait for ScriptedVpcClient {
    fn base_url(&self) -> &str {
        TEST_VPC_URL
    }

    async fn get_subnet(&self, id: &str) -> Result<Subnet, VpcError> {
        Err(VpcError::NotFound(format!("/v1/subnets/{}", id)))
    }

    async fn list_subnets(&self, start: Option<&str>) -> Result<SubnetCollection, VpcError> {
        let mut cursors = self.cursors.lock().unwrap_or_else(PoisonError::into_inner);
        cursors.push(start.map(str::to_string));
        let call = cursors.len() - 1;
        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(call)
            .cloned()
            .ok_or_else(|| VpcError::Api {
                status: 400,
                body: format!("no page scripted for call {}", call),
            })
    }
}

/// Data source over a scripted VPC client
pub fn create_scripted_data_source(vpc: &ScriptedVpcClient) -> SubnetDataSource {
    SubnetDataSource::new(
        Box::new(vpc.clone()),
        Box::new(MockTaggingClient::new()),
        TEST_CONTROLLER_URL,
    )
}
