//! Mock clients for unit testing
//!
//! This module provides in-memory implementations of `VpcClientTrait` and
//! `TaggingClientTrait` that can be used in unit tests without reaching the
//! IBM Cloud APIs.
//!
//! The mock is organized into modules:
//! - `vpc.rs` - subnet point lookup and paginated listing
//! - `tagging.rs` - tags attached to a CRN
//! - `helpers.rs` - helper functions for building subnet fixtures

pub mod helpers;
mod tagging;
mod vpc;

pub use tagging::MockTaggingClient;

use crate::error::VpcError;
use crate::models::*;
use crate::vpc_trait::VpcClientTrait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Lock a mock store, recovering the data from a poisoned lock
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock VPC client for testing
///
/// Subnets are kept in insertion order, which is also the order in which
/// `list_subnets` pages them out. Failures can be injected for the point
/// lookup and for individual list pages.
#[derive(Debug, Clone)]
pub struct MockVpcClient {
    pub(crate) base_url: String,
    pub(crate) page_size: usize,
    // In-memory storage, in page order
    pub(crate) subnets: Arc<Mutex<Vec<Subnet>>>,
    // Injected failures
    pub(crate) fail_get: Arc<Mutex<Option<(u16, String)>>>,
    pub(crate) fail_list_page: Arc<Mutex<Option<usize>>>,
    // Request log
    pub(crate) get_requests: Arc<Mutex<Vec<String>>>,
    pub(crate) list_requests: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockVpcClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
            subnets: Arc::new(Mutex::new(Vec::new())),
            fail_get: Arc::new(Mutex::new(None)),
            fail_list_page: Arc::new(Mutex::new(None)),
            get_requests: Arc::new(Mutex::new(Vec::new())),
            list_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Split the collection into pages of `page_size` subnets
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Add a subnet to the end of the mock store (for test setup)
    pub fn add_subnet(&self, subnet: Subnet) {
        lock(&self.subnets).push(subnet);
    }

    /// Identifiers of the stored subnets, in page order
    pub fn subnet_ids(&self) -> Vec<String> {
        lock(&self.subnets).iter().map(|subnet| subnet.id.clone()).collect()
    }

    /// Make every point lookup fail with an API error carrying `status` and `body`
    pub fn fail_get_subnet(&self, status: u16, body: impl Into<String>) {
        *lock(&self.fail_get) = Some((status, body.into()));
    }

    /// Make the list request for page `page` (0-based) fail
    pub fn fail_list_page(&self, page: usize) {
        *lock(&self.fail_list_page) = Some(page);
    }

    /// Identifiers passed to `get_subnet`, in call order
    pub fn get_requests(&self) -> Vec<String> {
        lock(&self.get_requests).clone()
    }

    /// Cursors passed to `list_subnets`, in call order
    pub fn list_requests(&self) -> Vec<Option<String>> {
        lock(&self.list_requests).clone()
    }

    /// Number of `list_subnets` calls made so far
    pub fn list_request_count(&self) -> usize {
        lock(&self.list_requests).len()
    }

    /// Get helpers instance
    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.base_url.clone())
    }
}

#[async_trait::async_trait]
impl VpcClientTrait for MockVpcClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_subnet(&self, id: &str) -> Result<Subnet, VpcError> {
        vpc::get_subnet(self, id).await
    }

    async fn list_subnets(&self, start: Option<&str>) -> Result<SubnetCollection, VpcError> {
        vpc::list_subnets(self, start).await
    }
}
