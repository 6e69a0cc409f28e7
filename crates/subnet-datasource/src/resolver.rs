//! Subnet resolution
//!
//! A read goes `Resolving -> {Resolved, Failed}` in one sequential pass:
//! - by identifier: a single point fetch;
//! - by name: every page of the subnet collection is fetched, following the
//!   `start` cursor of each `next` link, then the records are searched in
//!   page order and the first exact name match wins.
//!
//! The resolved subnet is then mapped into [`SubnetState`]. Tag lookups are
//! the only step allowed to fail without failing the read.

use crate::error::DataSourceError;
use crate::lookup::{DataSourceConfig, LookupKey};
use crate::state::{SubnetRead, SubnetState, TagFetchWarning};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};
use vpc_client::{Subnet, TagType, TaggingClientTrait, VpcClientTrait, VpcError, get_next};

/// Path appended to the controller URL to build the dashboard link
pub const SUBNETS_DASHBOARD_PATH: &str = "/vpc-ext/network/subnets";

/// Resolves subnets and builds their state.
pub struct SubnetDataSource {
    vpc_client: Box<dyn VpcClientTrait>,
    tagging_client: Box<dyn TaggingClientTrait>,
    controller_url: String,
}

impl std::fmt::Debug for SubnetDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubnetDataSource")
            .field("vpc_url", &self.vpc_client.base_url())
            .field("controller_url", &self.controller_url)
            .finish_non_exhaustive()
    }
}

impl SubnetDataSource {
    /// Create a data source
    ///
    /// # Arguments
    /// * `vpc_client` - client for the regional VPC API
    /// * `tagging_client` - client for the Global Tagging API
    /// * `controller_url` - base console URL (e.g., "https://cloud.ibm.com")
    pub fn new(
        vpc_client: Box<dyn VpcClientTrait>,
        tagging_client: Box<dyn TaggingClientTrait>,
        controller_url: impl Into<String>,
    ) -> Self {
        Self {
            vpc_client,
            tagging_client,
            controller_url: controller_url.into(),
        }
    }

    /// Dashboard link for subnets
    pub fn dashboard_url(&self) -> String {
        format!(
            "{}{}",
            self.controller_url.trim_end_matches('/'),
            SUBNETS_DASHBOARD_PATH
        )
    }

    /// Validate the arguments, resolve the subnet and build its state
    pub async fn read(&self, config: &DataSourceConfig) -> Result<SubnetRead, DataSourceError> {
        let key = config.lookup_key()?;
        self.read_key(&key).await
    }

    /// Resolve the subnet for `key` and build its state
    pub async fn read_key(&self, key: &LookupKey) -> Result<SubnetRead, DataSourceError> {
        let subnet = self.resolve(key).await?;
        let mut warnings = Vec::new();

        let tags = self.fetch_tags(&subnet, TagType::User, &mut warnings).await;
        let access_tags = self.fetch_tags(&subnet, TagType::Access, &mut warnings).await;

        let state = SubnetState::from_subnet(&subnet, tags, access_tags, self.dashboard_url());
        info!(
            "Resolved subnet {} ({}) for {}{}",
            state.id,
            state.name,
            key,
            if warnings.is_empty() { "" } else { " with tag warnings" }
        );

        Ok(SubnetRead { state, warnings })
    }

    /// Fetch the subnet `key` refers to
    pub async fn resolve(&self, key: &LookupKey) -> Result<Subnet, DataSourceError> {
        match key {
            LookupKey::ById(id) => self
                .vpc_client
                .get_subnet(id)
                .await
                .map_err(|source| DataSourceError::Lookup {
                    key: key.clone(),
                    source,
                }),
            LookupKey::ByName(name) => {
                let subnets = self.list_all_subnets(key).await?;
                subnets
                    .into_iter()
                    .find(|subnet| subnet.name == *name)
                    .ok_or_else(|| DataSourceError::NotFound { name: name.clone() })
            }
        }
    }

    /// Fetch every page of the subnet collection
    ///
    /// A failing page aborts the scan; records from earlier pages are dropped.
    /// So does a `next` link that hands back the cursor just requested.
    async fn list_all_subnets(&self, key: &LookupKey) -> Result<Vec<Subnet>, DataSourceError> {
        let mut all_subnets = Vec::new();
        let mut start = String::new();

        loop {
            let cursor = (!start.is_empty()).then_some(start.as_str());
            let page = self
                .vpc_client
                .list_subnets(cursor)
                .await
                .map_err(|source| DataSourceError::Lookup {
                    key: key.clone(),
                    source,
                })?;

            debug!("Fetched page of {} subnets (start: {:?})", page.subnets.len(), cursor);
            let next = get_next(page.next.as_ref());
            if !next.is_empty() && next == start {
                return Err(DataSourceError::Lookup {
                    key: key.clone(),
                    source: VpcError::InvalidResponse(format!(
                        "next link repeats start cursor {}",
                        next
                    )),
                });
            }
            all_subnets.extend(page.subnets);

            if next.is_empty() {
                break;
            }
            start = next;
        }

        Ok(all_subnets)
    }

    /// Tags of one type attached to the subnet; empty on failure
    async fn fetch_tags(
        &self,
        subnet: &Subnet,
        tag_type: TagType,
        warnings: &mut Vec<TagFetchWarning>,
    ) -> BTreeSet<String> {
        match self.tagging_client.list_tags_by_crn(&subnet.crn, tag_type).await {
            Ok(tags) => tags.into_iter().collect(),
            Err(e) => {
                warn!(
                    "An error occurred during reading of subnet ({}) {} tags: {}",
                    subnet.id, tag_type, e
                );
                warnings.push(TagFetchWarning {
                    subnet_id: subnet.id.clone(),
                    crn: subnet.crn.clone(),
                    tag_type,
                    message: e.to_string(),
                });
                BTreeSet::new()
            }
        }
    }
}
