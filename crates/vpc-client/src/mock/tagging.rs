//! Tag operations for tests
//!
//! Tags are stored per (CRN, tag type). A tag type can be switched into a
//! failing state to exercise the non-fatal tag path.

use super::lock;
use crate::error::VpcError;
use crate::models::TagType;
use crate::vpc_trait::TaggingClientTrait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock Global Tagging client for testing
#[derive(Debug, Clone, Default)]
pub struct MockTaggingClient {
    tags: Arc<Mutex<HashMap<(String, TagType), Vec<String>>>>,
    failing: Arc<Mutex<HashSet<TagType>>>,
    requests: Arc<Mutex<Vec<(String, TagType)>>>,
}

impl MockTaggingClient {
    /// Create an empty mock tagging client
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach tags of `tag_type` to `crn` (for test setup)
    pub fn set_tags<I, S>(&self, crn: &str, tag_type: TagType, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lock(&self.tags).insert(
            (crn.to_string(), tag_type),
            tags.into_iter().map(Into::into).collect(),
        );
    }

    /// Make every lookup of `tag_type` fail
    pub fn fail_tag_type(&self, tag_type: TagType) {
        lock(&self.failing).insert(tag_type);
    }

    /// (CRN, tag type) pairs requested so far, in call order
    pub fn requests(&self) -> Vec<(String, TagType)> {
        lock(&self.requests).clone()
    }
}

#[async_trait::async_trait]
impl TaggingClientTrait for MockTaggingClient {
    async fn list_tags_by_crn(&self, crn: &str, tag_type: TagType) -> Result<Vec<String>, VpcError> {
        lock(&self.requests).push((crn.to_string(), tag_type));

        if lock(&self.failing).contains(&tag_type) {
            return Err(VpcError::Api {
                status: 503,
                body: format!("tagging service unavailable for {} tags", tag_type),
            });
        }

        Ok(lock(&self.tags)
            .get(&(crn.to_string(), tag_type))
            .cloned()
            .unwrap_or_default())
    }
}
