//! Subnet operations for MockVpcClient
//!
//! The `start` cursor is the identifier of the first subnet on the requested
//! page, and `next` links are built the way the VPC API builds them.

use super::{MockVpcClient, lock};
use crate::error::VpcError;
use crate::models::*;

pub async fn get_subnet(client: &MockVpcClient, id: &str) -> Result<Subnet, VpcError> {
    lock(&client.get_requests).push(id.to_string());

    if let Some((status, body)) = lock(&client.fail_get).clone() {
        return Err(VpcError::Api { status, body });
    }

    lock(&client.subnets)
        .iter()
        .find(|subnet| subnet.id == id)
        .cloned()
        .ok_or_else(|| {
            VpcError::NotFound(format!(
                "/v1/subnets/{} - {{\"errors\":[{{\"code\":\"not_found\",\"message\":\"Subnet not found\"}}]}}",
                id
            ))
        })
}

pub async fn list_subnets(
    client: &MockVpcClient,
    start: Option<&str>,
) -> Result<SubnetCollection, VpcError> {
    lock(&client.list_requests).push(start.map(str::to_string));

    let subnets = lock(&client.subnets);
    let offset = match start {
        None => 0,
        Some(cursor) => subnets
            .iter()
            .position(|subnet| subnet.id == cursor)
            .ok_or_else(|| VpcError::Api {
                status: 400,
                body: format!("invalid start cursor: {}", cursor),
            })?,
    };

    let page_index = offset / client.page_size;
    if *lock(&client.fail_list_page) == Some(page_index) {
        return Err(VpcError::Api {
            status: 500,
            body: format!("internal error while listing page {}", page_index),
        });
    }

    let end = (offset + client.page_size).min(subnets.len());
    let page: Vec<Subnet> = subnets[offset..end].to_vec();
    let next = subnets.get(end).map(|first_of_next| PageLink {
        href: format!(
            "{}/v1/subnets?limit={}&start={}",
            client.base_url,
            client.page_size,
            urlencoding::encode(&first_of_next.id)
        ),
    });

    Ok(SubnetCollection {
        subnets: page,
        first: Some(PageLink {
            href: format!("{}/v1/subnets?limit={}", client.base_url, client.page_size),
        }),
        next,
        limit: u32::try_from(client.page_size).unwrap_or(u32::MAX),
        total_count: subnets.len() as u64,
    })
}
