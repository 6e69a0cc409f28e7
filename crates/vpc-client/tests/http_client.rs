//! HTTP tests for the VPC and Global Tagging clients using wiremock
//!
//! These tests verify request shaping (auth, version, cursor) and response
//! handling against mocked endpoints.

use serde_json::{Value, json};
use vpc_client::{GlobalTaggingClient, TagType, VpcClient, VpcError, get_next};
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn subnet_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "crn": format!("crn:v1:bluemix:public:is:us-south-1:a/123::subnet:{}", id),
        "href": format!("https://us-south.iaas.cloud.ibm.com/v1/subnets/{}", id),
        "ipv4_cidr_block": "10.240.0.0/24",
        "available_ipv4_address_count": 249,
        "total_ipv4_address_count": 256,
        "status": "available",
        "ip_version": "ipv4",
        "created_at": "2024-03-01T10:00:00Z",
        "zone": {"name": "us-south-1", "href": "https://us-south.iaas.cloud.ibm.com/v1/regions/us-south/zones/us-south-1"},
        "vpc": {"id": "r006-vpc", "name": "prod-vpc", "crn": "crn:v1:vpc", "href": "https://x/v1/vpcs/r006-vpc"},
        "network_acl": {"id": "r006-acl", "name": "prod-acl", "href": "https://x/v1/network_acls/r006-acl"},
        "resource_group": {"id": "rg-1", "name": "Default", "href": "https://x/v2/resource_groups/rg-1"}
    })
}

mod subnet_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_subnet_sends_auth_and_version() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/subnets/0717-abc"))
            .and(bearer_token(TOKEN))
            .and(query_param("version", vpc_client::client::DEFAULT_API_VERSION))
            .and(query_param("generation", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(subnet_json("0717-abc", "web")))
            .expect(1)
            .mount(&server)
            .await;

        let client = VpcClient::new(server.uri(), TOKEN.to_string()).unwrap();
        let subnet = client.get_subnet("0717-abc").await.unwrap();

        assert_eq!(subnet.id, "0717-abc");
        assert_eq!(subnet.name, "web");
        assert_eq!(subnet.available_ipv4_address_count, 249);
        assert_eq!(subnet.vpc.name, "prod-vpc");
        assert!(subnet.public_gateway.is_none());
        assert_eq!(subnet.resource_group.unwrap().name, "Default");
    }

    #[tokio::test]
    async fn test_get_subnet_404_keeps_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/subnets/0717-missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"code": "not_found", "message": "Subnet not found"}],
                "trace": "trace-id-1"
            })))
            .mount(&server)
            .await;

        let client = VpcClient::new(server.uri(), TOKEN.to_string()).unwrap();
        let err = client.get_subnet("0717-missing").await.unwrap_err();

        match err {
            VpcError::NotFound(message) => {
                assert!(message.contains("0717-missing"));
                assert!(message.contains("trace-id-1"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_subnet_rejects_empty_id() {
        let client = VpcClient::new("http://127.0.0.1:9".to_string(), TOKEN.to_string()).unwrap();
        let err = client.get_subnet("").await.unwrap_err();
        assert!(matches!(err, VpcError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/subnets"))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
            .mount(&server)
            .await;

        let client = VpcClient::new(server.uri(), TOKEN.to_string()).unwrap();
        let err = client.list_subnets(None).await.unwrap_err();
        assert!(matches!(err, VpcError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/subnets"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = VpcClient::new(server.uri(), TOKEN.to_string()).unwrap();
        let err = client.list_subnets(None).await.unwrap_err();

        match err {
            VpcError::Api { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_subnets_follows_start_cursor() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/subnets"))
            .and(query_param("start", "0717-second"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "subnets": [subnet_json("0717-second", "db")],
                "first": {"href": format!("{}/v1/subnets?limit=1", server.uri())},
                "limit": 1,
                "total_count": 2
            })))
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/subnets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "subnets": [subnet_json("0717-first", "web")],
                "first": {"href": format!("{}/v1/subnets?limit=1", server.uri())},
                "next": {"href": format!("{}/v1/subnets?limit=1&start=0717-second", server.uri())},
                "limit": 1,
                "total_count": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = VpcClient::new(server.uri(), TOKEN.to_string()).unwrap();

        let first = client.list_subnets(None).await.unwrap();
        assert_eq!(first.subnets[0].name, "web");
        let start = get_next(first.next.as_ref());
        assert_eq!(start, "0717-second");

        let second = client.list_subnets(Some(&start)).await.unwrap();
        assert_eq!(second.subnets[0].name, "db");
        assert_eq!(get_next(second.next.as_ref()), "");
    }
}

mod tagging_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_tags_by_crn() {
        let server = MockServer::start().await;
        let crn = "crn:v1:bluemix:public:is:us-south-1:a/123::subnet:0717-abc";

        Mock::given(method("GET"))
            .and(path("/v3/tags"))
            .and(bearer_token(TOKEN))
            .and(query_param("attached_to", crn))
            .and(query_param("tag_type", "access"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 2,
                "offset": 0,
                "limit": 1000,
                "items": [{"name": "project:billing"}, {"name": "env:prod"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GlobalTaggingClient::new(server.uri(), TOKEN.to_string()).unwrap();
        let tags = client.list_tags_by_crn(crn, TagType::Access).await.unwrap();

        assert_eq!(tags, vec!["project:billing".to_string(), "env:prod".to_string()]);
    }

    #[tokio::test]
    async fn test_tagging_failure_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/tags"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let client = GlobalTaggingClient::new(server.uri(), TOKEN.to_string()).unwrap();
        let err = client.list_tags_by_crn("crn:v1:x", TagType::User).await.unwrap_err();
        assert!(matches!(err, VpcError::Api { status: 503, .. }));
    }
}

mod debug_tests {
    use super::*;

    #[test]
    fn test_client_debug_output_hides_token() {
        let vpc = VpcClient::new("https://x".to_string(), "SECRET-IAM-TOKEN".to_string()).unwrap();
        let tagging =
            GlobalTaggingClient::new("https://y".to_string(), "SECRET-IAM-TOKEN".to_string()).unwrap();

        for debug in [format!("{:?}", vpc), format!("{:?}", tagging)] {
            assert!(!debug.contains("SECRET-IAM-TOKEN"), "{debug}");
        }
    }
}
