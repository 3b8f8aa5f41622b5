#![allow(clippy::unwrap_used, clippy::expect_used, clippy::use_debug)]

use futures_util::TryStreamExt;
use httpmock::prelude::*;
use oci_common::testing::StubTransport;
use oci_common::{BaseClient, ClientConfig, OciError, Region, TransportConfig};
use oci_storagegateway::{
    ConnectFileSystemRequest, CreateFileSystemDetails, CreateFileSystemRequest, ENDPOINT,
    FileSystemStorageTier, GetStorageGatewayHealthRequest, HealthStatus, ListFileSystemsRequest,
    ListStorageGatewaysRequest, StorageGatewayClient, UpdateCloudSyncDetails,
    UpdateCloudSyncRequest,
};
use serde_json::json;
use std::sync::Arc;

const GATEWAY: &str = "ocid1.storagegateway.oc1..g";

fn client(stub: &Arc<StubTransport>) -> StorageGatewayClient {
    let base = BaseClient::builder(ENDPOINT)
        .region(Region::parse("lhr"))
        .transport(stub.clone())
        .build()
        .unwrap();
    StorageGatewayClient::from_base(base)
}

#[tokio::test]
async fn test_host_uses_dashed_service_name() {
    let stub = StubTransport::new();
    stub.push_json(200, &[], &json!({"status": "WARNING", "version": "2.1"}));

    let health = client(&stub)
        .get_storage_gateway_health(GetStorageGatewayHealthRequest::new(GATEWAY))
        .await
        .unwrap();

    assert_eq!(health.resource.status, Some(HealthStatus::Warning));
    assert_eq!(
        stub.requests()[0].uri.to_string(),
        format!("https://storage-gateway.uk-london-1.oci.oraclecloud.com/20190101/storageGateways/{GATEWAY}/health")
    );
}

#[tokio::test]
async fn test_create_file_system_sends_token_and_body() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[("etag", "fs-1")],
        &json!({"name": "share1", "storageTier": "STANDARD", "lifecycleState": "CREATING"}),
    );

    let created = client(&stub)
        .create_file_system(CreateFileSystemRequest::new(
            GATEWAY,
            CreateFileSystemDetails {
                name: "share1".to_owned(),
                storage_tier: FileSystemStorageTier::Standard,
                nfs_allowed_hosts: Some("10.0.0.0/24".to_owned()),
                ..Default::default()
            },
        ))
        .await
        .unwrap();

    assert_eq!(created.etag.as_deref(), Some("fs-1"));
    let sent = &stub.requests()[0];
    assert!(sent.header("opc-retry-token").is_some_and(|t| !t.is_empty()));
    assert_eq!(sent.header("content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&sent.body).unwrap();
    assert_eq!(
        body,
        json!({"name": "share1", "storageTier": "STANDARD", "nfsAllowedHosts": "10.0.0.0/24"})
    );
}

#[tokio::test]
async fn test_action_returns_work_request_id() {
    let stub = StubTransport::new();
    stub.push_empty(202, &[("opc-work-request-id", "wr-9")]);

    let response = client(&stub)
        .connect_file_system(ConnectFileSystemRequest {
            if_match: Some("fs-1".to_owned()),
            ..ConnectFileSystemRequest::new(GATEWAY, "share1")
        })
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 202);
    assert_eq!(response.opc_work_request_id.as_deref(), Some("wr-9"));
    assert_eq!(stub.requests()[0].header("if-match"), Some("fs-1"));
}

#[tokio::test]
async fn test_update_cloud_sync_conflict_surfaces_service_error() {
    let stub = StubTransport::new();
    stub.push_json(
        412,
        &[("opc-request-id", "conflict-1")],
        &json!({"code": "PreconditionFailed", "message": "etag mismatch"}),
    );

    let err = client(&stub)
        .update_cloud_sync(UpdateCloudSyncRequest {
            if_match: Some("stale".to_owned()),
            ..UpdateCloudSyncRequest::new(
                GATEWAY,
                "nightly",
                UpdateCloudSyncDetails {
                    is_auto_deletion_enabled: Some(true),
                    ..Default::default()
                },
            )
        })
        .await
        .unwrap_err();

    let OciError::Service(service) = err else {
        panic!("expected service error, got {err:?}");
    };
    assert_eq!(service.status.as_u16(), 412);
    assert_eq!(service.code, "PreconditionFailed");
    assert_eq!(service.metadata.opc_request_id.as_deref(), Some("conflict-1"));
}

#[tokio::test]
async fn test_file_system_pages_keep_prev_page_cursor() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[("opc-next-page", "n1")],
        &json!([{"name": "a"}, {"name": "b"}]),
    );
    stub.push_json(
        200,
        &[("opc-prev-page", "n1-prev")],
        &json!([{"name": "c"}]),
    );

    let pages: Vec<_> = client(&stub)
        .list_file_systems_pages(ListFileSystemsRequest::new(GATEWAY))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].opc_prev_page.as_deref(), Some("n1-prev"));
    let names: Vec<_> = pages
        .into_iter()
        .flat_map(|p| p.items)
        .filter_map(|fs| fs.name)
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_list_gateways_against_mock_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/20190101/storageGateways")
            .query_param("compartmentId", "ocid1.compartment.oc1..c")
            .query_param("limit", "10");
        then.status(200)
            .json_body(json!({"items": [{"id": GATEWAY, "lifecycleState": "ACTIVE"}]}));
    });

    let base = BaseClient::builder(ENDPOINT)
        .config(&ClientConfig {
            endpoint: Some(server.base_url()),
            transport: TransportConfig {
                allow_insecure_http: true,
                ..TransportConfig::default()
            },
            ..ClientConfig::default()
        })
        .build()
        .unwrap();

    let gateways: Vec<_> = StorageGatewayClient::from_base(base)
        .list_storage_gateways_items(ListStorageGatewaysRequest {
            limit: Some(10),
            ..ListStorageGatewaysRequest::new("ocid1.compartment.oc1..c")
        })
        .try_collect()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(gateways.len(), 1);
    assert_eq!(gateways[0].id.as_deref(), Some(GATEWAY));
}
