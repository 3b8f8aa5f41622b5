#![allow(clippy::unwrap_used, clippy::expect_used)]

use futures_util::TryStreamExt;
use httpmock::prelude::*;
use oci_common::testing::StubTransport;
use oci_common::{BaseClient, ClientConfig, OciError, Region, SortOrder, TransportConfig};
use oci_datacatalog::{
    CreateJobExecutionDetails, CreateJobExecutionRequest, DataCatalogClient, DeleteCatalogRequest,
    ENDPOINT, EntityFields, GetJobDefinitionRequest, JobExecutionState, JobType,
    ListCatalogPermissionsRequest, ListEntitiesRequest, LifecycleState, SearchCriteria,
    SearchCriteriaRequest, SortBy,
};
use serde_json::json;
use std::sync::Arc;

const CATALOG: &str = "ocid1.datacatalog.oc1..cat";

fn client(stub: &Arc<StubTransport>) -> DataCatalogClient {
    let base = BaseClient::builder(ENDPOINT)
        .region(Region::parse("phx"))
        .transport(stub.clone())
        .build()
        .unwrap();
    DataCatalogClient::from_base(base)
}

#[tokio::test]
async fn test_entities_send_repeated_fields_and_follow_pages() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[("opc-next-page", "p2")],
        &json!({"items": [{"key": "e1", "lifecycleState": "ACTIVE"}], "count": 2}),
    );
    stub.push_json(200, &[], &json!({"items": [{"key": "e2"}], "count": 2}));

    let keys: Vec<_> = client(&stub)
        .list_entities_items(ListEntitiesRequest {
            fields: Some(vec![EntityFields::Key, EntityFields::LifecycleState]),
            sort_by: Some(SortBy::DisplayName),
            sort_order: Some(SortOrder::Desc),
            ..ListEntitiesRequest::new(CATALOG, "asset1")
        })
        .map_ok(|entity| entity.key.unwrap_or_default())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(keys, ["e1", "e2"]);
    let requests = stub.requests();
    assert_eq!(
        requests[0].uri.to_string(),
        format!(
            "https://datacatalog.us-phoenix-1.oci.oraclecloud.com/20190325/catalogs/{CATALOG}/dataAssets/asset1/entities?fields=key&fields=lifecycleState&sortBy=DISPLAYNAME&sortOrder=DESC"
        )
    );
    let fields: Vec<_> = requests[1]
        .query_pairs()
        .into_iter()
        .filter(|(k, _)| k == "fields")
        .map(|(_, v)| v)
        .collect();
    assert_eq!(fields, ["key", "lifecycleState"]);
}

#[tokio::test]
async fn test_permissions_decode_bare_array() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[],
        &json!([{"catalogId": CATALOG, "userPermissions": ["READ", "WRITE"]}]),
    );

    let response = client(&stub)
        .list_catalog_permissions(ListCatalogPermissionsRequest::new(CATALOG))
        .await
        .unwrap();

    assert_eq!(
        response.items[0].user_permissions.as_deref(),
        Some(&["READ".to_owned(), "WRITE".to_owned()][..])
    );
}

#[tokio::test]
async fn test_job_definition_and_execution() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[],
        &json!({"key": "jd1", "jobType": "HARVEST", "sampleDataSizeInMBs": 5}),
    );
    stub.push_json(
        200,
        &[],
        &json!({"key": "ex1", "jobKey": "job1", "lifecycleState": "IN_PROGRESS"}),
    );
    let client = client(&stub);

    let definition = client
        .get_job_definition(GetJobDefinitionRequest::new(CATALOG, "jd1"))
        .await
        .unwrap()
        .resource;
    let execution = client
        .create_job_execution(CreateJobExecutionRequest::new(
            CATALOG,
            "job1",
            CreateJobExecutionDetails {
                job_type: Some(JobType::Harvest),
                ..Default::default()
            },
        ))
        .await
        .unwrap()
        .resource;

    assert_eq!(definition.job_type, Some(JobType::Harvest));
    assert_eq!(definition.sample_data_size_in_mbs, Some(5));
    assert_eq!(execution.lifecycle_state, Some(JobExecutionState::InProgress));

    let sent = &stub.requests()[1];
    assert_eq!(
        sent.uri.path(),
        format!("/20190325/catalogs/{CATALOG}/jobs/job1/executions")
    );
    assert!(sent.header("opc-retry-token").is_some());
    let body: serde_json::Value = serde_json::from_slice(&sent.body).unwrap();
    assert_eq!(body, json!({"jobType": "HARVEST"}));
}

#[tokio::test]
async fn test_delete_catalog_conflict_keeps_request_id() {
    let stub = StubTransport::new();
    stub.push_json(
        409,
        &[("opc-request-id", "del-9")],
        &json!({"code": "IncorrectState", "message": "catalog is being updated"}),
    );

    let err = client(&stub)
        .delete_catalog(DeleteCatalogRequest {
            if_match: Some("c-1".to_owned()),
            ..DeleteCatalogRequest::new(CATALOG)
        })
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(409));
    assert_eq!(err.opc_request_id(), Some("del-9"));
    assert!(matches!(err, OciError::Service(ref s) if s.code == "IncorrectState"));
    assert_eq!(stub.request_count(), 1);
}

#[tokio::test]
async fn test_search_against_mock_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/20190325/catalogs/{CATALOG}/search"))
            .query_param("lifecycleState", "ACTIVE")
            .json_body(json!({"query": "customer"}));
        then.status(200).json_body(json!({
            "count": 1,
            "items": [{"key": "r1", "name": "CUSTOMERS", "entitykey": "e1", "typeName": "Table"}]
        }));
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

    let results: Vec<_> = DataCatalogClient::from_base(base)
        .search_criteria_items(SearchCriteriaRequest {
            lifecycle_state: Some(LifecycleState::Active),
            ..SearchCriteriaRequest::new(CATALOG, SearchCriteria::query("customer"))
        })
        .try_collect()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entity_key.as_deref(), Some("e1"));
    assert_eq!(results[0].type_name.as_deref(), Some("Table"));
}
