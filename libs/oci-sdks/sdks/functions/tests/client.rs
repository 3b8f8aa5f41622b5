#![allow(clippy::unwrap_used, clippy::expect_used)]

use futures_util::TryStreamExt;
use httpmock::prelude::*;
use oci_common::testing::StubTransport;
use oci_common::{
    BaseClient, ClientConfig, ExponentialBackoff, Region, RequestMetadata, RetryPolicy, SortOrder,
    TransportConfig,
};
use oci_functions::{
    CreateTriggerDetails, CreateTriggerRequest, DeleteFunctionRequest, ENDPOINT,
    FunctionLifecycleState, FunctionsManagementClient, GetFunctionRequest,
    ListApplicationsRequest, ListFunctionsRequest, ListSortBy, TriggerType,
};
use serde_json::json;
use std::sync::Arc;

const APPLICATION: &str = "ocid1.fnapp.oc1..app";
const FUNCTION: &str = "ocid1.fnfunc.oc1..fn";

fn client(stub: &Arc<StubTransport>) -> FunctionsManagementClient {
    let base = BaseClient::builder(ENDPOINT)
        .region(Region::parse("fra"))
        .transport(stub.clone())
        .build()
        .unwrap();
    FunctionsManagementClient::from_base(base)
}

#[tokio::test]
async fn test_host_has_no_oci_segment() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[("etag", "f-1")],
        &json!({"id": FUNCTION, "lifecycleState": "ACTIVE", "memoryInMBs": 128}),
    );

    let function = client(&stub)
        .get_function(GetFunctionRequest::new(FUNCTION))
        .await
        .unwrap();

    assert_eq!(
        function.resource.lifecycle_state,
        Some(FunctionLifecycleState::Active)
    );
    assert_eq!(function.resource.memory_in_mbs, Some(128));
    assert_eq!(
        stub.requests()[0].uri.to_string(),
        format!("https://functions.eu-frankfurt-1.oraclecloud.com/20181201/functions/{FUNCTION}")
    );
}

#[tokio::test]
async fn test_get_function_reuses_retry_token_across_attempts() {
    let stub = StubTransport::new();
    stub.push_json(503, &[], &json!({"code": "ServiceUnavailable", "message": "busy"}));
    stub.push_json(200, &[], &json!({"id": FUNCTION}));

    client(&stub)
        .get_function(GetFunctionRequest {
            metadata: RequestMetadata::with_retry_policy(
                RetryPolicy::with_max_attempts(3).backoff(ExponentialBackoff::fast()),
            ),
            ..GetFunctionRequest::new(FUNCTION)
        })
        .await
        .unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    let first = requests[0].header("opc-retry-token").unwrap();
    assert!(!first.is_empty());
    assert_eq!(requests[1].header("opc-retry-token"), Some(first));
}

#[tokio::test]
async fn test_delete_function_sends_if_match() {
    let stub = StubTransport::new();
    stub.push_empty(204, &[("opc-request-id", "del-1")]);

    let response = client(&stub)
        .delete_function(DeleteFunctionRequest {
            if_match: Some("f-1".to_owned()),
            ..DeleteFunctionRequest::new(FUNCTION)
        })
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 204);
    assert_eq!(response.opc_request_id.as_deref(), Some("del-1"));
    let sent = &stub.requests()[0];
    assert_eq!(sent.method, "DELETE");
    assert_eq!(sent.header("if-match"), Some("f-1"));
    assert!(sent.body.is_empty());
}

#[tokio::test]
async fn test_create_http_trigger() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[],
        &json!({"id": "ocid1.fntrigger.oc1..t", "type": "HTTP", "endpoint": "https://x/hook"}),
    );

    let trigger = client(&stub)
        .create_trigger(CreateTriggerRequest::new(CreateTriggerDetails::http(
            "hook", FUNCTION,
        )))
        .await
        .unwrap();

    assert_eq!(trigger.resource.trigger_type, Some(TriggerType::Http));
    let sent = &stub.requests()[0];
    assert_eq!(sent.uri.path(), "/20181201/triggers");
    let body: serde_json::Value = serde_json::from_slice(&sent.body).unwrap();
    assert_eq!(body["type"], "HTTP");
    assert_eq!(body["functionId"], FUNCTION);
}

#[tokio::test]
async fn test_list_functions_follows_pages_with_filters() {
    let stub = StubTransport::new();
    stub.push_json(200, &[("opc-next-page", "p2")], &json!([{"id": "f1"}]));
    stub.push_json(200, &[], &json!([{"id": "f2"}]));

    let ids: Vec<_> = client(&stub)
        .list_functions_items(ListFunctionsRequest {
            sort_by: Some(ListSortBy::DisplayName),
            sort_order: Some(SortOrder::Asc),
            ..ListFunctionsRequest::new(APPLICATION)
        })
        .try_collect::<Vec<_>>()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|f| f.id)
        .collect();

    assert_eq!(ids, ["f1", "f2"]);
    let requests = stub.requests();
    let second = requests[1].query_pairs();
    assert!(second.contains(&("applicationId".to_owned(), APPLICATION.to_owned())));
    assert!(second.contains(&("sortBy".to_owned(), "displayName".to_owned())));
    assert!(second.contains(&("page".to_owned(), "p2".to_owned())));
}

#[tokio::test]
async fn test_list_applications_against_mock_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/20181201/applications")
            .query_param("compartmentId", "ocid1.compartment.oc1..c");
        then.status(200)
            .header("opc-request-id", "list-1")
            .json_body(json!([{"id": APPLICATION, "lifecycleState": "ACTIVE"}]));
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

    let page = FunctionsManagementClient::from_base(base)
        .list_applications(ListApplicationsRequest::new("ocid1.compartment.oc1..c"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(page.opc_request_id.as_deref(), Some("list-1"));
    assert_eq!(page.items[0].id.as_deref(), Some(APPLICATION));
    assert!(page.opc_next_page.is_none());
}
