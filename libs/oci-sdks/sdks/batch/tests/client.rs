#![allow(clippy::unwrap_used, clippy::expect_used, clippy::use_debug)]

//! Batch client over the scripted transport and a local mock server.

use futures_util::{StreamExt, TryStreamExt};
use httpmock::prelude::*;
use oci_batch::{
    BatchServiceClient, CreateJobDetails, CreateJobRequest, DeleteJobRequest, ENDPOINT,
    GetJobLogContentRequest, GetJobRequest, JobLifecycleState, ListComputeEnvironmentsRequest,
    ListJobsRequest,
};
use oci_common::testing::StubTransport;
use oci_common::{
    BaseClient, ClientConfig, ExponentialBackoff, OciError, Region, RequestMetadata, RetryPolicy,
    StaticConfigurationProvider, TransportConfig,
};
use serde_json::json;
use std::sync::Arc;

const COMPARTMENT: &str = "ocid1.compartment.oc1..aaaa";

fn client(stub: &Arc<StubTransport>) -> BatchServiceClient {
    let base = BaseClient::builder(ENDPOINT)
        .region(Region::parse("us-phoenix-1"))
        .transport(stub.clone())
        .build()
        .unwrap();
    BatchServiceClient::from_base(base)
}

fn fast_retries(max_attempts: u32) -> RequestMetadata {
    RequestMetadata::with_retry_policy(
        RetryPolicy::with_max_attempts(max_attempts).backoff(ExponentialBackoff::fast()),
    )
}

fn list_jobs() -> ListJobsRequest {
    ListJobsRequest {
        compartment_id: Some(COMPARTMENT.to_owned()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_get_job_decodes_resource_and_etag() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[("etag", "v3"), ("opc-request-id", "req-1")],
        &json!({"id": "ocid1.job.xyz", "lifecycleState": "SUCCEEDED"}),
    );

    let response = client(&stub)
        .get_job(GetJobRequest::new("ocid1.job.xyz"))
        .await
        .unwrap();

    assert_eq!(response.resource.id.as_deref(), Some("ocid1.job.xyz"));
    assert_eq!(
        response.resource.lifecycle_state,
        Some(JobLifecycleState::Succeeded)
    );
    assert_eq!(response.etag.as_deref(), Some("v3"));
    assert_eq!(response.opc_request_id.as_deref(), Some("req-1"));

    let sent = &stub.requests()[0];
    assert_eq!(sent.method, "GET");
    assert_eq!(
        sent.uri.to_string(),
        "https://batch.us-phoenix-1.oci.oraclecloud.com/20180628/jobs/ocid1.job.xyz"
    );
    assert_eq!(stub.bodies_dropped(), 1);
}

#[tokio::test]
async fn test_unknown_lifecycle_state_is_kept_verbatim() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[],
        &json!({"id": "ocid1.job.xyz", "lifecycleState": "HIBERNATING"}),
    );

    let job = client(&stub)
        .get_job(GetJobRequest::new("ocid1.job.xyz"))
        .await
        .unwrap()
        .resource;

    let state = job.lifecycle_state.unwrap();
    assert!(state.is_unknown());
    assert_eq!(state.as_str(), "HIBERNATING");
}

#[tokio::test]
async fn test_empty_job_id_fails_without_sending() {
    let stub = StubTransport::new();

    let err = client(&stub)
        .get_job(GetJobRequest::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, OciError::MissingParameter { name: "jobId" }));
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn test_create_job_reuses_generated_token_across_retries() {
    let stub = StubTransport::new();
    stub.push_json(503, &[], &json!({"code": "ServiceUnavailable", "message": "busy"}));
    stub.push_transport_error("connection reset");
    stub.push_json(200, &[], &json!({"id": "ocid1.job.new"}));

    let request = CreateJobRequest {
        metadata: fast_retries(5),
        ..CreateJobRequest::new(CreateJobDetails {
            compute_environment_id: "ocid1.ce.oc1..c".to_owned(),
            job_definition_id: "ocid1.jd.oc1..d".to_owned(),
            batch_instance_id: "ocid1.bi.oc1..b".to_owned(),
            ..Default::default()
        })
    };

    let created = client(&stub).create_job(request).await.unwrap();
    assert_eq!(created.resource.id.as_deref(), Some("ocid1.job.new"));

    let requests = stub.requests();
    assert_eq!(requests.len(), 3);
    let token = requests[0].header("opc-retry-token").unwrap().to_owned();
    assert!(!token.is_empty());
    for request in &requests {
        assert_eq!(request.header("opc-retry-token"), Some(token.as_str()));
        assert_eq!(request.method, "POST");
    }
    assert_eq!(stub.bodies_dropped(), stub.bodies_created());
}

#[tokio::test]
async fn test_exhausted_retries_return_last_service_error() {
    let stub = StubTransport::new();
    for id in ["r1", "r2", "r3"] {
        stub.push_json(
            500,
            &[("opc-request-id", id)],
            &json!({"code": "InternalError", "message": "boom"}),
        );
    }

    let request = DeleteJobRequest {
        metadata: fast_retries(3),
        ..DeleteJobRequest::new("ocid1.job.xyz")
    };
    let err = client(&stub).delete_job(request).await.unwrap_err();

    let OciError::Service(service) = err else {
        panic!("expected service error, got {err:?}");
    };
    assert_eq!(service.code, "InternalError");
    assert_eq!(service.metadata.opc_request_id.as_deref(), Some("r3"));
    assert_eq!(stub.request_count(), 3);
    assert_eq!(stub.bodies_dropped(), 3);
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let stub = StubTransport::new();
    stub.push_json(
        404,
        &[],
        &json!({"code": "NotAuthorizedOrNotFound", "message": "missing"}),
    );
    stub.push_json(200, &[], &json!({}));

    let request = GetJobRequest {
        metadata: fast_retries(4),
        ..GetJobRequest::new("ocid1.job.gone")
    };
    let err = client(&stub).get_job(request).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(stub.request_count(), 1);
    assert_eq!(stub.pending(), 1);
}

#[tokio::test]
async fn test_pages_follow_next_page_token_verbatim() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[("opc-next-page", "eyJvZmZzZXQiOjJ9+/=")],
        &json!({"items": [{"id": "j1"}, {"id": "j2"}]}),
    );
    stub.push_json(200, &[], &json!({"items": [{"id": "j3"}]}));

    let pages: Vec<_> = client(&stub)
        .list_jobs_pages(list_jobs())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].items.len(), 2);
    assert_eq!(pages[1].opc_next_page, None);

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].query_pairs().iter().all(|(k, _)| k != "page"));
    let page = requests[1]
        .query_pairs()
        .into_iter()
        .find(|(k, _)| k == "page")
        .map(|(_, v)| v);
    assert_eq!(page.as_deref(), Some("eyJvZmZzZXQiOjJ9+/="));
    assert!(
        requests[1]
            .query_pairs()
            .contains(&("compartmentId".to_owned(), COMPARTMENT.to_owned()))
    );
}

#[tokio::test]
async fn test_items_flatten_pages_and_stop_after_error() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[("opc-next-page", "p2")],
        &json!([{"id": "j1"}, {"id": "j2"}]),
    );
    stub.push_json(429, &[], &json!({"code": "TooManyRequests", "message": "slow down"}));
    stub.push_json(200, &[], &json!([{"id": "never"}]));

    let results: Vec<_> = client(&stub).list_jobs_items(list_jobs()).collect().await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().id.as_deref(), Some("j1"));
    assert_eq!(results[1].as_ref().unwrap().id.as_deref(), Some("j2"));
    assert!(matches!(results[2], Err(OciError::Service(_))));
    assert_eq!(stub.pending(), 1);
}

#[tokio::test]
async fn test_empty_list_body_yields_no_items() {
    let stub = StubTransport::new();
    stub.push_empty(200, &[]);

    let items: Vec<_> = client(&stub)
        .list_jobs_items(list_jobs())
        .try_collect()
        .await
        .unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_log_content_is_streamed_to_the_caller() {
    let stub = StubTransport::new();
    stub.push_body(
        200,
        &[("content-type", "text/plain"), ("content-length", "12")],
        "line1\nline2\n",
    );

    let response = client(&stub)
        .get_job_log_content(GetJobLogContentRequest::new("ocid1.job.xyz", "ocid1.log.1"))
        .await
        .unwrap();

    assert_eq!(response.content_type.as_deref(), Some("text/plain"));
    assert_eq!(response.content_length, Some(12));
    assert_eq!(stub.bodies_dropped(), 0);

    let content = response.body.bytes().await.unwrap();
    assert_eq!(content.as_ref(), b"line1\nline2\n");
    assert_eq!(stub.bodies_dropped(), 1);
    assert_eq!(
        stub.requests()[0].uri.path(),
        "/20180628/jobs/ocid1.job.xyz/logs/ocid1.log.1/content"
    );
}

#[tokio::test]
async fn test_set_region_and_endpoint_change_the_host() {
    let stub = StubTransport::new();
    stub.push_json(200, &[], &json!({}));
    stub.push_json(200, &[], &json!({}));

    let mut batch = client(&stub);
    batch.set_region(&Region::parse("fra"));
    batch.get_job(GetJobRequest::new("j")).await.unwrap();
    batch.set_endpoint("https://batch.example.test");
    batch.get_job(GetJobRequest::new("j")).await.unwrap();

    let requests = stub.requests();
    assert_eq!(
        requests[0].uri.host(),
        Some("batch.eu-frankfurt-1.oci.oraclecloud.com")
    );
    assert_eq!(requests[1].uri.host(), Some("batch.example.test"));
}

#[tokio::test]
async fn test_compute_environments_listed_by_compartment_only() {
    let stub = StubTransport::new();
    stub.push_json(200, &[], &json!({"items": [{"id": "ce-1"}]}));

    let page = client(&stub)
        .list_compute_environments(ListComputeEnvironmentsRequest {
            compartment_id: Some(COMPARTMENT.to_owned()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(stub.request_count(), 1);
    assert_eq!(
        stub.requests()[0].uri.query(),
        Some(format!("compartmentId={COMPARTMENT}").as_str())
    );
}

#[tokio::test]
async fn test_with_configuration_provider_uses_provider_region() {
    let provider = StaticConfigurationProvider::new(
        "ocid1.tenancy.oc1..t",
        "ocid1.user.oc1..u",
        "aa:bb",
        Region::parse("iad"),
    );

    let batch = BatchServiceClient::with_configuration_provider(Arc::new(provider)).unwrap();

    assert_eq!(
        batch.base().host(),
        "https://batch.us-ashburn-1.oci.oraclecloud.com"
    );
}

#[test]
fn test_with_configuration_provider_outside_runtime_is_config_error() {
    let provider = StaticConfigurationProvider::new(
        "ocid1.tenancy.oc1..t",
        "ocid1.user.oc1..u",
        "aa:bb",
        Region::parse("iad"),
    );

    let result = BatchServiceClient::with_configuration_provider(Arc::new(provider));

    assert!(matches!(result, Err(OciError::Config(_))));
}

#[tokio::test]
async fn test_list_jobs_against_mock_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/20180628/jobs")
            .query_param("compartmentId", COMPARTMENT)
            .query_param("lifecycleState", "IN_PROGRESS");
        then.status(200)
            .header("opc-request-id", "mock-req")
            .json_body(json!({"items": [{"id": "j1", "lifecycleState": "IN_PROGRESS"}]}));
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
    let batch = BatchServiceClient::from_base(base);

    let response = batch
        .list_jobs(ListJobsRequest {
            lifecycle_state: Some(JobLifecycleState::InProgress),
            ..list_jobs()
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.opc_request_id.as_deref(), Some("mock-req"));
    assert_eq!(response.items[0].id.as_deref(), Some("j1"));
}
