#![allow(clippy::unwrap_used, clippy::expect_used, clippy::use_debug)]

//! hyper transport against a local mock server.

use bytes::Bytes;
use httpmock::prelude::*;
use oci_common::{HttpTransport, HyperTransport, OciError, RawResponse, TransportConfig};
use std::time::Duration;

fn insecure_transport() -> HyperTransport {
    // Surfaces the insecure-http warning in test output.
    tracing_subscriber::fmt().with_test_writer().try_init().ok();
    HyperTransport::new(&TransportConfig {
        allow_insecure_http: true,
        ..TransportConfig::default()
    })
    .unwrap()
}

fn get(url: String) -> http::Request<Bytes> {
    http::Request::get(url).body(Bytes::new()).unwrap()
}

fn gzip_compress(data: &[u8]) -> Vec<u8> {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

#[tokio::test]
async fn test_send_returns_response_and_sets_user_agent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/20180628/jobs/ocid1.batchjob.oc1..x")
            .header("user-agent", oci_common::DEFAULT_USER_AGENT);
        then.status(200)
            .header("opc-request-id", "req-1")
            .json_body(serde_json::json!({"id": "ocid1.batchjob.oc1..x"}));
    });

    let transport = insecure_transport();
    let resp = transport
        .send(get(server.url("/20180628/jobs/ocid1.batchjob.oc1..x")))
        .await
        .unwrap();

    mock.assert();
    let raw = RawResponse::new(resp, 1024);
    assert_eq!(raw.header("opc-request-id").as_deref(), Some("req-1"));
    let value: serde_json::Value = raw.json().await.unwrap();
    assert_eq!(value["id"], "ocid1.batchjob.oc1..x");
}

#[tokio::test]
async fn test_error_status_is_not_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404)
            .header("opc-request-id", "req-404")
            .json_body(serde_json::json!({"code": "NotAuthorizedOrNotFound", "message": "gone"}));
    });

    let resp = insecure_transport()
        .send(get(server.url("/missing")))
        .await
        .unwrap();
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let err = RawResponse::new(resp, 1024).into_service_error().await;
    match err {
        OciError::Service(service) => {
            assert_eq!(service.code, "NotAuthorizedOrNotFound");
            assert_eq!(service.metadata.opc_request_id.as_deref(), Some("req-404"));
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_gzip_body_is_decompressed() {
    let server = MockServer::start();
    let original = br#"{"items":[]}"#;
    server.mock(|when, then| {
        when.method(GET).path("/gzip");
        then.status(200)
            .header("content-encoding", "gzip")
            .body(gzip_compress(original));
    });

    let resp = insecure_transport()
        .send(get(server.url("/gzip")))
        .await
        .unwrap();
    let body = RawResponse::new(resp, 1024).bytes().await.unwrap();
    assert_eq!(body.as_ref(), original);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200).delay(Duration::from_millis(500));
    });

    let transport = HyperTransport::new(&TransportConfig {
        allow_insecure_http: true,
        request_timeout: Duration::from_millis(50),
        ..TransportConfig::default()
    })
    .unwrap();

    let err = transport.send(get(server.url("/slow"))).await.unwrap_err();
    assert!(matches!(err, OciError::Timeout(d) if d == Duration::from_millis(50)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let transport = insecure_transport();
    let err = transport
        .send(get("http://127.0.0.1:1/unreachable".to_owned()))
        .await
        .unwrap_err();
    assert!(matches!(err, OciError::Transport(_)), "got {err:?}");
}
