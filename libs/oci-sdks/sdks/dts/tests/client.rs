#![allow(clippy::unwrap_used, clippy::expect_used, clippy::use_debug)]

use futures_util::TryStreamExt;
use httpmock::prelude::*;
use oci_common::testing::StubTransport;
use oci_common::{BaseClient, ClientConfig, Region, TransportConfig};
use oci_dts::{
    ChangeTransferJobCompartmentRequest, CreateTransferApplianceDetails,
    CreateTransferApplianceRequest, CreateTransferDeviceRequest, DeviceType, ENDPOINT,
    ListTransferApplianceEntitlementRequest, ListTransferAppliancesRequest,
    ListTransferJobsRequest, ShippingAddress, TransferApplianceClient,
    TransferApplianceEntitlementClient, TransferApplianceLifecycleState, TransferDeviceClient,
    TransferDeviceLifecycleState, TransferJobClient, TransferJobLifecycleState,
};
use serde_json::json;
use std::sync::Arc;

const JOB: &str = "ocid1.datatransferjob.oc1..job";
const COMPARTMENT: &str = "ocid1.compartment.oc1..c";

fn base(stub: &Arc<StubTransport>) -> BaseClient {
    BaseClient::builder(ENDPOINT)
        .region(Region::parse("iad"))
        .transport(stub.clone())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_transfer_jobs_paginate_on_host_without_oci_segment() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[("opc-next-page", "2")],
        &json!([{"id": "j1", "deviceType": "DISK", "lifecycleState": "PREPARING"}]),
    );
    stub.push_json(200, &[], &json!([{"id": "j2", "lifecycleState": "CLOSED"}]));

    let jobs: Vec<_> = TransferJobClient::from_base(base(&stub))
        .list_transfer_jobs_items(ListTransferJobsRequest {
            lifecycle_state: Some(TransferJobLifecycleState::Preparing),
            ..ListTransferJobsRequest::new(COMPARTMENT)
        })
        .try_collect()
        .await
        .unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].device_type, Some(DeviceType::Disk));
    assert_eq!(jobs[1].lifecycle_state, Some(TransferJobLifecycleState::Closed));

    let requests = stub.requests();
    assert_eq!(
        requests[0].uri.to_string(),
        format!(
            "https://datatransfer.us-ashburn-1.oraclecloud.com/20171001/transferJobs?compartmentId={}&lifecycleState=PREPARING",
            "ocid1.compartment.oc1..c"
        )
    );
    assert!(requests[1].query_pairs().contains(&("page".to_owned(), "2".to_owned())));
}

#[tokio::test]
async fn test_change_compartment_sends_body_and_if_match() {
    let stub = StubTransport::new();
    stub.push_empty(200, &[("opc-request-id", "cc-1")]);

    let response = TransferJobClient::from_base(base(&stub))
        .change_transfer_job_compartment(ChangeTransferJobCompartmentRequest {
            if_match: Some("j-etag".to_owned()),
            ..ChangeTransferJobCompartmentRequest::new(JOB, "ocid1.compartment.oc1..other")
        })
        .await
        .unwrap();

    assert_eq!(response.opc_request_id.as_deref(), Some("cc-1"));
    let sent = &stub.requests()[0];
    assert_eq!(
        sent.uri.path(),
        format!("/20171001/transferJobs/{JOB}/actions/changeCompartment")
    );
    assert_eq!(sent.header("if-match"), Some("j-etag"));
    let body: serde_json::Value = serde_json::from_slice(&sent.body).unwrap();
    assert_eq!(body, json!({"compartmentId": "ocid1.compartment.oc1..other"}));
}

#[tokio::test]
async fn test_appliance_create_with_and_without_body() {
    let stub = StubTransport::new();
    stub.push_json(200, &[], &json!({"label": "AP1", "lifecycleState": "REQUESTED"}));
    stub.push_json(200, &[], &json!({"label": "AP2", "lifecycleState": "REQUESTED"}));
    let client = TransferApplianceClient::from_base(base(&stub));

    let first = client
        .create_transfer_appliance(CreateTransferApplianceRequest::new(JOB))
        .await
        .unwrap();
    client
        .create_transfer_appliance(CreateTransferApplianceRequest {
            create_transfer_details: Some(CreateTransferApplianceDetails {
                customer_shipping_address: Some(ShippingAddress {
                    addressee: Some("Ops".to_owned()),
                    country: Some("US".to_owned()),
                    ..Default::default()
                }),
                minimum_storage_capacity_in_terabytes: None,
            }),
            ..CreateTransferApplianceRequest::new(JOB)
        })
        .await
        .unwrap();

    assert_eq!(
        first.resource.lifecycle_state,
        Some(TransferApplianceLifecycleState::Requested)
    );
    let requests = stub.requests();
    assert!(requests[0].body.is_empty());
    assert!(requests[0].header("opc-retry-token").is_some());
    let body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(
        body,
        json!({"customerShippingAddress": {"addressee": "Ops", "country": "US"}})
    );
}

#[tokio::test]
async fn test_appliance_list_decodes_wrapper_object() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[("opc-request-id", "la-1")],
        &json!({"transferApplianceObjects": [
            {"label": "AP1", "lifecycleState": "SHIPPING"},
            {"label": "AP2", "lifecycleState": "LOST_AT_SEA"}
        ]}),
    );

    let response = TransferApplianceClient::from_base(base(&stub))
        .list_transfer_appliances(ListTransferAppliancesRequest::new(JOB))
        .await
        .unwrap();

    let appliances = response.resource.transfer_appliance_objects;
    assert_eq!(response.opc_request_id.as_deref(), Some("la-1"));
    assert_eq!(appliances.len(), 2);
    assert_eq!(
        appliances[0].lifecycle_state,
        Some(TransferApplianceLifecycleState::Shipping)
    );
    assert!(appliances[1].lifecycle_state.as_ref().unwrap().is_unknown());
}

#[tokio::test]
async fn test_entitlement_list_decodes_bare_array() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        &[],
        &json!([{"id": "ent-1", "lifecycleState": "ACTIVE", "requestorEmail": "ops@example.com"}]),
    );

    let response = TransferApplianceEntitlementClient::from_base(base(&stub))
        .list_transfer_appliance_entitlement(ListTransferApplianceEntitlementRequest::new(
            COMPARTMENT,
        ))
        .await
        .unwrap();

    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].requestor_email.as_deref(), Some("ops@example.com"));
    assert!(response.opc_next_page.is_none());
}

#[tokio::test]
async fn test_create_device_against_mock_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/20171001/transferJobs/{JOB}/transferDevices"))
            .header_exists("opc-retry-token")
            .json_body(json!({"label": "XA8XM27EVH"}));
        then.status(200).json_body(json!({
            "label": "XA8XM27EVH",
            "encryptionPassphrase": "one-time-secret",
            "iscsiIQN": "iqn.2018-01.com.oracle:x",
            "lifecycleState": "PREPARING"
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

    let device = TransferDeviceClient::from_base(base)
        .create_transfer_device(CreateTransferDeviceRequest::new(JOB, "XA8XM27EVH"))
        .await
        .unwrap()
        .resource;

    mock.assert();
    assert_eq!(device.encryption_passphrase.as_deref(), Some("one-time-secret"));
    assert_eq!(device.lifecycle_state, Some(TransferDeviceLifecycleState::Preparing));
    assert!(!format!("{device:?}").contains("one-time-secret"));
}
