#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Data Transfer service SDK
//!
//! Offline transfer of data into object storage, either on customer disks
//! ([`TransferDeviceClient`], [`TransferPackageClient`]) or on a leased
//! appliance ([`TransferApplianceClient`], gated by
//! [`TransferApplianceEntitlementClient`]). Everything hangs off a transfer
//! job ([`TransferJobClient`]). All five clients share one endpoint.

mod client;
pub mod models;
pub mod requests;

use oci_common::ServiceEndpoint;

pub use client::{
    TransferApplianceClient, TransferApplianceEntitlementClient, TransferDeviceClient,
    TransferJobClient, TransferPackageClient,
};
pub use models::*;
pub use requests::*;

/// Host template and API version of the Data Transfer service
pub const ENDPOINT: ServiceEndpoint = ServiceEndpoint::new(
    "datatransfer",
    "https://datatransfer.{region}.{secondLevelDomain}",
    "20171001",
);
