#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Storage Gateway service SDK
//!
//! A storage gateway exposes object storage buckets as NFS file systems and
//! runs cloud syncs between gateway paths and buckets.

mod client;
pub mod models;
pub mod requests;

use oci_common::ServiceEndpoint;

pub use client::StorageGatewayClient;
pub use models::*;
pub use requests::*;

/// Host template and API version of the Storage Gateway service
pub const ENDPOINT: ServiceEndpoint = ServiceEndpoint::new(
    "storage-gateway",
    "https://storage-gateway.{region}.oci.{secondLevelDomain}",
    "20190101",
);
