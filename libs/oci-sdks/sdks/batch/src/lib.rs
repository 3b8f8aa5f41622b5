#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Batch service SDK
//!
//! Batch instances group compute environments (node pools that run job
//! containers), job definitions (reusable job templates) and jobs (runs of a
//! definition). Every operation goes through [`BatchServiceClient`].
//!
//! # Example
//!
//! ```ignore
//! use oci_batch::{BatchServiceClient, GetJobRequest};
//!
//! let client = BatchServiceClient::with_configuration_provider(provider)?;
//! let job = client.get_job(GetJobRequest::new(job_id)).await?;
//! println!("{:?} etag={:?}", job.resource.lifecycle_state, job.etag);
//! ```

mod client;
pub mod models;
pub mod requests;

use oci_common::ServiceEndpoint;

pub use client::BatchServiceClient;
pub use models::*;
pub use requests::*;

/// Host template and API version of the Batch service
pub const ENDPOINT: ServiceEndpoint = ServiceEndpoint::new(
    "batch",
    "https://batch.{region}.oci.{secondLevelDomain}",
    "20180628",
);
