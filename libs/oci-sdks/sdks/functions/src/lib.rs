#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Functions management SDK
//!
//! Applications group functions (container images) that share subnets and
//! configuration. Triggers bind an event source to a function. Function
//! invocation itself goes to each function's `invoke_endpoint` and is out of
//! reach of [`FunctionsManagementClient`].
//!
//! # Example
//!
//! ```ignore
//! use oci_functions::{FunctionsManagementClient, ListFunctionsRequest};
//! use futures_util::TryStreamExt;
//!
//! let client = FunctionsManagementClient::with_configuration_provider(provider)?;
//! let functions: Vec<_> = client
//!     .list_functions_items(ListFunctionsRequest::new(application_id))
//!     .try_collect()
//!     .await?;
//! ```

mod client;
pub mod models;
pub mod requests;

use oci_common::ServiceEndpoint;

pub use client::FunctionsManagementClient;
pub use models::*;
pub use requests::*;

/// Host template and API version of the Functions service. Unlike most
/// services the host has no `oci.` segment.
pub const ENDPOINT: ServiceEndpoint = ServiceEndpoint::new(
    "functions",
    "https://functions.{region}.{secondLevelDomain}",
    "20181201",
);
