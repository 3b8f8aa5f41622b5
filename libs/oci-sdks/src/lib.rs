#![warn(warnings)]

//! OCI service SDKs behind one dependency.
//!
//! Each service is a cargo feature (`batch`, `datacatalog`, `dts`,
//! `functions`, `storagegateway`, or `full` for all of them) re-exported as a
//! module. The shared runtime is always available as [`common`].

pub use oci_common as common;

#[cfg(feature = "batch")]
pub use oci_batch as batch;

#[cfg(feature = "datacatalog")]
pub use oci_datacatalog as datacatalog;

#[cfg(feature = "dts")]
pub use oci_dts as dts;

#[cfg(feature = "functions")]
pub use oci_functions as functions;

#[cfg(feature = "storagegateway")]
pub use oci_storagegateway as storagegateway;
