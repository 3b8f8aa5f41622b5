#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Data Catalog service SDK
//!
//! A catalog harvests metadata from data assets into entities, folders and
//! attributes, organizes business terms in glossaries, and answers
//! full-text searches over all of it.
//!
//! ```ignore
//! use oci_datacatalog::{DataCatalogClient, EntityFields, GetEntityRequest};
//!
//! let client = DataCatalogClient::with_configuration_provider(provider)?;
//! let entity = client
//!     .get_entity(GetEntityRequest {
//!         fields: Some(vec![EntityFields::Key, EntityFields::Path]),
//!         ..GetEntityRequest::new(catalog_id, data_asset_key, entity_key)
//!     })
//!     .await?;
//! ```

mod client;
pub mod models;
pub mod requests;

use oci_common::ServiceEndpoint;

pub use client::DataCatalogClient;
pub use models::*;
pub use requests::*;

/// Host template and API version of the Data Catalog service
pub const ENDPOINT: ServiceEndpoint = ServiceEndpoint::new(
    "datacatalog",
    "https://datacatalog.{region}.oci.{secondLevelDomain}",
    "20190325",
);
