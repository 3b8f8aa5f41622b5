#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Shared runtime for the OCI service SDKs
//!
//! Every service crate (batch, datacatalog, dts, functions, storagegateway)
//! builds on the pieces in this crate:
//! - Region and realm resolution with endpoint templating
//! - Configuration loading (defaults, YAML file, `OCI_SDK_*` environment)
//! - A hyper/rustls transport behind a tower middleware stack
//! - HTTP signature request signing with a pluggable key
//! - Explicit request rendering (path, query, header and body fields)
//! - Response envelopes with typed header fields
//! - A cancellable retry driver with exponential backoff
//! - Forward-compatible string enums (`oci_enum!`)
//! - Page and item streams over opaque `opc-next-page` cursors
//!
//! # Example
//!
//! ```ignore
//! use oci_common::{BaseClient, ClientConfig, StaticConfigurationProvider};
//! use std::sync::Arc;
//!
//! let config = ClientConfig::load(None)?;
//! let provider = StaticConfigurationProvider::from_config(&config).with_key_signer(my_key);
//! let base = BaseClient::builder(oci_batch::ENDPOINT)
//!     .config(&config)
//!     .configuration_provider(Arc::new(provider))
//!     .build()?;
//! let client = oci_batch::BatchServiceClient::from_base(base);
//! ```

mod client;
mod config;
mod enums;
mod error;
mod layers;
pub mod pagination;
mod provider;
mod region;
mod request;
mod response;
mod retry;
mod serde_duration;
mod signer;
mod tls;
mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use client::{BaseClient, BaseClientBuilder, ServiceEndpoint};
pub use config::{ClientConfig, DEFAULT_USER_AGENT, ENV_PREFIX, TlsRootConfig, TransportConfig};
pub use enums::SortOrder;
pub use error::{InvalidUriKind, OciError, ServiceError};
pub use layers::{UserAgentLayer, UserAgentService};
pub use provider::{ConfigurationProvider, StaticConfigurationProvider};
pub use region::{Realm, Region};
pub use request::{OciRequest, QueryValue, RequestMetadata, RequestTemplate};
pub use response::{
    BinaryBody, BinaryResponse, EmptyResponse, ListResponse, OciResponse, RawResponse,
    ResourceResponse, ResponseBody, ResponseMetadata, headers, parse_retry_after,
};
pub use retry::{
    ExponentialBackoff, RetryPolicy, RetryTrigger, calculate_backoff, generate_retry_token, retry,
};
pub use signer::{
    HttpSignatureSigner, KeySigner, NoopSigner, RequestSigner, prepare_signing_headers,
};
pub use transport::{HttpTransport, HyperTransport};

/// Freeform tags attached to a resource.
pub type FreeformTags = std::collections::HashMap<String, String>;

/// Defined tags attached to a resource, keyed by namespace.
pub type DefinedTags =
    std::collections::HashMap<String, std::collections::HashMap<String, serde_json::Value>>;

/// Timestamps as sent by the services (RFC 3339).
pub type SdkTime = chrono::DateTime<chrono::Utc>;

#[doc(hidden)]
pub use serde as __serde;
