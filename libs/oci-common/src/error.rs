use crate::response::ResponseMetadata;
use crate::retry::RetryTrigger;
use http::StatusCode;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Classification of URL validation failures.
///
/// Provides programmatic matching for different failure modes without
/// relying on unstable error message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidUriKind {
    /// URL could not be parsed (malformed syntax)
    ParseError,
    /// URL is missing required host/authority component
    MissingAuthority,
    /// URL is missing required scheme (http/https)
    MissingScheme,
}

/// Non-2xx answer from a service, with the decoded error body.
#[derive(Debug, Clone)]
pub struct ServiceError {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Service error code (e.g. `NotAuthorizedOrNotFound`); empty if the body had none
    pub code: String,
    /// Human readable message from the error body
    pub message: String,
    /// Parsed `Retry-After` header value, if present and valid
    pub retry_after: Option<Duration>,
    /// Response status and headers
    pub metadata: ResponseMetadata,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status.as_u16())?;
        if !self.code.is_empty() {
            write!(f, " {}", self.code)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(id) = &self.metadata.opc_request_id {
            write!(f, " (opc-request-id: {id})")?;
        }
        Ok(())
    }
}

/// OCI SDK error types
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OciError {
    /// A mandatory request field was empty when the request was rendered
    #[error("Mandatory parameter '{name}' is missing or empty")]
    MissingParameter { name: &'static str },

    /// A `{placeholder}` in the path template had no value
    #[error("Path template '{template}' has unresolved placeholder '{name}'")]
    UnresolvedPathParameter { template: String, name: String },

    /// Request building failed
    #[error("Failed to build request: {0}")]
    RequestBuild(#[from] http::Error),

    /// Invalid header name
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    /// Invalid header value
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Invalid URL (failed to parse)
    ///
    /// Use the `kind` field for programmatic matching. The `reason` field is
    /// for logging only.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUri {
        url: String,
        kind: InvalidUriKind,
        reason: String,
    },

    /// Invalid URL scheme for the transport security configuration
    #[error("URL scheme '{scheme}' not allowed: {reason}")]
    InvalidScheme { scheme: String, reason: String },

    /// Request body could not be serialized
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Single request attempt timed out
    #[error("Request attempt timed out after {0:?}")]
    Timeout(Duration),

    /// Transport error (network, connection, etc)
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// TLS error
    #[error("TLS error: {0}")]
    Tls(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Service answered with a non-2xx status
    #[error("Service error: {0}")]
    Service(Box<ServiceError>),

    /// Response body did not match the expected shape
    #[error("Failed to decode response (HTTP {}): {source}", .metadata.status.as_u16())]
    Decode {
        #[source]
        source: serde_json::Error,
        metadata: Box<ResponseMetadata>,
    },

    /// Response body exceeded size limit
    #[error("Response body too large: limit {limit} bytes, got {actual} bytes")]
    BodyTooLarge { limit: usize, actual: usize },

    /// Caller cancelled the operation
    #[error("Request cancelled")]
    Cancelled,

    /// Invalid or incomplete client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Request signing failed
    #[error("Request signing failed: {0}")]
    Signing(String),

    /// Request buffer is full (fail-fast)
    #[error("Service overloaded: request buffer is full")]
    Overloaded,

    /// Internal service failure (buffer worker died, channel closed)
    #[error("Service unavailable: internal failure")]
    ServiceClosed,

    /// SDK defect; never produced on a healthy path
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OciError {
    /// Status and headers of the response that caused this error, if one was received.
    #[must_use]
    pub fn metadata(&self) -> Option<&ResponseMetadata> {
        match self {
            Self::Service(err) => Some(&err.metadata),
            Self::Decode { metadata, .. } => Some(metadata),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.metadata().map(|m| m.status)
    }

    /// `opc-request-id` of the failed response, for correlating with service logs.
    #[must_use]
    pub fn opc_request_id(&self) -> Option<&str> {
        self.metadata().and_then(|m| m.opc_request_id.as_deref())
    }

    /// Delay requested by the service through `Retry-After`.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Service(err) => err.retry_after,
            _ => None,
        }
    }

    /// Classify the error for the retry driver.
    #[must_use]
    pub fn retry_trigger(&self) -> RetryTrigger {
        match self {
            Self::Transport(_) => RetryTrigger::TransportError,
            Self::Timeout(_) => RetryTrigger::Timeout,
            Self::Service(err) => RetryTrigger::Status(err.status.as_u16()),
            // Render, decode, TLS, cancellation and defects are never retried
            _ => RetryTrigger::NonRetryable,
        }
    }

    /// True for errors raised before any network I/O.
    #[must_use]
    pub fn is_render_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. }
                | Self::UnresolvedPathParameter { .. }
                | Self::RequestBuild(_)
                | Self::InvalidHeaderName(_)
                | Self::InvalidHeaderValue(_)
                | Self::InvalidUri { .. }
                | Self::InvalidScheme { .. }
                | Self::Serialize(_)
        )
    }
}

impl From<hyper::Error> for OciError {
    fn from(err: hyper::Error) -> Self {
        OciError::Transport(Box::new(err))
    }
}

impl From<hyper_util::client::legacy::Error> for OciError {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        OciError::Transport(Box::new(err))
    }
}
