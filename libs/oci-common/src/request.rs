use crate::error::{InvalidUriKind, OciError};
use crate::response::{OciResponse, headers};
use crate::retry::RetryPolicy;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use serde::Serialize;
use std::borrow::Cow;
use tokio_util::sync::CancellationToken;

const APPLICATION_JSON: &str = "application/json";
const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// Per-call knobs shared by every request type.
#[derive(Debug, Clone, Default)]
pub struct RequestMetadata {
    /// Retry policy for this call; `None` means a single attempt
    pub retry_policy: Option<RetryPolicy>,
    /// Aborts the call (including backoff sleeps) when cancelled
    pub cancellation: Option<CancellationToken>,
}

impl RequestMetadata {
    #[must_use]
    pub fn with_retry_policy(policy: RetryPolicy) -> Self {
        Self {
            retry_policy: Some(policy),
            cancellation: None,
        }
    }
}

/// One service operation: its wire rendering and its typed response.
pub trait OciRequest: Send + Sync {
    /// Decoded form of a successful answer
    type Response: OciResponse;

    /// Operation name used in logs (e.g. `GetJob`)
    const OPERATION: &'static str;

    fn metadata(&self) -> &RequestMetadata;

    /// Describe the HTTP request. Invalid fields surface from [`RequestTemplate::build`].
    fn render(&self) -> RequestTemplate;

    /// Access to the `opc-retry-token` field for operations that carry one.
    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        None
    }
}

/// Value that can be written into a query string.
pub trait QueryValue {
    fn to_query_value(&self) -> Cow<'_, str>;
}

impl QueryValue for str {
    fn to_query_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

macro_rules! display_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_query_value!(bool, i32, i64, u32, u64);

#[derive(Debug)]
enum BodyKind {
    Empty,
    Json(Bytes),
    Binary(Bytes),
}

/// Deferred-error builder for one HTTP request.
///
/// The first invalid input is remembered and returned by [`RequestTemplate::build`],
/// so `render` implementations read as a flat list of fields.
#[derive(Debug)]
#[must_use = "RequestTemplate does nothing until .build() is called"]
pub struct RequestTemplate {
    method: http::Method,
    path: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: BodyKind,
    error: Option<OciError>,
}

impl RequestTemplate {
    /// `path` is relative to the service base path and may contain `{name}` placeholders.
    pub fn new(method: http::Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: BodyKind::Empty,
            error: None,
        }
    }

    pub fn get(path: &'static str) -> Self {
        Self::new(http::Method::GET, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(http::Method::POST, path)
    }

    pub fn put(path: &'static str) -> Self {
        Self::new(http::Method::PUT, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(http::Method::DELETE, path)
    }

    fn fail(&mut self, err: OciError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Mandatory path field; an empty value is a render error.
    pub fn path_param(mut self, name: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self.fail(OciError::MissingParameter { name });
        } else {
            self.path_params.push((name, value.to_owned()));
        }
        self
    }

    /// Optional query field, skipped when `None`.
    pub fn query<V: QueryValue + ?Sized>(mut self, name: &'static str, value: Option<&V>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value.to_query_value().into_owned()));
        }
        self
    }

    /// Mandatory query field; an empty value is a render error.
    pub fn required_query(mut self, name: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self.fail(OciError::MissingParameter { name });
        } else {
            self.query.push((name, value.to_owned()));
        }
        self
    }

    /// Repeated query field (`name=a&name=b`).
    pub fn query_multi<V: QueryValue>(mut self, name: &'static str, values: Option<&[V]>) -> Self {
        for value in values.unwrap_or_default() {
            self.query.push((name, value.to_query_value().into_owned()));
        }
        self
    }

    /// Optional header field, skipped when `None`.
    pub fn header(mut self, name: &'static str, value: Option<&str>) -> Self {
        let Some(value) = value else {
            return self;
        };
        match HeaderValue::try_from(value) {
            Ok(value) => self.headers.push((HeaderName::from_static(name), value)),
            Err(e) => self.fail(OciError::InvalidHeaderValue(e)),
        }
        self
    }

    /// Standard `opc-request-id` header
    pub fn opc_request_id(self, value: Option<&str>) -> Self {
        self.header(headers::OPC_REQUEST_ID, value)
    }

    /// Standard `if-match` header
    pub fn if_match(self, value: Option<&str>) -> Self {
        self.header(headers::IF_MATCH, value)
    }

    /// Standard `opc-retry-token` header
    pub fn opc_retry_token(self, value: Option<&str>) -> Self {
        self.header(headers::OPC_RETRY_TOKEN, value)
    }

    /// Serialize `body` as the sole JSON body.
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => self.body = BodyKind::Json(Bytes::from(bytes)),
            Err(e) => self.fail(OciError::Serialize(e)),
        }
        self
    }

    /// JSON body for operations whose body is optional.
    pub fn optional_json_body<T: Serialize>(self, body: Option<&T>) -> Self {
        match body {
            Some(body) => self.json_body(body),
            None => self,
        }
    }

    /// Raw bytes body sent as `application/octet-stream`.
    pub fn binary_body(mut self, body: Bytes) -> Self {
        self.body = BodyKind::Binary(body);
        self
    }

    fn expand_path(&self) -> Result<String, OciError> {
        let mut out = String::with_capacity(self.path.len() + 32);
        let mut rest = self.path;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let Some(len) = rest[start..].find('}') else {
                return Err(OciError::UnresolvedPathParameter {
                    template: self.path.to_owned(),
                    name: rest[start + 1..].to_owned(),
                });
            };
            let name = &rest[start + 1..start + len];
            let value = self
                .path_params
                .iter()
                .find(|(param, _)| *param == name)
                .map(|(_, value)| value)
                .ok_or_else(|| OciError::UnresolvedPathParameter {
                    template: self.path.to_owned(),
                    name: name.to_owned(),
                })?;
            out.push_str(&urlencoding::encode(value));
            rest = &rest[start + len + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Produce the final request against `base_url` (`https://host/<version>`).
    ///
    /// # Errors
    /// Returns the first deferred field error, [`OciError::UnresolvedPathParameter`]
    /// when a placeholder has no value, or a URL error.
    pub fn build(mut self, base_url: &str) -> Result<http::Request<Bytes>, OciError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }

        let path = self.expand_path()?;
        let raw_url = format!("{}{path}", base_url.trim_end_matches('/'));
        let mut url = url::Url::parse(&raw_url).map_err(|e| OciError::InvalidUri {
            url: raw_url.clone(),
            kind: match e {
                url::ParseError::RelativeUrlWithoutBase => InvalidUriKind::MissingScheme,
                url::ParseError::EmptyHost => InvalidUriKind::MissingAuthority,
                _ => InvalidUriKind::ParseError,
            },
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(OciError::InvalidScheme {
                    scheme: scheme.to_owned(),
                    reason: "only http:// and https:// schemes are supported".to_owned(),
                });
            }
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(OciError::InvalidUri {
                url: raw_url,
                kind: InvalidUriKind::MissingAuthority,
                reason: "missing host/authority".to_owned(),
            });
        }

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        let mut builder = http::Request::builder()
            .method(self.method)
            .uri(url.as_str())
            .header(http::header::ACCEPT, APPLICATION_JSON);

        let body = match self.body {
            BodyKind::Empty => Bytes::new(),
            BodyKind::Json(bytes) => {
                builder = builder.header(http::header::CONTENT_TYPE, APPLICATION_JSON);
                bytes
            }
            BodyKind::Binary(bytes) => {
                builder = builder.header(http::header::CONTENT_TYPE, APPLICATION_OCTET_STREAM);
                bytes
            }
        };

        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }

        Ok(builder.body(body)?)
    }
}
