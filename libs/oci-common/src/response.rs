use crate::error::{OciError, ServiceError};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode};
use http_body::Frame;
use http_body_util::BodyExt;
use pin_project_lite::pin_project;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, SystemTime};

/// Header names read or written by the SDK
pub mod headers {
    pub const OPC_REQUEST_ID: &str = "opc-request-id";
    pub const OPC_NEXT_PAGE: &str = "opc-next-page";
    pub const OPC_PREV_PAGE: &str = "opc-prev-page";
    pub const OPC_WORK_REQUEST_ID: &str = "opc-work-request-id";
    pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";
    pub const ETAG: &str = "etag";
    pub const IF_MATCH: &str = "if-match";
}

/// Maximum characters of a non-JSON error body kept as the error message
const ERROR_MESSAGE_PREVIEW_LIMIT: usize = 512;

/// Type alias for the boxed response body that supports decompression.
///
/// This type can hold either a raw body or a decompressed body (gzip/br/deflate).
pub type ResponseBody =
    http_body_util::combinators::BoxBody<Bytes, Box<dyn std::error::Error + Send + Sync>>;

/// Parse `Retry-After` header value into a `Duration`.
///
/// Supports delay-seconds ("120") and HTTP-date. Returns `None` when the
/// header is missing, malformed, negative or already in the past. The value
/// is returned as sent; the retry driver caps it at the backoff ceiling.
#[must_use]
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(http::header::RETRY_AFTER)?.to_str().ok()?;
    let trimmed = value.trim();

    if let Ok(seconds) = trimmed.parse::<i64>() {
        if seconds < 0 {
            return None;
        }
        return Some(Duration::from_secs(seconds.cast_unsigned()));
    }

    let parsed = httpdate::parse_http_date(trimmed).ok()?;
    parsed.duration_since(SystemTime::now()).ok()
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Status and headers of a received response.
///
/// Attached to every error raised after a response arrived, so failures can
/// be correlated through `opc-request-id`.
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    pub status: StatusCode,
    pub opc_request_id: Option<String>,
    pub headers: HeaderMap,
}

impl ResponseMetadata {
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            status,
            opc_request_id: header_string(&headers, headers::OPC_REQUEST_ID),
            headers,
        }
    }

    /// Header value as a string, if present and valid UTF-8
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pin_project! {
    /// Lazily read, size-limited response body of a binary operation.
    ///
    /// Implements both [`http_body::Body`] and [`futures_core::Stream`] of
    /// `Bytes`. The caller owns it: drain it or drop it.
    pub struct BinaryBody {
        #[pin]
        inner: ResponseBody,
        limit: usize,
        read: usize,
    }
}

impl std::fmt::Debug for BinaryBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryBody")
            .field("limit", &self.limit)
            .field("read", &self.read)
            .finish_non_exhaustive()
    }
}

impl BinaryBody {
    #[must_use]
    pub fn new(inner: ResponseBody, limit: usize) -> Self {
        Self {
            inner,
            limit,
            read: 0,
        }
    }

    /// Returns the number of bytes read so far.
    #[must_use]
    pub fn bytes_read(&self) -> usize {
        self.read
    }

    /// Read the remaining body into memory.
    ///
    /// # Errors
    /// Returns [`OciError::BodyTooLarge`] past the limit, or
    /// [`OciError::Transport`] if the connection fails mid-body.
    pub async fn bytes(self) -> Result<Bytes, OciError> {
        let collected = self.collect().await?;
        Ok(collected.to_bytes())
    }
}

impl http_body::Body for BinaryBody {
    type Data = Bytes;
    type Error = OciError;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.project();

        match this.inner.poll_frame(cx) {
            Poll::Ready(Some(Ok(frame))) => {
                if let Some(data) = frame.data_ref() {
                    *this.read += data.len();
                    if *this.read > *this.limit {
                        return Poll::Ready(Some(Err(OciError::BodyTooLarge {
                            limit: *this.limit,
                            actual: *this.read,
                        })));
                    }
                }
                Poll::Ready(Some(Ok(frame)))
            }
            Poll::Ready(Some(Err(e))) => Poll::Ready(Some(Err(OciError::Transport(e)))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }
}

impl futures_core::Stream for BinaryBody {
    type Item = Result<Bytes, OciError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match http_body::Body::poll_frame(self.as_mut(), cx) {
                Poll::Ready(Some(Ok(frame))) => {
                    // Trailers carry no data
                    if let Ok(data) = frame.into_data() {
                        return Poll::Ready(Some(Ok(data)));
                    }
                }
                Poll::Ready(Some(Err(e))) => return Poll::Ready(Some(Err(e))),
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Undecoded response as returned by the transport.
///
/// Consuming methods release the body exactly once: [`RawResponse::bytes`]
/// and [`RawResponse::json`] read it fully and drop it, [`RawResponse::into_binary`]
/// hands it to the caller.
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
    max_body_size: usize,
}

impl std::fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("max_body_size", &self.max_body_size)
            .finish_non_exhaustive()
    }
}

impl RawResponse {
    #[must_use]
    pub fn new(response: Response<ResponseBody>, max_body_size: usize) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status,
            headers: parts.headers,
            body,
            max_body_size,
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as an owned string, if present and valid UTF-8
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        header_string(&self.headers, name)
    }

    #[must_use]
    pub fn metadata(&self) -> ResponseMetadata {
        ResponseMetadata::new(self.status, self.headers.clone())
    }

    /// Read the whole body, enforcing the size limit.
    ///
    /// # Errors
    /// Returns [`OciError::BodyTooLarge`] or [`OciError::Transport`].
    pub async fn bytes(self) -> Result<Bytes, OciError> {
        read_body_limited(self.body, self.max_body_size).await
    }

    /// Read the whole body and decode it as JSON.
    ///
    /// # Errors
    /// Returns [`OciError::Decode`] carrying the response metadata when the
    /// body does not match `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, OciError> {
        let metadata = self.metadata();
        let bytes = read_body_limited(self.body, self.max_body_size).await?;
        serde_json::from_slice(&bytes).map_err(|source| OciError::Decode {
            source,
            metadata: Box::new(metadata),
        })
    }

    /// Hand the body to the caller as a lazily read stream.
    #[must_use]
    pub fn into_binary(self) -> (ResponseMetadata, BinaryBody) {
        let metadata = ResponseMetadata::new(self.status, self.headers);
        (metadata, BinaryBody::new(self.body, self.max_body_size))
    }

    /// Turn a non-2xx response into [`OciError::Service`].
    ///
    /// The `{ "code", "message" }` error body is decoded leniently: a body
    /// that is not JSON becomes the message, truncated.
    pub async fn into_service_error(self) -> OciError {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct ErrorBody {
            code: String,
            message: String,
        }

        let metadata = self.metadata();
        let retry_after = parse_retry_after(&self.headers);
        let body = match read_body_limited(self.body, self.max_body_size).await {
            Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes).unwrap_or_else(|_| {
                let text = String::from_utf8_lossy(&bytes);
                ErrorBody {
                    code: String::new(),
                    message: text.chars().take(ERROR_MESSAGE_PREVIEW_LIMIT).collect(),
                }
            }),
            Err(OciError::BodyTooLarge { .. }) => ErrorBody {
                code: String::new(),
                message: "<body too large for preview>".to_owned(),
            },
            Err(e) => return e,
        };

        OciError::Service(Box::new(ServiceError {
            status: metadata.status,
            code: body.code,
            message: body.message,
            retry_after,
            metadata,
        }))
    }
}

async fn read_body_limited(body: ResponseBody, limit: usize) -> Result<Bytes, OciError> {
    let mut collected = Vec::new();
    let mut body = std::pin::pin!(body);

    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(OciError::Transport)?;
        if let Some(chunk) = frame.data_ref() {
            if collected.len() + chunk.len() > limit {
                return Err(OciError::BodyTooLarge {
                    limit,
                    actual: collected.len() + chunk.len(),
                });
            }
            collected.extend_from_slice(chunk);
        }
    }

    Ok(Bytes::from(collected))
}

/// Typed response decoded from a successful (2xx) HTTP response.
#[async_trait]
pub trait OciResponse: Sized + Send {
    /// Decode the body and copy the named headers.
    ///
    /// # Errors
    /// Returns [`OciError::Decode`] or a body read error.
    async fn from_http(raw: RawResponse) -> Result<Self, OciError>;
}

/// Response of an operation returning one resource.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    pub resource: T,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub opc_work_request_id: Option<String>,
    pub status: StatusCode,
}

#[async_trait]
impl<T> OciResponse for ResourceResponse<T>
where
    T: DeserializeOwned + Send,
{
    async fn from_http(raw: RawResponse) -> Result<Self, OciError> {
        let status = raw.status();
        let etag = raw.header(headers::ETAG);
        let opc_request_id = raw.header(headers::OPC_REQUEST_ID);
        let opc_work_request_id = raw.header(headers::OPC_WORK_REQUEST_ID);
        let resource = raw.json().await?;
        Ok(Self {
            resource,
            etag,
            opc_request_id,
            opc_work_request_id,
            status,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(default = "Vec::new")]
        items: Vec<T>,
    },
}

/// Response of a list operation: one page of items plus cursors.
#[derive(Debug, Clone)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub opc_next_page: Option<String>,
    pub opc_prev_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub status: StatusCode,
}

#[async_trait]
impl<T> OciResponse for ListResponse<T>
where
    T: DeserializeOwned + Send,
{
    async fn from_http(raw: RawResponse) -> Result<Self, OciError> {
        let status = raw.status();
        let opc_next_page = raw.header(headers::OPC_NEXT_PAGE);
        let opc_prev_page = raw.header(headers::OPC_PREV_PAGE);
        let opc_request_id = raw.header(headers::OPC_REQUEST_ID);
        let metadata = raw.metadata();
        let bytes = raw.bytes().await?;

        // Services answer an empty list with no body at all
        let items = if bytes.iter().all(u8::is_ascii_whitespace) {
            Vec::new()
        } else {
            match serde_json::from_slice::<ListBody<T>>(&bytes) {
                Ok(ListBody::Bare(items) | ListBody::Wrapped { items }) => items,
                Err(source) => {
                    return Err(OciError::Decode {
                        source,
                        metadata: Box::new(metadata),
                    });
                }
            }
        };

        Ok(Self {
            items,
            opc_next_page,
            opc_prev_page,
            opc_request_id,
            status,
        })
    }
}

/// Response of an operation without a body (deletes, some actions).
#[derive(Debug, Clone)]
pub struct EmptyResponse {
    pub opc_request_id: Option<String>,
    pub opc_work_request_id: Option<String>,
    pub etag: Option<String>,
    pub status: StatusCode,
}

#[async_trait]
impl OciResponse for EmptyResponse {
    async fn from_http(raw: RawResponse) -> Result<Self, OciError> {
        let status = raw.status();
        let opc_request_id = raw.header(headers::OPC_REQUEST_ID);
        let opc_work_request_id = raw.header(headers::OPC_WORK_REQUEST_ID);
        let etag = raw.header(headers::ETAG);
        // Drain so the connection can be reused; the content is ignored
        raw.bytes().await?;
        Ok(Self {
            opc_request_id,
            opc_work_request_id,
            etag,
            status,
        })
    }
}

/// Response of an operation returning raw bytes.
#[derive(Debug)]
pub struct BinaryResponse {
    pub body: BinaryBody,
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub status: StatusCode,
}

#[async_trait]
impl OciResponse for BinaryResponse {
    async fn from_http(raw: RawResponse) -> Result<Self, OciError> {
        let (metadata, body) = raw.into_binary();
        Ok(Self {
            body,
            content_length: metadata
                .header(http::header::CONTENT_LENGTH.as_str())
                .and_then(|v| v.parse().ok()),
            content_type: metadata
                .header(http::header::CONTENT_TYPE.as_str())
                .map(ToOwned::to_owned),
            etag: metadata.header(headers::ETAG).map(ToOwned::to_owned),
            opc_request_id: metadata.opc_request_id,
            status: metadata.status,
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use http_body_util::Full;
    use serde::Deserialize;

    fn body(data: &'static [u8]) -> ResponseBody {
        Full::new(Bytes::from_static(data))
            .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> { Box::new(e) })
            .boxed()
    }

    fn raw(status: u16, headers: &[(&str, &str)], data: &'static [u8]) -> RawResponse {
        let mut builder = Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        RawResponse::new(builder.body(body(data)).unwrap(), 1024)
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Thing {
        id: String,
        display_name: Option<String>,
    }

    #[tokio::test]
    async fn test_resource_response_copies_headers() {
        let raw = raw(
            200,
            &[("etag", "v3"), ("opc-request-id", "req-9")],
            br#"{"id":"ocid1.thing.a","displayName":"a","extra":1}"#,
        );

        let resp = ResourceResponse::<Thing>::from_http(raw).await.unwrap();
        assert_eq!(resp.resource.id, "ocid1.thing.a");
        assert_eq!(resp.resource.display_name.as_deref(), Some("a"));
        assert_eq!(resp.etag.as_deref(), Some("v3"));
        assert_eq!(resp.opc_request_id.as_deref(), Some("req-9"));
        assert_eq!(resp.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_decode_error_carries_metadata() {
        let raw = raw(200, &[("opc-request-id", "req-bad")], b"{not json");

        let err = ResourceResponse::<Thing>::from_http(raw).await.unwrap_err();
        assert!(matches!(err, OciError::Decode { .. }));
        assert_eq!(err.opc_request_id(), Some("req-bad"));
    }

    #[tokio::test]
    async fn test_list_response_accepts_bare_and_wrapped_arrays() {
        let bare = raw(200, &[("opc-next-page", "p2")], br#"[{"id":"a"},{"id":"b"}]"#);
        let resp = ListResponse::<Thing>::from_http(bare).await.unwrap();
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.opc_next_page.as_deref(), Some("p2"));

        let wrapped = raw(200, &[("opc-prev-page", "p0")], br#"{"items":[{"id":"c"}]}"#);
        let resp = ListResponse::<Thing>::from_http(wrapped).await.unwrap();
        assert_eq!(resp.items[0].id, "c");
        assert_eq!(resp.opc_prev_page.as_deref(), Some("p0"));
        assert!(resp.opc_next_page.is_none());

        let empty = raw(200, &[], b"");
        assert!(ListResponse::<Thing>::from_http(empty).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_service_error_decodes_error_body() {
        let raw = raw(
            409,
            &[("opc-request-id", "req-c"), ("retry-after", "7")],
            br#"{"code":"Conflict","message":"already exists"}"#,
        );

        let err = raw.into_service_error().await;
        let OciError::Service(service) = &err else {
            panic!("expected service error, got {err:?}");
        };
        assert_eq!(service.status, StatusCode::CONFLICT);
        assert_eq!(service.code, "Conflict");
        assert_eq!(service.message, "already exists");
        assert_eq!(service.retry_after, Some(Duration::from_secs(7)));
        assert_eq!(err.opc_request_id(), Some("req-c"));
    }

    #[tokio::test]
    async fn test_service_error_with_plain_text_body() {
        let raw = raw(502, &[], b"<html>bad gateway</html>");

        let err = raw.into_service_error().await;
        let OciError::Service(service) = err else {
            panic!("expected service error");
        };
        assert!(service.code.is_empty());
        assert_eq!(service.message, "<html>bad gateway</html>");
    }

    #[tokio::test]
    async fn test_body_limit_is_enforced() {
        let response = Response::builder().status(200).body(body(b"0123456789")).unwrap();
        let err = RawResponse::new(response, 4).bytes().await.unwrap_err();
        assert!(matches!(err, OciError::BodyTooLarge { limit: 4, actual: 10 }));
    }

    #[tokio::test]
    async fn test_binary_response_streams_body() {
        let raw = raw(
            200,
            &[("content-type", "text/plain"), ("content-length", "5")],
            b"hello",
        );

        let resp = BinaryResponse::from_http(raw).await.unwrap();
        assert_eq!(resp.content_length, Some(5));
        assert_eq!(resp.content_type.as_deref(), Some("text/plain"));

        let mut stream = resp.body;
        let chunk = stream.next().await.unwrap().unwrap();
        assert_eq!(&chunk[..], b"hello");
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::RETRY_AFTER, "  120 ".parse().unwrap());
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_parse_retry_after_rejects_invalid_values() {
        for value in ["not-a-number", "-5", "Wed, 21 Oct 2015 07:28:00 GMT"] {
            let mut headers = HeaderMap::new();
            headers.insert(http::header::RETRY_AFTER, value.parse().unwrap());
            assert_eq!(parse_retry_after(&headers), None, "value {value}");
        }
        assert_eq!(parse_retry_after(&HeaderMap::new()), None);
    }

    #[test]
    fn test_parse_retry_after_http_date_in_future() {
        let mut headers = HeaderMap::new();
        let future_time = SystemTime::now() + Duration::from_secs(60);
        headers.insert(
            http::header::RETRY_AFTER,
            httpdate::fmt_http_date(future_time).parse().unwrap(),
        );

        let duration = parse_retry_after(&headers).unwrap();
        assert!(duration.as_secs() >= 58 && duration.as_secs() <= 62);
    }
}
