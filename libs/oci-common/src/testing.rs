//! In-memory transport for tests of the service crates.
//!
//! [`StubTransport`] answers requests from a script of canned responses,
//! records what was sent and counts how many response bodies were dropped.

use crate::error::OciError;
use crate::response::ResponseBody;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, Response, StatusCode, Uri};
use http_body::{Body, Frame, SizeHint};
use http_body_util::BodyExt;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};
use std::time::Duration;

/// A request as seen by [`StubTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decoded query pairs in order
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let query = self.uri.query().unwrap_or_default();
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }
}

enum Scripted {
    Response {
        status: StatusCode,
        headers: Vec<(String, String)>,
        body: Bytes,
    },
    TransportError(String),
    Timeout(Duration),
    Delayed(Duration, Box<Scripted>),
    Hang,
}

/// Body that counts its own drop.
struct TrackedBody {
    data: Option<Bytes>,
    drops: Arc<AtomicUsize>,
}

impl Body for TrackedBody {
    type Data = Bytes;
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        Poll::Ready(self.data.take().map(|data| Ok(Frame::data(data))))
    }

    fn is_end_stream(&self) -> bool {
        self.data.is_none()
    }

    fn size_hint(&self) -> SizeHint {
        let len = self.data.as_ref().map_or(0, Bytes::len);
        SizeHint::with_exact(len as u64)
    }
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

/// Scripted [`HttpTransport`].
///
/// Responses are served in push order. A request with nothing left in the
/// script fails with [`OciError::Internal`].
#[derive(Default)]
pub struct StubTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<RecordedRequest>>,
    bodies_created: AtomicUsize,
    bodies_dropped: Arc<AtomicUsize>,
}

impl std::fmt::Debug for StubTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubTransport")
            .field("pending", &self.script.lock().len())
            .field("requests", &self.requests.lock().len())
            .finish_non_exhaustive()
    }
}

impl StubTransport {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_body(&self, status: u16, headers: &[(&str, &str)], body: impl Into<Bytes>) {
        self.script.lock().push_back(Scripted::Response {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            headers: headers
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
            body: body.into(),
        });
    }

    pub fn push_json(&self, status: u16, headers: &[(&str, &str)], body: &serde_json::Value) {
        let mut all: Vec<(&str, &str)> = vec![("content-type", "application/json")];
        all.extend_from_slice(headers);
        self.push_body(status, &all, body.to_string());
    }

    pub fn push_empty(&self, status: u16, headers: &[(&str, &str)]) {
        self.push_body(status, headers, Bytes::new());
    }

    pub fn push_transport_error(&self, message: &str) {
        self.script
            .lock()
            .push_back(Scripted::TransportError(message.to_owned()));
    }

    pub fn push_timeout(&self, after: Duration) {
        self.script.lock().push_back(Scripted::Timeout(after));
    }

    /// Like [`Self::push_json`], answered only after `delay`
    pub fn push_delayed_json(
        &self,
        delay: Duration,
        status: u16,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) {
        self.push_json(status, headers, body);
        let mut script = self.script.lock();
        if let Some(last) = script.pop_back() {
            script.push_back(Scripted::Delayed(delay, Box::new(last)));
        }
    }

    /// The next request never completes
    pub fn push_hang(&self) {
        self.script.lock().push_back(Scripted::Hang);
    }

    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Number of scripted responses not consumed yet
    #[must_use]
    pub fn pending(&self) -> usize {
        self.script.lock().len()
    }

    /// Response bodies handed out so far
    #[must_use]
    pub fn bodies_created(&self) -> usize {
        self.bodies_created.load(Ordering::SeqCst)
    }

    /// Response bodies dropped so far
    #[must_use]
    pub fn bodies_dropped(&self) -> usize {
        self.bodies_dropped.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<Response<ResponseBody>, OciError> {
        let (parts, body) = request.into_parts();
        self.requests.lock().push(RecordedRequest {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });

        let mut next = self.script.lock().pop_front();
        if let Some(Scripted::Delayed(delay, then)) = next {
            tokio::time::sleep(delay).await;
            next = Some(*then);
        }
        match next {
            Some(Scripted::Response {
                status,
                headers,
                body,
            }) => {
                self.bodies_created.fetch_add(1, Ordering::SeqCst);
                let tracked = TrackedBody {
                    data: (!body.is_empty()).then_some(body),
                    drops: Arc::clone(&self.bodies_dropped),
                };
                let mut builder = Response::builder().status(status);
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                Ok(builder.body(tracked.boxed())?)
            }
            Some(Scripted::TransportError(message)) => Err(OciError::Transport(message.into())),
            Some(Scripted::Timeout(after)) => Err(OciError::Timeout(after)),
            Some(Scripted::Hang) => std::future::pending().await,
            Some(Scripted::Delayed(..)) => Err(OciError::Internal(
                "stub transport delays cannot be nested".to_owned(),
            )),
            None => Err(OciError::Internal(
                "stub transport has no scripted response left".to_owned(),
            )),
        }
    }
}
