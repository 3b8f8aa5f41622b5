use crate::config::{TlsRootConfig, TransportConfig};
use crate::error::OciError;
use crate::layers::UserAgentLayer;
use crate::response::ResponseBody;
use crate::tls;
use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tower::buffer::Buffer;
use tower::timeout::TimeoutLayer;
use tower::{Service, ServiceBuilder, ServiceExt};
use tower_http::decompression::DecompressionLayer;

/// Sends one rendered, signed request and returns the raw response.
///
/// Non-2xx statuses are returned as `Ok`; only transport, timeout and TLS
/// failures are errors. Tests substitute a scripted implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: Request<Bytes>) -> Result<Response<ResponseBody>, OciError>;
}

type ServiceFuture =
    Pin<Box<dyn Future<Output = Result<Response<ResponseBody>, OciError>> + Send>>;

type BufferedService = Buffer<Request<Full<Bytes>>, ServiceFuture>;

/// hyper + rustls transport behind a tower stack.
///
/// Request flow: `Buffer` → `Timeout` → `UserAgent` → `Decompression` → hyper client.
/// Cloning is cheap and clones share one connection pool.
#[derive(Clone)]
pub struct HyperTransport {
    service: BufferedService,
    allow_insecure_http: bool,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("allow_insecure_http", &self.allow_insecure_http)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Build the transport. The buffer worker is spawned on the current
    /// tokio runtime.
    ///
    /// # Errors
    /// Returns [`OciError::Config`] when called outside a tokio runtime,
    /// [`OciError::Tls`] if root certificates cannot be loaded and
    /// [`OciError::InvalidHeaderValue`] for an invalid user agent.
    pub fn new(config: &TransportConfig) -> Result<Self, OciError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(OciError::Config(
                "HTTP transport must be created inside a tokio runtime".to_owned(),
            ));
        }

        if config.allow_insecure_http {
            tracing::warn!(
                "insecure HTTP enabled for OCI transport; requests may be sent in cleartext"
            );
        }

        let timeout = config.request_timeout;
        let https = build_https_connector(config.tls_roots, config.allow_insecure_http)?;

        let mut client_builder = Client::builder(TokioExecutor::new());
        client_builder
            .pool_timer(TokioTimer::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);
        let hyper_client = client_builder.build::<_, Full<Bytes>>(https);

        let service = ServiceBuilder::new()
            .layer(TimeoutLayer::new(timeout))
            .layer(UserAgentLayer::try_new(&config.user_agent)?)
            .layer(DecompressionLayer::new())
            .service(hyper_client)
            .map_response(map_decompression_response)
            .map_err(move |e: tower::BoxError| map_tower_error(e, timeout))
            .boxed_clone();

        Ok(Self {
            service: Buffer::new(service, config.buffer_capacity.max(1)),
            allow_insecure_http: config.allow_insecure_http,
        })
    }

    fn check_scheme(&self, request: &Request<Bytes>) -> Result<(), OciError> {
        match request.uri().scheme_str() {
            Some("https") => Ok(()),
            Some("http") if self.allow_insecure_http => Ok(()),
            Some("http") => Err(OciError::InvalidScheme {
                scheme: "http".to_owned(),
                reason: "plain HTTP requires allow_insecure_http".to_owned(),
            }),
            other => Err(OciError::InvalidScheme {
                scheme: other.unwrap_or_default().to_owned(),
                reason: "only http and https are supported".to_owned(),
            }),
        }
    }
}

#[async_trait]
impl HttpTransport for HyperTransport {
    async fn send(&self, request: Request<Bytes>) -> Result<Response<ResponseBody>, OciError> {
        self.check_scheme(&request)?;

        let mut service = self.service.clone();
        try_acquire_buffer_slot(&mut service).await?;
        service
            .call(request.map(Full::new))
            .await
            .map_err(map_buffer_error)
    }
}

fn build_https_connector(
    tls_roots: TlsRootConfig,
    allow_insecure_http: bool,
) -> Result<HttpsConnector<HttpConnector>, OciError> {
    let builder = match tls_roots {
        TlsRootConfig::WebPki => hyper_rustls::HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(tls::crypto_provider())
            .map_err(|e| OciError::Tls(Box::new(e)))?,
        TlsRootConfig::Native => hyper_rustls::HttpsConnectorBuilder::new()
            .with_tls_config(tls::native_roots_client_config()?),
    };

    let connector = if allow_insecure_http {
        builder.https_or_http().enable_all_versions().build()
    } else {
        builder.https_only().enable_all_versions().build()
    };
    Ok(connector)
}

fn map_tower_error(err: tower::BoxError, timeout: Duration) -> OciError {
    if err.is::<tower::timeout::error::Elapsed>() {
        return OciError::Timeout(timeout);
    }
    match err.downcast::<OciError>() {
        Ok(oci_err) => *oci_err,
        Err(other) => OciError::Transport(other),
    }
}

fn map_decompression_response<B>(response: Response<B>) -> Response<ResponseBody>
where
    B: hyper::body::Body<Data = Bytes> + Send + Sync + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let (parts, body) = response.into_parts();
    Response::from_parts(parts, body.map_err(Into::into).boxed())
}

fn map_buffer_error(err: tower::BoxError) -> OciError {
    match err.downcast::<OciError>() {
        Ok(oci_err) => *oci_err,
        Err(err) => {
            tracing::error!(error = %err, "transport worker closed unexpectedly");
            OciError::ServiceClosed
        }
    }
}

/// Poll the buffer once; a full buffer fails fast with [`OciError::Overloaded`].
async fn try_acquire_buffer_slot(service: &mut BufferedService) -> Result<(), OciError> {
    use std::task::Poll;

    let ready = std::future::poll_fn(|cx| match service.poll_ready(cx) {
        Poll::Ready(result) => Poll::Ready(Some(result)),
        Poll::Pending => Poll::Ready(None),
    })
    .await;

    match ready {
        Some(Ok(())) => Ok(()),
        Some(Err(e)) => Err(map_buffer_error(e)),
        None => Err(OciError::Overloaded),
    }
}
