use crate::config::ClientConfig;
use crate::error::OciError;
use crate::pagination::{ItemsPager, PageableRequest, PagedResponse, PagesPager};
use crate::provider::ConfigurationProvider;
use crate::region::Region;
use crate::request::OciRequest;
use crate::response::{OciResponse, RawResponse};
use crate::retry::{RetryPolicy, generate_retry_token, retry};
use crate::signer::{HttpSignatureSigner, NoopSigner, RequestSigner};
use crate::transport::{HttpTransport, HyperTransport};
use futures_core::Stream;
use std::fmt;
use std::sync::Arc;

/// Where a service lives: endpoint template and API version path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEndpoint {
    /// Service name used when the template is empty (`batch`, `functions`, ...)
    pub service: &'static str,
    /// Host template with `{region}` and `{secondLevelDomain}` placeholders
    pub template: &'static str,
    /// API version path appended to the host (`20180628`)
    pub base_path: &'static str,
}

impl ServiceEndpoint {
    #[must_use]
    pub const fn new(
        service: &'static str,
        template: &'static str,
        base_path: &'static str,
    ) -> Self {
        Self {
            service,
            template,
            base_path,
        }
    }

    /// Host for `region`, e.g. `https://batch.us-phoenix-1.oci.oraclecloud.com`
    #[must_use]
    pub fn host_for(&self, region: &Region) -> String {
        region.endpoint_for_template(self.service, self.template)
    }
}

/// Transport, signer and host shared by the operations of one service.
///
/// Cloning is cheap. Changing the host through [`BaseClient::set_region`]
/// or [`BaseClient::set_host`] needs `&mut self`, so clones made earlier
/// keep the host they had.
#[derive(Clone)]
pub struct BaseClient {
    endpoint: ServiceEndpoint,
    host: String,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn RequestSigner>,
    max_body_size: usize,
}

impl fmt::Debug for BaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseClient")
            .field("endpoint", &self.endpoint)
            .field("host", &self.host)
            .field("max_body_size", &self.max_body_size)
            .finish_non_exhaustive()
    }
}

impl BaseClient {
    #[must_use]
    pub fn builder(endpoint: ServiceEndpoint) -> BaseClientBuilder {
        BaseClientBuilder::new(endpoint)
    }

    #[must_use]
    pub fn endpoint(&self) -> ServiceEndpoint {
        self.endpoint
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// `host/base_path`, the prefix every operation path is appended to
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.host.trim_end_matches('/'),
            self.endpoint.base_path
        )
    }

    /// Recompute the host from the endpoint template.
    pub fn set_region(&mut self, region: &Region) {
        self.host = self.endpoint.host_for(region);
    }

    /// Override the host (`https://host[:port]`).
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    /// Run one operation through the retry driver.
    ///
    /// A missing or empty `opc-retry-token` is filled once before the first
    /// attempt, so every attempt of the call sends the same token. Without a
    /// policy on the request the call is attempted once.
    ///
    /// # Errors
    /// Returns the error of the last attempt; see [`OciError`].
    pub async fn call<R: OciRequest>(&self, mut request: R) -> Result<R::Response, OciError> {
        if let Some(token) = request.retry_token_mut()
            && token.as_deref().is_none_or(str::is_empty)
        {
            *token = Some(generate_retry_token());
        }

        let metadata = request.metadata();
        let policy = metadata
            .retry_policy
            .clone()
            .unwrap_or_else(RetryPolicy::no_retry);
        let cancellation = metadata.cancellation.clone();

        retry(&policy, cancellation.as_ref(), R::OPERATION, |_| {
            self.invoke(&request)
        })
        .await
    }

    /// Stream every page of a list operation, starting from `request`.
    pub fn pages<R>(
        &self,
        request: R,
    ) -> impl Stream<Item = Result<R::Response, OciError>> + Send + 'static
    where
        R: OciRequest + PageableRequest + 'static,
        R::Response: PagedResponse + 'static,
    {
        let client = self.clone();
        PagesPager::new(request, move |page_request: R| {
            let client = client.clone();
            async move { client.call(page_request).await }
        })
    }

    /// Stream the items of every page of a list operation.
    pub fn items<R>(
        &self,
        request: R,
    ) -> impl Stream<Item = Result<<R::Response as PagedResponse>::Item, OciError>> + Send + 'static
    where
        R: OciRequest + PageableRequest + 'static,
        R::Response: PagedResponse + 'static,
        <R::Response as PagedResponse>::Item: Send + 'static,
    {
        let client = self.clone();
        ItemsPager::new(request, move |page_request: R| {
            let client = client.clone();
            async move { client.call(page_request).await }
        })
    }

    async fn invoke<R: OciRequest>(&self, request: &R) -> Result<R::Response, OciError> {
        let mut http_request = request.render().build(&self.base_url())?;
        self.signer.sign(&mut http_request).await?;

        tracing::debug!(
            operation = R::OPERATION,
            method = %http_request.method(),
            host = %self.host,
            "Sending request"
        );

        let response = self.transport.send(http_request).await?;
        let raw = RawResponse::new(response, self.max_body_size);

        tracing::debug!(
            operation = R::OPERATION,
            status = raw.status().as_u16(),
            opc_request_id = raw.header(crate::response::headers::OPC_REQUEST_ID),
            "Received response"
        );

        if !raw.status().is_success() {
            return Err(raw.into_service_error().await);
        }
        R::Response::from_http(raw).await
    }
}

/// Builder for [`BaseClient`].
///
/// Host resolution order: explicit host, `endpoint` from the config, then
/// the region (explicit, provider, config) applied to the endpoint template.
pub struct BaseClientBuilder {
    endpoint: ServiceEndpoint,
    config: ClientConfig,
    provider: Option<Arc<dyn ConfigurationProvider>>,
    transport: Option<Arc<dyn HttpTransport>>,
    signer: Option<Arc<dyn RequestSigner>>,
    host: Option<String>,
    region: Option<Region>,
}

impl fmt::Debug for BaseClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseClientBuilder")
            .field("endpoint", &self.endpoint)
            .field("config", &self.config)
            .field("host", &self.host)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl BaseClientBuilder {
    #[must_use]
    pub fn new(endpoint: ServiceEndpoint) -> Self {
        Self {
            endpoint,
            config: ClientConfig::default(),
            provider: None,
            transport: None,
            signer: None,
            host: None,
            region: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.config = config.clone();
        self
    }

    #[must_use]
    pub fn configuration_provider(mut self, provider: Arc<dyn ConfigurationProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    #[must_use]
    pub fn signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    fn resolve_host(&self) -> Result<String, OciError> {
        if let Some(host) = self.host.clone().or_else(|| self.config.endpoint.clone()) {
            return Ok(host);
        }

        let region = match (&self.region, &self.provider) {
            (Some(region), _) => region.clone(),
            (None, Some(provider)) => provider.region()?,
            (None, None) => self.config.region.clone().ok_or_else(|| {
                OciError::Config("no region, endpoint or host configured".to_owned())
            })?,
        };
        if region.is_empty() {
            return Err(OciError::Config("region is empty".to_owned()));
        }
        Ok(self.endpoint.host_for(&region))
    }

    fn resolve_signer(&self) -> Result<Arc<dyn RequestSigner>, OciError> {
        if let Some(signer) = &self.signer {
            return Ok(Arc::clone(signer));
        }
        match &self.provider {
            Some(provider) => match provider.key_signer() {
                Some(key) => Ok(Arc::new(HttpSignatureSigner::new(provider.key_id()?, key))),
                None => Ok(Arc::new(NoopSigner)),
            },
            None => Ok(Arc::new(NoopSigner)),
        }
    }

    /// Without an explicit transport this builds a [`HyperTransport`], which
    /// needs a tokio runtime.
    ///
    /// # Errors
    /// Returns [`OciError::Config`] when no host can be resolved or no
    /// runtime is available for the default transport, an error from the
    /// provider, or a transport construction error.
    pub fn build(self) -> Result<BaseClient, OciError> {
        let host = self.resolve_host()?;
        let signer = self.resolve_signer()?;
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HyperTransport::new(&self.config.transport)?),
        };

        Ok(BaseClient {
            endpoint: self.endpoint,
            host,
            transport,
            signer,
            max_body_size: self.config.transport.max_body_size,
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::provider::StaticConfigurationProvider;
    use crate::request::{RequestMetadata, RequestTemplate};
    use crate::response::{EmptyResponse, ResourceResponse};
    use crate::retry::ExponentialBackoff;
    use crate::signer::KeySigner;
    use crate::testing::StubTransport;
    use serde::Deserialize;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    const ENDPOINT: ServiceEndpoint = ServiceEndpoint::new(
        "batch",
        "https://batch.{region}.oci.{secondLevelDomain}",
        "20180628",
    );

    #[derive(Debug, Deserialize)]
    struct Widget {
        id: String,
    }

    #[derive(Clone, Default)]
    struct GetWidget {
        widget_id: String,
        metadata: RequestMetadata,
    }

    impl OciRequest for GetWidget {
        type Response = ResourceResponse<Widget>;
        const OPERATION: &'static str = "GetWidget";

        fn metadata(&self) -> &RequestMetadata {
            &self.metadata
        }

        fn render(&self) -> RequestTemplate {
            RequestTemplate::get("/widgets/{widgetId}").path_param("widgetId", &self.widget_id)
        }
    }

    #[derive(Clone, Default)]
    struct CreateWidget {
        opc_retry_token: Option<String>,
        metadata: RequestMetadata,
    }

    impl OciRequest for CreateWidget {
        type Response = EmptyResponse;
        const OPERATION: &'static str = "CreateWidget";

        fn metadata(&self) -> &RequestMetadata {
            &self.metadata
        }

        fn render(&self) -> RequestTemplate {
            RequestTemplate::post("/widgets").opc_retry_token(self.opc_retry_token.as_deref())
        }

        fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
            Some(&mut self.opc_retry_token)
        }
    }

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::with_max_attempts(max_attempts).backoff(ExponentialBackoff::fast())
    }

    fn client(stub: &Arc<StubTransport>) -> BaseClient {
        BaseClient::builder(ENDPOINT)
            .region(Region::parse("phx"))
            .transport(stub.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn test_host_resolution_order() {
        let stub = StubTransport::new();

        let from_region = client(&stub);
        assert_eq!(
            from_region.base_url(),
            "https://batch.us-phoenix-1.oci.oraclecloud.com/20180628"
        );

        let from_config = BaseClient::builder(ENDPOINT)
            .config(&ClientConfig {
                endpoint: Some("http://localhost:8080/".to_owned()),
                region: Some(Region::parse("fra")),
                ..Default::default()
            })
            .transport(stub.clone())
            .build()
            .unwrap();
        assert_eq!(from_config.base_url(), "http://localhost:8080/20180628");

        let provider = StaticConfigurationProvider::new("t", "u", "fp", Region::parse("us-langley-1"));
        let from_provider = BaseClient::builder(ENDPOINT)
            .configuration_provider(Arc::new(provider))
            .transport(stub.clone())
            .build()
            .unwrap();
        assert_eq!(
            from_provider.host(),
            "https://batch.us-langley-1.oci.oraclegovcloud.com"
        );

        let missing = BaseClient::builder(ENDPOINT).transport(stub).build();
        assert!(matches!(missing, Err(OciError::Config(_))));
    }

    #[test]
    fn test_default_transport_without_runtime_is_config_error() {
        let result = BaseClient::builder(ENDPOINT)
            .region(Region::parse("phx"))
            .build();

        assert!(matches!(result, Err(OciError::Config(msg)) if msg.contains("tokio runtime")));
    }

    #[test]
    fn test_set_region_does_not_affect_earlier_clones() {
        let stub = StubTransport::new();
        let mut client = client(&stub);
        let before = client.clone();

        client.set_region(&Region::parse("lhr"));

        assert_eq!(client.host(), "https://batch.uk-london-1.oci.oraclecloud.com");
        assert_eq!(before.host(), "https://batch.us-phoenix-1.oci.oraclecloud.com");
    }

    #[tokio::test]
    async fn test_success_decodes_resource_and_headers() {
        let stub = StubTransport::new();
        stub.push_json(
            200,
            &[("etag", "v3"), ("opc-request-id", "req-1")],
            &serde_json::json!({"id": "w1"}),
        );

        let resp = client(&stub)
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(resp.resource.id, "w1");
        assert_eq!(resp.etag.as_deref(), Some("v3"));
        assert_eq!(resp.opc_request_id.as_deref(), Some("req-1"));
        assert_eq!(
            stub.requests()[0].uri,
            "https://batch.us-phoenix-1.oci.oraclecloud.com/20180628/widgets/w1"
        );
        assert_eq!(stub.bodies_dropped(), 1);
    }

    #[tokio::test]
    async fn test_render_error_sends_nothing() {
        let stub = StubTransport::new();
        let err = client(&stub)
            .call(GetWidget::default())
            .await
            .unwrap_err();

        assert!(matches!(err, OciError::MissingParameter { name: "widgetId" }));
        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_no_policy_means_single_attempt() {
        let stub = StubTransport::new();
        stub.push_transport_error("connection reset");
        stub.push_json(200, &[], &serde_json::json!({"id": "w1"}));

        let err = client(&stub)
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, OciError::Transport(_)));
        assert_eq!(stub.request_count(), 1);
    }

    #[tokio::test]
    async fn test_retry_stops_on_success_and_reuses_token() {
        let stub = StubTransport::new();
        stub.push_transport_error("connection reset");
        stub.push_json(503, &[], &serde_json::json!({"code": "Busy", "message": "later"}));
        stub.push_empty(204, &[("opc-work-request-id", "wr-1")]);
        stub.push_empty(204, &[]);

        let resp = client(&stub)
            .call(CreateWidget {
                metadata: RequestMetadata::with_retry_policy(fast_policy(5)),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(resp.opc_work_request_id.as_deref(), Some("wr-1"));
        let requests = stub.requests();
        assert_eq!(requests.len(), 3);
        let token = requests[0].header("opc-retry-token").unwrap().to_owned();
        assert_eq!(token.len(), 32);
        assert!(requests.iter().all(|r| r.header("opc-retry-token") == Some(token.as_str())));
        assert_eq!(stub.pending(), 1);
    }

    #[tokio::test]
    async fn test_timeout_is_retried_then_succeeds() {
        let stub = StubTransport::new();
        stub.push_timeout(Duration::from_secs(30));
        stub.push_json(200, &[], &serde_json::json!({"id": "w1"}));

        let resp = client(&stub)
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                metadata: RequestMetadata::with_retry_policy(fast_policy(3)),
            })
            .await
            .unwrap();

        assert_eq!(resp.resource.id, "w1");
        assert_eq!(stub.request_count(), 2);
    }

    #[tokio::test]
    async fn test_timeout_without_policy_is_returned() {
        let stub = StubTransport::new();
        stub.push_timeout(Duration::from_secs(30));

        let err = client(&stub)
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, OciError::Timeout(d) if d == Duration::from_secs(30)));
        assert_eq!(stub.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_in_flight_call() {
        let stub = StubTransport::new();
        stub.push_hang();
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let started = tokio::time::Instant::now();
        let err = client(&stub)
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                metadata: RequestMetadata {
                    retry_policy: Some(fast_policy(3)),
                    cancellation: Some(token),
                },
            })
            .await
            .unwrap_err();

        assert!(matches!(err, OciError::Cancelled));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(50) && elapsed < Duration::from_secs(1));
        assert_eq!(stub.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_response_completes_before_cancel() {
        let stub = StubTransport::new();
        stub.push_delayed_json(
            Duration::from_secs(2),
            200,
            &[],
            &serde_json::json!({"id": "w1"}),
        );
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            canceller.cancel();
        });

        let resp = client(&stub)
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                metadata: RequestMetadata {
                    retry_policy: None,
                    cancellation: Some(token),
                },
            })
            .await
            .unwrap();

        assert_eq!(resp.resource.id, "w1");
    }

    #[tokio::test]
    async fn test_preset_token_is_kept() {
        let stub = StubTransport::new();
        stub.push_empty(200, &[]);

        client(&stub)
            .call(CreateWidget {
                opc_retry_token: Some("mine".to_owned()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(stub.requests()[0].header("opc-retry-token"), Some("mine"));
    }

    #[tokio::test]
    async fn test_attempts_are_capped_and_error_carries_metadata() {
        let stub = StubTransport::new();
        for _ in 0..4 {
            stub.push_json(
                500,
                &[("opc-request-id", "req-500")],
                &serde_json::json!({"code": "InternalError", "message": "boom"}),
            );
        }

        let err = client(&stub)
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                metadata: RequestMetadata::with_retry_policy(fast_policy(3)),
            })
            .await
            .unwrap_err();

        assert_eq!(stub.request_count(), 3);
        assert_eq!(err.status(), Some(http::StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.opc_request_id(), Some("req-500"));
        assert_eq!(stub.bodies_created(), stub.bodies_dropped());
    }

    #[tokio::test]
    async fn test_decode_failure_drops_body_and_keeps_metadata() {
        let stub = StubTransport::new();
        stub.push_json(200, &[("opc-request-id", "req-bad")], &serde_json::json!({"name": 1}));

        let err = client(&stub)
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, OciError::Decode { .. }));
        assert_eq!(err.opc_request_id(), Some("req-bad"));
        assert_eq!(stub.bodies_dropped(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_before_first_attempt() {
        let stub = StubTransport::new();
        let token = CancellationToken::new();
        token.cancel();

        let err = client(&stub)
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                metadata: RequestMetadata {
                    retry_policy: None,
                    cancellation: Some(token),
                },
            })
            .await
            .unwrap_err();

        assert!(matches!(err, OciError::Cancelled));
        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_key_signs_requests() {
        struct FixedKey;
        impl KeySigner for FixedKey {
            fn sign(&self, _data: &[u8]) -> Result<Vec<u8>, OciError> {
                Ok(vec![1, 2, 3])
            }
        }

        let stub = StubTransport::new();
        stub.push_json(200, &[], &serde_json::json!({"id": "w1"}));
        let provider = StaticConfigurationProvider::new("t", "u", "fp", Region::parse("phx"))
            .with_key_signer(Arc::new(FixedKey));

        let client = BaseClient::builder(ENDPOINT)
            .configuration_provider(Arc::new(provider))
            .transport(stub.clone())
            .build()
            .unwrap();
        client
            .call(GetWidget {
                widget_id: "w1".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap();

        let request = &stub.requests()[0];
        let auth = request.header("authorization").unwrap();
        assert!(auth.contains(r#"keyId="t/u/fp""#));
        assert_eq!(
            request.header("host"),
            Some("batch.us-phoenix-1.oci.oraclecloud.com")
        );
    }
}
