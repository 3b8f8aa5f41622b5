use crate::error::OciError;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

const X_CONTENT_SHA256: &str = "x-content-sha256";
const REQUEST_TARGET: &str = "(request-target)";

/// Headers signed on every request, in signing order
const GENERIC_HEADERS: &[&str] = &["date", REQUEST_TARGET, "host"];

/// Additional headers signed when the request has a body
const BODY_HEADERS: &[&str] = &["content-length", "content-type", X_CONTENT_SHA256];

/// Authenticates a rendered request before it is sent.
#[async_trait]
pub trait RequestSigner: Send + Sync {
    /// # Errors
    /// Returns [`OciError::Signing`] when the request cannot be signed.
    async fn sign(&self, request: &mut http::Request<Bytes>) -> Result<(), OciError>;
}

/// Leaves requests unsigned (tests, pre-authenticated proxies).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSigner;

#[async_trait]
impl RequestSigner for NoopSigner {
    async fn sign(&self, _request: &mut http::Request<Bytes>) -> Result<(), OciError> {
        Ok(())
    }
}

/// Raw private-key operation behind [`HttpSignatureSigner`].
///
/// Key loading and storage stay with the caller (file, HSM, vault).
pub trait KeySigner: Send + Sync {
    /// Signature algorithm name as written in the `authorization` header
    fn algorithm(&self) -> &'static str {
        "rsa-sha256"
    }

    /// Sign `data` and return the raw signature bytes.
    ///
    /// # Errors
    /// Returns [`OciError::Signing`] if the key operation fails.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, OciError>;
}

fn has_body(method: &http::Method) -> bool {
    matches!(
        *method,
        http::Method::POST | http::Method::PUT | http::Method::PATCH
    )
}

fn set_if_missing(
    request: &mut http::Request<Bytes>,
    name: &'static str,
    value: &str,
) -> Result<(), OciError> {
    if !request.headers().contains_key(name) {
        request
            .headers_mut()
            .insert(HeaderName::from_static(name), HeaderValue::try_from(value)?);
    }
    Ok(())
}

/// Stamp the headers covered by the signature.
///
/// Adds `date` and `host`, and for requests with a body `content-length`,
/// `content-type` and `x-content-sha256`. Headers already present are kept.
///
/// # Errors
/// Returns [`OciError::Signing`] if the URI has no host.
pub fn prepare_signing_headers(request: &mut http::Request<Bytes>) -> Result<(), OciError> {
    let date = httpdate::fmt_http_date(SystemTime::now());
    set_if_missing(request, "date", &date)?;

    let host = request
        .uri()
        .authority()
        .map(|a| a.as_str().to_owned())
        .ok_or_else(|| OciError::Signing("request URI has no host".to_owned()))?;
    set_if_missing(request, "host", &host)?;

    if has_body(request.method()) {
        let length = request.body().len().to_string();
        let digest = BASE64.encode(Sha256::digest(request.body()));
        set_if_missing(request, "content-length", &length)?;
        set_if_missing(request, "content-type", "application/json")?;
        set_if_missing(request, X_CONTENT_SHA256, &digest)?;
    }
    Ok(())
}

/// HTTP signature (draft-cavage) signer using the tenancy/user/fingerprint key id.
#[derive(Clone)]
pub struct HttpSignatureSigner {
    key_id: String,
    key: Arc<dyn KeySigner>,
}

impl fmt::Debug for HttpSignatureSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSignatureSigner")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl HttpSignatureSigner {
    #[must_use]
    pub fn new(key_id: impl Into<String>, key: Arc<dyn KeySigner>) -> Self {
        Self {
            key_id: key_id.into(),
            key,
        }
    }

    fn signing_string(
        request: &http::Request<Bytes>,
        names: &[&str],
    ) -> Result<String, OciError> {
        let mut lines = Vec::with_capacity(names.len());
        for name in names {
            if *name == REQUEST_TARGET {
                let target = request
                    .uri()
                    .path_and_query()
                    .map_or("/", http::uri::PathAndQuery::as_str);
                lines.push(format!(
                    "{REQUEST_TARGET}: {} {target}",
                    request.method().as_str().to_ascii_lowercase()
                ));
                continue;
            }
            let value = request
                .headers()
                .get(*name)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| OciError::Signing(format!("header '{name}' is missing")))?;
            lines.push(format!("{name}: {value}"));
        }
        Ok(lines.join("\n"))
    }
}

#[async_trait]
impl RequestSigner for HttpSignatureSigner {
    async fn sign(&self, request: &mut http::Request<Bytes>) -> Result<(), OciError> {
        prepare_signing_headers(request)?;

        let mut names: Vec<&str> = GENERIC_HEADERS.to_vec();
        if has_body(request.method()) {
            names.extend_from_slice(BODY_HEADERS);
        }

        let signing_string = Self::signing_string(request, &names)?;
        let signature = BASE64.encode(self.key.sign(signing_string.as_bytes())?);
        let authorization = format!(
            r#"Signature version="1",headers="{}",keyId="{}",algorithm="{}",signature="{signature}""#,
            names.join(" "),
            self.key_id,
            self.key.algorithm(),
        );

        request.headers_mut().insert(
            http::header::AUTHORIZATION,
            HeaderValue::try_from(authorization)?,
        );
        Ok(())
    }
}
