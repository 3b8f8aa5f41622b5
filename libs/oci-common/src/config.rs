use crate::error::OciError;
use crate::region::Region;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default User-Agent string for SDK requests
pub const DEFAULT_USER_AGENT: &str = concat!("oci-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Environment prefix read by [`ClientConfig::load`]; nested keys use `__`
pub const ENV_PREFIX: &str = "OCI_SDK_";

/// TLS root certificate configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TlsRootConfig {
    /// Use Mozilla's root certificates (webpki-roots, no OS dependency)
    #[default]
    WebPki,
    /// Use OS native root certificate store
    Native,
}

/// HTTP transport settings shared by every client built from a config
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Per-attempt timeout (default: 30s)
    #[serde(with = "crate::serde_duration")]
    pub request_timeout: Duration,

    /// User-Agent header value
    pub user_agent: String,

    /// Maximum response body size in bytes (default: 10 MiB)
    pub max_body_size: usize,

    /// Idle timeout for pooled connections (default: 90s, `None` keeps them forever)
    #[serde(with = "crate::serde_duration::option")]
    pub pool_idle_timeout: Option<Duration>,

    /// Maximum idle connections per host (default: 32)
    pub pool_max_idle_per_host: usize,

    /// Requests that may queue for the transport worker (default: 1024)
    pub buffer_capacity: usize,

    /// Allow plain `http://` endpoints (local mock servers only)
    pub allow_insecure_http: bool,

    /// TLS root certificate strategy (default: `webpki`)
    pub tls_roots: TlsRootConfig,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_body_size: 10 * 1024 * 1024,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle_per_host: 32,
            buffer_capacity: 1024,
            allow_insecure_http: false,
            tls_roots: TlsRootConfig::default(),
        }
    }
}

/// Client configuration: identity, region and transport.
///
/// # Example
///
/// ```yaml
/// region: phx
/// tenancy: ocid1.tenancy.oc1..aaaa
/// user: ocid1.user.oc1..bbbb
/// fingerprint: "20:3b:97:13:55:1c"
/// transport:
///   request_timeout: 10s
///   tls_roots: native
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Region id or short code
    pub region: Option<Region>,
    /// Host override (`https://host`), bypasses region templating
    pub endpoint: Option<String>,
    /// Tenancy OCID
    pub tenancy: Option<String>,
    /// User OCID
    pub user: Option<String>,
    /// Fingerprint of the API signing key
    pub fingerprint: Option<String>,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Layer defaults, an optional YAML file and `OCI_SDK_*` environment variables.
    ///
    /// Later layers win. Nested keys use `__` in variable names, e.g.
    /// `OCI_SDK_TRANSPORT__REQUEST_TIMEOUT=5s`.
    ///
    /// # Errors
    /// Returns [`OciError::Config`] if the file is missing or any value fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self, OciError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(OciError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| OciError::Config(e.to_string()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Write;

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = temp_env::with_vars_unset(
            ["OCI_SDK_REGION", "OCI_SDK_TRANSPORT__REQUEST_TIMEOUT"],
            || ClientConfig::load(None).unwrap(),
        );

        assert!(config.region.is_none());
        assert_eq!(config.transport.request_timeout, Duration::from_secs(30));
        assert_eq!(config.transport.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.transport.tls_roots, TlsRootConfig::WebPki);
        assert!(!config.transport.allow_insecure_http);
    }

    #[test]
    fn test_yaml_file() {
        let file = yaml_file(
            "region: phx\ntenancy: ocid1.tenancy.oc1..t\ntransport:\n  request_timeout: 5s\n  tls_roots: native\n  pool_idle_timeout: 1m\n",
        );

        let config = temp_env::with_vars_unset(
            ["OCI_SDK_REGION", "OCI_SDK_TRANSPORT__REQUEST_TIMEOUT"],
            || ClientConfig::load(Some(file.path())).unwrap(),
        );

        assert_eq!(config.region, Some(Region::parse("us-phoenix-1")));
        assert_eq!(config.tenancy.as_deref(), Some("ocid1.tenancy.oc1..t"));
        assert_eq!(config.transport.request_timeout, Duration::from_secs(5));
        assert_eq!(config.transport.pool_idle_timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.transport.tls_roots, TlsRootConfig::Native);
        assert_eq!(config.transport.buffer_capacity, 1024);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = yaml_file("region: phx\ntransport:\n  request_timeout: 5s\n");

        let config = temp_env::with_vars(
            [
                ("OCI_SDK_REGION", Some("fra")),
                ("OCI_SDK_TRANSPORT__REQUEST_TIMEOUT", Some("750ms")),
            ],
            || ClientConfig::load(Some(file.path())).unwrap(),
        );

        assert_eq!(config.region, Some(Region::parse("eu-frankfurt-1")));
        assert_eq!(config.transport.request_timeout, Duration::from_millis(750));
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = temp_env::with_var("OCI_SDK_TRANSPORT__REQUEST_TIMEOUT", Some("soon"), || {
            ClientConfig::load(None).unwrap_err()
        });
        assert!(matches!(err, OciError::Config(_)));

        let err = ClientConfig::load(Some(Path::new("/nonexistent/oci.yaml"))).unwrap_err();
        assert!(matches!(err, OciError::Config(_)));
    }
}
