use crate::config::ClientConfig;
use crate::error::OciError;
use crate::region::Region;
use crate::signer::KeySigner;
use std::fmt;
use std::sync::Arc;

/// Source of identity and region for a client.
///
/// # Errors
/// Every accessor returns [`OciError::Config`] when its value is not configured.
pub trait ConfigurationProvider: Send + Sync {
    fn tenancy_ocid(&self) -> Result<String, OciError>;

    fn user_ocid(&self) -> Result<String, OciError>;

    fn key_fingerprint(&self) -> Result<String, OciError>;

    fn region(&self) -> Result<Region, OciError>;

    /// Key id used in the `authorization` header: `tenancy/user/fingerprint`.
    fn key_id(&self) -> Result<String, OciError> {
        Ok(format!(
            "{}/{}/{}",
            self.tenancy_ocid()?,
            self.user_ocid()?,
            self.key_fingerprint()?
        ))
    }

    /// Private-key operation for request signing; `None` leaves requests unsigned.
    fn key_signer(&self) -> Option<Arc<dyn KeySigner>> {
        None
    }
}

/// Provider with fixed values, usually built from a [`ClientConfig`].
#[derive(Clone, Default)]
pub struct StaticConfigurationProvider {
    tenancy: Option<String>,
    user: Option<String>,
    fingerprint: Option<String>,
    region: Option<Region>,
    key_signer: Option<Arc<dyn KeySigner>>,
}

impl fmt::Debug for StaticConfigurationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticConfigurationProvider")
            .field("tenancy", &self.tenancy)
            .field("user", &self.user)
            .field("fingerprint", &self.fingerprint)
            .field("region", &self.region)
            .field("key_signer", &self.key_signer.is_some())
            .finish()
    }
}

fn required(value: Option<&String>, name: &str) -> Result<String, OciError> {
    value
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| OciError::Config(format!("{name} is not configured")))
}

impl StaticConfigurationProvider {
    #[must_use]
    pub fn new(
        tenancy: impl Into<String>,
        user: impl Into<String>,
        fingerprint: impl Into<String>,
        region: Region,
    ) -> Self {
        Self {
            tenancy: Some(tenancy.into()),
            user: Some(user.into()),
            fingerprint: Some(fingerprint.into()),
            region: Some(region),
            key_signer: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            tenancy: config.tenancy.clone(),
            user: config.user.clone(),
            fingerprint: config.fingerprint.clone(),
            region: config.region.clone(),
            key_signer: None,
        }
    }

    #[must_use]
    pub fn with_key_signer(mut self, key: Arc<dyn KeySigner>) -> Self {
        self.key_signer = Some(key);
        self
    }
}

impl ConfigurationProvider for StaticConfigurationProvider {
    fn tenancy_ocid(&self) -> Result<String, OciError> {
        required(self.tenancy.as_ref(), "tenancy")
    }

    fn user_ocid(&self) -> Result<String, OciError> {
        required(self.user.as_ref(), "user")
    }

    fn key_fingerprint(&self) -> Result<String, OciError> {
        required(self.fingerprint.as_ref(), "fingerprint")
    }

    fn region(&self) -> Result<Region, OciError> {
        self.region
            .clone()
            .filter(|r| !r.is_empty())
            .ok_or_else(|| OciError::Config("region is not configured".to_owned()))
    }

    fn key_signer(&self) -> Option<Arc<dyn KeySigner>> {
        self.key_signer.clone()
    }
}
