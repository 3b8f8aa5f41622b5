use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Airport-style short codes accepted in place of canonical region ids
const SHORT_CODES: &[(&str, &str)] = &[
    ("phx", "us-phoenix-1"),
    ("iad", "us-ashburn-1"),
    ("sjc", "us-sanjose-1"),
    ("fra", "eu-frankfurt-1"),
    ("zrh", "eu-zurich-1"),
    ("ams", "eu-amsterdam-1"),
    ("lhr", "uk-london-1"),
    ("cwl", "uk-cardiff-1"),
    ("yyz", "ca-toronto-1"),
    ("yul", "ca-montreal-1"),
    ("nrt", "ap-tokyo-1"),
    ("kix", "ap-osaka-1"),
    ("icn", "ap-seoul-1"),
    ("yny", "ap-chuncheon-1"),
    ("bom", "ap-mumbai-1"),
    ("hyd", "ap-hyderabad-1"),
    ("syd", "ap-sydney-1"),
    ("mel", "ap-melbourne-1"),
    ("gru", "sa-saopaulo-1"),
    ("jed", "me-jeddah-1"),
    ("lfi", "us-langley-1"),
    ("luf", "us-luke-1"),
    ("ric", "us-gov-ashburn-1"),
    ("pia", "us-gov-chicago-1"),
    ("tus", "us-gov-phoenix-1"),
];

/// oc2 regions; oc3 regions are recognized by their `us-gov-` prefix
const OC2_REGIONS: &[&str] = &["us-langley-1", "us-luke-1"];

/// Isolated cloud a region belongs to; decides the endpoint domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Realm {
    Oc1,
    Oc2,
    Oc3,
}

impl Realm {
    #[must_use]
    pub fn second_level_domain(self) -> &'static str {
        match self {
            Self::Oc1 => "oraclecloud.com",
            Self::Oc2 | Self::Oc3 => "oraclegovcloud.com",
        }
    }
}

/// Canonical region id such as `us-phoenix-1`.
///
/// Parsing never fails: short codes are expanded and unknown ids are kept
/// as given (lowercased), so new regions work before the SDK knows them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Region(String);

impl Region {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let lowered = value.trim().to_ascii_lowercase();
        let canonical = SHORT_CODES
            .iter()
            .find(|(code, _)| *code == lowered)
            .map_or(lowered, |(_, id)| (*id).to_owned());
        Self(canonical)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn realm(&self) -> Realm {
        if OC2_REGIONS.contains(&self.0.as_str()) {
            Realm::Oc2
        } else if self.0.starts_with("us-gov-") {
            Realm::Oc3
        } else {
            Realm::Oc1
        }
    }

    #[must_use]
    pub fn second_level_domain(&self) -> &'static str {
        self.realm().second_level_domain()
    }

    /// Default host of `service` in this region (`service.region.domain`).
    #[must_use]
    pub fn endpoint(&self, service: &str) -> String {
        format!("{service}.{}.{}", self.0, self.second_level_domain())
    }

    /// Fill `{region}` and `{secondLevelDomain}` in a service endpoint template.
    ///
    /// An empty template falls back to `https://` + [`Region::endpoint`].
    #[must_use]
    pub fn endpoint_for_template(&self, service: &str, template: &str) -> String {
        if template.is_empty() {
            return format!("https://{}", self.endpoint(service));
        }
        template
            .replace("{region}", &self.0)
            .replace("{secondLevelDomain}", self.second_level_domain())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Region {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(value))
    }
}

impl From<&str> for Region {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}
