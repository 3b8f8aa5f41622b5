//! `Duration` fields written as humantime strings (`"30s"`, `"1m 30s"`).
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Foo {
//!     #[serde(with = "crate::serde_duration")]
//!     timeout: Duration,
//! }
//! ```

use serde::{Deserialize, Deserializer, Serializer, de};
use std::time::Duration;

pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&humantime::format_duration(*d))
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
    let value = String::deserialize(d)?;
    humantime::parse_duration(&value).map_err(de::Error::custom)
}

/// Same encoding for `Option<Duration>`; `None` is written as null.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use std::time::Duration;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => s.collect_str(&humantime::format_duration(*d)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|value| humantime::parse_duration(&value).map_err(de::Error::custom))
            .transpose()
    }
}
