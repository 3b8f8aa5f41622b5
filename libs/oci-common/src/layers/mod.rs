//! Tower layers of the hyper transport stack
//!
//! - [`UserAgentLayer`] - Adds the SDK User-Agent to requests that lack one

mod user_agent;

pub use user_agent::{UserAgentLayer, UserAgentService};
