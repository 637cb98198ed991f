//! Default header values and fallback transport configuration.

use std::time::Duration;

/// Default `Accept` header value.
pub const ACCEPT_JSON: &str = "application/json;charset=UTF-8";

/// Default `Content-Type` header value.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Connect timeout for the default transport.
///
/// Only used when no [`reqwest::Client`] is injected at construction;
/// an injected client keeps whatever timeouts its owner configured.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Request timeout for the default transport.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);
