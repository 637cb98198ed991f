//! Default header construction and override merging.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::{ACCEPT_JSON, CONTENT_TYPE_JSON};
use crate::error::{Error, Result};

/// Build the default header map applied to every outgoing request.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        reqwest::header::ACCEPT,
        HeaderValue::from_static(ACCEPT_JSON),
    );

    headers.insert(
        reqwest::header::CONTENT_TYPE,
        HeaderValue::from_static(CONTENT_TYPE_JSON),
    );

    headers
}

/// Merge caller-supplied overrides onto `headers`.
///
/// An override replaces a same-named entry; every other entry is kept.
pub fn apply_overrides(headers: &mut HeaderMap, overrides: &[(String, String)]) -> Result<()> {
    for (name, value) in overrides {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::Config(format!("invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| Error::Config(format!("invalid value for header '{name}': {e}")))?;
        headers.insert(header_name, header_value);
    }
    Ok(())
}
