//! REST client and its builder.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::config::{CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use crate::error::{Error, Result};
use crate::headers;

/// Thin JSON REST client bound to a base URL.
///
/// Every call builds a request against `base_url + path` (verbatim
/// concatenation, the caller supplies well-formed paths), applies the
/// client's header map, executes it through the shared transport, and
/// returns the status code together with the raw response body. HTTP
/// error statuses (4xx/5xx) are not treated as errors.
///
/// The client holds no state between calls. All fields are read-only
/// after construction and `reqwest::Client` is an `Arc`-backed handle,
/// so one instance can be shared freely across tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use rest_client::RestClient;
///
/// # async fn example() -> rest_client::Result<()> {
/// let client = RestClient::builder()
///     .base_url("https://api.example.com")
///     .build()?;
///
/// let response = client.get("/items").await?;
/// println!("{}: {}", response.status, response.text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    client: reqwest::Client,
    headers: HeaderMap,
}

/// Status code and raw body of a completed request.
#[derive(Debug, Clone)]
pub struct RestResponse {
    /// HTTP status code returned by the server.
    pub status: StatusCode,
    /// Full response body.
    pub body: Bytes,
}

impl RestResponse {
    /// Response body decoded as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl RestClient {
    /// Create a client over `client` with the default header set.
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            headers: headers::default_headers(),
        }
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Header map applied to every outgoing request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Send a POST request with an optional JSON payload.
    pub async fn post<T>(&self, path: &str, payload: Option<&T>) -> Result<RestResponse>
    where
        T: Serialize + ?Sized,
    {
        self.send(Method::POST, path, payload).await
    }

    /// Send a PUT request with an optional JSON payload.
    pub async fn put<T>(&self, path: &str, payload: Option<&T>) -> Result<RestResponse>
    where
        T: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, payload).await
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> Result<RestResponse> {
        self.send(Method::GET, path, None::<&serde_json::Value>)
            .await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<RestResponse> {
        self.send(Method::DELETE, path, None::<&serde_json::Value>)
            .await
    }

    /// Create-or-update. On the wire this is identical to [`RestClient::post`].
    pub async fn upsert<T>(&self, path: &str, payload: Option<&T>) -> Result<RestResponse>
    where
        T: Serialize + ?Sized,
    {
        self.post(path, payload).await
    }

    /// Shared dispatch path for all verbs.
    async fn send<T>(&self, method: Method, path: &str, payload: Option<&T>) -> Result<RestResponse>
    where
        T: Serialize + ?Sized,
    {
        let body = match payload {
            Some(payload) => Some(to_indented_json(payload)?),
            None => None,
        };

        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = url.as_str(), "sending request");

        let mut builder = self.client.request(method, url.as_str());
        if let Some(body) = body {
            builder = builder.body(body);
        }

        // Client headers go on last and replace same-named entries.
        let request = builder
            .headers(self.headers.clone())
            .build()
            .map_err(Error::BuildRequest)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| Error::ReadBody { status, source })?;

        Ok(RestResponse { status, body })
    }
}

/// Serialize a payload to 4-space-indented JSON.
fn to_indented_json<T>(payload: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(128);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    payload.serialize(&mut serializer).map_err(Error::Serialize)?;
    Ok(buf)
}

/// Builder for [`RestClient`].
pub struct RestClientBuilder {
    base_url: Option<String>,
    client: Option<reqwest::Client>,
    overrides: Vec<(String, String)>,
}

impl RestClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            client: None,
            overrides: Vec::new(),
        }
    }

    /// Set the base URL (required).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Inject the shared transport.
    ///
    /// Timeouts, TLS, and proxy settings stay with the injected client;
    /// they are never touched here. When absent, a default client with
    /// the timeouts from [`crate::config`] is built.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Override or extend the default header map. Repeatable.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((name.into(), value.into()));
        self
    }

    /// Build the client, validating configuration.
    pub fn build(self) -> Result<RestClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base URL is required".into()))?;

        let mut headers = headers::default_headers();
        headers::apply_overrides(&mut headers, &self.overrides)?;

        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| Error::Config(format!("failed to build default transport: {e}")))?,
        };

        Ok(RestClient {
            base_url,
            client,
            headers,
        })
    }
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
