//! Pinboard API client
//!
//! Every call is a single authenticated GET. The token travels as the
//! `auth_token` query parameter and `format=json` is always requested.

use std::time::Duration;

pub use reqwest::Url;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{parse_tag_counts, Tag};

/// User agent sent with every request
const USER_AGENT: &str = concat!("pin/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Something that can perform a GET request
pub trait Transport {
    fn get(&self, url: &Url) -> ApiResult<HttpResponse>;
}

/// Blocking HTTP transport backed by reqwest
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> ApiResult<HttpResponse> {
        // Request errors carry the URL, and with it the token
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| e.without_url())?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| e.without_url())?;
        Ok(HttpResponse { status, body })
    }
}

/// Client for the tag endpoints of the Pinboard API
pub struct PinboardClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
    token: String,
}

impl PinboardClient<HttpTransport> {
    /// Create a client talking to the configured API over HTTP
    pub fn from_config(config: &Config, token: impl Into<String>) -> ApiResult<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(transport, &config.api_url, token))
    }
}

impl<T: Transport> PinboardClient<T> {
    pub fn with_transport(transport: T, base_url: &str, token: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// URL of the tag listing endpoint
    pub fn tags_url(&self) -> ApiResult<Url> {
        self.endpoint("tags/get", &[])
    }

    /// URL of the tag rename endpoint
    pub fn rename_url(&self, old: &str, new: &str) -> ApiResult<Url> {
        self.endpoint("tags/rename", &[("old", old), ("new", new)])
    }

    /// Fetch all tags with their use counts, in no particular order
    pub fn get_tags(&self) -> ApiResult<Vec<Tag>> {
        let url = self.tags_url()?;
        let body = self.fetch(&url)?;
        let tags = parse_tag_counts(&body)?;
        debug!("Parsed {} tags", tags.len());
        Ok(tags)
    }

    /// Rename `old` to `new`, merging into `new` if it already exists
    ///
    /// Returns the response body unmodified.
    pub fn rename_tag(&self, old: &str, new: &str) -> ApiResult<String> {
        let url = self.rename_url(old, new)?;
        self.fetch(&url)
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> ApiResult<Url> {
        let raw = format!("{}/{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            details: e.to_string(),
        })?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("auth_token", &self.token);
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("format", "json");
        }

        Ok(url)
    }

    /// GET `url`, returning the body of a 200 response
    fn fetch(&self, url: &Url) -> ApiResult<String> {
        let shown = redact_token(url);
        debug!("GET {}...", shown);
        let response = self.transport.get(url)?;
        debug!("GET {}...done({}).", shown, response.status);
        trace!("Response body: {}", response.body);

        if response.status != 200 {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}

/// Render a URL with its `auth_token` value masked
fn redact_token(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "auth_token" {
                "<redacted>".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut shown = url.clone();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}
