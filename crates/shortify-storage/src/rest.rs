use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shortify_core::error::{Result, StorageError};
use shortify_core::store::{ReadStore, Store};
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;
use url::Url;

/// Connection settings for a [`RestStore`].
///
/// Both fields may be empty. The store is still constructed, but every call
/// then fails with [`StorageError::Unavailable`] (or is rejected by the
/// remote end for a missing token).
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct RestStoreSettings {
    /// Base URL of the REST endpoint, e.g. `https://eu1-example.upstash.io`.
    #[builder(default, setter(into))]
    pub url: String,
    /// Bearer token sent with every request.
    #[builder(default, setter(into))]
    pub token: String,
}

/// Body of every REST reply: either a `result` or an `error`.
#[derive(Debug, Deserialize)]
struct RestReply<T> {
    result: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

/// A [`Store`] backed by an Upstash-compatible REST API.
///
/// Commands map to `/<command>/<key>` paths below the base URL:
///
/// - `GET  /get/<key>`
/// - `POST /set/<key>` with the value as the raw request body
/// - `POST /incr/<key>`
///
/// Every call is a single attempt with the client's default timeouts.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: Option<Url>,
    token: String,
}

impl RestStore {
    /// Creates a new REST store with a fresh HTTP client.
    pub fn new(settings: RestStoreSettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    /// Creates a new REST store that shares an existing HTTP client.
    pub fn with_client(client: Client, settings: RestStoreSettings) -> Self {
        let base_url = match Url::parse(&settings.url) {
            Ok(url) if !url.cannot_be_a_base() => Some(url),
            Ok(url) => {
                warn!(url = %url, "store URL cannot carry a path, store calls will fail");
                None
            }
            Err(e) => {
                warn!(url = %settings.url, error = %e, "store URL is not usable, store calls will fail");
                None
            }
        };

        if settings.token.is_empty() {
            warn!("store token is empty, requests are sent without credentials");
        }

        Self {
            client,
            base_url,
            token: settings.token,
        }
    }

    /// Returns the configured base URL, if it parsed.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Builds the endpoint URL for `command` applied to `key`.
    fn endpoint(&self, command: &str, key: &str) -> Result<Url> {
        let mut url = self
            .base_url
            .clone()
            .ok_or_else(|| StorageError::Unavailable("store URL is not configured".to_string()))?;

        url.path_segments_mut()
            .map_err(|()| StorageError::Unavailable("store URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .push(command)
            .push(key);

        Ok(url)
    }

    /// Sends `request` and decodes the `result` of the reply.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Option<T>> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<RestReply<serde_json::Value>>(&body)
                .ok()
                .and_then(|reply| reply.error)
                .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned());
            return Err(StorageError::Rejected(format!("{status}: {message}")));
        }

        let reply: RestReply<T> = serde_json::from_slice(&body)
            .map_err(|e| StorageError::InvalidData(format!("malformed store reply: {e}")))?;

        match reply.error {
            Some(message) => Err(StorageError::Rejected(message)),
            None => Ok(reply.result),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> StorageError {
    let message = err.to_string();

    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_connect() || err.is_request() {
        StorageError::Unavailable(message)
    } else if err.is_decode() || err.is_body() {
        StorageError::InvalidData(message)
    } else {
        StorageError::Operation(message)
    }
}

#[async_trait]
impl ReadStore for RestStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let url = self.endpoint("get", key)?;
        trace!(key, "fetching value from REST store");

        let value = self.execute::<String>(self.client.get(url)).await?;
        debug!(key, hit = value.is_some(), "fetched value from REST store");
        Ok(value)
    }
}

#[async_trait]
impl Store for RestStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let url = self.endpoint("set", key)?;
        trace!(key, "writing value to REST store");

        self.execute::<String>(self.client.post(url).body(value.to_owned()))
            .await?;
        debug!(key, "wrote value to REST store");
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<u64> {
        let url = self.endpoint("incr", key)?;
        trace!(key, "incrementing counter in REST store");

        let value = self
            .execute::<i64>(self.client.post(url))
            .await?
            .ok_or_else(|| {
                StorageError::InvalidData(format!("increment of '{key}' returned no value"))
            })?;

        u64::try_from(value).map_err(|_| {
            StorageError::InvalidData(format!("counter at '{key}' is negative: {value}"))
        })
    }
}
