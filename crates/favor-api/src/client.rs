//! HTTP client for the Favor API.

#![allow(clippy::module_name_repetitions)]

use std::time::Duration;

use anyhow::{Context as _, Result, bail};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::api::FavorApi;
use crate::params::FavorRequest;
use crate::types::{Favor, FavorsResponse, Merchant};

/// Production endpoint of the Favor API.
const DEFAULT_BASE_URL: &str = "https://api.askfavor.com/api/v5/";

/// Header carrying the session token.
const TOKEN_HEADER: &str = "favorToken";

/// Tokens issued by Favor are at least this long; anything shorter is a
/// copy-paste accident.
const TOKEN_MIN_LEN: usize = 32;

/// User agent sent when the builder is not given one.
const DEFAULT_USER_AGENT: &str = concat!("favor-api/", env!("CARGO_PKG_VERSION"));

/// Authenticated Favor API client.
///
/// Construct via [`FavorClient::builder`]; the operations live on the
/// [`FavorApi`] trait.
#[derive(Debug, Clone)]
pub struct FavorClient {
    http_client: Client,
    base_url: Url,
    token: String,
}

/// Envelope of the single-merchant endpoint.
#[derive(Debug, Deserialize)]
struct MerchantEnvelope {
    merchant: Merchant,
}

/// Envelope of the nearby-merchants endpoint.
#[derive(Debug, Deserialize)]
struct MerchantsEnvelope {
    merchants: Vec<Merchant>,
}

/// Envelope of the favor placement endpoint.
#[derive(Debug, Deserialize)]
struct FavorEnvelope {
    favor: Favor,
}

impl FavorClient {
    /// Creates a builder for the client.
    #[must_use]
    pub const fn builder() -> FavorClientBuilder {
        FavorClientBuilder::new()
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("invalid endpoint path: {path}"))?;
        debug!(%url, "GET");
        let response = self
            .http_client
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {path} failed"))?;

        Self::decode_json(response, path).await
    }

    async fn post_form<T>(&self, path: &str, form: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("invalid endpoint path: {path}"))?;
        debug!(%url, "POST");
        let response = self
            .http_client
            .post(url)
            .header(TOKEN_HEADER, &self.token)
            .form(form)
            .send()
            .await
            .with_context(|| format!("POST {path} failed"))?;

        Self::decode_json(response, path).await
    }

    async fn decode_json<T>(response: Response, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Favor API error (HTTP {status}) from {endpoint}: {body}");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read {endpoint} response body"))?;
        let raw_result: std::result::Result<T, _> = serde_json::from_str(&body);
        raw_result.with_context(|| format!("failed to decode {endpoint} response"))
    }
}

impl FavorApi for FavorClient {
    #[instrument(skip_all)]
    async fn get_merchant(&self, id: &str) -> Result<Merchant> {
        let path = format!("merchant/{id}");
        let envelope: MerchantEnvelope = self.get_json(&path, &[]).await?;
        Ok(envelope.merchant)
    }

    #[instrument(skip_all)]
    async fn get_merchants(&self, lat: f64, lng: f64) -> Result<Vec<Merchant>> {
        let query = [
            ("lat", lat.to_string()),
            ("lng", lng.to_string()),
            ("location_source", String::from("gps")),
        ];
        let envelope: MerchantsEnvelope = self.get_json("merchants", &query).await?;
        Ok(envelope.merchants)
    }

    #[instrument(skip_all)]
    async fn get_favors(&self) -> Result<FavorsResponse> {
        self.get_json("favors", &[]).await
    }

    #[instrument(skip_all)]
    async fn request_favor(&self, request: &FavorRequest) -> Result<Favor> {
        let envelope: FavorEnvelope = self.post_form("favors", &request.to_form()).await?;
        Ok(envelope.favor)
    }
}

/// Builder for [`FavorClient`].
#[derive(Debug, Default)]
pub struct FavorClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl FavorClientBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base_url: None,
            token: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the production base URL, e.g. to point the client at a
    /// local test server. The URL must end with `/` for endpoint paths to
    /// append cleanly.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the session token sent with every request. Required.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the default `favor-api/<version>` user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Caps how long a single request may take. No timeout by default.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails when no token is set, the token is shorter than 32 characters,
    /// the base URL does not parse, or the underlying HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<FavorClient> {
        let token = self.token.context("token is required")?;
        if token.len() < TOKEN_MIN_LEN {
            bail!(
                "token must be at least {TOKEN_MIN_LEN} characters, got {}",
                token.len()
            );
        }

        let base_url = match self.base_url {
            Some(raw) => Url::parse(&raw).with_context(|| format!("invalid base URL: {raw}"))?,
            None => Url::parse(DEFAULT_BASE_URL).context("default base URL must parse")?,
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let mut http_builder = Client::builder().user_agent(user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }
        let http_client = http_builder.build().context("failed to build HTTP client")?;

        Ok(FavorClient {
            http_client,
            base_url,
            token,
        })
    }
}
