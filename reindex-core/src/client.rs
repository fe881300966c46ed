//! GraphQL client abstraction and the HTTP client for Reindex services.
//!
//! [`SchemaClient`] is the seam the fetch workflow runs against. Production
//! code uses [`ReindexClient`], which posts queries to the `/graphql`
//! endpoint of an application; tests substitute their own implementations.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::{
    Result,
    error::{ReindexError, redact_url},
    models::QueryResponse,
};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("reindex-cli/", env!("CARGO_PKG_VERSION"));

/// Path of the GraphQL endpoint relative to the application URL.
const GRAPHQL_PATH: &str = "graphql";

/// Something that can execute GraphQL queries against a Reindex application.
///
/// # Object Safety
/// This trait is object-safe, allowing for dynamic dispatch through
/// `Box<dyn SchemaClient>` or `Arc<dyn SchemaClient>`.
#[async_trait]
pub trait SchemaClient: Send + Sync {
    /// Application URL, used for progress messages only.
    fn url(&self) -> &str;

    /// Executes `query` and returns the decoded response envelope.
    ///
    /// GraphQL-level errors are part of a successful return; only transport
    /// and decoding failures are reported as `Err`.
    ///
    /// # Errors
    /// Returns error if the request cannot be sent, the service answers with
    /// a non-success HTTP status, or the body is not a valid response.
    async fn query(&self, query: &str) -> Result<QueryResponse>;
}

/// Connection settings for a Reindex application.
///
/// # Example
/// ```rust
/// use reindex_core::ClientConfig;
///
/// let config = ClientConfig::new("https://example.myreindex.com")
///     .with_token("secret-token");
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.token.as_deref(), Some("secret-token"));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Application URL
    pub url: String,
    /// Bearer token sent in the `Authorization` header
    pub token: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &redact_url(&self.url))
            .field("token", &self.token.as_ref().map(|_| "****"))
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration without a token.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
        }
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Validates the application URL.
    ///
    /// # Errors
    /// Returns error if the URL does not parse or is not `http`/`https`.
    pub fn validate(&self) -> Result<()> {
        self.parsed_url().map(|_| ())
    }

    /// Resolves the GraphQL endpoint for this application.
    ///
    /// A path on the application URL is kept, so
    /// `https://host/app` resolves to `https://host/app/graphql`.
    ///
    /// # Errors
    /// Returns error if the URL is invalid.
    pub fn endpoint(&self) -> Result<Url> {
        let base = self.parsed_url()?;
        let endpoint = format!("{}/{}", base.as_str().trim_end_matches('/'), GRAPHQL_PATH);
        Url::parse(&endpoint).map_err(|e| {
            ReindexError::configuration(format!(
                "Invalid GraphQL endpoint {}: {}",
                redact_url(&endpoint),
                e
            ))
        })
    }

    fn parsed_url(&self) -> Result<Url> {
        if self.url.trim().is_empty() {
            return Err(ReindexError::configuration(
                "Reindex URL is required. Set REINDEX_URL or pass --url.",
            ));
        }

        let parsed = Url::parse(&self.url).map_err(|e| {
            ReindexError::configuration(format!(
                "Invalid Reindex URL {}: {}",
                redact_url(&self.url),
                e
            ))
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(ReindexError::configuration(format!(
                "Unsupported URL scheme '{}', expected http or https",
                scheme
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: serde_json::Map<String, serde_json::Value>,
}

/// HTTP client for a Reindex application's GraphQL endpoint.
///
/// No timeout is configured and failed requests are not retried.
pub struct ReindexClient {
    config: ClientConfig,
    endpoint: Url,
    http: reqwest::Client,
}

impl ReindexClient {
    /// Creates a client for the configured application.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ReindexError::transport("Failed to build HTTP client", e))?;

        Ok(Self {
            config,
            endpoint,
            http,
        })
    }

    /// The resolved GraphQL endpoint.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SchemaClient for ReindexClient {
    fn url(&self) -> &str {
        &self.config.url
    }

    async fn query(&self, query: &str) -> Result<QueryResponse> {
        let request = GraphQLRequest {
            query,
            variables: serde_json::Map::new(),
        };

        debug!("POST {}", redact_url(self.endpoint.as_str()));

        let mut builder = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(&request);

        if let Some(token) = &self.config.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ReindexError::transport("Failed to send GraphQL request", e))?;

        let status = response.status();
        debug!("Response status: {}", status);

        let response = response.error_for_status().map_err(|e| {
            ReindexError::transport(format!("Reindex service returned {}", status), e)
        })?;

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| ReindexError::transport("Failed to decode GraphQL response", e))
    }
}
