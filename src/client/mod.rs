//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiKey, ApiSecret, SendSms, SendSmsResponse, StatusCode, ValidationError};

const DEFAULT_SEND_ENDPOINT: &str = "https://rest.nexmo.com/sms/json";
const DEFAULT_THROTTLE_RETRY_DELAY: Duration = Duration::from_secs(1);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Authentication credentials for the Vonage SMS API.
///
/// Only `api_key` + `api_secret` authentication is supported; signature-based
/// request signing is deliberately out of scope for this crate.
pub struct Credentials {
    api_key: ApiKey,
    api_secret: ApiSecret,
}

impl Credentials {
    /// Create credentials and validate that both parts are non-empty.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            api_secret: ApiSecret::new(api_secret)?,
        })
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));
        params.push((
            ApiSecret::FIELD.to_owned(),
            self.api_secret.as_str().to_owned(),
        ));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VonageSmsClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (first message part with a non-zero status),
/// - validation/parse failures.
pub enum VonageError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    ///
    /// HTTP 429 lands here only after the single fixed-delay retry was
    /// also throttled.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The API accepted the HTTP request but rejected the message.
    #[error("message rejected: {status:?} {error_text:?}")]
    Rejected {
        status: StatusCode,
        error_text: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`VonageSmsClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or
/// the delay before the single retry after an HTTP 429.
pub struct VonageSmsClientBuilder {
    credentials: Credentials,
    send_endpoint: String,
    throttle_retry_delay: Duration,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl VonageSmsClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            throttle_retry_delay: DEFAULT_THROTTLE_RETRY_DELAY,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the `sms/json` endpoint URL.
    pub fn send_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.send_endpoint = endpoint.into();
        self
    }

    /// Set how long to wait before the single retry after an HTTP 429.
    pub fn throttle_retry_delay(mut self, delay: Duration) -> Self {
        self.throttle_retry_delay = delay;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`VonageSmsClient`].
    pub fn build(self) -> Result<VonageSmsClient, VonageError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| VonageError::Transport(Box::new(err)))?;

        Ok(VonageSmsClient {
            credentials: self.credentials,
            send_endpoint: self.send_endpoint,
            throttle_retry_delay: self.throttle_retry_delay,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Vonage SMS client.
///
/// This type orchestrates form encoding (including GSM-7/Unicode `type`
/// selection), HTTP submission, the single fixed-delay retry on HTTP 429,
/// and response parsing. By default it posts to
/// `https://rest.nexmo.com/sms/json`.
pub struct VonageSmsClient {
    credentials: Credentials,
    send_endpoint: String,
    throttle_retry_delay: Duration,
    http: Arc<dyn HttpTransport>,
}

impl VonageSmsClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`VonageSmsClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            throttle_retry_delay: DEFAULT_THROTTLE_RETRY_DELAY,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> VonageSmsClientBuilder {
        VonageSmsClientBuilder::new(credentials)
    }

    /// Send an SMS message through Vonage.
    ///
    /// When `SendOptions.encoding` is [`EncodingMode::Auto`](crate::domain::EncodingMode::Auto)
    /// the GSM 03.38 classifier picks the `type` form value.
    ///
    /// Rate limiting: an HTTP 429 response is retried exactly once after a
    /// fixed delay (see [`VonageSmsClientBuilder::throttle_retry_delay`]).
    ///
    /// Errors:
    /// - Returns [`VonageError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`VonageError::Rejected`] when the first message part carries a
    ///   non-zero status,
    /// - [`VonageError::Parse`] for malformed response bodies.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, VonageError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_form_params(&mut params);
        params.extend(crate::transport::encode_send_sms_form(&request));

        let mut response = self
            .http
            .post_form(&self.send_endpoint, params.clone())
            .await
            .map_err(VonageError::Transport)?;

        if response.status == 429 {
            tokio::time::sleep(self.throttle_retry_delay).await;
            response = self
                .http
                .post_form(&self.send_endpoint, params)
                .await
                .map_err(VonageError::Transport)?;
        }

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(VonageError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_send_sms_json_response(&response.body)
            .map_err(|err| VonageError::Parse(Box::new(err)))?;

        if let Some(first) = parsed.first() {
            if !first.status.is_success() {
                return Err(VonageError::Rejected {
                    status: first.status,
                    error_text: first.error_text.clone(),
                });
            }
        }

        Ok(parsed)
    }
}
