use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

/// A thin client for loading JSON from arbitrary URLs.
#[derive(Clone, Default)]
pub struct FetchClient {
    pub inner_client: reqwest::Client,
}

/// Options applied to a single request.
///
/// The options are passed through to the transport unmodified; the client
/// builds the request from them but does not interpret them otherwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestConfig {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl FetchClient {
    pub fn new() -> Self {
        Self {
            inner_client: reqwest::Client::new(),
        }
    }

    /// Issue a request and deserialize the JSON response body.
    ///
    /// Any non-2xx status is an error carrying the status text.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        config: &RequestConfig,
    ) -> Result<T, FetchError> {
        let mut request =
            self.inner_client.request(config.method.clone(), url);
        for (name, value) in &config.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &config.body {
            request = request.body(body.clone());
        }

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        json_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-OK response status, containing the status text.
    #[error("{1}")]
    Status(StatusCode, String),
    /// Network failure or malformed response body.
    #[error("Could not fetch the data")]
    Network(#[from] reqwest::Error),
    /// The request was superseded or torn down before completing.
    #[error("the fetch was aborted")]
    Cancelled,
}

impl FetchError {
    /// A cancelled request is voided, not failed; callers skip state
    /// updates for it.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Deserialize a successful response into the desired type, or return an
/// appropriate error.
pub async fn json_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        let reason = status
            .canonical_reason()
            .map(|r| r.to_string())
            .unwrap_or_else(|| status.as_u16().to_string());
        return Err(FetchError::Status(status, reason));
    }
    Ok(response.json::<T>().await?)
}
