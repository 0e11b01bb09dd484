use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use fd_core::api::ApiError;
use fd_core::auth::AuthContext;

/// Shared HTTP plumbing: one reqwest client, the backend base URL, and the
/// bearer token from the explicit [`AuthContext`].
///
/// Maps every failure into the [`ApiError`] taxonomy at this boundary so the
/// layers above never see a reqwest type.
pub struct ConsoleHttpClient {
    http: reqwest::Client,
    base_url: String,
    auth: AuthContext,
}

impl ConsoleHttpClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        auth: AuthContext,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(self.auth.bearer_token())
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.auth.bearer_token())
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}
