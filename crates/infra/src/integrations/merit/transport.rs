//! Signed POST transport for the Merit API

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, field, info_span, warn, Instrument, Span};
use uuid::Uuid;

use super::signing::{encode_signature, sign, timestamp_now};
use crate::errors::conversions::{decode_error, encode_error};
use crate::errors::TransportError;
use crate::http::HttpClient;

/// Stateless signer and sender.
///
/// Credentials and base URL are fixed at construction; the timestamp and
/// signature are computed per call, so one transport can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct MeritTransport {
    http: HttpClient,
    base_url: String,
    api_id: String,
    api_secret: String,
}

impl MeritTransport {
    /// `base_url` must end with `/`; endpoints are appended verbatim.
    pub fn new(
        http: HttpClient,
        base_url: impl Into<String>,
        api_id: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_id: api_id.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign and POST `payload` to `endpoint` (e.g. `v2/getinvoices`).
    ///
    /// Returns `Ok(None)` for a 2xx answer without a body.
    pub async fn post<P, R>(&self, endpoint: &str, payload: &P) -> Result<Option<R>, TransportError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let bytes = self.exchange(endpoint, payload).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!(endpoint, "empty response body");
            return Ok(None);
        }
        serde_json::from_slice(&bytes).map(Some).map_err(decode_error)
    }

    /// Like [`post`](Self::post) for calls whose answer carries nothing of
    /// interest; the body is not parsed.
    pub async fn post_discarding<P>(&self, endpoint: &str, payload: &P) -> Result<(), TransportError>
    where
        P: Serialize + ?Sized,
    {
        self.exchange(endpoint, payload).await.map(drop)
    }

    async fn exchange<P>(&self, endpoint: &str, payload: &P) -> Result<Vec<u8>, TransportError>
    where
        P: Serialize + ?Sized,
    {
        let span = info_span!(
            "merit_request",
            correlation_id = %Uuid::new_v4(),
            endpoint,
            status = field::Empty,
        );

        async {
            let body = serde_json::to_vec(payload).map_err(encode_error)?;
            let timestamp = timestamp_now();
            let signature = sign(&self.api_id, &self.api_secret, &timestamp, &body)?;
            let url = format!(
                "{}{}?ApiId={}&timestamp={}&signature={}",
                self.base_url,
                endpoint,
                self.api_id,
                timestamp,
                encode_signature(&signature)
            );

            let request = self
                .http
                .request(Method::POST, url)
                .header(CONTENT_TYPE, "application/json")
                .body(body);
            let response = self.http.send(request).await?;

            let status = response.status();
            Span::current().record("status", status.as_u16());
            let bytes = response.bytes().await?;

            if !status.is_success() {
                warn!(status = status.as_u16(), "merit request rejected");
                let body = String::from_utf8_lossy(&bytes).into_owned();
                return Err(TransportError::Status { status: status.as_u16(), body });
            }
            Ok(bytes.to_vec())
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for MeritTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeritTransport")
            .field("base_url", &self.base_url)
            .field("api_id", &self.api_id)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
