//! Response body handle for successful requests.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// The unconsumed body of a response classified as success.
///
/// The body is not read by the client. Decode it with [`json`](Self::json),
/// [`text`](Self::text) or [`bytes`](Self::bytes), or stream it chunk by
/// chunk with [`chunk`](Self::chunk).
///
/// Note that under the default [`StatusPolicy`](crate::StatusPolicy) this may
/// carry a non-2xx status such as 403 or 422; check [`status`](Self::status)
/// when that matters.
#[derive(Debug)]
pub struct ResponseBody {
    response: reqwest::Response,
}

impl ResponseBody {
    pub(crate) const fn new(response: reqwest::Response) -> Self {
        Self { response }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Returns the response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.response.headers()
    }

    /// Reads the next chunk of the body, or `None` at the end.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the connection fails mid-body.
    pub async fn chunk(&mut self) -> Result<Option<Vec<u8>>, reqwest::Error> {
        Ok(self.response.chunk().await?.map(|chunk| chunk.to_vec()))
    }

    /// Reads the whole body as bytes.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the body cannot be read.
    pub async fn bytes(self) -> Result<Vec<u8>, reqwest::Error> {
        Ok(self.response.bytes().await?.to_vec())
    }

    /// Reads the whole body as text.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the body cannot be read or decoded.
    pub async fn text(self) -> Result<String, reqwest::Error> {
        self.response.text().await
    }

    /// Reads the whole body and deserializes it as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or is not valid JSON for `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, reqwest::Error> {
        self.response.json().await
    }

    /// Returns the underlying transport response.
    #[must_use]
    pub fn into_inner(self) -> reqwest::Response {
        self.response
    }
}
