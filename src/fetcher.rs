use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{Error, Result};

/// Response body of a content download, read lazily chunk by chunk.
pub struct ContentStream {
    pub(crate) url: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: BoxStream<'static, Result<Bytes>>,
}

impl ContentStream {
    pub(crate) fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
pub struct FetchClient {
    inner: Client,
}

impl FetchClient {
    pub fn new() -> Self {
        FetchClient { inner: Client::new() }
    }

    /// GET `url` and decode the JSON body. Failures are logged here before
    /// being handed back to the caller.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let res = self.get_response(url).await?;
        let body = res.bytes().await.map_err(|err| log_failure(url, err.into()))?;

        json::from_slice(&body).map_err(|err| log_failure(url, err.into()))
    }

    /// GET `url` and hand back the headers together with the unread body.
    pub async fn fetch_stream(&self, url: &str) -> Result<ContentStream> {
        let res = self.get_response(url).await?;
        let headers = res.headers().clone();
        let body = res.bytes_stream().map_err(Error::from).boxed();

        Ok(ContentStream { url: url.to_owned(), headers, body })
    }

    async fn get_response(&self, url: &str) -> Result<Response> {
        debug!(url, "GET");
        let res = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|err| log_failure(url, err.into()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(log_failure(url, Error::Status { url: url.to_owned(), status }));
        }

        Ok(res)
    }
}

fn log_failure(url: &str, err: Error) -> Error {
    error!(url, error = %err, "fetch failed");
    err
}

#[cfg(test)]
impl ContentStream {
    pub(crate) fn from_bytes(url: &str, content_type: Option<&str>, chunks: Vec<Vec<u8>>) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(value) = content_type {
            headers.insert(CONTENT_TYPE, value.parse().unwrap());
        }
        let body = futures::stream::iter(chunks.into_iter().map(|c| Ok(Bytes::from(c)))).boxed();

        ContentStream { url: url.to_owned(), headers, body }
    }
}
