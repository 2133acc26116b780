//! Purpose: Blocking HTTP GET with a JSON-decoded response body.
//! Exports: `GetRequest`, `data_get`.
//! Role: Transport boundary; one request per call, no shared agent and no retained state.
//! Invariants: No timeout is configured, so an unresponsive server blocks the caller.
//! Invariants: HTTP status codes are never checked; a 5xx body that decodes as JSON
//! is a success. Callers inspect the decoded body for application-level errors.
//! Invariants: Query and header maps are constructed fresh per request.

use crate::error::{Error, ErrorKind};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// Builder for a single GET request. Both maps start empty; inserting the
/// same key twice keeps the later value.
#[derive(Clone, Debug)]
pub struct GetRequest {
    url: String,
    query: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
}

impl GetRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: BTreeMap::new(),
            headers: BTreeMap::new(),
        }
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Issues the request and decodes the response body as JSON.
    ///
    /// Two diagnostic lines go to stdout: one before the request (url and
    /// query map) and one after (url, query map, status code, response
    /// headers). The second line never prints when the transport fails.
    pub fn send<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = Url::parse(&self.url).map_err(|err| {
            Error::new(ErrorKind::Usage)
                .with_message("invalid url")
                .with_url(&self.url)
                .with_source(err)
        })?;

        println!("GET {} {:?}", self.url, self.query);

        let agent = ureq::AgentBuilder::new().build();
        let mut request = agent.request("GET", url.as_str());
        for (name, value) in &self.query {
            request = request.query(name, value);
        }
        for (name, value) in &self.headers {
            request = request.set(name, value);
        }

        // Non-2xx responses come back as Error::Status; the body is still
        // the payload the caller asked for, so recover it.
        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(_code, response)) => response,
            Err(ureq::Error::Transport(err)) => {
                return Err(Error::new(ErrorKind::Transport)
                    .with_message("request failed")
                    .with_url(&self.url)
                    .with_source(err));
            }
        };

        let status = response.status();
        let mut response_headers = BTreeMap::new();
        for name in response.headers_names() {
            if let Some(value) = response.header(&name) {
                response_headers.insert(name, value.to_string());
            }
        }
        println!(
            "GET {} {:?} {} {:?}",
            self.url, self.query, status, response_headers
        );

        let body = response.into_string().map_err(|err| {
            Error::new(ErrorKind::Transport)
                .with_message("failed to read response body")
                .with_url(&self.url)
                .with_source(err)
        })?;
        serde_json::from_str(&body).map_err(|err| {
            Error::new(ErrorKind::Decode)
                .with_message("response body is not valid json")
                .with_url(&self.url)
                .with_source(err)
        })
    }
}

/// Fetches `url` with no query parameters or headers and returns the decoded
/// body as a `serde_json::Value`.
pub fn data_get(url: &str) -> Result<Value, Error> {
    GetRequest::new(url).send()
}
