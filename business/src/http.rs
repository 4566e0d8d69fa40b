//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On WASM `reqwest::Response` is not `Send` (it holds JS values), so there the
//! request runs on the JS thread via `wasm_bindgen_futures::spawn_local` and the
//! result comes back over a `flume` channel. Native builds call reqwest directly.
//! Either way [`RequestBuilder::send`] can be awaited inside a `Command` future.

use std::collections::HashMap;

use thiserror::Error;

/// A response reduced to plain owned data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Lowercased header names.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("HTTP error: request cancelled")]
    Cancelled,
}

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
        }
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.execute().await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
            wasm_bindgen_futures::spawn_local(async move {
                let result = self.execute().await;
                // Receiver gone means the command was cancelled; nothing to report.
                drop(tx.send_async(result).await);
            });
            match rx.recv_async().await {
                Ok(result) => result,
                Err(_disconnected) => Err(HttpError::Cancelled),
            }
        }
    }

    async fn execute(self) -> HttpResult<Response> {
        let client = reqwest::Client::new();
        let mut request = client.get(&self.url).query(&self.query);
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_ascii_lowercase(), v.to_owned());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

/// Entry point for building requests. Only `GET` is needed by the user directory.
#[derive(Debug)]
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, headers: &[(&str, &str)], body: &[u8]) -> Response {
        Response {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_response_is_success() {
        assert!(response(200, &[], b"").is_success());
        assert!(response(204, &[], b"").is_success());
        assert!(!response(404, &[], b"").is_success());
        assert!(!response(500, &[], b"").is_success());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let response = response(200, &[("x-total-count", "10")], b"");

        assert_eq!(response.header("x-total-count"), Some("10"));
        assert_eq!(response.header("X-Total-Count"), Some("10"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_response_json() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Probe {
            id: u32,
        }

        let response = response(200, &[], br#"[{"id": 1}, {"id": 2}]"#);
        let data: Vec<Probe> = response.json().expect("valid json");
        assert_eq!(data, vec![Probe { id: 1 }, Probe { id: 2 }]);
    }

    #[test]
    fn test_request_builder_collects_query_in_order() {
        let builder = Client::get("https://example.com/users")
            .query("_page", 2)
            .query("_limit", 5)
            .header("Accept", "application/json");

        assert_eq!(
            builder.query,
            vec![
                ("_page".to_owned(), "2".to_owned()),
                ("_limit".to_owned(), "5".to_owned())
            ]
        );
        assert_eq!(
            builder.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }
}
