//! `reqwest` implementation of the form transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

use forms::{FORM_CONTENT_TYPE, FormError, FormResponse, FormTransport};
use reqwest::header::CONTENT_TYPE;

use crate::error::CliError;

/// Posts forms to `base_url` + endpoint path.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let base_url = normalize_base_url(base_url)?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, url: String, body: String) -> Result<FormResponse, FormError> {
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| FormError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| FormError::Network(e.to_string()))?;
        Ok(FormResponse::new(status, text))
    }
}

impl FormTransport for HttpTransport {
    fn post_form(&self, endpoint: &str, body: String) -> impl Future<Output = Result<FormResponse, FormError>> {
        tracing::debug!(%endpoint, bytes = body.len(), "posting form");
        self.send(endpoint_url(&self.base_url, endpoint), body)
    }
}

/// Accept `http(s)://host[:port][/prefix]`, dropping trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| CliError::InvalidBaseUrl(raw.to_owned()))?;
    if host.is_empty() {
        return Err(CliError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{base_url}/{}", endpoint.trim_start_matches('/'))
}
