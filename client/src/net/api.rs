//! HTTP transport for the form endpoints.
//!
//! Client-side (hydrate): real `POST` requests via `gloo-net`.
//! Server-side (SSR) and native tests: every request resolves to
//! [`FormError::Unavailable`] since these endpoints are only reachable
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A request that produced any response, whatever its status, is `Ok`. Only
//! a request that never got one is an error, and the submitters treat that
//! as a silent no-op for the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use forms::{FormError, FormResponse, FormTransport};

#[cfg(any(test, feature = "hydrate"))]
fn network_error_message(endpoint: &str, detail: &str) -> String {
    format!("POST {endpoint}: {detail}")
}

/// Same-origin transport backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl FormTransport for GlooTransport {
    fn post_form(&self, endpoint: &str, body: String) -> impl Future<Output = Result<FormResponse, FormError>> {
        post_form(endpoint.to_owned(), body)
    }
}

async fn post_form(endpoint: String, body: String) -> Result<FormResponse, FormError> {
    #[cfg(feature = "hydrate")]
    {
        let to_network = |e: gloo_net::Error| FormError::Network(network_error_message(&endpoint, &e.to_string()));

        let resp = gloo_net::http::Request::post(&endpoint)
            .header("Content-Type", forms::FORM_CONTENT_TYPE)
            .body(body)
            .map_err(to_network)?
            .send()
            .await
            .map_err(to_network)?;
        let status = resp.status();
        let text = resp.text().await.map_err(to_network)?;
        Ok(FormResponse::new(status, text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(FormError::Unavailable)
    }
}
