//! Shared HTTP gateway.
//!
//! Client-side (hydrate): real fetches via `gloo-net`. Native builds (SSR and
//! unit tests): stubs returning a network error, since these endpoints are
//! only meaningful in the browser.
//!
//! Every outgoing request re-reads the bearer token from durable storage at
//! call time rather than from an in-memory copy, so a token written by any
//! other session-store instance (another tab, a fresh login) is picked up
//! immediately. A storage failure downgrades the request to unauthenticated
//! instead of failing it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::util::storage;

/// Base address of the REST API. Overridable at build time.
pub fn api_base() -> &'static str {
    option_env!("TASKHUB_API_URL").unwrap_or("http://localhost:5000/api")
}

/// Full URL for a resource path under the API base.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Current `Authorization` header value, if a token is stored. Storage
/// failures are swallowed; the request proceeds unauthenticated.
fn auth_header() -> Option<String> {
    storage::read(storage::TOKEN_KEY).ok().flatten().map(|t| bearer(&t))
}

#[cfg(test)]
pub(crate) mod calls {
    //! Thread-local dispatch counter so tests can assert that local
    //! precondition failures never reach the network.

    use std::cell::Cell;

    thread_local! {
        static COUNT: Cell<u32> = const { Cell::new(0) };
    }

    pub fn reset() {
        COUNT.with(|c| c.set(0));
    }

    pub fn total() -> u32 {
        COUNT.with(Cell::get)
    }

    pub(crate) fn record() {
        COUNT.with(|c| c.set(c.get() + 1));
    }
}

#[cfg(test)]
fn record_dispatch() {
    calls::record();
}

#[cfg(not(test))]
fn record_dispatch() {}

/// `GET url` expecting a JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    record_dispatch();
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(url);
        if let Some(header) = auth_header() {
            request = request.header("Authorization", &header);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::from_status(response.status(), url));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, auth_header());
        Err(offline())
    }
}

/// `POST url` with a JSON body, expecting a JSON body back.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(url: &str, body: &B) -> Result<T, ApiError> {
    send_with_body(Method::Post, url, body).await
}

/// `PUT url` with a JSON body, expecting a JSON body back.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(url: &str, body: &B) -> Result<T, ApiError> {
    send_with_body(Method::Put, url, body).await
}

/// `DELETE url`, ignoring any response body.
pub async fn delete(url: &str) -> Result<(), ApiError> {
    record_dispatch();
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::delete(url);
        if let Some(header) = auth_header() {
            request = request.header("Authorization", &header);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::from_status(response.status(), url));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, auth_header());
        Err(offline())
    }
}

#[derive(Clone, Copy)]
enum Method {
    Post,
    Put,
}

async fn send_with_body<T: DeserializeOwned, B: Serialize>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    record_dispatch();
    #[cfg(feature = "hydrate")]
    {
        let mut request = match method {
            Method::Post => gloo_net::http::Request::post(url),
            Method::Put => gloo_net::http::Request::put(url),
        };
        if let Some(header) = auth_header() {
            request = request.header("Authorization", &header);
        }
        let response = request
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::from_status(response.status(), url));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body, auth_header());
        Err(offline())
    }
}

#[cfg(not(feature = "hydrate"))]
fn offline() -> ApiError {
    ApiError::Network("HTTP requests are only available in the browser".to_owned())
}
