//! `gloo-net` transport for the API client.

use async_trait::async_trait;
use gloo_net::http::Request;

use common::api::{ApiRequest, ApiResponse, Method, Transport};
use common::error::ApiError;

/// Sends requests through the browser `fetch` API.
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|err| ApiError::Network(err.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        into_response(status, response.text().await)
    }
}

/// A body that cannot be read is a transport failure, not an empty answer.
fn into_response(status: u16, body: Result<String, gloo_net::Error>) -> Result<ApiResponse, ApiError> {
    let body = body.map_err(|err| ApiError::Network(format!("reading response body: {err}")))?;
    Ok(ApiResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_body_is_a_network_error() {
        let result = into_response(200, Err(gloo_net::Error::GlooError("stream aborted".to_string())));
        assert!(matches!(result, Err(ApiError::Network(message)) if message.contains("stream aborted")));
    }

    #[test]
    fn readable_body_is_kept() {
        let response = into_response(201, Ok("{}".to_string())).expect("body read");
        assert_eq!(response.status, 201);
        assert_eq!(response.body, "{}");
    }
}
