//! Remote REST API access.
//!
//! - `endpoint`: the table of routes the client calls, with method and auth requirement.
//! - `transport`: the seam to the HTTP stack (`gloo-net` in the browser, a mock in tests).
//! - `client`: typed calls, bearer handling and 401 invalidation.

mod client;
mod endpoint;
mod transport;

pub use client::ApiClient;
pub use endpoint::{Endpoint, Method};
pub use transport::{ApiRequest, ApiResponse, Transport};
