//! HTTP client adapter for the Jikan REST API.
//!
//! - `transport`: the network seam (`HttpTransport`), real impl on reqwest
//! - `query`: ordered query-string builder that drops unset fields
//! - `client`: URL construction, status handling and JSON decoding

mod client;
mod query;
mod transport;

pub use client::JikanClient;
pub use query::QueryParams;
#[cfg(test)]
pub use transport::MockHttpTransport;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
