//! Async data-access layer for the book tracker REST API.
//!
//! # Overview
//! `DataService` exposes one method per remote operation on books and
//! readers. Request construction and response parsing live in the sans-IO
//! `BookTrackerClient`; the network round-trip goes through a `Transport`,
//! with `ReqwestTransport` as the production implementation.
//!
//! # Design
//! - `BookTrackerClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit and
//!   testable without a server.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod seed;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{BookTrackerClient, AUTHORIZATION_TOKEN};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::DataService;
pub use transport::{ReqwestTransport, Transport};
pub use types::{AllBooks, Book, BookTrackerError, OldBook, Reader};
