//! HTTP transport for the tender backend.

pub mod client;

pub use client::{HttpClient, RawBody};
