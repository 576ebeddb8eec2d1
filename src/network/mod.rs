//! HTTP networking module
//!
//! Provides HTTP client functionality for calling the search provider APIs.

mod client;

pub use client::HttpClient;
