//! HTTP transport layer for both calculator services
//!
//! Provides the axum handlers behind the form and query routers.

pub mod handlers;
