//! # API gRPC
//!
//! gRPC server implementation for TMR decision support.
//!
//! Handles:
//! - gRPC service setup and API-key authentication
//! - Service implementations using `tmr-core` for recommendations
//! - gRPC-specific concerns (interceptors, tonic integration)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

pub use service::{pb, ApiKeyInterceptor, TmrService};

pub mod service;
