//! API client module for the places admin backend.
//!
//! `client` is the mediator every call goes through; `middleware` holds its
//! outbound and inbound stages. The remaining modules are one function per
//! endpoint.

pub mod auth;
pub mod categories;
pub mod client;
pub mod error;
pub mod images;
pub mod middleware;
pub mod places;
pub mod request;
pub mod social;
pub mod tags;
pub mod types;

pub use client::{ApiClient, ApiResponse};
pub use error::ApiError;
pub use request::ApiRequest;
