//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` client for the shortening service's JSON API

pub mod http;
