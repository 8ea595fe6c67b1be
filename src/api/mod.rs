//! Wire contract of the remote shortening API.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization

pub mod dto;
