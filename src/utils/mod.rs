//! Stateless helpers shared by the domain and application layers.
//!
//! - [`identifier`] - Short-link identifier validation and generation
//! - [`url_validator`] - HTTP(S) URL syntax validation

pub mod identifier;
pub mod url_validator;
