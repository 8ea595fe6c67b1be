//! Domain layer containing entities, form rules and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`form`] - Field-level validation of user input
//! - [`repositories`] - Contract of the remote short-link store
//!
//! The domain layer has no dependencies on the HTTP client or the CLI.

pub mod entities;
pub mod form;
pub mod repositories;
