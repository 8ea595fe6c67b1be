//! Repository trait definitions for the domain layer.
//!
//! The remote shortening service is the only backing store; the traits here
//! are the seam between the application services and the HTTP client in
//! `crate::infrastructure::http`. Mock implementations are generated via
//! `mockall` for testing.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
