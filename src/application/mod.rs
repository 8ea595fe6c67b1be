//! Application layer services implementing the client flows.
//!
//! Each flow is a short sequence: validate input locally, call the remote
//! store through a repository trait, then classify the outcome into an
//! [`crate::error::AppError`] the presentation layer can display.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation
//! - [`services::stats_service::StatsService`] - Link statistics lookup

pub mod services;
