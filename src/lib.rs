//! # URL Shortener Client
//!
//! Client core for a URL shortening service: local validation of what the
//! user submits, random short-path generation, and the two remote flows
//! (create a shortened URL, fetch usage statistics) against the service's
//! JSON API.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as a server would:
//!
//! - **Domain Layer** ([`domain`]) - Entities, form validation and the repository trait
//! - **Application Layer** ([`application`]) - Create and statistics flows
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` implementation of the repository
//! - **API Layer** ([`api`]) - Wire DTOs of the remote JSON contract
//! - **Utilities** ([`utils`]) - Identifier alphabet, generator and URL check
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="https://s.example.com"
//!
//! cargo run -- shorten https://example.com/some/long/page
//! cargo run -- stats promo2024 --qr
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod qr;
pub mod telemetry;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{LinkStatistics, NewLink, ShortenedLink};
    pub use crate::domain::form::CreateLinkForm;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
