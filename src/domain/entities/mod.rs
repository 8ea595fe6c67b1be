//! Core domain entities.
//!
//! Plain data structures for what the shortening service stores and reports.
//! They are independent of the JSON wire format (see [`crate::api::dto`]).
//!
//! - [`ShortenedLink`] - A link the service has shortened
//! - [`NewLink`] - Input for creating a link
//! - [`LinkStatistics`] - Usage statistics of a link

pub mod link;
pub mod statistics;

pub use link::{NewLink, ShortenedLink, short_link_url};
pub use statistics::LinkStatistics;
