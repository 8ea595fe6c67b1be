//! HTTP client for the remote shortening service.

pub mod http_link_repository;

pub use http_link_repository::HttpLinkRepository;
