//! Lens API service.
//!
//! Serves aggregated GitHub user profiles: one request fans out to the GitHub
//! user and repository endpoints concurrently and returns a single merged
//! document.
//!
//! # Configuration
//!
//! See [`config::LensApiConfig`] for the available flags and environment
//! variables.
//!
//! # Errors
//!
//! A missing user is reported as `404`, any other GitHub failure as `502` and
//! everything else as `500`. See [`profile::ProfileError`].

pub mod config;
pub mod context;
pub mod profile;
pub mod server;

pub(crate) mod error;
pub(crate) mod handlers;
