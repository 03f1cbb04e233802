//! Inkwell - a terminal client for writing and reading a blog.
//!
//! This crate provides an admin post editor backed by a remote HTTP API and
//! a reader view with a theme toggle, a search box and an in-memory comment
//! panel, laid out in clean-architecture layers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, routes and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "inkwell";
