//! Blog post API adapter.

mod client;
mod dto;

pub use client::{DEFAULT_TIMEOUT, HttpPostApi};
