//! HTTP API
//!
//! Session handling and REST calls to the analytics backend.

pub mod client;

pub use client::*;
