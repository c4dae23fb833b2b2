//! Async client for the ReGraph decentralized AI compute API.
//!
//! The surface mirrors the OpenAI client layout: build a [`ReGraphClient`],
//! then call into one of its resource clients (`chat().completions()`,
//! `embeddings()`, `training().jobs()`, ...). Every call is a single HTTP
//! round trip with no retries.

pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod transport;

pub use api::*;
pub use config::ClientConfig;
pub use error::{ReGraphError, Result};
pub use models::*;
pub use transport::{Method, Transport};
