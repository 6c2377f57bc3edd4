//! Testing utilities for the Launchpad workspace.
//!
//! - [`FakeBackend`]: an in-process HTTP server standing in for the agent
//!   backend, recording every request
//! - [`fixtures`]: canned stage responses and stored outputs

#![allow(missing_docs, clippy::missing_panics_doc)]

pub mod fake_backend;
pub mod fixtures;

pub use fake_backend::{FakeBackend, RecordedRequest, Reply, refused_base_url};
