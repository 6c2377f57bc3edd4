//! # lp-chain
//!
//! Orchestrates the three backend stages for one startup idea:
//! validate the idea, resolve the run identity, then market analysis,
//! product roadmap and technical blueprint in order, returning a
//! [`ChainResult`](lp_core::ChainResult) or the first failure.

pub mod error;
pub mod observer;
pub mod runner;

pub use error::{ChainError, ErrorCategory};
pub use observer::{ChainObserver, NoopObserver};
pub use runner::ChainRunner;
