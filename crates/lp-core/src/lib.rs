//! # lp-core
//!
//! Core types, ID generation, and error types for Launchpad.
//!
//! This crate provides the foundational types shared across all Launchpad crates:
//! - Stage result structs for the three backend agents (market analysis,
//!   product roadmap, technical blueprint) and the aggregated [`ChainResult`]
//! - The persisted [`AgentOutput`] record and history summaries
//! - Request bodies for every backend route
//! - Startup idea validation and session ID minting
//! - Cross-cutting error types

pub mod diagram;
pub mod entities;
pub mod errors;
pub mod history;
pub mod idea;
pub mod identity;
pub mod ids;
pub mod requests;
pub mod stage;

pub use entities::{AgentOutput, ChainResult, MarketAnalysis, ProductRoadmap, TechBlueprint};
pub use errors::CoreError;
pub use idea::StartupIdea;
pub use identity::RunIdentity;
pub use stage::{Stage, StageOutput};
