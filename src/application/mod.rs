//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `AccountEngine` which acts as the primary entry
//! point for dispatching account actions. It keeps the pure state transitions
//! in the domain layer and owns the side-effecting conversion lookup.

pub mod engine;
