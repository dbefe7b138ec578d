//! # sea-core
//!
//! Core types and validation rules for seastate.
//!
//! This crate provides the foundational types shared across all seastate
//! crates:
//! - Entity structs for all domain objects (measurement files, probabilistic
//!   models, contours, etc.)
//! - Distribution family, parameter role, and dependency-function enums
//! - Parameter validation rules applied before a model is persisted
//! - Cross-cutting error types
//! - The `Username` identity newtype passed explicitly between crates

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod validate;
