//! Capability algebras for docgrid.
//!
//! This module defines the direct-call capability for building documents.
//! It mirrors the staged instruction set in [`crate::program`], but each
//! operation returns its effect immediately:
//!
//! ```text
//! Caller
//!    ↓
//! DocumentAlgebra (algebras/)      ◄── layout_direct
//!    ↓
//! Effect instance (effects.rs)
//! ```
//!
//! # Laws
//!
//! Each trait documents algebraic laws that all implementations must satisfy.
//! These are verified via law tests in each module's test suite.

pub mod document;
pub mod error;

// Re-exports for convenience
pub use document::{
    layout_direct, DocumentAlgebra, DocumentAlgebraExt, OptionalBuilder, PureBuilder,
    StrictBuilder,
};
pub use error::DocumentError;
