// src/lib.rs
//! docgrid library: documents built from horizontal and vertical subdivision,
//! with shape-preserving effectful traversal and two ways to build them.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Domain model**: `Document`, `Shape`, `Arrangement`
//! - **Effects**: `Effect`, `Monad` and the `Identity`, `Optional`, `Fallible`, `Many` instances
//! - **Traversal**: `traverse`, `traverse_ref`, `par_traverse`
//! - **Staged programs**: `Program`, `Instruction`, interpreters and `run`
//! - **Capability algebra**: `DocumentAlgebra` and its builders
//! - **Error handling**: `DocumentError`, `AppError`

pub mod algebras;
pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod program;
pub mod traversal;

// --- Error Handling ---
pub use crate::algebras::DocumentError;
pub use crate::error::AppError;

// --- Configuration ---
pub use crate::config::{BuildStyle, CommandLineInput, RunConfig, Semantics};

// --- Domain Model ---
pub use crate::model::{Arrangement, Document, Shape, Validated};

// --- Effects and Traversal ---
pub use crate::effects::{Effect, Fallible, Identity, Many, Monad, Of, Optional, Sequence};
pub use crate::traversal::{par_traverse, traverse, traverse_ref};

// --- Staged Programs ---
pub use crate::program::{
    combine_documents, create_horizontal, create_leaf, create_vertical, layout_program, run,
    validate_document, AlgebraInterpreter, Instruction, Interpreter, LoggingInterpreter,
    OptionalInterpreter, Program, PureInterpreter, StrictInterpreter,
};

// --- Algebras (Capability Traits) ---
pub use crate::algebras::{
    layout_direct, DocumentAlgebra, DocumentAlgebraExt, OptionalBuilder, PureBuilder,
    StrictBuilder,
};

// --- Pipeline Traits ---
pub use crate::pipeline::{DocumentRenderer, DocumentSource, Pipeline};
