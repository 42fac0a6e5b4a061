//! Staged document construction.
//!
//! Programs are built from five verbs, kept as data, and executed later by
//! an [`Interpreter`] that decides the effect semantics:
//!
//! ```text
//! layout_program(..)  ──►  Program<A, Document<A>>
//!                                 │
//!          ┌──────────────────────┼──────────────────────┐
//!          ▼                      ▼                      ▼
//!   PureInterpreter      OptionalInterpreter      StrictInterpreter
//!   Document<A>          Option<Document<A>>      Result<Document<A>, _>
//! ```

pub mod instruction;
pub mod interpreter;
pub mod layout;
pub mod staged;

pub use instruction::{Instruction, Next, Step};
pub use interpreter::{
    run, AlgebraInterpreter, Interpreter, LoggingInterpreter, OptionalInterpreter,
    PureInterpreter, StrictInterpreter,
};
pub use layout::layout_program;
pub use staged::{
    combine_documents, create_horizontal, create_leaf, create_vertical, sequence,
    validate_document, Program,
};
