// src/program/instruction.rs
//! The instruction set of staged document programs.
//!
//! Every instruction carries its inputs plus a continuation `next` that
//! receives the instruction's declared result and yields `K`, the rest of
//! the program. Interpreters decide how (and whether) `next` gets called.

use crate::model::{Document, Validated};
use std::fmt;

/// Continuation from an instruction's result to the rest of the program.
pub type Next<T, K> = Box<dyn FnOnce(T) -> K>;

/// One step of a staged document program.
pub enum Instruction<A, K> {
    CreateLeaf {
        value: A,
        next: Next<Document<A>, K>,
    },
    CreateHorizontal {
        children: Vec<Document<A>>,
        next: Next<Document<A>, K>,
    },
    CreateVertical {
        children: Vec<Document<A>>,
        next: Next<Document<A>, K>,
    },
    CombineDocuments {
        left: Document<A>,
        right: Document<A>,
        next: Next<Document<A>, K>,
    },
    ValidateDocument {
        document: Document<A>,
        next: Next<Validated<A>, K>,
    },
}

/// An instruction after its construction work is done.
///
/// Construction never fails, so only validation is left for an interpreter
/// to give meaning to.
pub enum Step<A, K> {
    Built(K),
    Validate {
        document: Document<A>,
        next: Next<Validated<A>, K>,
    },
}

impl<A, K> Instruction<A, K> {
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::CreateLeaf { .. } => "create_leaf",
            Instruction::CreateHorizontal { .. } => "create_horizontal",
            Instruction::CreateVertical { .. } => "create_vertical",
            Instruction::CombineDocuments { .. } => "combine_documents",
            Instruction::ValidateDocument { .. } => "validate_document",
        }
    }

    /// Performs the four construction verbs and resumes their continuation.
    pub fn construct(self) -> Step<A, K> {
        match self {
            Instruction::CreateLeaf { value, next } => Step::Built(next(Document::Leaf(value))),
            Instruction::CreateHorizontal { children, next } => {
                Step::Built(next(Document::Horizontal(children)))
            }
            Instruction::CreateVertical { children, next } => {
                Step::Built(next(Document::Vertical(children)))
            }
            Instruction::CombineDocuments { left, right, next } => {
                Step::Built(next(left.combine(right)))
            }
            Instruction::ValidateDocument { document, next } => Step::Validate { document, next },
        }
    }
}

impl<A: 'static, K: 'static> Instruction<A, K> {
    /// Post-composes `g` onto the continuation.
    pub fn map<K2, G>(self, g: G) -> Instruction<A, K2>
    where
        G: FnOnce(K) -> K2 + 'static,
    {
        match self {
            Instruction::CreateLeaf { value, next } => Instruction::CreateLeaf {
                value,
                next: Box::new(move |document| g(next(document))),
            },
            Instruction::CreateHorizontal { children, next } => Instruction::CreateHorizontal {
                children,
                next: Box::new(move |document| g(next(document))),
            },
            Instruction::CreateVertical { children, next } => Instruction::CreateVertical {
                children,
                next: Box::new(move |document| g(next(document))),
            },
            Instruction::CombineDocuments { left, right, next } => {
                Instruction::CombineDocuments {
                    left,
                    right,
                    next: Box::new(move |document| g(next(document))),
                }
            }
            Instruction::ValidateDocument { document, next } => Instruction::ValidateDocument {
                document,
                next: Box::new(move |validated| g(next(validated))),
            },
        }
    }
}

impl<A: fmt::Debug, K> fmt::Debug for Instruction<A, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::CreateLeaf { value, .. } => {
                f.debug_struct("CreateLeaf").field("value", value).finish()
            }
            Instruction::CreateHorizontal { children, .. } => f
                .debug_struct("CreateHorizontal")
                .field("children", children)
                .finish(),
            Instruction::CreateVertical { children, .. } => f
                .debug_struct("CreateVertical")
                .field("children", children)
                .finish(),
            Instruction::CombineDocuments { left, right, .. } => f
                .debug_struct("CombineDocuments")
                .field("left", left)
                .field("right", right)
                .finish(),
            Instruction::ValidateDocument { document, .. } => f
                .debug_struct("ValidateDocument")
                .field("document", document)
                .finish(),
        }
    }
}
