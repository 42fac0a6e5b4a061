// src/traversal.rs
//! Effectful, shape-preserving traversal over documents.
//!
//! The engine knows nothing about failure: an `Optional` or `Fallible`
//! traversal fails as a whole only because sequencing those effects fails
//! as a whole.
//!
//! # Laws
//!
//! - **L1 (Identity)**: `traverse::<Identity, _, _, _>(doc, |v| v) == doc`
//! - **L2 (Shape)**: whenever the result holds a document `out`,
//!   `out.shape() == doc.shape()`
//! - **L3 (All-or-nothing)**: under a failing effect, one failed leaf fails
//!   the whole result; no partially transformed document is produced

use crate::effects::{Of, Sequence};
use crate::model::Document;
use rayon::prelude::*;

/// Maps `f` over every leaf, depth-first and left to right, collecting the
/// effects with `M`.
pub fn traverse<M, A, B, F>(document: Document<A>, mut f: F) -> Of<M, Document<B>>
where
    M: Sequence<Document<B>>,
    F: FnMut(A) -> Of<M, B>,
{
    log::trace!(
        "traversing document with {} leaves",
        document.leaf_count()
    );
    traverse_with::<M, A, B, F>(document, &mut f)
}

fn traverse_with<M, A, B, F>(document: Document<A>, f: &mut F) -> Of<M, Document<B>>
where
    M: Sequence<Document<B>>,
    F: FnMut(A) -> Of<M, B>,
{
    match document {
        Document::Leaf(value) => M::map(f(value), Document::Leaf),
        Document::Horizontal(children) => {
            M::map(traverse_children::<M, A, B, F>(children, f), Document::Horizontal)
        }
        Document::Vertical(children) => {
            M::map(traverse_children::<M, A, B, F>(children, f), Document::Vertical)
        }
        Document::Empty => M::pure(Document::Empty),
    }
}

fn traverse_children<M, A, B, F>(children: Vec<Document<A>>, f: &mut F) -> Of<M, Vec<Document<B>>>
where
    M: Sequence<Document<B>>,
    F: FnMut(A) -> Of<M, B>,
{
    let effects = children
        .into_iter()
        .map(|child| traverse_with::<M, A, B, F>(child, f))
        .collect();
    M::sequence(effects)
}

/// Like [`traverse`], but borrows the document and hands `f` references.
pub fn traverse_ref<M, A, B, F>(document: &Document<A>, mut f: F) -> Of<M, Document<B>>
where
    M: Sequence<Document<B>>,
    F: FnMut(&A) -> Of<M, B>,
{
    traverse_ref_with::<M, A, B, F>(document, &mut f)
}

fn traverse_ref_with<M, A, B, F>(document: &Document<A>, f: &mut F) -> Of<M, Document<B>>
where
    M: Sequence<Document<B>>,
    F: FnMut(&A) -> Of<M, B>,
{
    match document {
        Document::Leaf(value) => M::map(f(value), Document::Leaf),
        Document::Horizontal(children) | Document::Vertical(children) => {
            let effects = children
                .iter()
                .map(|child| traverse_ref_with::<M, A, B, F>(child, f))
                .collect();
            let sequenced = M::sequence(effects);
            if matches!(document, Document::Horizontal(_)) {
                M::map(sequenced, Document::Horizontal)
            } else {
                M::map(sequenced, Document::Vertical)
            }
        }
        Document::Empty => M::pure(Document::Empty),
    }
}

/// Parallel [`traverse`]: sibling subtrees are mapped on the rayon pool, then
/// sequenced in their original order, so the result (including which failure
/// wins) is the same as the sequential traversal.
pub fn par_traverse<M, A, B, F>(document: Document<A>, f: F) -> Of<M, Document<B>>
where
    M: Sequence<Document<B>>,
    A: Send,
    Of<M, Document<B>>: Send,
    F: Fn(A) -> Of<M, B> + Sync,
{
    par_traverse_with::<M, A, B, F>(document, &f)
}

fn par_traverse_with<M, A, B, F>(document: Document<A>, f: &F) -> Of<M, Document<B>>
where
    M: Sequence<Document<B>>,
    A: Send,
    Of<M, Document<B>>: Send,
    F: Fn(A) -> Of<M, B> + Sync,
{
    match document {
        Document::Leaf(value) => M::map(f(value), Document::Leaf),
        Document::Horizontal(children) => {
            M::map(par_children::<M, A, B, F>(children, f), Document::Horizontal)
        }
        Document::Vertical(children) => {
            M::map(par_children::<M, A, B, F>(children, f), Document::Vertical)
        }
        Document::Empty => M::pure(Document::Empty),
    }
}

fn par_children<M, A, B, F>(children: Vec<Document<A>>, f: &F) -> Of<M, Vec<Document<B>>>
where
    M: Sequence<Document<B>>,
    A: Send,
    Of<M, Document<B>>: Send,
    F: Fn(A) -> Of<M, B> + Sync,
{
    let effects: Vec<Of<M, Document<B>>> = children
        .into_par_iter()
        .map(|child| par_traverse_with::<M, A, B, F>(child, f))
        .collect();
    M::sequence(effects)
}

impl<A> Document<A> {
    /// Method form of [`traverse`]: `doc.traverse::<Optional, _, _>(f)`.
    pub fn traverse<M, B, F>(self, f: F) -> Of<M, Document<B>>
    where
        M: Sequence<Document<B>>,
        F: FnMut(A) -> Of<M, B>,
    {
        traverse::<M, A, B, F>(self, f)
    }
}
