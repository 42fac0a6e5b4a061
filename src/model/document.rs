// src/model/document.rs
//! The recursive document tree.
//!
//! A document subdivides space horizontally and vertically until it reaches
//! leaves that hold values. Documents are plain owned values: children live
//! in the `Vec` of their parent and every transformation builds a new tree.

use crate::algebras::DocumentError;
use crate::constants::EMPTY_GLYPH;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tree of cells arranged by horizontal and vertical subdivision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Document<A> {
    /// A single value.
    Leaf(A),
    /// Children laid out left to right.
    Horizontal(Vec<Document<A>>),
    /// Children laid out top to bottom.
    Vertical(Vec<Document<A>>),
    /// Nothing. The identity of [`Document::combine`].
    Empty,
}

/// The skeleton of a document with every leaf value erased.
///
/// Two documents have the same shape iff their `Shape`s are equal.
pub type Shape = Document<()>;

/// The outcome of validating a document.
pub type Validated<A> = Result<Document<A>, DocumentError>;

impl<A> Default for Document<A> {
    fn default() -> Self {
        Document::Empty
    }
}

impl<A> Document<A> {
    pub fn leaf(value: A) -> Self {
        Document::Leaf(value)
    }

    pub fn horizontal(children: impl IntoIterator<Item = Document<A>>) -> Self {
        Document::Horizontal(children.into_iter().collect())
    }

    pub fn vertical(children: impl IntoIterator<Item = Document<A>>) -> Self {
        Document::Vertical(children.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Document::Empty)
    }

    /// Merges two documents into one container.
    ///
    /// `Horizontal` is the carrier: empty sides vanish, horizontal sides are
    /// spliced in place and anything else becomes one more child. This makes
    /// the operation associative with `Empty` as its two-sided identity.
    pub fn combine(self, other: Document<A>) -> Document<A> {
        match (self, other) {
            (Document::Empty, right) => right,
            (left, Document::Empty) => left,
            (Document::Horizontal(mut left), Document::Horizontal(right)) => {
                left.extend(right);
                Document::Horizontal(left)
            }
            (Document::Horizontal(mut left), right) => {
                left.push(right);
                Document::Horizontal(left)
            }
            (left, Document::Horizontal(right)) => {
                let mut children = Vec::with_capacity(right.len() + 1);
                children.push(left);
                children.extend(right);
                Document::Horizontal(children)
            }
            (left, right) => Document::Horizontal(vec![left, right]),
        }
    }

    /// Combines every document in order, starting from `Empty`.
    pub fn concat(documents: impl IntoIterator<Item = Document<A>>) -> Document<A> {
        documents
            .into_iter()
            .fold(Document::Empty, Document::combine)
    }

    /// Succeeds with the document unless it is `Empty`.
    pub fn validate(self) -> Validated<A> {
        match self {
            Document::Empty => Err(DocumentError::Empty),
            document => Ok(document),
        }
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Document::Leaf(_) => 1,
            Document::Horizontal(children) | Document::Vertical(children) => {
                children.iter().map(Document::leaf_count).sum()
            }
            Document::Empty => 0,
        }
    }

    /// Number of nodes in the tree, groups and `Empty` included.
    pub fn size(&self) -> usize {
        match self {
            Document::Horizontal(children) | Document::Vertical(children) => {
                1 + children.iter().map(Document::size).sum::<usize>()
            }
            Document::Leaf(_) | Document::Empty => 1,
        }
    }

    /// Longest root-to-node path, counted in nodes. `Empty` has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Document::Leaf(_) => 1,
            Document::Horizontal(children) | Document::Vertical(children) => {
                1 + children.iter().map(Document::depth).max().unwrap_or(0)
            }
            Document::Empty => 0,
        }
    }

    /// Borrows every leaf value, left to right and top to bottom.
    pub fn leaves(&self) -> Leaves<'_, A> {
        Leaves { stack: vec![self] }
    }

    /// Pure, shape-preserving map over the leaves.
    pub fn map<B, F>(self, mut f: F) -> Document<B>
    where
        F: FnMut(A) -> B,
    {
        self.map_with(&mut f)
    }

    fn map_with<B, F>(self, f: &mut F) -> Document<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Document::Leaf(value) => Document::Leaf(f(value)),
            Document::Horizontal(children) => {
                Document::Horizontal(children.into_iter().map(|c| c.map_with(f)).collect())
            }
            Document::Vertical(children) => {
                Document::Vertical(children.into_iter().map(|c| c.map_with(f)).collect())
            }
            Document::Empty => Document::Empty,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Document::Leaf(_) => Document::Leaf(()),
            Document::Horizontal(children) => {
                Document::Horizontal(children.iter().map(Document::shape).collect())
            }
            Document::Vertical(children) => {
                Document::Vertical(children.iter().map(Document::shape).collect())
            }
            Document::Empty => Document::Empty,
        }
    }
}

impl<A> FromIterator<Document<A>> for Document<A> {
    fn from_iter<I: IntoIterator<Item = Document<A>>>(iter: I) -> Self {
        Document::concat(iter)
    }
}

/// In-order iterator over borrowed leaf values. See [`Document::leaves`].
pub struct Leaves<'a, A> {
    stack: Vec<&'a Document<A>>,
}

impl<'a, A> Iterator for Leaves<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Document::Leaf(value) => return Some(value),
                Document::Horizontal(children) | Document::Vertical(children) => {
                    self.stack.extend(children.iter().rev());
                }
                Document::Empty => {}
            }
        }
        None
    }
}

impl<A: fmt::Display> fmt::Display for Document<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Leaf(value) => write!(f, "{}", value),
            Document::Horizontal(children) => write_group(f, "H", children),
            Document::Vertical(children) => write_group(f, "V", children),
            Document::Empty => f.write_str(EMPTY_GLYPH),
        }
    }
}

fn write_group<A: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    tag: &str,
    children: &[Document<A>],
) -> fmt::Result {
    write!(f, "{}[", tag)?;
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", child)?;
    }
    f.write_str("]")
}
