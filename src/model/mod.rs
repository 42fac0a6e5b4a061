//! Document model: the recursive tree and the policies that build it.

pub mod arrangement;
pub mod document;

pub use arrangement::Arrangement;
pub use document::{Document, Leaves, Shape, Validated};
