//! Document construction algebra.
//!
//! [`DocumentAlgebra`] is the direct-call counterpart of the staged
//! [`Program`](crate::program::Program): the same five verbs, but each call
//! returns its effect immediately instead of being recorded as data.

use super::error::DocumentError;
use crate::constants::LAYOUT_HEAD_GROUP;
use crate::effects::{Effect, Fallible, Identity, Monad, Of, Optional};
use crate::model::{Document, Validated};

/// Capability to build and validate documents under an effect.
///
/// # Laws
///
/// All implementations must satisfy these laws:
///
/// - **L1 (Construction is pure)**: the four construction verbs succeed with
///   exactly the requested shape.
///   ```text
///   leaf(v)             == pure(Leaf(v))
///   horizontal(cs)      == pure(Horizontal(cs))
///   combine(l, r)       == pure(l.combine(r))
///   ```
///
/// - **L2 (Non-empty passes)**: validating a non-`Empty` document hands it back.
///   ```text
///   validate(d) == pure(Ok(d))    for d != Empty
///   ```
///
/// - **L3 (Empty is rejected)**: validating `Empty` never yields `Ok`. Whether
///   the rejection is a value or an absent result is the instance's choice.
///
/// The construction verbs have default bodies that satisfy L1; most instances
/// only decide what validation means.
pub trait DocumentAlgebra<A> {
    type Effect: Monad;

    fn leaf(&self, value: A) -> Of<Self::Effect, Document<A>> {
        <Self::Effect as Effect>::pure(Document::Leaf(value))
    }

    fn horizontal(&self, children: Vec<Document<A>>) -> Of<Self::Effect, Document<A>> {
        <Self::Effect as Effect>::pure(Document::Horizontal(children))
    }

    fn vertical(&self, children: Vec<Document<A>>) -> Of<Self::Effect, Document<A>> {
        <Self::Effect as Effect>::pure(Document::Vertical(children))
    }

    fn combine(&self, left: Document<A>, right: Document<A>) -> Of<Self::Effect, Document<A>> {
        <Self::Effect as Effect>::pure(left.combine(right))
    }

    fn validate(&self, document: Document<A>) -> Of<Self::Effect, Validated<A>>;
}

// ==============================================================================
// Extension Trait for DocumentAlgebra
// ==============================================================================

/// Convenience operations built from the five base verbs.
pub trait DocumentAlgebraExt<A>: DocumentAlgebra<A> {
    /// Lifts every value to a leaf, in order.
    fn leaves(&self, values: Vec<A>) -> Of<Self::Effect, Vec<Document<A>>> {
        let start = <Self::Effect as Effect>::pure(Vec::with_capacity(values.len()));
        values.into_iter().fold(start, |built, value| {
            <Self::Effect as Monad>::and_then(built, move |mut leaves| {
                <Self::Effect as Monad>::and_then(self.leaf(value), move |leaf| {
                    leaves.push(leaf);
                    <Self::Effect as Effect>::pure(leaves)
                })
            })
        })
    }

    /// Validates `document`, substituting a leaf of `fallback` on rejection.
    fn validate_or_leaf(&self, document: Document<A>, fallback: A) -> Of<Self::Effect, Document<A>> {
        <Self::Effect as Monad>::and_then(self.validate(document), move |validated| {
            match validated {
                Ok(document) => <Self::Effect as Effect>::pure(document),
                Err(error) => {
                    log::debug!("document rejected ({}), substituting a single leaf", error);
                    self.leaf(fallback)
                }
            }
        })
    }
}

impl<A, T: DocumentAlgebra<A> + ?Sized> DocumentAlgebraExt<A> for T {}

/// Builds documents directly; rejection is returned as `Err` inside the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PureBuilder;

impl<A> DocumentAlgebra<A> for PureBuilder {
    type Effect = Identity;

    fn validate(&self, document: Document<A>) -> Validated<A> {
        document.validate()
    }
}

/// Builds documents under `Option`; validating `Empty` yields `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalBuilder;

impl<A> DocumentAlgebra<A> for OptionalBuilder {
    type Effect = Optional;

    fn validate(&self, document: Document<A>) -> Option<Validated<A>> {
        document.validate().ok().map(Ok)
    }
}

/// Builds documents under `Result`; validating `Empty` stops with the error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictBuilder;

impl<A> DocumentAlgebra<A> for StrictBuilder {
    type Effect = Fallible<DocumentError>;

    fn validate(&self, document: Document<A>) -> Result<Validated<A>, DocumentError> {
        document.validate().map(Ok)
    }
}

/// Lays out `head` and `tail` by direct calls: the first two leaves side by
/// side, the rest stacked, combined and validated, falling back to a leaf
/// of `head`.
pub fn layout_direct<A, M, Alg>(algebra: &Alg, head: A, tail: Vec<A>) -> Of<M, Document<A>>
where
    A: Clone,
    M: Monad,
    Alg: DocumentAlgebra<A, Effect = M>,
{
    let fallback = head.clone();
    let mut values = Vec::with_capacity(tail.len() + 1);
    values.push(head);
    values.extend(tail);

    M::and_then(algebra.leaves(values), move |mut leaves| {
        let rest = leaves.split_off(LAYOUT_HEAD_GROUP.min(leaves.len()));
        M::and_then(algebra.horizontal(leaves), move |row| {
            M::and_then(algebra.vertical(rest), move |column| {
                M::and_then(algebra.combine(row, column), move |combined| {
                    algebra.validate_or_leaf(combined, fallback)
                })
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Rejects every document, so fallbacks always fire.
    struct Grumpy;

    impl DocumentAlgebra<i32> for Grumpy {
        type Effect = Identity;

        fn validate(&self, _document: Document<i32>) -> Validated<i32> {
            Err(DocumentError::Empty)
        }
    }

    #[test]
    fn law_l1_construction_is_pure() {
        let children = vec![Document::leaf(1), Document::leaf(2)];
        assert_eq!(PureBuilder.leaf(1), Document::leaf(1));
        assert_eq!(
            OptionalBuilder.horizontal(children.clone()),
            Some(Document::Horizontal(children.clone()))
        );
        assert_eq!(
            OptionalBuilder.vertical(children.clone()),
            Some(Document::Vertical(children))
        );
        assert_eq!(
            PureBuilder.combine(Document::leaf(1), Document::leaf(2)),
            Document::leaf(1).combine(Document::leaf(2))
        );
    }

    #[test]
    fn law_l2_non_empty_passes() {
        let doc = Document::vertical([Document::leaf(1)]);
        assert_eq!(PureBuilder.validate(doc.clone()), Ok(doc.clone()));
        assert_eq!(OptionalBuilder.validate(doc.clone()), Some(Ok(doc)));
    }

    #[test]
    fn law_l3_empty_is_rejected() {
        assert_eq!(
            DocumentAlgebra::<i32>::validate(&PureBuilder, Document::Empty),
            Err(DocumentError::Empty)
        );
        assert_eq!(
            DocumentAlgebra::<i32>::validate(&OptionalBuilder, Document::Empty),
            None
        );
    }

    #[test]
    fn test_leaves_in_order() {
        assert_eq!(
            OptionalBuilder.leaves(vec![1, 2, 3]),
            Some(vec![Document::leaf(1), Document::leaf(2), Document::leaf(3)])
        );
    }

    #[test]
    fn test_leaves_do_not_need_clone() {
        #[derive(Debug, PartialEq)]
        struct Tile(u8);

        assert_eq!(
            StrictBuilder.leaves(vec![Tile(1), Tile(2)]),
            Ok(vec![Document::leaf(Tile(1)), Document::leaf(Tile(2))])
        );
        assert_eq!(PureBuilder.leaves(Vec::<Tile>::new()), Vec::new());
    }

    #[test]
    fn test_layout_direct_groups_head_and_stacks_rest() {
        let doc = layout_direct(&PureBuilder, 1, vec![2, 3, 4]);
        assert_eq!(doc.to_string(), "H[1, 2, V[3, 4]]");
    }

    #[test]
    fn test_layout_direct_optional_matches_pure() {
        assert_eq!(
            layout_direct(&OptionalBuilder, 1, vec![2, 3]),
            Some(layout_direct(&PureBuilder, 1, vec![2, 3]))
        );
    }

    #[test]
    fn test_strict_builder_stops_on_empty() {
        assert_eq!(
            DocumentAlgebra::<i32>::validate(&StrictBuilder, Document::Empty),
            Err(DocumentError::Empty)
        );
        assert_eq!(
            layout_direct(&StrictBuilder, 1, vec![2]),
            Ok(layout_direct(&PureBuilder, 1, vec![2]))
        );
    }

    #[test]
    fn test_layout_direct_falls_back_on_rejection() {
        assert_eq!(layout_direct(&Grumpy, 5, vec![6, 7]), Document::leaf(5));
    }
}
