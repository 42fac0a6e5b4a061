// src/program/layout.rs
//! The layout program: a ready-made staged program over a run of values.

use super::staged::{
    combine_documents, create_horizontal, create_leaf, create_vertical, sequence,
    validate_document, Program,
};
use crate::constants::LAYOUT_HEAD_GROUP;
use crate::model::Document;

/// Lifts `head` and `tail` into leaves, groups the first two side by side,
/// stacks the rest, combines both groups and validates the result. A
/// rejected layout falls back to a single leaf of `head`.
pub fn layout_program<A>(head: A, tail: Vec<A>) -> Program<A, Document<A>>
where
    A: Clone + 'static,
{
    let fallback = head.clone();
    let leaves = std::iter::once(head)
        .chain(tail)
        .map(create_leaf)
        .collect();

    sequence(leaves).and_then(move |mut leaves| {
        let rest = leaves.split_off(LAYOUT_HEAD_GROUP.min(leaves.len()));
        create_horizontal(leaves).and_then(move |row| {
            create_vertical(rest).and_then(move |column| {
                combine_documents(row, column)
                    .and_then(validate_document)
                    .recover_with(move |error| {
                        log::debug!("layout rejected ({}), falling back to a single leaf", error);
                        create_leaf(fallback)
                    })
            })
        })
    })
}
