// src/model/arrangement.rs
//! Arrangement policies: how a flat run of values becomes a document.

use super::document::Document;

/// Where a run of values is split into horizontal and vertical groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Every value side by side.
    Row,
    /// Every value stacked.
    Column,
    /// The first `at` values side by side, the rest stacked after them.
    Split { at: usize },
    /// Rows of `columns` values, stacked top to bottom.
    Grid { columns: usize },
}

impl<A> Document<A> {
    /// Builds a document from values in order. No values yields `Empty`.
    pub fn arrange(values: impl IntoIterator<Item = A>, arrangement: Arrangement) -> Self {
        let mut leaves: Vec<Document<A>> = values.into_iter().map(Document::Leaf).collect();
        if leaves.is_empty() {
            return Document::Empty;
        }

        match arrangement {
            Arrangement::Row => Document::Horizontal(leaves),
            Arrangement::Column => Document::Vertical(leaves),
            Arrangement::Split { at } => {
                let rest = leaves.split_off(at.min(leaves.len()));
                non_empty(leaves, Document::Horizontal)
                    .combine(non_empty(rest, Document::Vertical))
            }
            Arrangement::Grid { columns } => {
                let columns = columns.max(1);
                let mut rows = Vec::with_capacity(leaves.len().div_ceil(columns));
                while !leaves.is_empty() {
                    let tail = leaves.split_off(columns.min(leaves.len()));
                    rows.push(Document::Horizontal(leaves));
                    leaves = tail;
                }
                Document::Vertical(rows)
            }
        }
    }
}

fn non_empty<A>(
    children: Vec<Document<A>>,
    group: fn(Vec<Document<A>>) -> Document<A>,
) -> Document<A> {
    if children.is_empty() {
        Document::Empty
    } else {
        group(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_values_is_empty() {
        let doc = Document::<i32>::arrange(Vec::new(), Arrangement::Row);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!(
            Document::arrange([1, 2, 3], Arrangement::Row).to_string(),
            "H[1, 2, 3]"
        );
        assert_eq!(
            Document::arrange([1, 2, 3], Arrangement::Column).to_string(),
            "V[1, 2, 3]"
        );
    }

    #[test]
    fn test_split() {
        let doc = Document::arrange([1, 2, 3, 4], Arrangement::Split { at: 2 });
        assert_eq!(doc.to_string(), "H[1, 2, V[3, 4]]");

        let all_head = Document::arrange([1, 2], Arrangement::Split { at: 5 });
        assert_eq!(all_head.to_string(), "H[1, 2]");

        let all_tail = Document::arrange([1, 2], Arrangement::Split { at: 0 });
        assert_eq!(all_tail.to_string(), "V[1, 2]");
    }

    #[test]
    fn test_grid() {
        let doc = Document::arrange(1..=5, Arrangement::Grid { columns: 2 });
        assert_eq!(doc.to_string(), "V[H[1, 2], H[3, 4], H[5]]");
        assert_eq!(doc.leaf_count(), 5);
    }

    #[test]
    fn test_grid_with_zero_columns_uses_one() {
        let doc = Document::arrange([1, 2], Arrangement::Grid { columns: 0 });
        assert_eq!(doc.to_string(), "V[H[1], H[2]]");
    }
}
