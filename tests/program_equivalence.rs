// tests/program_equivalence.rs
//! Staged programs and direct algebra calls must agree for every effect choice.

use docgrid::{
    combine_documents, create_horizontal, create_leaf, create_vertical, layout_direct,
    layout_program, run, validate_document, AlgebraInterpreter, Document, DocumentAlgebra,
    DocumentError, Identity, LoggingInterpreter, OptionalBuilder, OptionalInterpreter, Program,
    PureBuilder, PureInterpreter, StrictBuilder, StrictInterpreter, Validated,
};
use pretty_assertions::assert_eq;

fn inputs() -> Vec<(i32, Vec<i32>)> {
    vec![
        (1, vec![]),
        (1, vec![2]),
        (1, vec![2, 3]),
        (1, vec![2, 3, 4]),
        (10, (11..20).collect()),
    ]
}

#[test]
fn layout_program_matches_direct_calls_under_pure_semantics() {
    for (head, tail) in inputs() {
        let staged = run(layout_program(head, tail.clone()), &PureInterpreter);
        let direct = layout_direct(&PureBuilder, head, tail);
        assert_eq!(staged, direct);
    }
}

#[test]
fn layout_program_matches_direct_calls_under_optional_semantics() {
    for (head, tail) in inputs() {
        let staged = run(layout_program(head, tail.clone()), &OptionalInterpreter);
        let direct = layout_direct(&OptionalBuilder, head, tail);
        assert_eq!(staged, direct);
        assert!(staged.is_some());
    }
}

#[test]
fn layout_program_matches_direct_calls_under_strict_semantics() {
    for (head, tail) in inputs() {
        let staged = run(layout_program(head, tail.clone()), &StrictInterpreter);
        let direct = layout_direct(&StrictBuilder, head, tail);
        assert_eq!(staged, direct);
    }
}

#[test]
fn algebra_interpreter_runs_programs_like_the_native_interpreters() {
    for (head, tail) in inputs() {
        let program = || layout_program(head, tail.clone());
        assert_eq!(
            run(program(), &AlgebraInterpreter(PureBuilder)),
            run(program(), &PureInterpreter)
        );
        assert_eq!(
            run(program(), &AlgebraInterpreter(OptionalBuilder)),
            run(program(), &OptionalInterpreter)
        );
        assert_eq!(
            run(program(), &AlgebraInterpreter(StrictBuilder)),
            run(program(), &StrictInterpreter)
        );
    }
}

#[test]
fn layout_of_four_values() {
    let doc = run(layout_program(1, vec![2, 3, 4]), &PureInterpreter);
    assert_eq!(
        doc,
        Document::Horizontal(vec![
            Document::Leaf(1),
            Document::Leaf(2),
            Document::Vertical(vec![Document::Leaf(3), Document::Leaf(4)]),
        ])
    );
}

#[test]
fn validating_empty_depends_on_the_interpreter() {
    let program = || validate_document::<i32>(Document::Empty);

    assert_eq!(run(program(), &PureInterpreter), Err(DocumentError::Empty));
    assert_eq!(run(program(), &OptionalInterpreter), None);
    assert_eq!(run(program(), &StrictInterpreter), Err(DocumentError::Empty));
}

#[test]
fn validating_non_empty_hands_the_document_back() {
    let doc = Document::vertical([Document::leaf("a"), Document::Empty]);
    let program = || validate_document(doc.clone());

    assert_eq!(run(program(), &PureInterpreter), Ok(doc.clone()));
    assert_eq!(run(program(), &OptionalInterpreter), Some(Ok(doc.clone())));
    assert_eq!(run(program(), &StrictInterpreter), Ok(Ok(doc)));
}

#[test]
fn hand_written_program_runs_every_verb() {
    let program: Program<char, Validated<char>> = create_leaf('a').and_then(|a| {
        create_leaf('b').and_then(move |b| {
            create_horizontal(vec![a]).and_then(move |row| {
                create_vertical(vec![b]).and_then(move |column| {
                    combine_documents(row, column).and_then(validate_document)
                })
            })
        })
    });

    let logging = LoggingInterpreter::new(PureInterpreter);
    let result = run(program, &logging);
    assert_eq!(result.map(|d| d.to_string()), Ok("H[a, V[b]]".to_string()));
    assert_eq!(logging.handled(), 6);
}

#[test]
fn optional_run_stops_at_the_failed_validation() {
    let program = validate_document::<i32>(Document::Empty)
        .and_then(|_| create_leaf(99));

    let logging = LoggingInterpreter::new(OptionalInterpreter);
    assert_eq!(run(program, &logging), None);
    assert_eq!(logging.handled(), 1);
}

/// Rejects everything, so the layout always takes its fallback.
struct RejectAll;

impl DocumentAlgebra<i32> for RejectAll {
    type Effect = Identity;

    fn validate(&self, _document: Document<i32>) -> Validated<i32> {
        Err(DocumentError::Empty)
    }
}

#[test]
fn fallback_agrees_between_program_and_direct_calls() {
    let staged = run(layout_program(7, vec![8, 9]), &AlgebraInterpreter(RejectAll));
    let direct = layout_direct(&RejectAll, 7, vec![8, 9]);
    assert_eq!(staged, Document::leaf(7));
    assert_eq!(direct, staged);
}

#[test]
fn long_layouts_run_in_constant_stack() {
    let tail: Vec<u32> = (1..100_000).collect();
    let direct = layout_direct(&PureBuilder, 0, tail.clone());
    assert_eq!(direct.leaf_count(), 100_000);

    let pure = run(layout_program(0, tail.clone()), &PureInterpreter);
    assert_eq!(pure, direct);

    let optional = run(layout_program(0, tail.clone()), &OptionalInterpreter);
    assert_eq!(optional.as_ref(), Some(&direct));

    let logging = LoggingInterpreter::new(StrictInterpreter);
    let strict = run(layout_program(0, tail), &logging);
    assert_eq!(strict, Ok(direct));
    // one leaf per value, then horizontal, vertical, combine and validate
    assert_eq!(logging.handled(), 100_000 + 4);
}
