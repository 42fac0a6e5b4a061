// src/program/staged.rs
//! Staged programs: chains of instructions kept as data until interpreted.

use super::instruction::Instruction;
use crate::algebras::DocumentError;
use crate::model::{Document, Validated};

/// A document program that finishes with an `R`.
///
/// Building a program performs no work. The same value can be handed to any
/// [`Interpreter`](super::Interpreter) through [`run`](super::run).
pub enum Program<A, R> {
    Done(R),
    Suspend(Instruction<A, Program<A, R>>),
}

impl<A: 'static, R: 'static> Program<A, R> {
    pub fn pure(result: R) -> Self {
        Program::Done(result)
    }

    /// Runs `g` on this program's result and continues with the program it returns.
    pub fn and_then<R2, G>(self, g: G) -> Program<A, R2>
    where
        R2: 'static,
        G: FnOnce(R) -> Program<A, R2> + 'static,
    {
        match self {
            Program::Done(result) => g(result),
            Program::Suspend(instruction) => {
                Program::Suspend(instruction.map(move |rest| rest.and_then(g)))
            }
        }
    }

    pub fn map<R2, G>(self, g: G) -> Program<A, R2>
    where
        R2: 'static,
        G: FnOnce(R) -> R2 + 'static,
    {
        self.and_then(move |result| Program::Done(g(result)))
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Program::Done(_))
    }
}

impl<A: 'static> Program<A, Validated<A>> {
    /// Unwraps a validation result, continuing with `fallback` on rejection.
    pub fn recover_with<G>(self, fallback: G) -> Program<A, Document<A>>
    where
        G: FnOnce(DocumentError) -> Program<A, Document<A>> + 'static,
    {
        self.and_then(move |validated| match validated {
            Ok(document) => Program::Done(document),
            Err(error) => fallback(error),
        })
    }
}

pub fn create_leaf<A: 'static>(value: A) -> Program<A, Document<A>> {
    Program::Suspend(Instruction::CreateLeaf {
        value,
        next: Box::new(Program::Done),
    })
}

pub fn create_horizontal<A: 'static>(children: Vec<Document<A>>) -> Program<A, Document<A>> {
    Program::Suspend(Instruction::CreateHorizontal {
        children,
        next: Box::new(Program::Done),
    })
}

pub fn create_vertical<A: 'static>(children: Vec<Document<A>>) -> Program<A, Document<A>> {
    Program::Suspend(Instruction::CreateVertical {
        children,
        next: Box::new(Program::Done),
    })
}

pub fn combine_documents<A: 'static>(
    left: Document<A>,
    right: Document<A>,
) -> Program<A, Document<A>> {
    Program::Suspend(Instruction::CombineDocuments {
        left,
        right,
        next: Box::new(Program::Done),
    })
}

pub fn validate_document<A: 'static>(document: Document<A>) -> Program<A, Validated<A>> {
    Program::Suspend(Instruction::ValidateDocument {
        document,
        next: Box::new(Program::Done),
    })
}

/// Runs programs one after another, collecting their results in order.
pub fn sequence<A, R>(programs: Vec<Program<A, R>>) -> Program<A, Vec<R>>
where
    A: 'static,
    R: 'static,
{
    let results = Vec::with_capacity(programs.len());
    sequence_from(programs.into_iter(), results)
}

// Chains one program at a time so continuations stay shallow.
fn sequence_from<A, R>(
    mut pending: std::vec::IntoIter<Program<A, R>>,
    mut results: Vec<R>,
) -> Program<A, Vec<R>>
where
    A: 'static,
    R: 'static,
{
    match pending.next() {
        None => Program::Done(results),
        Some(program) => program.and_then(move |result| {
            results.push(result);
            sequence_from(pending, results)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::instruction::Step;

    /// Walks a program by hand, resolving validation as a plain value.
    fn step_through<A: 'static, R: 'static>(mut program: Program<A, R>) -> (R, Vec<&'static str>) {
        let mut trace = Vec::new();
        loop {
            match program {
                Program::Done(result) => return (result, trace),
                Program::Suspend(instruction) => {
                    trace.push(instruction.name());
                    program = match instruction.construct() {
                        Step::Built(rest) => rest,
                        Step::Validate { document, next } => next(document.validate()),
                    };
                }
            }
        }
    }

    #[test]
    fn test_building_performs_no_work() {
        let program = create_leaf(1).and_then(|leaf| create_horizontal(vec![leaf]));
        assert!(!program.is_done());
    }

    #[test]
    fn test_and_then_chains_in_order() {
        let program = create_leaf(1)
            .and_then(|leaf| create_vertical(vec![leaf, Document::leaf(2)]))
            .and_then(|column| combine_documents(Document::leaf(0), column));
        let (document, trace) = step_through(program);
        assert_eq!(document.to_string(), "H[0, V[1, 2]]");
        assert_eq!(
            trace,
            vec!["create_leaf", "create_vertical", "combine_documents"]
        );
    }

    #[test]
    fn test_sequence_keeps_order() {
        let program = sequence(vec![create_leaf(1), create_leaf(2), create_leaf(3)]);
        let (leaves, trace) = step_through(program);
        assert_eq!(leaves, vec![Document::leaf(1), Document::leaf(2), Document::leaf(3)]);
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn test_recover_with_runs_fallback_only_on_rejection() {
        let rejected = validate_document(Document::<i32>::Empty).recover_with(|_| create_leaf(9));
        assert_eq!(step_through(rejected).0, Document::leaf(9));

        let accepted = validate_document(Document::leaf(1)).recover_with(|_| create_leaf(9));
        let (document, trace) = step_through(accepted);
        assert_eq!(document, Document::leaf(1));
        assert_eq!(trace, vec!["validate_document"]);
    }

    #[test]
    fn test_map_on_done_program() {
        let program: Program<i32, i32> = Program::pure(20).map(|n| n + 1);
        assert!(program.is_done());
        assert_eq!(step_through(program).0, 21);
    }
}
