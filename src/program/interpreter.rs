// src/program/interpreter.rs
//! Interpreters give staged programs their effect semantics.
//!
//! An interpreter handles one instruction at a time, returning the rest of
//! the program wrapped in its effect. [`run`] threads those effects together
//! with the interpreter's [`Monad`], so one program value can be executed
//! under any interpreter without being rebuilt.

use super::instruction::{Instruction, Next, Step};
use super::staged::Program;
use crate::algebras::{DocumentAlgebra, DocumentError};
use crate::effects::{Effect, Fallible, Identity, Monad, Of, Optional};
use std::cell::Cell;
use std::ops::ControlFlow;

/// Handler mapping each instruction to a concrete effect.
pub trait Interpreter<A> {
    type Effect: Monad;

    fn handle<K>(&self, instruction: Instruction<A, K>) -> Of<Self::Effect, K>;
}

/// Executes `program` under `interpreter`, one instruction per loop step.
///
/// Stack use does not grow with program length.
pub fn run<A, R, I>(program: Program<A, R>, interpreter: &I) -> Of<I::Effect, R>
where
    I: Interpreter<A>,
{
    <I::Effect as Monad>::tail_rec::<Program<A, R>, R, _>(program, |program| match program {
        Program::Done(result) => {
            <I::Effect as Effect>::pure::<Resume<A, R>>(ControlFlow::Break(result))
        }
        Program::Suspend(instruction) => <I::Effect as Effect>::map::<Program<A, R>, Resume<A, R>, _>(
            interpreter.handle(instruction),
            ControlFlow::Continue,
        ),
    })
}

type Resume<A, R> = ControlFlow<R, Program<A, R>>;

/// Every instruction succeeds; a rejected validation is an `Err` value the
/// program can inspect.
#[derive(Debug, Clone, Copy, Default)]
pub struct PureInterpreter;

impl<A> Interpreter<A> for PureInterpreter {
    type Effect = Identity;

    fn handle<K>(&self, instruction: Instruction<A, K>) -> K {
        match instruction.construct() {
            Step::Built(rest) => rest,
            Step::Validate { document, next } => next(document.validate()),
        }
    }
}

/// Validation is a precondition: validating `Empty` makes the whole run `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalInterpreter;

impl<A> Interpreter<A> for OptionalInterpreter {
    type Effect = Optional;

    fn handle<K>(&self, instruction: Instruction<A, K>) -> Option<K> {
        match instruction.construct() {
            Step::Built(rest) => Some(rest),
            Step::Validate { document, next } => document.validate().ok().map(|d| next(Ok(d))),
        }
    }
}

/// Like [`OptionalInterpreter`], but the run reports why it stopped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictInterpreter;

impl<A> Interpreter<A> for StrictInterpreter {
    type Effect = Fallible<DocumentError>;

    fn handle<K>(&self, instruction: Instruction<A, K>) -> Result<K, DocumentError> {
        match instruction.construct() {
            Step::Built(rest) => Ok(rest),
            Step::Validate { document, next } => document.validate().map(|d| next(Ok(d))),
        }
    }
}

/// Runs staged programs through a direct-call [`DocumentAlgebra`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AlgebraInterpreter<Alg>(pub Alg);

impl<A, Alg: DocumentAlgebra<A>> Interpreter<A> for AlgebraInterpreter<Alg> {
    type Effect = Alg::Effect;

    fn handle<K>(&self, instruction: Instruction<A, K>) -> Of<Self::Effect, K> {
        let algebra = &self.0;
        match instruction {
            Instruction::CreateLeaf { value, next } => {
                resume::<Alg::Effect, _, _>(algebra.leaf(value), next)
            }
            Instruction::CreateHorizontal { children, next } => {
                resume::<Alg::Effect, _, _>(algebra.horizontal(children), next)
            }
            Instruction::CreateVertical { children, next } => {
                resume::<Alg::Effect, _, _>(algebra.vertical(children), next)
            }
            Instruction::CombineDocuments { left, right, next } => {
                resume::<Alg::Effect, _, _>(algebra.combine(left, right), next)
            }
            Instruction::ValidateDocument { document, next } => {
                resume::<Alg::Effect, _, _>(algebra.validate(document), next)
            }
        }
    }
}

fn resume<M: Monad, T, K>(effect: Of<M, T>, next: Next<T, K>) -> Of<M, K> {
    M::and_then(effect, move |value| M::pure(next(value)))
}

/// Wraps another interpreter, logging every instruction it handles.
#[derive(Debug, Default)]
pub struct LoggingInterpreter<I> {
    inner: I,
    handled: Cell<usize>,
}

impl<I> LoggingInterpreter<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            handled: Cell::new(0),
        }
    }

    /// How many instructions have gone through this interpreter.
    pub fn handled(&self) -> usize {
        self.handled.get()
    }
}

impl<A, I: Interpreter<A>> Interpreter<A> for LoggingInterpreter<I> {
    type Effect = I::Effect;

    fn handle<K>(&self, instruction: Instruction<A, K>) -> Of<Self::Effect, K> {
        let count = self.handled.get() + 1;
        self.handled.set(count);
        log::debug!("step {}: {}", count, instruction.name());
        self.inner.handle(instruction)
    }
}
