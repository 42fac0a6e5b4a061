// src/effects.rs
//! Effect abstractions that parameterize traversal and interpretation.
//!
//! Rust has no higher-kinded type parameters, so an effect is named by a
//! marker type whose generic associated type [`Effect::Of`] plays the role of
//! the type constructor: `Optional::Of<T>` is `Option<T>`, `Identity::Of<T>`
//! is `T` itself, and so on.
//!
//! # Laws
//!
//! All [`Effect`] instances must satisfy:
//!
//! - **L1 (Map-Identity)**: `map(fa, |x| x) == fa`
//! - **L2 (Map-Pure)**: `map(pure(x), f) == pure(f(x))`
//!
//! [`Sequence`] instances satisfy:
//!
//! - **L3 (Sequence-Pure)**: `sequence(xs.map(pure)) == pure(xs)`, order kept
//!
//! [`Monad`] instances additionally satisfy:
//!
//! - **L4 (Left-Identity)**: `and_then(pure(x), f) == f(x)`
//! - **L5 (Right-Identity)**: `and_then(fa, pure) == fa`
//! - **L6 (Tail-Recursion)**: `tail_rec` gives the same result as unrolling
//!   `step` with `and_then`, in constant stack

use std::marker::PhantomData;
use std::ops::ControlFlow;

/// A functorial effect: lift values and transform what is inside.
pub trait Effect {
    /// The effectful type wrapping a `T`.
    type Of<T>;

    /// Lifts a plain value without performing any effect.
    fn pure<T>(value: T) -> Self::Of<T>;

    /// Transforms the value inside an effect.
    fn map<T, U, F>(effect: Self::Of<T>, f: F) -> Self::Of<U>
    where
        F: FnMut(T) -> U;
}

/// An effect that can turn many effects of `T` into one effect of `Vec<T>`,
/// in order.
///
/// Kept apart from [`Effect`] so an instance can constrain `T`: [`Many`]
/// copies shared prefixes and so only sequences `T: Clone`.
pub trait Sequence<T>: Effect {
    fn sequence(effects: Vec<Self::Of<T>>) -> Self::Of<Vec<T>>;
}

/// An effect whose results can feed the next step.
///
/// Continuations are single-shot (`FnOnce`), which is what staged programs
/// need and what rules out [`Many`].
pub trait Monad: Effect {
    fn and_then<T, U, F>(effect: Self::Of<T>, f: F) -> Self::Of<U>
    where
        F: FnOnce(T) -> Self::Of<U>;

    /// Repeats `step` from `seed` until it breaks, without growing the stack.
    fn tail_rec<S, T, F>(seed: S, step: F) -> Self::Of<T>
    where
        F: FnMut(S) -> Self::Of<ControlFlow<T, S>>;
}

/// Shorthand for the wrapped type of an effect.
pub type Of<M, T> = <M as Effect>::Of<T>;

/// No effect at all: `Of<T> = T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Effect for Identity {
    type Of<T> = T;

    fn pure<T>(value: T) -> T {
        value
    }

    fn map<T, U, F>(effect: T, mut f: F) -> U
    where
        F: FnMut(T) -> U,
    {
        f(effect)
    }
}

impl<T> Sequence<T> for Identity {
    fn sequence(effects: Vec<T>) -> Vec<T> {
        effects
    }
}

impl Monad for Identity {
    fn and_then<T, U, F>(effect: T, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(effect)
    }

    fn tail_rec<S, T, F>(seed: S, mut step: F) -> T
    where
        F: FnMut(S) -> ControlFlow<T, S>,
    {
        let mut state = seed;
        loop {
            match step(state) {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(result) => return result,
            }
        }
    }
}

/// Possible absence: any `None` makes the whole result `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optional;

impl Effect for Optional {
    type Of<T> = Option<T>;

    fn pure<T>(value: T) -> Option<T> {
        Some(value)
    }

    fn map<T, U, F>(effect: Option<T>, f: F) -> Option<U>
    where
        F: FnMut(T) -> U,
    {
        effect.map(f)
    }
}

impl<T> Sequence<T> for Optional {
    fn sequence(effects: Vec<Option<T>>) -> Option<Vec<T>> {
        effects.into_iter().collect()
    }
}

impl Monad for Optional {
    fn and_then<T, U, F>(effect: Option<T>, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        effect.and_then(f)
    }

    fn tail_rec<S, T, F>(seed: S, mut step: F) -> Option<T>
    where
        F: FnMut(S) -> Option<ControlFlow<T, S>>,
    {
        let mut state = seed;
        loop {
            match step(state)? {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(result) => return Some(result),
            }
        }
    }
}

/// Failure with an error value: the leftmost `Err` wins.
pub struct Fallible<E>(PhantomData<E>);

impl<E> Effect for Fallible<E> {
    type Of<T> = Result<T, E>;

    fn pure<T>(value: T) -> Result<T, E> {
        Ok(value)
    }

    fn map<T, U, F>(effect: Result<T, E>, f: F) -> Result<U, E>
    where
        F: FnMut(T) -> U,
    {
        effect.map(f)
    }
}

impl<T, E> Sequence<T> for Fallible<E> {
    fn sequence(effects: Vec<Result<T, E>>) -> Result<Vec<T>, E> {
        effects.into_iter().collect()
    }
}

impl<E> Monad for Fallible<E> {
    fn and_then<T, U, F>(effect: Result<T, E>, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        effect.and_then(f)
    }

    fn tail_rec<S, T, F>(seed: S, mut step: F) -> Result<T, E>
    where
        F: FnMut(S) -> Result<ControlFlow<T, S>, E>,
    {
        let mut state = seed;
        loop {
            match step(state)? {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(result) => return Ok(result),
            }
        }
    }
}

/// Many alternative results. Sequencing takes the cartesian product, with
/// earlier positions varying slowest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Many;

impl Effect for Many {
    type Of<T> = Vec<T>;

    fn pure<T>(value: T) -> Vec<T> {
        vec![value]
    }

    fn map<T, U, F>(effect: Vec<T>, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        effect.into_iter().map(f).collect()
    }
}

impl<T: Clone> Sequence<T> for Many {
    fn sequence(effects: Vec<Vec<T>>) -> Vec<Vec<T>> {
        effects.into_iter().fold(vec![Vec::new()], |prefixes, choices| {
            prefixes
                .iter()
                .flat_map(|prefix| {
                    choices.iter().map(move |choice| {
                        let mut next = prefix.clone();
                        next.push(choice.clone());
                        next
                    })
                })
                .collect()
        })
    }
}
