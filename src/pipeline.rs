// src/pipeline.rs
//! Pipeline stages: build a document, transform its leaves, render it.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::algebras::{layout_direct, OptionalBuilder, PureBuilder, StrictBuilder};
use crate::config::{BuildStyle, RunConfig, Semantics};
use crate::effects::Fallible;
use crate::error::AppError;
use crate::model::Document;
use crate::program::{
    layout_program, run, LoggingInterpreter, OptionalInterpreter, PureInterpreter,
    StrictInterpreter,
};
use crate::traversal::{par_traverse, traverse};
use serde::Serialize;
use std::fmt;

/// Produces the document a run starts from.
pub trait DocumentSource {
    fn build(&self) -> Result<Document<String>, AppError>;
}

/// Turns a finished document into display text.
pub trait DocumentRenderer {
    fn render<A>(&self, document: &Document<A>) -> Result<String, AppError>
    where
        A: fmt::Display + Serialize;
}

/// Drives one run from a resolved [`RunConfig`].
pub struct Pipeline<'a> {
    config: &'a RunConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Parses every leaf as an integer. One bad leaf fails the whole document.
    pub fn parse_leaves(&self, document: Document<String>) -> Result<Document<i64>, AppError> {
        let parse = |value: String| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|source| AppError::LeafParse { value, source })
        };

        if self.config.parallel {
            log::debug!("parsing {} leaves in parallel", document.leaf_count());
            par_traverse::<Fallible<AppError>, _, _, _>(document, parse)
        } else {
            traverse::<Fallible<AppError>, _, _, _>(document, parse)
        }
    }

    fn layout(&self, head: String, tail: Vec<String>) -> Result<Document<String>, AppError> {
        let semantics = self.config.semantics;
        let absent = || AppError::NoResult {
            interpreter: semantics.name().to_string(),
        };

        match self.config.style {
            BuildStyle::Staged => {
                let program = layout_program(head, tail);
                match semantics {
                    Semantics::Pure => Ok(run(program, &LoggingInterpreter::new(PureInterpreter))),
                    Semantics::Optional => {
                        run(program, &LoggingInterpreter::new(OptionalInterpreter))
                            .ok_or_else(absent)
                    }
                    Semantics::Strict => {
                        Ok(run(program, &LoggingInterpreter::new(StrictInterpreter))?)
                    }
                }
            }
            BuildStyle::Direct => match semantics {
                Semantics::Pure => Ok(layout_direct(&PureBuilder, head, tail)),
                Semantics::Optional => {
                    layout_direct(&OptionalBuilder, head, tail).ok_or_else(absent)
                }
                Semantics::Strict => Ok(layout_direct(&StrictBuilder, head, tail)?),
            },
        }
    }
}

impl DocumentSource for Pipeline<'_> {
    fn build(&self) -> Result<Document<String>, AppError> {
        let values = self.config.values.clone();

        if let Some(arrangement) = self.config.arrangement {
            log::info!("Arranging {} values as {:?}", values.len(), arrangement);
            return Ok(Document::arrange(values, arrangement));
        }

        let mut values = values.into_iter();
        let head = values.next().ok_or(AppError::MissingValues)?;
        log::info!(
            "Running {} layout under {} semantics",
            match self.config.style {
                BuildStyle::Staged => "staged",
                BuildStyle::Direct => "direct",
            },
            self.config.semantics.name()
        );
        self.layout(head, values.collect())
    }
}

impl DocumentRenderer for Pipeline<'_> {
    fn render<A>(&self, document: &Document<A>) -> Result<String, AppError>
    where
        A: fmt::Display + Serialize,
    {
        if self.config.json {
            Ok(serde_json::to_string_pretty(document)?)
        } else {
            Ok(document.to_string())
        }
    }
}
