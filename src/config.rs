// src/config.rs
use crate::constants::{DEFAULT_GRID_COLUMNS, LAYOUT_HEAD_GROUP};
use crate::error::AppError;
use crate::model::Arrangement;
use clap::Parser;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Leaf values, in order
    pub values: Vec<String>,

    /// How values are arranged: layout, row, column, split or grid
    #[arg(short, long, default_value = "layout")]
    pub arrangement: String,

    /// Number of leading values kept side by side by the split arrangement
    #[arg(long, default_value_t = LAYOUT_HEAD_GROUP)]
    pub split_at: usize,

    /// Values per row for the grid arrangement
    #[arg(long, default_value_t = DEFAULT_GRID_COLUMNS)]
    pub columns: usize,

    /// Effect semantics for the layout: pure, optional or strict
    #[arg(short, long, default_value = "pure")]
    pub interpreter: String,

    /// Build the layout as a staged program or by direct calls
    #[arg(long, default_value = "staged")]
    pub style: String,

    /// Parse every leaf as an integer; any bad leaf fails the whole run
    #[arg(short, long, default_value_t = false)]
    pub numeric: bool,

    /// Parse leaves on the rayon pool
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Print the document as JSON instead of bracket notation
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Effect semantics used when building the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semantics {
    /// Rejection is a value; the layout falls back to a single leaf.
    Pure,
    /// Rejection leaves no document at all.
    Optional,
    /// Rejection stops the run with an error.
    Strict,
}

impl Semantics {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pure" => Ok(Self::Pure),
            "optional" => Ok(Self::Optional),
            "strict" => Ok(Self::Strict),
            _ => Err(AppError::UnknownInterpreter(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::Optional => "optional",
            Self::Strict => "strict",
        }
    }
}

/// Whether the layout goes through a staged program or direct algebra calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStyle {
    Staged,
    Direct,
}

impl BuildStyle {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "staged" | "program" => Ok(Self::Staged),
            "direct" => Ok(Self::Direct),
            _ => Err(AppError::UnknownStyle(name.to_string())),
        }
    }
}

/// Resolved run configuration, validated and ready to drive a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub values: Vec<String>,
    /// `None` runs the layout program; `Some` arranges values directly.
    pub arrangement: Option<Arrangement>,
    pub semantics: Semantics,
    pub style: BuildStyle,
    pub numeric: bool,
    pub parallel: bool,
    pub json: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Resolves a complete run configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        if cli.values.is_empty() {
            return Err(AppError::MissingValues);
        }

        let arrangement = resolve_arrangement(&cli.arrangement, cli.split_at, cli.columns)?;

        Ok(RunConfig {
            values: cli.values,
            arrangement,
            semantics: Semantics::parse(&cli.interpreter)?,
            style: BuildStyle::parse(&cli.style)?,
            numeric: cli.numeric,
            parallel: cli.parallel,
            json: cli.json,
            verbose: cli.verbose,
        })
    }
}

fn resolve_arrangement(
    name: &str,
    split_at: usize,
    columns: usize,
) -> Result<Option<Arrangement>, AppError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "layout" => Ok(None),
        "row" => Ok(Some(Arrangement::Row)),
        "column" => Ok(Some(Arrangement::Column)),
        "split" => Ok(Some(Arrangement::Split { at: split_at })),
        "grid" if columns == 0 => Err(AppError::InvalidArrangement(
            "grid needs at least one column".to_string(),
        )),
        "grid" => Ok(Some(Arrangement::Grid { columns })),
        other => Err(AppError::InvalidArrangement(format!(
            "unknown arrangement '{}'",
            other
        ))),
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            arrangement: None,
            semantics: Semantics::Pure,
            style: BuildStyle::Staged,
            numeric: false,
            parallel: false,
            json: false,
            verbose: false,
        }
    }
}
