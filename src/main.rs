// src/main.rs
use anyhow::Context;
use clap::Parser;
use docgrid::constants::{LOG_CONSOLE_PATTERN, LOG_FILE_NAME, LOG_FILE_PATTERN};
use docgrid::{CommandLineInput, DocumentRenderer, DocumentSource, Pipeline, RunConfig};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the log4rs configuration for one run.
///
/// Verbose runs send debug output to stderr and everything down to
/// per-leaf traversal traces to `log_file`; quiet runs keep only warnings.
fn log_config(verbose: bool, log_file: &Path) -> anyhow::Result<Config> {
    let (root_level, console_level, console_pattern) = if verbose {
        (LevelFilter::Trace, LevelFilter::Debug, LOG_CONSOLE_PATTERN)
    } else {
        (LevelFilter::Warn, LevelFilter::Warn, "{m}{n}")
    };

    // stdout carries the rendered document only
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(console_pattern)))
        .build();

    let file = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new(LOG_FILE_PATTERN)))
        .build(log_file)
        .with_context(|| format!("Cannot open log file {}", log_file.display()))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(console_level)))
                .build("console", Box::new(console)),
        )
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(root_level),
        )?;
    Ok(config)
}

/// Installs logging and returns the log file path.
fn setup_logging(verbose: bool) -> anyhow::Result<PathBuf> {
    let log_file = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }

    log4rs::init_config(log_config(verbose, &log_file)?)?;
    Ok(log_file)
}

/// Builds the document, optionally parses its leaves, and renders it.
fn execute_pipeline(config: &RunConfig) -> anyhow::Result<String> {
    let pipeline = Pipeline::new(config);

    let document = pipeline.build().context("Failed to build document")?;
    log::info!(
        "Built document: {} leaves, {} nodes, depth {}",
        document.leaf_count(),
        document.size(),
        document.depth()
    );

    let rendered = if config.numeric {
        let numbers = pipeline
            .parse_leaves(document)
            .context("Failed to parse leaf values")?;
        log::info!("Leaf total: {}", numbers.leaves().sum::<i64>());
        pipeline.render(&numbers)?
    } else {
        pipeline.render(&document)?
    };

    Ok(rendered)
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    let log_file = setup_logging(cli.verbose).context("Failed to set up logging")?;

    let config = RunConfig::resolve(cli).context("Invalid arguments")?;
    log::info!(
        "{} values, arrangement {:?}, {} semantics, {:?} style (log: {})",
        config.values.len(),
        config.arrangement,
        config.semantics.name(),
        config.style,
        log_file.display()
    );
    let rendered = execute_pipeline(&config)?;
    println!("{}", rendered);

    Ok(())
}
