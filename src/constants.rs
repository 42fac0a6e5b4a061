// src/constants.rs
//! Named defaults for how documents are laid out and diagnosed.

/// How many leading leaves the layout program groups horizontally.
///
/// Everything after the first group is stacked vertically.
pub const LAYOUT_HEAD_GROUP: usize = 2;

/// Default number of columns per row for grid arrangements.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Log file name written under the system temp dir by the binary.
pub const LOG_FILE_NAME: &str = "docgrid.log";

/// Stderr pattern for verbose runs. `{M}` names the layer that logged
/// (`docgrid::program::interpreter`, `docgrid::traversal`, ...).
pub const LOG_CONSOLE_PATTERN: &str = "{l:<5} {M}: {m}{n}";

/// Log file pattern, with millisecond timestamps to line up interpreter steps.
pub const LOG_FILE_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l:<5} {M}: {m}{n}";

/// Rendering of the `Empty` document in bracket notation.
pub const EMPTY_GLYPH: &str = "_";
