//! Help rendering configuration.

use std::io::IsTerminal;

use helpgrid_render::{HelpStyles, StyleError};
use tracing::warn;

/// Width used when none is configured and the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 80;

/// Configuration for clap help rendering.
///
/// ```rust
/// use helpgrid::HelpConfig;
///
/// let config = HelpConfig {
///     width: Some(60),
///     flags_last: true,
///     ..Default::default()
/// };
/// assert_eq!(config.resolve_width(), 60);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HelpConfig {
    /// Maximum line width. If None (or zero), the terminal width is used.
    pub width: Option<usize>,
    /// Custom styles. If None, uses [`HelpStyles::default`].
    pub styles: Option<HelpStyles>,
    /// Show `BOOL` as the type hint of on/off flags.
    pub show_bool_types: bool,
    /// Render the Options card after the Commands card.
    pub flags_last: bool,
    /// Stop after the usage line and description.
    pub summary: bool,
    /// List only direct subcommands instead of every leaf command path.
    pub collapse_subcommands: bool,
    /// Subcommand to tag with `(default)` in the Commands card.
    pub default_command: Option<String>,
}

impl HelpConfig {
    /// Loads styles from YAML shorthand (see [`HelpStyles::from_yaml`]).
    pub fn with_styles_yaml(mut self, yaml: &str) -> Result<Self, StyleError> {
        self.styles = Some(HelpStyles::from_yaml(yaml)?);
        Ok(self)
    }

    /// Resolves the width to render at.
    ///
    /// Uses the configured width, else the terminal width when stdout is a
    /// terminal, else [`DEFAULT_WIDTH`].
    pub fn resolve_width(&self) -> usize {
        if let Some(width) = self.width.filter(|w| *w > 0) {
            return width;
        }
        if !std::io::stdout().is_terminal() {
            return DEFAULT_WIDTH;
        }
        get_terminal_width().unwrap_or_else(|| {
            warn!(
                default = DEFAULT_WIDTH,
                "could not get the terminal width, using default"
            );
            DEFAULT_WIDTH
        })
    }

    pub(crate) fn resolve_styles(&self) -> HelpStyles {
        self.styles.clone().unwrap_or_default()
    }
}

/// Gets the current terminal width, or None if not available.
pub(crate) fn get_terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}
