//! Semantic styling for help output.
//!
//! Help rows are styled by meaning rather than by color: a required marker, a
//! default value, a type hint, and so on. [`HelpStyles`] maps each
//! [`Category`] to a [`console::Style`] and is passed explicitly into
//! rendering, so there is no process-wide color state.
//!
//! ## YAML Configuration
//!
//! Styles can be overridden from YAML using shorthand values: whitespace
//! separated attributes plus at most one color.
//!
//! ```rust
//! use helpgrid_render::style::{Category, HelpStyles};
//!
//! let styles = HelpStyles::from_yaml(r#"
//! required: bright_red bold
//! type_hint: 208
//! muted: dim
//! "#).unwrap();
//!
//! assert!(styles.get(Category::Required).is_some());
//! ```
//!
//! Supported colors are the eight named ANSI colors (`red`, `cyan`, ...),
//! their `bright_` variants, `gray`/`grey`, and palette indices `0`-`255`.
//! Supported attributes are `bold`, `dim`, `italic`, `underline`, `blink`,
//! `reverse`, `hidden` and `strikethrough`.

mod error;

use std::collections::BTreeMap;

use console::{Color, Style};
use serde::Deserialize;

pub use error::StyleError;

/// The semantic role of a styled fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Required markers (`* `) and `[required]` tags.
    Required,
    /// Default values and the `(default)` command tag.
    Default,
    /// Type hints such as `PATH` or `COUNTER`.
    TypeHint,
    /// Group headings.
    Group,
    /// Command names.
    Command,
    /// Low-emphasis text such as card titles.
    Muted,
    /// Labels such as `Usage`.
    Label,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Required,
        Category::Default,
        Category::TypeHint,
        Category::Group,
        Category::Command,
        Category::Muted,
        Category::Label,
    ];

    /// The configuration key for this category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Required => "required",
            Category::Default => "default",
            Category::TypeHint => "type_hint",
            Category::Group => "group",
            Category::Command => "command",
            Category::Muted => "muted",
            Category::Label => "label",
        }
    }
}

/// One style per semantic category.
///
/// The [`Default`] palette is red for required, magenta for defaults, yellow
/// for type hints and labels, cyan for commands, bold group headings, and
/// bright black for muted text. [`HelpStyles::plain`] styles nothing.
///
/// Whether escapes are emitted follows `console`'s terminal detection unless
/// overridden with [`HelpStyles::force_styling`].
#[derive(Clone, Debug)]
pub struct HelpStyles {
    styles: BTreeMap<Category, Style>,
}

impl Default for HelpStyles {
    fn default() -> Self {
        HelpStyles::plain()
            .set(Category::Required, Style::new().red())
            .set(Category::Default, Style::new().magenta())
            .set(Category::TypeHint, Style::new().yellow())
            .set(Category::Group, Style::new().bold())
            .set(Category::Command, Style::new().cyan())
            .set(Category::Muted, Style::new().fg(Color::Color256(8)))
            .set(Category::Label, Style::new().yellow())
    }
}

impl HelpStyles {
    /// Creates a style set that leaves all text unstyled.
    pub fn plain() -> Self {
        HelpStyles {
            styles: BTreeMap::new(),
        }
    }

    /// Loads styles from YAML, starting from the default palette.
    ///
    /// Keys are category names (`required`, `default`, `type_hint`, `group`,
    /// `command`, `muted`, `label`); values are shorthand strings.
    ///
    /// # Errors
    ///
    /// [`StyleError::Parse`] for malformed YAML or unknown categories,
    /// [`StyleError::InvalidShorthand`] for unknown colors or attributes.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        let entries: BTreeMap<Category, String> = serde_yaml::from_str(yaml)?;
        let mut styles = HelpStyles::default();
        for (category, value) in entries {
            let style = parse_shorthand(&value, category)?;
            styles.styles.insert(category, style);
        }
        Ok(styles)
    }

    /// Sets the style for a category.
    pub fn set(mut self, category: Category, style: Style) -> Self {
        self.styles.insert(category, style);
        self
    }

    /// Returns the style for a category, if one is set.
    pub fn get(&self, category: Category) -> Option<&Style> {
        self.styles.get(&category)
    }

    /// Forces (`true`) or suppresses (`false`) escape sequences regardless of
    /// whether the output is a terminal.
    pub fn force_styling(self, value: bool) -> Self {
        HelpStyles {
            styles: self
                .styles
                .into_iter()
                .map(|(category, style)| (category, style.force_styling(value)))
                .collect(),
        }
    }

    /// Applies the category's style to `text`.
    ///
    /// Empty text stays empty so it never carries stray escape sequences.
    pub fn paint(&self, category: Category, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match self.styles.get(&category) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    /// Paints the `[required]` tag and required markers.
    pub fn required(&self, text: &str) -> String {
        self.paint(Category::Required, text)
    }

    /// Paints inline default values.
    pub fn default_value(&self, text: &str) -> String {
        self.paint(Category::Default, text)
    }

    /// Paints value names such as `PATH` or `COUNTER`.
    pub fn type_hint(&self, text: &str) -> String {
        self.paint(Category::TypeHint, text)
    }

    /// Paints option group headings.
    pub fn group(&self, text: &str) -> String {
        self.paint(Category::Group, text)
    }

    /// Paints subcommand names.
    pub fn command(&self, text: &str) -> String {
        self.paint(Category::Command, text)
    }

    /// Paints secondary text such as card titles.
    pub fn muted(&self, text: &str) -> String {
        self.paint(Category::Muted, text)
    }

    /// Paints labels such as `Usage`.
    pub fn label(&self, text: &str) -> String {
        self.paint(Category::Label, text)
    }
}

/// Parses shorthand such as `"bright_red bold"` into a style.
fn parse_shorthand(value: &str, category: Category) -> Result<Style, StyleError> {
    let invalid = |message: String| StyleError::InvalidShorthand {
        category: category.name().to_string(),
        message,
    };

    let mut style = Style::new();
    let mut has_color = false;
    let mut empty = true;

    for part in value.split_whitespace() {
        empty = false;
        style = match part.to_lowercase().as_str() {
            "bold" => style.bold(),
            "dim" => style.dim(),
            "italic" => style.italic(),
            "underline" => style.underlined(),
            "blink" => style.blink(),
            "reverse" => style.reverse(),
            "hidden" => style.hidden(),
            "strikethrough" => style.strikethrough(),
            color => {
                if has_color {
                    return Err(invalid(format!(
                        "multiple colors in shorthand, got '{}'",
                        part
                    )));
                }
                has_color = true;
                style.fg(parse_color(color).map_err(invalid)?)
            }
        };
    }

    if empty {
        return Err(invalid(format!("empty shorthand '{}'", value)));
    }
    Ok(style)
}

fn parse_color(name: &str) -> Result<Color, String> {
    if let Ok(index) = name.parse::<u8>() {
        return Ok(Color::Color256(index));
    }
    if let Some(base) = name.strip_prefix("bright_") {
        let index = match base {
            "black" => 8,
            "red" => 9,
            "green" => 10,
            "yellow" => 11,
            "blue" => 12,
            "magenta" => 13,
            "cyan" => 14,
            "white" => 15,
            _ => return Err(format!("unknown bright color: {}", name)),
        };
        return Ok(Color::Color256(index));
    }
    match name {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" | "gray" | "grey" => Ok(Color::White),
        _ => Err(format!("unknown color or attribute: {}", name)),
    }
}
