//! Row builders for clap arguments and subcommands.
//!
//! Argument and flag rows have four cells: a two-column marker (`"* "` for
//! required, `"  "` otherwise), the name, a type hint, and the description.
//! Command rows have three: marker, command path, description. Group rows
//! have two: title and description.

use clap::{Arg, ArgAction, Command};
use helpgrid_render::{HelpStyles, Row};

const REQUIRED_TAG: &str = "[required]";
const DEFAULT_TAG: &str = "(default)";

fn marker(arg: &Arg, styles: &HelpStyles) -> String {
    if arg.is_required_set() {
        styles.required("* ")
    } else {
        "  ".to_string()
    }
}

fn value_name(arg: &Arg) -> Option<String> {
    arg.get_value_names()
        .filter(|names| !names.is_empty())
        .map(|names| {
            names
                .iter()
                .map(|name| name.to_uppercase())
                .collect::<Vec<_>>()
                .join(" ")
        })
}

fn help_text(arg: &Arg) -> String {
    arg.get_help().map(|s| s.to_string()).unwrap_or_default()
}

fn default_values(arg: &Arg) -> Option<String> {
    let values = arg.get_default_values();
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .map(|v| v.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Quotes a default value unless it reads as a number or boolean.
fn quote_default(value: &str) -> String {
    if value.parse::<f64>().is_ok() || value == "true" || value == "false" {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}

/// Joins the help text with trailing tags, skipping empty parts.
fn describe(help: String, tags: &[String]) -> String {
    std::iter::once(help)
        .chain(tags.iter().cloned())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the row for a positional argument.
///
/// The type hint is the explicit value name, if any. Defaults are listed in
/// the description.
pub fn positional_row(arg: &Arg, styles: &HelpStyles) -> Row {
    let hint = value_name(arg).unwrap_or_default();

    let mut tags = Vec::new();
    if arg.is_required_set() {
        tags.push(styles.required(REQUIRED_TAG));
    }
    if let Some(default) = default_values(arg) {
        tags.push(styles.default_value(&format!("(default: {default})")));
    }

    vec![
        marker(arg, styles),
        arg.get_id().as_str().to_string(),
        styles.type_hint(&hint),
        describe(help_text(arg), &tags),
    ]
}

/// Formats the flag names: `-v, --verbose`, `    --color` or `-v`, followed
/// by visible aliases and the default value.
pub fn flag_name(arg: &Arg, styles: &HelpStyles) -> String {
    let mut name = match arg.get_short() {
        Some(short) => format!("-{short}"),
        None => "  ".to_string(),
    };

    if let Some(long) = arg.get_long() {
        name.push_str(if arg.get_short().is_some() { ", --" } else { "  --" });
        name.push_str(long);

        for alias in arg.get_visible_aliases().unwrap_or_default() {
            name.push_str(",--");
            name.push_str(alias);
        }

        // Flags without values get implicit defaults from clap; only show
        // defaults the user can override with a value.
        if arg.get_action().takes_values() {
            if let Some(default) = default_values(arg) {
                name.push('=');
                name.push_str(&styles.default_value(&quote_default(&default)));
            }
        }
    }

    name
}

/// The type hint for a flag: its value name, `COUNTER` for counting flags,
/// or `BOOL` for on/off flags when `show_bool` is set.
pub fn flag_type_hint(arg: &Arg, show_bool: bool) -> String {
    let action = arg.get_action();
    if action.takes_values() {
        return value_name(arg).unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
    }
    match action {
        ArgAction::Count => "COUNTER".to_string(),
        ArgAction::SetTrue | ArgAction::SetFalse if show_bool => "BOOL".to_string(),
        _ => String::new(),
    }
}

/// Builds the row for a flag or option.
pub fn flag_row(arg: &Arg, styles: &HelpStyles, show_bool: bool) -> Row {
    let mut tags = Vec::new();
    if arg.is_required_set() {
        tags.push(styles.required(REQUIRED_TAG));
    }

    vec![
        marker(arg, styles),
        flag_name(arg, styles),
        styles.type_hint(&flag_type_hint(arg, show_bool)),
        describe(help_text(arg), &tags),
    ]
}

/// Builds the row for a subcommand listed under `path`, e.g. `remote add`.
pub fn command_row(path: &str, cmd: &Command, styles: &HelpStyles, is_default: bool) -> Row {
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();
    let tags = if is_default {
        vec![styles.default_value(DEFAULT_TAG)]
    } else {
        Vec::new()
    };

    vec![
        "  ".to_string(),
        styles.command(path),
        describe(about, &tags),
    ]
}

/// Builds a group heading row. A trailing `:` on the title is dropped.
pub fn group_row(title: &str, description: &str, styles: &HelpStyles) -> Row {
    let title = title.strip_suffix(':').unwrap_or(title);
    vec![styles.group(title), description.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> HelpStyles {
        HelpStyles::plain()
    }

    fn built(cmd: Command) -> Command {
        let mut cmd = cmd;
        cmd.build();
        cmd
    }

    fn find<'a>(cmd: &'a Command, id: &str) -> &'a Arg {
        cmd.get_arguments()
            .find(|a| a.get_id().as_str() == id)
            .expect("argument exists")
    }

    #[test]
    fn test_short_and_long() {
        let arg = Arg::new("verbose").short('v').long("verbose");
        assert_eq!(flag_name(&arg, &plain()), "-v, --verbose");
    }

    #[test]
    fn test_long_only_is_indented() {
        let arg = Arg::new("color").long("color");
        assert_eq!(flag_name(&arg, &plain()), "    --color");
    }

    #[test]
    fn test_short_only() {
        let arg = Arg::new("quiet").short('q').action(ArgAction::SetTrue);
        assert_eq!(flag_name(&arg, &plain()), "-q");
    }

    #[test]
    fn test_aliases_and_string_default() {
        let arg = Arg::new("format")
            .short('f')
            .long("format")
            .visible_alias("fmt")
            .default_value("text");
        assert_eq!(flag_name(&arg, &plain()), "-f, --format,--fmt=\"text\"");
    }

    #[test]
    fn test_numeric_default_unquoted() {
        let arg = Arg::new("jobs").long("jobs").default_value("4");
        assert_eq!(flag_name(&arg, &plain()), "    --jobs=4");
    }

    #[test]
    fn test_bool_flag_hides_implicit_default() {
        let cmd = built(
            Command::new("app").arg(Arg::new("force").long("force").action(ArgAction::SetTrue)),
        );
        let arg = find(&cmd, "force");
        assert_eq!(flag_name(arg, &plain()), "    --force");
    }

    #[test]
    fn test_type_hints() {
        let count = Arg::new("verbose").short('v').action(ArgAction::Count);
        let switch = Arg::new("force").long("force").action(ArgAction::SetTrue);
        let named = Arg::new("output").long("output").value_name("path");
        let unnamed = Arg::new("level").long("level");

        assert_eq!(flag_type_hint(&count, false), "COUNTER");
        assert_eq!(flag_type_hint(&switch, false), "");
        assert_eq!(flag_type_hint(&switch, true), "BOOL");
        assert_eq!(flag_type_hint(&named, false), "PATH");
        assert_eq!(flag_type_hint(&unnamed, false), "LEVEL");
    }

    #[test]
    fn test_required_flag_row() {
        let arg = Arg::new("output")
            .long("output")
            .value_name("PATH")
            .help("Where to write")
            .required(true);
        let row = flag_row(&arg, &plain(), false);
        assert_eq!(
            row,
            vec!["* ", "    --output", "PATH", "Where to write [required]"]
        );
    }

    #[test]
    fn test_styled_flag_row() {
        let styles = HelpStyles::default().force_styling(true);
        let arg = Arg::new("output").long("output").required(true);
        let row = flag_row(&arg, &styles, false);

        assert!(row[0].contains("\x1b["));
        assert!(row[3].ends_with("\x1b[0m"));
    }

    #[test]
    fn test_positional_row() {
        let arg = Arg::new("file")
            .value_name("PATH")
            .default_value("-")
            .help("Input file");
        let row = positional_row(&arg, &plain());
        assert_eq!(row, vec!["  ", "file", "PATH", "Input file (default: -)"]);
    }

    #[test]
    fn test_required_positional_without_help() {
        let arg = Arg::new("number").required(true);
        let row = positional_row(&arg, &plain());
        assert_eq!(row, vec!["* ", "number", "", "[required]"]);
    }

    #[test]
    fn test_command_row_default_tag() {
        let cmd = Command::new("show").about("Show the current state");
        assert_eq!(
            command_row("show", &cmd, &plain(), true),
            vec!["  ", "show", "Show the current state (default)"]
        );
        assert_eq!(
            command_row("remote add", &cmd, &plain(), false),
            vec!["  ", "remote add", "Show the current state"]
        );
    }

    #[test]
    fn test_group_row_strips_colon() {
        assert_eq!(
            group_row("Network:", "", &plain()),
            vec!["Network".to_string(), String::new()]
        );
    }
}
