//! Help page rendering for clap commands.

use std::io::Write;

use clap::{Arg, Command};
use helpgrid_render::{align, Frame, HelpStyles, Row};
use tracing::debug;

use crate::config::HelpConfig;
use crate::error::Result;
use crate::rows::{command_row, flag_row, group_row, positional_row};

const USAGE_LABEL: &str = "Usage";

/// Renders the help page for a clap command.
///
/// # Example
///
/// ```rust
/// use clap::{Arg, Command};
/// use helpgrid::{render_help, HelpConfig, HelpStyles};
///
/// let cmd = Command::new("app")
///     .about("Does things")
///     .arg(Arg::new("verbose").short('v').long("verbose").help("Be loud"));
///
/// let config = HelpConfig {
///     width: Some(40),
///     styles: Some(HelpStyles::plain()),
///     ..Default::default()
/// };
/// let help = render_help(&cmd, Some(config)).unwrap();
/// assert!(help.contains("╭─ Options"));
/// assert!(help.contains("-v, --verbose"));
/// ```
pub fn render_help(cmd: &Command, config: Option<HelpConfig>) -> Result<String> {
    let config = config.unwrap_or_default();
    Ok(render_help_lines(cmd, &config)?.join("\n"))
}

/// Renders the help page and writes it to `writer`, one line at a time.
pub fn write_help<W: Write>(
    cmd: &Command,
    config: Option<HelpConfig>,
    mut writer: W,
) -> Result<()> {
    let config = config.unwrap_or_default();
    for line in render_help_lines(cmd, &config)? {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders the help page as owned lines.
///
/// Sections, in order: usage, about, long about, then the Arguments,
/// Options and Commands cards (Options last with
/// [`flags_last`](HelpConfig::flags_last)). In
/// [`summary`](HelpConfig::summary) mode, rendering stops after the about
/// text.
pub fn render_help_lines(cmd: &Command, config: &HelpConfig) -> Result<Vec<String>> {
    let mut cmd = cmd.clone();
    cmd.build();

    let width = config.resolve_width();
    let styles = config.resolve_styles();
    let frame = Frame::new(width);
    debug!(command = cmd.get_name(), width, "rendering help");

    let mut lines = vec![String::new()];
    lines.extend(usage_lines(&mut cmd, &styles));

    if let Some(about) = cmd.get_about() {
        lines.push(String::new());
        lines.extend(frame.wrap_text(&about.to_string())?);
    }
    if config.summary {
        return Ok(lines);
    }
    if let Some(long_about) = cmd.get_long_about() {
        lines.push(String::new());
        lines.extend(frame.wrap_text(&long_about.to_string())?);
    }

    let mut cards = Vec::new();
    cards.extend(arguments_card(&frame, &cmd, &styles)?);
    if !config.flags_last {
        cards.extend(options_card(&frame, &cmd, &styles, config)?);
    }
    cards.extend(commands_card(&frame, &cmd, &styles, config)?);
    if config.flags_last {
        cards.extend(options_card(&frame, &cmd, &styles, config)?);
    }

    if !cards.is_empty() {
        lines.push(String::new());
        lines.extend(cards);
    }
    Ok(lines)
}

/// The usage line, with continuation lines aligned under the first.
fn usage_lines(cmd: &mut Command, styles: &HelpStyles) -> Vec<String> {
    let usage = cmd.render_usage().to_string();
    let usage = usage.strip_prefix("Usage: ").unwrap_or(&usage);

    let indent = " ".repeat(2 + USAGE_LABEL.len() + 2);
    usage
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("  {}: {}", styles.label(USAGE_LABEL), line.trim())
            } else {
                format!("{indent}{}", line.trim())
            }
        })
        .collect()
}

fn arguments_card(frame: &Frame, cmd: &Command, styles: &HelpStyles) -> Result<Vec<String>> {
    let rows: Vec<Row> = cmd
        .get_positionals()
        .filter(|arg| !arg.is_hide_set())
        .map(|arg| positional_row(arg, styles))
        .collect();
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    Ok(frame.card(&styles.muted("Arguments"), |body| {
        body.render_rows_or_plain(rows)
    })?)
}

/// Groups options by help heading, ungrouped first, headings in order of
/// first appearance.
fn group_by_heading<'a>(args: &[&'a Arg]) -> Vec<(Option<&'a str>, Vec<&'a Arg>)> {
    let mut groups: Vec<(Option<&str>, Vec<&Arg>)> = vec![(None, Vec::new())];
    for &arg in args {
        let heading = arg.get_help_heading();
        match groups.iter_mut().find(|(h, _)| *h == heading) {
            Some((_, members)) => members.push(arg),
            None => groups.push((heading, vec![arg])),
        }
    }
    groups.retain(|(_, members)| !members.is_empty());
    groups
}

fn options_card(
    frame: &Frame,
    cmd: &Command,
    styles: &HelpStyles,
    config: &HelpConfig,
) -> Result<Vec<String>> {
    let mut args: Vec<&Arg> = cmd
        .get_arguments()
        .filter(|arg| !arg.is_positional() && !arg.is_hide_set())
        .collect();
    if args.is_empty() {
        return Ok(Vec::new());
    }
    args.sort_by_key(|arg| arg.get_display_order());

    let groups = group_by_heading(&args);
    let rows: Vec<Row> = groups
        .iter()
        .flat_map(|(_, members)| members.iter())
        .map(|arg| flag_row(arg, styles, config.show_bool_types))
        .collect();

    // Align across all groups so the columns line up under every heading
    let mut aligned = align(rows)?.into_iter();

    Ok(frame.card(&styles.muted("Options"), |body| {
        let mut out = Vec::new();
        for (heading, members) in &groups {
            if let Some(heading) = heading {
                if !out.is_empty() {
                    out.push(body.blank());
                }
                out.extend(body.render_rows_or_plain(vec![group_row(heading, "", styles)])?);
            }
            let rows: Vec<Row> = aligned.by_ref().take(members.len()).collect();
            out.extend(body.render_aligned_or_plain(&rows));
        }
        Ok(out)
    })?)
}

/// Collects visible subcommands with their display paths, expanding nested
/// commands down to their leaves unless `collapse` is set.
fn collect_commands<'a>(
    cmd: &'a Command,
    prefix: &str,
    collapse: bool,
    out: &mut Vec<(String, &'a Command)>,
) {
    let mut subs: Vec<&Command> = cmd.get_subcommands().filter(|s| !s.is_hide_set()).collect();
    subs.sort_by_key(|s| s.get_display_order());

    for sub in subs {
        let path = if prefix.is_empty() {
            sub.get_name().to_string()
        } else {
            format!("{prefix} {}", sub.get_name())
        };
        if !collapse && sub.has_subcommands() {
            collect_commands(sub, &path, collapse, out);
        } else {
            out.push((path, sub));
        }
    }
}

fn commands_card(
    frame: &Frame,
    cmd: &Command,
    styles: &HelpStyles,
    config: &HelpConfig,
) -> Result<Vec<String>> {
    let mut commands = Vec::new();
    collect_commands(cmd, "", config.collapse_subcommands, &mut commands);
    if commands.is_empty() {
        return Ok(Vec::new());
    }

    let default = config.default_command.as_deref();
    let rows: Vec<Row> = commands
        .iter()
        .map(|(path, sub)| command_row(path, sub, styles, default == Some(path.as_str())))
        .collect();

    Ok(frame.card(&styles.muted("Commands"), |body| {
        body.render_rows_or_plain(rows)
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ArgAction;

    fn config(width: usize) -> HelpConfig {
        HelpConfig {
            width: Some(width),
            styles: Some(HelpStyles::plain()),
            ..Default::default()
        }
    }

    fn sample() -> Command {
        Command::new("tool")
            .about("A tool that does things")
            .disable_help_flag(true)
            .arg(Arg::new("input").required(true).help("Input file"))
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count)
                    .help("Verbosity"),
            )
            .arg(
                Arg::new("token")
                    .long("token")
                    .help_heading("Network")
                    .help("API token"),
            )
            .subcommand(Command::new("list").about("List things"))
            .subcommand(
                Command::new("remote")
                    .about("Manage remotes")
                    .disable_help_subcommand(true)
                    .subcommand(Command::new("add").about("Add a remote")),
            )
    }

    fn index_of(lines: &[String], needle: &str) -> usize {
        lines
            .iter()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("no line contains {needle:?}: {lines:#?}"))
    }

    #[test]
    fn test_usage_line() {
        let lines = render_help_lines(&sample(), &config(60)).unwrap();
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("  Usage: tool"), "{:?}", lines[1]);
    }

    #[test]
    fn test_sections_in_order() {
        let lines = render_help_lines(&sample(), &config(60)).unwrap();
        let about = index_of(&lines, "A tool that does things");
        let args = index_of(&lines, "╭─ Arguments");
        let opts = index_of(&lines, "╭─ Options");
        let cmds = index_of(&lines, "╭─ Commands");
        assert!(about < args && args < opts && opts < cmds);
    }

    #[test]
    fn test_flags_last() {
        let config = HelpConfig {
            flags_last: true,
            ..config(60)
        };
        let lines = render_help_lines(&sample(), &config).unwrap();
        assert!(index_of(&lines, "╭─ Commands") < index_of(&lines, "╭─ Options"));
    }

    #[test]
    fn test_summary_stops_after_about() {
        let config = HelpConfig {
            summary: true,
            ..config(60)
        };
        let lines = render_help_lines(&sample(), &config).unwrap();
        assert!(lines.last().unwrap().contains("A tool that does things"));
        assert!(!lines.iter().any(|line| line.contains('╭')));
    }

    #[test]
    fn test_group_heading_inside_options() {
        let lines = render_help_lines(&sample(), &config(60)).unwrap();
        let network = index_of(&lines, "│ Network");
        assert!(network > index_of(&lines, "--verbose"));
        assert!(network < index_of(&lines, "--token"));
    }

    #[test]
    fn test_nested_commands_expand_to_paths() {
        let lines = render_help_lines(&sample(), &config(60)).unwrap();
        index_of(&lines, "remote add");
        assert!(!lines.iter().any(|line| line.contains("Manage remotes")));

        let collapsed = HelpConfig {
            collapse_subcommands: true,
            ..config(60)
        };
        let lines = render_help_lines(&sample(), &collapsed).unwrap();
        index_of(&lines, "Manage remotes");
    }

    #[test]
    fn test_default_command_tag() {
        let config = HelpConfig {
            default_command: Some("list".into()),
            ..config(60)
        };
        let lines = render_help_lines(&sample(), &config).unwrap();
        index_of(&lines, "List things (default)");
    }

    #[test]
    fn test_card_lines_fill_width() {
        let lines = render_help_lines(&sample(), &config(50)).unwrap();
        for line in lines.iter().filter(|line| line.starts_with('│')) {
            assert_eq!(helpgrid_render::visible_width(line), 50, "{line:?}");
        }
    }

    #[test]
    fn test_write_help_matches_render() {
        let mut buf = Vec::new();
        write_help(&sample(), Some(config(60)), &mut buf).unwrap();
        let written = String::from_utf8(buf).unwrap();
        let rendered = render_help(&sample(), Some(config(60))).unwrap();
        assert_eq!(written, format!("{rendered}\n"));
    }
}
