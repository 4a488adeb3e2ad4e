//! # Helpgrid - Card-Style Help Pages for Clap
//!
//! `helpgrid` renders a clap [`Command`](clap::Command)'s help as bordered
//! cards with aligned columns:
//!
//! ```text
//!   Usage: demo [OPTIONS] <INT> [PATH]
//!
//! ╭─ Arguments ──────────────────────────────────────────────╮
//! │ *  number   INT  Number [required]                       │
//! │    filename PATH Filepath (default: -)                   │
//! ╰──────────────────────────────────────────────────────────╯
//! ╭─ Options ────────────────────────────────────────────────╮
//! │    -v, --verbosity   COUNTER Set verbosity               │
//! │    -d, --default="a" DEFAULT Enum example flag (a, b, c) │
//! │        --test="test" TEST                                │
//! │        --force               Overwrite existing output   │
//! │                              without asking for          │
//! │                              confirmation first          │
//! ╰──────────────────────────────────────────────────────────╯
//! ```
//!
//! Required arguments carry a `* ` marker and a `[required]` tag, defaults are
//! shown inline (`--test="test"`), and long descriptions wrap under their own
//! column.
//!
//! ## Quick Start
//!
//! ```rust
//! use clap::{Arg, Command};
//! use helpgrid::{render_help, HelpConfig};
//!
//! let cmd = Command::new("app")
//!     .about("Does things")
//!     .arg(Arg::new("input").required(true).help("Input file"));
//!
//! let help = render_help(&cmd, Some(HelpConfig {
//!     width: Some(60),
//!     ..Default::default()
//! })).unwrap();
//! assert!(help.contains("Arguments"));
//! ```
//!
//! Layout is delegated to [`helpgrid_render`]; this crate turns clap
//! arguments and subcommands into rows and decides which cards to draw.

mod config;
mod error;
mod render;
pub mod rows;

pub use config::{HelpConfig, DEFAULT_WIDTH};
pub use error::{HelpError, Result};
pub use render::{render_help, render_help_lines, write_help};

pub use helpgrid_render::{Category, HelpStyles};
