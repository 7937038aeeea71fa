//! CLI argument definitions for the pathdoc binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pathdoc::Options;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Bare strings, pretty JSON for everything else
    Human,
    /// Always JSON
    Json,
}

/// Read and edit JSON documents with dotted paths
#[derive(Parser, Debug)]
#[command(name = "pathdoc")]
#[command(about = "pathdoc: read and edit JSON documents with dotted paths")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Output format
    #[arg(short, long, global = true, default_value = "human", env = "PATHDOC_FORMAT")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

/// Document options shared by every command
#[derive(clap::Args, Debug)]
pub struct OptionArgs {
    /// Path segment separator (one character up to U+00FF)
    #[arg(short, long, global = true, default_value = ".", value_parser = parse_separator, env = "PATHDOC_SEPARATOR")]
    pub separator: u8,

    /// Resolve keys that contain the separator
    #[arg(long, global = true)]
    pub violence_check: bool,

    /// Keep numbers as their exact text
    #[arg(long, global = true)]
    pub preserve_numbers: bool,
}

impl OptionArgs {
    pub fn to_options(&self) -> Options {
        Options::default()
            .separator(self.separator)
            .violence_check(self.violence_check)
            .preserve_numbers(self.preserve_numbers)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Print the number of children at a path
    Len(TargetArgs),
    /// Exit successfully if a path exists
    Contains(TargetArgs),
    /// Store a value at a path
    Set(SetArgs),
    /// Append a value to the sequence at a path
    Append(SetArgs),
    /// Remove the value at a path
    Remove(RemoveArgs),
}

/// A document file and a path inside it
#[derive(clap::Args, Debug)]
pub struct TargetArgs {
    /// JSON file to read, `-` for stdin
    pub file: PathBuf,

    /// Path inside the document
    pub path: String,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Value to print when the path is absent
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Arguments for the set and append commands
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Value to write; parsed as JSON unless --string is given
    pub value: String,

    /// Take the value as a literal string
    #[arg(long)]
    pub string: bool,

    /// Write the result back to the file instead of stdout
    #[arg(short, long)]
    pub in_place: bool,
}

/// Arguments for the remove command
#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Write the result back to the file instead of stdout
    #[arg(short, long)]
    pub in_place: bool,
}

fn parse_separator(s: &str) -> Result<u8, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => u8::try_from(c).map_err(|_| format!("'{c}' is outside U+0000..U+00FF")),
        _ => Err("separator must be exactly one character".to_string()),
    }
}
