use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tparse")]
#[command(about = "Turn annotated plain text into Things 3 imports")]
#[command(long_about = "tparse - plain text to Things 3

Reads lines of text annotated with short sigils and turns each into a
Things 3 to-do, project or heading, ready for the JSON import URL.

SIGILS:
  #tag          Add a tag (repeatable)
  [Project]     File the to-do under an existing project
  [[Project]]   Create a new project
  :: notes      Attach notes
  == Heading    Heading inside a project
  > friday      Deadline
  * item        Checklist item (repeatable)

BLOCKS:
  A paragraph wrapped in backtick fences is a block; its first line is a
  template the other lines inherit from:

    ``[Home] #errands
    Buy milk
    Return library books #urgent``

QUICK START:
  tparse parse notes.txt          Show what each line parses to
  tparse export notes.txt         Print the Things JSON payload
  tparse send notes.txt --reveal  Import into Things and show the result

For more information on a specific command, run:
  tparse <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Log parser decisions to stderr
    ///
    /// Same as RUST_LOG=debug; an explicit RUST_LOG wins.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read settings from this file instead of ~/.tparse/config.yaml
    #[arg(long, global = true, env = "TPARSE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the fields extracted from each line
    ///
    /// Useful to check how a document will be read before sending it.
    ///
    /// # Examples
    ///
    ///   tparse parse todo.txt
    ///   echo "Buy milk [Home] #errands" | tparse parse
    ///   tparse parse todo.txt --when --output json
    #[command(alias = "p")]
    Parse(InputArgs),

    /// Print the JSON payload for the Things import command
    ///
    /// With --output json only the compact payload is printed, suitable
    /// for piping. Pretty output lists the items first.
    ///
    /// # Examples
    ///
    ///   tparse export todo.txt --output json > payload.json
    ///   tparse export todo.txt --now 2026-10-21T09:00:00
    #[command(alias = "e")]
    Export(ExportArgs),

    /// Print the things:/// callback URL carrying the payload
    ///
    /// # Examples
    ///
    ///   tparse url todo.txt
    ///   tparse url todo.txt --reveal | pbcopy
    Url(ExportArgs),

    /// Open the callback URL so Things imports the items (macOS only)
    ///
    /// # Examples
    ///
    ///   tparse send todo.txt
    ///   pbpaste | tparse send --reveal
    Send(ExportArgs),

    /// Write a config file with the default settings
    ///
    /// Goes to --config (or TPARSE_CONFIG) when given, otherwise
    /// ~/.tparse/config.yaml.
    ///
    /// # Examples
    ///
    ///   tparse init
    ///   tparse init --config ./tparse.yaml --force
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// Example: tparse completions zsh > ~/.zfunc/_tparse
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where to read text from and how to read it.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// File to read; omit or pass '-' for stdin
    pub file: Option<PathBuf>,

    /// Also pull a `when` date out of each title ("Call mom friday 3pm")
    #[arg(long)]
    pub when: bool,

    /// Resolve relative dates against this instant instead of now
    ///
    /// Accepts YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS.
    #[arg(long, value_name = "ISO")]
    pub now: Option<String>,
}

/// Input options plus export toggles.
#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Ask Things to show each item after import
    #[arg(long)]
    pub reveal: bool,
}
