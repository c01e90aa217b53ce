//! Command-line surface.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "dirnotes",
    version,
    about = "Keep short notes attached to the current directory",
    long_about = "Keep short notes attached to the current directory.\n\
                  Run without a subcommand to list the notes of the current directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a note to the current directory
    #[command(disable_help_flag = true)]
    Add {
        /// Note text; words are joined with single spaces
        #[arg(
            value_name = "WORD",
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        words: Vec<String>,
    },
    /// Delete a note of the current directory by id
    Delete {
        #[arg(value_name = "ID", allow_hyphen_values = true)]
        id: String,
        /// Anything after the id is ignored
        #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        ignored: Vec<String>,
    },
}

/// One resolved operation against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Add { text: String },
    Delete { raw_id: String },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add { .. } => "add",
            Self::Delete { .. } => "delete",
        }
    }
}

impl Cli {
    pub fn into_action(self) -> Action {
        match self.command {
            None => Action::List,
            Some(Command::Add { words }) => Action::Add {
                text: words.join(" "),
            },
            Some(Command::Delete { id, .. }) => Action::Delete { raw_id: id },
        }
    }
}
