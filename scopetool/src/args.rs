use std::path::PathBuf;

/// A debug tool for scope-selector.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Parses a selector and prints its AST.
    Ast {
        #[command(flatten)]
        input: Input,
    },

    /// Parses a selector and prints it back.
    Ouroboros {
        #[command(flatten)]
        input: Input,

        /// Print a diff against the input instead of the dump.
        #[arg(long)]
        diff: bool,
    },

    /// Checks that parsing a dump produces the same AST and the same dump.
    CheckIdempotence {
        #[command(flatten)]
        input: Input,
    },

    /// Matches a selector against a scope. Exits with 1 if it doesn't match.
    Match {
        #[command(flatten)]
        input: Input,

        /// The scope at the position, e.g. `source.js string.quoted`.
        #[arg(long)]
        scope: String,

        /// The scope to the left of the position. Defaults to `--scope`.
        #[arg(long)]
        left: Option<String>,
    },
}

/// Where the selector comes from.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Input {
    /// The selector text.
    #[arg(short, long)]
    pub expr: Option<String>,

    /// A path to a file containing the selector.
    pub path: Option<PathBuf>,
}

pub fn parse() -> Args {
    clap::Parser::parse()
}
