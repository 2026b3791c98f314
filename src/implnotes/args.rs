use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "implnotes", version)]
#[command(about = "Append entries to a markdown notes file and keep its index in sync", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Notes file to operate on
    #[arg(short, long, global = true, env = "IMPLNOTES_FILE")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a new entry and refresh the index
    #[command(alias = "add")]
    Append {
        /// Path to the raw markdown body (no "##" heading)
        #[arg(long)]
        entry_md: PathBuf,

        /// Entry title
        #[arg(long)]
        title: String,

        /// When a reader should consult this entry
        #[arg(long)]
        when_read: String,

        /// Comma separated keywords
        #[arg(long)]
        keywords: String,

        /// Print the resulting document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Recompute the line ranges stored in the index
    Reindex {
        /// Print the resulting document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List indexed entries and flag stale ranges
    #[command(alias = "ls")]
    List,
}
