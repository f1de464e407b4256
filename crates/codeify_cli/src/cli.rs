//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};

/// AI code reviewer and fixer for the terminal
#[derive(Parser)]
#[command(name = "codeify", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Review a source file and print the model's assessment
    Review {
        /// File to review ("-" reads stdin)
        file: String,
        /// Language value (e.g. javascript, python); guessed from the file
        /// extension if omitted
        #[arg(short, long)]
        language: Option<String>,
        /// Model to use (default: gemini-2.5-flash, or CODEIFY_MODEL)
        #[arg(long)]
        model: Option<String>,
    },
    /// Fix a source file: apply the corrected code and print the explanation
    Fix {
        /// File to fix ("-" reads stdin and prints instead of writing)
        file: String,
        /// Language value (e.g. javascript, python); guessed from the file
        /// extension if omitted
        #[arg(short, long)]
        language: Option<String>,
        /// Print the corrected code instead of writing it back to the file
        #[arg(long)]
        no_apply: bool,
        /// Model to use (default: gemini-2.5-flash, or CODEIFY_MODEL)
        #[arg(long)]
        model: Option<String>,
    },
    /// List supported languages
    Languages,
}
