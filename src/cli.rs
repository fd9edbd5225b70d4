// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There are no subcommands here: the tool does exactly one thing, so the
// whole interface is a single flat struct of flags.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - PathBuf: An owned filesystem path
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-wordlist",
    version = "0.1.0",
    about = "Build a fuzzing wordlist from a GitHub repository's file tree",
    long_about = "repo-wordlist walks a repository through the GitHub contents API and \
                  writes every discovered path to a text file, one /-prefixed path per \
                  line - ready to feed into content-discovery and fuzzing tools."
)]
pub struct Cli {
    /// GitHub repository (owner/repo or URL)
    ///
    /// #[arg(short, long)] creates both -i and --input from the field name
    #[arg(short, long)]
    pub input: String,

    /// Output text file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Include only directories (re-checks every discovered path)
    ///
    /// Field name dirs_only becomes the --dirs-only flag
    #[arg(long)]
    pub dirs_only: bool,

    /// GitHub Personal Access Token (or set GITHUB_TOKEN env var)
    #[arg(long)]
    pub token: Option<String>,
}
