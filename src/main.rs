// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Resolve the GitHub token (--token first, GITHUB_TOKEN env var as fallback)
// 3. Walk the repository tree and collect every path
// 4. Optionally keep only the paths confirmed as directories
// 5. Write the wordlist file and print a summary
// 6. Exit with proper code (0 = wordlist written, 1 = error)
//
// Rust concepts used:
// - async/await: Because the tree walk is a long chain of network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Option<T>: The token may or may not be present
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod error;    // src/error.rs - typed failure modes
mod github;   // src/github/ - repo parsing + tree walking
mod output;   // src/output/ - wordlist writing

// Import items we need from our modules
use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method
use github::{EntryKind, RepoRef};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Every failure surfaces as a single line; nothing has been
            // written to the output file at this point
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = wordlist written
//   Err = anything failed; main prints it and exits 1
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // --token wins; the GITHUB_TOKEN environment variable is the fallback.
    // Resolved once here and passed down explicitly - nothing below main
    // reads the environment.
    let token = cli.token.clone().or_else(|| std::env::var("GITHUB_TOKEN").ok());

    let repo = RepoRef::parse(&cli.input)?;

    println!("🔍 Scanning repository: {}", repo);

    // Walk the whole tree. Any API failure in here aborts the run before
    // the output file is even opened.
    let entries = github::fetch_repo_paths(&repo, token.as_deref()).await?;

    let dir_count = entries.iter().filter(|e| e.kind == EntryKind::Dir).count();
    println!(
        "📄 Discovered {} path(s) ({} directories)",
        entries.len(),
        dir_count
    );

    let mut paths: Vec<String> = entries.into_iter().map(|e| e.path).collect();

    if cli.dirs_only {
        println!("📂 Confirming directories ({} paths to re-check)...", paths.len());
        paths = github::filter_dirs(paths, &repo, token.as_deref()).await?;
        println!("   {} confirmed as directories", paths.len());
    }

    let count = output::write_wordlist(&paths, &cli.output)?;

    println!(
        "✅ Wordlist written to {} ({} entries)",
        cli.output.display(),
        count
    );

    Ok(0)
}
