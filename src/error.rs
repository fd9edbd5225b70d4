// src/error.rs
// =============================================================================
// Typed failure modes for the wordlist builder.
//
// The library modules (github/, output/) return this enum so callers can
// tell the failure modes apart:
// - InvalidFormat: the repo reference string couldn't be parsed
// - RateLimited:   GitHub answered 403 on the listing endpoint
// - ApiError:      any other non-200 from the listing endpoint
// - Http:          the request itself failed (timeout, DNS, TLS, ...)
// - Io:            the output file couldn't be written
//
// main() only ever prints these, so the Display strings double as the
// user-facing error messages.
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error + Display
// - #[from]: automatic conversion so the ? operator accepts foreign errors
// =============================================================================

use thiserror::Error;

// Crate-local result alias used throughout the library modules
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input was neither a github.com URL nor an "owner/repo" pair.
    #[error("invalid GitHub repo format: '{0}' (expected owner/repo or a github.com URL)")]
    InvalidFormat(String),

    /// The listing endpoint answered 403, which GitHub uses for rate limits.
    #[error("GitHub API error: 403 (Forbidden). Likely rate limited. Try with a token.")]
    RateLimited,

    /// Any other non-200 status from the listing endpoint.
    #[error("GitHub API error: {status} for {url}")]
    ApiError { status: u16, url: String },

    /// The HTTP request itself failed before a status code came back.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The output file could not be created or written.
    #[error("could not write wordlist: {0}")]
    Io(#[from] std::io::Error),
}
