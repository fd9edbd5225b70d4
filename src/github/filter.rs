// src/github/filter.rs
// =============================================================================
// This module implements --dirs-only: confirming which discovered paths
// are directories.
//
// Per-path check: ask the contents endpoint about that exact path and keep
// it only when the answer is 200 with a single JSON object whose "type"
// field is "dir". Anything else - a different shape, a non-200 status, a
// transport error - silently drops the path.
//
// Note the error policy is the opposite of the walker's: the walk aborts
// on the first API error, the filter swallows per-path failures and thins
// the output instead. A rate limit that starts mid-filter shrinks the
// wordlist rather than failing the run.
//
// Rust concepts:
// - Streams: .buffered(N) runs up to N checks at once, in input order
// - serde_json::Value: inspecting JSON whose shape isn't known up front
// =============================================================================

use futures::stream::{self, StreamExt};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::fetch::{api_client, GITHUB_API};
use super::RepoRef;
use crate::error::Result;

/// How many confirmation requests may be in flight at once.
const CONFIRM_CONCURRENCY: usize = 10;

// Keeps only the paths the API confirms as directories
//
// Parameters:
//   paths: every path the walk discovered, in output order
//   repo:  the repository they belong to
//   token: optional personal access token
//
// Returns: the surviving paths, still in their original order. This
// re-issues one request per discovered path; only building the HTTP
// client can fail.
pub async fn filter_dirs(
    paths: Vec<String>,
    repo: &RepoRef,
    token: Option<&str>,
) -> Result<Vec<String>> {
    let client = api_client()?;
    Ok(filter_dirs_at(&client, GITHUB_API, paths, repo, token).await)
}

// Inner worker, parameterized over the API root so tests can redirect it
pub(crate) async fn filter_dirs_at(
    client: &Client,
    api_root: &str,
    paths: Vec<String>,
    repo: &RepoRef,
    token: Option<&str>,
) -> Vec<String> {
    // One check per path. .buffered() caps the outstanding requests and
    // yields results in input order, so the wordlist keeps the walk's
    // ordering even though checks overlap.
    let checks = stream::iter(paths.into_iter().map(|path| {
        let client = client.clone();
        async move {
            let confirmed = is_dir(&client, api_root, repo, token, &path).await;
            (path, confirmed)
        }
    }))
    .buffered(CONFIRM_CONCURRENCY)
    .collect::<Vec<(String, bool)>>()
    .await;

    checks
        .into_iter()
        .filter(|(_, confirmed)| *confirmed)
        .map(|(path, _)| path)
        .collect()
}

// Checks a single path
//
// True only when the endpoint answers 200 with a single JSON object whose
// "type" is "dir". Every failure mode is just "not a directory".
async fn is_dir(
    client: &Client,
    api_root: &str,
    repo: &RepoRef,
    token: Option<&str>,
    path: &str,
) -> bool {
    let url = format!(
        "{}/repos/{}/{}/contents/{}",
        api_root, repo.owner, repo.name, path
    );

    let mut request = client.get(&url);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("token {}", token));
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(_) => return false,
    };

    if response.status() != StatusCode::OK {
        return false;
    }

    match response.json::<Value>().await {
        // A JSON array here would be a directory *listing*, not the single
        // object this check is defined over - arrays fall through to false
        Ok(Value::Object(body)) => body.get("type").and_then(Value::as_str) == Some("dir"),
        _ => false,
    }
}
