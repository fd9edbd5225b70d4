// src/github/fetch.rs
// =============================================================================
// This module walks a repository tree through the GitHub contents API.
//
// Strategy:
// - GET /repos/{owner}/{repo}/contents/{path} lists one directory level
// - Record every item in the order GitHub returns it
// - Recurse into each directory before moving on to the next sibling
//
// That makes the final listing a pre-order depth-first traversal: a
// directory's own entry appears first, then its whole subtree, then the
// next sibling at the same level.
//
// Authentication is optional. Without a token GitHub allows ~60 requests
// per hour, which a repository of any size burns through quickly, so a 403
// gets its own error variant that points the user at --token.
//
// Rust concepts:
// - BoxFuture: async functions cannot call themselves without boxing
// - serde derive: mapping JSON response items onto a struct
// - Lifetimes: borrowing the client/repo/token through the recursion
// =============================================================================

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::RepoRef;
use crate::error::{Error, Result};

/// Base URL of the real API; tests substitute a local listener.
pub(crate) const GITHUB_API: &str = "https://api.github.com";

/// What a discovered path is. GitHub also reports "symlink" and
/// "submodule" items; those are recorded as plain files and not recursed
/// into, same as any other non-directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

// One item of a contents listing, as GitHub serializes it.
// Responses carry many more fields (sha, size, download_url, ...) - we
// only deserialize what the walk needs.
#[derive(Debug, Clone, Deserialize)]
struct ContentItem {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

/// A discovered repo-relative path plus whether it is a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub path: String,
    pub kind: EntryKind,
}

// Walks the entire repository tree and returns every path in it
//
// Parameters:
//   repo:  which repository to walk
//   token: optional personal access token
//
// Returns: Vec<PathEntry> in pre-order depth-first order, or the first
// error the API produced. No partial results, no retries: a failure at any
// recursion depth propagates unchanged to the caller.
pub async fn fetch_repo_paths(repo: &RepoRef, token: Option<&str>) -> Result<Vec<PathEntry>> {
    let client = api_client()?;
    walk_tree(&client, GITHUB_API, repo, token, "").await
}

// Builds the HTTP client used for every API request
//
// GitHub rejects requests that carry no User-Agent, so we always send the
// crate name and version.
pub(crate) fn api_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}

// Recursively lists `path` and everything below it
//
// An async fn cannot call itself directly (its future type would be
// infinitely sized), so this is a regular fn returning a BoxFuture and
// each recursion level boxes its own future.
pub(crate) fn walk_tree<'a>(
    client: &'a Client,
    api_root: &'a str,
    repo: &'a RepoRef,
    token: Option<&'a str>,
    path: &'a str,
) -> BoxFuture<'a, Result<Vec<PathEntry>>> {
    Box::pin(async move {
        let items = list_dir(client, api_root, repo, token, path).await?;

        let mut entries = Vec::new();
        for item in items {
            let kind = if item.kind == "dir" {
                EntryKind::Dir
            } else {
                EntryKind::File
            };

            entries.push(PathEntry {
                path: item.path.clone(),
                kind,
            });

            if kind == EntryKind::Dir {
                // Recursive call for subdirectories: the subtree lands
                // right behind its parent, before the next sibling
                let subtree = walk_tree(client, api_root, repo, token, &item.path).await?;
                entries.extend(subtree);
            }
        }

        Ok(entries)
    })
}

// Fetches one directory level from the contents endpoint
//
// Status handling:
//   403      -> Error::RateLimited (GitHub signals rate limits this way)
//   non-200  -> Error::ApiError { status, url }
//   200      -> JSON array of items, one per direct child
async fn list_dir(
    client: &Client,
    api_root: &str,
    repo: &RepoRef,
    token: Option<&str>,
    path: &str,
) -> Result<Vec<ContentItem>> {
    let url = format!(
        "{}/repos/{}/{}/contents/{}",
        api_root, repo.owner, repo.name, path
    );

    // Attach the authorization header only when a token was supplied
    let mut request = client.get(&url);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("token {}", token));
    }

    let response = request.send().await?;
    let status = response.status();

    if status == StatusCode::FORBIDDEN {
        return Err(Error::RateLimited);
    }
    if status != StatusCode::OK {
        return Err(Error::ApiError {
            status: status.as_u16(),
            url,
        });
    }

    let items = response.json::<Vec<ContentItem>>().await?;
    Ok(items)
}
