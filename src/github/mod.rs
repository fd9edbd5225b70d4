// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Submodules:
// - repo:   parsing "owner/repo" strings and github.com URLs into a RepoRef
// - fetch:  recursive tree walking through the contents API
// - filter: re-checking discovered paths so only directories remain
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organizing related functionality
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod fetch;
mod filter;
mod repo;

// Re-export public items from submodules
// This lets callers write `github::fetch_repo_paths()` instead of
// `github::fetch::fetch_repo_paths()`
pub use fetch::{fetch_repo_paths, EntryKind, PathEntry};
pub use filter::filter_dirs;
pub use repo::RepoRef;

// Shared test helper: a minimal HTTP/1.1 listener serving canned JSON
// responses keyed by request path. Keeps the fetch and filter tests fully
// off the network and deterministic.
#[cfg(test)]
pub(crate) mod testutil {
    use std::collections::HashMap;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Request path -> (status code, response body).
    pub type Routes = HashMap<String, (u16, String)>;

    /// Convenience constructor so tests can list routes as tuples.
    pub fn routes(entries: Vec<(&str, u16, &str)>) -> Routes {
        entries
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body.to_string())))
            .collect()
    }

    // Binds an ephemeral 127.0.0.1 port and serves `routes` until the test
    // runtime shuts down. Unknown paths answer 404.
    //
    // Returns: the server's base URL, e.g. "http://127.0.0.1:49152"
    pub async fn spawn_api(routes: Routes) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    // A GET request fits in one read; we only need the
                    // request line anyway
                    let mut buf = vec![0u8; 8192];
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).into_owned();

                    // Request line looks like "GET /path HTTP/1.1"
                    let path = request
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or("/")
                        .to_string();

                    let (status, body) = routes
                        .get(&path)
                        .cloned()
                        .unwrap_or((404, r#"{"message":"Not Found"}"#.to_string()));

                    let reason = match status {
                        200 => "OK",
                        403 => "Forbidden",
                        404 => "Not Found",
                        _ => "Error",
                    };

                    let response = format!(
                        "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        status,
                        reason,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }
}
