//! The read endpoint: serve files confined to the data directory

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Query, State};
use serde::Deserialize;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct ReadParams {
    /// Path to the file, absolute or relative to the data directory
    pub path: String,
}

/// GET /read?path=... - return the UTF-8 content of a file
///
/// The resolved path must stay inside the configured data directory;
/// anything else is rejected before touching the filesystem.
pub async fn read_file(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReadParams>,
) -> Result<String, ApiError> {
    let resolved = resolve_under(&state.config.data_dir, &params.path)?;

    match tokio::fs::read_to_string(&resolved).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ApiError::not_found("file not found"))
        }
        Err(e) => Err(ApiError::internal(format!(
            "reading {}: {}",
            resolved.display(),
            e
        ))),
    }
}

/// Resolve a requested path and enforce the data-directory boundary.
fn resolve_under(data_dir: &Path, requested: &str) -> Result<PathBuf, ApiError> {
    let requested_path = Path::new(requested);
    let candidate = if requested_path.is_absolute() {
        requested_path.to_path_buf()
    } else {
        data_dir.join(requested_path)
    };

    let normalized = normalize(&candidate);
    if !normalized.starts_with(normalize(data_dir)) {
        warn!(path = %requested, "rejected read outside data directory");
        return Err(ApiError::validation("access denied outside data directory"));
    }

    Ok(normalized)
}

/// Lexically normalize a path, resolving `.` and `..` components without
/// touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
