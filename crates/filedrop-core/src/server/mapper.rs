//! Request-path to filesystem mapping.

use anyhow::{ensure, Context, Result};
use std::path::{Path, PathBuf};

/// Maps URL request paths onto a local root directory.
///
/// `.` and `..` segments are resolved lexically before the path is appended
/// to the root, so a request can never address anything above the root.
/// Path bytes are used as sent; no percent-decoding happens here.
#[derive(Debug, Clone)]
pub struct RootMapper {
    root: PathBuf,
}

impl RootMapper {
    /// Creates a mapper over an existing, readable directory.
    pub fn new(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("root directory not accessible: {}", root.display()))?;
        ensure!(root.is_dir(), "root must be a directory: {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a request path (which must start with `/`) to a local path.
    /// `/` itself resolves to the root directory.
    pub fn resolve(&self, request_path: &str) -> Result<PathBuf> {
        ensure!(
            request_path.starts_with('/'),
            "request path must start with '/': {request_path}"
        );

        let mut segments: Vec<&str> = Vec::new();
        for segment in request_path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other),
            }
        }

        let mut mapped = self.root.clone();
        for segment in segments {
            mapped.push(segment);
        }
        Ok(mapped)
    }
}
