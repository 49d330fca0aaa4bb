//! Upload staging area
//!
//! Uploaded images are written to a staging directory under a unique name,
//! analysed from disk, then removed. Anything left behind (crashed requests)
//! is swept by `cleanup_expired` once it is older than the retention window.

#[cfg(feature = "api")]
use std::path::{Path, PathBuf};
#[cfg(feature = "api")]
use std::time::{Duration, SystemTime};

#[cfg(feature = "api")]
use thiserror::Error;

pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Files the sweeper never touches
pub const KEEP_FILES: &[&str] = &[".gitkeep"];

/// True if `filename` has an allowed image extension
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Keeps ASCII alphanumerics, `.`, `-` and `_`; whitespace becomes `_`;
/// path separators and everything else are dropped; leading dots and
/// underscores are stripped.
pub fn secure_filename(filename: &str) -> String {
    // Only the last path component is meaningful
    let base = filename.rsplit(['/', '\\']).next().unwrap_or("");

    let cleaned: String = base
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let trimmed = cleaned.trim_start_matches(['.', '_']);
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(feature = "api")]
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Invalid file type: {0}")]
    InvalidType(String),

    #[error("File too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("Upload storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file written to the staging area
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct StagedUpload {
    pub path: PathBuf,
    pub original_name: String,
    pub size: usize,
}

#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_bytes: usize,
    retention: Duration,
}

#[cfg(feature = "api")]
impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize, retention: Duration) -> Self {
        Self {
            dir: dir.into(),
            max_bytes,
            retention,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Create the staging directory if missing
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Validate and write an upload under a unique name
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StagedUpload, UploadError> {
        if !allowed_file(original_name) {
            return Err(UploadError::InvalidType(original_name.to_string()));
        }
        if bytes.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }

        self.ensure_dir().await?;

        let unique = format!("{}_{}", uuid::Uuid::new_v4(), secure_filename(original_name));
        let path = self.dir.join(unique);
        tokio::fs::write(&path, bytes).await?;

        tracing::info!("Image saved: {}", path.display());

        Ok(StagedUpload {
            path,
            original_name: original_name.to_string(),
            size: bytes.len(),
        })
    }

    /// Delete a staged file. Failures are logged, not returned.
    pub async fn remove(&self, upload: &StagedUpload) {
        if let Err(e) = tokio::fs::remove_file(&upload.path).await {
            tracing::error!("Error removing uploaded file {}: {}", upload.path.display(), e);
        }
    }

    /// Remove regular files older than the retention window. Returns how many
    /// were deleted; errors are logged and skipped.
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Error cleaning up uploads in {}: {}", self.dir.display(), e);
                return 0;
            }
        };

        let now = SystemTime::now();
        let mut removed = 0;

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("Error reading upload directory: {}", e);
                    break;
                }
            };

            let name = entry.file_name();
            if KEEP_FILES.iter().any(|keep| name == *keep) {
                continue;
            }

            let metadata = match entry.metadata().await {
                Ok(m) if m.is_file() => m,
                _ => continue,
            };

            let age = metadata
                .modified()
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .unwrap_or_default();

            if age > self.retention {
                match tokio::fs::remove_file(entry.path()).await {
                    Ok(()) => removed += 1,
                    Err(e) => tracing::warn!("Error removing expired upload {:?}: {}", name, e),
                }
            }
        }

        if removed > 0 {
            tracing::info!("Removed {} expired uploads", removed);
        }
        removed
    }
}
