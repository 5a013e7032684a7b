use std::path::{Path, PathBuf};

use crate::{datastore::ResultStore, StoreError, SummaryResult};

/// Stores each [`SummaryResult`] as `summary_{video_id}.json` under a single
/// output directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    output_dir: PathBuf,
}

impl JsonFileStore {
    pub const DEFAULT_OUTPUT_DIR: &str = "summaries";

    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, video_id: &str) -> PathBuf {
        self.output_dir.join(format!("summary_{video_id}.json"))
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT_DIR)
    }
}

impl ResultStore for JsonFileStore {
    #[tracing::instrument(skip_all, fields(video_id = %result.video_id))]
    async fn save(&self, result: &SummaryResult) -> Result<PathBuf, StoreError> {
        let target = self.path_for(&result.video_id);
        let body = serde_json::to_vec_pretty(result)?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| StoreError::Write {
                path: self.output_dir.clone(),
                source,
            })?;

        // readers must never see a half written record
        let staging = target.with_extension("json.tmp");
        tokio::fs::write(&staging, &body)
            .await
            .map_err(|source| StoreError::Write {
                path: staging.clone(),
                source,
            })?;

        if let Err(source) = tokio::fs::rename(&staging, &target).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(StoreError::Write {
                path: target,
                source,
            });
        }

        tracing::info!(path = %target.display(), "Summary saved");
        Ok(target)
    }

    #[tracing::instrument(skip(self))]
    async fn load(&self, video_id: &str) -> Result<Option<SummaryResult>, StoreError> {
        let path = self.path_for(video_id);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}
