use std::{future::Future, path::PathBuf};

use crate::{StoreError, SummaryResult};

pub mod json_file;

pub trait ResultStore {
    /// Persists `result`, replacing any earlier record for the same video.
    /// Returns the location the record was written to.
    fn save(
        &self,
        result: &SummaryResult,
    ) -> impl Future<Output = Result<PathBuf, StoreError>> + Send;

    fn load(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Option<SummaryResult>, StoreError>> + Send;
}

impl<T: ResultStore + Send + Sync> ResultStore for &T {
    async fn save(&self, result: &SummaryResult) -> Result<PathBuf, StoreError> {
        (**self).save(result).await
    }

    async fn load(&self, video_id: &str) -> Result<Option<SummaryResult>, StoreError> {
        (**self).load(video_id).await
    }
}
