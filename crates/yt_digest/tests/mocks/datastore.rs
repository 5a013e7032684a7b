use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};
use digest_store::{ResultStore, StoreError, SummaryResult};

#[derive(Clone, Default)]
pub struct MockResultStore {
    pub saved: Arc<Mutex<Vec<SummaryResult>>>,
    pub fail_with: Option<String>,
}

impl MockResultStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl ResultStore for MockResultStore {
    async fn save(&self, result: &SummaryResult) -> Result<PathBuf, StoreError> {
        let path = PathBuf::from(format!("/tmp/mock/summary_{}.json", result.video_id));
        if let Some(ref msg) = self.fail_with {
            return Err(StoreError::Write {
                path,
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, msg.clone()),
            });
        }
        self.saved.lock().unwrap().push(result.clone());
        Ok(path)
    }

    async fn load(&self, video_id: &str) -> Result<Option<SummaryResult>, StoreError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.video_id == video_id)
            .cloned())
    }
}
