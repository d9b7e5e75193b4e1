use super::{SubmissionEdit, SubmissionStore};
use crate::{Error, Result, submission::Submission};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Process-local store. Records are never evicted.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, Submission>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for InMemoryStore {
    async fn get(&self, id: &str) -> Result<Option<Submission>> {
        let records = self
            .records
            .read()
            .map_err(|e| Error::internal(format!("Lock poisoned: {e}")))?;
        Ok(records.get(id).cloned())
    }

    async fn put(&self, submission: Submission) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| Error::internal(format!("Lock poisoned: {e}")))?;
        debug!("Storing submission {}", submission.id);
        records.insert(submission.id.clone(), submission);
        Ok(())
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        let records = self
            .records
            .read()
            .map_err(|e| Error::internal(format!("Lock poisoned: {e}")))?;
        Ok(records.contains_key(id))
    }

    async fn update(&self, id: &str, edit: SubmissionEdit) -> Result<Submission> {
        let mut records = self
            .records
            .write()
            .map_err(|e| Error::internal(format!("Lock poisoned: {e}")))?;
        let submission = records.get_mut(id).ok_or_else(|| Error::not_found(id))?;
        edit(submission);
        debug!("Updated submission {}", id);
        Ok(submission.clone())
    }
}
