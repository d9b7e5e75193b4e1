mod memory;

pub use memory::InMemoryStore;

use crate::{Result, submission::Submission};
use async_trait::async_trait;

/// In-place edit applied to a stored submission.
pub type SubmissionEdit = Box<dyn FnOnce(&mut Submission) + Send>;

/// Keyed storage for submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Submission>>;

    /// Inserts or replaces the record stored under `submission.id`.
    async fn put(&self, submission: Submission) -> Result<()>;

    async fn exists(&self, id: &str) -> Result<bool>;

    /// Applies `edit` to the current record under `id` and returns the result.
    /// Fields the edit does not touch keep whatever value they hold at the
    /// time of the call. Fails with `NotFound` when no record exists.
    async fn update(&self, id: &str, edit: SubmissionEdit) -> Result<Submission>;
}
