use super::prompts;
use crate::{
    Error, Result,
    llm::ModelClient,
    parser,
    scoring::{self, VivaAnalysis},
    store::SubmissionStore,
    submission::{Evaluation, Submission, SubmissionReport, VivaQuestions},
};
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Runs submissions through the model and records the results.
pub struct AssessmentService {
    store: Arc<dyn SubmissionStore>,
    model: Arc<dyn ModelClient>,
}

impl AssessmentService {
    pub fn new(store: Arc<dyn SubmissionStore>, model: Arc<dyn ModelClient>) -> Self {
        Self { store, model }
    }

    pub async fn upload(&self, text: String) -> Result<Submission> {
        let mut id = Uuid::new_v4().to_string();
        while self.store.exists(&id).await? {
            id = Uuid::new_v4().to_string();
        }

        let submission = Submission::new(id, text);
        self.store.put(submission.clone()).await?;

        info!(
            "Uploaded submission {} ({} bytes)",
            submission.id,
            submission.text.len()
        );
        Ok(submission)
    }

    pub async fn evaluate(&self, submission_id: &str) -> Result<Evaluation> {
        let submission = self.fetch(submission_id).await?;
        info!("Evaluating submission {}", submission_id);

        let prompt = prompts::evaluation_prompt(&submission.text);
        let evaluation = self
            .ask_model(&prompt)
            .await
            .and_then(Evaluation::from_model_output)
            .inspect_err(|e| error!("Evaluation of {} failed: {}", submission_id, e))?;

        let stored = evaluation.clone();
        self.store
            .update(
                submission_id,
                Box::new(move |s: &mut Submission| s.evaluation = Some(stored)),
            )
            .await?;

        debug!(
            "Stored evaluation for {} (total_score={})",
            submission_id, evaluation.total_score
        );
        Ok(evaluation)
    }

    pub async fn generate_viva(&self, submission_id: &str) -> Result<VivaQuestions> {
        let submission = self.fetch(submission_id).await?;
        info!("Generating viva questions for submission {}", submission_id);

        let prompt = prompts::viva_prompt(&submission.text);
        let viva = self
            .ask_model(&prompt)
            .await
            .and_then(VivaQuestions::from_model_output)
            .inspect_err(|e| error!("Viva generation for {} failed: {}", submission_id, e))?;

        let stored = viva.questions.clone();
        self.store
            .update(
                submission_id,
                Box::new(move |s: &mut Submission| s.viva_questions = Some(stored)),
            )
            .await?;

        debug!(
            "Stored {} viva questions for {}",
            viva.questions.len(),
            submission_id
        );
        Ok(viva)
    }

    /// Scores an answer without touching storage or the model.
    pub fn analyze_answer(
        &self,
        submission_id: Option<&str>,
        answer: &str,
        attention_score: f64,
        risk_score: f64,
    ) -> VivaAnalysis {
        if let Some(id) = submission_id {
            debug!("Analyzing viva answer for submission {}", id);
        }
        scoring::analyze_answer(answer, attention_score, risk_score)
    }

    pub async fn report(&self, submission_id: &str) -> Result<SubmissionReport> {
        let submission = self.fetch(submission_id).await?;
        debug!(
            "Reporting submission {} created at {}",
            submission_id, submission.created_at
        );
        Ok(submission.report())
    }

    async fn fetch(&self, submission_id: &str) -> Result<Submission> {
        self.store
            .get(submission_id)
            .await?
            .ok_or_else(|| Error::not_found(submission_id))
    }

    async fn ask_model(&self, prompt: &str) -> Result<serde_json::Value> {
        let output = self.model.generate(prompt).await?;
        parser::extract_json(&output)
    }
}
