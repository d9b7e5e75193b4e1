use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored submission and whatever the model has produced for it so far.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: String,
    pub text: String,
    pub evaluation: Option<Evaluation>,
    pub viva_questions: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            evaluation: None,
            viva_questions: None,
            created_at: Utc::now(),
        }
    }

    pub fn report(&self) -> SubmissionReport {
        SubmissionReport {
            text: self.text.clone(),
            evaluation: self.evaluation.clone(),
            viva_questions: self.viva_questions.clone(),
        }
    }
}

/// Scores the model assigns to a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub total_score: f64,
    pub clarity: f64,
    pub technical_depth: f64,
    pub originality: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VivaQuestions {
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReport {
    pub text: String,
    pub evaluation: Option<Evaluation>,
    pub viva_questions: Option<Vec<String>>,
}
