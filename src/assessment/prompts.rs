pub fn evaluation_prompt(submission_text: &str) -> String {
    format!(
        r#"Evaluate this academic submission and return JSON:

{{
    "total_score": number,
    "clarity": number,
    "technical_depth": number,
    "originality": number,
    "feedback": "detailed explanation"
}}

Submission:
{submission_text}
"#
    )
}

pub fn viva_prompt(submission_text: &str) -> String {
    format!(
        r#"Generate 3 deep conceptual viva questions for:

{submission_text}

Return JSON:
{{
    "questions": ["q1", "q2", "q3"]
}}
"#
    )
}
