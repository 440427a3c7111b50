//! Wire types for the interview feedback report payload.
//!
//! Field names are camelCase to match what the dashboard posts. Every field
//! defaults, so partial payloads still render a (sparser) report rather than
//! failing deserialization.

use serde::{Deserialize, Serialize};

/// The JSON document posted to `/api/generate-pdf`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportPayload {
    /// Display date for the report header. Falls back to the render date.
    pub report_date: Option<String>,
    /// Caller-supplied identifier. Falls back to a generated UUID.
    pub report_id: Option<String>,
    pub all_question_data: Vec<QuestionRecord>,
    /// Overall interview feedback text.
    pub feedback: Option<String>,
    pub resume_analysis: Option<ResumeAnalysis>,
}

/// One question/answer exchange from the interview session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    /// Per-question score on a 0–10 scale, when the grader produced one.
    pub score: Option<f64>,
    pub feedback: Option<String>,
}

/// Result of the resume-analysis step, when the session included one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub score: Option<f64>,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload_deserializes() {
        let json = serde_json::json!({
            "reportDate": "12 Aug 2026",
            "reportId": "rpt-42",
            "allQuestionData": [
                {
                    "question": "Tell me about yourself",
                    "answer": "I am a backend engineer...",
                    "score": 7.5,
                    "feedback": "Good structure, add more metrics."
                }
            ],
            "feedback": "Strong fundamentals overall.",
            "resumeAnalysis": {
                "score": 8.0,
                "summary": "Well-organized resume.",
                "strengths": ["Clear impact statements"],
                "improvements": ["Quantify outcomes"]
            }
        });
        let payload: ReportPayload = serde_json::from_value(json).unwrap();
        assert_eq!(payload.report_id.as_deref(), Some("rpt-42"));
        assert_eq!(payload.all_question_data.len(), 1);
        assert_eq!(payload.all_question_data[0].score, Some(7.5));
        let resume = payload.resume_analysis.unwrap();
        assert_eq!(resume.strengths.len(), 1);
    }

    #[test]
    fn test_empty_object_deserializes_with_defaults() {
        let payload: ReportPayload = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(payload.report_date.is_none());
        assert!(payload.all_question_data.is_empty());
        assert!(payload.resume_analysis.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = serde_json::json!({
            "feedback": "ok",
            "somethingTheDashboardAddedLater": {"nested": true}
        });
        let payload: ReportPayload = serde_json::from_value(json).unwrap();
        assert_eq!(payload.feedback.as_deref(), Some("ok"));
    }
}
