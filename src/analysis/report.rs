// src/analysis/report.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::AnalysisError;

/// Tone sent with every request. Not user-configurable.
pub const TONE: &str = "professional";

/// Body of `POST /generate/result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub context: String,
    pub prompt: String,
    pub tone: String,
}

impl AnalysisRequest {
    pub fn new(context: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            prompt: prompt.into(),
            tone: TONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAnalysis {
    #[serde(default)]
    pub thought: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub user_context: String,
    pub user_prompt: String,
    pub final_report: String,
}

impl Report {
    /// Leading `max_chars` characters of the case context, with `...`
    /// appended when anything was cut.
    pub fn summary(&self, max_chars: usize) -> String {
        match self.user_context.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &self.user_context[..idx]),
            None => self.user_context.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResponsePayload {
    thoughts: Map<String, Value>,
    user_context: String,
    user_prompt: String,
    final_report: String,
}

/// A fully validated service response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResponse {
    /// Entries of the `thoughts` object in document order.
    pub thoughts: Vec<(String, AgentAnalysis)>,
    pub report: Report,
}

impl AnalysisResponse {
    pub fn from_json(body: &str) -> Result<Self, AnalysisError> {
        let payload: ResponsePayload =
            serde_json::from_str(body).map_err(|e| AnalysisError::malformed(e.to_string()))?;

        let thoughts = payload
            .thoughts
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value::<AgentAnalysis>(value)
                    .map(|analysis| (key.clone(), analysis))
                    .map_err(|e| AnalysisError::malformed(format!("thought `{}`: {}", key, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            thoughts,
            report: Report {
                user_context: payload.user_context,
                user_prompt: payload.user_prompt,
                final_report: payload.final_report,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(thoughts: Value) -> String {
        json!({
            "thoughts": thoughts,
            "user_context": "Dispute over delayed shipment",
            "user_prompt": "Assess breach claim strength",
            "final_report": "Proceed to arbitration."
        })
        .to_string()
    }

    #[test]
    fn request_always_uses_professional_tone() {
        let request = AnalysisRequest::new("ctx", "q");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"context": "ctx", "prompt": "q", "tone": "professional"}));
    }

    #[test]
    fn thoughts_keep_document_order() {
        let raw = r#"{
            "thoughts": {
                "zeta": {"thought": "t1", "output": "o1"},
                "alpha": {"thought": "t2", "output": "o2"},
                "mid": {"thought": "t3", "output": "o3"}
            },
            "user_context": "c", "user_prompt": "p", "final_report": "r"
        }"#;
        let response = AnalysisResponse::from_json(raw).unwrap();
        let keys: Vec<_> = response.thoughts.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(response.thoughts[1].1.output, "o2");
        assert_eq!(response.report.final_report, "r");
    }

    #[test]
    fn missing_thought_text_defaults_to_empty() {
        let response =
            AnalysisResponse::from_json(&body(json!({"concluder": {"output": "**Strong**"}})))
                .unwrap();
        assert_eq!(response.thoughts[0].1.thought, "");
        assert_eq!(response.thoughts[0].1.output, "**Strong**");
    }

    #[test]
    fn missing_top_level_field_is_malformed() {
        let raw = json!({"thoughts": {}, "user_context": "c", "user_prompt": "p"}).to_string();
        match AnalysisResponse::from_json(&raw) {
            Err(AnalysisError::MalformedResponse(msg)) => assert!(msg.contains("final_report")),
            other => panic!("expected malformed response, got {:?}", other),
        }
    }

    #[test]
    fn entry_without_output_is_malformed() {
        let err = AnalysisResponse::from_json(&body(json!({"1": {"thought": "only"}}))).unwrap_err();
        match err {
            AnalysisError::MalformedResponse(msg) => {
                assert!(msg.contains("`1`"));
                assert!(msg.contains("output"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn non_object_thoughts_and_garbage_are_malformed() {
        assert!(matches!(
            AnalysisResponse::from_json(&body(json!(["a", "b"]))),
            Err(AnalysisError::MalformedResponse(_))
        ));
        assert!(matches!(
            AnalysisResponse::from_json("<html>Internal Server Error</html>"),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }

    #[test]
    fn summary_truncates_on_char_boundary() {
        let report = Report {
            user_context: "é".repeat(250),
            user_prompt: String::new(),
            final_report: String::new(),
        };
        let summary = report.summary(200);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), 203);

        let short = Report {
            user_context: "Short context".into(),
            ..report
        };
        assert_eq!(short.summary(200), "Short context");
    }
}
