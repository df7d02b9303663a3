use serde::{Deserialize, Serialize};

/// The four pieces of a collected item the analyzer prompt embeds.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub subreddit: &'a str,
    pub comments: &'a str,
}

/// The model's analysis, accepted verbatim.
///
/// The prompt requests six fields (`product_name`, `tagline`,
/// `viability_score`, `core_pain_point`, `solution`, `monetization`), but
/// the backend output is unconstrained generative text: schema adherence is
/// requested, not enforced. The raw JSON object is kept as-is and the
/// accessors return `None` on schema drift so consumers degrade instead of
/// failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Analysis(serde_json::Value);

impl Analysis {
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn product_name(&self) -> Option<&str> {
        self.field_str("product_name")
    }

    #[must_use]
    pub fn tagline(&self) -> Option<&str> {
        self.field_str("tagline")
    }

    /// Intended range 0-100, but not validated anywhere.
    #[must_use]
    pub fn viability_score(&self) -> Option<i64> {
        self.0.get("viability_score").and_then(|v| v.as_i64())
    }

    #[must_use]
    pub fn core_pain_point(&self) -> Option<&str> {
        self.field_str("core_pain_point")
    }

    #[must_use]
    pub fn solution(&self) -> Option<&str> {
        self.field_str("solution")
    }

    #[must_use]
    pub fn monetization(&self) -> Option<&str> {
        self.field_str("monetization")
    }

    #[must_use]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    fn field_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }
}

/// Single-turn chat-completions request, JSON output mode.
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    pub(crate) model: String,
    pub(crate) temperature: f32,
    pub(crate) response_format: ResponseFormat,
    pub(crate) messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub(crate) role: &'static str,
    pub(crate) content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub(crate) choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub(crate) message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    #[serde(default)]
    pub(crate) content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_read_the_requested_fields() {
        let analysis = Analysis::from_value(serde_json::json!({
            "product_name": "CommuteAI",
            "tagline": "Your commute, reclaimed",
            "viability_score": 72,
            "core_pain_point": "hours lost in traffic",
            "solution": "route-learning assistant",
            "monetization": "subscription"
        }));
        assert_eq!(analysis.product_name(), Some("CommuteAI"));
        assert_eq!(analysis.viability_score(), Some(72));
        assert_eq!(analysis.monetization(), Some("subscription"));
    }

    #[test]
    fn schema_drift_yields_none_not_panic() {
        let analysis = Analysis::from_value(serde_json::json!({
            "productName": "WrongCase",
            "viability_score": "seventy"
        }));
        assert_eq!(analysis.product_name(), None);
        assert_eq!(analysis.viability_score(), None);
    }

    #[test]
    fn serializes_transparently() {
        let analysis = Analysis::from_value(serde_json::json!({ "anything": true }));
        let json = serde_json::to_string(&analysis).expect("serialize");
        assert_eq!(json, r#"{"anything":true}"#);
    }
}
