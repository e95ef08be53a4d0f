use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single question/answer pair parsed from FAQ text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Slug derived from the question, e.g. "what-are". Not guaranteed unique.
    pub id: String,
    /// Text following the `Q:` marker, trimmed.
    pub question: String,
    /// Text following the last `A:` marker before the next question, trimmed.
    pub answer: String,
}

/// A FAQ item annotated with its keyword-category relevance to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredFaqItem {
    #[serde(flatten)]
    pub item: FaqItem,
    /// Number of (category, keyword) pairs found in both the question and the item.
    pub relevance_score: u32,
    /// Category names that contributed at least one match, in order of first match.
    pub matched_keywords: Vec<String>,
}

/// Brand voice configuration. Only `style_rules` and `signoff` are interpreted;
/// any other field (such as `tone`) is accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandVoice {
    #[serde(default)]
    pub style_rules: Option<Vec<String>>,
    #[serde(default)]
    pub signoff: Option<String>,
}

impl BrandVoice {
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|e| CoreError::BrandVoice(e.to_string()))
    }

    pub fn style_rules(&self) -> &[String] {
        self.style_rules.as_deref().unwrap_or_default()
    }

    /// The signoff to append, if any. An empty signoff counts as absent.
    pub fn signoff(&self) -> Option<&str> {
        self.signoff.as_deref().filter(|s| !s.is_empty())
    }
}

/// Final answer plus the ids of the FAQ items it was built from, in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAnswer {
    pub answer: String,
    pub sources: Vec<String>,
}
