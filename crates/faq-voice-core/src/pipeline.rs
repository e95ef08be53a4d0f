use tracing::debug;

use crate::composer::generate_answer;
use crate::error::CoreError;
use crate::matcher::find_relevant;
use crate::model::{BrandVoice, GeneratedAnswer, ScoredFaqItem};
use crate::parser::parse_faq;

/// Parse, rank and compose in one pass.
pub fn answer_question(faq_text: &str, voice: &BrandVoice, question: &str) -> GeneratedAnswer {
    let ranked = rank_faq(faq_text, question);
    generate_answer(&ranked, voice, question)
}

/// Like [`answer_question`], taking the brand voice as raw JSON.
pub fn answer_question_json(
    faq_text: &str,
    voice: serde_json::Value,
    question: &str,
) -> Result<GeneratedAnswer, CoreError> {
    let voice = BrandVoice::from_value(voice)?;
    Ok(answer_question(faq_text, &voice, question))
}

pub fn rank_faq(faq_text: &str, question: &str) -> Vec<ScoredFaqItem> {
    let items = parse_faq(faq_text);
    let ranked = find_relevant(&items, question);
    debug!(parsed = items.len(), relevant = ranked.len(), "faq ranked");
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::FALLBACK_ANSWER;
    use crate::seed::{SEED_FAQ, SEED_QUESTION};
    use serde_json::json;

    #[test]
    fn json_voice_errors_propagate() {
        let err = answer_question_json(SEED_FAQ, json!({ "style_rules": 3 }), SEED_QUESTION)
            .expect_err("style_rules must be a list");
        assert!(err.to_string().starts_with("invalid brand voice"));
    }

    #[test]
    fn unmatched_question_falls_back() {
        let result = answer_question(SEED_FAQ, &BrandVoice::default(), "Pets allowed?");
        assert_eq!(result.answer, FALLBACK_ANSWER);
        assert!(result.sources.is_empty());
    }
}
