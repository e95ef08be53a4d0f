//! Brand voice rewriting: sentence shortening, jargon removal and signoff.
use std::sync::LazyLock;

use regex::Regex;

use crate::model::BrandVoice;

const SHORT_SENTENCES_RULE: &str = "short sentences";
const AVOID_JARGON_RULE: &str = "avoid jargon";

/// Jargon and its plain replacement, applied in this order.
pub const JARGON: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("facilitate", "help"),
    ("implement", "do"),
    ("optimize", "improve"),
];

static SENTENCE_BREAKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r",\s+and\s+", r",\s+but\s+", r";\s+"]
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
});

static DOUBLED_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+\.").expect("valid regex"));

static JARGON_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    JARGON
        .iter()
        .map(|(word, plain)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))).expect("valid regex");
            (re, *plain)
        })
        .collect()
});

/// Transformations a single style rule asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleEffects {
    pub short_sentences: bool,
    pub avoid_jargon: bool,
}

impl RuleEffects {
    /// Recognize a free-text rule. Rules that ask for neither effect are ignored.
    pub fn of(rule: &str) -> Self {
        let rule = rule.to_lowercase();
        Self {
            short_sentences: rule.contains(SHORT_SENTENCES_RULE),
            avoid_jargon: rule.contains(AVOID_JARGON_RULE),
        }
    }
}

/// Apply the brand voice to `text`.
///
/// Rules are visited front to back; within one rule, sentence shortening runs
/// before jargon removal. The signoff is appended last.
pub fn apply_brand_voice(text: &str, voice: &BrandVoice) -> String {
    let mut styled = text.to_string();

    for rule in voice.style_rules() {
        let effects = RuleEffects::of(rule);
        if effects.short_sentences {
            styled = shorten_sentences(&styled);
        }
        if effects.avoid_jargon {
            styled = remove_jargon(&styled);
        }
    }

    if let Some(signoff) = voice.signoff() {
        styled.push(' ');
        styled.push_str(signoff);
    }

    styled
}

/// Break compound sentences at ", and", ", but" and ";".
pub fn shorten_sentences(text: &str) -> String {
    let split = SENTENCE_BREAKS
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, ". ").into_owned());
    DOUBLED_PERIOD.replace_all(&split, ".").trim().to_string()
}

/// Replace jargon words, whole-word and case-insensitively.
pub fn remove_jargon(text: &str) -> String {
    JARGON_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, (re, plain)| re.replace_all(&acc, *plain).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(rules: &[&str], signoff: Option<&str>) -> BrandVoice {
        BrandVoice {
            style_rules: Some(rules.iter().map(|r| r.to_string()).collect()),
            signoff: signoff.map(str::to_string),
        }
    }

    #[test]
    fn shortens_compound_sentences() {
        assert_eq!(
            shorten_sentences("We prefer appointments, but walk-ins are welcome."),
            "We prefer appointments. walk-ins are welcome."
        );
        assert_eq!(
            shorten_sentences("Haircuts, coloring, styling, and keratin treatments."),
            "Haircuts, coloring, styling. keratin treatments."
        );
        assert_eq!(shorten_sentences("Call us;  we answer."), "Call us. we answer.");
    }

    #[test]
    fn collapses_doubled_periods() {
        assert_eq!(shorten_sentences("  Done. . Next.  "), "Done. Next.");
    }

    #[test]
    fn jargon_is_whole_word_and_case_insensitive() {
        assert_eq!(remove_jargon("We will Utilize this."), "We will use this.");
        assert_eq!(
            remove_jargon("We OPTIMIZE and facilitate; implementation stays."),
            "We improve and help; implementation stays."
        );
        assert_eq!(remove_jargon("utilized"), "utilized");
    }

    #[test]
    fn rule_recognition() {
        assert_eq!(
            RuleEffects::of("Use short sentences."),
            RuleEffects { short_sentences: true, avoid_jargon: false }
        );
        assert_eq!(
            RuleEffects::of("Avoid jargon."),
            RuleEffects { short_sentences: false, avoid_jargon: true }
        );
        assert_eq!(RuleEffects::of("End with a friendly nudge."), RuleEffects::default());
    }

    #[test]
    fn applies_rules_then_signoff() {
        let voice = voice(
            &["Use short sentences.", "Avoid jargon.", "Be warm."],
            Some("— Salon Nova"),
        );
        let styled = apply_brand_voice("We utilize gel, and we optimize color.", &voice);
        assert_eq!(styled, "We use gel. we improve color. — Salon Nova");
        assert!(styled.ends_with("— Salon Nova"));
    }

    #[test]
    fn no_rules_no_signoff_is_identity() {
        let text = "Cancel at least 12 hours in advance; fees apply.";
        assert_eq!(apply_brand_voice(text, &BrandVoice::default()), text);
        assert_eq!(apply_brand_voice(text, &voice(&[], Some(""))), text);
    }

    #[test]
    fn repeated_rules_reapply() {
        let voice = voice(&["short sentences", "short sentences please"], None);
        assert_eq!(apply_brand_voice("A, and B; C", &voice), "A. B. C");
    }
}
