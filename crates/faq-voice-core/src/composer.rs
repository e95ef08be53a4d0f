//! Answer composition from ranked FAQ answers.
//!
//! Composition is driven by [`COMPOSITION_RULES`], an ordered decision list of
//! (question predicate, template) pairs. The first rule whose predicate holds
//! renders the answer. Templates look up the answer parts they need and yield
//! `None` when a part is missing; the composer then falls back to the first
//! answer part.
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{BrandVoice, GeneratedAnswer, ScoredFaqItem};
use crate::stylist::apply_brand_voice;

pub const FALLBACK_ANSWER: &str =
    "I don't have specific information about that. Please call us for details.";

pub const DEFAULT_SATURDAY_HOURS: &str = "10am–4pm";

// ASCII digits and ASCII-only case folding.
static SATURDAY_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u:sat)\s+([0-9]+(?i-u:am)–[0-9]+(?i-u:pm))").expect("valid regex")
});

/// Which words the lower-cased question must contain for a rule to fire.
#[derive(Debug, Clone, Copy)]
pub enum QuestionPredicate {
    /// Every word must appear.
    All(&'static [&'static str]),
    /// At least one word must appear.
    Any(&'static [&'static str]),
    Always,
}

impl QuestionPredicate {
    pub fn matches(&self, question_lower: &str) -> bool {
        match self {
            Self::All(words) => words.iter().all(|w| question_lower.contains(w)),
            Self::Any(words) => words.iter().any(|w| question_lower.contains(w)),
            Self::Always => true,
        }
    }
}

/// How a rule turns answer parts into text.
#[derive(Debug, Clone, Copy)]
pub enum Template {
    /// "Yes, we're open Saturdays {hours}. {policy} Booking is recommended."
    SaturdayWalkIn {
        hours_markers: &'static [&'static str],
        policy_markers: &'static [&'static str],
    },
    /// The first part mentioning a marker, unchanged.
    Verbatim { markers: &'static [&'static str] },
    /// `{prefix}{part lower-cased}.` for the first part mentioning a marker.
    Sentence {
        prefix: &'static str,
        markers: &'static [&'static str],
    },
    FirstPart,
}

impl Template {
    pub fn render(&self, parts: &[&str]) -> Option<String> {
        match self {
            Self::SaturdayWalkIn {
                hours_markers,
                policy_markers,
            } => {
                let hours_part = find_part(parts, hours_markers)?;
                let policy_part = find_part(parts, policy_markers)?;
                let hours = saturday_hours(hours_part).unwrap_or(DEFAULT_SATURDAY_HOURS);
                Some(format!(
                    "Yes, we're open Saturdays {hours}. {policy_part} Booking is recommended."
                ))
            }
            Self::Verbatim { markers } => find_part(parts, markers).map(str::to_string),
            Self::Sentence { prefix, markers } => {
                find_part(parts, markers).map(|part| format!("{prefix}{}.", part.to_lowercase()))
            }
            Self::FirstPart => parts.first().map(|part| part.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompositionRule {
    pub name: &'static str,
    pub when: QuestionPredicate,
    pub template: Template,
}

pub const COMPOSITION_RULES: &[CompositionRule] = &[
    CompositionRule {
        name: "saturday-walk-in",
        when: QuestionPredicate::All(&["saturday", "appointment"]),
        template: Template::SaturdayWalkIn {
            hours_markers: &["sat", "10am"],
            policy_markers: &["walk-in", "appointment"],
        },
    },
    CompositionRule {
        name: "booking",
        when: QuestionPredicate::Any(&["book", "appointment"]),
        template: Template::Verbatim {
            markers: &["website", "call"],
        },
    },
    CompositionRule {
        name: "services",
        when: QuestionPredicate::Any(&["service", "offer"]),
        template: Template::Sentence {
            prefix: "We offer ",
            markers: &["haircut", "coloring"],
        },
    },
    CompositionRule {
        name: "hours",
        when: QuestionPredicate::Any(&["hours", "open"]),
        template: Template::Sentence {
            prefix: "Our hours are ",
            markers: &["mon", "9am"],
        },
    },
    CompositionRule {
        name: "first-answer",
        when: QuestionPredicate::Always,
        template: Template::FirstPart,
    },
];

/// Outcome of running the decision list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// The named rule fired and rendered text.
    Composed { rule: &'static str, text: String },
    /// The named rule fired but a part it needed was missing.
    Unmatched { rule: &'static str },
    /// No answer parts at all.
    Empty,
}

/// Run the decision list: the first rule whose predicate holds decides the
/// outcome, even when its template finds nothing to render.
pub fn compose_with(rules: &[CompositionRule], parts: &[&str], question: &str) -> Composition {
    if parts.is_empty() {
        return Composition::Empty;
    }
    let question_lower = question.to_lowercase();

    let Some(rule) = rules.iter().find(|r| r.when.matches(&question_lower)) else {
        return Composition::Unmatched { rule: "none" };
    };

    match rule.template.render(parts) {
        Some(text) => Composition::Composed {
            rule: rule.name,
            text,
        },
        None => Composition::Unmatched { rule: rule.name },
    }
}

/// Compose the unstyled answer text. An unmatched rule falls back to the
/// first answer part.
pub fn compose_answer(parts: &[&str], question: &str) -> Option<String> {
    match compose_with(COMPOSITION_RULES, parts, question) {
        Composition::Composed { rule, text } => {
            debug!(rule, "composition rule applied");
            Some(text)
        }
        Composition::Unmatched { rule } => {
            debug!(rule, "composition rule found no matching answer, using first answer");
            parts.first().map(|part| part.to_string())
        }
        Composition::Empty => None,
    }
}

/// Build the final answer from ranked items, styled with the brand voice.
///
/// With no ranked items this is the fallback apology and no sources.
pub fn generate_answer(
    ranked: &[ScoredFaqItem],
    voice: &BrandVoice,
    question: &str,
) -> GeneratedAnswer {
    let parts: Vec<&str> = ranked.iter().map(|r| r.item.answer.as_str()).collect();
    let sources: Vec<String> = ranked.iter().map(|r| r.item.id.clone()).collect();

    let Some(composed) = compose_answer(&parts, question) else {
        return GeneratedAnswer {
            answer: apply_brand_voice(FALLBACK_ANSWER, voice),
            sources: Vec::new(),
        };
    };

    GeneratedAnswer {
        answer: apply_brand_voice(&composed, voice),
        sources,
    }
}

/// First part mentioning any marker, compared lower-cased.
pub fn find_part<'a>(parts: &[&'a str], markers: &[&str]) -> Option<&'a str> {
    parts.iter().copied().find(|part| {
        let lower = part.to_lowercase();
        markers.iter().any(|m| lower.contains(m))
    })
}

/// The time range after "Sat" in an hours answer, e.g. "10am–4pm".
pub fn saturday_hours(text: &str) -> Option<&str> {
    SATURDAY_HOURS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FaqItem;

    const HOURS: &str = "Mon–Fri 9am–6pm, Sat 10am–4pm, closed Sunday.";
    const SERVICES: &str = "Haircuts, coloring, styling, and keratin treatments.";
    const WALK_INS: &str = "We prefer appointments, but walk-ins are welcome if a stylist is free.";
    const BOOKING: &str = "Use our website or call 555-0148. We require a credit card to hold your slot.";

    fn ranked(entries: &[(&str, &str)]) -> Vec<ScoredFaqItem> {
        entries
            .iter()
            .map(|(id, answer)| ScoredFaqItem {
                item: FaqItem {
                    id: id.to_string(),
                    question: format!("{id}?"),
                    answer: answer.to_string(),
                },
                relevance_score: 1,
                matched_keywords: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn saturday_with_appointment() {
        let text = compose_answer(&[HOURS, WALK_INS], "Open on Saturday without an appointment?");
        assert_eq!(
            text.as_deref(),
            Some(
                "Yes, we're open Saturdays 10am–4pm. We prefer appointments, but walk-ins are \
                 welcome if a stylist is free. Booking is recommended."
            )
        );
    }

    #[test]
    fn saturday_hours_extraction_and_default() {
        assert_eq!(saturday_hours("Sat 11am–3pm"), Some("11am–3pm"));
        assert_eq!(saturday_hours("SAT  9am–1pm only"), Some("9am–1pm"));
        assert_eq!(saturday_hours("Saturday 10am to 4pm"), None);
        assert_eq!(saturday_hours("Sat 10AM–4PM"), Some("10AM–4PM"));
        // long s folds to "s" under Unicode rules; Arabic-Indic digits are not 0-9
        assert_eq!(saturday_hours("\u{17f}at 10am–4pm"), None);
        assert_eq!(saturday_hours("Sat \u{661}\u{660}am–4pm"), None);

        let text = compose_answer(
            &["Saturday: 10am to 2pm.", "Walk-ins welcome."],
            "saturday appointment?",
        )
        .expect("composed");
        assert!(text.starts_with("Yes, we're open Saturdays 10am–4pm. "));
    }

    #[test]
    fn booking_is_verbatim() {
        let text = compose_answer(&[WALK_INS, BOOKING], "How do I book?");
        assert_eq!(text.as_deref(), Some(BOOKING));
    }

    #[test]
    fn services_and_hours_sentences() {
        assert_eq!(
            compose_answer(&[SERVICES], "What services do you offer?").as_deref(),
            Some("We offer haircuts, coloring, styling, and keratin treatments..")
        );
        assert_eq!(
            compose_answer(&[HOURS], "What are your hours?").as_deref(),
            Some("Our hours are mon–fri 9am–6pm, sat 10am–4pm, closed sunday..")
        );
    }

    #[test]
    fn other_questions_use_first_part() {
        assert_eq!(
            compose_answer(&[WALK_INS, HOURS], "Can I cancel?").as_deref(),
            Some(WALK_INS)
        );
    }

    #[test]
    fn unmatched_rule_is_explicit_and_falls_back() {
        let outcome = compose_with(COMPOSITION_RULES, &[SERVICES], "Can I book?");
        assert_eq!(outcome, Composition::Unmatched { rule: "booking" });
        assert_eq!(compose_answer(&[SERVICES], "Can I book?").as_deref(), Some(SERVICES));
    }

    #[test]
    fn first_matching_rule_wins() {
        // Mentions "book" and "hours": booking comes first in the list.
        let outcome = compose_with(COMPOSITION_RULES, &[HOURS, BOOKING], "What hours can I book?");
        assert_eq!(
            outcome,
            Composition::Composed {
                rule: "booking",
                text: BOOKING.to_string()
            }
        );
    }

    #[test]
    fn empty_parts_compose_nothing() {
        assert_eq!(compose_with(COMPOSITION_RULES, &[], "hours?"), Composition::Empty);
        assert_eq!(compose_answer(&[], "hours?"), None);
    }

    #[test]
    fn fallback_answer_has_no_sources() {
        let voice = BrandVoice {
            style_rules: None,
            signoff: Some("— Salon Nova".to_string()),
        };
        let result = generate_answer(&[], &voice, "Do you have parking?");
        assert_eq!(result.answer, format!("{FALLBACK_ANSWER} — Salon Nova"));
        assert!(result.sources.is_empty());
    }

    #[test]
    fn sources_follow_rank_order() {
        let items = ranked(&[("how-can", BOOKING), ("you-accept", WALK_INS)]);
        let result = generate_answer(&items, &BrandVoice::default(), "Can I book?");
        assert_eq!(result.answer, BOOKING);
        assert_eq!(result.sources, ["how-can", "you-accept"]);
    }
}
