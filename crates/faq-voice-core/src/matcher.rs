use crate::model::{FaqItem, ScoredFaqItem};

/// A named group of keywords that signal the same topic.
#[derive(Debug, Clone, Copy)]
pub struct KeywordCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Categories are checked in this order, which fixes the order of `matched_keywords`.
pub const KEYWORD_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        name: "saturday",
        keywords: &["saturday", "sat", "weekend"],
    },
    KeywordCategory {
        name: "hours",
        keywords: &["hours", "open", "time", "when"],
    },
    KeywordCategory {
        name: "walk-ins",
        keywords: &["walk-in", "walk in", "appointment", "without appointment"],
    },
    KeywordCategory {
        name: "services",
        keywords: &["service", "offer", "do", "what"],
    },
    KeywordCategory {
        name: "booking",
        keywords: &["book", "schedule", "appointment", "reserve"],
    },
    KeywordCategory {
        name: "cancellation",
        keywords: &["cancel", "reschedule", "change", "policy"],
    },
];

/// Score every item against the question and return the relevant ones,
/// highest score first. Items with equal scores keep their parse order.
pub fn find_relevant(items: &[FaqItem], question: &str) -> Vec<ScoredFaqItem> {
    find_relevant_with(KEYWORD_CATEGORIES, items, question)
}

pub fn find_relevant_with(
    categories: &[KeywordCategory],
    items: &[FaqItem],
    question: &str,
) -> Vec<ScoredFaqItem> {
    let question_lower = question.to_lowercase();

    let mut relevant: Vec<ScoredFaqItem> = items
        .iter()
        .filter_map(|item| score_item(categories, item, &question_lower))
        .collect();

    // `sort_by` is stable, so ties stay in parse order.
    relevant.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    relevant
}

fn score_item(
    categories: &[KeywordCategory],
    item: &FaqItem,
    question_lower: &str,
) -> Option<ScoredFaqItem> {
    let item_question = item.question.to_lowercase();
    let item_answer = item.answer.to_lowercase();

    let mut relevance_score = 0;
    let mut matched_keywords: Vec<String> = Vec::new();

    for category in categories {
        for keyword in category.keywords {
            if !question_lower.contains(keyword) {
                continue;
            }
            if item_question.contains(keyword) || item_answer.contains(keyword) {
                relevance_score += 1;
                if !matched_keywords.iter().any(|k| k == category.name) {
                    matched_keywords.push(category.name.to_string());
                }
            }
        }
    }

    (relevance_score > 0).then(|| ScoredFaqItem {
        item: item.clone(),
        relevance_score,
        matched_keywords,
    })
}
