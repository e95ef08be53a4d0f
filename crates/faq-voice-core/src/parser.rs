use crate::model::FaqItem;

const QUESTION_MARKER: &str = "Q:";
const ANSWER_MARKER: &str = "A:";
const FALLBACK_ID: &str = "question";

/// Parse loosely formatted `Q:`/`A:` text into FAQ items.
///
/// Blank lines and lines without a marker are ignored. Only the most recent
/// `A:` line is kept for a question, and a question without an answer is
/// dropped when the next question starts or the input ends.
pub fn parse_faq(content: &str) -> Vec<FaqItem> {
    let mut items = Vec::new();
    let mut pending = PendingItem::default();

    for line in content.lines().map(trim_text).filter(|l| !l.is_empty()) {
        if let Some(rest) = line.strip_prefix(QUESTION_MARKER) {
            items.extend(pending.take());
            pending.question = Some(trim_text(rest).to_string());
        } else if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
            pending.answer = Some(trim_text(rest).to_string());
        }
    }
    items.extend(pending.take());

    items
}

/// Render items back into `Q:`/`A:` text that [`parse_faq`] reads unchanged.
pub fn render_faq(items: &[FaqItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{QUESTION_MARKER} {}\n{ANSWER_MARKER} {}",
                item.question, item.answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Whitespace trim that also drops byte order marks.
fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Short slug made of the first two words longer than two characters.
pub fn question_id(question: &str) -> String {
    let cleaned: String = question
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|w| w.len() > 2)
        .take(2)
        .collect();

    if words.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        words.join("-")
    }
}

#[derive(Default)]
struct PendingItem {
    question: Option<String>,
    answer: Option<String>,
}

impl PendingItem {
    /// Reset the buffer, yielding an item if both halves are non-empty.
    fn take(&mut self) -> Option<FaqItem> {
        let (question, answer) = (self.question.take(), self.answer.take());
        let question = question.filter(|q| !q.is_empty())?;
        let answer = answer.filter(|a| !a.is_empty())?;
        Some(FaqItem {
            id: question_id(&question),
            question,
            answer,
        })
    }
}
