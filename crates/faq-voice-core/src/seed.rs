//! Demo data for the Salon Nova example.
use serde_json::json;

pub const SEED_FAQ: &str = "Q: What services do you offer?
A: Haircuts, coloring, styling, and keratin treatments.

Q: What are your hours?
A: Mon–Fri 9am–6pm, Sat 10am–4pm, closed Sunday.

Q: Do you accept walk-ins?
A: We prefer appointments, but walk-ins are welcome if a stylist is free.

Q: How can I book?
A: Use our website or call 555-0148. We require a credit card to hold your slot.

Q: Cancellation policy?
A: Cancel or reschedule at least 12 hours in advance to avoid a $20 fee.";

pub const SEED_QUESTION: &str =
    "Are you open on Saturdays, and can I come without an appointment?";

pub fn seed_brand_voice() -> serde_json::Value {
    json!({
        "tone": "Warm, concise, reassuring",
        "style_rules": [
            "Use short sentences.",
            "Avoid jargon.",
            "End with a friendly nudge if suitable."
        ],
        "signoff": "— Salon Nova"
    })
}
