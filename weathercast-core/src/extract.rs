//! Best-effort city name extraction from a free-text chat message.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Trigger phrases, checked in this order. The first trigger that is contained
/// in the message *and* is followed by a name wins, so the short prepositions
/// at the end may still fire on words that merely contain them ("what" → "at").
pub const TRIGGERS: &[&str] = &[
    "weather in",
    "how is weather in",
    "should i go to",
    "travel to",
    "visit",
    "what about",
    "how about",
    "in",
    "at",
    "to",
];

static TRIGGER_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TRIGGERS
        .iter()
        .map(|&trigger| {
            let pattern = format!(r"{}\s+([a-zA-Z\s]+)", regex::escape(trigger));
            let re = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .expect("trigger pattern is a valid regex");
            (trigger, re)
        })
        .collect()
});

static FILLER_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(today|now|please|tonight|tomorrow)\b")
        .expect("filler pattern is a valid regex")
});

/// Guesses the city a message is asking about.
///
/// Returns an empty string when a trigger was found but nothing but filler
/// words followed it. Any result is low confidence; callers decide whether it
/// is worth a lookup.
pub fn extract_city(message: &str) -> String {
    let clean = message.replace(['.', ',', '!', '?'], "");
    let lower = clean.to_lowercase();

    for (trigger, re) in TRIGGER_PATTERNS.iter() {
        if !lower.contains(*trigger) {
            continue;
        }

        if let Some(name) = re.captures(&clean).and_then(|caps| caps.get(1)) {
            let city = FILLER_WORDS.replace_all(name.as_str(), "").trim().to_string();
            tracing::debug!(trigger = *trigger, city = %city, "city extracted by trigger");
            return city;
        }
    }

    let capitalized: Vec<&str> = clean.split(' ').filter(|w| looks_capitalized(w)).collect();
    if !capitalized.is_empty() {
        return capitalized.join(" ");
    }

    clean.rsplit(' ').next().unwrap_or_default().to_string()
}

fn looks_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second)) if first.is_ascii_uppercase() && second.is_ascii_lowercase()
    )
}
