//! Intent classification by fixed phrase and verb heuristics.

use crate::model::item::Intent;

/// Imperative verbs that mark a sentence as a task when they lead it.
pub const ACTION_VERBS: &[&str] = &[
    "bel",
    "mail",
    "stuur",
    "plan",
    "maak",
    "vraag",
    "check",
    "controleer",
    "regel",
    "boek",
    "koop",
    "betaal",
    "herinner",
    "breng",
    "haal",
    "bestel",
    "fix",
    "neem",
    "schrijf",
    "werk",
    "overleg",
    "vergader",
    "contacteer",
];

const AGENDA_PHRASE: &str = "te bespreken";
const IDEA_PREFIXES: &[&str] = &["idee", "misschien"];
const OBLIGATION_WORD: &str = "moet";

/// Classifies one cleaned sentence. First matching rule wins:
/// agenda phrase, idea prefix, leading action verb, obligation word, note.
pub fn classify(sentence: &str) -> Intent {
    let lower = sentence.to_lowercase();

    if lower.contains(AGENDA_PHRASE) {
        return Intent::Agenda;
    }
    if IDEA_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return Intent::Idea;
    }

    let first_token = lower.split(' ').next().unwrap_or_default();
    if ACTION_VERBS.contains(&first_token) {
        return Intent::Task;
    }
    if lower.contains(OBLIGATION_WORD) {
        return Intent::Task;
    }

    Intent::Note
}
